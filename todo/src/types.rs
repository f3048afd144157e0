//! Domain types for the todo list.
//!
//! A todo list is an ordered sequence of short text items, newest first.
//! These types also define the persisted layout: the list serializes as a
//! bare JSON array of `{id, content, done}` objects.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum content length in characters, after trimming
pub const MAX_CONTENT_LEN: usize = 50;

/// Unique identifier for a todo item
///
/// Identifiers are opaque strings. New ones are rendered from random 128-bit
/// UUIDs, but deserialization accepts any string so that previously stored
/// lists round-trip regardless of how their ids were produced.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoId(String);

impl TodoId {
    /// Creates a `TodoId` from a UUID
    #[must_use]
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id.to_string())
    }

    /// Returns the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TodoId {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl From<String> for TodoId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier, generated at creation
    pub id: TodoId,
    /// Text content, 1-50 characters, trimmed
    pub content: String,
    /// Whether the item is marked complete
    pub done: bool,
}

impl TodoItem {
    /// Creates a new, not-yet-done todo item
    #[must_use]
    pub const fn new(id: TodoId, content: String) -> Self {
        Self {
            id,
            content,
            done: false,
        }
    }
}

/// The ordered todo list, newest first
///
/// New items are prepended; edit, toggle, and remove preserve the relative
/// order of the remaining items. Serializes transparently as the JSON array
/// of its items.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    /// Creates an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns the number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the items in order, newest first
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Returns the item with the given identifier
    #[must_use]
    pub fn get(&self, id: &TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == *id)
    }

    /// Whether an item with the given identifier exists
    #[must_use]
    pub fn contains(&self, id: &TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Inserts an item at the front of the list
    pub(crate) fn prepend(&mut self, item: TodoItem) {
        self.items.insert(0, item);
    }

    /// Returns a mutable reference to the item with the given identifier
    pub(crate) fn item_mut(&mut self, id: &TodoId) -> Option<&mut TodoItem> {
        self.items.iter_mut().find(|item| item.id == *id)
    }

    /// Removes the item with the given identifier, reporting whether it existed
    pub(crate) fn remove(&mut self, id: &TodoId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != *id);
        self.items.len() < before
    }
}

impl FromIterator<TodoItem> for TodoList {
    fn from_iter<I: IntoIterator<Item = TodoItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
