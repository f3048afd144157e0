//! Reducer logic for the todo list.
//!
//! The reducer is the only place list mutations happen: validate the action,
//! apply the change, and describe the write-through. Invalid input (blank or
//! over-length content, unmatched ids) is absorbed as a no-op rather than
//! surfaced as an error; the public action layer validates before dispatch,
//! and the reducer independently re-validates so it is safe to call directly.

use crate::types::{MAX_CONTENT_LEN, TodoId, TodoItem, TodoList};
use std::sync::Arc;
use todolist_core::{
    SmallVec, effect::Effect, environment::IdGenerator, reducer::Reducer, smallvec,
};

/// Actions on the todo list
///
/// A closed sum type: the reducer matches it exhaustively, so there is no
/// reachable "unrecognized action" fallthrough.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoAction {
    /// Prepend a new item with the given content
    Add {
        /// Text content; trimmed before insertion
        content: String,
    },

    /// Replace the content of an existing item
    Edit {
        /// Item to edit
        id: TodoId,
        /// Replacement content; trimmed before applying
        content: String,
    },

    /// Remove an item
    Remove {
        /// Item to remove
        id: TodoId,
    },

    /// Flip an item's done flag
    Toggle {
        /// Item to toggle
        id: TodoId,
    },
}

/// Environment dependencies for the todo reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Generator for fresh item identifiers
    pub ids: Arc<dyn IdGenerator>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }
}

/// Reducer for the todo list
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates content, returning the trimmed text if usable
    ///
    /// Content is usable when it is non-empty after trimming and at most
    /// [`MAX_CONTENT_LEN`] characters long.
    fn valid_content(content: &str) -> Option<&str> {
        let trimmed = content.trim();
        if trimmed.is_empty() || trimmed.chars().count() > MAX_CONTENT_LEN {
            None
        } else {
            Some(trimmed)
        }
    }
}

impl Reducer for TodoReducer {
    type State = TodoList;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect; 4]> {
        match action {
            TodoAction::Add { content } => {
                let Some(trimmed) = Self::valid_content(&content) else {
                    return SmallVec::new();
                };

                let id = TodoId::from_uuid(env.ids.generate());
                state.prepend(TodoItem::new(id, trimmed.to_owned()));
                smallvec![Effect::Persist]
            }

            TodoAction::Edit { id, content } => {
                let Some(trimmed) = Self::valid_content(&content) else {
                    return SmallVec::new();
                };
                let Some(item) = state.item_mut(&id) else {
                    return SmallVec::new();
                };

                // Position and done flag untouched.
                item.content = trimmed.to_owned();
                smallvec![Effect::Persist]
            }

            TodoAction::Remove { id } => {
                if state.remove(&id) {
                    smallvec![Effect::Persist]
                } else {
                    SmallVec::new()
                }
            }

            TodoAction::Toggle { id } => {
                let Some(item) = state.item_mut(&id) else {
                    return SmallVec::new();
                };

                item.done = !item.done;
                smallvec![Effect::Persist]
            }
        }
    }
}
