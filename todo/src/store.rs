//! The public handle over the todo list store.
//!
//! `TodoStore` wires the reducer, environment, and persistence bridge into a
//! runtime Store and exposes the four named operations plus a read accessor.
//! The storage backend is injected at construction; there is no global or
//! ambient store instance. Components that need the list receive a handle (or
//! a clone of it) explicitly.

use crate::persistence::PersistenceBridge;
use crate::reducer::{TodoAction, TodoEnvironment, TodoReducer};
use crate::types::{TodoId, TodoList};
use std::sync::Arc;
use todolist_core::environment::RandomIdGenerator;
use todolist_core::storage::Storage;
use todolist_runtime::Store;

/// Handle over the todo list state store
///
/// Cheap to clone; clones share the same underlying state. All mutations go
/// through the reducer and are written through to storage in dispatch order.
#[derive(Clone)]
pub struct TodoStore {
    inner: Store<TodoList, TodoAction, TodoEnvironment, TodoReducer>,
}

impl TodoStore {
    /// Opens a store over the given storage backend
    ///
    /// Loads the persisted list once (empty if absent or corrupt) and uses
    /// random identifiers for new items.
    #[must_use]
    pub fn open(storage: Arc<dyn Storage>) -> Self {
        Self::with_environment(storage, TodoEnvironment::new(Arc::new(RandomIdGenerator)))
    }

    /// Opens a store with an explicit environment
    ///
    /// Lets callers inject a deterministic id generator.
    #[must_use]
    pub fn with_environment(storage: Arc<dyn Storage>, environment: TodoEnvironment) -> Self {
        let bridge = PersistenceBridge::new(storage);
        let initial = bridge.load();

        let inner = Store::new(initial, TodoReducer::new(), environment)
            .with_persist(Arc::new(move |list: &TodoList| bridge.save(list)));

        Self { inner }
    }

    /// Adds a new item with the given content
    ///
    /// Blank content is rejected here, before dispatch; the reducer
    /// re-validates (including the length bound) and absorbs anything
    /// invalid as a no-op.
    pub async fn add_todo_item(&self, content: &str) {
        if content.trim().is_empty() {
            return;
        }

        self.inner
            .send(TodoAction::Add {
                content: content.to_owned(),
            })
            .await;
    }

    /// Replaces the content of the item with the given identifier
    ///
    /// Blank content and unknown identifiers leave the list unchanged.
    pub async fn edit_todo_item(&self, id: &TodoId, content: &str) {
        if content.trim().is_empty() {
            return;
        }

        self.inner
            .send(TodoAction::Edit {
                id: id.clone(),
                content: content.to_owned(),
            })
            .await;
    }

    /// Removes the item with the given identifier, if present
    pub async fn remove_todo_item(&self, id: &TodoId) {
        self.inner
            .send(TodoAction::Remove { id: id.clone() })
            .await;
    }

    /// Flips the done flag of the item with the given identifier, if present
    pub async fn toggle_todo_item(&self, id: &TodoId) {
        self.inner
            .send(TodoAction::Toggle { id: id.clone() })
            .await;
    }

    /// Returns a snapshot of the current list, newest first
    pub async fn todo_list(&self) -> TodoList {
        self.inner.state(Clone::clone).await
    }
}
