//! Persistence bridge between the in-memory list and durable storage.
//!
//! One storage key holds the JSON-encoded array of items. The bridge reads it
//! once at startup and overwrites it in its entirety after every state
//! change. Startup never fails: an absent, unreadable, or unparseable value
//! all load as the empty list.

use crate::types::TodoList;
use std::sync::Arc;
use todolist_core::storage::{Storage, StorageError};

/// Storage key under which the list is persisted
pub const STORAGE_KEY: &str = "todolist";

/// Read/write boundary between the in-memory list and the storage backend
#[derive(Clone)]
pub struct PersistenceBridge {
    storage: Arc<dyn Storage>,
}

impl PersistenceBridge {
    /// Creates a bridge over the given storage backend
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Loads the persisted list, or an empty list if there is none
    ///
    /// A value that cannot be read or parsed is treated identically to an
    /// absent value, with a warning logged; load never propagates a failure.
    #[must_use]
    pub fn load(&self) -> TodoList {
        let raw = match self.storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return TodoList::new(),
            Err(error) => {
                tracing::warn!(%error, "could not read stored todo list; starting empty");
                return TodoList::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(list) => list,
            Err(error) => {
                tracing::warn!(%error, "stored todo list is not valid; starting empty");
                TodoList::new()
            }
        }
    }

    /// Serializes the full list and overwrites the storage key
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] if the list cannot be encoded or the
    /// backend rejects the write.
    pub fn save(&self, list: &TodoList) -> Result<(), StorageError> {
        let encoded =
            serde_json::to_string(list).map_err(|error| StorageError::Write(error.to_string()))?;
        self.storage.set(STORAGE_KEY, &encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TodoId, TodoItem};
    use todolist_core::storage::MemoryStorage;
    use todolist_testing::mocks::FailingStorage;

    fn sample_list() -> TodoList {
        [
            TodoItem::new(TodoId::from("b"), "Walk dog".to_owned()),
            TodoItem {
                id: TodoId::from("a"),
                content: "Buy milk".to_owned(),
                done: true,
            },
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn load_absent_key_returns_empty_list() {
        let bridge = PersistenceBridge::new(Arc::new(MemoryStorage::new()));
        assert!(bridge.load().is_empty());
    }

    #[test]
    fn load_corrupt_value_returns_empty_list() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(STORAGE_KEY, "definitely not json").unwrap();

        let bridge = PersistenceBridge::new(storage);
        assert!(bridge.load().is_empty());
    }

    #[test]
    fn load_read_failure_returns_empty_list() {
        let bridge = PersistenceBridge::new(Arc::new(FailingStorage));
        assert!(bridge.load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let bridge = PersistenceBridge::new(Arc::new(MemoryStorage::new()));
        let list = sample_list();

        bridge.save(&list).unwrap();
        assert_eq!(bridge.load(), list);
    }

    #[test]
    fn save_overwrites_the_whole_value() {
        let storage = Arc::new(MemoryStorage::new());
        let bridge = PersistenceBridge::new(Arc::clone(&storage) as Arc<dyn Storage>);

        bridge.save(&sample_list()).unwrap();
        bridge.save(&TodoList::new()).unwrap();

        assert_eq!(storage.get(STORAGE_KEY).unwrap().as_deref(), Some("[]"));
        assert!(bridge.load().is_empty());
    }

    #[test]
    fn save_surfaces_backend_write_errors() {
        let bridge = PersistenceBridge::new(Arc::new(FailingStorage));
        assert!(bridge.save(&sample_list()).is_err());
    }
}
