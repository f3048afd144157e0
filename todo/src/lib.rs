//! Single-user todo list: a reducer-driven state store with write-through
//! persistence.
//!
//! The list lives in memory inside a [`TodoStore`]; every mutation goes
//! through a pure reducer ([`TodoReducer`]) and is written through to a
//! single storage key as a JSON array. There is no server, no concurrency
//! beyond one writer, and no persistence beyond that one key.
//!
//! - Items are `{id, content, done}`; the list is ordered newest first.
//! - Invalid input (blank content, unknown ids) is absorbed as a no-op.
//! - A missing or corrupt stored value loads as the empty list; startup
//!   never fails.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use todolist::TodoStore;
//! use todolist_core::storage::MemoryStorage;
//!
//! # async fn example() {
//! let store = TodoStore::open(Arc::new(MemoryStorage::new()));
//!
//! store.add_todo_item("Buy milk").await;
//! store.add_todo_item("Walk dog").await;
//!
//! let list = store.todo_list().await;
//! assert_eq!(list.items()[0].content, "Walk dog"); // newest first
//!
//! let id = list.items()[1].id.clone();
//! store.toggle_todo_item(&id).await;
//! # }
//! ```

pub mod persistence;
pub mod reducer;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use persistence::{PersistenceBridge, STORAGE_KEY};
pub use reducer::{TodoAction, TodoEnvironment, TodoReducer};
pub use store::TodoStore;
pub use types::{MAX_CONTENT_LEN, TodoId, TodoItem, TodoList};
