//! # Todolist Core
//!
//! Core traits and types for the todolist state container.
//!
//! This crate provides the fundamental abstractions shared by the runtime and
//! the application crate:
//!
//! - **Reducer**: pure function `(State, Action, Environment) → Effects`
//! - **Effect**: side effect descriptions (not execution)
//! - **Environment**: injected dependencies via traits
//! - **Storage**: the get/set string-blob boundary behind persistence
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden I/O)
//! - Dependency Injection via Environment

// Re-export commonly used types
pub use smallvec::{SmallVec, smallvec};

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → Effects`.
/// They contain all mutation logic and are deterministic and testable.
pub mod reducer {
    use super::SmallVec;
    use super::effect::Effect;

    /// The Reducer trait - core abstraction for state transitions
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for TodoReducer {
    ///     type State = TodoList;
    ///     type Action = TodoAction;
    ///     type Environment = TodoEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut TodoList,
    ///         action: TodoAction,
    ///         env: &TodoEnvironment,
    ///     ) -> SmallVec<[Effect; 4]> {
    ///         match action {
    ///             TodoAction::Remove { id } => {
    ///                 if state.remove(&id) {
    ///                     smallvec![Effect::Persist]
    ///                 } else {
    ///                     SmallVec::new()
    ///                 }
    ///             }
    ///             // ...
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effect descriptions
        ///
        /// This is a pure function that:
        /// 1. Validates the action (invalid input is absorbed as a no-op)
        /// 2. Updates state through the exclusive reference
        /// 3. Returns effect descriptions to be executed by the runtime
        ///
        /// An empty effect list marks a no-op transition: the state value is
        /// unchanged and nothing needs to be written through to storage.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the runtime. They are
/// values (not execution): reducers stay pure and the Store decides when and
/// how to run them.
pub mod effect {
    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what
    /// should happen, returned from reducers and executed by the Store
    /// runtime after the state update is applied.
    ///
    /// Persistence is the only side effect this system has, so the alphabet
    /// is closed over it.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum Effect {
        /// No-op effect
        None,

        /// Write the current state through to durable storage
        ///
        /// Emitted after every successful (non-no-op) transition. The runtime
        /// executes it before the new state becomes observable, so every
        /// observed state change is persisted in the order changes occurred.
        Persist,
    }

    impl Effect {
        /// Whether this effect requests a write-through to storage
        #[must_use]
        pub const fn is_persist(self) -> bool {
            matches!(self, Self::Persist)
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected via
/// the Environment parameter of the reducer.
pub mod environment {
    use uuid::Uuid;

    /// `IdGenerator` trait - abstracts identifier generation for testability
    ///
    /// Production code draws random 128-bit identifiers; tests inject a
    /// deterministic generator so expected ids can be asserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use todolist_core::environment::{IdGenerator, RandomIdGenerator};
    ///
    /// let ids = RandomIdGenerator;
    /// assert_ne!(ids.generate(), ids.generate());
    /// ```
    pub trait IdGenerator: Send + Sync {
        /// Generate a fresh identifier
        ///
        /// Identifiers must be unique with overwhelming probability across
        /// the lifetime of a list; no ordering guarantee is required.
        fn generate(&self) -> Uuid;
    }

    /// Production identifier generator backed by UUID v4
    #[derive(Clone, Copy, Debug, Default)]
    pub struct RandomIdGenerator;

    impl IdGenerator for RandomIdGenerator {
        fn generate(&self) -> Uuid {
            Uuid::new_v4()
        }
    }
}

/// Storage module - the durable key-value boundary
///
/// The actual storage implementation (a browser's local storage, a file, a
/// database) is an external collaborator. This module models it as a simple
/// get/set string-blob facility; everything above it treats reads and writes
/// as synchronous and non-blocking.
pub mod storage {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use thiserror::Error;

    /// Errors surfaced by a storage backend
    ///
    /// Callers above the persistence bridge never see these: a failed read is
    /// treated as absent state and a failed write is logged and absorbed.
    #[derive(Debug, Error)]
    pub enum StorageError {
        /// The backend failed to read the value at a key
        #[error("storage read failed: {0}")]
        Read(String),

        /// The backend failed to write the value at a key
        #[error("storage write failed: {0}")]
        Write(String),
    }

    /// Storage trait - a single-writer key-value blob store
    ///
    /// `set` overwrites the key's value in its entirety; there are no
    /// incremental or transactional writes. Last-write-wins.
    pub trait Storage: Send + Sync {
        /// Read the raw string stored at `key`, if any
        ///
        /// # Errors
        ///
        /// Returns [`StorageError::Read`] if the backend cannot be read.
        fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

        /// Overwrite the value at `key` with `value`
        ///
        /// # Errors
        ///
        /// Returns [`StorageError::Write`] if the backend cannot be written.
        fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    }

    /// In-memory reference implementation
    ///
    /// Behaves like a local-storage area scoped to the process: a flat map of
    /// string keys to string blobs. Used by tests and anywhere a durable
    /// backend is not wired in.
    #[derive(Debug, Default)]
    pub struct MemoryStorage {
        entries: Mutex<HashMap<String, String>>,
    }

    impl MemoryStorage {
        /// Create an empty storage area
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl Storage for MemoryStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            let entries = self
                .entries
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            Ok(entries.get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            let mut entries = self
                .entries
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            entries.insert(key.to_owned(), value.to_owned());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::effect::Effect;
    use super::environment::{IdGenerator, RandomIdGenerator};
    use super::storage::{MemoryStorage, Storage};

    #[test]
    fn effect_is_persist() {
        assert!(Effect::Persist.is_persist());
        assert!(!Effect::None.is_persist());
    }

    #[test]
    fn random_ids_do_not_collide() {
        let ids = RandomIdGenerator;
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            assert!(seen.insert(ids.generate()));
        }
    }

    #[test]
    fn memory_storage_get_absent() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("todolist").unwrap(), None);
    }

    #[test]
    fn memory_storage_set_overwrites() {
        let storage = MemoryStorage::new();
        storage.set("todolist", "[]").unwrap();
        storage.set("todolist", r#"[{"id":"a"}]"#).unwrap();
        assert_eq!(
            storage.get("todolist").unwrap().as_deref(),
            Some(r#"[{"id":"a"}]"#)
        );
    }
}
