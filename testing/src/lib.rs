//! # Todolist Testing
//!
//! Testing utilities and helpers for the todolist state container.
//!
//! This crate provides:
//! - Mock implementations of Environment and Storage traits
//! - A fluent Given-When-Then harness for reducers
//! - Assertion helpers for effect lists
//!
//! ## Example
//!
//! ```ignore
//! use todolist_testing::{ReducerTest, assertions, mocks::sequential_ids};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(TodoEnvironment::new(Arc::new(sequential_ids())))
//!     .given_state(TodoList::new())
//!     .when_action(TodoAction::Add { content: "Buy milk".into() })
//!     .then_state(|list| assert_eq!(list.len(), 1))
//!     .then_effects(assertions::assert_persists)
//!     .run();
//! ```


pub use reducer_test::{ReducerTest, assertions};

/// Mock implementations of Environment and Storage traits
///
/// Deterministic stand-ins for the injected dependencies: predictable
/// identifiers and a storage backend that always fails.
pub mod mocks {
    use std::sync::atomic::{AtomicU64, Ordering};
    use todolist_core::environment::IdGenerator;
    use todolist_core::storage::{Storage, StorageError};
    use uuid::Uuid;

    /// Deterministic identifier generator for tests
    ///
    /// Hands out identifiers counting up from 1, making generated ids
    /// predictable and assertable.
    ///
    /// # Example
    ///
    /// ```
    /// use todolist_testing::mocks::SequentialIdGenerator;
    /// use todolist_core::environment::IdGenerator;
    /// use uuid::Uuid;
    ///
    /// let ids = SequentialIdGenerator::new();
    /// assert_eq!(ids.generate(), Uuid::from_u128(1));
    /// assert_eq!(ids.generate(), Uuid::from_u128(2));
    /// ```
    #[derive(Debug, Default)]
    pub struct SequentialIdGenerator {
        next: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Create a generator whose first identifier is 1
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn generate(&self) -> Uuid {
            let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
            Uuid::from_u128(u128::from(n))
        }
    }

    /// Create a default sequential id generator for tests
    #[must_use]
    pub fn sequential_ids() -> SequentialIdGenerator {
        SequentialIdGenerator::new()
    }

    /// Storage backend where every operation fails
    ///
    /// Used to verify the hardened failure paths: loads fall back to an
    /// empty list and failed writes are absorbed without surfacing.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct FailingStorage;

    impl Storage for FailingStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read(format!("storage offline: {key}")))
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write(format!("storage offline: {key}")))
        }
    }
}
