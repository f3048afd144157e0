//! # Todolist Runtime
//!
//! Runtime implementation for the todolist state container.
//!
//! This crate provides the Store: the single owner of the in-memory state.
//! It coordinates reducer execution and runs the effects a transition
//! produces — here, the write-through to durable storage.
//!
//! ## Core Components
//!
//! - **Store**: owns the state, serializes dispatches, executes effects
//! - **Persist hook**: the write-through boundary installed by the caller
//!
//! ## Dispatch model
//!
//! All mutations occur sequentially: `send` acquires the write lock, runs the
//! reducer synchronously to completion, then executes the returned effects in
//! order while still holding the lock. Every observed state change is
//! therefore persisted, in the order changes occurred, before any reader can
//! see it.
//!
//! ## Example
//!
//! ```ignore
//! use todolist_runtime::Store;
//!
//! let store = Store::new(initial_list, TodoReducer::new(), environment)
//!     .with_persist(Arc::new(move |list| bridge.save(list)));
//!
//! store.send(TodoAction::Add { content: "Buy milk".into() }).await;
//! let list = store.state(Clone::clone).await;
//! ```

use std::sync::Arc;
use todolist_core::{effect::Effect, reducer::Reducer, storage::StorageError};
use tokio::sync::RwLock;

/// Write-through persistence hook
///
/// Called by the store with the post-transition state whenever a reducer
/// returns [`Effect::Persist`]. A hook failure is logged and absorbed; it
/// never halts the store or surfaces to the dispatcher.
pub type PersistHook<S> = Arc<dyn Fn(&S) -> Result<(), StorageError> + Send + Sync>;

/// The Store - runtime coordinator for a reducer
///
/// The Store manages:
/// 1. State (behind an async `RwLock`, exactly one writer: the dispatch path)
/// 2. Reducer (mutation logic)
/// 3. Environment (injected dependencies)
/// 4. Effect execution (write-through persistence)
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: Arc<RwLock<S>>,
    reducer: R,
    environment: E,
    persist: Option<PersistHook<S>>,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Send + Sync,
    S: Send + Sync,
    A: Send,
    E: Send + Sync,
{
    /// Create a new store with initial state, reducer, and environment
    ///
    /// The store starts without a persist hook; transitions mutate in-memory
    /// state only. Install write-through persistence with [`with_persist`].
    ///
    /// [`with_persist`]: Store::with_persist
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer,
            environment,
            persist: None,
        }
    }

    /// Install a write-through persistence hook
    ///
    /// The hook runs after every transition whose reducer returned
    /// [`Effect::Persist`], while the write lock is still held, so writes
    /// happen in dispatch order.
    #[must_use]
    pub fn with_persist(mut self, hook: PersistHook<S>) -> Self {
        self.persist = Some(hook);
        self
    }

    /// Send an action to the store
    ///
    /// This is the primary way to interact with the store:
    /// 1. Acquires the write lock on state
    /// 2. Calls the reducer with (state, action, environment)
    /// 3. Executes returned effects in order
    ///
    /// Dispatches from concurrent callers serialize at the write lock; each
    /// one runs to completion (including its effects) before the next begins.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub async fn send(&self, action: A) {
        let mut state = self.state.write().await;
        let effects = self.reducer.reduce(&mut state, action, &self.environment);

        if effects.is_empty() {
            tracing::debug!("action absorbed as no-op");
            return;
        }

        for effect in effects {
            match effect {
                Effect::None => {}
                Effect::Persist => self.run_persist(&state),
            }
        }
    }

    /// Read from the current state
    ///
    /// Applies `f` to the state under the read lock and returns the result.
    /// Use `store.state(Clone::clone)` for a full snapshot.
    pub async fn state<T>(&self, f: impl FnOnce(&S) -> T) -> T {
        let state = self.state.read().await;
        f(&state)
    }

    fn run_persist(&self, state: &S) {
        let Some(hook) = &self.persist else {
            return;
        };

        if let Err(error) = hook(state) {
            // Persistence is fire-and-forget: the in-memory transition has
            // already been applied and must stay visible.
            tracing::warn!(%error, "write-through persistence failed");
        } else {
            tracing::debug!("state change written through to storage");
        }
    }
}

impl<S, A, E, R> Clone for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone,
    E: Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: self.reducer.clone(),
            environment: self.environment.clone(),
            persist: self.persist.clone(),
        }
    }
}
