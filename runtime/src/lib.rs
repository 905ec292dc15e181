//! # Todo Board Runtime
//!
//! Runtime implementation for the todo-board reducer architecture.
//!
//! This crate provides the Store runtime that coordinates reducer execution
//! and the feedback loop for actions requested by effects.
//!
//! ## Core Components
//!
//! - **Store**: The runtime that owns state and runs actions to completion
//! - **Feedback loop**: `Effect::Send` actions are reduced before `send` returns
//!
//! ## Example
//!
//! ```ignore
//! use todo_board_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use todo_board_core::reducer::Reducer;
use tokio::sync::RwLock;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    ///
    /// `E` is the reducer's own error type.
    #[derive(Error, Debug)]
    pub enum StoreError<E> {
        /// The reducer refused an action
        ///
        /// State is left as it was before the refused action. Feedback actions
        /// reduced earlier in the same `send` stay applied.
        #[error("Reducer rejected action: {0}")]
        Reducer(#[source] E),

        /// Store is shutting down and not accepting new actions
        #[error("Store is shutting down")]
        ShutdownInProgress,

        /// A single `send` produced more feedback actions than allowed
        #[error("Feedback limit of {0} actions exceeded")]
        FeedbackLimit(usize),
    }

    impl<E> StoreError<E> {
        /// Returns the reducer error, if this is one
        #[must_use]
        pub const fn reducer_error(&self) -> Option<&E> {
            match self {
                Self::Reducer(error) => Some(error),
                Self::ShutdownInProgress | Self::FeedbackLimit(_) => None,
            }
        }
    }
}

pub use error::StoreError;

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use todo_board_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_max_feedback_actions(8);
/// assert_eq!(config.max_feedback_actions, 8);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Maximum number of feedback actions reduced within one `send`
    pub max_feedback_actions: usize,
}

impl StoreConfig {
    /// Set the feedback action limit
    #[must_use]
    pub const fn with_max_feedback_actions(mut self, limit: usize) -> Self {
        self.max_feedback_actions = limit;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_feedback_actions: 64,
        }
    }
}

/// Store module - The runtime for reducers
pub mod store {
    use super::{Arc, AtomicBool, Ordering, Reducer, RwLock, StoreConfig, StoreError, VecDeque};

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Feedback actions requested through `Effect::Send`
    ///
    /// Every `send` holds the write lock from the first reducer call until the
    /// last feedback action is reduced, so actions never interleave.
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
        reducer: Arc<R>,
        environment: Arc<E>,
        config: StoreConfig,
        shutdown: Arc<AtomicBool>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        A: std::fmt::Debug,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses the default [`StoreConfig`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new store with a custom configuration
        #[must_use]
        pub fn with_config(initial_state: S, reducer: R, environment: E, config: StoreConfig) -> Self {
            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer: Arc::new(reducer),
                environment: Arc::new(environment),
                config,
                shutdown: Arc::new(AtomicBool::new(false)),
            }
        }

        /// Stop accepting actions
        ///
        /// Any later `send` returns [`StoreError::ShutdownInProgress`]. State stays
        /// readable.
        pub fn shutdown(&self) {
            tracing::info!("Store shutting down");
            self.shutdown.store(true, Ordering::Release);
        }

        /// Returns true once [`Store::shutdown`] has been called
        #[must_use]
        pub fn is_shutdown(&self) -> bool {
            self.shutdown.load(Ordering::Acquire)
        }

        /// Send an action to the store
        ///
        /// 1. Acquires write lock on state
        /// 2. Calls reducer with (state, action, environment)
        /// 3. Reduces every feedback action the returned effects request, in order
        /// 4. Releases the lock
        ///
        /// # Errors
        ///
        /// - [`StoreError::ShutdownInProgress`] if the store is shutting down
        /// - [`StoreError::Reducer`] if the reducer rejected the action or one of
        ///   its feedback actions
        /// - [`StoreError::FeedbackLimit`] if the feedback loop did not settle
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<(), StoreError<R::Error>> {
            if self.is_shutdown() {
                tracing::warn!(?action, "Rejecting action, store is shutting down");
                return Err(StoreError::ShutdownInProgress);
            }

            let mut state = self.state.write().await;
            let mut queue = VecDeque::from([action]);
            let mut feedback_count = 0usize;

            while let Some(action) = queue.pop_front() {
                tracing::debug!(?action, "Reducing action");
                let effects = self
                    .reducer
                    .reduce(&mut state, action, &self.environment)
                    .map_err(|error| {
                        tracing::error!(%error, "Reducer rejected action");
                        StoreError::Reducer(error)
                    })?;

                for effect in effects {
                    for feedback in effect.into_actions() {
                        feedback_count += 1;
                        if feedback_count > self.config.max_feedback_actions {
                            tracing::error!(
                                limit = self.config.max_feedback_actions,
                                "Feedback loop did not settle"
                            );
                            return Err(StoreError::FeedbackLimit(
                                self.config.max_feedback_actions,
                            ));
                        }
                        queue.push_back(feedback);
                    }
                }
            }

            Ok(())
        }

        /// Read current state via a closure
        ///
        /// Access state through a closure to ensure the lock is released promptly:
        ///
        /// ```ignore
        /// let count = store.state(|s| s.todos.len()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&*state)
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: Arc::clone(&self.reducer),
                environment: Arc::clone(&self.environment),
                config: self.config.clone(),
                shutdown: Arc::clone(&self.shutdown),
            }
        }
    }
}

pub use store::Store;
