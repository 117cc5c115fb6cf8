//! # Railseat Runtime
//!
//! Runtime implementation for the railseat reservation ledger.
//!
//! This crate provides the Store runtime that owns a ledger's state,
//! runs its reducer, and executes the effects the reducer returns.
//!
//! ## Core Components
//!
//! - **Store**: The runtime that manages state and executes effects
//! - **Effect resolution**: Turns effect descriptions into follow-up actions
//! - **Feedback loop**: Follow-up actions are reduced before `send()` returns
//!
//! ## Example
//!
//! ```ignore
//! use railseat_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use futures::future::{self, BoxFuture, FutureExt};
use railseat_core::{effect::Effect, reducer::Reducer};
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// Metric names and descriptions
pub mod metrics;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        ///
        /// This error is returned when `send()` is called after `shutdown()`.
        #[error("Store is shutting down")]
        ShutdownInProgress,
    }
}

pub use error::StoreError;

/// Resolve an effect into the actions it produces.
///
/// `Parallel` effects are polled concurrently, `Sequential` effects one at a
/// time. Either way the produced actions keep the declared order.
fn resolve<A>(effect: Effect<A>) -> BoxFuture<'static, Vec<A>>
where
    A: Send + 'static,
{
    match effect {
        Effect::None => {
            tracing::trace!("Executing Effect::None (no-op)");
            ::metrics::counter!(metrics::EFFECTS_EXECUTED, "type" => "none").increment(1);
            future::ready(Vec::new()).boxed()
        },
        Effect::Future(fut) => {
            tracing::trace!("Executing Effect::Future");
            ::metrics::counter!(metrics::EFFECTS_EXECUTED, "type" => "future").increment(1);
            fut.map(|action| action.into_iter().collect()).boxed()
        },
        Effect::Parallel(effects) => {
            tracing::trace!("Executing Effect::Parallel with {} effects", effects.len());
            ::metrics::counter!(metrics::EFFECTS_EXECUTED, "type" => "parallel").increment(1);
            future::join_all(effects.into_iter().map(resolve))
                .map(|batches| batches.into_iter().flatten().collect())
                .boxed()
        },
        Effect::Sequential(effects) => {
            tracing::trace!("Executing Effect::Sequential with {} effects", effects.len());
            ::metrics::counter!(metrics::EFFECTS_EXECUTED, "type" => "sequential").increment(1);
            async move {
                let mut actions = Vec::new();
                for effect in effects {
                    actions.extend(resolve(effect).await);
                }
                actions
            }
            .boxed()
        },
    }
}

/// Store module - the runtime coordinator
pub mod store {
    use super::{
        Arc, AtomicBool, Effect, Ordering, Reducer, RwLock, StoreError, VecDeque, metrics,
        resolve,
    };
    use railseat_core::SmallVec;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind a single `RwLock`, so concurrent senders serialize)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (with feedback loop)
    ///
    /// Cloning a Store is cheap and yields a handle to the same state.
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: Arc<R>,
        environment: Arc<E>,
        shutdown: Arc<AtomicBool>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
        A: Send + 'static,
        S: Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        /// Create a new store with initial state, reducer, and environment
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer: Arc::new(reducer),
                environment: Arc::new(environment),
                shutdown: Arc::new(AtomicBool::new(false)),
            }
        }

        /// Send an action to the store
        ///
        /// 1. Acquires the write lock on state
        /// 2. Calls the reducer with (state, action, environment)
        /// 3. Releases the lock and resolves the returned effects
        /// 4. Reduces every action the effects produce, in order
        ///
        /// `send()` returns once the feedback loop is drained, so state read
        /// afterwards reflects the action and all of its follow-ups.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<(), StoreError> {
            if self.shutdown.load(Ordering::Acquire) {
                tracing::warn!("Rejected action: store is shutting down");
                ::metrics::counter!(metrics::REJECTED_ACTIONS).increment(1);
                return Err(StoreError::ShutdownInProgress);
            }

            let mut pending = VecDeque::from([action]);
            while let Some(action) = pending.pop_front() {
                ::metrics::counter!(metrics::ACTIONS_TOTAL).increment(1);
                let effects = self.reduce(action).await;

                tracing::trace!("Executing {} effects", effects.len());
                for effect in effects {
                    pending.extend(resolve(effect).await);
                }
            }

            tracing::debug!("Action processing completed");
            Ok(())
        }

        async fn reduce(&self, action: A) -> SmallVec<[Effect<A>; 4]> {
            let mut state = self.state.write().await;
            tracing::trace!("Acquired write lock on state");

            let span = tracing::debug_span!("reducer_execution");
            let _enter = span.enter();

            let start = std::time::Instant::now();
            let effects = self.reducer.reduce(&mut *state, action, &self.environment);
            ::metrics::histogram!(metrics::REDUCER_DURATION)
                .record(start.elapsed().as_secs_f64());

            effects
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let free = store.state(|s| s.train.available_seat_count()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&*state)
        }

        /// Stop accepting actions
        ///
        /// Effects run inside `send()`, so nothing is left in flight once
        /// the in-progress sends return.
        pub fn shutdown(&self) {
            tracing::info!("Store shutting down");
            self.shutdown.store(true, Ordering::Release);
        }

        /// Returns true once `shutdown()` has been called
        #[must_use]
        pub fn is_shut_down(&self) -> bool {
            self.shutdown.load(Ordering::Acquire)
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
                shutdown: Arc::clone(&self.shutdown),
            }
        }
    }
}

// Re-export for convenience
pub use store::Store;
