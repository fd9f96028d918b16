//! # Thunk Core
//!
//! Core traits and types for reducer-driven asynchronous lifecycles.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature
//! - **Action**: All possible inputs to a reducer (triggers and lifecycle steps)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Lifecycle**: Pending / Fulfilled / Rejected step of one async attempt
//!
//! ## Example
//!
//! ```
//! use thunk_core::{effect::Effect, lifecycle::Lifecycle, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Debug, Default)]
//! struct Loads {
//!     loading: bool,
//!     total: i64,
//! }
//!
//! #[derive(Debug, Clone)]
//! enum LoadAction {
//!     Step(Lifecycle<i64, String>),
//! }
//!
//! struct LoadReducer;
//!
//! impl Reducer for LoadReducer {
//!     type State = Loads;
//!     type Action = LoadAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut Loads,
//!         action: LoadAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<LoadAction>; 4]> {
//!         match action {
//!             LoadAction::Step(Lifecycle::Pending) => state.loading = true,
//!             LoadAction::Step(Lifecycle::Fulfilled(n)) => {
//!                 state.loading = false;
//!                 state.total += n;
//!             },
//!             LoadAction::Step(Lifecycle::Rejected(_)) => state.loading = false,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let mut state = Loads::default();
//! LoadReducer.reduce(&mut state, LoadAction::Step(Lifecycle::Fulfilled(3)), &());
//! assert_eq!(state.total, 3);
//! ```

pub use smallvec::{smallvec, SmallVec};

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::SmallVec;
    use super::effect::Effect;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Updates state in place
        /// 2. Returns effect descriptions to be executed
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Returns
        ///
        /// Effects to be executed by the runtime. Most reducers return zero or
        /// one effect, so the inline capacity avoids a heap allocation.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the runtime.
/// They are values (not execution) and are composable.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;
    use std::time::Duration;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what should happen,
    /// returned from reducers and executed by the Store runtime.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Run effects in parallel
        Parallel(Vec<Effect<Action>>),

        /// Run effects sequentially
        Sequential(Vec<Effect<Action>>),

        /// Delayed action
        Delay {
            /// How long to wait
            duration: Duration,
            /// Action to dispatch after delay
            action: Box<Action>,
        },

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if Some, the action is fed back into the reducer
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Parallel(effects) => {
                    f.debug_tuple("Effect::Parallel").field(effects).finish()
                },
                Effect::Sequential(effects) => {
                    f.debug_tuple("Effect::Sequential").field(effects).finish()
                },
                Effect::Delay { duration, action } => f
                    .debug_struct("Effect::Delay")
                    .field("duration", duration)
                    .field("action", action)
                    .finish(),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Combine effects to run in parallel
        #[must_use]
        pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Parallel(effects)
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Sequential(effects)
        }

        /// Wrap a future that always yields an action
        #[must_use]
        pub fn run<F>(future: F) -> Effect<Action>
        where
            F: Future<Output = Action> + Send + 'static,
        {
            Effect::Future(Box::pin(async move { Some(future.await) }))
        }
    }
}

/// Lifecycle module - the three phases of one asynchronous attempt
///
/// An attempt starts `Pending` and settles exactly once, either
/// `Fulfilled` with a value or `Rejected` with an error. Reducers match on
/// the tag to pick the state transition.
pub mod lifecycle {
    use std::fmt;

    /// One step in the lifecycle of an asynchronous attempt
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Lifecycle<T, E> {
        /// The attempt has started and has not settled yet
        Pending,
        /// The attempt completed with a value
        Fulfilled(T),
        /// The attempt failed
        Rejected(E),
    }

    impl<T, E> Lifecycle<T, E> {
        /// Settle an attempt from its result
        pub fn from_result(result: Result<T, E>) -> Self {
            match result {
                Ok(value) => Self::Fulfilled(value),
                Err(error) => Self::Rejected(error),
            }
        }

        /// Whether the attempt has reached a terminal phase
        #[must_use]
        pub const fn is_settled(&self) -> bool {
            !matches!(self, Self::Pending)
        }

        /// Phase name, for logs
        #[must_use]
        pub const fn phase(&self) -> &'static str {
            match self {
                Self::Pending => "pending",
                Self::Fulfilled(_) => "fulfilled",
                Self::Rejected(_) => "rejected",
            }
        }

        /// Map the rejection payload, keeping the other phases
        pub fn map_err<F, E2>(self, f: F) -> Lifecycle<T, E2>
        where
            F: FnOnce(E) -> E2,
        {
            match self {
                Self::Pending => Lifecycle::Pending,
                Self::Fulfilled(value) => Lifecycle::Fulfilled(value),
                Self::Rejected(error) => Lifecycle::Rejected(f(error)),
            }
        }
    }

    impl<T, E> fmt::Display for Lifecycle<T, E> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.phase())
        }
    }
}
