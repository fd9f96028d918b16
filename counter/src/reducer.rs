//! Reducer logic for the counter.
//!
//! A trigger applies the pending step synchronously and returns one effect
//! that runs the operation's asynchronous step. The settled step comes back
//! as a [`CounterAction::Lifecycle`] action and goes through the same
//! transition function.

use crate::environment::CounterEnvironment;
use crate::types::{CounterAction, CounterState, Delta, Operation, Status};
use std::sync::Arc;
use thunk_core::{effect::Effect, lifecycle::Lifecycle, reducer::Reducer, smallvec, SmallVec};

/// Counter reducer
///
/// Concurrent attempts are independent: nothing is queued or cancelled, and
/// whichever attempt settles last decides the final status.
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterReducer;

impl CounterReducer {
    /// Create a new counter reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Start an attempt: mark it pending and describe the async step
    fn start(
        state: &mut CounterState,
        operation: Operation,
        env: &CounterEnvironment,
    ) -> SmallVec<[Effect<CounterAction>; 4]> {
        transition(state, operation, &Lifecycle::Pending);

        let source = Arc::clone(&env.source);
        smallvec![Effect::run(async move {
            let result = source.perform(operation).await;
            CounterAction::Lifecycle {
                operation,
                lifecycle: Lifecycle::from_result(result).map_err(|error| error.to_string()),
            }
        })]
    }
}

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;
    type Environment = CounterEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            CounterAction::Increment => Self::start(state, Operation::Increment, env),
            CounterAction::Decrement => Self::start(state, Operation::Decrement, env),
            CounterAction::Lifecycle {
                operation,
                lifecycle,
            } => {
                transition(state, operation, &lifecycle);
                smallvec![Effect::None]
            },
        }
    }
}

/// Apply one lifecycle step to the state
///
/// - Pending: status loading, error cleared
/// - Fulfilled: delta added, status succeeded, error cleared
/// - Rejected: status idle, error set to the message
pub fn transition(state: &mut CounterState, operation: Operation, lifecycle: &Lifecycle<Delta, String>) {
    match lifecycle {
        Lifecycle::Pending => {
            state.status = Status::Loading;
            state.error = None;
        },
        Lifecycle::Fulfilled(delta) => {
            state.count = state.count.saturating_add(*delta);
            state.status = Status::Succeeded;
            // A rejection from an overlapping attempt must not outlive a success
            state.error = None;
        },
        Lifecycle::Rejected(message) => {
            state.status = Status::Idle;
            state.error = Some(message.clone());
        },
    }

    tracing::debug!(
        %operation,
        phase = lifecycle.phase(),
        count = state.count,
        status = %state.status,
        "Applied lifecycle step"
    );
}
