//! Domain types for the counter.

use std::fmt;
use thunk_core::lifecycle::Lifecycle;

/// Signed result of a completed operation, added to the count
pub type Delta = i64;

/// Lifecycle marker for the most recent attempt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Status {
    /// Nothing running, or the last attempt was rejected
    #[default]
    Idle,
    /// An attempt has started and not settled
    Loading,
    /// The last settled attempt applied its delta
    Succeeded,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Succeeded => "succeeded",
        })
    }
}

/// Counter state
///
/// The only mutable state in the application. Created once at startup and
/// owned by the store for the lifetime of the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterState {
    /// Current count value
    pub count: i64,
    /// Lifecycle marker of the most recent attempt
    pub status: Status,
    /// Failure message of the most recent rejected attempt
    pub error: Option<String>,
}

impl CounterState {
    /// State with the given count and no attempt in flight
    #[must_use]
    pub const fn with_count(count: i64) -> Self {
        Self {
            count,
            status: Status::Idle,
            error: None,
        }
    }

    /// Whether an attempt is in flight
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }
}

/// The two asynchronous operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Add one
    Increment,
    /// Subtract one
    Decrement,
}

impl Operation {
    /// The delta this operation resolves with
    #[must_use]
    pub const fn delta(self) -> Delta {
        match self {
            Self::Increment => 1,
            Self::Decrement => -1,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Increment => "increment",
            Self::Decrement => "decrement",
        })
    }
}

/// Counter actions
///
/// Triggers come from the user; lifecycle steps come back from the
/// operation effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterAction {
    /// Request an increment
    Increment,
    /// Request a decrement
    Decrement,
    /// One step in the lifecycle of an attempt
    Lifecycle {
        /// Which operation the attempt runs
        operation: Operation,
        /// The step; rejections carry the failure message
        lifecycle: Lifecycle<Delta, String>,
    },
}

impl CounterAction {
    /// The trigger that starts `operation`
    #[must_use]
    pub const fn trigger(operation: Operation) -> Self {
        match operation {
            Operation::Increment => Self::Increment,
            Operation::Decrement => Self::Decrement,
        }
    }

    /// Whether this action settles an attempt
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Lifecycle { lifecycle, .. } if lifecycle.is_settled())
    }
}
