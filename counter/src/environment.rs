//! Injected dependencies for the counter reducer.
//!
//! The asynchronous step of an operation sits behind [`OperationSource`] so
//! the reducer never knows whether it is talking to a timer, a failing stub
//! or a test double.

use crate::types::{Delta, Operation};
use futures::future::BoxFuture;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Delay used when nothing else is configured
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// Why an operation's asynchronous step failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    /// The step rejected with a message, shown to the user verbatim
    #[error("{0}")]
    Rejected(String),
}

/// The asynchronous step behind an operation
pub trait OperationSource: Send + Sync {
    /// Run `operation` and resolve with the delta to apply
    fn perform(&self, operation: Operation) -> BoxFuture<'static, Result<Delta, OperationError>>;
}

/// Waits a fixed delay, then resolves with the operation's delta. Never fails.
#[derive(Debug, Clone, Copy)]
pub struct TimerSource {
    delay: Duration,
}

impl TimerSource {
    /// Create a timer source with the given delay
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for TimerSource {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl OperationSource for TimerSource {
    fn perform(&self, operation: Operation) -> BoxFuture<'static, Result<Delta, OperationError>> {
        let delay = self.delay;
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            Ok(operation.delta())
        })
    }
}

/// Waits a fixed delay, then rejects with a fixed message
#[derive(Debug, Clone)]
pub struct FailingSource {
    delay: Duration,
    message: String,
}

impl FailingSource {
    /// Create a failing source
    #[must_use]
    pub fn new(delay: Duration, message: impl Into<String>) -> Self {
        Self {
            delay,
            message: message.into(),
        }
    }
}

impl OperationSource for FailingSource {
    fn perform(&self, operation: Operation) -> BoxFuture<'static, Result<Delta, OperationError>> {
        let delay = self.delay;
        let message = self.message.clone();
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            tracing::warn!(%operation, %message, "Operation rejected");
            Err(OperationError::Rejected(message))
        })
    }
}

/// Counter environment
///
/// Cheap to clone; the store clones it into every effect.
#[derive(Clone)]
pub struct CounterEnvironment {
    /// Source that performs the asynchronous step
    pub source: Arc<dyn OperationSource>,
}

impl CounterEnvironment {
    /// Create an environment around any operation source
    #[must_use]
    pub fn new(source: Arc<dyn OperationSource>) -> Self {
        Self { source }
    }

    /// Environment whose operations succeed after `delay`
    #[must_use]
    pub fn with_delay(delay: Duration) -> Self {
        Self::new(Arc::new(TimerSource::new(delay)))
    }

    /// Environment whose operations reject with `message` after `delay`
    #[must_use]
    pub fn failing(delay: Duration, message: impl Into<String>) -> Self {
        Self::new(Arc::new(FailingSource::new(delay, message)))
    }
}

impl Default for CounterEnvironment {
    fn default() -> Self {
        Self::with_delay(DEFAULT_DELAY)
    }
}

impl fmt::Debug for CounterEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CounterEnvironment").finish_non_exhaustive()
    }
}
