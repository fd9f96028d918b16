//! # Thunk Counter
//!
//! A counter whose increments and decrements are asynchronous. Every
//! operation moves through a pending, fulfilled or rejected lifecycle.
//!
//! ## Architecture
//!
//! - A trigger (`Increment` / `Decrement`) marks the state Loading inside
//!   the reducer call and returns a single `Effect::Future`
//! - The effect waits on the environment's [`OperationSource`] (one second
//!   by default) and feeds back a [`CounterAction::Lifecycle`] step
//! - Fulfilled adds the delta and marks the state Succeeded; Rejected
//!   reverts to Idle and records the message
//! - Attempts are independent; overlapping attempts all apply their deltas
//!   and the last one to settle decides the status
//!
//! ## Example
//!
//! ```no_run
//! use thunk_counter::{CounterAction, CounterEnvironment, CounterReducer, CounterState, Status};
//! use thunk_runtime::Store;
//!
//! # async fn example() -> Result<(), thunk_runtime::StoreError> {
//! let store = Store::new(CounterState::default(), CounterReducer::new(), CounterEnvironment::default());
//!
//! let mut handle = store.send(CounterAction::Increment).await?;
//! assert_eq!(store.state(|s| s.status).await, Status::Loading);
//!
//! handle.wait().await;
//! assert_eq!(store.state(|s| s.count).await, 1);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod environment;
pub mod error;
pub mod reducer;
pub mod telemetry;
pub mod types;
pub mod ui;

pub use config::{ConfigError, CounterConfig};
pub use environment::{
    CounterEnvironment, FailingSource, OperationError, OperationSource, TimerSource,
};
pub use error::AppError;
pub use reducer::CounterReducer;
pub use types::{CounterAction, CounterState, Delta, Operation, Status};

use thunk_runtime::Store;

/// Store type for the counter
pub type CounterStore = Store<CounterState, CounterAction, CounterEnvironment, CounterReducer>;

/// Build a store with the default state around a configuration
#[must_use]
pub fn build_store(config: &CounterConfig) -> CounterStore {
    Store::with_config(
        CounterState::default(),
        CounterReducer::new(),
        config.environment(),
        config.store_config(),
    )
}
