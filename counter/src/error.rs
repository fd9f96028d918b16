//! Application-level errors.

use crate::config::ConfigError;
use thiserror::Error;
use thunk_runtime::StoreError;

/// Errors surfaced by the counter binaries
#[derive(Error, Debug)]
pub enum AppError {
    /// Terminal or log file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The store refused an action or did not drain in time
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
