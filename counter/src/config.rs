//! Configuration for the counter application.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::environment::{CounterEnvironment, DEFAULT_DELAY};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use thunk_runtime::StoreConfig;

/// Default time quitting waits for in-flight operations
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed
    #[error("invalid value {value:?} for {key}: expected {expected}")]
    Invalid {
        /// Variable name
        key: &'static str,
        /// Raw value as found
        value: String,
        /// What the value should look like
        expected: &'static str,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterConfig {
    /// How long each operation takes (`COUNTER_DELAY_MS`)
    pub delay: Duration,
    /// When set, operations reject with this message (`COUNTER_FAILURE_MESSAGE`)
    pub failure_message: Option<String>,
    /// How long quitting waits for in-flight operations (`COUNTER_SHUTDOWN_TIMEOUT_SECS`)
    pub shutdown_timeout: Duration,
    /// Log file for the terminal UI (`COUNTER_LOG`)
    pub log_file: Option<PathBuf>,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            failure_message: None,
            shutdown_timeout: DEFAULT_SHUTDOWN_TIMEOUT,
            log_file: None,
        }
    }
}

impl CounterConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a numeric variable does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let delay = match get("COUNTER_DELAY_MS") {
            Some(raw) => Duration::from_millis(parse_u64("COUNTER_DELAY_MS", &raw)?),
            None => DEFAULT_DELAY,
        };

        let shutdown_timeout = match get("COUNTER_SHUTDOWN_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(parse_u64("COUNTER_SHUTDOWN_TIMEOUT_SECS", &raw)?),
            None => DEFAULT_SHUTDOWN_TIMEOUT,
        };

        Ok(Self {
            delay,
            failure_message: get("COUNTER_FAILURE_MESSAGE"),
            shutdown_timeout,
            log_file: get("COUNTER_LOG").map(PathBuf::from),
        })
    }

    /// Build the reducer environment this configuration describes
    #[must_use]
    pub fn environment(&self) -> CounterEnvironment {
        match &self.failure_message {
            Some(message) => CounterEnvironment::failing(self.delay, message.clone()),
            None => CounterEnvironment::with_delay(self.delay),
        }
    }

    /// Build the store configuration
    #[must_use]
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::default().with_shutdown_timeout(self.shutdown_timeout)
    }
}

fn parse_u64(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: raw.to_string(),
        expected: "a non-negative integer",
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = CounterConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CounterConfig::default());
        assert_eq!(config.delay, Duration::from_secs(1));
        assert_eq!(config.shutdown_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_reads_all_variables() {
        let config = CounterConfig::from_lookup(lookup(&[
            ("COUNTER_DELAY_MS", "250"),
            ("COUNTER_FAILURE_MESSAGE", "offline"),
            ("COUNTER_SHUTDOWN_TIMEOUT_SECS", "2"),
            ("COUNTER_LOG", "/tmp/counter.log"),
        ]))
        .unwrap();

        assert_eq!(config.delay, Duration::from_millis(250));
        assert_eq!(config.failure_message.as_deref(), Some("offline"));
        assert_eq!(config.shutdown_timeout, Duration::from_secs(2));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/counter.log")));
        assert_eq!(config.store_config().shutdown_timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let config =
            CounterConfig::from_lookup(lookup(&[("COUNTER_DELAY_MS", " "), ("COUNTER_LOG", "")]))
                .unwrap();
        assert_eq!(config.delay, DEFAULT_DELAY);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_invalid_delay_is_rejected() {
        let err = CounterConfig::from_lookup(lookup(&[("COUNTER_DELAY_MS", "soon")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "COUNTER_DELAY_MS",
                value: "soon".to_string(),
                expected: "a non-negative integer",
            }
        );
        assert!(err.to_string().contains("COUNTER_DELAY_MS"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_message_selects_failing_source() {
        let config = CounterConfig::from_lookup(lookup(&[
            ("COUNTER_DELAY_MS", "5"),
            ("COUNTER_FAILURE_MESSAGE", "boom"),
        ]))
        .unwrap();

        let result = config
            .environment()
            .source
            .perform(crate::types::Operation::Increment)
            .await;
        assert_eq!(result.unwrap_err().to_string(), "boom");
    }
}
