//! Interactive counter
//!
//! Press `+` or `-` to start an operation, `q` to quit. Each operation takes
//! `COUNTER_DELAY_MS` (one second by default) to settle.

use thunk_counter::ui::{run_app, setup_terminal, CounterApp};
use thunk_counter::{build_store, telemetry, AppError, CounterConfig};
use thunk_runtime::StoreError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = CounterConfig::from_env()?;
    telemetry::init_file(config.log_file.as_deref())?;

    tracing::info!(
        delay_ms = config.delay.as_millis(),
        failing = config.failure_message.is_some(),
        "Starting counter"
    );

    let store = build_store(&config);
    let mut app = CounterApp::new(store.clone());

    let result = {
        let (mut terminal, _guard) = setup_terminal()?;
        run_app(&mut terminal, &mut app).await
    };

    match store.shutdown(store.shutdown_timeout()).await {
        Ok(()) => {},
        Err(StoreError::ShutdownTimeout(pending)) => {
            tracing::warn!(pending, "Quit with operations still in flight");
        },
        Err(e) => return Err(e.into()),
    }

    result
}
