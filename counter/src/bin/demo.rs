//! Scripted walkthrough
//!
//! Runs a fixed sequence of operations and prints the state after every
//! lifecycle step. Honours the same environment variables as the
//! interactive binary.

use thunk_counter::{build_store, telemetry, AppError, CounterAction, CounterConfig, CounterStore};

async fn print_state(store: &CounterStore, label: &str) {
    let (count, status, error) = store
        .state(|s| (s.count, s.status, s.error.clone()))
        .await;
    match error {
        Some(error) => println!("  {label:<24} count={count:<3} status={status:<10} error={error}"),
        None => println!("  {label:<24} count={count:<3} status={status}"),
    }
}

/// Send a trigger, print the pending state, wait, print the settled state
async fn step(store: &CounterStore, action: CounterAction) -> Result<(), AppError> {
    println!("\n>>> Sending: {action:?}");
    let mut handle = store.send(action).await?;
    print_state(store, "pending").await;

    handle.wait().await;
    print_state(store, "settled").await;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = CounterConfig::from_env()?;
    telemetry::init_stderr();

    println!("=== Async Thunk Counter: scripted walkthrough ===");
    println!("Operation delay: {:?}", config.delay);
    if let Some(message) = &config.failure_message {
        println!("Operations will reject with: {message}");
    }

    let store = build_store(&config);
    print_state(&store, "initial").await;

    step(&store, CounterAction::Increment).await?;
    step(&store, CounterAction::Increment).await?;
    step(&store, CounterAction::Decrement).await?;

    println!("\n>>> Sending: Increment and Decrement without waiting");
    let mut first = store.send(CounterAction::Increment).await?;
    let mut second = store.send(CounterAction::Decrement).await?;
    print_state(&store, "both pending").await;
    first.wait().await;
    second.wait().await;
    print_state(&store, "both settled").await;

    store.shutdown(store.shutdown_timeout()).await?;
    println!("\n=== Walkthrough complete ===");
    Ok(())
}
