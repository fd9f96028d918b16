//! # Thunk Testing
//!
//! Testing utilities and helpers for reducer-driven async lifecycles.
//!
//! This crate provides:
//! - [`ReducerTest`]: a Given-When-Then harness for reducers
//! - [`assertions`]: helpers for inspecting returned effects
//! - [`helpers`]: drive effect descriptions to completion without a Store
//!
//! ## Example
//!
//! ```ignore
//! use thunk_testing::{helpers::resolve_effects, ReducerTest};
//!
//! ReducerTest::new(CounterReducer::new())
//!     .with_env(environment)
//!     .given_state(CounterState::default())
//!     .when_action(CounterAction::Increment)
//!     .then_state(|state| assert_eq!(state.status, Status::Loading))
//!     .run();
//! ```

pub mod reducer_test;

/// Test helpers and utilities
///
/// Reducers return effect descriptions. These helpers execute them the way
/// the Store would, but collect the produced actions instead of feeding them
/// back, so a test can decide what to reduce next.
pub mod helpers {
    use futures::future::BoxFuture;
    use thunk_core::effect::Effect;

    /// Run one effect to completion and collect the actions it produced
    ///
    /// `Parallel` children run concurrently and their actions are returned
    /// in completion order. `Sequential` children run one after another.
    pub fn resolve_effect<A>(effect: Effect<A>) -> BoxFuture<'static, Vec<A>>
    where
        A: Send + 'static,
    {
        Box::pin(async move {
            match effect {
                Effect::None => Vec::new(),
                Effect::Future(fut) => fut.await.into_iter().collect(),
                Effect::Delay { duration, action } => {
                    tokio::time::sleep(duration).await;
                    vec![*action]
                },
                Effect::Parallel(effects) => {
                    let mut pending: futures::stream::FuturesUnordered<_> =
                        effects.into_iter().map(resolve_effect).collect();
                    let mut actions = Vec::new();
                    while let Some(produced) = futures::StreamExt::next(&mut pending).await {
                        actions.extend(produced);
                    }
                    actions
                },
                Effect::Sequential(effects) => {
                    let mut actions = Vec::new();
                    for effect in effects {
                        actions.extend(resolve_effect(effect).await);
                    }
                    actions
                },
            }
        })
    }

    /// Run every effect in order and collect all produced actions
    pub async fn resolve_effects<A, I>(effects: I) -> Vec<A>
    where
        A: Send + 'static,
        I: IntoIterator<Item = Effect<A>>,
    {
        let mut actions = Vec::new();
        for effect in effects {
            actions.extend(resolve_effect(effect).await);
        }
        actions
    }
}

// Re-export commonly used items
pub use reducer_test::{assertions, ReducerTest};

#[cfg(test)]
mod tests {
    use super::helpers::{resolve_effect, resolve_effects};
    use std::time::Duration;
    use thunk_core::effect::Effect;

    #[tokio::test]
    async fn test_resolve_none() {
        let actions = resolve_effect::<u8>(Effect::None).await;
        assert!(actions.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_resolve_delay_and_future() {
        let actions = resolve_effects(vec![
            Effect::Delay {
                duration: Duration::from_secs(1),
                action: Box::new(1_u8),
            },
            Effect::run(async { 2 }),
            Effect::Future(Box::pin(async { None })),
        ])
        .await;

        assert_eq!(actions, vec![1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_resolve_parallel_in_completion_order() {
        let slow = Effect::Delay {
            duration: Duration::from_millis(20),
            action: Box::new("slow"),
        };
        let fast = Effect::Delay {
            duration: Duration::from_millis(10),
            action: Box::new("fast"),
        };

        let actions = resolve_effect(Effect::merge(vec![slow, fast])).await;
        assert_eq!(actions, vec!["fast", "slow"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_resolve_sequential_in_order() {
        let slow = Effect::Delay {
            duration: Duration::from_millis(20),
            action: Box::new("slow"),
        };
        let fast = Effect::Delay {
            duration: Duration::from_millis(10),
            action: Box::new("fast"),
        };

        let actions = resolve_effect(Effect::chain(vec![slow, fast])).await;
        assert_eq!(actions, vec!["slow", "fast"]);
    }
}
