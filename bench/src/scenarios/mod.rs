//! Realistic channel workload benchmarks.
//!
//! These scenarios simulate real-world channel usage patterns with
//! representative subscriber counts and subscription lifetimes.
//!
//! # Scenarios
//!
//! - **Churn**: Subscribers come and go between dispatches, mixing persistent and one-shot
//! - **Relay**: Handlers re-dispatch from inside a dispatch, forming a bounded chain

pub mod churn;
pub mod relay;

pub use churn::{ChurnConfig, ChurnScenario};
pub use relay::{RelayConfig, RelayScenario};

/// Common trait for benchmark scenarios.
pub trait Scenario {
    /// Human-readable name of the scenario.
    fn name(&self) -> &'static str;

    /// Brief description of what this scenario tests.
    fn description(&self) -> &'static str;

    /// Number of subscribers the scenario maintains.
    fn subscriber_count(&self) -> usize;

    /// Set up the scenario (register subscribers, initialize state).
    fn setup(&mut self);

    /// Run one round of the scenario.
    fn update(&mut self);

    /// Clean up the scenario.
    fn teardown(&mut self);
}
