// Re-export core modules for use by the binary or other consumers
pub mod components;
pub mod demo;

pub use crate::components::health::{HealthCounter, HealthError};
pub use crate::demo::{load_scenario, run_scenario, Checkpoint, DemoError, Scenario, Step};
