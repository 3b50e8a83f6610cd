//! Configuration loading.

mod scenario;

pub use scenario::{ConfigError, ScenarioConfig, MAX_SCENARIO_ENTITIES};
