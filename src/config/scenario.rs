//! Scenario configuration.
//!
//! A scenario file describes one seeded dataset:
//!
//! ```yaml
//! seed: 2024
//! reference_time: "2026-10-01T00:00:00Z"
//! users: 10
//! transactions_per_user: 25
//! alerts_per_user: 4
//! suspicious_transactions: 4
//! balanced_alerts: 8
//! ```
//!
//! Every field is optional. Without `reference_time` dates are anchored at
//! the moment the dataset is built, so only the non-date fields replay.

use chrono::{DateTime, Utc};
use fixture_generator::DEFAULT_SEED;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Largest number of entities one scenario may describe.
pub const MAX_SCENARIO_ENTITIES: usize = 10_000_000;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading config file
    #[error("Failed to read scenario file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Parsed but inconsistent
    #[error("Invalid scenario: {0}")]
    Invalid(String),
}

/// Shape of a generated dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Anchor for every generated date
    #[serde(default)]
    pub reference_time: Option<DateTime<Utc>>,

    #[serde(default = "default_users")]
    pub users: usize,

    #[serde(default = "default_transactions_per_user")]
    pub transactions_per_user: usize,

    #[serde(default = "default_alerts_per_user")]
    pub alerts_per_user: usize,

    /// Flagged transactions attached to the first user
    #[serde(default = "default_suspicious_transactions")]
    pub suspicious_transactions: usize,

    /// Severity-balanced alerts attached to the first user
    #[serde(default = "default_balanced_alerts")]
    pub balanced_alerts: usize,
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_users() -> usize {
    5
}

fn default_transactions_per_user() -> usize {
    20
}

fn default_alerts_per_user() -> usize {
    3
}

fn default_suspicious_transactions() -> usize {
    4
}

fn default_balanced_alerts() -> usize {
    4
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            reference_time: None,
            users: default_users(),
            transactions_per_user: default_transactions_per_user(),
            alerts_per_user: default_alerts_per_user(),
            suspicious_transactions: default_suspicious_transactions(),
            balanced_alerts: default_balanced_alerts(),
        }
    }
}

impl ScenarioConfig {
    /// Load a scenario from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a scenario from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: ScenarioConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the scenario before anything is generated.
    ///
    /// Suspicious and balanced sets hang off the first user, so they need
    /// at least one. The total entity count must be representable and at
    /// most [`MAX_SCENARIO_ENTITIES`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.users == 0 && (self.suspicious_transactions > 0 || self.balanced_alerts > 0) {
            return Err(ConfigError::Invalid(
                "suspicious_transactions and balanced_alerts require at least one user"
                    .to_string(),
            ));
        }

        let total = self
            .entity_count()
            .ok_or_else(|| ConfigError::Invalid("entity counts overflow".to_string()))?;
        if total > MAX_SCENARIO_ENTITIES {
            return Err(ConfigError::Invalid(format!(
                "scenario describes {total} entities, more than the limit of {MAX_SCENARIO_ENTITIES}"
            )));
        }
        Ok(())
    }

    /// Total transactions the scenario produces, or `None` on overflow.
    pub fn transaction_count(&self) -> Option<usize> {
        self.users
            .checked_mul(self.transactions_per_user)?
            .checked_add(self.suspicious_transactions)
    }

    /// Total alerts the scenario produces, or `None` on overflow.
    pub fn alert_count(&self) -> Option<usize> {
        self.users
            .checked_mul(self.alerts_per_user)?
            .checked_add(self.balanced_alerts)
    }

    /// Users, transactions and alerts together, or `None` on overflow.
    pub fn entity_count(&self) -> Option<usize> {
        self.users
            .checked_add(self.transaction_count()?)?
            .checked_add(self.alert_count()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_SCENARIO: &str = r#"
seed: 2024
reference_time: "2026-10-01T00:00:00Z"
users: 10
transactions_per_user: 25
alerts_per_user: 4
suspicious_transactions: 8
balanced_alerts: 12
"#;

    #[test]
    fn test_parse_scenario() {
        let config = ScenarioConfig::from_yaml(SAMPLE_SCENARIO).unwrap();

        assert_eq!(config.seed, 2024);
        assert_eq!(
            config.reference_time.unwrap().to_rfc3339(),
            "2026-10-01T00:00:00+00:00"
        );
        assert_eq!(config.users, 10);
        assert_eq!(config.transaction_count(), Some(258));
        assert_eq!(config.alert_count(), Some(52));
        assert_eq!(config.entity_count(), Some(320));
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = ScenarioConfig::from_yaml("users: 2").unwrap();

        assert_eq!(config.users, 2);
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.reference_time, None);
        assert_eq!(config.transactions_per_user, 20);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = ScenarioConfig::from_yaml("users: 2\naccounts: 3");
        assert!(matches!(result, Err(ConfigError::YamlError(_))));
    }

    #[test]
    fn test_sets_need_a_user() {
        let result = ScenarioConfig::from_yaml("users: 0\nsuspicious_transactions: 4");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let empty = ScenarioConfig::from_yaml(
            "users: 0\nsuspicious_transactions: 0\nbalanced_alerts: 0",
        )
        .unwrap();
        assert_eq!(empty.transaction_count(), Some(0));
    }

    #[test]
    fn test_overflowing_counts_rejected() {
        let yaml = format!("users: {}\ntransactions_per_user: 2", usize::MAX);
        let result = ScenarioConfig::from_yaml(&yaml);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let config = ScenarioConfig {
            users: 1,
            alerts_per_user: usize::MAX,
            ..ScenarioConfig::default()
        };
        assert_eq!(config.alert_count(), None);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_oversized_scenario_rejected() {
        let result =
            ScenarioConfig::from_yaml("users: 1\ntransactions_per_user: 100000000000000");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let at_limit = ScenarioConfig {
            users: 1,
            transactions_per_user: MAX_SCENARIO_ENTITIES - 1,
            alerts_per_user: 0,
            suspicious_transactions: 0,
            balanced_alerts: 0,
            ..ScenarioConfig::default()
        };
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_SCENARIO.as_bytes()).unwrap();

        let config = ScenarioConfig::from_file(file.path()).unwrap();
        assert_eq!(config.balanced_alerts, 12);

        let missing = ScenarioConfig::from_file("/nonexistent/scenario.yaml");
        assert!(matches!(missing, Err(ConfigError::IoError(_))));
    }
}
