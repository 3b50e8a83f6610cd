//! Scenario builder.
//!
//! Turns a [`ScenarioConfig`] into one [`Dataset`]: users first, then each
//! user's transactions and alerts, then the suspicious and severity-balanced
//! sets attached to the first user. The order is fixed so a seeded scenario
//! with a fixed reference time is reproducible.

use crate::config::{ConfigError, ScenarioConfig};
use chrono::{DateTime, Utc};
use fixture_core::{Alert, Transaction, User};
use fixture_generator::{FixtureGenerator, GeneratorError, Overrides};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Error type for scenario building.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

/// A generated dataset with the parameters that reproduce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub seed: u64,
    pub reference_time: DateTime<Utc>,
    pub users: Vec<User>,
    pub transactions: Vec<Transaction>,
    pub alerts: Vec<Alert>,
}

impl Dataset {
    /// Number of entities across all kinds.
    pub fn len(&self) -> usize {
        self.users.len() + self.transactions.len() + self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build the dataset a scenario describes.
///
/// The config is validated first, so an oversized or inconsistent scenario
/// fails before any entity is generated.
pub fn build_dataset(config: &ScenarioConfig) -> Result<Dataset, ScenarioError> {
    config.validate()?;

    let mut generator = FixtureGenerator::new(config.seed);
    if let Some(reference_time) = config.reference_time {
        generator = generator.with_reference_time(reference_time);
    }

    info!(
        "Building scenario: {} users with {} transactions and {} alerts each (seed={})",
        config.users,
        config.transactions_per_user,
        config.alerts_per_user,
        config.seed
    );

    let users = generator.generate_users(config.users, &Overrides::new())?;

    let mut transactions = Vec::new();
    let mut alerts = Vec::new();
    for user in &users {
        transactions
            .extend(generator.generate_transactions_for_user(user.id, config.transactions_per_user)?);
        alerts.extend(generator.generate_alerts_for_user(user.id, config.alerts_per_user)?);
    }

    if let Some(focus) = users.first() {
        let owned_by_focus = Overrides::new().with("userId", focus.id.to_string());
        transactions.extend(
            generator
                .generate_suspicious_transactions_with(config.suspicious_transactions, &owned_by_focus)?,
        );
        alerts.extend(
            generator.generate_alerts_by_severity_with(config.balanced_alerts, &owned_by_focus)?,
        );
    }

    let dataset = Dataset {
        seed: config.seed,
        reference_time: generator.reference_time(),
        users,
        transactions,
        alerts,
    };

    info!(
        "Scenario built: {} entities after {} draws",
        dataset.len(),
        generator.draws()
    );
    Ok(dataset)
}
