//! fintech-fixtures
//!
//! Deterministic, internally consistent synthetic data for fintech
//! dashboards: users, their transactions and the alerts raised about them.
//!
//! # Crates
//!
//! - `fixture_core` - entity types, closed enums and the validation gate
//! - `fixture_generator` - the seeded [`FixtureGenerator`](fixture_generator::FixtureGenerator)
//!
//! This crate adds the outer surface: scenario files, dataset export and the
//! `fintech-fixtures` CLI.
//!
//! # CLI Usage
//!
//! ```bash
//! # Ten alerts for one user, as JSON Lines on stdout
//! fintech-fixtures generate alert --count 10 --seed 7 \
//!   --user-id 6f1c2a3e-1b2c-4d5e-8f90-0123456789ab
//!
//! # A critical alert with a hand-picked score
//! fintech-fixtures generate alert --override riskFlag=critical --override riskScore=5
//!
//! # A full dataset from a scenario file
//! fintech-fixtures scenario --config scenario.yaml --output-dir fixtures --format jsonl
//!
//! # Field definitions enforced by the validation gate
//! fintech-fixtures schema transaction
//! ```

pub mod args;
pub mod config;
pub mod export;
pub mod scenario;

pub use config::{ConfigError, ScenarioConfig};
pub use export::{
    export_dataset, write_entities, EntityWriter, ExportError, ExportFormat, ExportMetrics,
};
pub use scenario::{build_dataset, Dataset, ScenarioError};
