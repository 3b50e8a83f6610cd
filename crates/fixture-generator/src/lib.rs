//! Deterministic entity generator for the fintech-fixtures framework.
//!
//! This crate provides the [`FixtureGenerator`] which produces internally
//! consistent users, transactions and alerts for dashboard demos and tests.
//! The generator owns a seeded [`SequenceSource`], so the same seed, reference
//! time and call sequence always yield byte-identical entities.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │  FixtureGenerator    │
//! │                      │
//! │  - source (ChaCha8)  │
//! │  - reference_time    │
//! └──────────┬───────────┘
//!            │ assemble (entities/*, tables/*)
//!            ▼
//!      candidate entity
//!            │ merge overrides
//!            ▼
//!      fixture_core::validate
//!            │
//!            ▼
//!   User / Transaction / Alert
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_generator::{FixtureGenerator, Overrides};
//! use fixture_core::RiskFlag;
//!
//! let mut generator = FixtureGenerator::new(67890);
//! let suspicious = generator.generate_suspicious_transactions(4).unwrap();
//! assert_eq!(suspicious[3].risk_flag, RiskFlag::Critical);
//!
//! let user = generator.generate_mock_user().unwrap();
//! let alerts = generator.generate_alerts_for_user(user.id, 3).unwrap();
//! assert!(alerts.iter().all(|a| a.user_id == user.id));
//!
//! let read = Overrides::new().with("read", true);
//! assert!(generator.generate_alert(&read).unwrap().read);
//! ```
//!
//! # Primitives
//!
//! Assemblers are built from a handful of draw primitives in [`generators`]:
//!
//! - `bounded_int` / `bounded_float` - uniform values in a closed range
//! - `choice` - one element of a non-empty set
//! - `chance` - weighted boolean
//! - `past_date` / `days_after` - timestamps relative to an anchor
//! - `identifier` - v4-shaped UUID built from draws

pub mod entities;
pub mod error;
pub mod generator;
pub mod generators;
pub mod overrides;
pub mod source;
pub mod tables;

// Re-exports for convenience
pub use entities::{Fixture, RiskPlan};
pub use error::GeneratorError;
pub use generator::{FixtureGenerator, FixtureIterator};
pub use overrides::Overrides;
pub use source::{SequenceSource, DEFAULT_SEED};
