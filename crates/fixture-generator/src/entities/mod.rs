//! Entity assemblers.
//!
//! Each assembler builds a complete candidate in three stages: select the
//! categorical key (or accept it from the overrides), derive the dependent
//! fields from the correlation tables, and hand the typed candidate back to
//! the façade, which merges overrides and runs the validation gate.
//!
//! The order in which an assembler draws is part of the reproducibility
//! contract and is documented on each `assemble` function.

pub mod alert;
pub mod transaction;
pub mod user;

use crate::error::GeneratorError;
use crate::overrides::Overrides;
use crate::source::SequenceSource;
use chrono::{DateTime, Utc};
use fixture_core::Entity;

pub use transaction::RiskPlan;

/// An entity kind the generator knows how to assemble.
pub trait Fixture: Entity {
    /// Build a candidate from the shared source. Overrides are consulted
    /// only for categorical keys here; the full merge happens afterwards.
    fn assemble(
        source: &mut SequenceSource,
        reference_time: DateTime<Utc>,
        overrides: &Overrides,
    ) -> Result<Self, GeneratorError>;
}
