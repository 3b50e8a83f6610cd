//! Error type for generator operations.

use fixture_core::ValidationError;

/// Error type for generator operations.
///
/// None of these are transient. `EmptyDomain` and `InvalidRange` mean a
/// correlation table has drifted from the domain model, `InvalidOverride`
/// means a caller asked for a value outside the domain, and `Validation`
/// means an assembled entity no longer matches its schema.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// `choice` over an empty set
    #[error("Empty domain: cannot choose from '{domain}'")]
    EmptyDomain { domain: &'static str },

    /// Bounded draw with `min > max`
    #[error("Invalid range: min {min} > max {max}")]
    InvalidRange { min: f64, max: f64 },

    /// Override value that cannot be used as a categorical key
    #[error("Invalid override for '{field}': {reason}")]
    InvalidOverride { field: String, reason: String },

    /// Candidate rejected by the validation gate
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Candidate could not be converted to JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
