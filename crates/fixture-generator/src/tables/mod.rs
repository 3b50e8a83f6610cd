//! Correlation tables.
//!
//! Static data that encodes which field values are jointly valid. Lookups
//! are exhaustive `match`es over the closed enums from `fixture-core`, so a
//! new variant without a table entry does not compile. Range ordering and
//! pool non-emptiness are covered by the tests in each submodule.

pub mod alert;
pub mod transaction;
pub mod user;

/// Inclusive integer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
}

impl IntRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

/// Half-open float range `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatRange {
    pub min: f64,
    pub max: f64,
}

impl FloatRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}
