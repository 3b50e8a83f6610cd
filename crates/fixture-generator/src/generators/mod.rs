//! Primitive derivers built on the sequence source.
//!
//! Every deriver consumes draws from a [`Draw`] implementation in a fixed,
//! documented order. Assemblers compose these; nothing here knows about
//! entities.

pub mod choice;
pub mod numeric;
pub mod timestamp;
pub mod uuid;

use crate::source::SequenceSource;

pub use choice::{chance, choice};
pub use numeric::{bounded_float, bounded_int, round_to};
pub use timestamp::{days_after, past_date};
pub use self::uuid::identifier;

/// A stream of values in `[0, 1)`.
pub trait Draw {
    fn draw(&mut self) -> f64;
}

impl Draw for SequenceSource {
    fn draw(&mut self) -> f64 {
        SequenceSource::draw(self)
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
#[cfg(test)]
pub(crate) struct ScriptedDraws {
    values: Vec<f64>,
    next: usize,
}

#[cfg(test)]
impl ScriptedDraws {
    pub(crate) fn new(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }
}

#[cfg(test)]
impl Draw for ScriptedDraws {
    fn draw(&mut self) -> f64 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}
