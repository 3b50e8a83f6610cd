//! Selection derivers.

use super::Draw;
use crate::error::GeneratorError;

/// Uniform pick: `set[floor(draw * len)]`.
///
/// An empty set is a configuration defect and fails without consuming a
/// draw. `domain` names the set in the error.
pub fn choice<'a, T, D: Draw + ?Sized>(
    src: &mut D,
    domain: &'static str,
    set: &'a [T],
) -> Result<&'a T, GeneratorError> {
    if set.is_empty() {
        return Err(GeneratorError::EmptyDomain { domain });
    }

    let index = (src.draw() * set.len() as f64).floor() as usize;
    Ok(&set[index.min(set.len() - 1)])
}

/// Bernoulli trial from one draw: true when `draw < probability`.
pub fn chance<D: Draw + ?Sized>(src: &mut D, probability: f64) -> bool {
    src.draw() < probability
}
