//! Numeric value derivers.

use super::Draw;
use crate::error::GeneratorError;

/// Inclusive integer in `[min, max]` from one draw.
///
/// `floor(draw * (max - min + 1)) + min`, clamped to `max` so that a draw
/// arbitrarily close to 1 cannot round past the upper bound.
pub fn bounded_int<D: Draw + ?Sized>(
    src: &mut D,
    min: i64,
    max: i64,
) -> Result<i64, GeneratorError> {
    if min > max {
        return Err(GeneratorError::InvalidRange {
            min: min as f64,
            max: max as f64,
        });
    }

    let span = (max as i128 - min as i128 + 1) as f64;
    let offset = (src.draw() * span).floor() as i128;
    Ok((min as i128 + offset).min(max as i128) as i64)
}

/// Float in `[min, max)` from one draw.
pub fn bounded_float<D: Draw + ?Sized>(
    src: &mut D,
    min: f64,
    max: f64,
) -> Result<f64, GeneratorError> {
    if min > max || min.is_nan() || max.is_nan() {
        return Err(GeneratorError::InvalidRange { min, max });
    }

    Ok(min + src.draw() * (max - min))
}

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::ScriptedDraws;
    use crate::source::SequenceSource;

    #[test]
    fn test_bounded_int_range() {
        let mut source = SequenceSource::new(42);

        for _ in 0..1000 {
            let v = bounded_int(&mut source, 10, 20).unwrap();
            assert!((10..=20).contains(&v));
        }
    }

    #[test]
    fn test_bounded_int_boundary_draws() {
        let almost_one = 1.0 - f64::EPSILON;
        let mut draws = ScriptedDraws::new(&[0.0, almost_one]);

        assert_eq!(bounded_int(&mut draws, 60, 98).unwrap(), 60);
        assert_eq!(bounded_int(&mut draws, 60, 98).unwrap(), 98);
    }

    #[test]
    fn test_bounded_int_clamps_full_draw() {
        let mut draws = ScriptedDraws::new(&[1.0]);
        assert_eq!(bounded_int(&mut draws, 10, 20).unwrap(), 20);
    }

    #[test]
    fn test_bounded_int_full_i64_span() {
        let mut source = SequenceSource::new(3);
        for _ in 0..100 {
            bounded_int(&mut source, i64::MIN, i64::MAX).unwrap();
        }
    }

    #[test]
    fn test_bounded_int_formula() {
        // floor(0.5 * 11) + 10 = 15
        let mut draws = ScriptedDraws::new(&[0.5]);
        assert_eq!(bounded_int(&mut draws, 10, 20).unwrap(), 15);
    }

    #[test]
    fn test_bounded_int_single_value() {
        let mut source = SequenceSource::new(1);
        assert_eq!(bounded_int(&mut source, 7, 7).unwrap(), 7);
    }

    #[test]
    fn test_bounded_int_inverted_range() {
        let mut source = SequenceSource::new(1);
        let err = bounded_int(&mut source, 5, 4).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidRange { .. }));
        assert_eq!(source.draws(), 0);
    }

    #[test]
    fn test_bounded_float_range() {
        let mut source = SequenceSource::new(42);

        for _ in 0..1000 {
            let v = bounded_float(&mut source, 0.05, 0.45).unwrap();
            assert!((0.05..0.45).contains(&v));
        }
    }

    #[test]
    fn test_bounded_float_interpolates() {
        let mut draws = ScriptedDraws::new(&[0.25]);
        assert_eq!(bounded_float(&mut draws, 100.0, 200.0).unwrap(), 125.0);
    }

    #[test]
    fn test_bounded_float_inverted_range() {
        let mut source = SequenceSource::new(1);
        assert!(bounded_float(&mut source, 1.0, 0.0).is_err());
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(12.345_6, 2), 12.35);
        assert_eq!(round_to(-3.001, 2), -3.0);
        assert_eq!(round_to(0.126, 2), 0.13);
    }
}
