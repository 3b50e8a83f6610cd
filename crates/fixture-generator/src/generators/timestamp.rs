//! Calendar-date derivers.
//!
//! Dates are offsets in whole days from a reference instant supplied by the
//! caller, never from the wall clock, so they replay exactly.

use super::{bounded_int, Draw};
use crate::error::GeneratorError;
use chrono::{DateTime, Duration, Utc};

/// `reference - (days_ago + bounded_int(0, variance_days))` days.
///
/// The result lies in `[reference - days_ago - variance_days, reference - days_ago]`.
/// An offset that leaves chrono's representable range is an
/// [`GeneratorError::InvalidRange`].
pub fn past_date<D: Draw + ?Sized>(
    src: &mut D,
    reference: DateTime<Utc>,
    days_ago: i64,
    variance_days: i64,
) -> Result<DateTime<Utc>, GeneratorError> {
    let jitter = bounded_int(src, 0, variance_days)?;
    days_ago
        .checked_add(jitter)
        .and_then(Duration::try_days)
        .and_then(|offset| reference.checked_sub_signed(offset))
        .ok_or(GeneratorError::InvalidRange {
            min: days_ago as f64,
            max: days_ago as f64 + variance_days as f64,
        })
}

/// `base + bounded_int(min_days, max_days)` days.
pub fn days_after<D: Draw + ?Sized>(
    src: &mut D,
    base: DateTime<Utc>,
    min_days: i64,
    max_days: i64,
) -> Result<DateTime<Utc>, GeneratorError> {
    let offset = bounded_int(src, min_days, max_days)?;
    Duration::try_days(offset)
        .and_then(|offset| base.checked_add_signed(offset))
        .ok_or(GeneratorError::InvalidRange {
            min: min_days as f64,
            max: max_days as f64,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::ScriptedDraws;
    use crate::source::SequenceSource;

    fn reference() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-10-19T09:30:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_past_date_window() {
        let mut source = SequenceSource::new(42);
        let latest = reference() - Duration::days(30);
        let earliest = reference() - Duration::days(30 + 700);

        for _ in 0..500 {
            let date = past_date(&mut source, reference(), 30, 700).unwrap();
            assert!(date <= latest);
            assert!(date >= earliest);
        }
    }

    #[test]
    fn test_past_date_extremes() {
        let mut draws = ScriptedDraws::new(&[0.0, 1.0 - f64::EPSILON]);

        let newest = past_date(&mut draws, reference(), 5, 10).unwrap();
        let oldest = past_date(&mut draws, reference(), 5, 10).unwrap();

        assert_eq!(newest, reference() - Duration::days(5));
        assert_eq!(oldest, reference() - Duration::days(15));
    }

    #[test]
    fn test_past_date_zero_variance_still_draws() {
        let mut source = SequenceSource::new(42);
        let date = past_date(&mut source, reference(), 3, 0).unwrap();
        assert_eq!(date, reference() - Duration::days(3));
        assert_eq!(source.draws(), 1);
    }

    #[test]
    fn test_past_date_negative_variance() {
        let mut source = SequenceSource::new(42);
        assert!(matches!(
            past_date(&mut source, reference(), 0, -1),
            Err(GeneratorError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_past_date_offset_out_of_range() {
        let mut source = SequenceSource::new(42);

        assert!(matches!(
            past_date(&mut source, reference(), i64::MAX / 86_400 + 1, 0),
            Err(GeneratorError::InvalidRange { .. })
        ));
        assert!(matches!(
            past_date(&mut source, reference(), i64::MAX, 10),
            Err(GeneratorError::InvalidRange { .. })
        ));
        // Representable as a duration but before chrono's minimum date.
        assert!(matches!(
            past_date(&mut source, reference(), 1_000_000_000, 0),
            Err(GeneratorError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_days_after_offset_out_of_range() {
        let mut source = SequenceSource::new(42);

        assert!(matches!(
            days_after(&mut source, reference(), i64::MAX - 1, i64::MAX),
            Err(GeneratorError::InvalidRange { .. })
        ));
        assert!(matches!(
            days_after(&mut source, reference(), 1_000_000_000, 1_000_000_000),
            Err(GeneratorError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_days_after() {
        let mut source = SequenceSource::new(42);
        for _ in 0..100 {
            let date = days_after(&mut source, reference(), 3, 14).unwrap();
            assert!(date >= reference() + Duration::days(3));
            assert!(date <= reference() + Duration::days(14));
        }
    }
}
