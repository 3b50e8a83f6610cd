//! User field pools and ranges.
//!
//! Users have no categorical key; every field is an independent draw.

use super::{FloatRange, IntRange};

pub const FIRST_NAMES: &[&str] = &[
    "Ava", "Liam", "Maya", "Noah", "Zoe", "Ethan", "Priya", "Lucas", "Amara", "Diego", "Hana",
    "Omar", "Chloe", "Mateo", "Leila", "Kai", "Sofia", "Jonah", "Nia", "Theo",
];

pub const LAST_NAMES: &[&str] = &[
    "Chen", "Patel", "Garcia", "Johnson", "Okafor", "Nguyen", "Rossi", "Kim", "Silva", "Cohen",
    "Murphy", "Haddad", "Schmidt", "Tanaka", "Adeyemi", "Larsen",
];

pub const EMAIL_DOMAIN: &str = "example.com";

/// Numeric suffix that keeps same-name emails apart.
pub const EMAIL_DISCRIMINATOR: IntRange = IntRange::new(1, 999);

pub const PROTECT_SCORE: IntRange = IntRange::new(60, 98);

pub const NET_WORTH: IntRange = IntRange::new(25_000, 2_500_000);

pub const MONTHLY_INCOME: IntRange = IntRange::new(2_500, 30_000);

pub const SAVINGS_RATE: FloatRange = FloatRange::new(0.05, 0.45);

/// Account age: at least this many days old...
pub const ACCOUNT_MIN_AGE_DAYS: i64 = 30;
/// ...plus up to this many more.
pub const ACCOUNT_AGE_VARIANCE_DAYS: i64 = 700;

/// `first.last{n}@example.com`, lower-cased.
pub fn email_for(first: &str, last: &str, discriminator: i64) -> String {
    format!(
        "{}.{}{}@{}",
        first.to_lowercase(),
        last.to_lowercase(),
        discriminator,
        EMAIL_DOMAIN
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pools_non_empty() {
        assert!(!FIRST_NAMES.is_empty());
        assert!(!LAST_NAMES.is_empty());
        assert!(FIRST_NAMES
            .iter()
            .chain(LAST_NAMES)
            .all(|n| !n.is_empty() && !n.contains(char::is_whitespace)));
    }

    #[test]
    fn test_ranges_ordered() {
        for range in [EMAIL_DISCRIMINATOR, PROTECT_SCORE, NET_WORTH, MONTHLY_INCOME] {
            assert!(range.is_ordered(), "{range:?}");
        }
        assert!(SAVINGS_RATE.is_ordered());
        assert!(PROTECT_SCORE.min >= 0 && PROTECT_SCORE.max <= 100);
        assert!(SAVINGS_RATE.min >= 0.0 && SAVINGS_RATE.max <= 1.0);
    }

    #[test]
    fn test_email_for() {
        assert_eq!(email_for("Maya", "Patel", 7), "maya.patel7@example.com");
    }
}
