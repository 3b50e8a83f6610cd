//! User assembler.

use super::Fixture;
use crate::error::GeneratorError;
use crate::generators::{bounded_float, bounded_int, choice, identifier, past_date, round_to};
use crate::overrides::Overrides;
use crate::source::SequenceSource;
use crate::tables::user::{
    email_for, ACCOUNT_AGE_VARIANCE_DAYS, ACCOUNT_MIN_AGE_DAYS, EMAIL_DISCRIMINATOR, FIRST_NAMES,
    LAST_NAMES, MONTHLY_INCOME, NET_WORTH, PROTECT_SCORE, SAVINGS_RATE,
};
use chrono::{DateTime, Utc};
use fixture_core::User;

impl Fixture for User {
    /// Draw order: id, first name, last name, email discriminator,
    /// protectScore, netWorth, monthlyIncome, savingsRate, createdAt.
    fn assemble(
        source: &mut SequenceSource,
        reference_time: DateTime<Utc>,
        _overrides: &Overrides,
    ) -> Result<Self, GeneratorError> {
        let id = identifier(source);
        let first = *choice(source, "first names", FIRST_NAMES)?;
        let last = *choice(source, "last names", LAST_NAMES)?;
        let discriminator =
            bounded_int(source, EMAIL_DISCRIMINATOR.min, EMAIL_DISCRIMINATOR.max)?;

        let protect_score = bounded_int(source, PROTECT_SCORE.min, PROTECT_SCORE.max)?;
        let net_worth = bounded_int(source, NET_WORTH.min, NET_WORTH.max)?;
        let monthly_income = bounded_int(source, MONTHLY_INCOME.min, MONTHLY_INCOME.max)?;
        let savings_rate = bounded_float(source, SAVINGS_RATE.min, SAVINGS_RATE.max)?;
        let created_at = past_date(
            source,
            reference_time,
            ACCOUNT_MIN_AGE_DAYS,
            ACCOUNT_AGE_VARIANCE_DAYS,
        )?;

        Ok(User {
            id,
            name: format!("{first} {last}"),
            email: email_for(first, last, discriminator),
            protect_score: protect_score as u8,
            net_worth,
            monthly_income,
            savings_rate: round_to(savings_rate, 2),
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn reference() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-10-19T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_user_fields_in_range() {
        let mut source = SequenceSource::new(42);

        for _ in 0..500 {
            let user = User::assemble(&mut source, reference(), &Overrides::new()).unwrap();
            assert!(PROTECT_SCORE.contains(user.protect_score as i64));
            assert!(NET_WORTH.contains(user.net_worth));
            assert!(MONTHLY_INCOME.contains(user.monthly_income));
            assert!((0.05..=0.45).contains(&user.savings_rate));
            assert!(user.created_at <= reference() - Duration::days(30));
            assert!(user.created_at >= reference() - Duration::days(730));
        }
    }

    #[test]
    fn test_email_follows_name() {
        let mut source = SequenceSource::new(7);
        let user = User::assemble(&mut source, reference(), &Overrides::new()).unwrap();

        let mut parts = user.name.split(' ');
        let first = parts.next().unwrap().to_lowercase();
        let last = parts.next().unwrap().to_lowercase();
        assert!(user.email.starts_with(&format!("{first}.{last}")));
        assert!(user.email.ends_with("@example.com"));
    }

    #[test]
    fn test_user_draw_count() {
        let mut source = SequenceSource::new(1);
        User::assemble(&mut source, reference(), &Overrides::new()).unwrap();
        // 31 for the id, then one per remaining field.
        assert_eq!(source.draws(), 31 + 8);
    }
}
