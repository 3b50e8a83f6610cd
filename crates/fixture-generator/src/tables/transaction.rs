//! Transaction correlation tables.
//!
//! `category → (type, amount range, merchants)` and
//! `risk tier → (score band, reasons)`.

use super::{FloatRange, IntRange};
use fixture_core::{RiskFlag, TransactionCategory, TransactionType};

pub const CURRENCY: &str = "USD";

/// Share of transactions that have settled.
pub const COMPLETED_PROBABILITY: f64 = 0.92;

/// Transactions fall within this many days before the reference time.
pub const HISTORY_DAYS: i64 = 90;

/// What a category implies for the rest of the transaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryProfile {
    pub kind: TransactionType,
    /// Unsigned magnitude; the sign comes from `kind`.
    pub amount: FloatRange,
    pub merchants: &'static [&'static str],
}

impl CategoryProfile {
    const fn new(
        kind: TransactionType,
        min: f64,
        max: f64,
        merchants: &'static [&'static str],
    ) -> Self {
        Self {
            kind,
            amount: FloatRange::new(min, max),
            merchants,
        }
    }
}

pub fn category_profile(category: TransactionCategory) -> CategoryProfile {
    use TransactionCategory as C;
    use TransactionType::{Expense, Income, Transfer};

    match category {
        C::Salary => CategoryProfile::new(
            Income,
            3_000.0,
            12_000.0,
            &["Acme Corp Payroll", "Globex Payroll", "Initech Direct Deposit"],
        ),
        C::Freelance => CategoryProfile::new(
            Income,
            200.0,
            4_000.0,
            &["Upwork", "Fiverr", "Stripe Payout", "Client Invoice"],
        ),
        C::Investment => CategoryProfile::new(
            Income,
            50.0,
            2_500.0,
            &["Vanguard Dividend", "Fidelity Dividend", "Schwab Interest"],
        ),
        C::Groceries => CategoryProfile::new(
            Expense,
            20.0,
            350.0,
            &["Whole Foods", "Trader Joe's", "Safeway", "Costco", "Kroger"],
        ),
        C::Dining => CategoryProfile::new(
            Expense,
            10.0,
            180.0,
            &["Chipotle", "Starbucks", "Sweetgreen", "DoorDash", "Local Bistro"],
        ),
        C::Utilities => CategoryProfile::new(
            Expense,
            60.0,
            400.0,
            &["PG&E", "Comcast", "City Water", "Verizon"],
        ),
        C::Rent => CategoryProfile::new(
            Expense,
            900.0,
            3_500.0,
            &["Greystar Properties", "Oakwood Apartments", "Landlord Transfer"],
        ),
        C::Shopping => CategoryProfile::new(
            Expense,
            15.0,
            900.0,
            &["Amazon", "Target", "Best Buy", "IKEA", "Nordstrom"],
        ),
        C::Travel => CategoryProfile::new(
            Expense,
            100.0,
            3_000.0,
            &["Delta Air Lines", "Airbnb", "Marriott", "Uber", "Expedia"],
        ),
        C::Entertainment => CategoryProfile::new(
            Expense,
            8.0,
            150.0,
            &["AMC Theatres", "Ticketmaster", "Steam", "Spotify Live"],
        ),
        C::Healthcare => CategoryProfile::new(
            Expense,
            25.0,
            1_200.0,
            &["CVS Pharmacy", "Kaiser Permanente", "One Medical", "Walgreens"],
        ),
        C::Subscriptions => CategoryProfile::new(
            Expense,
            5.0,
            60.0,
            &["Netflix", "Spotify", "iCloud", "NYTimes", "Adobe"],
        ),
        C::Transfer => CategoryProfile::new(
            Transfer,
            50.0,
            5_000.0,
            &["Zelle Transfer", "Venmo", "Savings Transfer", "Wire Transfer"],
        ),
    }
}

/// Map a risk roll in `[0, 1)` to a tier.
///
/// `> 0.95` critical, `> 0.90` high, `> 0.85` medium, `> 0.80` low,
/// otherwise none. Roughly one transaction in five is flagged.
pub fn risk_tier_for_roll(roll: f64) -> RiskFlag {
    if roll > 0.95 {
        RiskFlag::Critical
    } else if roll > 0.90 {
        RiskFlag::High
    } else if roll > 0.85 {
        RiskFlag::Medium
    } else if roll > 0.80 {
        RiskFlag::Low
    } else {
        RiskFlag::None
    }
}

/// Score band for a tier. `None` carries no score.
pub fn risk_score_band(flag: RiskFlag) -> Option<IntRange> {
    match flag {
        RiskFlag::None => None,
        RiskFlag::Low => Some(IntRange::new(20, 39)),
        RiskFlag::Medium => Some(IntRange::new(40, 69)),
        RiskFlag::High => Some(IntRange::new(70, 89)),
        RiskFlag::Critical => Some(IntRange::new(90, 100)),
    }
}

/// Reason pool for a tier. Empty for `None`.
pub fn risk_reasons(flag: RiskFlag) -> &'static [&'static str] {
    match flag {
        RiskFlag::None => &[],
        RiskFlag::Low => &[
            "First purchase at this merchant",
            "Slightly above usual amount for category",
            "Purchase outside usual hours",
        ],
        RiskFlag::Medium => &[
            "Amount 3x above category average",
            "New device used for this payment",
            "Merchant category rarely used",
        ],
        RiskFlag::High => &[
            "Transaction from unfamiliar location",
            "Rapid succession of charges",
            "Card-not-present charge after recent password reset",
        ],
        RiskFlag::Critical => &[
            "Merchant linked to known fraud reports",
            "Card used in two countries within an hour",
            "Account takeover pattern detected",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_table_total() {
        for category in TransactionCategory::ALL {
            let profile = category_profile(*category);
            assert!(profile.amount.is_ordered(), "{category}");
            assert!(profile.amount.min > 0.0, "{category}");
            assert!(!profile.merchants.is_empty(), "{category}");
        }
    }

    #[test]
    fn test_category_types() {
        assert_eq!(
            category_profile(TransactionCategory::Salary).kind,
            TransactionType::Income
        );
        assert_eq!(
            category_profile(TransactionCategory::Rent).kind,
            TransactionType::Expense
        );
        assert_eq!(
            category_profile(TransactionCategory::Transfer).kind,
            TransactionType::Transfer
        );
    }

    #[test]
    fn test_every_type_has_a_category() {
        for kind in TransactionType::ALL {
            assert!(TransactionCategory::ALL
                .iter()
                .any(|c| category_profile(*c).kind == *kind));
        }
    }

    #[test]
    fn test_risk_tier_thresholds() {
        assert_eq!(risk_tier_for_roll(0.0), RiskFlag::None);
        assert_eq!(risk_tier_for_roll(0.80), RiskFlag::None);
        assert_eq!(risk_tier_for_roll(0.8001), RiskFlag::Low);
        assert_eq!(risk_tier_for_roll(0.85), RiskFlag::Low);
        assert_eq!(risk_tier_for_roll(0.86), RiskFlag::Medium);
        assert_eq!(risk_tier_for_roll(0.90), RiskFlag::Medium);
        assert_eq!(risk_tier_for_roll(0.93), RiskFlag::High);
        assert_eq!(risk_tier_for_roll(0.95), RiskFlag::High);
        assert_eq!(risk_tier_for_roll(0.951), RiskFlag::Critical);
        assert_eq!(risk_tier_for_roll(0.999), RiskFlag::Critical);
    }

    #[test]
    fn test_risk_bands_total_and_ascending() {
        assert!(risk_score_band(RiskFlag::None).is_none());
        assert!(risk_reasons(RiskFlag::None).is_empty());

        let mut previous_max = -1;
        for flag in &RiskFlag::ALL[1..] {
            let band = risk_score_band(*flag).unwrap();
            assert!(band.is_ordered());
            assert!(band.min > previous_max, "{flag} overlaps the tier below");
            assert!(band.max <= 100);
            assert!(!risk_reasons(*flag).is_empty());
            previous_max = band.max;
        }
    }
}
