//! Transaction assembler.

use super::Fixture;
use crate::error::GeneratorError;
use crate::generators::{
    bounded_float, bounded_int, chance, choice, identifier, past_date, round_to,
};
use crate::overrides::Overrides;
use crate::source::SequenceSource;
use crate::tables::transaction::{
    category_profile, risk_reasons, risk_score_band, risk_tier_for_roll, COMPLETED_PROBABILITY,
    CURRENCY, HISTORY_DAYS,
};
use chrono::{DateTime, Utc};
use fixture_core::{RiskFlag, Transaction, TransactionCategory, TransactionStatus};

/// How the risk tier of a transaction is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskPlan {
    /// One draw mapped through the tier thresholds.
    Rolled,
    /// Fixed tier; the roll is skipped and consumes no draw.
    Forced(RiskFlag),
}

/// Assemble a transaction.
///
/// Draw order: id, userId, category (unless overridden), amount, merchant,
/// status, timestamp, risk roll (unless forced), then for flagged tiers the
/// risk score and one reason.
pub fn assemble(
    source: &mut SequenceSource,
    reference_time: DateTime<Utc>,
    overrides: &Overrides,
    risk: RiskPlan,
) -> Result<Transaction, GeneratorError> {
    let id = identifier(source);
    let user_id = identifier(source);

    let category = match overrides.key::<TransactionCategory>("category")? {
        Some(category) => category,
        None => *choice(source, "transaction categories", TransactionCategory::ALL)?,
    };
    let profile = category_profile(category);

    let magnitude = bounded_float(source, profile.amount.min, profile.amount.max)?;
    let merchant = *choice(source, "merchants", profile.merchants)?;
    let status = if chance(source, COMPLETED_PROBABILITY) {
        TransactionStatus::Completed
    } else {
        TransactionStatus::Pending
    };
    let timestamp = past_date(source, reference_time, 0, HISTORY_DAYS)?;

    let risk_flag = match risk {
        RiskPlan::Rolled => risk_tier_for_roll(source.draw()),
        RiskPlan::Forced(flag) => flag,
    };
    let (risk_score, risk_reasons) = match risk_score_band(risk_flag) {
        None => (None, Vec::new()),
        Some(band) => {
            let score = bounded_int(source, band.min, band.max)?;
            let reason = *choice(source, "risk reasons", risk_reasons(risk_flag))?;
            (Some(score as u8), vec![reason.to_string()])
        }
    };

    Ok(Transaction {
        id,
        user_id,
        amount: round_to(magnitude, 2) * profile.kind.sign(),
        currency: CURRENCY.to_string(),
        category,
        kind: profile.kind,
        merchant: merchant.to_string(),
        status,
        timestamp,
        risk_flag,
        risk_score,
        risk_reasons,
    })
}

impl Fixture for Transaction {
    fn assemble(
        source: &mut SequenceSource,
        reference_time: DateTime<Utc>,
        overrides: &Overrides,
    ) -> Result<Self, GeneratorError> {
        assemble(source, reference_time, overrides, RiskPlan::Rolled)
    }
}
