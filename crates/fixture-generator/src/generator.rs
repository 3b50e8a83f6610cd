//! Batch and reset façade.

use crate::entities::{transaction, Fixture, RiskPlan};
use crate::error::GeneratorError;
use crate::overrides::Overrides;
use crate::source::{SequenceSource, DEFAULT_SEED};
use chrono::{DateTime, SubsecRound, Utc};
use fixture_core::{validate, Alert, Entity, RiskFlag, Severity, Transaction, User};
use std::marker::PhantomData;
use tracing::{debug, trace};
use uuid::Uuid;

/// Tiers cycled by [`FixtureGenerator::generate_suspicious_transactions`].
const SUSPICIOUS_TIERS: [RiskFlag; 4] = [
    RiskFlag::Low,
    RiskFlag::Medium,
    RiskFlag::High,
    RiskFlag::Critical,
];

/// Fixture generator that produces deterministic, validated entities.
///
/// The generator owns one [`SequenceSource`]; every entity it produces draws
/// from that source in order, so the Nth entity of a batch depends on the
/// N-1 before it. Callers that need isolation (parallel tests, concurrent
/// demos) construct their own generator rather than sharing one.
///
/// Dates are offsets from `reference_time`, which is captured once at
/// construction, so a reset-and-replay within a process is byte-identical.
#[derive(Debug, Clone)]
pub struct FixtureGenerator {
    /// Seeded register shared by every assembler
    source: SequenceSource,
    /// "Now" for date derivation
    reference_time: DateTime<Utc>,
}

impl FixtureGenerator {
    /// Create a generator seeded with `seed`, anchored at the current time
    /// truncated to whole seconds.
    pub fn new(seed: u64) -> Self {
        Self {
            source: SequenceSource::new(seed),
            reference_time: Utc::now().trunc_subsecs(0),
        }
    }

    /// Anchor date derivation at a fixed instant.
    pub fn with_reference_time(mut self, reference_time: DateTime<Utc>) -> Self {
        self.reference_time = reference_time;
        self
    }

    /// Rewind the source to the start of `seed`'s stream (or the default
    /// seed). The reference time is kept.
    pub fn reset_seed(&mut self, seed: Option<u64>) {
        let seed = seed.unwrap_or(DEFAULT_SEED);
        debug!("Resetting fixture seed to {}", seed);
        self.source.reset(seed);
    }

    pub fn seed(&self) -> u64 {
        self.source.seed()
    }

    pub fn reference_time(&self) -> DateTime<Utc> {
        self.reference_time
    }

    /// Draws consumed since the last reset.
    pub fn draws(&self) -> u64 {
        self.source.draws()
    }

    /// Generate one entity: assemble, merge overrides, validate.
    pub fn generate_one<E: Fixture>(&mut self, overrides: &Overrides) -> Result<E, GeneratorError> {
        let candidate = E::assemble(&mut self.source, self.reference_time, overrides)?;
        self.emit(candidate, overrides)
    }

    /// Generate `count` entities in sequence, each with the same overrides.
    pub fn generate_many<E: Fixture>(
        &mut self,
        count: usize,
        overrides: &Overrides,
    ) -> Result<Vec<E>, GeneratorError> {
        debug!(
            "Generating {} {} entities (seed {}, {} overrides)",
            count,
            E::KIND,
            self.seed(),
            overrides.len()
        );
        self.stream(count, overrides).collect()
    }

    /// Lazily generate `count` entities.
    ///
    /// The iterator borrows the generator, so draws happen as items are
    /// pulled; dropping it early leaves the source positioned after the last
    /// pulled entity.
    pub fn stream<'a, E: Fixture>(
        &'a mut self,
        count: usize,
        overrides: &'a Overrides,
    ) -> FixtureIterator<'a, E> {
        FixtureIterator {
            generator: self,
            overrides,
            remaining: count,
            _entity: PhantomData,
        }
    }

    fn emit<E: Entity>(&self, candidate: E, overrides: &Overrides) -> Result<E, GeneratorError> {
        let mut value = serde_json::to_value(&candidate)?;
        if !overrides.is_empty() {
            overrides.merge_into(&mut value);
        }

        let entity = validate::<E>(value)?;
        trace!("Generated {} after {} draws", E::KIND, self.source.draws());
        Ok(entity)
    }

    // ------------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------------

    pub fn generate_mock_user(&mut self) -> Result<User, GeneratorError> {
        self.generate_one(&Overrides::new())
    }

    pub fn generate_user(&mut self, overrides: &Overrides) -> Result<User, GeneratorError> {
        self.generate_one(overrides)
    }

    pub fn generate_users(
        &mut self,
        count: usize,
        overrides: &Overrides,
    ) -> Result<Vec<User>, GeneratorError> {
        self.generate_many(count, overrides)
    }

    // ------------------------------------------------------------------------
    // Transactions
    // ------------------------------------------------------------------------

    pub fn generate_transaction(
        &mut self,
        overrides: &Overrides,
    ) -> Result<Transaction, GeneratorError> {
        self.generate_one(overrides)
    }

    pub fn generate_transactions(
        &mut self,
        count: usize,
        overrides: &Overrides,
    ) -> Result<Vec<Transaction>, GeneratorError> {
        self.generate_many(count, overrides)
    }

    /// `count` transactions all belonging to `user_id`.
    pub fn generate_transactions_for_user(
        &mut self,
        user_id: Uuid,
        count: usize,
    ) -> Result<Vec<Transaction>, GeneratorError> {
        let overrides = Overrides::new().with("userId", user_id.to_string());
        self.generate_many(count, &overrides)
    }

    /// `count` flagged transactions whose tiers cycle low, medium, high,
    /// critical. Within each cycle the scores strictly increase because the
    /// tier bands are disjoint and ascending.
    pub fn generate_suspicious_transactions(
        &mut self,
        count: usize,
    ) -> Result<Vec<Transaction>, GeneratorError> {
        self.generate_suspicious_transactions_with(count, &Overrides::new())
    }

    /// [`Self::generate_suspicious_transactions`] with shared overrides.
    pub fn generate_suspicious_transactions_with(
        &mut self,
        count: usize,
        overrides: &Overrides,
    ) -> Result<Vec<Transaction>, GeneratorError> {
        debug!("Generating {} suspicious transactions", count);
        let mut transactions = Vec::with_capacity(count);
        for tier in SUSPICIOUS_TIERS.iter().cycle().take(count) {
            let candidate = transaction::assemble(
                &mut self.source,
                self.reference_time,
                overrides,
                RiskPlan::Forced(*tier),
            )?;
            transactions.push(self.emit(candidate, overrides)?);
        }
        Ok(transactions)
    }

    // ------------------------------------------------------------------------
    // Alerts
    // ------------------------------------------------------------------------

    pub fn generate_alert(&mut self, overrides: &Overrides) -> Result<Alert, GeneratorError> {
        self.generate_one(overrides)
    }

    pub fn generate_alerts(
        &mut self,
        count: usize,
        overrides: &Overrides,
    ) -> Result<Vec<Alert>, GeneratorError> {
        self.generate_many(count, overrides)
    }

    /// `count` alerts all belonging to `user_id`.
    pub fn generate_alerts_for_user(
        &mut self,
        user_id: Uuid,
        count: usize,
    ) -> Result<Vec<Alert>, GeneratorError> {
        let overrides = Overrides::new().with("userId", user_id.to_string());
        self.generate_many(count, &overrides)
    }

    /// `count` alerts with severities cycling low, medium, high, critical,
    /// so every severity is represented evenly.
    pub fn generate_alerts_by_severity(&mut self, count: usize) -> Result<Vec<Alert>, GeneratorError> {
        self.generate_alerts_by_severity_with(count, &Overrides::new())
    }

    /// [`Self::generate_alerts_by_severity`] with shared overrides. A
    /// `severity` in `overrides` is replaced by the cycled one.
    pub fn generate_alerts_by_severity_with(
        &mut self,
        count: usize,
        overrides: &Overrides,
    ) -> Result<Vec<Alert>, GeneratorError> {
        debug!("Generating {} severity-balanced alerts", count);
        Severity::ALL
            .iter()
            .cycle()
            .take(count)
            .map(|severity| {
                let per_alert = overrides.merged(&Overrides::new().with("severity", severity.as_str()));
                self.generate_one(&per_alert)
            })
            .collect()
    }
}

impl Default for FixtureGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

/// Iterator that lazily generates entities from a [`FixtureGenerator`].
pub struct FixtureIterator<'a, E> {
    generator: &'a mut FixtureGenerator,
    overrides: &'a Overrides,
    remaining: usize,
    _entity: PhantomData<E>,
}

impl<E: Fixture> Iterator for FixtureIterator<'_, E> {
    type Item = Result<E, GeneratorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.generate_one(self.overrides))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E: Fixture> ExactSizeIterator for FixtureIterator<'_, E> {}
