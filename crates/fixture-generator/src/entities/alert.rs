//! Alert assembler.

use super::Fixture;
use crate::error::GeneratorError;
use crate::generators::{bounded_int, chance, choice, days_after, identifier, past_date};
use crate::overrides::Overrides;
use crate::source::SequenceSource;
use crate::tables::alert::{
    alert_template, requires_action, severity_band, READ_PROBABILITY, RECENT_DAYS,
};
use chrono::{DateTime, Utc};
use fixture_core::{Alert, AlertType, Severity};

impl Fixture for Alert {
    /// Draw order: id, userId, type (unless overridden), severity (unless
    /// overridden), title, message, riskScore, createdAt, read, and
    /// expiresAt for types with an expiry window.
    fn assemble(
        source: &mut SequenceSource,
        reference_time: DateTime<Utc>,
        overrides: &Overrides,
    ) -> Result<Self, GeneratorError> {
        let id = identifier(source);
        let user_id = identifier(source);

        let kind = match overrides.key::<AlertType>("type")? {
            Some(kind) => kind,
            None => *choice(source, "alert types", AlertType::ALL)?,
        };
        let severity = match overrides.key::<Severity>("severity")? {
            Some(severity) => severity,
            None => *choice(source, "severities", Severity::ALL)?,
        };

        let template = alert_template(kind);
        let title = *choice(source, "alert titles", template.titles)?;
        let message = *choice(source, "alert messages", template.messages)?;

        let band = severity_band(severity);
        let risk_score = bounded_int(source, band.min, band.max)?;

        let created_at = past_date(source, reference_time, 0, RECENT_DAYS)?;
        let read = chance(source, READ_PROBABILITY);
        let expires_at = template
            .expiry_days
            .map(|window| days_after(source, created_at, window.min, window.max))
            .transpose()?;

        Ok(Alert {
            id,
            user_id,
            kind,
            severity,
            risk_flag: severity,
            risk_score: risk_score as u8,
            title: title.to_string(),
            message: message.to_string(),
            created_at,
            expires_at,
            read,
            action_required: requires_action(severity),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-10-19T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_alert_consistency() {
        let mut source = SequenceSource::new(42);

        for _ in 0..1000 {
            let alert = Alert::assemble(&mut source, reference(), &Overrides::new()).unwrap();
            let template = alert_template(alert.kind);

            assert_eq!(alert.risk_flag, alert.severity);
            assert!(severity_band(alert.severity).contains(alert.risk_score as i64));
            assert!(template.titles.contains(&alert.title.as_str()));
            assert!(template.messages.contains(&alert.message.as_str()));
            assert_eq!(alert.action_required, alert.severity >= Severity::High);
            assert_eq!(alert.expires_at.is_some(), template.expiry_days.is_some());
            if let Some(expires_at) = alert.expires_at {
                assert!(expires_at > alert.created_at);
            }
        }
    }

    #[test]
    fn test_severity_override_drives_band() {
        let mut source = SequenceSource::new(8);
        let overrides = Overrides::new().with("severity", "critical");

        for _ in 0..100 {
            let alert = Alert::assemble(&mut source, reference(), &overrides).unwrap();
            assert_eq!(alert.severity, Severity::Critical);
            assert!((86..=100).contains(&alert.risk_score));
            assert!(alert.action_required);
        }
    }

    #[test]
    fn test_type_override_drives_template() {
        let mut source = SequenceSource::new(8);
        let overrides = Overrides::new().with("type", "security");

        let alert = Alert::assemble(&mut source, reference(), &overrides).unwrap();
        assert_eq!(alert.kind, AlertType::Security);
        assert!(alert.expires_at.is_none());
    }

    #[test]
    fn test_invalid_severity_override() {
        let mut source = SequenceSource::new(8);
        let overrides = Overrides::new().with("severity", "none");

        assert!(matches!(
            Alert::assemble(&mut source, reference(), &overrides),
            Err(GeneratorError::InvalidOverride { .. })
        ));
    }

    #[test]
    fn test_every_severity_reached() {
        let mut source = SequenceSource::new(77);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            let alert = Alert::assemble(&mut source, reference(), &Overrides::new()).unwrap();
            seen.insert(alert.severity);
        }
        assert_eq!(seen.len(), Severity::ALL.len());
    }
}
