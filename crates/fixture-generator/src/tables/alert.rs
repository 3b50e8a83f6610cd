//! Alert correlation tables.
//!
//! `severity → score band` and `type → (titles, messages, expiry window)`.

use super::IntRange;
use fixture_core::{AlertType, Severity};

/// Share of alerts already marked read.
pub const READ_PROBABILITY: f64 = 0.35;

/// Alerts fall within this many days before the reference time.
pub const RECENT_DAYS: i64 = 14;

pub fn severity_band(severity: Severity) -> IntRange {
    match severity {
        Severity::Low => IntRange::new(10, 30),
        Severity::Medium => IntRange::new(31, 60),
        Severity::High => IntRange::new(61, 85),
        Severity::Critical => IntRange::new(86, 100),
    }
}

/// High and critical alerts ask the user to act.
pub fn requires_action(severity: Severity) -> bool {
    severity >= Severity::High
}

/// Copy and lifetime of one alert type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertTemplate {
    pub titles: &'static [&'static str],
    pub messages: &'static [&'static str],
    /// Days after creation that the alert expires, if it does.
    pub expiry_days: Option<IntRange>,
}

pub fn alert_template(kind: AlertType) -> AlertTemplate {
    match kind {
        AlertType::Fraud => AlertTemplate {
            titles: &["Possible fraud detected", "Suspicious charge blocked"],
            messages: &[
                "We paused a card-not-present charge that doesn't match your usual activity.",
                "A charge from an unfamiliar merchant was declined. Confirm if it was you.",
                "Multiple rapid charges were attempted on your card.",
            ],
            expiry_days: None,
        },
        AlertType::UnusualSpending => AlertTemplate {
            titles: &["Unusual spending", "Spending spike this week"],
            messages: &[
                "Your dining spend is 2.4x your monthly average.",
                "Shopping purchases this week exceed your usual pattern.",
                "Travel spending jumped compared to last month.",
            ],
            expiry_days: Some(IntRange::new(7, 30)),
        },
        AlertType::LargeTransaction => AlertTemplate {
            titles: &["Large transaction", "Large transfer sent"],
            messages: &[
                "A transaction above your alert threshold just posted.",
                "A transfer larger than usual left your checking account.",
            ],
            expiry_days: Some(IntRange::new(3, 10)),
        },
        AlertType::LowBalance => AlertTemplate {
            titles: &["Low balance", "Balance below threshold"],
            messages: &[
                "Your checking balance dropped below your safety buffer.",
                "Upcoming bills may exceed your available balance.",
            ],
            expiry_days: Some(IntRange::new(1, 7)),
        },
        AlertType::BillDue => AlertTemplate {
            titles: &["Bill due soon", "Payment reminder"],
            messages: &[
                "Your electricity bill is due in 3 days.",
                "Your credit card minimum payment is coming up.",
                "Rent is due at the start of next week.",
            ],
            expiry_days: Some(IntRange::new(3, 14)),
        },
        AlertType::Security => AlertTemplate {
            titles: &["New sign-in", "Security settings changed"],
            messages: &[
                "A new device signed in to your account.",
                "Your password was changed. Review if this wasn't you.",
                "Two-factor authentication was turned off.",
            ],
            expiry_days: None,
        },
        AlertType::CreditChange => AlertTemplate {
            titles: &["Credit score changed", "Credit report update"],
            messages: &[
                "Your credit score moved since last month.",
                "A new account was reported on your credit file.",
                "A hard inquiry appeared on your credit report.",
            ],
            expiry_days: Some(IntRange::new(14, 30)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_bands_total_and_ascending() {
        let mut previous_max = 0;
        for severity in Severity::ALL {
            let band = severity_band(*severity);
            assert!(band.is_ordered());
            assert!(band.min > previous_max, "{severity} overlaps the band below");
            previous_max = band.max;
        }
        assert_eq!(previous_max, 100);
    }

    #[test]
    fn test_exact_bands() {
        assert_eq!(severity_band(Severity::Low), IntRange::new(10, 30));
        assert_eq!(severity_band(Severity::Medium), IntRange::new(31, 60));
        assert_eq!(severity_band(Severity::High), IntRange::new(61, 85));
        assert_eq!(severity_band(Severity::Critical), IntRange::new(86, 100));
    }

    #[test]
    fn test_template_table_total() {
        for kind in AlertType::ALL {
            let template = alert_template(*kind);
            assert!(!template.titles.is_empty(), "{kind}");
            assert!(!template.messages.is_empty(), "{kind}");
            if let Some(window) = template.expiry_days {
                assert!(window.is_ordered(), "{kind}");
                assert!(window.min > 0, "{kind}");
            }
        }
    }

    #[test]
    fn test_requires_action() {
        assert!(!requires_action(Severity::Low));
        assert!(!requires_action(Severity::Medium));
        assert!(requires_action(Severity::High));
        assert!(requires_action(Severity::Critical));
    }
}
