//! Entity types for the fintech dashboard fixtures.
//!
//! Every categorical field is a closed enum. Each enum exposes `ALL` (the
//! variants in declaration order) and `NAMES` (their wire names, in the same
//! order) so that schema definitions and correlation tables can be checked
//! against the full variant set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:tt),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $wire)] $variant),+
        }

        impl $name {
            /// All variants in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire names, index-aligned with [`Self::ALL`].
            pub const NAMES: &'static [&'static str] = &[$($wire),+];

            /// The wire name of this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Spending or earning category of a transaction.
    pub enum TransactionCategory {
        Salary => "salary",
        Freelance => "freelance",
        Investment => "investment",
        Groceries => "groceries",
        Dining => "dining",
        Utilities => "utilities",
        Rent => "rent",
        Shopping => "shopping",
        Travel => "travel",
        Entertainment => "entertainment",
        Healthcare => "healthcare",
        Subscriptions => "subscriptions",
        Transfer => "transfer",
    }
}

wire_enum! {
    /// Direction of money movement.
    pub enum TransactionType {
        Income => "income",
        Expense => "expense",
        Transfer => "transfer",
    }
}

impl TransactionType {
    /// Sign applied to generated amounts of this type.
    pub fn sign(&self) -> f64 {
        match self {
            TransactionType::Income => 1.0,
            TransactionType::Expense | TransactionType::Transfer => -1.0,
        }
    }
}

wire_enum! {
    /// Settlement state of a transaction.
    pub enum TransactionStatus {
        Completed => "completed",
        Pending => "pending",
    }
}

wire_enum! {
    /// Risk tier attached to a transaction. `None` carries no score.
    pub enum RiskFlag {
        None => "none",
        Low => "low",
        Medium => "medium",
        High => "high",
        Critical => "critical",
    }
}

wire_enum! {
    /// Alert severity. Ordered from least to most severe.
    pub enum Severity {
        Low => "low",
        Medium => "medium",
        High => "high",
        Critical => "critical",
    }
}

wire_enum! {
    /// Kind of alert raised by the Protect engine.
    pub enum AlertType {
        Fraud => "fraud",
        UnusualSpending => "unusual_spending",
        LargeTransaction => "large_transaction",
        LowBalance => "low_balance",
        BillDue => "bill_due",
        Security => "security",
        CreditChange => "credit_change",
    }
}

/// Entity kinds known to the schema layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    User,
    Transaction,
    Alert,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::User => f.write_str("user"),
            EntityKind::Transaction => f.write_str("transaction"),
            EntityKind::Alert => f.write_str("alert"),
        }
    }
}

/// A dashboard user with their headline financial figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    /// "First Last"
    pub name: String,
    pub email: String,
    pub protect_score: u8,
    pub net_worth: i64,
    pub monthly_income: i64,
    /// Fraction of income saved, 0.0 to 1.0.
    pub savings_rate: f64,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// First token of `name`.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or_default()
    }
}

/// A single account movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Signed amount: positive for income, negative otherwise.
    pub amount: f64,
    pub currency: String,
    pub category: TransactionCategory,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub merchant: String,
    pub status: TransactionStatus,
    pub timestamp: DateTime<Utc>,
    pub risk_flag: RiskFlag,
    pub risk_score: Option<u8>,
    pub risk_reasons: Vec<String>,
}

/// A Protect engine alert shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub kind: AlertType,
    pub severity: Severity,
    pub risk_flag: Severity,
    pub risk_score: u8,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub read: bool,
    pub action_required: bool,
}
