//! Core types for the fintech-fixtures framework.
//!
//! This crate is the schema layer that the fixture generator depends on:
//!
//! - [`types`] - the dashboard entities (`User`, `Transaction`, `Alert`) and
//!   their closed categorical enums
//! - [`schema`] - per-entity field definitions and the validation gate
//!
//! # Architecture
//!
//! ```text
//! fixture-core (this crate)
//!    │
//!    └─── fixture-generator  (assembles candidates, validates them here)
//!            │
//!            └─── fintech-fixtures  (scenario files, export, CLI)
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_core::{validate, Alert};
//! use serde_json::json;
//!
//! let candidate = json!({
//!     "id": "6f1c2a3e-1b2c-4d5e-8f90-0123456789ab",
//!     "userId": "0b7e2d4c-9a8b-4c3d-a2e1-fedcba987654",
//!     "type": "bill_due",
//!     "severity": "low",
//!     "riskFlag": "low",
//!     "riskScore": 12,
//!     "title": "Bill due soon",
//!     "message": "Your electricity bill is due in 3 days.",
//!     "createdAt": "2026-10-01T12:00:00Z",
//!     "expiresAt": "2026-10-04T12:00:00Z",
//!     "read": false,
//!     "actionRequired": false
//! });
//!
//! let alert: Alert = validate(candidate).unwrap();
//! assert_eq!(alert.risk_score, 12);
//! ```

pub mod schema;
pub mod types;

// Re-exports for convenience
pub use schema::{
    schema_by_name, validate, Entity, EntitySchema, FieldDefinition, FieldType, SchemaError,
    ValidationError, Violation, ALERT_SCHEMA, TRANSACTION_SCHEMA, USER_SCHEMA,
};
pub use types::{
    Alert, AlertType, EntityKind, RiskFlag, Severity, Transaction, TransactionCategory,
    TransactionStatus, TransactionType, User,
};
