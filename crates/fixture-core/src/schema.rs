//! Schema definitions and the validation gate.
//!
//! Each entity kind has a static [`EntitySchema`] describing the shape of its
//! serialized (camelCase JSON) form. [`validate`] checks a candidate value
//! against that shape and, if every field conforms, deserializes it into the
//! strongly typed entity.
//!
//! The schema checks shape only: required fields, nullability, JSON types,
//! enum membership, numeric bounds and string formats. Cross-field business
//! rules (for example "a critical alert scores at least 86") are not part of
//! the schema, so caller overrides may break them and still validate.

use crate::types::{
    Alert, AlertType, EntityKind, RiskFlag, Severity, Transaction, TransactionCategory,
    TransactionStatus, TransactionType, User,
};
use chrono::DateTime;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema lookups.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Unknown entity kind name
    #[error("Unknown entity kind: {0}")]
    UnknownEntity(String),

    /// Field not found in entity schema
    #[error("Field '{field}' not found in {entity} schema")]
    FieldNotFound { entity: EntityKind, field: String },
}

/// A single way in which a candidate fails its schema.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Violation {
    #[error("missing required field '{field}'")]
    MissingField { field: String },

    #[error("field '{field}' is not nullable")]
    UnexpectedNull { field: String },

    #[error("field '{field}' expected {expected}, got {actual}")]
    WrongType {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("field '{field}' value '{value}' is not one of {allowed:?}")]
    NotInEnum {
        field: String,
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("field '{field}' value {value} is outside [{min}, {max}]")]
    OutOfBounds {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("field '{field}' is not a valid {format}: {value}")]
    BadFormat {
        field: String,
        format: &'static str,
        value: String,
    },

    #[error("unknown field '{field}'")]
    UnknownField { field: String },

    #[error("candidate is not an object")]
    NotAnObject,

    #[error("typed decode failed: {0}")]
    Decode(String),
}

/// A candidate entity failed the validation gate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{entity} failed validation: {}", format_violations(.violations))]
pub struct ValidationError {
    pub entity: EntityKind,
    pub violations: Vec<Violation>,
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// ============================================================================
// Schema Types
// ============================================================================

/// Shape of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldType {
    /// Hyphenated UUID string
    Uuid,

    /// Any string
    Text,

    /// `local@domain.tld`
    Email,

    /// RFC 3339 timestamp string
    Timestamp,

    Bool,

    /// Integer with optional inclusive bounds
    Integer {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<i64>,
    },

    /// Number with optional inclusive bounds
    Float {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },

    /// String drawn from a closed set
    Enum { values: &'static [&'static str] },

    /// Array of strings
    TextArray,
}

/// A named field with its shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldDefinition {
    pub name: &'static str,

    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Whether `null` is accepted. Nullable fields must still be present.
    pub nullable: bool,
}

impl FieldDefinition {
    const fn required(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            nullable: false,
        }
    }

    const fn nullable(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            nullable: true,
        }
    }
}

/// Shape of one entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EntitySchema {
    pub entity: EntityKind,
    pub fields: &'static [FieldDefinition],
}

impl EntitySchema {
    /// Get a field definition by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get a field definition by name, failing if the schema lacks it.
    pub fn field(&self, name: &str) -> Result<&FieldDefinition, SchemaError> {
        self.get_field(name).ok_or_else(|| SchemaError::FieldNotFound {
            entity: self.entity,
            field: name.to_string(),
        })
    }

    /// Get all field names in declaration order.
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }

    /// Check a candidate against this schema, collecting every violation.
    pub fn check(&self, candidate: &Value) -> Vec<Violation> {
        let Some(object) = candidate.as_object() else {
            return vec![Violation::NotAnObject];
        };

        let mut violations = Vec::new();

        for field in self.fields {
            match object.get(field.name) {
                None => violations.push(Violation::MissingField {
                    field: field.name.to_string(),
                }),
                Some(Value::Null) if field.nullable => {}
                Some(Value::Null) => violations.push(Violation::UnexpectedNull {
                    field: field.name.to_string(),
                }),
                Some(value) => {
                    if let Some(violation) = check_value(field.name, &field.field_type, value) {
                        violations.push(violation);
                    }
                }
            }
        }

        for key in object.keys() {
            if self.get_field(key).is_none() {
                violations.push(Violation::UnknownField { field: key.clone() });
            }
        }

        violations
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn wrong_type(field: &str, expected: &'static str, value: &Value) -> Violation {
    Violation::WrongType {
        field: field.to_string(),
        expected,
        actual: json_type_name(value),
    }
}

fn check_bounds(field: &str, value: f64, min: Option<f64>, max: Option<f64>) -> Option<Violation> {
    let below = min.is_some_and(|m| value < m);
    let above = max.is_some_and(|m| value > m);
    (below || above).then(|| Violation::OutOfBounds {
        field: field.to_string(),
        value,
        min: min.unwrap_or(f64::NEG_INFINITY),
        max: max.unwrap_or(f64::INFINITY),
    })
}

fn is_email(s: &str) -> bool {
    let mut parts = s.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !s.contains(char::is_whitespace)
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        _ => false,
    }
}

fn check_value(field: &str, field_type: &FieldType, value: &Value) -> Option<Violation> {
    match field_type {
        FieldType::Text => (!value.is_string()).then(|| wrong_type(field, "string", value)),

        FieldType::Bool => (!value.is_boolean()).then(|| wrong_type(field, "bool", value)),

        FieldType::Uuid | FieldType::Email | FieldType::Timestamp => {
            let Some(s) = value.as_str() else {
                return Some(wrong_type(field, "string", value));
            };
            let (ok, format) = match field_type {
                FieldType::Uuid => (Uuid::parse_str(s).is_ok(), "uuid"),
                FieldType::Email => (is_email(s), "email"),
                _ => (DateTime::parse_from_rfc3339(s).is_ok(), "timestamp"),
            };
            (!ok).then(|| Violation::BadFormat {
                field: field.to_string(),
                format,
                value: s.to_string(),
            })
        }

        FieldType::Integer { min, max } => {
            let Some(n) = value.as_i64() else {
                return Some(wrong_type(field, "integer", value));
            };
            check_bounds(
                field,
                n as f64,
                min.map(|m| m as f64),
                max.map(|m| m as f64),
            )
        }

        FieldType::Float { min, max } => {
            let Some(n) = value.as_f64() else {
                return Some(wrong_type(field, "number", value));
            };
            check_bounds(field, n, *min, *max)
        }

        FieldType::Enum { values } => {
            let Some(s) = value.as_str() else {
                return Some(wrong_type(field, "string", value));
            };
            (!values.contains(&s)).then(|| Violation::NotInEnum {
                field: field.to_string(),
                value: s.to_string(),
                allowed: values,
            })
        }

        FieldType::TextArray => {
            let Some(items) = value.as_array() else {
                return Some(wrong_type(field, "array", value));
            };
            items
                .iter()
                .find(|item| !item.is_string())
                .map(|item| wrong_type(field, "array of strings", item))
        }
    }
}

// ============================================================================
// Entity Schemas
// ============================================================================

const SCORE: FieldType = FieldType::Integer {
    min: Some(0),
    max: Some(100),
};

pub static USER_SCHEMA: EntitySchema = EntitySchema {
    entity: EntityKind::User,
    fields: &[
        FieldDefinition::required("id", FieldType::Uuid),
        FieldDefinition::required("name", FieldType::Text),
        FieldDefinition::required("email", FieldType::Email),
        FieldDefinition::required("protectScore", SCORE),
        FieldDefinition::required("netWorth", FieldType::Integer { min: None, max: None }),
        FieldDefinition::required(
            "monthlyIncome",
            FieldType::Integer {
                min: Some(0),
                max: None,
            },
        ),
        FieldDefinition::required(
            "savingsRate",
            FieldType::Float {
                min: Some(0.0),
                max: Some(1.0),
            },
        ),
        FieldDefinition::required("createdAt", FieldType::Timestamp),
    ],
};

pub static TRANSACTION_SCHEMA: EntitySchema = EntitySchema {
    entity: EntityKind::Transaction,
    fields: &[
        FieldDefinition::required("id", FieldType::Uuid),
        FieldDefinition::required("userId", FieldType::Uuid),
        FieldDefinition::required("amount", FieldType::Float { min: None, max: None }),
        FieldDefinition::required("currency", FieldType::Enum { values: &["USD"] }),
        FieldDefinition::required(
            "category",
            FieldType::Enum {
                values: TransactionCategory::NAMES,
            },
        ),
        FieldDefinition::required(
            "type",
            FieldType::Enum {
                values: TransactionType::NAMES,
            },
        ),
        FieldDefinition::required("merchant", FieldType::Text),
        FieldDefinition::required(
            "status",
            FieldType::Enum {
                values: TransactionStatus::NAMES,
            },
        ),
        FieldDefinition::required("timestamp", FieldType::Timestamp),
        FieldDefinition::required(
            "riskFlag",
            FieldType::Enum {
                values: RiskFlag::NAMES,
            },
        ),
        FieldDefinition::nullable("riskScore", SCORE),
        FieldDefinition::required("riskReasons", FieldType::TextArray),
    ],
};

pub static ALERT_SCHEMA: EntitySchema = EntitySchema {
    entity: EntityKind::Alert,
    fields: &[
        FieldDefinition::required("id", FieldType::Uuid),
        FieldDefinition::required("userId", FieldType::Uuid),
        FieldDefinition::required(
            "type",
            FieldType::Enum {
                values: AlertType::NAMES,
            },
        ),
        FieldDefinition::required(
            "severity",
            FieldType::Enum {
                values: Severity::NAMES,
            },
        ),
        FieldDefinition::required(
            "riskFlag",
            FieldType::Enum {
                values: Severity::NAMES,
            },
        ),
        FieldDefinition::required("riskScore", SCORE),
        FieldDefinition::required("title", FieldType::Text),
        FieldDefinition::required("message", FieldType::Text),
        FieldDefinition::required("createdAt", FieldType::Timestamp),
        FieldDefinition::nullable("expiresAt", FieldType::Timestamp),
        FieldDefinition::required("read", FieldType::Bool),
        FieldDefinition::required("actionRequired", FieldType::Bool),
    ],
};

/// Look up a schema by entity kind name (`user`, `transaction`, `alert`).
pub fn schema_by_name(name: &str) -> Result<&'static EntitySchema, SchemaError> {
    match name {
        "user" | "users" => Ok(&USER_SCHEMA),
        "transaction" | "transactions" => Ok(&TRANSACTION_SCHEMA),
        "alert" | "alerts" => Ok(&ALERT_SCHEMA),
        other => Err(SchemaError::UnknownEntity(other.to_string())),
    }
}

// ============================================================================
// Validation Gate
// ============================================================================

/// A typed entity with a schema.
pub trait Entity: Serialize + DeserializeOwned {
    const KIND: EntityKind;

    fn schema() -> &'static EntitySchema;
}

impl Entity for User {
    const KIND: EntityKind = EntityKind::User;

    fn schema() -> &'static EntitySchema {
        &USER_SCHEMA
    }
}

impl Entity for Transaction {
    const KIND: EntityKind = EntityKind::Transaction;

    fn schema() -> &'static EntitySchema {
        &TRANSACTION_SCHEMA
    }
}

impl Entity for Alert {
    const KIND: EntityKind = EntityKind::Alert;

    fn schema() -> &'static EntitySchema {
        &ALERT_SCHEMA
    }
}

/// Validate a candidate and return the typed entity.
///
/// Every schema violation is reported at once. A candidate that passes the
/// schema but still fails typed decoding (which would mean the schema and the
/// Rust type disagree) is reported as [`Violation::Decode`].
pub fn validate<T: Entity>(candidate: Value) -> Result<T, ValidationError> {
    let violations = T::schema().check(&candidate);
    if !violations.is_empty() {
        return Err(ValidationError {
            entity: T::KIND,
            violations,
        });
    }

    serde_json::from_value(candidate).map_err(|e| ValidationError {
        entity: T::KIND,
        violations: vec![Violation::Decode(e.to_string())],
    })
}

impl fmt::Display for EntitySchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} fields)", self.entity, self.fields.len())
    }
}
