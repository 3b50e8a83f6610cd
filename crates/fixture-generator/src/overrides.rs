//! Caller-supplied field overrides.
//!
//! Overrides are keyed by the serialized (camelCase) field name and are
//! shallow-merged on top of the derived record after derivation and before
//! validation. An override always wins, including when it contradicts the
//! correlation tables; the validation gate only checks shape.
//!
//! A few fields double as categorical keys (`category` for transactions,
//! `type` and `severity` for alerts). When overridden, the assembler derives
//! the dependent fields from the overridden key instead of drawing one.

use crate::error::GeneratorError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Partial entity merged over a generated one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides(Map<String, Value>);

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Overrides::set`].
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// A copy of `self` with `other` layered on top.
    pub fn merged(&self, other: &Overrides) -> Overrides {
        let mut merged = self.clone();
        merged
            .0
            .extend(other.0.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }

    /// Shallow-merge into a serialized candidate. Non-object candidates are
    /// left untouched; the validation gate rejects them anyway.
    pub fn merge_into(&self, candidate: &mut Value) {
        if let Some(object) = candidate.as_object_mut() {
            for (field, value) in &self.0 {
                object.insert(field.clone(), value.clone());
            }
        }
    }

    /// Parse an overridden categorical key.
    ///
    /// Returns `Ok(None)` when the field is not overridden and
    /// [`GeneratorError::InvalidOverride`] when the value is outside the
    /// key's domain.
    pub fn key<T: DeserializeOwned>(&self, field: &str) -> Result<Option<T>, GeneratorError> {
        self.0
            .get(field)
            .map(|value| {
                serde_json::from_value(value.clone()).map_err(|e| {
                    GeneratorError::InvalidOverride {
                        field: field.to_string(),
                        reason: e.to_string(),
                    }
                })
            })
            .transpose()
    }
}

impl From<Map<String, Value>> for Overrides {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Overrides {
    type Error = GeneratorError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(GeneratorError::InvalidOverride {
                field: "<root>".to_string(),
                reason: format!("overrides must be an object, got {other}"),
            }),
        }
    }
}
