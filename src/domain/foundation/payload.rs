//! Field access over untyped JSON payloads.
//!
//! Entities validate payloads in two passes: every required field is checked
//! for presence first, and only then are the fields read with their expected
//! types. A payload that is missing one field and mistyping another therefore
//! reports the missing property.

use serde_json::{Map, Value};

use super::{Timestamp, ValidationError};

/// Expected type of a payload field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A JSON string.
    Text,
    /// An RFC 3339 date string.
    Date,
    /// A JSON boolean. `false` counts as present.
    Flag,
}

/// Read-only view over a JSON payload for one entity.
#[derive(Debug, Clone, Copy)]
pub struct PayloadReader<'a> {
    entity: &'static str,
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> PayloadReader<'a> {
    /// Wraps a payload. Non-object payloads behave as if every field were absent.
    pub fn new(entity: &'static str, payload: &'a Value) -> Self {
        Self {
            entity,
            fields: payload.as_object(),
        }
    }

    /// Returns the entity tag used in error messages.
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Fails with `NOT_CONTAIN_NEEDED_PROPERTY` for the first absent or falsy field.
    pub fn ensure_present(&self, required: &[(&str, FieldKind)]) -> Result<(), ValidationError> {
        for (name, kind) in required {
            if !self.is_present(name, *kind) {
                return Err(ValidationError::missing_property(self.entity, *name));
            }
        }
        Ok(())
    }

    /// Reads a string field.
    pub fn text(&self, name: &str) -> Result<String, ValidationError> {
        match self.get(name) {
            Some(Value::String(s)) => Ok(s.clone()),
            _ => Err(self.mismatch(name)),
        }
    }

    /// Reads an RFC 3339 date field.
    pub fn date(&self, name: &str) -> Result<Timestamp, ValidationError> {
        match self.get(name) {
            Some(Value::String(s)) => Timestamp::parse_rfc3339(s).ok_or_else(|| self.mismatch(name)),
            _ => Err(self.mismatch(name)),
        }
    }

    /// Reads a boolean field.
    pub fn flag(&self, name: &str) -> Result<bool, ValidationError> {
        match self.get(name) {
            Some(Value::Bool(b)) => Ok(*b),
            _ => Err(self.mismatch(name)),
        }
    }

    fn get(&self, name: &str) -> Option<&'a Value> {
        self.fields.and_then(|fields| fields.get(name))
    }

    fn is_present(&self, name: &str, kind: FieldKind) -> bool {
        match self.get(name) {
            None | Some(Value::Null) => false,
            Some(_) if kind == FieldKind::Flag => true,
            Some(value) => !is_falsy(value),
        }
    }

    fn mismatch(&self, name: &str) -> ValidationError {
        ValidationError::data_type_mismatch(self.entity, name)
    }
}

/// Fails with `NOT_CONTAIN_NEEDED_PROPERTY` for the first empty text field.
///
/// Typed constructors use this so they agree with the payload path.
pub fn ensure_filled(entity: &'static str, fields: &[(&str, &str)]) -> Result<(), ValidationError> {
    match fields.iter().find(|(_, value)| value.is_empty()) {
        Some((name, _)) => Err(ValidationError::missing_property(entity, *name)),
        None => Ok(()),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
