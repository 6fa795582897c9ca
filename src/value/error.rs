use crate::value::kind::{Alternative, JsonKind};
use serde_json::Value;
use thiserror::Error;

/// A JSON value whose type is not one of the alternatives a field accepts.
///
/// `field` is whatever the caller named the value: a plain key for
/// [`StringOrNumber::decode`](crate::value::StringOrNumber::decode) and
/// friends, or a JSON pointer such as `/series/0/radius` when produced by
/// schema validation.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{field}: {message} (found {found})")]
pub struct DecodeError {
    pub field: String,
    pub message: String,
    pub found: JsonKind,
}

impl DecodeError {
    pub fn new(field: impl Into<String>, message: impl Into<String>, found: JsonKind) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            found,
        }
    }

    pub(crate) fn unexpected(field: &str, expected: &str, value: &Value) -> Self {
        Self::new(field, format!("expected {expected}"), JsonKind::of(value))
    }
}

/// Raised when a polymorphic value is read as an alternative it does not hold.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("value holds the {held} alternative, not {requested}")]
pub struct TypeMismatch {
    pub requested: Alternative,
    pub held: Alternative,
}

impl TypeMismatch {
    pub(crate) fn new(requested: Alternative, held: Alternative) -> Self {
        Self { requested, held }
    }
}
