use crate::value::error::{DecodeError, TypeMismatch};
use crate::value::kind::Alternative;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

const EXPECTING: &str = "a boolean or a string";

/// A value written either as a JSON boolean or as a JSON string, e.g. a
/// selection mode that is `false` or one of `"single"`, `"multiple"`.
///
/// The string is not checked against any enumeration.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum StringOrBool {
    Bool(bool),
    String(String),
}

impl StringOrBool {
    pub fn decode(field: &str, value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Bool(flag) => Ok(StringOrBool::Bool(*flag)),
            Value::String(text) => Ok(StringOrBool::String(text.clone())),
            other => Err(DecodeError::unexpected(field, EXPECTING, other)),
        }
    }

    pub fn alternative(&self) -> Alternative {
        match self {
            StringOrBool::Bool(_) => Alternative::Bool,
            StringOrBool::String(_) => Alternative::String,
        }
    }

    pub fn as_bool(&self) -> Result<bool, TypeMismatch> {
        match self {
            StringOrBool::Bool(flag) => Ok(*flag),
            other => Err(TypeMismatch::new(Alternative::Bool, other.alternative())),
        }
    }

    pub fn as_str(&self) -> Result<&str, TypeMismatch> {
        match self {
            StringOrBool::String(text) => Ok(text),
            other => Err(TypeMismatch::new(Alternative::String, other.alternative())),
        }
    }

    /// `false` only for the boolean `false`; any string counts as enabled.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, StringOrBool::Bool(false))
    }
}

impl From<bool> for StringOrBool {
    fn from(value: bool) -> Self {
        StringOrBool::Bool(value)
    }
}

impl From<&str> for StringOrBool {
    fn from(value: &str) -> Self {
        StringOrBool::String(value.to_string())
    }
}

impl From<String> for StringOrBool {
    fn from(value: String) -> Self {
        StringOrBool::String(value)
    }
}

impl fmt::Display for StringOrBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringOrBool::Bool(flag) => write!(f, "{flag}"),
            StringOrBool::String(text) => f.write_str(text),
        }
    }
}

impl Serialize for StringOrBool {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            StringOrBool::Bool(flag) => serializer.serialize_bool(*flag),
            StringOrBool::String(text) => serializer.serialize_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for StringOrBool {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(StringOrBoolVisitor)
    }
}

struct StringOrBoolVisitor;

impl<'de> Visitor<'de> for StringOrBoolVisitor {
    type Value = StringOrBool;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(EXPECTING)
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(StringOrBool::Bool(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(StringOrBool::String(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(StringOrBool::String(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::JsonKind;
    use serde_json::json;

    #[test]
    fn selected_mode_round_trips_both_alternatives() {
        for raw in [json!(false), json!(true), json!("single"), json!("multiple")] {
            let parsed: StringOrBool = serde_json::from_value(raw.clone()).unwrap();
            assert_eq!(serde_json::to_value(&parsed).unwrap(), raw);
        }
    }

    #[test]
    fn accessors_follow_the_held_alternative() {
        let mode: StringOrBool = serde_json::from_str("\"series\"").unwrap();
        assert_eq!(mode.as_str().unwrap(), "series");
        assert_eq!(
            mode.as_bool().unwrap_err(),
            TypeMismatch::new(Alternative::Bool, Alternative::String)
        );
        assert!(mode.is_enabled());

        let off = StringOrBool::from(false);
        assert!(!off.as_bool().unwrap());
        assert!(!off.is_enabled());
        assert!(off.as_str().is_err());
    }

    #[test]
    fn numbers_are_not_booleans() {
        assert!(serde_json::from_value::<StringOrBool>(json!(0)).is_err());
        let err = StringOrBool::decode("selectedMode", &json!(1)).unwrap_err();
        assert_eq!(err.found, JsonKind::Number);
        assert_eq!(err.field, "selectedMode");
    }
}
