use crate::value::error::{DecodeError, TypeMismatch};
use crate::value::kind::Alternative;
use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use std::fmt;

const EXPECTING: &str = "a number or a string";

/// A value written either as a JSON number or as a JSON string.
///
/// The string form usually carries a unit (`"20%"`); its grammar is left to
/// the rendering engine. Numbers are kept as [`Number`] so integers re-encode
/// as integers.
#[derive(Clone, Debug, PartialEq)]
pub enum StringOrNumber {
    Number(Number),
    String(String),
}

impl StringOrNumber {
    /// Numeric alternative from a float; `None` for NaN and infinities, which
    /// JSON cannot carry.
    pub fn from_f64(value: f64) -> Option<Self> {
        Number::from_f64(value).map(StringOrNumber::Number)
    }

    /// Decode a generic JSON value, naming `field` on failure.
    pub fn decode(field: &str, value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Number(number) => Ok(StringOrNumber::Number(number.clone())),
            Value::String(text) => Ok(StringOrNumber::String(text.clone())),
            other => Err(DecodeError::unexpected(field, EXPECTING, other)),
        }
    }

    pub fn alternative(&self) -> Alternative {
        match self {
            StringOrNumber::Number(_) => Alternative::Number,
            StringOrNumber::String(_) => Alternative::String,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, StringOrNumber::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, StringOrNumber::String(_))
    }

    pub fn as_number(&self) -> Result<&Number, TypeMismatch> {
        match self {
            StringOrNumber::Number(number) => Ok(number),
            other => Err(TypeMismatch::new(Alternative::Number, other.alternative())),
        }
    }

    /// The numeric alternative as a float.
    pub fn as_f64(&self) -> Result<f64, TypeMismatch> {
        self.as_number()
            .map(|number| number.as_f64().unwrap_or(f64::NAN))
    }

    pub fn as_str(&self) -> Result<&str, TypeMismatch> {
        match self {
            StringOrNumber::String(text) => Ok(text),
            other => Err(TypeMismatch::new(Alternative::String, other.alternative())),
        }
    }
}

impl From<Number> for StringOrNumber {
    fn from(value: Number) -> Self {
        StringOrNumber::Number(value)
    }
}

impl From<i32> for StringOrNumber {
    fn from(value: i32) -> Self {
        StringOrNumber::Number(value.into())
    }
}

impl From<i64> for StringOrNumber {
    fn from(value: i64) -> Self {
        StringOrNumber::Number(value.into())
    }
}

impl From<u32> for StringOrNumber {
    fn from(value: u32) -> Self {
        StringOrNumber::Number(value.into())
    }
}

impl From<u64> for StringOrNumber {
    fn from(value: u64) -> Self {
        StringOrNumber::Number(value.into())
    }
}

impl From<&str> for StringOrNumber {
    fn from(value: &str) -> Self {
        StringOrNumber::String(value.to_string())
    }
}

impl From<String> for StringOrNumber {
    fn from(value: String) -> Self {
        StringOrNumber::String(value)
    }
}

impl fmt::Display for StringOrNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringOrNumber::Number(number) => write!(f, "{number}"),
            StringOrNumber::String(text) => f.write_str(text),
        }
    }
}

impl Serialize for StringOrNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            StringOrNumber::Number(number) => number.serialize(serializer),
            StringOrNumber::String(text) => serializer.serialize_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for StringOrNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(StringOrNumberVisitor)
    }
}

struct StringOrNumberVisitor;

impl<'de> Visitor<'de> for StringOrNumberVisitor {
    type Value = StringOrNumber;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(EXPECTING)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(StringOrNumber::Number(value.into()))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(StringOrNumber::Number(value.into()))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Number::from_f64(value)
            .map(StringOrNumber::Number)
            .ok_or_else(|| E::invalid_value(Unexpected::Float(value), &self))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(StringOrNumber::String(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(StringOrNumber::String(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::JsonKind;
    use serde_json::json;

    #[test]
    fn number_decodes_to_numeric_alternative() {
        let parsed: StringOrNumber = serde_json::from_str("30").unwrap();
        assert_eq!(parsed, StringOrNumber::from(30));
        assert_eq!(parsed.alternative(), Alternative::Number);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "30");

        let float: StringOrNumber = serde_json::from_str("0.25").unwrap();
        assert_eq!(float.as_number().unwrap().as_f64(), Some(0.25));
        assert_eq!(serde_json::to_string(&float).unwrap(), "0.25");
    }

    #[test]
    fn string_decodes_to_string_alternative() {
        let parsed: StringOrNumber = serde_json::from_str("\"20%\"").unwrap();
        assert_eq!(parsed.as_str().unwrap(), "20%");
        assert!(parsed.is_string());
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"20%\"");
    }

    #[test]
    fn numeric_looking_string_stays_a_string() {
        let parsed: StringOrNumber = serde_json::from_str("\"30\"").unwrap();
        assert_eq!(parsed, StringOrNumber::from("30"));
        assert_eq!(serde_json::to_value(&parsed).unwrap(), json!("30"));
    }

    #[test]
    fn object_and_null_are_rejected() {
        let err = serde_json::from_value::<StringOrNumber>(json!({"x": 1})).unwrap_err();
        assert!(err.to_string().contains("expected a number or a string"));
        assert!(serde_json::from_value::<StringOrNumber>(json!(null)).is_err());
        assert!(serde_json::from_value::<StringOrNumber>(json!(true)).is_err());
    }

    #[test]
    fn explicit_decode_names_field_and_found_type() {
        let err = StringOrNumber::decode("left", &json!({"x": 1})).unwrap_err();
        assert_eq!(err.field, "left");
        assert_eq!(err.found, JsonKind::Object);

        let err = StringOrNumber::decode("width", &json!(null)).unwrap_err();
        assert_eq!(err.found, JsonKind::Null);
        assert_eq!(err.to_string(), "width: expected a number or a string (found null)");

        let ok = StringOrNumber::decode("width", &json!(12)).unwrap();
        assert_eq!(ok, StringOrNumber::from(12));
    }

    #[test]
    fn wrong_accessor_reports_type_mismatch() {
        let value = StringOrNumber::from("auto");
        let err = value.as_number().unwrap_err();
        assert_eq!(err.requested, Alternative::Number);
        assert_eq!(err.held, Alternative::String);
        assert!(StringOrNumber::from(4).as_str().is_err());
        assert_eq!(StringOrNumber::from(4).as_f64(), Ok(4.0));
        assert!(value.as_f64().is_err());
    }

    #[test]
    fn non_finite_floats_have_no_numeric_alternative() {
        assert!(StringOrNumber::from_f64(f64::NAN).is_none());
        assert!(StringOrNumber::from_f64(f64::INFINITY).is_none());
        assert_eq!(
            StringOrNumber::from_f64(1.5).unwrap().to_string(),
            "1.5".to_string()
        );
    }
}
