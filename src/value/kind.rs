use serde_json::Value;
use std::fmt;

/// Runtime type of a JSON value, as reported in decode errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which shape a polymorphic value currently holds.
///
/// Shared by every wrapper so accessors can report mismatches uniformly;
/// `Single` and `Array` belong to [`crate::value::ArrayOrSingle`], the rest to
/// the scalar wrappers.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Alternative {
    Number,
    String,
    Bool,
    Single,
    Array,
}

impl Alternative {
    pub fn as_str(self) -> &'static str {
        match self {
            Alternative::Number => "number",
            Alternative::String => "string",
            Alternative::Bool => "boolean",
            Alternative::Single => "single",
            Alternative::Array => "array",
        }
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_of_covers_every_json_type() {
        assert_eq!(JsonKind::of(&json!(null)), JsonKind::Null);
        assert_eq!(JsonKind::of(&json!(false)), JsonKind::Bool);
        assert_eq!(JsonKind::of(&json!(1.5)), JsonKind::Number);
        assert_eq!(JsonKind::of(&json!("x")), JsonKind::String);
        assert_eq!(JsonKind::of(&json!([1])), JsonKind::Array);
        assert_eq!(JsonKind::of(&json!({"a": 1})), JsonKind::Object);
        assert_eq!(JsonKind::Bool.to_string(), "boolean");
    }
}
