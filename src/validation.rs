//! Schema validation for option documents.
//!
//! Violations are reported as [`DecodeError`]s whose `field` is the JSON
//! pointer of the offending value, so a document with several bad fields
//! reports all of them at once.

use crate::schema_loader::{
    SCHEMA_VERSION, SchemaLoadOptions, SchemaLoadResult, load_embedded_schema, load_json_schema,
};
use crate::value::{DecodeError, JsonKind};
use anyhow::Result;
use jsonschema::JSONSchema;
use log::debug;
use serde_json::Value;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::{Arc, OnceLock};

static EMBEDDED: OnceLock<OptionSchema> = OnceLock::new();

/// Compiled schema for `ChartOption` documents.
pub struct OptionSchema {
    version: String,
    compiled: JSONSchema,
    raw: Arc<Value>,
}

/// Schema versions this crate's option types understand.
pub fn allowed_versions() -> BTreeSet<String> {
    [SCHEMA_VERSION.to_string()].into_iter().collect()
}

impl OptionSchema {
    /// The schema shipped with the crate, compiled on first use.
    pub fn embedded() -> Result<&'static OptionSchema> {
        if let Some(schema) = EMBEDDED.get() {
            return Ok(schema);
        }
        let allowed = allowed_versions();
        let loaded = load_embedded_schema(SchemaLoadOptions {
            allowed_versions: Some(&allowed),
            ..Default::default()
        })?;
        Ok(EMBEDDED.get_or_init(|| Self::from(loaded)))
    }

    /// Loads a replacement schema; its `schema_version` must still be one
    /// of [`allowed_versions`].
    pub fn load(path: &Path) -> Result<OptionSchema> {
        let allowed = allowed_versions();
        let loaded = load_json_schema(
            path,
            SchemaLoadOptions {
                allowed_versions: Some(&allowed),
                ..Default::default()
            },
        )?;
        Ok(Self::from(loaded))
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn is_valid(&self, document: &Value) -> bool {
        self.compiled.is_valid(document)
    }

    /// Returns every violation in `document`; empty when it conforms.
    pub fn validate(&self, document: &Value) -> Vec<DecodeError> {
        let errors: Vec<DecodeError> = match self.compiled.validate(document) {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .map(|err| {
                    let pointer = err.instance_path.to_string();
                    let field = if pointer.is_empty() {
                        "/".to_string()
                    } else {
                        pointer
                    };
                    DecodeError::new(field, err.to_string(), JsonKind::of(&err.instance))
                })
                .collect(),
        };
        debug!(
            "schema {} reported {} violation(s)",
            self.version,
            errors.len()
        );
        errors
    }
}

impl From<SchemaLoadResult> for OptionSchema {
    fn from(loaded: SchemaLoadResult) -> Self {
        Self {
            version: loaded.schema_version,
            compiled: loaded.compiled,
            raw: loaded.raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(errors: &[DecodeError]) -> Vec<&str> {
        errors.iter().map(|err| err.field.as_str()).collect()
    }

    #[test]
    fn embedded_schema_is_shared() {
        let first = OptionSchema::embedded().unwrap();
        let second = OptionSchema::embedded().unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.version(), SCHEMA_VERSION);
    }

    #[test]
    fn reports_pointer_and_found_kind() {
        let schema = OptionSchema::embedded().unwrap();
        let errors = schema.validate(&json!({"grid": {"left": {"px": 3}}}));
        assert_eq!(fields(&errors), vec!["/grid/left"]);
        assert_eq!(errors[0].found, JsonKind::Object);
    }

    #[test]
    fn reports_every_violation() {
        let schema = OptionSchema::embedded().unwrap();
        let errors = schema.validate(&json!({
            "legend": {"selectedMode": 1},
            "grid3D": {"viewControl": {"rotateSensitivity": [1, "fast"]}},
            "series": [{"type": "pie", "radius": null}]
        }));
        let mut found = fields(&errors);
        found.sort_unstable();
        assert_eq!(
            found,
            vec![
                "/grid3D/viewControl/rotateSensitivity/1",
                "/legend/selectedMode",
                "/series/0/radius"
            ]
        );
    }

    #[test]
    fn accepts_every_alternative() {
        let schema = OptionSchema::embedded().unwrap();
        let document = json!({
            "grid": [{"left": 10}, {"left": "10%"}],
            "legend": {"selectedMode": "multiple", "data": ["a", {"name": "b"}]},
            "xAxis": {"min": null, "max": "dataMax"},
            "grid3D": {"viewControl": {"rotateSensitivity": 1, "panSensitivity": [1, 0]}},
            "series": {"type": "gauge", "data": [null, 1, [1, 2], {"value": 3}]},
            "toolbox": {"show": true}
        });
        assert!(schema.validate(&document).is_empty());
        assert!(schema.is_valid(&document));
    }

    #[test]
    fn root_violations_use_root_pointer() {
        let schema = OptionSchema::embedded().unwrap();
        let errors = schema.validate(&json!([1, 2]));
        assert_eq!(fields(&errors), vec!["/"]);
        assert_eq!(errors[0].found, JsonKind::Array);
    }

    #[test]
    fn colours_take_a_string_or_a_fill_object() {
        let schema = OptionSchema::embedded().unwrap();
        let gradient = json!({
            "type": "linear", "x": 0, "y": 0, "x2": 0, "y2": 1,
            "colorStops": [{"offset": 0, "color": "#fff"}, {"offset": 1, "color": "#000"}]
        });
        let document = json!({
            "color": ["#5470c6", gradient.clone()],
            "backgroundColor": gradient.clone(),
            "series": {"type": "bar", "itemStyle": {"color": gradient, "borderColor": "#fff"}}
        });
        assert!(schema.is_valid(&document));

        let errors = schema.validate(&json!({"series": [{"type": "bar", "itemStyle": {"color": 3}}]}));
        assert_eq!(fields(&errors), vec!["/series/0/itemStyle/color"]);
        assert_eq!(errors[0].found, JsonKind::Number);
    }

    #[test]
    fn symbol_size_accepts_callback_source() {
        let schema = OptionSchema::embedded().unwrap();
        let document = json!({
            "series": [
                {"type": "scatter", "symbolSize": "function (v) { return v[2]; }"},
                {"type": "scatter", "symbolSize": [8, 4]}
            ]
        });
        assert!(schema.is_valid(&document));
    }

    #[test]
    fn series_without_type_is_rejected() {
        let schema = OptionSchema::embedded().unwrap();
        let errors = schema.validate(&json!({"series": [{"data": [1]}]}));
        assert_eq!(fields(&errors), vec!["/series/0"]);
    }
}
