//! JSON Schema loader for option documents.
//!
//! Schemas come from the copy embedded at build time or from a file on disk.
//! Either way the top-level `schema_version` is checked against the allowed
//! set before the schema is compiled into a validator.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use log::debug;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

/// Version tag carried by the schema shipped with this crate.
pub const SCHEMA_VERSION: &str = "chartopts_option_v1";

pub(crate) const EMBEDDED_SCHEMA: &str = include_str!("../schema/chart_option.schema.json");

/// Result of loading and compiling a JSON Schema.
pub struct SchemaLoadResult {
    pub schema_version: String,
    pub compiled: JSONSchema,
    pub raw: Arc<Value>,
}

/// Controls how schemas are checked before compilation.
pub struct SchemaLoadOptions<'a> {
    /// Where to find the schema_version string inside the schema payload.
    pub schema_version_pointer: &'a str,
    /// Allowed schema_version values; enforced when present.
    pub allowed_versions: Option<&'a BTreeSet<String>>,
}

impl Default for SchemaLoadOptions<'_> {
    fn default() -> Self {
        Self {
            schema_version_pointer: "/schema_version",
            allowed_versions: None,
        }
    }
}

pub fn load_json_schema(path: &Path, options: SchemaLoadOptions<'_>) -> Result<SchemaLoadResult> {
    let schema: Value = serde_json::from_reader(
        File::open(path).with_context(|| format!("opening schema {}", path.display()))?,
    )
    .with_context(|| format!("parsing schema {}", path.display()))?;
    compile_schema(schema, &options, &path.display().to_string())
}

/// Loads the schema compiled into the crate.
pub fn load_embedded_schema(options: SchemaLoadOptions<'_>) -> Result<SchemaLoadResult> {
    let schema: Value =
        serde_json::from_str(EMBEDDED_SCHEMA).context("parsing embedded option schema")?;
    compile_schema(schema, &options, "embedded option schema")
}

fn compile_schema(
    schema: Value,
    options: &SchemaLoadOptions<'_>,
    origin: &str,
) -> Result<SchemaLoadResult> {
    let schema_version = extract_schema_version(&schema, options.schema_version_pointer)
        .ok_or_else(|| anyhow!("{origin} is missing a schema_version"))?;

    if let Some(allowed) = options.allowed_versions {
        if !allowed.contains(&schema_version) {
            bail!(
                "schema_version '{}' of {} not in allowed set {:?}",
                schema_version,
                origin,
                allowed
            );
        }
    }

    let raw = Arc::new(schema);
    let compiled =
        JSONSchema::compile(&raw).map_err(|err| anyhow!("compiling {origin}: {err}"))?;
    debug!("compiled {origin} (schema_version {schema_version})");

    Ok(SchemaLoadResult {
        schema_version,
        compiled,
        raw,
    })
}

fn extract_schema_version(schema: &Value, pointer: &str) -> Option<String> {
    let version = schema.pointer(pointer).and_then(Value::as_str)?;
    if !version.is_empty()
        && version
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        Some(version.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_schema(value: &Value) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{value}").unwrap();
        file
    }

    #[test]
    fn embedded_schema_compiles() {
        let loaded = load_embedded_schema(SchemaLoadOptions::default()).unwrap();
        assert_eq!(loaded.schema_version, SCHEMA_VERSION);
        assert!(loaded.compiled.is_valid(&json!({"grid": {"left": "20%"}})));
        assert!(!loaded.compiled.is_valid(&json!({"grid": {"left": {}}})));
    }

    #[test]
    fn rejects_versions_outside_allowed_set() {
        let file = write_schema(&json!({"schema_version": "other_v9", "type": "object"}));
        let allowed: BTreeSet<String> = [SCHEMA_VERSION.to_string()].into_iter().collect();
        let err = load_json_schema(
            file.path(),
            SchemaLoadOptions {
                allowed_versions: Some(&allowed),
                ..Default::default()
            },
        )
        .err()
        .unwrap();
        assert!(err.to_string().contains("other_v9"));
    }

    #[test]
    fn rejects_malformed_versions() {
        let file = write_schema(&json!({"schema_version": "v 1", "type": "object"}));
        let err = load_json_schema(file.path(), SchemaLoadOptions::default())
            .err()
            .unwrap();
        assert!(err.to_string().contains("missing a schema_version"));
    }

    #[test]
    fn loads_schema_from_disk() {
        let file = write_schema(&json!({
            "schema_version": "custom_v2",
            "type": "object",
            "required": ["series"]
        }));
        let loaded = load_json_schema(file.path(), SchemaLoadOptions::default()).unwrap();
        assert_eq!(loaded.schema_version, "custom_v2");
        assert!(!loaded.compiled.is_valid(&json!({})));
        assert_eq!(loaded.raw["required"], json!(["series"]));
    }
}
