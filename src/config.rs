//! Codec configuration from defaults and the environment.

use std::env;
use std::path::PathBuf;

/// Path to a schema file replacing the embedded one.
pub const SCHEMA_ENV: &str = "CHARTOPTS_SCHEMA";
/// Disables schema validation when set to anything but empty or `0`.
pub const SKIP_VALIDATION_ENV: &str = "CHARTOPTS_SKIP_VALIDATION";
/// Enables pretty-printed output when set to anything but empty or `0`.
pub const PRETTY_ENV: &str = "CHARTOPTS_PRETTY";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodecOptions {
    /// Run schema validation before decoding.
    pub validate: bool,
    /// Indent encoded documents.
    pub pretty: bool,
    /// Schema file to use instead of the embedded schema.
    pub schema_path: Option<PathBuf>,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            validate: true,
            pretty: false,
            schema_path: None,
        }
    }
}

impl CodecOptions {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Self {
        Self::default().with_env(|key| env::var(key).ok())
    }

    /// Overlays variables resolved through `lookup` onto `self`.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(SCHEMA_ENV).filter(|v| !v.trim().is_empty()) {
            self.schema_path = Some(PathBuf::from(path));
        }
        if lookup(SKIP_VALIDATION_ENV).is_some_and(|v| flag_enabled(&v)) {
            self.validate = false;
        }
        if lookup(PRETTY_ENV).is_some_and(|v| flag_enabled(&v)) {
            self.pretty = true;
        }
        self
    }
}

fn flag_enabled(value: &str) -> bool {
    !value.trim().is_empty() && value != "0"
}
