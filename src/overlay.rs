//! Layered construction of option documents.
//!
//! A chart is often described as a shared base (theme, house style) plus
//! per-chart overrides. [`OverlayBuilder`] records those layers in order and
//! folds them into one JSON object: nested objects merge key by key, any other
//! value (arrays included) replaces what was there, and later layers win.

use crate::codec::encode_value;
use crate::options::ChartOption;
use crate::value::JsonKind;
use anyhow::{Context, Result, bail};
use log::debug;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default)]
pub struct OverlayBuilder {
    sources: Vec<OverlaySource>,
}

#[derive(Clone, Debug)]
enum OverlaySource {
    Merge(Map<String, Value>),
    Set { path: String, value: Value },
}

impl OverlayBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge_json_file(&mut self, path: &Path) -> Result<()> {
        if !path.is_file() {
            bail!("overlay file not found: {}", path.display());
        }
        let data =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let value: Value = serde_json::from_str(&data)
            .with_context(|| format!("{} contained invalid JSON", path.display()))?;
        self.merge_value(value, &path.display().to_string())
    }

    pub fn merge_json_string(&mut self, raw: &str, label: &str) -> Result<()> {
        let value: Value =
            serde_json::from_str(raw).with_context(|| format!("invalid JSON for {label}"))?;
        self.merge_value(value, label)
    }

    pub fn merge_value(&mut self, value: Value, label: &str) -> Result<()> {
        match value {
            Value::Object(map) => {
                self.sources.push(OverlaySource::Merge(map));
                Ok(())
            }
            _ => bail!("{label} must be a JSON object"),
        }
    }

    /// Adds an already typed option as a layer; only its set fields take part.
    pub fn merge_option(&mut self, option: &ChartOption) -> Result<()> {
        let value = encode_value(option)?;
        self.merge_value(value, "option")
    }

    /// Sets the value at a dotted path (`grid.left`, `series.0.name`).
    pub fn set_value(&mut self, path: &str, value: Value) -> Result<()> {
        split_path(path)?;
        self.sources.push(OverlaySource::Set {
            path: path.to_string(),
            value,
        });
        Ok(())
    }

    pub fn set_json(&mut self, path: &str, raw: &str) -> Result<()> {
        let value: Value = serde_json::from_str(raw)
            .with_context(|| format!("invalid JSON value for {path}"))?;
        self.set_value(path, value)
    }

    pub fn set_string(&mut self, path: &str, text: &str) -> Result<()> {
        self.set_value(path, Value::String(text.to_string()))
    }

    /// Parses `PATH=JSON` and records the assignment.
    pub fn assign(&mut self, assignment: &str) -> Result<()> {
        let (path, raw) = split_assignment(assignment)?;
        self.set_json(path, raw)
    }

    /// Parses `PATH=TEXT` and records TEXT as a JSON string.
    pub fn assign_string(&mut self, assignment: &str) -> Result<()> {
        let (path, text) = split_assignment(assignment)?;
        self.set_string(path, text)
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn build(&self) -> Result<Value> {
        let mut root = Value::Object(Map::new());
        for source in &self.sources {
            match source {
                OverlaySource::Merge(layer) => {
                    merge_into(&mut root, layer);
                }
                OverlaySource::Set { path, value } => {
                    set_path(&mut root, path, value.clone())
                        .with_context(|| format!("while setting {path}"))?;
                }
            }
        }
        debug!("folded {} overlay layer(s)", self.sources.len());
        Ok(root)
    }
}

fn split_assignment(assignment: &str) -> Result<(&str, &str)> {
    match assignment.split_once('=') {
        Some((path, value)) if !path.trim().is_empty() => Ok((path.trim(), value)),
        _ => bail!("expected PATH=VALUE, got '{assignment}'"),
    }
}

fn split_path(path: &str) -> Result<Vec<&str>> {
    let segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        bail!("invalid path '{path}': empty segment");
    }
    Ok(segments)
}

fn merge_into(target: &mut Value, layer: &Map<String, Value>) {
    match target {
        Value::Object(map) => merge_maps(map, layer),
        other => *other = Value::Object(layer.clone()),
    }
}

fn merge_maps(target: &mut Map<String, Value>, layer: &Map<String, Value>) {
    for (key, value) in layer {
        if let (Some(Value::Object(existing)), Value::Object(nested)) = (target.get_mut(key), value)
        {
            merge_maps(existing, nested);
            continue;
        }
        target.insert(key.clone(), value.clone());
    }
}

fn set_path(root: &mut Value, path: &str, value: Value) -> Result<()> {
    let segments = split_path(path)?;
    let Some((last, parents)) = segments.split_last() else {
        bail!("invalid path '{path}'");
    };

    let mut current = root;
    for segment in parents {
        let next = match current {
            Value::Object(map) => map
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new())),
            Value::Array(items) => array_slot(items, segment)?,
            other => bail!(
                "'{segment}' cannot be reached through a {}",
                JsonKind::of(other)
            ),
        };
        current = next;
    }

    match current {
        Value::Object(map) => {
            map.insert(last.to_string(), value);
        }
        Value::Array(items) => {
            *array_slot(items, last)? = value;
        }
        other => bail!(
            "'{last}' cannot be set on a {}",
            JsonKind::of(other)
        ),
    }
    Ok(())
}

fn array_slot<'a>(items: &'a mut [Value], segment: &str) -> Result<&'a mut Value> {
    let len = items.len();
    let index: usize = segment
        .parse()
        .with_context(|| format!("'{segment}' is not an array index"))?;
    items
        .get_mut(index)
        .with_context(|| format!("index {index} out of bounds for array of length {len}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn later_layers_win_and_objects_merge() {
        let mut builder = OverlayBuilder::new();
        builder
            .merge_value(
                json!({"grid": {"left": 10, "top": 10}, "color": ["#111", "#222"]}),
                "base",
            )
            .unwrap();
        builder
            .merge_value(json!({"grid": {"left": "20%"}, "color": ["#333"]}), "chart")
            .unwrap();
        assert_eq!(
            builder.build().unwrap(),
            json!({"grid": {"left": "20%", "top": 10}, "color": ["#333"]})
        );
    }

    #[test]
    fn assignments_create_intermediate_objects() {
        let mut builder = OverlayBuilder::new();
        builder.assign("grid3D.viewControl.rotateSensitivity=[1, 0]").unwrap();
        builder.assign_string("title.text=Sales = revenue").unwrap();
        assert_eq!(
            builder.build().unwrap(),
            json!({
                "grid3D": {"viewControl": {"rotateSensitivity": [1, 0]}},
                "title": {"text": "Sales = revenue"}
            })
        );
    }

    #[test]
    fn assignments_index_into_arrays() {
        let mut builder = OverlayBuilder::new();
        builder
            .merge_value(json!({"series": [{"type": "line"}, {"type": "bar"}]}), "base")
            .unwrap();
        builder.assign("series.1.name=\"Revenue\"").unwrap();
        let built = builder.build().unwrap();
        assert_eq!(built["series"][1], json!({"type": "bar", "name": "Revenue"}));

        let mut out_of_range = builder.clone();
        out_of_range.assign("series.5.name=\"x\"").unwrap();
        let err = out_of_range.build().unwrap_err();
        assert!(format!("{err:#}").contains("out of bounds"));
    }

    #[test]
    fn explicit_null_survives() {
        let mut builder = OverlayBuilder::new();
        builder.merge_value(json!({"xAxis": {"min": 0}}), "base").unwrap();
        builder.assign("xAxis.min=null").unwrap();
        assert_eq!(builder.build().unwrap(), json!({"xAxis": {"min": null}}));
    }

    #[test]
    fn rejects_bad_inputs() {
        let mut builder = OverlayBuilder::new();
        assert!(builder.merge_value(json!([1]), "layer").is_err());
        assert!(builder.assign("no-equals-sign").is_err());
        assert!(builder.assign("grid..left=1").is_err());
        assert!(builder.assign("grid.left=20%").is_err());
        assert!(builder.is_empty());

        builder.merge_value(json!({"title": "flat"}), "layer").unwrap();
        builder.assign("title.text=\"x\"").unwrap();
        assert!(builder.build().is_err());
    }

    #[test]
    fn merges_files_and_typed_options() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"legend": {{"show": true}}}}"#).unwrap();

        let mut builder = OverlayBuilder::new();
        builder.merge_json_file(file.path()).unwrap();
        let option: ChartOption =
            serde_json::from_value(json!({"legend": {"orient": "vertical"}})).unwrap();
        builder.merge_option(&option).unwrap();
        assert_eq!(
            builder.build().unwrap(),
            json!({"legend": {"show": true, "orient": "vertical"}})
        );
        assert!(
            builder
                .merge_json_file(Path::new("/nonexistent/overlay.json"))
                .is_err()
        );
    }
}
