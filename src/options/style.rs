//! Style sub-options shared by several components.

use crate::value::{ArrayOrSingle, StringOrNumber};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

/// Formatter template or callback source.
///
/// Kept as opaque text: templates such as `"{b}: {c}"` and serialized
/// callback bodies are interpreted by the rendering engine, never here.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Formatter(pub String);

impl From<&str> for Formatter {
    fn from(value: &str) -> Self {
        Formatter(value.to_string())
    }
}

/// A colour: a CSS colour string, or a gradient/pattern fill object such as
/// `{"type": "linear", "x": 0, "y": 0, "x2": 0, "y2": 1, "colorStops": [...]}`.
///
/// Fill objects are carried as-is; their keys are read by the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Plain(String),
    Fill(Map<String, Value>),
}

impl Color {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Color::Plain(color) => Some(color),
            Color::Fill(_) => None,
        }
    }

    pub fn is_fill(&self) -> bool {
        matches!(self, Color::Fill(_))
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Color::Plain(value.to_string())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    /// `"bold"`, `"lighter"`, ... or a numeric weight such as `600`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<StringOrNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<StringOrNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overflow: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Number>,
    /// `"solid"`, `"dashed"`, `"dotted"`, a dash length, or a dash array.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ArrayOrSingle<StringOrNumber>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_blur: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_type: Option<String>,
    /// One radius for every corner or `[tl, tr, br, bl]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<ArrayOrSingle<StringOrNumber>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_blur: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<Number>,
    /// `"auto"`, `"start"`, `"end"` or a baseline value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<StringOrNumber>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    /// A named position (`"inside"`, `"top"`, ...) or `[x, y]` offsets that
    /// may mix pixels and percentages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<ArrayOrSingle<StringOrNumber>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatter: Option<Formatter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<StringOrNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<StringOrNumber>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
