use crate::options::enums::{LegendKind, Orient};
use crate::options::style::{Formatter, TextStyle};
use crate::value::{ArrayOrSingle, StringOrBool, StringOrNumber};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Legend component listing series (or pie slices) by name.
pub struct Legend {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<LegendKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orient: Option<Orient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<StringOrNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<StringOrNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<StringOrNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<StringOrNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<StringOrNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<StringOrNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<ArrayOrSingle<Number>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_gap: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_width: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_height: Option<Number>,
    /// `false` disables toggling; `true`, `"single"` or `"multiple"` pick the
    /// selection behaviour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_mode: Option<StringOrBool>,
    /// Initial on/off state keyed by series name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<BTreeMap<String, bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inactive_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatter: Option<Formatter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<LegendItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<i32>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
/// A legend entry, given either as a bare series name or as an object that
/// overrides icon and text style for that entry.
pub enum LegendItem {
    Name(String),
    Entry(LegendEntry),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl LegendItem {
    pub fn name(&self) -> &str {
        match self {
            LegendItem::Name(name) => name,
            LegendItem::Entry(entry) => &entry.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Alternative;
    use serde_json::json;

    #[test]
    fn selected_mode_keeps_bool_or_string() {
        let off: Legend = serde_json::from_value(json!({"selectedMode": false})).unwrap();
        assert_eq!(off.selected_mode, Some(StringOrBool::Bool(false)));

        let multi: Legend = serde_json::from_value(json!({"selectedMode": "multiple"})).unwrap();
        let mode = multi.selected_mode.as_ref().unwrap();
        assert_eq!(mode.alternative(), Alternative::String);
        assert_eq!(
            serde_json::to_value(&multi).unwrap(),
            json!({"selectedMode": "multiple"})
        );
    }

    #[test]
    fn legend_data_mixes_names_and_entries() {
        let raw = json!({
            "type": "scroll",
            "orient": "vertical",
            "data": ["Email", {"name": "Video", "icon": "circle"}]
        });
        let legend: Legend = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(legend.kind, Some(LegendKind::Scroll));
        let names: Vec<&str> = legend
            .data
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(LegendItem::name)
            .collect();
        assert_eq!(names, ["Email", "Video"]);
        assert_eq!(serde_json::to_value(&legend).unwrap(), raw);
    }
}
