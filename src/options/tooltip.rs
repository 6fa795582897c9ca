use crate::options::enums::Trigger;
use crate::options::style::{AreaStyle, Formatter, Label, LineStyle, TextStyle};
use crate::value::{ArrayOrSingle, StringOrNumber};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<Trigger>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_pointer: Option<AxisPointer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_content: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub always_show_content: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_delay: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_delay: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enterable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confine: Option<bool>,
    /// Fixed `[x, y]` (pixels or percentages) or a named spot such as
    /// `"inside"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<ArrayOrSingle<StringOrNumber>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatter: Option<Formatter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_formatter: Option<Formatter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<ArrayOrSingle<Number>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_css_text: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Pointer drawn along an axis while hovering (tooltip or axis level).
pub struct AxisPointer {
    /// `"line"`, `"shadow"`, `"cross"` or `"none"`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snap: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_style: Option<AreaStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_style: Option<LineStyle>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn axis_tooltip_with_cross_pointer() {
        let raw = json!({
            "trigger": "axis",
            "axisPointer": {"type": "cross", "label": {"show": true}},
            "position": ["50%", 10],
            "padding": 8
        });
        let tooltip: Tooltip = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(tooltip.trigger, Some(Trigger::Axis));
        assert_eq!(
            tooltip.axis_pointer.as_ref().and_then(|p| p.kind.as_deref()),
            Some("cross")
        );
        assert!(tooltip.position.as_ref().unwrap().is_array());
        assert!(!tooltip.padding.as_ref().unwrap().is_array());
        assert_eq!(serde_json::to_value(&tooltip).unwrap(), raw);
    }
}
