use crate::options::enums::AxisType;
use crate::options::style::{Formatter, LineStyle, TextStyle};
use crate::options::tooltip::AxisPointer;
use crate::value::{ArrayOrSingle, Nullable, StringOrNumber};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A cartesian axis; used for both `xAxis` and `yAxis`.
///
/// Keys not modelled here (`boundaryGap`, `splitArea`, ...) are kept in
/// `extra` and written back unchanged.
pub struct Axis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_ticks: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<Number>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<AxisType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_text_style: Option<TextStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_gap: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_rotate: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inverse: Option<bool>,
    /// Lower bound: a value, `"dataMin"`, or `null` for automatic.
    #[serde(
        default,
        deserialize_with = "crate::value::nullable::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub min: Option<Nullable<StringOrNumber>>,
    /// Upper bound: a value, `"dataMax"`, or `null` for automatic.
    #[serde(
        default,
        deserialize_with = "crate::value::nullable::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub max: Option<Nullable<StringOrNumber>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_interval: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_interval: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_base: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_event: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_line: Option<AxisLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_tick: Option<AxisTick>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_label: Option<AxisLabel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_line: Option<SplitLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_pointer: Option<AxisPointer>,
    /// Category names (or values) for category axes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<StringOrNumber>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<i32>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_zero: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_zero_axis_index: Option<u32>,
    /// Arrow symbol for both ends (`"arrow"`) or `[start, end]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<ArrayOrSingle<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisTick {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_with_label: Option<bool>,
    /// `"auto"` or the number of categories to skip between ticks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<StringOrNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inside: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLabel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<StringOrNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inside: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatter: Option<Formatter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_min_label: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_max_label: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_overlap: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<StringOrNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<StringOrNumber>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitLine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<StringOrNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_min_means_auto_and_survives_round_trip() {
        let raw = json!({"type": "value", "min": null, "max": "dataMax"});
        let axis: Axis = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(axis.kind, Some(AxisType::Value));
        assert_eq!(axis.min, Some(Nullable::Null));
        assert_eq!(
            axis.max,
            Some(Nullable::Value(StringOrNumber::from("dataMax")))
        );
        assert_eq!(serde_json::to_value(&axis).unwrap(), raw);
    }

    #[test]
    fn unmodelled_keys_are_preserved() {
        let raw = json!({
            "type": "category",
            "boundaryGap": false,
            "data": ["Mon", "Tue", 3],
            "splitArea": {"show": true}
        });
        let axis: Axis = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(axis.extra.get("boundaryGap"), Some(&json!(false)));
        assert_eq!(axis.data.as_ref().map(Vec::len), Some(3));
        assert_eq!(serde_json::to_value(&axis).unwrap(), raw);
    }

    #[test]
    fn tick_interval_takes_auto_or_count() {
        let auto: AxisTick = serde_json::from_value(json!({"interval": "auto"})).unwrap();
        assert_eq!(auto.interval, Some(StringOrNumber::from("auto")));
        let every: AxisTick = serde_json::from_value(json!({"interval": 0})).unwrap();
        assert_eq!(every.interval, Some(StringOrNumber::from(0)));
    }

    #[test]
    fn axis_line_symbol_single_or_pair() {
        let line: AxisLine =
            serde_json::from_value(json!({"symbol": ["none", "arrow"]})).unwrap();
        assert_eq!(
            line.symbol.as_ref().and_then(|s| s.as_array().ok()).map(<[String]>::len),
            Some(2)
        );
    }
}
