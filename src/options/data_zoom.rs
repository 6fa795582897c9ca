use crate::options::enums::{DataZoomKind, Orient};
use crate::value::{ArrayOrSingle, StringOrBool, StringOrNumber};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Zoom window over one or more axes, either as an on-canvas interaction
/// (`inside`) or as a slider widget.
///
/// Axis index fields take one index or a list of them.
pub struct DataZoom {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<DataZoomKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis_index: Option<ArrayOrSingle<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis_index: Option<ArrayOrSingle<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_axis_index: Option<ArrayOrSingle<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle_axis_index: Option<ArrayOrSingle<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_mode: Option<String>,
    /// Window start as a percentage of the data extent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Number>,
    /// Window start as an axis value; category names are strings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_value: Option<StringOrNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_value: Option<StringOrNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_span: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_span: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orient: Option<Orient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom_lock: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throttle: Option<Number>,
    /// `true`, `false`, or a modifier key (`"shift"`, `"ctrl"`, `"alt"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom_on_mouse_wheel: Option<StringOrBool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub move_on_mouse_move: Option<StringOrBool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub move_on_mouse_wheel: Option<StringOrBool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prevent_default_mouse_move: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filler_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_size: Option<StringOrNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_detail: Option<bool>,
    /// `"auto"` or an explicit on/off.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_data_shadow: Option<StringOrBool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realtime: Option<bool>,
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
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
