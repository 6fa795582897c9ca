use crate::value::StringOrNumber;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Drawing area of a cartesian coordinate system.
///
/// Position and size fields take pixels (`30`) or a share of the container
/// (`"20%"`).
pub struct Grid {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<i32>,
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
    pub contain_label: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_blur: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
