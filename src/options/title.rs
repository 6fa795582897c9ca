use crate::options::enums::TextAlign;
use crate::options::style::TextStyle;
use crate::value::{ArrayOrSingle, StringOrNumber};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Main title and subtitle block.
pub struct Title {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtext: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sublink: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtarget: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtext_style: Option<TextStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_vertical_align: Option<String>,
    /// Uniform padding or CSS-style `[top, right, bottom, left]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<ArrayOrSingle<Number>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_gap: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<StringOrNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<StringOrNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<StringOrNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<StringOrNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<ArrayOrSingle<Number>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<i32>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn title_padding_keeps_array_or_scalar_form() {
        let raw = json!({
            "text": "Sales",
            "left": "center",
            "padding": [5, 10],
            "textAlign": "center"
        });
        let title: Title = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(title.text_align, Some(TextAlign::Center));
        assert_eq!(title.padding.as_ref().map(ArrayOrSingle::len), Some(2));
        assert_eq!(serde_json::to_value(&title).unwrap(), raw);
    }
}
