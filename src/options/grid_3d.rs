use crate::value::{ArrayOrSingle, StringOrNumber};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Three-dimensional cartesian box (the root `grid3D` key).
pub struct Grid3D {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_width: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_height: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_depth: Option<Number>,
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
    pub environment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_control: Option<ViewControl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<i32>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Camera and mouse interaction settings of a 3D coordinate system.
///
/// Sensitivities take one factor for both directions or `[x, y]`; `0`
/// disables the interaction in that direction.
pub struct ViewControl {
    /// `"perspective"` or `"orthographic"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_rotate: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_rotate_direction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_rotate_speed: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_rotate_after_still: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damping: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate_sensitivity: Option<ArrayOrSingle<Number>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom_sensitivity: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pan_sensitivity: Option<ArrayOrSingle<Number>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pan_mouse_button: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate_mouse_button: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_distance: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_distance: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orthographic_size: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_orthographic_size: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_orthographic_size: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beta: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_alpha: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_alpha: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_beta: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_beta: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<Vec<Number>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_duration_update: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_easing_update: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Alternative;
    use serde_json::json;

    #[test]
    fn rotate_sensitivity_pair_and_scalar() {
        let pair: ViewControl =
            serde_json::from_value(json!({"rotateSensitivity": [1, 0]})).unwrap();
        let sensitivity = pair.rotate_sensitivity.as_ref().unwrap();
        assert_eq!(sensitivity.alternative(), Alternative::Array);
        assert_eq!(sensitivity.as_slice(), &[Number::from(1), Number::from(0)]);
        assert_eq!(
            serde_json::to_value(&pair).unwrap(),
            json!({"rotateSensitivity": [1, 0]})
        );

        let scalar: ViewControl =
            serde_json::from_value(json!({"rotateSensitivity": 1})).unwrap();
        let sensitivity = scalar.rotate_sensitivity.as_ref().unwrap();
        assert_eq!(sensitivity.as_single().unwrap(), &Number::from(1));
        assert_eq!(
            serde_json::to_value(&scalar).unwrap(),
            json!({"rotateSensitivity": 1})
        );
    }

    #[test]
    fn grid_3d_nests_view_control() {
        let raw = json!({
            "boxWidth": 200,
            "viewControl": {"projection": "orthographic", "autoRotate": true, "alpha": 20.5}
        });
        let grid: Grid3D = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(
            grid.view_control.as_ref().and_then(|v| v.projection.as_deref()),
            Some("orthographic")
        );
        assert_eq!(serde_json::to_value(&grid).unwrap(), raw);
    }
}
