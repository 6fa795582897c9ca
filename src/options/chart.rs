use crate::options::axis::Axis;
use crate::options::data_zoom::DataZoom;
use crate::options::grid::Grid;
use crate::options::grid_3d::Grid3D;
use crate::options::legend::Legend;
use crate::options::series::Series;
use crate::options::style::{Color, TextStyle};
use crate::options::title::Title;
use crate::options::tooltip::Tooltip;
use crate::value::{ArrayOrSingle, StringOrBool};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Root option document handed to the rendering engine.
///
/// Component keys accept either one component or an array of them, and keep
/// whichever form the document used. Root keys outside the modelled
/// components (`polar`, `visualMap`, `toolbox`, ...) are held in `extra`.
pub struct ChartOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<ArrayOrSingle<Title>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<ArrayOrSingle<Legend>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<ArrayOrSingle<Grid>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<ArrayOrSingle<Axis>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<ArrayOrSingle<Axis>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_zoom: Option<ArrayOrSingle<DataZoom>>,
    #[serde(rename = "grid3D", default, skip_serializing_if = "Option::is_none")]
    pub grid_3d: Option<ArrayOrSingle<Grid3D>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<ArrayOrSingle<Series>>,
    /// Palette cycled through by series without an explicit colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Vec<Color>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
    /// `true`, `false` or `"auto"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<StringOrBool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_duration: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_easing: Option<String>,
    #[serde(rename = "useUTC", default, skip_serializing_if = "Option::is_none")]
    pub use_utc: Option<bool>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ChartOption {
    /// Iterates the series in document order, whichever form `series` uses.
    pub fn series(&self) -> impl Iterator<Item = &Series> {
        self.series.iter().flat_map(ArrayOrSingle::iter)
    }

    /// Appends a series, promoting a single series (or none) to an array.
    pub fn push_series(&mut self, series: Series) {
        let mut all = self.series.take().map(ArrayOrSingle::into_vec).unwrap_or_default();
        all.push(series);
        self.series = Some(ArrayOrSingle::Array(all));
    }

    pub fn x_axes(&self) -> impl Iterator<Item = &Axis> {
        self.x_axis.iter().flat_map(ArrayOrSingle::iter)
    }

    pub fn y_axes(&self) -> impl Iterator<Item = &Axis> {
        self.y_axis.iter().flat_map(ArrayOrSingle::iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::series::{DataItem, LineSeries};
    use crate::value::StringOrNumber;
    use serde_json::json;

    #[test]
    fn single_and_array_components_keep_their_form() {
        let raw = json!({
            "xAxis": {"type": "category", "data": ["Mon", "Tue"]},
            "yAxis": [{"type": "value"}, {"type": "value", "position": "right"}],
            "grid3D": {"viewControl": {"rotateSensitivity": [1, 0]}},
            "series": {"type": "line", "data": [1, 2]},
            "useUTC": true
        });
        let option: ChartOption = serde_json::from_value(raw.clone()).unwrap();
        assert!(!option.x_axis.as_ref().unwrap().is_array());
        assert_eq!(option.y_axes().count(), 2);
        assert_eq!(option.series().count(), 1);
        assert_eq!(option.use_utc, Some(true));
        assert_eq!(serde_json::to_value(&option).unwrap(), raw);
    }

    #[test]
    fn unknown_root_keys_survive() {
        let raw = json!({
            "visualMap": {"min": 0, "max": 10},
            "toolbox": {"feature": {"saveAsImage": {}}},
            "animation": "auto"
        });
        let option: ChartOption = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(option.extra.len(), 2);
        assert_eq!(option.animation, Some(StringOrBool::from("auto")));
        assert_eq!(serde_json::to_value(&option).unwrap(), raw);
    }

    #[test]
    fn push_series_promotes_to_array() {
        let mut option = ChartOption::default();
        option.push_series(Series::Line(LineSeries {
            data: Some(vec![DataItem::scalar(1)]),
            ..Default::default()
        }));
        option.push_series(Series::Line(LineSeries::default()));
        assert!(option.series.as_ref().unwrap().is_array());
        assert_eq!(option.series().count(), 2);
    }

    #[test]
    fn empty_option_is_an_empty_object() {
        assert_eq!(serde_json::to_value(ChartOption::default()).unwrap(), json!({}));
    }

    #[test]
    fn programmatic_construction_encodes_sparsely() {
        let option = ChartOption {
            grid: Some(ArrayOrSingle::single(Grid {
                left: Some(StringOrNumber::from("20%")),
                width: Some(StringOrNumber::from(30)),
                ..Default::default()
            })),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&option).unwrap(),
            json!({"grid": {"left": "20%", "width": 30}})
        );
    }
}
