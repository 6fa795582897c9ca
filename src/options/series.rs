//! Series definitions keyed by their `type` string.
//!
//! Known kinds decode into typed structs; any other kind is kept as the raw
//! JSON object in [`Series::Other`] so documents using series this crate does
//! not model still round-trip. Every typed series also carries an `extra` map
//! for keys it does not model.

use crate::options::enums::SeriesKind;
use crate::options::style::{AreaStyle, ItemStyle, Label, LineStyle};
use crate::value::{ArrayOrSingle, JsonKind, StringOrBool, StringOrNumber};
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq)]
pub enum Series {
    Line(LineSeries),
    Bar(BarSeries),
    Pie(PieSeries),
    Scatter(ScatterSeries),
    /// Any other `type`, stored verbatim including the `type` key.
    Other(Map<String, Value>),
}

impl Series {
    pub fn kind(&self) -> SeriesKind {
        match self {
            Series::Line(_) => SeriesKind::Line,
            Series::Bar(_) => SeriesKind::Bar,
            Series::Pie(_) => SeriesKind::Pie,
            Series::Scatter(_) => SeriesKind::Scatter,
            Series::Other(map) => {
                SeriesKind::from_wire(map.get("type").and_then(Value::as_str).unwrap_or_default())
            }
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Series::Line(series) => series.name.as_deref(),
            Series::Bar(series) => series.name.as_deref(),
            Series::Pie(series) => series.name.as_deref(),
            Series::Scatter(series) => series.name.as_deref(),
            Series::Other(map) => map.get("name").and_then(Value::as_str),
        }
    }

    /// Typed data points; `None` for untyped series or when `data` is unset.
    pub fn data(&self) -> Option<&[DataItem]> {
        match self {
            Series::Line(series) => series.data.as_deref(),
            Series::Bar(series) => series.data.as_deref(),
            Series::Pie(series) => series.data.as_deref(),
            Series::Scatter(series) => series.data.as_deref(),
            Series::Other(_) => None,
        }
    }
}

#[derive(Serialize)]
struct Tagged<'a, T> {
    #[serde(rename = "type")]
    kind: &'a str,
    #[serde(flatten)]
    body: &'a T,
}

impl Serialize for Series {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Series::Line(body) => Tagged { kind: "line", body }.serialize(serializer),
            Series::Bar(body) => Tagged { kind: "bar", body }.serialize(serializer),
            Series::Pie(body) => Tagged { kind: "pie", body }.serialize(serializer),
            Series::Scatter(body) => Tagged { kind: "scatter", body }.serialize(serializer),
            Series::Other(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Series {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut map = Map::<String, Value>::deserialize(deserializer)?;
        let kind = match map.get("type") {
            Some(Value::String(kind)) => SeriesKind::from_wire(kind),
            Some(other) => {
                return Err(de::Error::custom(format!(
                    "series type must be a string, found {}",
                    JsonKind::of(other)
                )));
            }
            None => return Err(de::Error::missing_field("type")),
        };

        if let SeriesKind::Other(_) = kind {
            return Ok(Series::Other(map));
        }

        map.remove("type");
        match kind {
            SeriesKind::Line => decode_body(map).map(Series::Line),
            SeriesKind::Bar => decode_body(map).map(Series::Bar),
            SeriesKind::Pie => decode_body(map).map(Series::Pie),
            SeriesKind::Scatter => decode_body(map).map(Series::Scatter),
            SeriesKind::Other(_) => Ok(Series::Other(map)),
        }
    }
}

fn decode_body<T: DeserializeOwned, E: de::Error>(map: Map<String, Value>) -> Result<T, E> {
    serde_json::from_value(Value::Object(map)).map_err(E::custom)
}

/// One data point of a series.
///
/// Points come as a bare value (`12`, `"-"`), a tuple (`[x, y]`), an object
/// carrying a name and per-point styling, or `null` for a gap.
#[derive(Clone, Debug, PartialEq)]
pub enum DataItem {
    Empty,
    Value(ArrayOrSingle<StringOrNumber>),
    Entry(DataEntry),
}

impl DataItem {
    pub fn scalar(value: impl Into<StringOrNumber>) -> Self {
        DataItem::Value(ArrayOrSingle::single(value.into()))
    }

    pub fn tuple<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<StringOrNumber>,
    {
        DataItem::Value(ArrayOrSingle::array(values.into_iter().map(Into::into)))
    }

    pub fn value(&self) -> Option<&ArrayOrSingle<StringOrNumber>> {
        match self {
            DataItem::Empty => None,
            DataItem::Value(value) => Some(value),
            DataItem::Entry(entry) => entry.value.as_ref(),
        }
    }
}

impl Serialize for DataItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            DataItem::Empty => serializer.serialize_none(),
            DataItem::Value(value) => value.serialize(serializer),
            DataItem::Entry(entry) => entry.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for DataItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::Null => Ok(DataItem::Empty),
            Value::Object(_) => serde_json::from_value(value)
                .map(DataItem::Entry)
                .map_err(de::Error::custom),
            other => serde_json::from_value(other)
                .map(DataItem::Value)
                .map_err(de::Error::custom),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ArrayOrSingle<StringOrNumber>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSeries {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinate_system: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<ArrayOrSingle<StringOrNumber>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_symbol: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_nulls: Option<bool>,
    /// `false` or the step anchor: `"start"`, `"middle"`, `"end"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<StringOrBool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sampling: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_style: Option<AreaStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<DataItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<i32>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarSeries {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar_width: Option<StringOrNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar_max_width: Option<StringOrNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar_min_height: Option<Number>,
    /// Gap between bars of different series, always a percentage string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar_gap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar_category_gap: Option<StringOrNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_background: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round_cap: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<DataItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<i32>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSeries {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `[x, y]` of the pie centre, pixels or percentages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<Vec<StringOrNumber>>,
    /// Outer radius, or `[inner, outer]` for a ring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<ArrayOrSingle<StringOrNumber>>,
    /// `false`, `true`, `"radius"` or `"area"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rose_type: Option<StringOrBool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_angle: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_angle: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clockwise: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avoid_label_overlap: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_mode: Option<StringOrBool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_offset: Option<Number>,
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
    pub silent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<DataItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<i32>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterSeries {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinate_system: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// One size, `[width, height]`, or callback source kept as text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<ArrayOrSingle<StringOrNumber>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<DataItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<i32>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
