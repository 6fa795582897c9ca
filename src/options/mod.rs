//! Option types mirroring the rendering engine's configuration schema.
//!
//! Every struct follows one convention: Rust field names are snake_case and
//! map to camelCase wire keys (with explicit renames where the wire key is
//! not derivable, e.g. `type`, `grid3D`, `useUTC`); every field is optional;
//! unset fields are omitted from the encoded object instead of being written
//! as `null`. Fields whose JSON shape varies use the wrappers from
//! [`crate::value`]. Keys a struct does not model are kept in its flattened
//! `extra` map and written back as they came.

pub mod axis;
pub mod chart;
pub mod data_zoom;
pub mod enums;
pub mod grid;
pub mod grid_3d;
pub mod legend;
pub mod series;
pub mod style;
pub mod title;
pub mod tooltip;

pub use axis::{Axis, AxisLabel, AxisLine, AxisTick, SplitLine};
pub use chart::ChartOption;
pub use data_zoom::DataZoom;
pub use enums::{AxisType, DataZoomKind, LegendKind, Orient, SeriesKind, TextAlign, Trigger};
pub use grid::Grid;
pub use grid_3d::{Grid3D, ViewControl};
pub use legend::{Legend, LegendEntry, LegendItem};
pub use series::{BarSeries, DataEntry, DataItem, LineSeries, PieSeries, ScatterSeries, Series};
pub use style::{AreaStyle, Color, Formatter, ItemStyle, Label, LineStyle, TextStyle};
pub use title::Title;
pub use tooltip::{AxisPointer, Tooltip};
