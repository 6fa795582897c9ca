//! String enumerations that appear as option values.
//!
//! Known variants keep matching and serialization consistent; `Other`
//! preserves values introduced by newer engine releases so older builds can
//! still round-trip documents that use them. A known value parsed from the
//! wire always lands in its named variant, never in `Other`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Eq, PartialEq, Hash)]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $wire,)+
                    $name::Other(value) => value.as_str(),
                }
            }

            pub fn from_wire(value: &str) -> Self {
                match value {
                    $($wire => $name::$variant,)+
                    other => $name::Other(other.to_string()),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let value = String::deserialize(deserializer)?;
                Ok(Self::from_wire(&value))
            }
        }
    };
}

wire_enum! {
    /// Layout direction of legends, data zoom sliders and similar components.
    Orient {
        Horizontal => "horizontal",
        Vertical => "vertical",
    }
}

wire_enum! {
    /// Scale type of a cartesian axis.
    AxisType {
        Value => "value",
        Category => "category",
        Time => "time",
        Log => "log",
    }
}

wire_enum! {
    /// What the tooltip is triggered by.
    Trigger {
        Item => "item",
        Axis => "axis",
        None => "none",
    }
}

wire_enum! {
    LegendKind {
        Plain => "plain",
        Scroll => "scroll",
    }
}

wire_enum! {
    DataZoomKind {
        Inside => "inside",
        Slider => "slider",
    }
}

wire_enum! {
    TextAlign {
        Auto => "auto",
        Left => "left",
        Center => "center",
        Right => "right",
    }
}

wire_enum! {
    /// Value of a series' `type` key.
    SeriesKind {
        Line => "line",
        Bar => "bar",
        Pie => "pie",
        Scatter => "scatter",
    }
}
