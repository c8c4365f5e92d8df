//! Chart enumerations shared by the option types.
//!
//! Every enumeration knows the literal it serializes to in DrawingML chart
//! markup via `xml_value`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bar/column direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarDirection {
    /// Horizontal bars
    Bar,
    /// Vertical bars (columns)
    #[default]
    Column,
}

impl BarDirection {
    /// Returns the XML value for this direction.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Column => "col",
        }
    }
}

/// Bar grouping type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarGrouping {
    /// Clustered bars
    #[default]
    Clustered,
    /// Stacked bars
    Stacked,
    /// 100% stacked bars
    PercentStacked,
    /// Standard grouping (3D bars laid out along the depth axis)
    Standard,
}

impl BarGrouping {
    /// Returns the XML value for this grouping.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Clustered => "clustered",
            Self::Stacked => "stacked",
            Self::PercentStacked => "percentStacked",
            Self::Standard => "standard",
        }
    }
}

/// Grouping for area and line charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grouping {
    /// Series drawn independently
    #[default]
    Standard,
    /// Series stacked on each other
    Stacked,
    /// Series stacked to 100%
    PercentStacked,
}

impl Grouping {
    /// Returns the XML value for this grouping.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Stacked => "stacked",
            Self::PercentStacked => "percentStacked",
        }
    }
}

/// Marker symbol for line, scatter and radar series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerStyle {
    /// Circle marker
    Circle,
    /// Dash marker
    Dash,
    /// Diamond marker
    Diamond,
    /// Dot marker
    Dot,
    /// No marker
    None,
    /// Picture marker
    Picture,
    /// Plus marker
    Plus,
    /// Square marker
    Square,
    /// Star marker
    Star,
    /// Triangle marker
    Triangle,
    /// X marker
    X,
    /// Automatic marker
    #[default]
    Auto,
}

impl MarkerStyle {
    /// Returns the XML value for this marker style.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Dash => "dash",
            Self::Diamond => "diamond",
            Self::Dot => "dot",
            Self::None => "none",
            Self::Picture => "picture",
            Self::Plus => "plus",
            Self::Square => "square",
            Self::Star => "star",
            Self::Triangle => "triangle",
            Self::X => "x",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for MarkerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.xml_value())
    }
}

/// What the bubble size value maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeRepresents {
    /// Bubble area is proportional to the value
    #[default]
    Area,
    /// Bubble width is proportional to the value
    Width,
}

impl SizeRepresents {
    /// Returns the XML value for this mapping.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Area => "area",
            Self::Width => "w",
        }
    }
}
