//! Chart customization options for Office Open XML spreadsheets.
//!
//! This module provides the option types that tune how a chart is drawn and
//! the data types that feed it:
//!
//! - Area, bar and bubble chart options with clamped numeric settings
//! - Series markers and up/down bars
//! - Numeric and string literals, caches and worksheet references
//! - Type groups and series that place the options in a `c:plotArea`
//! - YAML templates for reusing option sets across charts
//!
//! Every type converts lazily into an [`XmlNode`](crate::ooxml::node::XmlNode)
//! through [`ToXmlNode`](crate::ooxml::node::ToXmlNode); nothing is
//! serialized until the caller asks for it.
//!
//! # Example
//!
//! ```rust
//! use sheetchart::ooxml::charts::{
//!     BarChartOptions, BarTypeGroup, NumberReference, Series, StringReference, TypeGroup,
//! };
//! use sheetchart::ooxml::charts::types::{BarDirection, BarGrouping};
//! use sheetchart::ooxml::node::ToXmlNode;
//!
//! let mut group = BarTypeGroup::new(BarDirection::Column, BarGrouping::Clustered);
//! group.options = BarChartOptions::new().with_gap_width(80).with_overlap(-10);
//! group.common.add_series(
//!     Series::new(0)
//!         .with_categories(StringReference::for_range("Sheet1", 2, 1, 5, 1))
//!         .with_values(NumberReference::for_range("Sheet1", 2, 2, 5, 2)),
//! );
//!
//! let xml = TypeGroup::Bar(group).to_xml_node().to_xml_string()?;
//! assert!(xml.contains(r#"<c:gapWidth val="80"/>"#));
//! assert!(xml.contains("<c:f>Sheet1!$B$2:$B$5</c:f>"));
//! # Ok::<(), sheetchart::ooxml::ChartError>(())
//! ```

pub mod area;
pub mod bar;
pub mod bounds;
pub mod bubble;
pub mod data;
pub mod marker;
pub mod plot_area;
pub mod reference;
pub mod series;
pub mod template;
pub mod types;
pub mod up_down_bars;

pub use area::AreaChartOptions;
pub use bar::BarChartOptions;
pub use bubble::BubbleChartOptions;
pub use data::{
    NumberData, NumberLiteral, NumberingCache, NumericPoint, StringCache, StringData,
    StringLiteral, StringPoint,
};
pub use marker::Marker;
pub use plot_area::{
    AreaTypeGroup, BarTypeGroup, BubbleTypeGroup, LineTypeGroup, PlotArea, TypeGroup,
    TypeGroupCommon,
};
pub use reference::{CellRange, NumberReference, StringReference};
pub use series::{CategorySource, NumberSource, Series};
pub use template::ChartTemplate;
pub use types::MarkerStyle;
pub use up_down_bars::{UpDownBar, UpDownBars};
