//! Sheetchart - chart customization options for spreadsheet documents
//!
//! This library provides the option and data types a spreadsheet writer
//! needs to customize charts, and renders them into Office Open XML
//! DrawingML chart markup.
//!
//! # Features
//!
//! - **Clamped options**: area, bar, bubble, marker and up/down bar settings
//!   accept any input and store it within the ranges Excel understands
//! - **Unset vs. default**: optional settings that were never assigned are
//!   left out of the output so the consuming application picks its default
//! - **Chart data**: numeric/string literals, caches and worksheet references
//! - **Templates**: option sets loaded from YAML and cloned onto charts
//!
//! # Example - Customizing a marker
//!
//! ```
//! use sheetchart::ooxml::charts::{Marker, MarkerStyle};
//! use sheetchart::ooxml::node::ToXmlNode;
//!
//! let mut marker = Marker::new();
//! assert!(!marker.has_marker());
//! assert_eq!(marker.to_xml_node().to_xml_string()?, "<c:marker/>");
//!
//! marker.set_symbol(MarkerStyle::Diamond);
//! marker.set_size(200); // clamped to 72
//! assert_eq!(
//!     marker.to_xml_node().to_xml_string()?,
//!     r#"<c:marker><c:symbol val="diamond"/><c:size val="72"/></c:marker>"#
//! );
//! # Ok::<(), sheetchart::ooxml::ChartError>(())
//! ```
//!
//! # Example - Referencing worksheet data
//!
//! ```
//! use sheetchart::ooxml::charts::NumberReference;
//!
//! let mut values = NumberReference::for_range("Sales Q1", 2, 3, 13, 3);
//! assert_eq!(values.formula(), "'Sales Q1'!$C$2:$C$13");
//!
//! // Range edits take effect in the formula only after a refresh.
//! values.set_end_row_index(25);
//! assert_eq!(values.formula(), "'Sales Q1'!$C$2:$C$13");
//! values.refresh_formula();
//! assert_eq!(values.formula(), "'Sales Q1'!$C$2:$C$25");
//! ```

/// Cell and range reference helpers
pub mod common;

/// OOXML chart option types and their DrawingML conversion
pub mod ooxml;

// Re-export commonly used types for convenience
pub use ooxml::charts::{
    AreaChartOptions, BarChartOptions, BubbleChartOptions, ChartTemplate, Marker,
    NumberReference, UpDownBars,
};
pub use ooxml::{ChartError, Result, ToXmlNode, XmlNode};
