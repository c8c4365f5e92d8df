//! Series data point markers (`c:marker`).
//!
//! Symbol and size are stored as "unset or value". The getters report a
//! default for unset fields, but serialization only writes what was set, so
//! an untouched marker leaves the choice to the consuming application (Excel
//! itself draws unset markers at size 7, not 5).

use crate::ooxml::charts::bounds::{DEFAULT_MARKER_SIZE, MARKER_SIZE, clamp_to};
use crate::ooxml::charts::types::MarkerStyle;
use crate::ooxml::drawings::ShapeProperties;
use crate::ooxml::node::{ToXmlNode, XmlNode};
use serde::{Deserialize, Serialize};

/// Marker formatting for a series or data point.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawMarker")]
pub struct Marker {
    symbol: Option<MarkerStyle>,
    size: Option<u8>,
    /// Marker fill and outline
    pub shape_properties: ShapeProperties,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawMarker {
    symbol: Option<MarkerStyle>,
    size: Option<u8>,
    shape_properties: ShapeProperties,
}

impl From<RawMarker> for Marker {
    fn from(raw: RawMarker) -> Self {
        let mut marker = Self::new();
        marker.symbol = raw.symbol;
        if let Some(size) = raw.size {
            marker.set_size(size);
        }
        marker.shape_properties = raw.shape_properties;
        marker
    }
}

impl Marker {
    /// Create a marker with nothing set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marker symbol; [`MarkerStyle::Auto`] when unset.
    #[inline]
    pub fn symbol(&self) -> MarkerStyle {
        self.symbol.unwrap_or(MarkerStyle::Auto)
    }

    #[inline]
    pub fn set_symbol(&mut self, symbol: MarkerStyle) {
        self.symbol = Some(symbol);
    }

    #[inline]
    pub fn clear_symbol(&mut self) {
        self.symbol = None;
    }

    /// Explicitly set symbol, if any.
    #[inline]
    pub fn explicit_symbol(&self) -> Option<MarkerStyle> {
        self.symbol
    }

    /// Marker size in points; 5 when unset.
    #[inline]
    pub fn size(&self) -> u8 {
        self.size.unwrap_or(DEFAULT_MARKER_SIZE)
    }

    /// Set the size, clamped to 2..=72.
    #[inline]
    pub fn set_size(&mut self, size: u8) {
        self.size = Some(clamp_to("marker_size", size, &MARKER_SIZE));
    }

    #[inline]
    pub fn clear_size(&mut self) {
        self.size = None;
    }

    /// Explicitly set size, if any.
    #[inline]
    pub fn explicit_size(&self) -> Option<u8> {
        self.size
    }

    /// Builder: set the symbol.
    #[inline]
    pub fn with_symbol(mut self, symbol: MarkerStyle) -> Self {
        self.set_symbol(symbol);
        self
    }

    /// Builder: set the size.
    #[inline]
    pub fn with_size(mut self, size: u8) -> Self {
        self.set_size(size);
        self
    }

    /// Whether anything about the marker has been customized.
    pub fn has_marker(&self) -> bool {
        self.symbol.is_some() || self.size.is_some() || self.shape_properties.has_customization()
    }
}

impl ToXmlNode for Marker {
    fn to_xml_node(&self) -> XmlNode {
        let mut marker = XmlNode::new("c:marker");
        if let Some(symbol) = self.symbol {
            marker.push_child(XmlNode::val("c:symbol", symbol.xml_value()));
        }
        if let Some(size) = self.size {
            marker.push_child(XmlNode::int_val("c:size", size));
        }
        if let Some(sp_pr) = self.shape_properties.to_optional_node() {
            marker.push_child(sp_pr);
        }
        marker
    }
}
