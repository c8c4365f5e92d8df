//! Chart series.
//!
//! A series pairs its data sources with the per-series formatting that the
//! option types provide (markers, shape properties). Element order inside
//! `c:ser` depends on the chart type, so the type group picks the layout.

use crate::ooxml::charts::data::{NumberLiteral, StringLiteral};
use crate::ooxml::charts::marker::Marker;
use crate::ooxml::charts::reference::{NumberReference, StringReference};
use crate::ooxml::drawings::ShapeProperties;
use crate::ooxml::node::{ToXmlNode, XmlNode};
use serde::{Deserialize, Serialize};

/// Numeric values for a series: a worksheet reference or embedded literals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberSource {
    Reference(NumberReference),
    Literal(NumberLiteral),
}

impl ToXmlNode for NumberSource {
    fn to_xml_node(&self) -> XmlNode {
        match self {
            Self::Reference(reference) => reference.to_xml_node(),
            Self::Literal(literal) => literal.to_xml_node(),
        }
    }
}

impl From<NumberReference> for NumberSource {
    fn from(reference: NumberReference) -> Self {
        Self::Reference(reference)
    }
}

impl From<NumberLiteral> for NumberSource {
    fn from(literal: NumberLiteral) -> Self {
        Self::Literal(literal)
    }
}

/// Category labels for a series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategorySource {
    Reference(StringReference),
    Literal(StringLiteral),
    /// Numeric categories, e.g. dates or scatter x values
    Numeric(NumberSource),
}

impl ToXmlNode for CategorySource {
    fn to_xml_node(&self) -> XmlNode {
        match self {
            Self::Reference(reference) => reference.to_xml_node(),
            Self::Literal(literal) => literal.to_xml_node(),
            Self::Numeric(source) => source.to_xml_node(),
        }
    }
}

impl From<StringReference> for CategorySource {
    fn from(reference: StringReference) -> Self {
        Self::Reference(reference)
    }
}

impl From<StringLiteral> for CategorySource {
    fn from(literal: StringLiteral) -> Self {
        Self::Literal(literal)
    }
}

/// A data series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Series {
    /// Series index (unique within the chart)
    pub index: u32,
    /// Plot order
    pub order: u32,
    /// Series name, taken from a cell
    pub title: Option<StringReference>,
    /// Categories (`c:cat`), or x values for bubble charts (`c:xVal`)
    pub categories: Option<CategorySource>,
    /// Values (`c:val`), or y values for bubble charts (`c:yVal`)
    pub values: Option<NumberSource>,
    /// Bubble sizes (bubble charts only)
    pub bubble_sizes: Option<NumberSource>,
    /// Marker (line charts only)
    pub marker: Option<Marker>,
    /// Series fill and outline
    pub shape_properties: ShapeProperties,
    /// Smooth the connecting line (line charts only)
    pub smooth: bool,
}

impl Series {
    /// Create a series whose index and order are both `index`.
    #[inline]
    pub fn new(index: u32) -> Self {
        Self {
            index,
            order: index,
            ..Self::default()
        }
    }

    /// Set the series name reference.
    #[inline]
    pub fn with_title(mut self, title: StringReference) -> Self {
        self.title = Some(title);
        self
    }

    /// Set the categories.
    #[inline]
    pub fn with_categories(mut self, categories: impl Into<CategorySource>) -> Self {
        self.categories = Some(categories.into());
        self
    }

    /// Set the values.
    #[inline]
    pub fn with_values(mut self, values: impl Into<NumberSource>) -> Self {
        self.values = Some(values.into());
        self
    }

    /// Set the bubble sizes.
    #[inline]
    pub fn with_bubble_sizes(mut self, sizes: impl Into<NumberSource>) -> Self {
        self.bubble_sizes = Some(sizes.into());
        self
    }

    /// Set the marker.
    #[inline]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    /// `c:idx`, `c:order`, `c:tx`, `c:spPr`: the prefix every series layout shares.
    pub(crate) fn header_nodes(&self) -> Vec<XmlNode> {
        let mut nodes = vec![
            XmlNode::int_val("c:idx", self.index),
            XmlNode::int_val("c:order", self.order),
        ];
        if let Some(ref title) = self.title {
            nodes.push(XmlNode::new("c:tx").with_child(title.to_xml_node()));
        }
        if let Some(sp_pr) = self.shape_properties.to_optional_node() {
            nodes.push(sp_pr);
        }
        nodes
    }

    /// Data source wrapped in its slot element, e.g. `c:cat` or `c:yVal`.
    pub(crate) fn data_node(tag: &str, source: &impl ToXmlNode) -> XmlNode {
        XmlNode::new(tag).with_child(source.to_xml_node())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::drawings::{ColorRef, Fill};

    #[test]
    fn test_header_nodes_minimal() {
        let series = Series::new(2);
        let tags: Vec<String> = series
            .header_nodes()
            .iter()
            .map(|n| n.tag().to_string())
            .collect();
        assert_eq!(tags, vec!["c:idx", "c:order"]);
    }

    #[test]
    fn test_header_nodes_with_title_and_fill() {
        let mut series = Series::new(0).with_title(StringReference::for_range("Sheet1", 1, 2, 1, 2));
        series.shape_properties.fill = Some(Fill::Solid(ColorRef::rgb("00B050").unwrap()));

        let nodes = series.header_nodes();
        let tags: Vec<&str> = nodes.iter().map(XmlNode::tag).collect();
        assert_eq!(tags, vec!["c:idx", "c:order", "c:tx", "c:spPr"]);
        assert_eq!(nodes[2].child_tags(), vec!["c:strRef"]);
    }

    #[test]
    fn test_data_node_wraps_source() {
        let values = NumberSource::from(NumberLiteral::from_values(&[1.0]));
        let node = Series::data_node("c:val", &values);
        assert_eq!(node.child_tags(), vec!["c:numLit"]);
    }
}
