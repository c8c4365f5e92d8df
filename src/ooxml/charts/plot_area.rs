//! Chart type groups.
//!
//! A type group is one `c:*Chart` element inside the plot area: the chart
//! type, its series, the option elements contributed by the chart option
//! types, and the ids of the axes it is plotted on.

use crate::ooxml::charts::area::AreaChartOptions;
use crate::ooxml::charts::bar::BarChartOptions;
use crate::ooxml::charts::bubble::BubbleChartOptions;
use crate::ooxml::charts::series::Series;
use crate::ooxml::charts::types::{BarDirection, BarGrouping, Grouping};
use crate::ooxml::charts::up_down_bars::UpDownBars;
use crate::ooxml::node::{ToXmlNode, XmlNode};
use serde::{Deserialize, Serialize};

/// Plot area containing chart type groups.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotArea {
    /// Chart type groups
    pub type_groups: Vec<TypeGroup>,
}

impl PlotArea {
    /// Create a new plot area.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a type group.
    #[inline]
    pub fn add_type_group(mut self, group: TypeGroup) -> Self {
        self.type_groups.push(group);
        self
    }
}

impl ToXmlNode for PlotArea {
    fn to_xml_node(&self) -> XmlNode {
        XmlNode::new("c:plotArea")
            .with_child(XmlNode::new("c:layout"))
            .with_children(self.type_groups.iter().map(ToXmlNode::to_xml_node))
    }
}

/// A group of series with the same chart type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeGroup {
    /// Area chart (2D or 3D)
    Area(AreaTypeGroup),
    /// Bar or column chart (2D or 3D)
    Bar(BarTypeGroup),
    /// Bubble chart
    Bubble(BubbleTypeGroup),
    /// Line chart
    Line(LineTypeGroup),
}

impl ToXmlNode for TypeGroup {
    fn to_xml_node(&self) -> XmlNode {
        match self {
            Self::Area(group) => group.to_xml_node(),
            Self::Bar(group) => group.to_xml_node(),
            Self::Bubble(group) => group.to_xml_node(),
            Self::Line(group) => group.to_xml_node(),
        }
    }
}

/// Common properties for type groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeGroupCommon {
    /// Vary colors by point
    pub vary_colors: bool,
    /// Series in this group
    pub series: Vec<Series>,
    /// Axes this group is plotted against
    pub axis_ids: Vec<u32>,
}

impl TypeGroupCommon {
    /// Create new common properties plotted on axes 1 and 2.
    #[inline]
    pub fn new() -> Self {
        Self {
            vary_colors: false,
            series: Vec::new(),
            axis_ids: vec![1, 2],
        }
    }

    /// Add a series.
    #[inline]
    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    fn vary_colors_node(&self) -> XmlNode {
        XmlNode::bool_val("c:varyColors", self.vary_colors)
    }

    fn axis_id_nodes(&self) -> impl Iterator<Item = XmlNode> + '_ {
        self.axis_ids.iter().map(|&id| XmlNode::int_val("c:axId", id))
    }
}

impl Default for TypeGroupCommon {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Area chart type group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaTypeGroup {
    /// Common properties
    pub common: TypeGroupCommon,
    /// Grouping type
    pub grouping: Grouping,
    /// Render as `c:area3DChart`
    pub is_3d: bool,
    /// Area options
    pub options: AreaChartOptions,
}

impl AreaTypeGroup {
    /// Create a new area type group.
    #[inline]
    pub fn new(grouping: Grouping) -> Self {
        Self {
            common: TypeGroupCommon::new(),
            grouping,
            is_3d: false,
            options: AreaChartOptions::new(),
        }
    }
}

impl ToXmlNode for AreaTypeGroup {
    fn to_xml_node(&self) -> XmlNode {
        let tag = if self.is_3d { "c:area3DChart" } else { "c:areaChart" };
        tracing::debug!(chart = tag, series = self.common.series.len(), "building type group");

        let series = self.common.series.iter().map(|s| {
            let mut ser = XmlNode::new("c:ser").with_children(s.header_nodes());
            if let Some(ref categories) = s.categories {
                ser.push_child(Series::data_node("c:cat", categories));
            }
            if let Some(ref values) = s.values {
                ser.push_child(Series::data_node("c:val", values));
            }
            ser
        });

        XmlNode::new(tag)
            .with_child(XmlNode::val("c:grouping", self.grouping.xml_value()))
            .with_child(self.common.vary_colors_node())
            .with_children(series)
            .with_children(self.options.to_group_nodes(self.is_3d))
            .with_children(self.common.axis_id_nodes())
    }
}

/// Bar chart type group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarTypeGroup {
    /// Common properties
    pub common: TypeGroupCommon,
    /// Bar direction
    pub direction: BarDirection,
    /// Grouping type
    pub grouping: BarGrouping,
    /// Render as `c:bar3DChart`
    pub is_3d: bool,
    /// Bar options
    pub options: BarChartOptions,
}

impl BarTypeGroup {
    /// Create a new bar type group.
    #[inline]
    pub fn new(direction: BarDirection, grouping: BarGrouping) -> Self {
        Self {
            common: TypeGroupCommon::new(),
            direction,
            grouping,
            is_3d: false,
            options: BarChartOptions::new(),
        }
    }
}

impl ToXmlNode for BarTypeGroup {
    fn to_xml_node(&self) -> XmlNode {
        let tag = if self.is_3d { "c:bar3DChart" } else { "c:barChart" };
        tracing::debug!(chart = tag, series = self.common.series.len(), "building type group");

        let series = self.common.series.iter().map(|s| {
            let mut ser = XmlNode::new("c:ser")
                .with_children(s.header_nodes())
                .with_child(XmlNode::bool_val("c:invertIfNegative", false));
            if let Some(ref categories) = s.categories {
                ser.push_child(Series::data_node("c:cat", categories));
            }
            if let Some(ref values) = s.values {
                ser.push_child(Series::data_node("c:val", values));
            }
            ser
        });

        XmlNode::new(tag)
            .with_child(XmlNode::val("c:barDir", self.direction.xml_value()))
            .with_child(XmlNode::val("c:grouping", self.grouping.xml_value()))
            .with_child(self.common.vary_colors_node())
            .with_children(series)
            .with_children(self.options.to_group_nodes(self.is_3d))
            .with_children(self.common.axis_id_nodes())
    }
}

/// Bubble chart type group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubbleTypeGroup {
    /// Common properties
    pub common: TypeGroupCommon,
    /// Bubble options
    pub options: BubbleChartOptions,
}

impl BubbleTypeGroup {
    /// Create a new bubble type group.
    #[inline]
    pub fn new() -> Self {
        Self {
            common: TypeGroupCommon::new(),
            options: BubbleChartOptions::new(),
        }
    }
}

impl Default for BubbleTypeGroup {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ToXmlNode for BubbleTypeGroup {
    fn to_xml_node(&self) -> XmlNode {
        tracing::debug!(
            chart = "c:bubbleChart",
            series = self.common.series.len(),
            "building type group"
        );

        let series = self.common.series.iter().map(|s| {
            let mut ser = XmlNode::new("c:ser")
                .with_children(s.header_nodes())
                .with_child(XmlNode::bool_val("c:invertIfNegative", false));
            if let Some(ref x_values) = s.categories {
                ser.push_child(Series::data_node("c:xVal", x_values));
            }
            if let Some(ref y_values) = s.values {
                ser.push_child(Series::data_node("c:yVal", y_values));
            }
            if let Some(ref sizes) = s.bubble_sizes {
                ser.push_child(Series::data_node("c:bubbleSize", sizes));
            }
            ser.with_child(self.options.series_bubble_3d_node())
        });

        XmlNode::new("c:bubbleChart")
            .with_child(self.common.vary_colors_node())
            .with_children(series)
            .with_children(self.options.to_group_nodes())
            .with_children(self.common.axis_id_nodes())
    }
}

/// Line chart type group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineTypeGroup {
    /// Common properties
    pub common: TypeGroupCommon,
    /// Grouping type
    pub grouping: Grouping,
    /// Up/down bars between the first and last series
    pub up_down_bars: Option<UpDownBars>,
    /// Show markers on the lines
    pub show_markers: bool,
}

impl LineTypeGroup {
    /// Create a new line type group.
    #[inline]
    pub fn new(grouping: Grouping) -> Self {
        Self {
            common: TypeGroupCommon::new(),
            grouping,
            up_down_bars: None,
            show_markers: true,
        }
    }
}

impl ToXmlNode for LineTypeGroup {
    fn to_xml_node(&self) -> XmlNode {
        tracing::debug!(
            chart = "c:lineChart",
            series = self.common.series.len(),
            "building type group"
        );

        let series = self.common.series.iter().map(|s| {
            let mut ser = XmlNode::new("c:ser").with_children(s.header_nodes());
            if let Some(ref marker) = s.marker {
                ser.push_child(marker.to_xml_node());
            }
            if let Some(ref categories) = s.categories {
                ser.push_child(Series::data_node("c:cat", categories));
            }
            if let Some(ref values) = s.values {
                ser.push_child(Series::data_node("c:val", values));
            }
            ser.with_child(XmlNode::bool_val("c:smooth", s.smooth))
        });

        let mut node = XmlNode::new("c:lineChart")
            .with_child(XmlNode::val("c:grouping", self.grouping.xml_value()))
            .with_child(self.common.vary_colors_node())
            .with_children(series);
        if let Some(ref bars) = self.up_down_bars {
            node.push_child(bars.to_xml_node());
        }
        node.with_child(XmlNode::bool_val("c:marker", self.show_markers))
            .with_children(self.common.axis_id_nodes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::charts::data::{NumberLiteral, NumberingCache, StringLiteral};
    use crate::ooxml::charts::marker::Marker;
    use crate::ooxml::charts::reference::NumberReference;
    use crate::ooxml::charts::types::MarkerStyle;

    #[test]
    fn test_bar_group_layout() {
        let mut group = BarTypeGroup::new(BarDirection::Column, BarGrouping::Clustered);
        group.options.set_gap_width(75);
        group.common.add_series(
            Series::new(0)
                .with_categories(StringLiteral::from_values(&["A", "B"]))
                .with_values(NumberReference::for_range("Sheet1", 1, 2, 2, 2)),
        );

        let node = TypeGroup::Bar(group).to_xml_node();
        assert_eq!(
            node.child_tags(),
            vec![
                "c:barDir",
                "c:grouping",
                "c:varyColors",
                "c:ser",
                "c:gapWidth",
                "c:overlap",
                "c:axId",
                "c:axId"
            ]
        );
        assert_eq!(node.child("c:gapWidth").unwrap().attr("val"), Some("75"));

        let ser = node.child("c:ser").unwrap();
        assert_eq!(
            ser.child_tags(),
            vec!["c:idx", "c:order", "c:invertIfNegative", "c:cat", "c:val"]
        );
        let formula = ser
            .child("c:val")
            .and_then(|v| v.child("c:numRef"))
            .and_then(|r| r.child("c:f"))
            .and_then(XmlNode::text);
        assert_eq!(formula, Some("Sheet1!$B$1:$B$2"));
    }

    #[test]
    fn test_bar_3d_group_uses_gap_depth() {
        let mut group = BarTypeGroup::new(BarDirection::Bar, BarGrouping::Standard);
        group.is_3d = true;
        group.common.axis_ids = vec![1, 2, 3];
        let node = group.to_xml_node();
        assert_eq!(node.tag(), "c:bar3DChart");
        assert!(node.has_child("c:gapDepth"));
        assert!(!node.has_child("c:overlap"));
        assert_eq!(node.children().iter().filter(|c| c.tag() == "c:axId").count(), 3);
    }

    #[test]
    fn test_area_group_layout() {
        let mut group = AreaTypeGroup::new(Grouping::Stacked);
        group.common.add_series(Series::new(0).with_values(NumberLiteral::from_values(&[1.0])));
        let node = group.to_xml_node();
        assert_eq!(
            node.child_tags(),
            vec!["c:grouping", "c:varyColors", "c:ser", "c:axId", "c:axId"]
        );
        assert_eq!(node.child("c:grouping").unwrap().attr("val"), Some("stacked"));
    }

    #[test]
    fn test_bubble_group_layout() {
        let mut group = BubbleTypeGroup::new();
        group.options.bubble_3d = false;
        group.common.add_series(
            Series::new(0)
                .with_categories(crate::ooxml::charts::series::CategorySource::Numeric(
                    NumberLiteral::from_values(&[1.0, 2.0]).into(),
                ))
                .with_values(NumberLiteral::from_values(&[3.0, 4.0]))
                .with_bubble_sizes(NumberLiteral::from_values(&[5.0, 6.0])),
        );

        let node = TypeGroup::Bubble(group).to_xml_node();
        assert_eq!(
            node.child_tags(),
            vec![
                "c:varyColors",
                "c:ser",
                "c:bubbleScale",
                "c:showNegBubbles",
                "c:axId",
                "c:axId"
            ]
        );
        let ser = node.child("c:ser").unwrap();
        assert_eq!(
            ser.child_tags(),
            vec![
                "c:idx",
                "c:order",
                "c:invertIfNegative",
                "c:xVal",
                "c:yVal",
                "c:bubbleSize",
                "c:bubble3D"
            ]
        );
        assert_eq!(ser.child("c:bubble3D").unwrap().attr("val"), Some("0"));
    }

    #[test]
    fn test_line_group_with_markers_and_up_down_bars() {
        let mut group = LineTypeGroup::new(Grouping::Standard);
        group.up_down_bars = Some(UpDownBars::new());
        group.common.add_series(
            Series::new(0)
                .with_marker(Marker::new().with_symbol(MarkerStyle::Circle))
                .with_values(
                    NumberReference::for_range("Prices", 2, 2, 20, 2)
                        .with_cache(NumberingCache::from_values(&[1.0, 2.0])),
                ),
        );
        group.common.add_series(Series::new(1).with_marker(Marker::new()));

        let node = group.to_xml_node();
        assert_eq!(
            node.child_tags(),
            vec![
                "c:grouping",
                "c:varyColors",
                "c:ser",
                "c:ser",
                "c:upDownBars",
                "c:marker",
                "c:axId",
                "c:axId"
            ]
        );

        let first = &node.children()[2];
        assert_eq!(
            first.child_tags(),
            vec!["c:idx", "c:order", "c:marker", "c:val", "c:smooth"]
        );
        let second = &node.children()[3];
        assert_eq!(second.child("c:marker").unwrap().children().len(), 0);
    }

    #[test]
    fn test_plot_area_serializes() {
        let plot_area = PlotArea::new()
            .add_type_group(TypeGroup::Bar(BarTypeGroup::new(
                BarDirection::Column,
                BarGrouping::Clustered,
            )))
            .add_type_group(TypeGroup::Line(LineTypeGroup::new(Grouping::Standard)));
        let xml = plot_area.to_xml_node().to_xml_string().unwrap();
        assert!(xml.starts_with("<c:plotArea><c:layout/><c:barChart>"));
        assert!(xml.contains("<c:lineChart>"));
        assert!(xml.ends_with("</c:plotArea>"));
    }

    #[test]
    fn test_conversion_is_repeatable() {
        let group = TypeGroup::Bar(BarTypeGroup::new(BarDirection::Bar, BarGrouping::Stacked));
        assert_eq!(group.to_xml_node(), group.to_xml_node());
    }
}
