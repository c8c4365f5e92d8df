//! Area chart options.

use crate::ooxml::charts::bounds::{DEFAULT_GAP_DEPTH, GAP_DEPTH, clamp_to};
use crate::ooxml::drawings::ShapeProperties;
use crate::ooxml::node::{ToXmlNode, XmlNode};
use serde::{Deserialize, Serialize};

/// Options for area charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawAreaChartOptions")]
pub struct AreaChartOptions {
    gap_depth: u16,
    /// Drop lines from each data point to the category axis; `None` hides them
    pub drop_lines: Option<ShapeProperties>,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawAreaChartOptions {
    gap_depth: u16,
    drop_lines: Option<ShapeProperties>,
}

impl Default for RawAreaChartOptions {
    fn default() -> Self {
        Self {
            gap_depth: DEFAULT_GAP_DEPTH,
            drop_lines: None,
        }
    }
}

impl From<RawAreaChartOptions> for AreaChartOptions {
    fn from(raw: RawAreaChartOptions) -> Self {
        let mut options = Self::new();
        options.set_gap_depth(raw.gap_depth);
        options.drop_lines = raw.drop_lines;
        options
    }
}

impl AreaChartOptions {
    /// Create options with Excel's defaults.
    #[inline]
    pub fn new() -> Self {
        Self {
            gap_depth: DEFAULT_GAP_DEPTH,
            drop_lines: None,
        }
    }

    /// Depth gap for 3D area charts, in percent (0..=500, default 150).
    #[inline]
    pub fn gap_depth(&self) -> u16 {
        self.gap_depth
    }

    #[inline]
    pub fn set_gap_depth(&mut self, gap_depth: u16) {
        self.gap_depth = clamp_to("gap_depth", gap_depth, &GAP_DEPTH);
    }

    /// Show drop lines with the given formatting.
    #[inline]
    pub fn with_drop_lines(mut self, properties: ShapeProperties) -> Self {
        self.drop_lines = Some(properties);
        self
    }

    /// Option elements for a `c:areaChart` or `c:area3DChart` group.
    pub fn to_group_nodes(&self, is_3d: bool) -> Vec<XmlNode> {
        let mut nodes = Vec::with_capacity(2);
        if let Some(ref properties) = self.drop_lines {
            let mut drop_lines = XmlNode::new("c:dropLines");
            if properties.has_customization() {
                drop_lines.push_child(properties.to_xml_node());
            }
            nodes.push(drop_lines);
        }
        if is_3d {
            nodes.push(XmlNode::int_val("c:gapDepth", self.gap_depth));
        }
        nodes
    }
}

impl Default for AreaChartOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
