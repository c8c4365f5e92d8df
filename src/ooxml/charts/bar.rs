//! Bar and column chart options.

use crate::ooxml::charts::bounds::{
    DEFAULT_GAP_DEPTH, DEFAULT_GAP_WIDTH, DEFAULT_OVERLAP, GAP_DEPTH, GAP_WIDTH, OVERLAP, clamp_to,
};
use crate::ooxml::node::XmlNode;
use serde::{Deserialize, Serialize};

/// Spacing options for bar and column charts.
///
/// | Setting | Range | Default |
/// |---|---|---|
/// | gap width | 0..=500 | 150 |
/// | gap depth | 0..=500 | 150 |
/// | overlap | -100..=100 | 0 |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawBarChartOptions")]
pub struct BarChartOptions {
    gap_width: u16,
    gap_depth: u16,
    overlap: i16,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawBarChartOptions {
    gap_width: u16,
    gap_depth: u16,
    overlap: i16,
}

impl Default for RawBarChartOptions {
    fn default() -> Self {
        Self {
            gap_width: DEFAULT_GAP_WIDTH,
            gap_depth: DEFAULT_GAP_DEPTH,
            overlap: DEFAULT_OVERLAP,
        }
    }
}

impl From<RawBarChartOptions> for BarChartOptions {
    fn from(raw: RawBarChartOptions) -> Self {
        let mut options = Self::new();
        options.set_gap_width(raw.gap_width);
        options.set_gap_depth(raw.gap_depth);
        options.set_overlap(raw.overlap);
        options
    }
}

impl BarChartOptions {
    /// Create options with Excel's defaults.
    #[inline]
    pub fn new() -> Self {
        Self {
            gap_width: DEFAULT_GAP_WIDTH,
            gap_depth: DEFAULT_GAP_DEPTH,
            overlap: DEFAULT_OVERLAP,
        }
    }

    /// Gap between clusters, in percent of bar width.
    #[inline]
    pub fn gap_width(&self) -> u16 {
        self.gap_width
    }

    #[inline]
    pub fn set_gap_width(&mut self, gap_width: u16) {
        self.gap_width = clamp_to("gap_width", gap_width, &GAP_WIDTH);
    }

    /// Depth gap for 3D bars, in percent of bar width.
    #[inline]
    pub fn gap_depth(&self) -> u16 {
        self.gap_depth
    }

    #[inline]
    pub fn set_gap_depth(&mut self, gap_depth: u16) {
        self.gap_depth = clamp_to("gap_depth", gap_depth, &GAP_DEPTH);
    }

    /// Overlap of bars within a cluster, in percent. Negative values separate them.
    #[inline]
    pub fn overlap(&self) -> i16 {
        self.overlap
    }

    #[inline]
    pub fn set_overlap(&mut self, overlap: i16) {
        self.overlap = clamp_to("overlap", overlap, &OVERLAP);
    }

    /// Builder form of [`set_gap_width`](Self::set_gap_width).
    #[inline]
    pub fn with_gap_width(mut self, gap_width: u16) -> Self {
        self.set_gap_width(gap_width);
        self
    }

    /// Builder form of [`set_overlap`](Self::set_overlap).
    #[inline]
    pub fn with_overlap(mut self, overlap: i16) -> Self {
        self.set_overlap(overlap);
        self
    }

    /// Option elements for a `c:barChart` (2D) or `c:bar3DChart` (3D) group.
    ///
    /// 2D groups carry `c:gapWidth` and `c:overlap`; 3D groups carry
    /// `c:gapWidth` and `c:gapDepth`.
    pub fn to_group_nodes(&self, is_3d: bool) -> Vec<XmlNode> {
        let second = if is_3d {
            XmlNode::int_val("c:gapDepth", self.gap_depth)
        } else {
            XmlNode::int_val("c:overlap", self.overlap)
        };
        vec![XmlNode::int_val("c:gapWidth", self.gap_width), second]
    }
}

impl Default for BarChartOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
