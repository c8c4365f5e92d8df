//! Bubble chart options.

use crate::ooxml::charts::bounds::{BUBBLE_SCALE, DEFAULT_BUBBLE_SCALE, clamp_to};
use crate::ooxml::charts::types::SizeRepresents;
use crate::ooxml::node::XmlNode;
use serde::{Deserialize, Serialize};

/// Options for bubble charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawBubbleChartOptions")]
pub struct BubbleChartOptions {
    /// Render bubbles with a 3D effect
    pub bubble_3d: bool,
    bubble_scale: u16,
    /// Show bubbles whose size value is negative
    pub show_negative_bubbles: bool,
    size_represents: Option<SizeRepresents>,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawBubbleChartOptions {
    bubble_3d: bool,
    bubble_scale: u16,
    show_negative_bubbles: bool,
    size_represents: Option<SizeRepresents>,
}

impl Default for RawBubbleChartOptions {
    fn default() -> Self {
        Self {
            bubble_3d: true,
            bubble_scale: DEFAULT_BUBBLE_SCALE,
            show_negative_bubbles: true,
            size_represents: None,
        }
    }
}

impl From<RawBubbleChartOptions> for BubbleChartOptions {
    fn from(raw: RawBubbleChartOptions) -> Self {
        let mut options = Self::new();
        options.bubble_3d = raw.bubble_3d;
        options.set_bubble_scale(raw.bubble_scale);
        options.show_negative_bubbles = raw.show_negative_bubbles;
        options.size_represents = raw.size_represents;
        options
    }
}

impl BubbleChartOptions {
    /// Create options with Excel's defaults.
    #[inline]
    pub fn new() -> Self {
        Self {
            bubble_3d: true,
            bubble_scale: DEFAULT_BUBBLE_SCALE,
            show_negative_bubbles: true,
            size_represents: None,
        }
    }

    /// Bubble size as a percentage of the default size (0..=300, default 100).
    #[inline]
    pub fn bubble_scale(&self) -> u16 {
        self.bubble_scale
    }

    #[inline]
    pub fn set_bubble_scale(&mut self, scale: u16) {
        self.bubble_scale = clamp_to("bubble_scale", scale, &BUBBLE_SCALE);
    }

    /// What the size value maps to. Reports [`SizeRepresents::Area`] when unset.
    #[inline]
    pub fn size_represents(&self) -> SizeRepresents {
        self.size_represents.unwrap_or_default()
    }

    #[inline]
    pub fn set_size_represents(&mut self, represents: SizeRepresents) {
        self.size_represents = Some(represents);
    }

    /// Forget an explicit size mapping so the consumer's default applies.
    #[inline]
    pub fn clear_size_represents(&mut self) {
        self.size_represents = None;
    }

    /// Option elements for a `c:bubbleChart` group, after the series.
    pub fn to_group_nodes(&self) -> Vec<XmlNode> {
        let mut nodes = vec![
            XmlNode::int_val("c:bubbleScale", self.bubble_scale),
            XmlNode::bool_val("c:showNegBubbles", self.show_negative_bubbles),
        ];
        if let Some(represents) = self.size_represents {
            nodes.push(XmlNode::val("c:sizeRepresents", represents.xml_value()));
        }
        nodes
    }

    /// The per-series `c:bubble3D` element.
    #[inline]
    pub fn series_bubble_3d_node(&self) -> XmlNode {
        XmlNode::bool_val("c:bubble3D", self.bubble_3d)
    }
}

impl Default for BubbleChartOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = BubbleChartOptions::new();
        assert!(options.bubble_3d);
        assert_eq!(options.bubble_scale(), 100);
        assert!(options.show_negative_bubbles);
        assert_eq!(options.size_represents(), SizeRepresents::Area);
    }

    #[test]
    fn test_bubble_scale_clamped() {
        let mut options = BubbleChartOptions::new();
        options.set_bubble_scale(1000);
        assert_eq!(options.bubble_scale(), 300);
        options.set_bubble_scale(0);
        assert_eq!(options.bubble_scale(), 0);
        options.set_bubble_scale(250);
        assert_eq!(options.bubble_scale(), 250);
    }

    #[test]
    fn test_default_group_nodes_omit_size_represents() {
        let nodes = BubbleChartOptions::new().to_group_nodes();
        let tags: Vec<&str> = nodes.iter().map(XmlNode::tag).collect();
        assert_eq!(tags, vec!["c:bubbleScale", "c:showNegBubbles"]);
        assert_eq!(nodes[1].attr("val"), Some("1"));
    }

    #[test]
    fn test_explicit_size_represents_is_written() {
        let mut options = BubbleChartOptions::new();
        options.set_size_represents(SizeRepresents::Area);
        let nodes = options.to_group_nodes();
        assert_eq!(nodes.last().unwrap().tag(), "c:sizeRepresents");
        assert_eq!(nodes.last().unwrap().attr("val"), Some("area"));

        options.clear_size_represents();
        assert_eq!(options.to_group_nodes().len(), 2);
    }

    #[test]
    fn test_series_bubble_3d() {
        let mut options = BubbleChartOptions::new();
        assert_eq!(options.series_bubble_3d_node().attr("val"), Some("1"));
        options.bubble_3d = false;
        assert_eq!(options.series_bubble_3d_node().attr("val"), Some("0"));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = BubbleChartOptions::new();
        let mut copy = original.clone();
        copy.show_negative_bubbles = false;
        copy.set_bubble_scale(20);
        copy.set_size_represents(SizeRepresents::Width);
        assert_eq!(original, BubbleChartOptions::new());
    }
}
