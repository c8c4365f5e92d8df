//! Up/down bars for line and stock charts (`c:upDownBars`).

use crate::ooxml::charts::bounds::{DEFAULT_GAP_WIDTH, GAP_WIDTH, clamp_to};
use crate::ooxml::drawings::ShapeProperties;
use crate::ooxml::node::{ToXmlNode, XmlNode};
use serde::{Deserialize, Serialize};

/// Formatting of the up bars or of the down bars.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpDownBar {
    /// Bar fill and outline
    pub shape_properties: ShapeProperties,
}

impl UpDownBar {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Element for this bar set, `c:upBars` or `c:downBars`.
    pub fn to_xml_node_named(&self, tag: &str) -> XmlNode {
        let mut bar = XmlNode::new(tag);
        if let Some(sp_pr) = self.shape_properties.to_optional_node() {
            bar.push_child(sp_pr);
        }
        bar
    }
}

/// Bars connecting the first and last series at each category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawUpDownBars")]
pub struct UpDownBars {
    gap_width: u16,
    /// Bars drawn where the last series is above the first
    pub up_bars: UpDownBar,
    /// Bars drawn where the last series is below the first
    pub down_bars: UpDownBar,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawUpDownBars {
    gap_width: u16,
    up_bars: UpDownBar,
    down_bars: UpDownBar,
}

impl Default for RawUpDownBars {
    fn default() -> Self {
        Self {
            gap_width: DEFAULT_GAP_WIDTH,
            up_bars: UpDownBar::new(),
            down_bars: UpDownBar::new(),
        }
    }
}

impl From<RawUpDownBars> for UpDownBars {
    fn from(raw: RawUpDownBars) -> Self {
        let mut bars = Self::new();
        bars.set_gap_width(raw.gap_width);
        bars.up_bars = raw.up_bars;
        bars.down_bars = raw.down_bars;
        bars
    }
}

impl UpDownBars {
    /// Create up/down bars with default spacing and no formatting.
    #[inline]
    pub fn new() -> Self {
        Self {
            gap_width: DEFAULT_GAP_WIDTH,
            up_bars: UpDownBar::new(),
            down_bars: UpDownBar::new(),
        }
    }

    /// Gap between bars, in percent of bar width (0..=500, default 150).
    #[inline]
    pub fn gap_width(&self) -> u16 {
        self.gap_width
    }

    #[inline]
    pub fn set_gap_width(&mut self, gap_width: u16) {
        self.gap_width = clamp_to("gap_width", gap_width, &GAP_WIDTH);
    }
}

impl Default for UpDownBars {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ToXmlNode for UpDownBars {
    fn to_xml_node(&self) -> XmlNode {
        XmlNode::new("c:upDownBars")
            .with_child(XmlNode::int_val("c:gapWidth", self.gap_width))
            .with_child(self.up_bars.to_xml_node_named("c:upBars"))
            .with_child(self.down_bars.to_xml_node_named("c:downBars"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::drawings::{ColorRef, Fill, SchemeColor};

    #[test]
    fn test_default_node() {
        let xml = UpDownBars::new().to_xml_node().to_xml_string().unwrap();
        assert_eq!(
            xml,
            r#"<c:upDownBars><c:gapWidth val="150"/><c:upBars/><c:downBars/></c:upDownBars>"#
        );
    }

    #[test]
    fn test_gap_width_clamped() {
        let mut bars = UpDownBars::new();
        bars.set_gap_width(u16::MAX);
        assert_eq!(bars.gap_width(), 500);
        bars.set_gap_width(40);
        assert_eq!(bars.gap_width(), 40);
    }

    #[test]
    fn test_formatted_bars() {
        let mut bars = UpDownBars::new();
        bars.up_bars.shape_properties.fill =
            Some(Fill::Solid(ColorRef::Scheme(SchemeColor::Background1)));
        bars.down_bars.shape_properties.fill =
            Some(Fill::Solid(ColorRef::Scheme(SchemeColor::Text1)));

        let node = bars.to_xml_node();
        let up = node.child("c:upBars").unwrap();
        let down = node.child("c:downBars").unwrap();
        assert_eq!(up.child_tags(), vec!["c:spPr"]);
        assert_eq!(down.child_tags(), vec!["c:spPr"]);
        assert!(
            down.to_xml_string()
                .unwrap()
                .contains(r#"<a:schemeClr val="tx1"/>"#)
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let original = UpDownBars::new();
        let mut copy = original.clone();
        copy.set_gap_width(0);
        copy.up_bars.shape_properties.fill = Some(Fill::None);
        assert_eq!(original.gap_width(), 150);
        assert!(!original.up_bars.shape_properties.has_customization());
    }
}
