//! Shape properties (`c:spPr`) for chart elements.

use crate::ooxml::drawings::fill::Fill;
use crate::ooxml::node::{ToXmlNode, XmlNode};
use serde::{Deserialize, Serialize};

/// EMUs per point.
const EMU_PER_POINT: f64 = 12_700.0;
/// Widest line DrawingML accepts, in points.
const MAX_LINE_WIDTH_POINTS: f64 = 1_584.0;

/// Preset line dash (`a:prstDash`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineDash {
    Solid,
    Dot,
    Dash,
    LargeDash,
    DashDot,
    LargeDashDot,
    LargeDashDotDot,
    SystemDash,
    SystemDot,
    SystemDashDot,
    SystemDashDotDot,
}

impl LineDash {
    /// Returns the XML value for this dash preset.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dot => "dot",
            Self::Dash => "dash",
            Self::LargeDash => "lgDash",
            Self::DashDot => "dashDot",
            Self::LargeDashDot => "lgDashDot",
            Self::LargeDashDotDot => "lgDashDotDot",
            Self::SystemDash => "sysDash",
            Self::SystemDot => "sysDot",
            Self::SystemDashDot => "sysDashDot",
            Self::SystemDashDotDot => "sysDashDotDot",
        }
    }
}

/// Outline formatting (`a:ln`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LineProperties {
    /// Width in EMUs
    pub width_emu: Option<u32>,
    /// Line fill
    pub fill: Option<Fill>,
    /// Dash preset
    pub dash: Option<LineDash>,
}

impl LineProperties {
    /// Create empty line properties.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the width in points, clamped to 0-1584.
    pub fn set_width_points(&mut self, points: f64) {
        let points = if points.is_nan() {
            0.0
        } else {
            points.clamp(0.0, MAX_LINE_WIDTH_POINTS)
        };
        self.width_emu = Some((points * EMU_PER_POINT).round() as u32);
    }

    /// Width in points, if set.
    #[inline]
    pub fn width_points(&self) -> Option<f64> {
        self.width_emu.map(|emu| emu as f64 / EMU_PER_POINT)
    }

    /// Whether any outline attribute has been set.
    #[inline]
    pub fn has_customization(&self) -> bool {
        self.width_emu.is_some() || self.fill.is_some() || self.dash.is_some()
    }
}

impl ToXmlNode for LineProperties {
    fn to_xml_node(&self) -> XmlNode {
        let mut ln = XmlNode::new("a:ln");
        if let Some(width) = self.width_emu {
            let mut buffer = itoa::Buffer::new();
            ln.set_attr("w", buffer.format(width));
        }
        if let Some(ref fill) = self.fill {
            ln.push_child(fill.to_xml_node());
        }
        if let Some(dash) = self.dash {
            ln.push_child(XmlNode::val("a:prstDash", dash.xml_value()));
        }
        ln
    }
}

/// Fill and outline of a chart element.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeProperties {
    /// Interior fill
    pub fill: Option<Fill>,
    /// Outline
    pub line: Option<LineProperties>,
}

impl ShapeProperties {
    /// Create shape properties with nothing set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the interior fill.
    #[inline]
    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Builder: set the outline.
    #[inline]
    pub fn with_line(mut self, line: LineProperties) -> Self {
        self.line = Some(line);
        self
    }

    /// Whether any visual customization is present.
    pub fn has_customization(&self) -> bool {
        self.fill.is_some()
            || self
                .line
                .as_ref()
                .is_some_and(LineProperties::has_customization)
    }

    /// The `c:spPr` node, or `None` when nothing is customized.
    pub fn to_optional_node(&self) -> Option<XmlNode> {
        self.has_customization().then(|| self.to_xml_node())
    }
}

impl ToXmlNode for ShapeProperties {
    fn to_xml_node(&self) -> XmlNode {
        let mut sp_pr = XmlNode::new("c:spPr");
        if let Some(ref fill) = self.fill {
            sp_pr.push_child(fill.to_xml_node());
        }
        if let Some(ref line) = self.line
            && line.has_customization()
        {
            sp_pr.push_child(line.to_xml_node());
        }
        sp_pr
    }
}
