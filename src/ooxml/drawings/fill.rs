//! DrawingML colors and fills (`a:solidFill`, `a:noFill`).

use crate::ooxml::error::{ChartError, Result};
use crate::ooxml::node::{ToXmlNode, XmlNode};
use serde::{Deserialize, Serialize};

/// Theme color slot (`a:schemeClr`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeColor {
    Background1,
    Text1,
    Background2,
    Text2,
    Accent1,
    Accent2,
    Accent3,
    Accent4,
    Accent5,
    Accent6,
}

impl SchemeColor {
    /// Returns the XML value for this theme slot.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Background1 => "bg1",
            Self::Text1 => "tx1",
            Self::Background2 => "bg2",
            Self::Text2 => "tx2",
            Self::Accent1 => "accent1",
            Self::Accent2 => "accent2",
            Self::Accent3 => "accent3",
            Self::Accent4 => "accent4",
            Self::Accent5 => "accent5",
            Self::Accent6 => "accent6",
        }
    }
}

/// Six uppercase hex digits, validated on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbHex(String);

impl RgbHex {
    /// Parse `RRGGBB`; an optional leading `#` is accepted and case is ignored.
    pub fn new(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ChartError::InvalidColor(hex.to_string()));
        }
        Ok(Self(digits.to_ascii_uppercase()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RgbHex {
    type Error = ChartError;

    fn try_from(hex: String) -> Result<Self> {
        Self::new(&hex)
    }
}

impl From<RgbHex> for String {
    fn from(hex: RgbHex) -> Self {
        hex.0
    }
}

/// A color reference: literal RGB or theme slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRef {
    Rgb(RgbHex),
    /// Theme color
    Scheme(SchemeColor),
}

impl ColorRef {
    /// Build an RGB color from `RRGGBB` (an optional leading `#` is accepted).
    #[inline]
    pub fn rgb(hex: &str) -> Result<Self> {
        RgbHex::new(hex).map(Self::Rgb)
    }
}

impl ToXmlNode for ColorRef {
    fn to_xml_node(&self) -> XmlNode {
        match self {
            Self::Rgb(hex) => XmlNode::val("a:srgbClr", hex.as_str()),
            Self::Scheme(slot) => XmlNode::val("a:schemeClr", slot.xml_value()),
        }
    }
}

/// Area or line fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fill {
    /// Explicitly no fill
    None,
    /// Solid color fill
    Solid(ColorRef),
}

impl ToXmlNode for Fill {
    fn to_xml_node(&self) -> XmlNode {
        match self {
            Self::None => XmlNode::new("a:noFill"),
            Self::Solid(color) => XmlNode::new("a:solidFill").with_child(color.to_xml_node()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_validation() {
        let color = ColorRef::rgb("#4f81bd").unwrap();
        assert_eq!(color, ColorRef::Rgb(RgbHex::new("4F81BD").unwrap()));
        assert_eq!(
            color.to_xml_node().to_xml_string().unwrap(),
            r#"<a:srgbClr val="4F81BD"/>"#
        );
        assert!(ColorRef::rgb("4F81B").is_err());
        assert!(ColorRef::rgb("GGGGGG").is_err());
        assert!(matches!(RgbHex::new("zz"), Err(ChartError::InvalidColor(_))));
    }

    #[test]
    fn test_rgb_deserialization_is_validated() {
        let fill: Fill = serde_saphyr::from_str("solid:\n  rgb: 00b050\n").unwrap();
        assert_eq!(fill, Fill::Solid(ColorRef::rgb("00B050").unwrap()));

        let bad: std::result::Result<Fill, _> = serde_saphyr::from_str("solid:\n  rgb: zz\n");
        assert!(bad.is_err());
    }

    #[test]
    fn test_solid_fill_node() {
        let fill = Fill::Solid(ColorRef::Scheme(SchemeColor::Accent2));
        assert_eq!(
            fill.to_xml_node().to_xml_string().unwrap(),
            r#"<a:solidFill><a:schemeClr val="accent2"/></a:solidFill>"#
        );
        assert_eq!(Fill::None.to_xml_node().tag(), "a:noFill");
    }
}
