//! Owned DrawingML element tree.
//!
//! Chart options do not write XML directly. Each convertible type builds an
//! [`XmlNode`] describing its element, and the caller attaches that node to
//! whatever parent it is assembling before serializing the whole tree once.

use crate::ooxml::error::{ChartError, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

/// Conversion of an in-memory value into its DrawingML element.
///
/// Implementations must be pure: calling `to_xml_node` repeatedly yields
/// equal trees and never mutates `self`.
pub trait ToXmlNode {
    /// Build the element for this value.
    fn to_xml_node(&self) -> XmlNode;
}

/// A single XML element with ordered attributes, optional text and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlNode {
    tag: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<XmlNode>,
}

impl XmlNode {
    /// Create an empty element.
    #[inline]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Create a `<tag val="..."/>` element.
    #[inline]
    pub fn val(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(tag).with_attr("val", value)
    }

    /// Create a `<tag val="n"/>` element from an integer.
    #[inline]
    pub fn int_val<I: itoa::Integer>(tag: impl Into<String>, value: I) -> Self {
        let mut buffer = itoa::Buffer::new();
        Self::val(tag, buffer.format(value))
    }

    /// Create a `<tag val="1"/>` or `<tag val="0"/>` element.
    #[inline]
    pub fn bool_val(tag: impl Into<String>, value: bool) -> Self {
        Self::val(tag, if value { "1" } else { "0" })
    }

    /// Set an attribute, replacing any previous value for the same name.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set an attribute in place.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Set the text content.
    #[inline]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append a child element.
    #[inline]
    pub fn with_child(mut self, child: XmlNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append several child elements in order.
    #[inline]
    pub fn with_children(mut self, children: impl IntoIterator<Item = XmlNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Append a child element in place.
    #[inline]
    pub fn push_child(&mut self, child: XmlNode) {
        self.children.push(child);
    }

    /// Qualified tag name, e.g. `c:marker`.
    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attribute value by qualified name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Text content, if any.
    #[inline]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Child elements in document order.
    #[inline]
    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// First child with the given tag.
    pub fn child(&self, tag: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// Whether a direct child with the given tag exists.
    #[inline]
    pub fn has_child(&self, tag: &str) -> bool {
        self.child(tag).is_some()
    }

    /// Tags of the direct children, in order.
    pub fn child_tags(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.tag.as_str()).collect()
    }

    /// Serialize this element (without an XML declaration) to a string.
    pub fn to_xml_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| ChartError::Xml(format!("Invalid UTF-8 in generated XML: {}", e)))
    }

    /// Stream this element into `out`.
    pub fn write_to<W: Write>(&self, out: W) -> Result<()> {
        let mut writer = Writer::new(out);
        self.write_events(&mut writer)
    }

    fn write_events<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new(self.tag.as_str());
        for (name, value) in &self.attributes {
            start.push_attribute((name.as_str(), value.as_str()));
        }

        if self.children.is_empty() && self.text.is_none() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;

        if let Some(ref text) = self.text {
            writer.write_event(Event::Text(BytesText::new(text)))?;
        }

        for child in &self.children {
            child.write_events(writer)?;
        }

        writer.write_event(Event::End(BytesEnd::new(self.tag.as_str())))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_element_is_self_closing() {
        let xml = XmlNode::int_val("c:gapWidth", 150u16)
            .to_xml_string()
            .unwrap();
        assert_eq!(xml, r#"<c:gapWidth val="150"/>"#);
    }

    #[test]
    fn test_nested_elements_and_text() {
        let node = XmlNode::new("c:numRef")
            .with_child(XmlNode::new("c:f").with_text("Sheet1!$A$1:$A$3"))
            .with_child(XmlNode::bool_val("c:bubble3D", true));

        let xml = node.to_xml_string().unwrap();
        assert_eq!(
            xml,
            r#"<c:numRef><c:f>Sheet1!$A$1:$A$3</c:f><c:bubble3D val="1"/></c:numRef>"#
        );
        assert_eq!(node.child_tags(), vec!["c:f", "c:bubble3D"]);
    }

    #[test]
    fn test_text_and_attributes_are_escaped() {
        let node = XmlNode::new("c:pt")
            .with_attr("formatCode", "\"x\" & <y>")
            .with_child(XmlNode::new("c:v").with_text("a < b & c"));

        let xml = node.to_xml_string().unwrap();
        assert!(xml.contains("&amp;"));
        assert!(xml.contains("a &lt; b &amp; c"));
        assert!(!xml.contains("<y>"));
    }

    #[test]
    fn test_set_attr_replaces_existing_value() {
        let mut node = XmlNode::val("c:size", "5");
        node.set_attr("val", "10");
        assert_eq!(node.attr("val"), Some("10"));
        assert_eq!(node.to_xml_string().unwrap(), r#"<c:size val="10"/>"#);
    }

    #[test]
    fn test_negative_integer_value() {
        assert_eq!(XmlNode::int_val("c:overlap", -100i16).attr("val"), Some("-100"));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let node = XmlNode::new("c:marker").with_child(XmlNode::val("c:symbol", "circle"));
        let err = node.write_to(FailingWriter).unwrap_err();
        match err {
            ChartError::Io(io) => assert_eq!(io.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("expected an IO error, got {other:?}"),
        }
    }

    #[test]
    fn test_write_to_streams_into_writer() {
        let mut out = Vec::new();
        XmlNode::new("c:upBars").write_to(&mut out).unwrap();
        assert_eq!(out, b"<c:upBars/>");
    }
}
