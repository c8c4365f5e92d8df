//! Cached and literal chart data.
//!
//! Numeric data comes in two flavours that share a structure and differ only
//! in the element they serialize to: a numbering cache (`c:numCache`, the
//! last known values behind a reference) and a number literal (`c:numLit`,
//! values embedded directly in the chart). String data has the same split
//! between `c:strCache` and `c:strLit`.
//!
//! Point counts are maintained by the caller and are never cross-checked
//! against the number of points held, since a cache may legitimately omit
//! blank cells.

use crate::ooxml::node::{ToXmlNode, XmlNode};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::marker::PhantomData;

/// Format code used when none is supplied.
pub const GENERAL_FORMAT: &str = "General";

/// A numeric data point (`c:pt` within numeric data).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericPoint {
    /// Zero-based position of the point in the series
    pub index: u32,
    /// Value as it should appear in `c:v`
    pub value: String,
    /// Per-point format code overriding the aggregate's
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format_code: Option<String>,
}

impl NumericPoint {
    /// Create a point from an already formatted value.
    #[inline]
    pub fn new(index: u32, value: impl Into<String>) -> Self {
        Self {
            index,
            value: value.into(),
            format_code: None,
        }
    }

    /// Create a point from a float. Returns `None` for NaN and infinities,
    /// which have no representation in a chart cache.
    pub fn from_f64(index: u32, value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let mut buffer = ryu::Buffer::new();
        let text = buffer.format_finite(value);
        let text = text.strip_suffix(".0").unwrap_or(text);
        Some(Self::new(index, text))
    }

    /// Builder: set a per-point format code.
    #[inline]
    pub fn with_format_code(mut self, format_code: impl Into<String>) -> Self {
        self.format_code = Some(format_code.into());
        self
    }
}

impl ToXmlNode for NumericPoint {
    fn to_xml_node(&self) -> XmlNode {
        let mut pt = XmlNode::new("c:pt");
        let mut buffer = itoa::Buffer::new();
        pt.set_attr("idx", buffer.format(self.index));
        if let Some(ref format_code) = self.format_code {
            pt.set_attr("formatCode", format_code.as_str());
        }
        pt.with_child(XmlNode::new("c:v").with_text(self.value.as_str()))
    }
}

/// A string data point (`c:pt` within string data).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringPoint {
    /// Zero-based position of the point in the series
    pub index: u32,
    /// Text value
    pub value: String,
}

impl StringPoint {
    /// Create a string point.
    #[inline]
    pub fn new(index: u32, value: impl Into<String>) -> Self {
        Self {
            index,
            value: value.into(),
        }
    }
}

impl ToXmlNode for StringPoint {
    fn to_xml_node(&self) -> XmlNode {
        let mut buffer = itoa::Buffer::new();
        XmlNode::new("c:pt")
            .with_attr("idx", buffer.format(self.index))
            .with_child(XmlNode::new("c:v").with_text(self.value.as_str()))
    }
}

/// Selects the element a data aggregate serializes to.
pub trait DataKind: Debug + Clone + Copy + PartialEq + Eq + Default {
    /// Element name for numeric data of this kind.
    const NUMBER_TAG: &'static str;
    /// Element name for string data of this kind.
    const STRING_TAG: &'static str;
}

/// Values cached from a worksheet reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cache;

/// Values embedded directly in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Literal;

impl DataKind for Cache {
    const NUMBER_TAG: &'static str = "c:numCache";
    const STRING_TAG: &'static str = "c:strCache";
}

impl DataKind for Literal {
    const NUMBER_TAG: &'static str = "c:numLit";
    const STRING_TAG: &'static str = "c:strLit";
}

/// Numeric data: format code, point count and points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "", default)]
pub struct NumberData<K: DataKind> {
    /// Format code applied to points without their own
    pub format_code: String,
    /// Declared number of points, including blanks
    pub point_count: u32,
    /// Points in order
    pub points: Vec<NumericPoint>,
    #[serde(skip)]
    kind: PhantomData<K>,
}

/// `c:numCache`
pub type NumberingCache = NumberData<Cache>;
/// `c:numLit`
pub type NumberLiteral = NumberData<Literal>;

impl<K: DataKind> NumberData<K> {
    /// Create empty data with the `General` format.
    #[inline]
    pub fn new() -> Self {
        Self {
            format_code: GENERAL_FORMAT.to_string(),
            point_count: 0,
            points: Vec::new(),
            kind: PhantomData,
        }
    }

    /// Create data holding `values` at consecutive indices.
    ///
    /// Non-finite values are left out as blanks but still counted.
    pub fn from_values(values: &[f64]) -> Self {
        let mut data = Self::new();
        for &value in values {
            data.push_value(value);
        }
        data
    }

    /// Builder: set the format code.
    #[inline]
    pub fn with_format_code(mut self, format_code: impl Into<String>) -> Self {
        self.format_code = format_code.into();
        self
    }

    /// Append a point and bump the point count.
    #[inline]
    pub fn push_point(&mut self, point: NumericPoint) {
        self.points.push(point);
        self.point_count += 1;
    }

    /// Append a value at the next index, counting a blank for non-finite input.
    pub fn push_value(&mut self, value: f64) {
        if let Some(point) = NumericPoint::from_f64(self.point_count, value) {
            self.points.push(point);
        }
        self.point_count += 1;
    }

    /// True when no point was declared or added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.point_count == 0 && self.points.is_empty()
    }

    /// Reinterpret the same data as another kind.
    pub fn convert<T: DataKind>(self) -> NumberData<T> {
        NumberData {
            format_code: self.format_code,
            point_count: self.point_count,
            points: self.points,
            kind: PhantomData,
        }
    }
}

impl<K: DataKind> Default for NumberData<K> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl From<NumberLiteral> for NumberingCache {
    fn from(literal: NumberLiteral) -> Self {
        literal.convert()
    }
}

impl From<NumberingCache> for NumberLiteral {
    fn from(cache: NumberingCache) -> Self {
        cache.convert()
    }
}

impl<K: DataKind> ToXmlNode for NumberData<K> {
    fn to_xml_node(&self) -> XmlNode {
        XmlNode::new(K::NUMBER_TAG)
            .with_child(XmlNode::new("c:formatCode").with_text(self.format_code.as_str()))
            .with_child(XmlNode::int_val("c:ptCount", self.point_count))
            .with_children(self.points.iter().map(ToXmlNode::to_xml_node))
    }
}

/// String data: point count and points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "", default)]
pub struct StringData<K: DataKind> {
    /// Declared number of points, including blanks
    pub point_count: u32,
    /// Points in order
    pub points: Vec<StringPoint>,
    #[serde(skip)]
    kind: PhantomData<K>,
}

/// `c:strCache`
pub type StringCache = StringData<Cache>;
/// `c:strLit`
pub type StringLiteral = StringData<Literal>;

impl<K: DataKind> StringData<K> {
    /// Create empty string data.
    #[inline]
    pub fn new() -> Self {
        Self {
            point_count: 0,
            points: Vec::new(),
            kind: PhantomData,
        }
    }

    /// Create data holding `values` at consecutive indices.
    pub fn from_values<S: AsRef<str>>(values: &[S]) -> Self {
        let mut data = Self::new();
        for value in values {
            data.push_point(StringPoint::new(data.point_count, value.as_ref()));
        }
        data
    }

    /// Append a point and bump the point count.
    #[inline]
    pub fn push_point(&mut self, point: StringPoint) {
        self.points.push(point);
        self.point_count += 1;
    }

    /// True when no point was declared or added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.point_count == 0 && self.points.is_empty()
    }

    /// Reinterpret the same data as another kind.
    pub fn convert<T: DataKind>(self) -> StringData<T> {
        StringData {
            point_count: self.point_count,
            points: self.points,
            kind: PhantomData,
        }
    }
}

impl<K: DataKind> Default for StringData<K> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: DataKind> ToXmlNode for StringData<K> {
    fn to_xml_node(&self) -> XmlNode {
        XmlNode::new(K::STRING_TAG)
            .with_child(XmlNode::int_val("c:ptCount", self.point_count))
            .with_children(self.points.iter().map(ToXmlNode::to_xml_node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_point_node() {
        let point = NumericPoint::new(3, "12.5").with_format_code("0.0%");
        let xml = point.to_xml_node().to_xml_string().unwrap();
        assert_eq!(
            xml,
            r#"<c:pt idx="3" formatCode="0.0%"><c:v>12.5</c:v></c:pt>"#
        );
    }

    #[test]
    fn test_numeric_point_omits_unset_format_code() {
        let node = NumericPoint::new(0, "1").to_xml_node();
        assert_eq!(node.attr("formatCode"), None);
    }

    #[test]
    fn test_numeric_point_from_f64() {
        assert_eq!(NumericPoint::from_f64(0, 42.0).unwrap().value, "42");
        assert_eq!(NumericPoint::from_f64(0, -0.25).unwrap().value, "-0.25");
        assert!(NumericPoint::from_f64(0, f64::NAN).is_none());
        assert!(NumericPoint::from_f64(0, f64::INFINITY).is_none());
    }

    #[test]
    fn test_cache_and_literal_differ_only_by_tag() {
        let cache = NumberingCache::from_values(&[1.0, 2.5]);
        let literal: NumberLiteral = cache.clone().into();

        let cache_node = cache.to_xml_node();
        let literal_node = literal.to_xml_node();
        assert_eq!(cache_node.tag(), "c:numCache");
        assert_eq!(literal_node.tag(), "c:numLit");
        assert_eq!(cache_node.children(), literal_node.children());
        assert_eq!(
            cache_node.child_tags(),
            vec!["c:formatCode", "c:ptCount", "c:pt", "c:pt"]
        );
    }

    #[test]
    fn test_point_count_is_not_cross_checked() {
        let mut cache = NumberingCache::new();
        cache.point_count = 10;
        cache.points.push(NumericPoint::new(7, "3"));
        let node = cache.to_xml_node();
        assert_eq!(node.child("c:ptCount").unwrap().attr("val"), Some("10"));
        assert_eq!(node.child("c:pt").unwrap().attr("idx"), Some("7"));
    }

    #[test]
    fn test_blank_values_are_counted_but_omitted() {
        let literal = NumberLiteral::from_values(&[1.0, f64::NAN, 3.0]);
        assert_eq!(literal.point_count, 3);
        let indices: Vec<u32> = literal.points.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn test_string_literal_node() {
        let literal = StringLiteral::from_values(&["Q1", "Q2 & Q3"]);
        let xml = literal.to_xml_node().to_xml_string().unwrap();
        assert_eq!(
            xml,
            concat!(
                r#"<c:strLit><c:ptCount val="2"/>"#,
                r#"<c:pt idx="0"><c:v>Q1</c:v></c:pt>"#,
                r#"<c:pt idx="1"><c:v>Q2 &amp; Q3</c:v></c:pt>"#,
                r#"</c:strLit>"#
            )
        );
        assert_eq!(StringCache::new().to_xml_node().tag(), "c:strCache");
    }

    #[test]
    fn test_clone_is_independent() {
        let original = NumberLiteral::from_values(&[1.0]).with_format_code("0.00");
        let mut copy = original.clone();
        copy.format_code = "General".into();
        copy.push_value(2.0);
        copy.points[0].value = "9".into();

        assert_eq!(original.format_code, "0.00");
        assert_eq!(original.point_count, 1);
        assert_eq!(original.points[0].value, "1");
    }

    #[test]
    fn test_string_clone_is_independent() {
        let original = StringLiteral::from_values(&["North", "South"]);
        let mut copy = original.clone();
        copy.points[1].value = "West".into();
        copy.push_point(StringPoint::new(2, "East"));

        assert_eq!(original.point_count, 2);
        assert_eq!(original.points.len(), 2);
        assert_eq!(original.points[1].value, "South");

        let point = StringPoint::new(0, "Q1");
        let mut point_copy = point.clone();
        point_copy.value.push_str(" FY24");
        assert_eq!(point.value, "Q1");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_number_clone_is_independent(
                values in prop::collection::vec(-1.0e9f64..1.0e9, 1..16),
                extra in -1.0e9f64..1.0e9,
            ) {
                let original = NumberLiteral::from_values(&values);
                let snapshot = original.to_xml_node();

                let mut copy = original.clone();
                copy.push_value(extra);
                copy.points[0].value = "edited".into();
                copy.format_code = "0.00".into();

                prop_assert_eq!(original.to_xml_node(), snapshot);
                prop_assert_eq!(original.point_count as usize, values.len());
            }

            #[test]
            fn prop_string_clone_is_independent(
                values in prop::collection::vec("[a-zA-Z0-9 ]{0,12}", 1..16),
            ) {
                let original = StringCache::from_values(values.as_slice());
                let snapshot = original.clone();

                let mut copy = original.clone();
                copy.points[0].value.push('!');
                copy.push_point(StringPoint::new(copy.point_count, "tail"));

                prop_assert_eq!(&original, &snapshot);
                prop_assert_eq!(original.points.len(), values.len());
            }
        }
    }
}
