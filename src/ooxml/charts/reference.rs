//! Worksheet-backed chart data (`c:numRef`, `c:strRef`).
//!
//! A reference stores the worksheet range it points at together with the
//! formula text written to `c:f`. The formula is derived from the range but
//! is only recomputed by [`NumberReference::refresh_formula`] (or its string
//! counterpart); changing the range through a setter leaves the previous
//! formula in place until the caller refreshes it.

use crate::common::reference::range_formula;
use crate::ooxml::charts::bounds::{COLUMN_INDEX, ROW_INDEX, clamp_to};
use crate::ooxml::charts::data::{NumberingCache, StringCache};
use crate::ooxml::node::{ToXmlNode, XmlNode};
use serde::{Deserialize, Serialize};

/// Rectangular worksheet range with 1-based, clamped indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRange")]
pub struct CellRange {
    worksheet_name: String,
    start_row_index: u32,
    start_column_index: u32,
    end_row_index: u32,
    end_column_index: u32,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawRange {
    worksheet_name: String,
    start_row_index: u32,
    start_column_index: u32,
    end_row_index: u32,
    end_column_index: u32,
}

impl Default for RawRange {
    fn default() -> Self {
        Self {
            worksheet_name: String::new(),
            start_row_index: 1,
            start_column_index: 1,
            end_row_index: 1,
            end_column_index: 1,
        }
    }
}

impl From<RawRange> for CellRange {
    fn from(raw: RawRange) -> Self {
        Self::new(
            raw.worksheet_name,
            raw.start_row_index,
            raw.start_column_index,
            raw.end_row_index,
            raw.end_column_index,
        )
    }
}

impl CellRange {
    /// Create a range; indices are clamped to the worksheet limits.
    pub fn new(
        worksheet_name: impl Into<String>,
        start_row_index: u32,
        start_column_index: u32,
        end_row_index: u32,
        end_column_index: u32,
    ) -> Self {
        let mut range = Self {
            worksheet_name: worksheet_name.into(),
            ..Self::default()
        };
        range.set_start_row_index(start_row_index);
        range.set_start_column_index(start_column_index);
        range.set_end_row_index(end_row_index);
        range.set_end_column_index(end_column_index);
        range
    }

    #[inline]
    pub fn worksheet_name(&self) -> &str {
        &self.worksheet_name
    }

    #[inline]
    pub fn set_worksheet_name(&mut self, name: impl Into<String>) {
        self.worksheet_name = name.into();
    }

    #[inline]
    pub fn start_row_index(&self) -> u32 {
        self.start_row_index
    }

    #[inline]
    pub fn set_start_row_index(&mut self, row: u32) {
        self.start_row_index = clamp_to("start_row_index", row, &ROW_INDEX);
    }

    #[inline]
    pub fn start_column_index(&self) -> u32 {
        self.start_column_index
    }

    #[inline]
    pub fn set_start_column_index(&mut self, col: u32) {
        self.start_column_index = clamp_to("start_column_index", col, &COLUMN_INDEX);
    }

    #[inline]
    pub fn end_row_index(&self) -> u32 {
        self.end_row_index
    }

    #[inline]
    pub fn set_end_row_index(&mut self, row: u32) {
        self.end_row_index = clamp_to("end_row_index", row, &ROW_INDEX);
    }

    #[inline]
    pub fn end_column_index(&self) -> u32 {
        self.end_column_index
    }

    #[inline]
    pub fn set_end_column_index(&mut self, col: u32) {
        self.end_column_index = clamp_to("end_column_index", col, &COLUMN_INDEX);
    }

    /// Formula text for the range, e.g. `Sheet1!$A$1:$A$10`.
    pub fn formula(&self) -> String {
        range_formula(
            &self.worksheet_name,
            self.start_row_index,
            self.start_column_index,
            self.end_row_index,
            self.end_column_index,
        )
    }
}

impl Default for CellRange {
    fn default() -> Self {
        Self {
            worksheet_name: String::new(),
            start_row_index: 1,
            start_column_index: 1,
            end_row_index: 1,
            end_column_index: 1,
        }
    }
}

/// Numeric data read from a worksheet range (`c:numRef`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberReference {
    range: CellRange,
    formula: String,
    /// Last known values of the referenced cells
    pub numbering_cache: NumberingCache,
}

impl NumberReference {
    /// Create a reference with an empty formula and cache.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reference to a range and derive its formula.
    pub fn for_range(
        worksheet_name: impl Into<String>,
        start_row_index: u32,
        start_column_index: u32,
        end_row_index: u32,
        end_column_index: u32,
    ) -> Self {
        let mut reference = Self {
            range: CellRange::new(
                worksheet_name,
                start_row_index,
                start_column_index,
                end_row_index,
                end_column_index,
            ),
            ..Self::default()
        };
        reference.refresh_formula();
        reference
    }

    /// Builder: attach cached values.
    #[inline]
    pub fn with_cache(mut self, cache: NumberingCache) -> Self {
        self.numbering_cache = cache;
        self
    }

    /// The referenced range.
    #[inline]
    pub fn range(&self) -> &CellRange {
        &self.range
    }

    /// Mutable access to the range. The formula is not refreshed.
    #[inline]
    pub fn range_mut(&mut self) -> &mut CellRange {
        &mut self.range
    }

    #[inline]
    pub fn worksheet_name(&self) -> &str {
        self.range.worksheet_name()
    }

    #[inline]
    pub fn set_worksheet_name(&mut self, name: impl Into<String>) {
        self.range.set_worksheet_name(name);
    }

    #[inline]
    pub fn start_row_index(&self) -> u32 {
        self.range.start_row_index()
    }

    #[inline]
    pub fn set_start_row_index(&mut self, row: u32) {
        self.range.set_start_row_index(row);
    }

    #[inline]
    pub fn start_column_index(&self) -> u32 {
        self.range.start_column_index()
    }

    #[inline]
    pub fn set_start_column_index(&mut self, col: u32) {
        self.range.set_start_column_index(col);
    }

    #[inline]
    pub fn end_row_index(&self) -> u32 {
        self.range.end_row_index()
    }

    #[inline]
    pub fn set_end_row_index(&mut self, row: u32) {
        self.range.set_end_row_index(row);
    }

    #[inline]
    pub fn end_column_index(&self) -> u32 {
        self.range.end_column_index()
    }

    #[inline]
    pub fn set_end_column_index(&mut self, col: u32) {
        self.range.set_end_column_index(col);
    }

    /// Formula text written to `c:f`.
    #[inline]
    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// Override the formula text. The range is left as is.
    #[inline]
    pub fn set_formula(&mut self, formula: impl Into<String>) {
        self.formula = formula.into();
    }

    /// Recompute the formula from the current range.
    pub fn refresh_formula(&mut self) {
        self.formula = self.range.formula();
    }
}

impl ToXmlNode for NumberReference {
    fn to_xml_node(&self) -> XmlNode {
        let mut num_ref =
            XmlNode::new("c:numRef").with_child(XmlNode::new("c:f").with_text(self.formula.as_str()));
        if !self.numbering_cache.is_empty() {
            num_ref.push_child(self.numbering_cache.to_xml_node());
        }
        num_ref
    }
}

/// Text data read from a worksheet range (`c:strRef`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StringReference {
    range: CellRange,
    formula: String,
    /// Last known text of the referenced cells
    pub string_cache: StringCache,
}

impl StringReference {
    /// Create a reference with an empty formula and cache.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reference to a range and derive its formula.
    pub fn for_range(
        worksheet_name: impl Into<String>,
        start_row_index: u32,
        start_column_index: u32,
        end_row_index: u32,
        end_column_index: u32,
    ) -> Self {
        let mut reference = Self {
            range: CellRange::new(
                worksheet_name,
                start_row_index,
                start_column_index,
                end_row_index,
                end_column_index,
            ),
            ..Self::default()
        };
        reference.refresh_formula();
        reference
    }

    /// Builder: attach cached text.
    #[inline]
    pub fn with_cache(mut self, cache: StringCache) -> Self {
        self.string_cache = cache;
        self
    }

    #[inline]
    pub fn range(&self) -> &CellRange {
        &self.range
    }

    /// Mutable access to the range. The formula is not refreshed.
    #[inline]
    pub fn range_mut(&mut self) -> &mut CellRange {
        &mut self.range
    }

    #[inline]
    pub fn formula(&self) -> &str {
        &self.formula
    }

    #[inline]
    pub fn set_formula(&mut self, formula: impl Into<String>) {
        self.formula = formula.into();
    }

    /// Recompute the formula from the current range.
    pub fn refresh_formula(&mut self) {
        self.formula = self.range.formula();
    }
}

impl ToXmlNode for StringReference {
    fn to_xml_node(&self) -> XmlNode {
        let mut str_ref =
            XmlNode::new("c:strRef").with_child(XmlNode::new("c:f").with_text(self.formula.as_str()));
        if !self.string_cache.is_empty() {
            str_ref.push_child(self.string_cache.to_xml_node());
        }
        str_ref
    }
}
