//! Utilities shared across the crate.

pub mod reference;

pub use reference::{cell_reference_absolute, column_index_to_name, quote_sheet_name, range_formula};
