//! Office Open XML (OOXML) chart markup.
//!
//! The module is organized into three layers:
//!
//! 1. **Node layer** (`node`): an owned element tree and the [`ToXmlNode`]
//!    conversion trait every chart type implements
//! 2. **DrawingML layer** (`drawings`): fills, outlines and shape properties
//! 3. **Chart layer** (`charts`): chart options, data, references and type groups
//!
//! Packaging the resulting XML into a workbook is left to the caller.
pub mod charts;
pub mod drawings;
pub mod error;
pub mod node;

// Re-export error types
pub use error::{ChartError, Result};

pub use node::{ToXmlNode, XmlNode};
