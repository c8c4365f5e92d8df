//! DrawingML (DML) formatting for chart elements.
//!
//! Only the subset chart options embed is modeled here: solid and empty
//! fills, outlines, and the `c:spPr` container that holds them.

pub mod fill;
pub mod shape_properties;

pub use fill::{ColorRef, Fill, RgbHex, SchemeColor};
pub use shape_properties::{LineDash, LineProperties, ShapeProperties};
