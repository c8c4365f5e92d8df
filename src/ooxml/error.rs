//! Error types for chart serialization.

use thiserror::Error;

/// Result type for chart operations.
pub type Result<T> = std::result::Result<T, ChartError>;

/// Error types for chart operations.
///
/// Option setters never fail; out-of-range numbers are clamped instead. These
/// variants cover the serialization boundary and user-supplied text values.
#[derive(Error, Debug)]
pub enum ChartError {
    /// Generated markup is not valid UTF-8
    #[error("XML error: {0}")]
    Xml(String),

    /// Color value is not a six digit hex RGB string
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Template could not be parsed or written
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Writing to the output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
