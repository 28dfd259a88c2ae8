//! Error types for record transformation.

use thiserror::Error;

/// Errors raised while rewriting a record into DICOM formatting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// A required field is absent from the record.
    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    /// A required field is present but cannot be formatted.
    #[error("malformed {field} value '{value}': {reason}")]
    MalformedField {
        field: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;
