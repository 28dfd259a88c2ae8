//! Error types for spreadsheet output.

use std::path::PathBuf;

use polars::prelude::PolarsError;
use rust_xlsxwriter::XlsxError;
use thiserror::Error;

/// Errors raised while writing a record table to a workbook.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The workbook could not be saved.
    #[error("failed to save workbook {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: XlsxError,
    },

    /// A cell or sheet could not be written.
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] XlsxError),

    /// More data rows than a worksheet can hold.
    #[error("{count} rows exceed the worksheet limit of {max}")]
    TooManyRows { count: usize, max: usize },

    /// More columns than a worksheet can hold.
    #[error("{count} columns exceed the worksheet limit of {max}")]
    TooManyColumns { count: usize, max: usize },

    /// Column type with no spreadsheet cell equivalent.
    #[error("column '{column}' has unsupported type {dtype}")]
    UnsupportedColumnType { column: String, dtype: String },

    /// Reading the frame failed.
    #[error("DataFrame operation failed: {0}")]
    Frame(#[from] PolarsError),
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
