//! Report generation for patient record tables.
//!
//! Writes an aggregated record table to a single-sheet XLSX workbook.

mod error;
mod xlsx;

pub use error::{ReportError, Result};
pub use xlsx::{
    DEFAULT_SHEET_NAME, XLSX_MAX_COLUMNS, XLSX_MAX_ROWS, XlsxWriterOptions, build_record_workbook,
    build_workbook, write_record_frame, write_xlsx,
};
