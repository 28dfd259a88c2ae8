//! XLSX output for record tables.
//!
//! The layout matches a conventional indexed table export: a header row
//! whose first cell is blank, then one row per record starting with its
//! zero-based row number.

use std::path::Path;

use polars::prelude::{Column, DataFrame, DataType};
use rust_xlsxwriter::{ColNum, Format, FormatAlign, FormatBorder, RowNum, Workbook, Worksheet};
use tracing::{debug, info};

use trialrepo_core::{ColumnKind, MixedCells, RecordFrame};

use crate::error::{ReportError, Result};

/// Maximum rows in a worksheet, header included.
pub const XLSX_MAX_ROWS: usize = 1_048_576;

/// Maximum columns in a worksheet, index column included.
pub const XLSX_MAX_COLUMNS: usize = 16_384;

/// Default worksheet name.
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Options for XLSX output.
#[derive(Debug, Clone)]
pub struct XlsxWriterOptions {
    /// Worksheet name (default: "Sheet1").
    pub sheet_name: String,
    /// Whether to write the leading row-number column (default: true).
    pub write_index: bool,
}

impl Default for XlsxWriterOptions {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            write_index: true,
        }
    }
}

impl XlsxWriterOptions {
    /// Create writer options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the worksheet name.
    #[must_use]
    pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }

    /// Enable or disable the row-number column.
    #[must_use]
    pub fn with_index(mut self, enable: bool) -> Self {
        self.write_index = enable;
        self
    }
}

/// Write a DataFrame to an XLSX file, creating the parent directory if needed.
pub fn write_xlsx(path: &Path, df: &DataFrame, options: &XlsxWriterOptions) -> Result<()> {
    let mut workbook = build_workbook(df, options)?;
    save_workbook(path, &mut workbook, df)
}

/// Write an aggregated record table, typing mixed-column cells individually.
pub fn write_record_frame(
    path: &Path,
    frame: &RecordFrame,
    options: &XlsxWriterOptions,
) -> Result<()> {
    let mut workbook = build_record_workbook(frame, options)?;
    save_workbook(path, &mut workbook, &frame.data)
}

/// Build an in-memory workbook holding one worksheet with the frame.
pub fn build_workbook(df: &DataFrame, options: &XlsxWriterOptions) -> Result<Workbook> {
    build_sheet(df, &MixedCells::new(), options)
}

/// Build an in-memory workbook for a record table.
///
/// Cells of mixed columns are written by their JSON kind, so a number
/// sharing a column with text still lands as a number.
pub fn build_record_workbook(frame: &RecordFrame, options: &XlsxWriterOptions) -> Result<Workbook> {
    build_sheet(&frame.data, &frame.mixed_cells, options)
}

fn save_workbook(path: &Path, workbook: &mut Workbook, df: &DataFrame) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ReportError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    workbook.save(path).map_err(|source| ReportError::Save {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "wrote xlsx"
    );
    Ok(())
}

fn build_sheet(
    df: &DataFrame,
    mixed: &MixedCells,
    options: &XlsxWriterOptions,
) -> Result<Workbook> {
    let index_width = usize::from(options.write_index);
    check_limits(df.height(), df.width() + index_width)?;

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(options.sheet_name.as_str())?;
    let header = header_format();

    // The corner cell over the index column stays unwritten.
    if options.write_index {
        for row in 0..df.height() {
            worksheet.write_number_with_format(data_row(row), 0, row as f64, &header)?;
        }
    }

    for (position, column) in df.get_columns().iter().enumerate() {
        let col = column_number(position + index_width);
        worksheet.write_string_with_format(0, col, column.name().as_str(), &header)?;
        let kinds = mixed.get(column.name().as_str()).map(Vec::as_slice);
        write_column(worksheet, col, column, kinds)?;
    }
    debug!(
        sheet = %options.sheet_name,
        mixed_columns = mixed.len(),
        "built worksheet"
    );
    Ok(workbook)
}

fn check_limits(rows: usize, columns: usize) -> Result<()> {
    let max_rows = XLSX_MAX_ROWS - 1;
    if rows > max_rows {
        return Err(ReportError::TooManyRows {
            count: rows,
            max: max_rows,
        });
    }
    if columns > XLSX_MAX_COLUMNS {
        return Err(ReportError::TooManyColumns {
            count: columns,
            max: XLSX_MAX_COLUMNS,
        });
    }
    Ok(())
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
}

// Limits are checked before any cell is written, so the casts cannot truncate.
fn data_row(row: usize) -> RowNum {
    (row + 1) as RowNum
}

fn column_number(position: usize) -> ColNum {
    position as ColNum
}

fn write_column(
    worksheet: &mut Worksheet,
    col: ColNum,
    column: &Column,
    kinds: Option<&[Option<ColumnKind>]>,
) -> Result<()> {
    let series = column.as_materialized_series();
    match series.dtype() {
        DataType::Boolean => {
            for (row, value) in series.bool()?.into_iter().enumerate() {
                if let Some(value) = value {
                    worksheet.write_boolean(data_row(row), col, value)?;
                }
            }
        }
        DataType::Int64 => {
            for (row, value) in series.i64()?.into_iter().enumerate() {
                if let Some(value) = value {
                    worksheet.write_number(data_row(row), col, value as f64)?;
                }
            }
        }
        DataType::Float64 => {
            for (row, value) in series.f64()?.into_iter().enumerate() {
                if let Some(value) = value {
                    worksheet.write_number(data_row(row), col, value)?;
                }
            }
        }
        DataType::String => {
            for (row, value) in series.str()?.into_iter().enumerate() {
                if let Some(value) = value {
                    let kind = kinds.and_then(|kinds| kinds.get(row).copied().flatten());
                    write_text_cell(worksheet, data_row(row), col, value, kind)?;
                }
            }
        }
        // All-null column: nothing to write.
        DataType::Null => {}
        other => {
            return Err(ReportError::UnsupportedColumnType {
                column: column.name().to_string(),
                dtype: other.to_string(),
            });
        }
    }
    Ok(())
}

/// Writes a text-column cell, restoring its number or boolean kind when known.
fn write_text_cell(
    worksheet: &mut Worksheet,
    row: RowNum,
    col: ColNum,
    text: &str,
    kind: Option<ColumnKind>,
) -> Result<()> {
    match kind {
        Some(ColumnKind::Integer | ColumnKind::Float) => {
            if let Ok(number) = text.parse::<f64>() {
                worksheet.write_number(row, col, number)?;
                return Ok(());
            }
        }
        Some(ColumnKind::Boolean) => {
            worksheet.write_boolean(row, col, text == "true")?;
            return Ok(());
        }
        _ => {}
    }
    worksheet.write_string(row, col, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_allow_full_sheet() {
        assert!(check_limits(XLSX_MAX_ROWS - 1, XLSX_MAX_COLUMNS).is_ok());
    }

    #[test]
    fn limits_reject_overflow() {
        assert!(matches!(
            check_limits(XLSX_MAX_ROWS, 1),
            Err(ReportError::TooManyRows { .. })
        ));
        assert!(matches!(
            check_limits(1, XLSX_MAX_COLUMNS + 1),
            Err(ReportError::TooManyColumns { .. })
        ));
    }

    #[test]
    fn options_builder() {
        let options = XlsxWriterOptions::new()
            .with_sheet_name("Patients")
            .with_index(false);
        assert_eq!(options.sheet_name, "Patients");
        assert!(!options.write_index);
    }
}
