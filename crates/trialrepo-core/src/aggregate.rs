//! Directory aggregation: patient JSON files to one record table.

use std::path::{Path, PathBuf};
use std::time::Instant;

use serde_json::{Map, Value};
use tracing::{debug, info, info_span};

use trialrepo_ingest::{list_patient_files, read_record};
use trialrepo_transform::{convert_record_to_dicom, flatten_record};

use crate::error::{AggregateError, Result};
use crate::frame::RecordFrame;
use crate::frame_builder::build_record_table;

/// Loads every `patient*.json` file in `directory` into one table.
///
/// Files are processed in filename order, each record is rewritten into
/// DICOM formatting and flattened, then the table is built once from all
/// rows. The first failing file aborts the run.
///
/// # Errors
///
/// - [`AggregateError::Ingest`] if the directory is missing or a file
///   cannot be read or parsed.
/// - [`AggregateError::Format`] if a record lacks or mangles a DICOM field.
pub fn aggregate(directory: &Path) -> Result<RecordFrame> {
    let span = info_span!("aggregate", directory = %directory.display());
    let _guard = span.enter();
    let start = Instant::now();

    let files = list_patient_files(directory)?;
    debug!(file_count = files.len(), "discovered patient files");

    let frame = aggregate_files(files)?;
    info!(
        file_count = frame.source_files.len(),
        row_count = frame.record_count(),
        column_count = frame.column_count(),
        duration_ms = start.elapsed().as_millis(),
        "aggregation complete"
    );
    Ok(frame)
}

/// Loads the given record files, in the order given, into one table.
pub fn aggregate_files(files: Vec<PathBuf>) -> Result<RecordFrame> {
    if files.is_empty() {
        return Ok(RecordFrame::empty());
    }
    let mut rows: Vec<Map<String, Value>> = Vec::with_capacity(files.len());
    for path in &files {
        rows.push(load_row(path)?);
    }
    let (data, mixed_cells) = build_record_table(&rows)?;
    Ok(RecordFrame {
        data,
        source_files: files,
        mixed_cells,
    })
}

/// Reads, formats and flattens a single record file.
pub fn load_row(path: &Path) -> Result<Map<String, Value>> {
    let record = read_record(path)?;
    let formatted = convert_record_to_dicom(&record).map_err(|source| AggregateError::Format {
        path: path.to_path_buf(),
        source,
    })?;
    let row = flatten_record(&formatted);
    debug!(path = %path.display(), columns = row.len(), "formatted record");
    Ok(row)
}
