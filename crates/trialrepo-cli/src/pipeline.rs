//! Conversion pipeline with explicit stages.
//!
//! 1. **Resolve**: check the input folder and derive the output path
//! 2. **Aggregate**: read, format and flatten every patient record
//! 3. **Output**: write the XLSX spreadsheet (skipped for dry runs)

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use polars::prelude::DataFrame;
use tracing::{Level, debug, enabled, info, trace};

use trialrepo_core::{RecordFrame, aggregate};
use trialrepo_report::{XlsxWriterOptions, write_record_frame};

use crate::logging::redact_value;
use crate::types::{ConvertResult, RowSummary};

/// Spreadsheet name used when no output path is given.
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "data.xlsx";

// ============================================================================
// Stage 1: Resolve
// ============================================================================

/// Resolved settings for one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input_dir: PathBuf,
    pub output_path: PathBuf,
    pub dry_run: bool,
}

impl ConvertOptions {
    /// Validate the input folder and settle the output path.
    ///
    /// Without `out_file` the spreadsheet goes to `<input_dir>/data.xlsx`;
    /// an explicit path is made absolute against the current directory.
    pub fn resolve(input_dir: &Path, out_file: Option<&Path>, dry_run: bool) -> Result<Self> {
        if !input_dir.exists() {
            bail!("input folder ({}) doesn't exist", input_dir.display());
        }
        let output_path = match out_file {
            Some(path) => std::path::absolute(path)
                .with_context(|| format!("resolve output path {}", path.display()))?,
            None => default_output_path(input_dir),
        };
        Ok(Self {
            input_dir: input_dir.to_path_buf(),
            output_path,
            dry_run,
        })
    }
}

/// Default spreadsheet location for an input folder.
pub fn default_output_path(input_dir: &Path) -> PathBuf {
    input_dir.join(DEFAULT_OUTPUT_FILE_NAME)
}

// ============================================================================
// Stages 2-3: Aggregate and Output
// ============================================================================

/// Run the whole conversion.
pub fn run_convert(options: &ConvertOptions) -> Result<ConvertResult> {
    let aggregate_start = Instant::now();
    let frame = aggregate(&options.input_dir)
        .with_context(|| format!("aggregate {}", options.input_dir.display()))?;
    info!(
        records = frame.record_count(),
        columns = frame.column_count(),
        duration_ms = aggregate_start.elapsed().as_millis(),
        "records aggregated"
    );
    trace_rows(&frame);

    let output_path = if options.dry_run {
        info!("dry run: skipping spreadsheet output");
        None
    } else {
        write_record_frame(
            &options.output_path,
            &frame,
            &XlsxWriterOptions::default(),
        )
        .with_context(|| format!("write {}", options.output_path.display()))?;
        Some(options.output_path.clone())
    };

    Ok(ConvertResult {
        input_dir: options.input_dir.clone(),
        output_path,
        column_count: frame.column_count(),
        rows: summarize_rows(&frame),
    })
}

/// One summary entry per table row.
pub fn summarize_rows(frame: &RecordFrame) -> Vec<RowSummary> {
    let counts = populated_field_counts(&frame.data);
    frame
        .source_files
        .iter()
        .zip(counts)
        .enumerate()
        .map(|(row, (path, populated_fields))| RowSummary {
            row,
            file_name: file_name(path),
            populated_fields,
        })
        .collect()
}

/// Number of non-null cells in each row.
pub fn populated_field_counts(df: &DataFrame) -> Vec<usize> {
    let mut counts = vec![0usize; df.height()];
    for column in df.get_columns() {
        let nulls = column.is_null();
        for (count, is_null) in counts.iter_mut().zip(&nulls) {
            if is_null == Some(false) {
                *count += 1;
            }
        }
    }
    counts
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn trace_rows(frame: &RecordFrame) {
    if !enabled!(Level::TRACE) {
        return;
    }
    let Ok(column) = frame.data.column("PatientName") else {
        debug!("no PatientName column to trace");
        return;
    };
    let Ok(names) = column.as_materialized_series().str() else {
        return;
    };
    for (row, name) in names.into_iter().enumerate() {
        trace!(
            row,
            file = %frame.source_file(row).map(file_name).unwrap_or_default(),
            patient_name = redact_value(name.unwrap_or_default()),
            "row ready"
        );
    }
}
