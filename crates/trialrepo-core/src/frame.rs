//! Record table type.

use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;

use crate::frame_builder::{ColumnKind, MixedCells};

/// Flattened, DICOM-formatted patient records with their provenance.
///
/// Row `i` of `data` was read from `source_files[i]`.
#[derive(Debug, Clone)]
pub struct RecordFrame {
    /// One row per record, one column per flattened key.
    pub data: DataFrame,
    /// Source file of each row, in row order.
    pub source_files: Vec<PathBuf>,
    /// Per-cell JSON kinds of text columns whose cells disagree on type.
    pub mixed_cells: MixedCells,
}

impl RecordFrame {
    /// An empty table: no rows, no columns.
    pub fn empty() -> Self {
        Self {
            data: DataFrame::empty(),
            source_files: Vec::new(),
            mixed_cells: MixedCells::new(),
        }
    }

    pub fn record_count(&self) -> usize {
        self.data.height()
    }

    pub fn column_count(&self) -> usize {
        self.data.width()
    }

    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }

    /// Column names in table order.
    pub fn column_names(&self) -> Vec<&str> {
        self.data
            .get_column_names()
            .into_iter()
            .map(|name| name.as_str())
            .collect()
    }

    /// JSON kind of a cell in a mixed column.
    ///
    /// `None` for columns with a single kind, and for null cells.
    pub fn cell_kind(&self, column: &str, row: usize) -> Option<ColumnKind> {
        self.mixed_cells
            .get(column)
            .and_then(|kinds| kinds.get(row).copied().flatten())
    }

    /// Source file of a row.
    pub fn source_file(&self, row: usize) -> Option<&Path> {
        self.source_files.get(row).map(PathBuf::as_path)
    }
}
