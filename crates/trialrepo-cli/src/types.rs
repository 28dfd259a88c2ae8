use std::path::PathBuf;

#[derive(Debug)]
pub struct ConvertResult {
    pub input_dir: PathBuf,
    /// Written spreadsheet; `None` for a dry run.
    pub output_path: Option<PathBuf>,
    pub column_count: usize,
    pub rows: Vec<RowSummary>,
}

impl ConvertResult {
    pub fn record_count(&self) -> usize {
        self.rows.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSummary {
    pub row: usize,
    pub file_name: String,
    pub populated_fields: usize,
}
