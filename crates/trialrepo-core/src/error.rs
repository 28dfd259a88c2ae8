//! Error types for record aggregation.

use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

use trialrepo_ingest::IngestError;
use trialrepo_transform::TransformError;

/// Errors that abort an aggregation run.
#[derive(Debug, Error)]
pub enum AggregateError {
    /// Discovery or parsing failed.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// A record could not be rewritten into DICOM formatting.
    #[error("failed to format {path}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: TransformError,
    },

    /// The record table could not be assembled.
    #[error("failed to build record table: {0}")]
    Frame(#[from] PolarsError),
}

/// Result type for aggregation operations.
pub type Result<T> = std::result::Result<T, AggregateError>;
