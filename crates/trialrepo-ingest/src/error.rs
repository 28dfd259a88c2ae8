//! Error types for patient record ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering or loading patient records.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Record Parsing Errors ===
    /// File content is not valid JSON.
    #[error("failed to parse JSON {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// File holds valid JSON whose top-level value is not an object.
    #[error("expected a JSON object in {path}, found {found}")]
    NotAnObject { path: PathBuf, found: &'static str },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
