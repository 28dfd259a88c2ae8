//! Patient record ingestion utilities.
//!
//! This crate finds patient record files in a database folder and loads
//! each one as an ordered JSON object.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use trialrepo_ingest::{list_patient_files, read_record};
//!
//! let db_dir = Path::new("tests/data/db");
//! for path in list_patient_files(db_dir)? {
//!     let record = read_record(&path)?;
//!     println!("{}: {} fields", path.display(), record.len());
//! }
//! ```

mod discovery;
mod error;
mod record;

// === Error Types ===
pub use error::{IngestError, Result};

// === File Discovery ===
pub use discovery::{
    PATIENT_FILE_PREFIX, PATIENT_FILE_SUFFIX, is_patient_file_name, is_patient_os_name,
    list_patient_files,
};

// === Record Loading ===
pub use record::{Record, json_kind, parse_record, read_record};
