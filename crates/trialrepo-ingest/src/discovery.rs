//! File discovery for patient record folders.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// File name prefix shared by all patient record files.
pub const PATIENT_FILE_PREFIX: &str = "patient";

/// File name suffix shared by all patient record files.
pub const PATIENT_FILE_SUFFIX: &str = ".json";

/// Returns true if `name` matches the `patient*.json` pattern.
///
/// Matching is case-sensitive, like shell globbing on a POSIX filesystem.
pub fn is_patient_file_name(name: &str) -> bool {
    is_patient_os_name(OsStr::new(name))
}

/// Byte-wise variant of [`is_patient_file_name`]; names need not be valid UTF-8.
pub fn is_patient_os_name(name: &OsStr) -> bool {
    let bytes = name.as_encoded_bytes();
    bytes.len() >= PATIENT_FILE_PREFIX.len() + PATIENT_FILE_SUFFIX.len()
        && bytes.starts_with(PATIENT_FILE_PREFIX.as_bytes())
        && bytes.ends_with(PATIENT_FILE_SUFFIX.as_bytes())
}

/// Lists all `patient*.json` files in a directory.
///
/// Returns files sorted by filename. Subdirectories are not searched.
pub fn list_patient_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        // Skip directories
        if !path.is_file() {
            continue;
        }

        let matches = path.file_name().is_some_and(is_patient_os_name);

        if matches {
            files.push(path);
        }
    }

    // Sort by filename
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}
