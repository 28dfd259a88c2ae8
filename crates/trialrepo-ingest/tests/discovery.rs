//! Tests for patient file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use trialrepo_ingest::{IngestError, list_patient_files, read_record};

fn temp_dir() -> tempfile::TempDir {
    tempfile::Builder::new()
        .prefix("trialrepo_ingest_")
        .tempdir()
        .expect("create temp dir")
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write file");
    path
}

#[test]
fn discovers_patient_files_in_name_order() {
    let dir = temp_dir();
    let _ = write(dir.path(), "patient_003.json", "{}");
    let _ = write(dir.path(), "patient_001.json", "{}");
    let _ = write(dir.path(), "patient_002.json", "{}");
    let _ = write(dir.path(), "validate_001.json", "{}");
    let _ = write(dir.path(), "data.xlsx", "");

    let files = list_patient_files(dir.path()).expect("list patients");
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();

    assert_eq!(
        names,
        vec!["patient_001.json", "patient_002.json", "patient_003.json"]
    );
}

#[test]
fn listing_is_repeatable() {
    let dir = temp_dir();
    for name in ["patient_b.json", "patient_a.json", "patient_c.json"] {
        let _ = write(dir.path(), name, "{}");
    }

    let first = list_patient_files(dir.path()).expect("first listing");
    let second = list_patient_files(dir.path()).expect("second listing");
    assert_eq!(first, second);
}

#[test]
fn missing_directory_is_reported() {
    let dir = temp_dir();
    let missing = dir.path().join("does-not-exist");

    let err = list_patient_files(&missing).unwrap_err();
    assert!(matches!(err, IngestError::DirectoryNotFound { ref path } if path == &missing));
}

#[test]
fn reads_nested_record() {
    let dir = temp_dir();
    let path = write(
        dir.path(),
        "patient_001.json",
        r#"{"PatientName": "John Smith", "Scanner": {"Make": "GE", "Field": 3}}"#,
    );

    let record = read_record(&path).expect("read record");
    assert_eq!(record["PatientName"], "John Smith");
    assert_eq!(record["Scanner"]["Field"], 3);
}

#[test]
fn read_error_names_the_file() {
    let dir = temp_dir();
    let path = write(dir.path(), "patient_009.json", "not json");

    let err = read_record(&path).unwrap_err();
    assert!(matches!(err, IngestError::JsonParse { .. }));
    assert!(err.to_string().contains("patient_009.json"));
}
