//! Exit status and error output of the `trialrepo` binary.

use std::fs;
use std::process::{Command, Output};

use serde_json::json;

fn run_trialrepo(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_trialrepo"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run trialrepo")
}

#[test]
fn missing_input_folder_exits_with_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("absent");

    let output = run_trialrepo(&["--in", missing.to_str().unwrap()]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: input folder ("));
    assert!(stderr.contains("doesn't exist"));
    assert!(!missing.join("data.xlsx").exists());
}

#[test]
fn malformed_record_exits_with_error() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(
        dir.path().join("patient_001.json"),
        json!({"PatientName": "John Smith"}).to_string(),
    )
    .unwrap();

    let output = run_trialrepo(&["--in", dir.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("patient_001.json"));
    assert!(!dir.path().join("data.xlsx").exists());
}

#[test]
fn successful_run_exits_zero() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(
        dir.path().join("patient_001.json"),
        json!({
            "PatientName": "John Smith",
            "LeadClinicianName": "Jane Doe",
            "PatientDOB": "05-03-1980",
            "ScanDate": "12-11-2022",
            "ScanTime": "1430",
        })
        .to_string(),
    )
    .unwrap();

    let output = run_trialrepo(&["--in", dir.path().to_str().unwrap(), "--color", "never"]);

    assert!(output.status.success());
    assert!(dir.path().join("data.xlsx").is_file());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Records: 1"));
}
