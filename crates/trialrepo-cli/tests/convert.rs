//! End-to-end tests for the conversion pipeline.

use std::fs;
use std::path::Path;

use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use serde_json::{Value, json};

use trialrepo_cli::pipeline::{ConvertOptions, run_convert};

fn write_json(dir: &Path, name: &str, value: &Value) {
    fs::write(dir.join(name), value.to_string()).expect("write record");
}

fn seed_folder(dir: &Path) {
    write_json(
        dir,
        "patient_001.json",
        &json!({
            "PatientName": "John Smith",
            "LeadClinicianName": "Jane Doe",
            "PatientDOB": "05-03-1980",
            "ScanDate": "12-11-2022",
            "ScanTime": "1430",
            "Extra1": "x",
        }),
    );
    write_json(
        dir,
        "patient_002.json",
        &json!({
            "PatientName": "Mary Ann Jones",
            "LeadClinicianName": "Amir Patel",
            "PatientDOB": "21-07-1975",
            "ScanDate": "03-01-2023",
            "ScanTime": "09:05",
            "Extra2": "y",
        }),
    );
}

fn cell_text(range: &Range<Data>, position: (u32, u32)) -> Option<String> {
    match range.get_value(position)? {
        Data::Empty => None,
        Data::String(value) => Some(value.clone()),
        other => Some(format!("{other:?}")),
    }
}

#[test]
fn converts_folder_to_default_spreadsheet() {
    let dir = tempfile::TempDir::new().unwrap();
    seed_folder(dir.path());

    let options = ConvertOptions::resolve(dir.path(), None, false).expect("resolve");
    let result = run_convert(&options).expect("convert");

    let output = dir.path().join("data.xlsx");
    assert_eq!(result.output_path.as_deref(), Some(output.as_path()));
    assert_eq!(result.record_count(), 2);
    assert_eq!(result.column_count, 7);
    assert_eq!(result.rows[0].file_name, "patient_001.json");
    assert_eq!(result.rows[0].populated_fields, 6);

    let mut workbook: Xlsx<_> = open_workbook(&output).expect("open workbook");
    let range = workbook.worksheet_range("Sheet1").expect("sheet");
    assert_eq!(cell_text(&range, (0, 1)).as_deref(), Some("PatientName"));
    assert_eq!(cell_text(&range, (0, 6)).as_deref(), Some("Extra1"));
    assert_eq!(cell_text(&range, (0, 7)).as_deref(), Some("Extra2"));
    assert_eq!(range.get_value((1, 0)), Some(&Data::Float(0.0)));
    assert_eq!(cell_text(&range, (1, 1)).as_deref(), Some("Smith^John"));
    assert_eq!(cell_text(&range, (1, 2)).as_deref(), Some("Doe^Jane"));
    assert_eq!(cell_text(&range, (1, 3)).as_deref(), Some("19800305"));
    assert_eq!(cell_text(&range, (1, 4)).as_deref(), Some("20221112"));
    assert_eq!(cell_text(&range, (1, 5)).as_deref(), Some("143000"));
    assert_eq!(cell_text(&range, (2, 1)).as_deref(), Some("Jones^Mary^Ann"));
    assert_eq!(cell_text(&range, (2, 5)).as_deref(), Some("090500"));
    assert_eq!(cell_text(&range, (2, 7)).as_deref(), Some("y"));
    assert_eq!(cell_text(&range, (2, 6)), None);
}

#[test]
fn mixed_kind_column_keeps_numbers_numeric() {
    let dir = tempfile::TempDir::new().unwrap();
    seed_folder(dir.path());
    write_json(
        dir.path(),
        "patient_003.json",
        &json!({
            "PatientName": "Li Wei",
            "LeadClinicianName": "Jane Doe",
            "PatientDOB": "09-09-1990",
            "ScanDate": "04-04-2024",
            "ScanTime": "1015",
            "Age": 43,
        }),
    );
    write_json(
        dir.path(),
        "patient_004.json",
        &json!({
            "PatientName": "Ana Costa",
            "LeadClinicianName": "Jane Doe",
            "PatientDOB": "10-10-1991",
            "ScanDate": "05-04-2024",
            "ScanTime": "1120",
            "Age": "unknown",
        }),
    );

    let options = ConvertOptions::resolve(dir.path(), None, false).expect("resolve");
    run_convert(&options).expect("convert");

    let mut workbook: Xlsx<_> = open_workbook(dir.path().join("data.xlsx")).expect("open");
    let range = workbook.worksheet_range("Sheet1").expect("sheet");
    assert_eq!(cell_text(&range, (0, 8)).as_deref(), Some("Age"));
    assert_eq!(range.get_value((3, 8)), Some(&Data::Float(43.0)));
    assert_eq!(cell_text(&range, (4, 8)).as_deref(), Some("unknown"));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::TempDir::new().unwrap();
    seed_folder(dir.path());

    let options = ConvertOptions::resolve(dir.path(), None, true).expect("resolve");
    let result = run_convert(&options).expect("convert");

    assert!(result.output_path.is_none());
    assert_eq!(result.record_count(), 2);
    assert!(!dir.path().join("data.xlsx").exists());
}

#[test]
fn explicit_output_path_is_used() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = dir.path().join("db");
    fs::create_dir(&input).unwrap();
    seed_folder(&input);
    let out = dir.path().join("reports/patients.xlsx");

    let options = ConvertOptions::resolve(&input, Some(out.as_path()), false).expect("resolve");
    run_convert(&options).expect("convert");

    assert!(out.is_file());
    assert!(!input.join("data.xlsx").exists());
}

#[test]
fn bad_record_aborts_without_output() {
    let dir = tempfile::TempDir::new().unwrap();
    seed_folder(dir.path());
    write_json(dir.path(), "patient_003.json", &json!({"PatientName": "Solo"}));

    let options = ConvertOptions::resolve(dir.path(), None, false).expect("resolve");
    let err = run_convert(&options).unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("patient_003.json"));
    assert!(message.contains("LeadClinicianName"));
    assert!(!dir.path().join("data.xlsx").exists());
}
