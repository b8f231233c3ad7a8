//! Integration tests for the sheetnorm CLI
//!
//! These tests drive the command layer end to end: workbook on disk,
//! extension gate, engine, and the JSON response shape.

#[path = "../../sheetnorm-data/tests/common/mod.rs"]
mod common;

use std::fs;
use std::path::PathBuf;

use serde_json::json;
use tempfile::TempDir;

use sheetnorm_cli::{process_response, sheets_response};
use sheetnorm_data::{DuplicateHeaders, Settings};

fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, bytes).expect("Failed to write fixture");
    path
}

#[test]
fn test_sheets_lists_both_sheets() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_file(&temp_dir, "sales.xlsx", &common::sales_workbook());

    let json = serde_json::to_value(sheets_response(&path)).unwrap();
    assert_eq!(
        json,
        json!({
            "success": true,
            "fileName": "sales.xlsx",
            "sheetNames": ["Sales", "Notes"]
        })
    );
}

#[test]
fn test_process_without_sheet_asks_for_selection() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_file(&temp_dir, "sales.xlsx", &common::sales_workbook());

    let json = serde_json::to_value(process_response(&path, None, &Settings::default())).unwrap();
    assert_eq!(
        json,
        json!({
            "success": true,
            "fileName": "sales.xlsx",
            "multipleSheets": true,
            "sheets": ["Sales", "Notes"]
        })
    );
}

#[test]
fn test_process_selected_sheet() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_file(&temp_dir, "sales.xlsx", &common::sales_workbook());

    let response = process_response(&path, Some("Sales"), &Settings::default());
    assert!(!response.is_error());

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["multipleSheets"], json!(false));
    assert_eq!(json["sheet"], json!("Sales"));
    assert_eq!(json["columns"], json!(["Region", "Sales Month", "Revenue"]));
    assert_eq!(
        json["data"][0],
        json!({"Region": "North", "Sales Month": "May", "Revenue": 1000.0})
    );
    assert_eq!(
        json["data"][1],
        json!({"Region": "South", "Sales Month": "Unknown", "Revenue": ""})
    );
}

#[test]
fn test_process_single_sheet_workbook() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_file(&temp_dir, "only.XLSX", &common::single_sheet_workbook());

    let json = serde_json::to_value(process_response(&path, None, &Settings::default())).unwrap();
    assert_eq!(json["sheet"], json!("Only"));
    assert_eq!(json["data"][0]["Month"], json!("January"));
    assert_eq!(json["data"][1]["Month"], json!("13"));
}

#[test]
fn test_process_honors_duplicate_header_setting() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let bytes = common::build_xlsx(&[common::Sheet::new(
        "Dupes",
        vec![
            vec![common::Cell::Str("Month"), common::Cell::Str("Month ")],
            vec![common::Cell::Num(2.0), common::Cell::Num(3.0)],
        ],
    )]);
    let path = write_file(&temp_dir, "dupes.xlsx", &bytes);

    let mut settings = Settings::default();
    settings.pipeline.duplicate_headers = DuplicateHeaders::Suffix;

    let json = serde_json::to_value(process_response(&path, None, &settings)).unwrap();
    assert_eq!(json["columns"], json!(["Month", "Month.1"]));
    assert_eq!(json["data"][0], json!({"Month": "February", "Month.1": "March"}));
}

#[test]
fn test_process_date_formatted_cells() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_file(&temp_dir, "orders.xlsx", &common::typed_cells_workbook());

    let json = serde_json::to_value(process_response(&path, None, &Settings::default())).unwrap();
    assert_eq!(json["sheet"], json!("Orders"));
    assert_eq!(json["data"][0]["Order Month"], json!("March"));
    assert_eq!(json["data"][0]["Shipped"], json!("2024-03-15T00:00:00"));
    assert_eq!(json["data"][0]["Margin"], json!("#DIV/0!"));
    assert_eq!(json["data"][1]["Order Month"], json!("November"));
    assert_eq!(json["data"][1]["Paid"], json!(false));
}

#[test]
fn test_unsupported_extension_is_rejected_before_reading() {
    // The file does not exist; the extension gate must fire first.
    let path = PathBuf::from("/nonexistent/report.csv");

    let json = serde_json::to_value(sheets_response(&path)).unwrap();
    assert_eq!(json["success"], json!(false));
    assert_eq!(json["error"]["code"], json!("FORMAT_ERROR"));
}

#[test]
fn test_missing_file_is_io_error() {
    let path = PathBuf::from("/nonexistent/report.xlsx");

    let json = serde_json::to_value(sheets_response(&path)).unwrap();
    assert_eq!(json["error"]["code"], json!("IO_ERROR"));
}

#[test]
fn test_unknown_sheet_is_reported() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_file(&temp_dir, "sales.xlsx", &common::sales_workbook());

    let response = process_response(&path, Some("Forecast"), &Settings::default());
    assert!(response.is_error());

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["error"]["code"], json!("SHEET_NOT_FOUND"));
    assert_eq!(json["error"]["message"], json!("Sheet not found: Forecast"));
}

#[test]
fn test_corrupt_workbook_is_format_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_file(&temp_dir, "broken.xlsx", b"not a workbook");

    let json = serde_json::to_value(sheets_response(&path)).unwrap();
    assert_eq!(json["error"]["code"], json!("FORMAT_ERROR"));
}
