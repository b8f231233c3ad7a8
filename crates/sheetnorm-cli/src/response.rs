//! Response payloads printed by the CLI.

use serde::Serialize;
use sheetnorm_data::{DataError, ProcessOutcome};
use sheetnorm_table::{NormalizedTable, Record, SheetInventory};

/// Error classification and message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    /// Stable error code, e.g. `SHEET_NOT_FOUND`
    pub code: String,
    /// Human-readable message
    pub message: String,
}

/// A command response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    /// Sheet names of a workbook
    #[serde(rename_all = "camelCase")]
    Inventory {
        success: bool,
        file_name: String,
        sheet_names: Vec<String>,
    },
    /// More than one sheet; the caller must pick one
    #[serde(rename_all = "camelCase")]
    SelectionRequired {
        success: bool,
        file_name: String,
        multiple_sheets: bool,
        sheets: Vec<String>,
    },
    /// A normalized sheet
    #[serde(rename_all = "camelCase")]
    Table {
        success: bool,
        file_name: String,
        multiple_sheets: bool,
        sheet: String,
        columns: Vec<String>,
        data: Vec<Record>,
    },
    /// Any failure
    #[serde(rename_all = "camelCase")]
    Error {
        success: bool,
        file_name: String,
        error: ErrorBody,
    },
}

impl Response {
    /// Build an inventory response
    pub fn inventory(file_name: &str, inventory: SheetInventory) -> Self {
        Response::Inventory {
            success: true,
            file_name: file_name.to_string(),
            sheet_names: inventory.sheet_names,
        }
    }

    /// Build a response from a processing outcome
    pub fn outcome(file_name: &str, outcome: ProcessOutcome) -> Self {
        match outcome {
            ProcessOutcome::SelectionRequired(inventory) => Response::SelectionRequired {
                success: true,
                file_name: file_name.to_string(),
                multiple_sheets: true,
                sheets: inventory.sheet_names,
            },
            ProcessOutcome::Processed { sheet, table } => {
                let NormalizedTable { columns, rows } = table;
                Response::Table {
                    success: true,
                    file_name: file_name.to_string(),
                    multiple_sheets: false,
                    sheet,
                    columns,
                    data: rows,
                }
            }
        }
    }

    /// Build an error response
    pub fn error(file_name: &str, err: &DataError) -> Self {
        Response::Error {
            success: false,
            file_name: file_name.to_string(),
            error: ErrorBody {
                code: err.code().to_string(),
                message: err.to_string(),
            },
        }
    }

    /// True for error responses
    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error { .. })
    }
}
