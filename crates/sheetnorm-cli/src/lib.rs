//! sheetnorm CLI - Command-line interface library
//!
//! This library provides the CLI functionality for sheetnorm:
//! - Sheets: list the sheets of a workbook
//! - Process: normalize one sheet and print its records
//!
//! # Library Usage
//!
//! ```ignore
//! use sheetnorm_cli::{process_response, Response};
//!
//! let response = process_response(&input, Some("Sales"), &settings);
//! println!("{}", serde_json::to_string_pretty(&response)?);
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # List sheets
//! sheetnorm sheets sales.xlsx
//!
//! # Normalize a sheet
//! sheetnorm process sales.xlsx --sheet Sales
//!
//! # Human-readable output with debug logging
//! sheetnorm -v process sales.xlsx --format text
//! ```

pub mod app;
pub mod response;

// Re-export main entry point and types
pub use app::{process_command, process_response, run_cli, sheets_command, sheets_response};
pub use app::OutputFormat;
pub use response::{ErrorBody, Response};
