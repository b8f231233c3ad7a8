//! sheetnorm-table - Tabular data model
//!
//! This crate provides the table types shared by the sheetnorm loader,
//! normalization pipeline and command-line front end:
//!
//! - [`RawCell`] / [`RawTable`]: untyped values as read from a workbook
//! - [`NormalizedCell`] / [`Record`] / [`NormalizedTable`]: pipeline output
//! - [`SheetInventory`]: the sheet names discovered in a workbook

pub mod cell;
pub mod inventory;
pub mod table;

pub use cell::{NormalizedCell, RawCell};
pub use inventory::SheetInventory;
pub use table::{NormalizedTable, RawTable, Record};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
