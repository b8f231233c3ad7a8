//! Sheet sources.
//!
//! This module contains the workbook loader ([`ExcelSource`]) and an
//! in-memory source ([`MemorySource`]), plus the sheet resolution policy
//! shared by both.

pub mod excel;
pub mod memory;

pub use excel::{ExcelSource, WorkbookFormat};
pub use memory::MemorySource;

use sheetnorm_table::{RawTable, SheetInventory};

use crate::error::{DataError, Result};

/// Trait for sources that can provide sheets of tabular data
pub trait SheetSource {
    /// List the sheets in the source, in source order
    fn inventory(&self) -> SheetInventory;

    /// Load one sheet as a raw table (first row is the header row)
    ///
    /// Fails with [`DataError::SheetNotFound`] if `name` is not in the
    /// inventory.
    fn load_sheet(&mut self, name: &str) -> Result<RawTable>;
}

/// Outcome of resolving a sheet selector
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The sheet was resolved and loaded
    Loaded {
        /// Name of the loaded sheet
        sheet: String,
        /// Its contents
        table: RawTable,
    },
    /// Several sheets exist and none was selected
    SelectionRequired(SheetInventory),
}

/// Resolve a sheet selector against a source and load the sheet.
///
/// - an explicit selector loads that sheet
/// - without a selector, a single-sheet source loads its only sheet
/// - without a selector, a multi-sheet source defers and returns the inventory
pub fn resolve<S: SheetSource + ?Sized>(source: &mut S, selector: Option<&str>) -> Result<Resolution> {
    let inventory = source.inventory();

    let sheet = match selector {
        Some(name) => {
            if !inventory.contains(name) {
                return Err(DataError::SheetNotFound(name.to_string()));
            }
            name.to_string()
        }
        None => {
            if inventory.requires_selection() {
                return Ok(Resolution::SelectionRequired(inventory));
            }
            inventory
                .single()
                .map(str::to_string)
                .ok_or_else(|| DataError::Format("workbook contains no sheets".to_string()))?
        }
    };

    let table = source.load_sheet(&sheet)?;
    Ok(Resolution::Loaded { sheet, table })
}
