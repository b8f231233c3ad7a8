//! In-memory sheet source.

use sheetnorm_table::{RawTable, SheetInventory};

use crate::error::{DataError, Result};
use crate::sources::SheetSource;

/// Sheets that are already held as raw tables
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    sheets: Vec<(String, RawTable)>,
}

impl MemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sheet (builder style)
    pub fn with_sheet(mut self, name: impl Into<String>, table: RawTable) -> Self {
        self.add_sheet(name, table);
        self
    }

    /// Add a sheet; a sheet with the same name is replaced in place
    pub fn add_sheet(&mut self, name: impl Into<String>, table: RawTable) {
        let name = name.into();
        match self.sheets.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = table,
            None => self.sheets.push((name, table)),
        }
    }
}

impl SheetSource for MemorySource {
    fn inventory(&self) -> SheetInventory {
        SheetInventory::new(self.sheets.iter().map(|(n, _)| n.clone()).collect())
    }

    fn load_sheet(&mut self, name: &str) -> Result<RawTable> {
        self.sheets
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| t.clone())
            .ok_or_else(|| DataError::SheetNotFound(name.to_string()))
    }
}
