//! Sheet inventory

use serde::{Deserialize, Serialize};

/// Ordered list of sheet names discovered in a workbook
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SheetInventory {
    /// Sheet names in workbook order
    #[serde(rename = "sheetNames")]
    pub sheet_names: Vec<String>,
}

impl SheetInventory {
    /// Create an inventory from sheet names
    pub fn new(sheet_names: Vec<String>) -> Self {
        Self { sheet_names }
    }

    /// Number of sheets
    pub fn len(&self) -> usize {
        self.sheet_names.len()
    }

    /// True if the workbook has no sheets
    pub fn is_empty(&self) -> bool {
        self.sheet_names.is_empty()
    }

    /// Check whether a sheet with this exact name exists
    pub fn contains(&self, name: &str) -> bool {
        self.sheet_names.iter().any(|s| s == name)
    }

    /// The caller has to pick a sheet when there is more than one
    pub fn requires_selection(&self) -> bool {
        self.sheet_names.len() > 1
    }

    /// The only sheet, if there is exactly one
    pub fn single(&self) -> Option<&str> {
        match self.sheet_names.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }
}
