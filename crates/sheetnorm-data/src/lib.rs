//! # sheetnorm-data
//!
//! Workbook loading and month-aware normalization for sheetnorm.
//!
//! ## Features
//!
//! - **Workbook Loading**: Read `.xlsx`, `.xlsm`, `.xlsb`, `.xls` and `.ods`
//!   workbooks from memory using `calamine`
//! - **Sheet Resolution**: Single-sheet workbooks load automatically,
//!   multi-sheet workbooks ask the caller to pick a sheet
//! - **Normalization**: Clean headers, coerce numeric text, and rewrite
//!   month columns to canonical month names
//!
//! ## Example
//!
//! ```rust,ignore
//! use sheetnorm_data::{DataEngine, PipelineOptions, ProcessOutcome, TracingReporter};
//!
//! let bytes = std::fs::read("sales.xlsx")?;
//! match DataEngine::process("sales.xlsx", bytes, None, &PipelineOptions::default(), &TracingReporter)? {
//!     ProcessOutcome::SelectionRequired(inventory) => println!("{:?}", inventory.sheet_names),
//!     ProcessOutcome::Processed { table, .. } => println!("{} rows", table.row_count()),
//! }
//! ```

pub mod config;
pub mod dates;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod sources;

// Re-exports
pub use config::Settings;
pub use error::{DataError, Result};
pub use pipeline::{normalize, DuplicateHeaders, Pipeline, PipelineOptions};
pub use report::{NullReporter, Reporter, TracingReporter};
pub use sources::{resolve, ExcelSource, MemorySource, Resolution, SheetSource, WorkbookFormat};

use sheetnorm_table::{NormalizedTable, SheetInventory};

/// Result of processing a workbook
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessOutcome {
    /// Several sheets exist; the caller must re-invoke with a selector
    SelectionRequired(SheetInventory),
    /// A sheet was loaded and normalized
    Processed {
        /// Name of the processed sheet
        sheet: String,
        /// Normalized contents
        table: NormalizedTable,
    },
}

/// Data engine: loader and pipeline wired together
pub struct DataEngine;

impl DataEngine {
    /// List the sheets of a workbook
    ///
    /// # Arguments
    /// * `file_name` - Original file name; only its extension is used
    /// * `bytes` - Workbook content
    pub fn inventory(file_name: &str, bytes: Vec<u8>) -> Result<SheetInventory> {
        let source = ExcelSource::open(file_name, bytes)?;
        Ok(source.inventory())
    }

    /// Load and normalize a workbook sheet
    ///
    /// # Arguments
    /// * `file_name` - Original file name; only its extension is used
    /// * `bytes` - Workbook content
    /// * `selector` - Sheet to process (optional for single-sheet workbooks)
    /// * `options` - Pipeline options
    /// * `reporter` - Receiver for pipeline events
    pub fn process(
        file_name: &str,
        bytes: Vec<u8>,
        selector: Option<&str>,
        options: &PipelineOptions,
        reporter: &dyn Reporter,
    ) -> Result<ProcessOutcome> {
        let mut source = ExcelSource::open(file_name, bytes)?;
        Self::process_source(&mut source, selector, options, reporter)
    }

    /// Load and normalize a sheet from any source
    pub fn process_source<S: SheetSource + ?Sized>(
        source: &mut S,
        selector: Option<&str>,
        options: &PipelineOptions,
        reporter: &dyn Reporter,
    ) -> Result<ProcessOutcome> {
        match resolve(source, selector)? {
            Resolution::SelectionRequired(inventory) => {
                Ok(ProcessOutcome::SelectionRequired(inventory))
            }
            Resolution::Loaded { sheet, table } => {
                reporter.sheet_resolved(&sheet);
                let table = normalize(table, options, reporter)?;
                Ok(ProcessOutcome::Processed { sheet, table })
            }
        }
    }
}
