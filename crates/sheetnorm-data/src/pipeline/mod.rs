//! Normalization pipeline.
//!
//! Turns a [`RawTable`] into a [`NormalizedTable`] in one pass:
//!
//! 1. headers are trimmed and whitespace-collapsed
//! 2. month-bearing columns are detected once per table
//! 3. every cell is coerced, month cells to canonical month names and all
//!    other cells to numbers, trimmed text or the empty marker
//!
//! Row and column order are preserved and rows are never dropped. Cell
//! coercion cannot fail; the only error is a table whose rows do not match
//! its header width, which is rejected before any output is built.

pub mod headers;
pub mod month;
pub mod value;

use serde::{Deserialize, Serialize};
use sheetnorm_table::{NormalizedTable, RawTable, Record};

use crate::error::{DataError, Result};
use crate::report::Reporter;

pub use headers::{clean_header, is_month_column};
pub use month::{MonthValue, MONTH_NAMES, UNKNOWN_MONTH};

/// What to do when two columns clean up to the same header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateHeaders {
    /// Later columns overwrite earlier ones in each record
    #[default]
    Overwrite,
    /// Later columns are renamed `Name.1`, `Name.2`, ...
    Suffix,
}

/// Pipeline options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    /// Duplicate header policy
    pub duplicate_headers: DuplicateHeaders,
    /// Substring that marks a month-bearing column (case-insensitive)
    pub month_keyword: String,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            duplicate_headers: DuplicateHeaders::default(),
            month_keyword: "month".to_string(),
        }
    }
}

/// Normalization pipeline bound to a reporter
pub struct Pipeline<'r> {
    options: PipelineOptions,
    reporter: &'r dyn Reporter,
}

impl<'r> Pipeline<'r> {
    /// Create a pipeline
    pub fn new(options: PipelineOptions, reporter: &'r dyn Reporter) -> Self {
        Self { options, reporter }
    }

    /// Pipeline options in effect
    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Normalize a raw table
    pub fn run(&self, table: RawTable) -> Result<NormalizedTable> {
        if let Some(index) = table.first_ragged_row() {
            return Err(DataError::Processing(format!(
                "row {} has {} cells, expected {}",
                index + 1,
                table.rows[index].len(),
                table.columns.len()
            )));
        }

        let cleaned: Vec<String> = table.columns.iter().map(|h| clean_header(h)).collect();
        let month_columns: Vec<bool> = cleaned
            .iter()
            .map(|h| is_month_column(h, &self.options.month_keyword))
            .collect();
        for (header, _) in cleaned.iter().zip(&month_columns).filter(|(_, m)| **m) {
            self.reporter.month_column(header);
        }

        let (keys, columns) =
            headers::resolve_duplicates(&cleaned, self.options.duplicate_headers, self.reporter);

        let mut fallbacks = vec![0usize; keys.len()];
        let mut rows = Vec::with_capacity(table.rows.len());
        for (row_index, row) in table.rows.into_iter().enumerate() {
            let mut record = Record::with_capacity(columns.len());
            for (col, (cell, key)) in row.into_iter().zip(&keys).enumerate() {
                let normalized = if month_columns[col] {
                    let month_value = month::coerce(&cell);
                    if let MonthValue::Fallback(text) = &month_value {
                        self.reporter.month_fallback(key, row_index + 1, text);
                        fallbacks[col] += 1;
                    }
                    month_value.into_cell()
                } else {
                    value::coerce(cell)
                };
                record.set(key.as_str(), normalized);
            }
            rows.push(record);
        }

        for (key, count) in keys.iter().zip(fallbacks).filter(|(_, n)| *n > 0) {
            self.reporter.month_fallback_total(key, count);
        }
        self.reporter.table_normalized(rows.len(), columns.len());
        Ok(NormalizedTable { columns, rows })
    }
}

/// Normalize a raw table with the given options
pub fn normalize(
    table: RawTable,
    options: &PipelineOptions,
    reporter: &dyn Reporter,
) -> Result<NormalizedTable> {
    Pipeline::new(options.clone(), reporter).run(table)
}
