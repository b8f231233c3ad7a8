//! Reporting capability injected into the pipeline.
//!
//! The pipeline never touches global logging state; it describes what it
//! did through a [`Reporter`]. [`TracingReporter`] forwards to `tracing`,
//! [`NullReporter`] drops everything.

use tracing::{debug, info, warn};

/// Receiver for pipeline events. All methods default to no-ops.
pub trait Reporter: Send + Sync {
    /// A sheet was picked for processing
    fn sheet_resolved(&self, _sheet: &str) {}

    /// A column was classified as month-bearing
    fn month_column(&self, _column: &str) {}

    /// A header occurred more than once after cleanup
    fn duplicate_header(&self, _header: &str, _resolved_as: &str) {}

    /// A month cell matched no rule and kept its stringified value
    fn month_fallback(&self, _column: &str, _row: usize, _value: &str) {}

    /// Number of fallback cells in a month column, sent once per column
    /// after the table is processed and only when the count is non-zero
    fn month_fallback_total(&self, _column: &str, _count: usize) {}

    /// The table was normalized
    fn table_normalized(&self, _rows: usize, _columns: usize) {}
}

/// Reporter that discards all events
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Reporter that emits `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn sheet_resolved(&self, sheet: &str) {
        debug!(sheet, "sheet resolved");
    }

    fn month_column(&self, column: &str) {
        debug!(column, "month column detected");
    }

    fn duplicate_header(&self, header: &str, resolved_as: &str) {
        warn!(header, resolved_as, "duplicate column header");
    }

    fn month_fallback(&self, column: &str, row: usize, value: &str) {
        debug!(column, row, value, "unrecognized month value kept as-is");
    }

    fn month_fallback_total(&self, column: &str, count: usize) {
        warn!(column, count, "month column has unrecognized values");
    }

    fn table_normalized(&self, rows: usize, columns: usize) {
        info!(rows, columns, "table normalized");
    }
}
