//! Excel/ODS workbook source using calamine.

use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Ods, Range, Reader, Sheets, Xls, Xlsb, Xlsx};
use sheetnorm_table::{RawCell, RawTable, SheetInventory};

use crate::dates::parse_datetime;
use crate::error::{DataError, Result};
use crate::sources::SheetSource;

/// Spreadsheet container formats accepted by the loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkbookFormat {
    /// Office Open XML workbook (`.xlsx`)
    Xlsx,
    /// Macro-enabled Office Open XML workbook (`.xlsm`)
    Xlsm,
    /// Binary Office Open XML workbook (`.xlsb`)
    Xlsb,
    /// Legacy BIFF workbook (`.xls`)
    Xls,
    /// OpenDocument spreadsheet (`.ods`)
    Ods,
}

impl WorkbookFormat {
    /// Detect the format from a file name's extension (case-insensitive).
    ///
    /// Anything that is not a spreadsheet container is rejected here, before
    /// any bytes are parsed.
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "xlsx" => Ok(WorkbookFormat::Xlsx),
            "xlsm" => Ok(WorkbookFormat::Xlsm),
            "xlsb" => Ok(WorkbookFormat::Xlsb),
            "xls" => Ok(WorkbookFormat::Xls),
            "ods" => Ok(WorkbookFormat::Ods),
            _ => Err(DataError::Format(format!(
                "unsupported file type '{}': only Excel workbooks are accepted",
                file_name
            ))),
        }
    }
}

/// Workbook data source over in-memory bytes
pub struct ExcelSource {
    /// Parsed workbook
    workbook: Sheets<Cursor<Vec<u8>>>,
    /// Sheet names cache
    sheet_names: Vec<String>,
}

impl ExcelSource {
    /// Parse workbook bytes in the given format
    pub fn from_bytes(bytes: Vec<u8>, format: WorkbookFormat) -> Result<Self> {
        let cursor = Cursor::new(bytes);
        let workbook = match format {
            WorkbookFormat::Xlsx | WorkbookFormat::Xlsm => {
                Sheets::Xlsx(Xlsx::new(cursor).map_err(|e| DataError::Format(e.to_string()))?)
            }
            WorkbookFormat::Xlsb => {
                Sheets::Xlsb(Xlsb::new(cursor).map_err(|e| DataError::Format(e.to_string()))?)
            }
            WorkbookFormat::Xls => {
                Sheets::Xls(Xls::new(cursor).map_err(|e| DataError::Format(e.to_string()))?)
            }
            WorkbookFormat::Ods => {
                Sheets::Ods(Ods::new(cursor).map_err(|e| DataError::Format(e.to_string()))?)
            }
        };

        let sheet_names = workbook.sheet_names();

        Ok(Self {
            workbook,
            sheet_names,
        })
    }

    /// Parse workbook bytes, detecting the format from the file name
    pub fn open(file_name: &str, bytes: Vec<u8>) -> Result<Self> {
        let format = WorkbookFormat::from_file_name(file_name)?;
        Self::from_bytes(bytes, format)
    }

    /// Convert a calamine cell to a raw cell
    fn cell_to_raw(cell: &Data) -> RawCell {
        match cell {
            Data::Empty => RawCell::Null,
            Data::String(s) => RawCell::Text(s.clone()),
            Data::Int(i) => RawCell::Number(*i as f64),
            Data::Float(f) => RawCell::Number(*f),
            Data::Bool(b) => RawCell::Bool(*b),
            Data::Error(e) => RawCell::Text(e.to_string()),
            Data::DateTime(dt) => match dt.as_datetime() {
                Some(value) => RawCell::DateTime(value),
                None => RawCell::Number(dt.as_f64()),
            },
            Data::DateTimeIso(s) => match parse_datetime(s) {
                Ok(value) => RawCell::DateTime(value),
                Err(_) => RawCell::Text(s.clone()),
            },
            Data::DurationIso(s) => RawCell::Text(s.clone()),
        }
    }

    /// Header text for a header-row cell; empty cells get a positional name
    fn header_name(cell: &Data, index: usize) -> String {
        match Self::cell_to_raw(cell) {
            RawCell::Null => format!("Unnamed: {}", index),
            other => other.to_string(),
        }
    }

    /// Split a sheet range into a header row and data rows
    fn range_to_table(range: &Range<Data>) -> RawTable {
        let mut rows = range.rows();

        let columns: Vec<String> = match rows.next() {
            Some(header) => header
                .iter()
                .enumerate()
                .map(|(i, cell)| Self::header_name(cell, i))
                .collect(),
            None => return RawTable::default(),
        };

        let width = columns.len();
        let rows = rows
            .map(|row| {
                let mut cells: Vec<RawCell> = row.iter().take(width).map(Self::cell_to_raw).collect();
                cells.resize(width, RawCell::Null);
                cells
            })
            .collect();

        RawTable::new(columns, rows)
    }
}

impl SheetSource for ExcelSource {
    fn inventory(&self) -> SheetInventory {
        SheetInventory::new(self.sheet_names.clone())
    }

    fn load_sheet(&mut self, name: &str) -> Result<RawTable> {
        if !self.sheet_names.iter().any(|s| s == name) {
            return Err(DataError::SheetNotFound(name.to_string()));
        }

        let range = self
            .workbook
            .worksheet_range(name)
            .map_err(|e| DataError::Format(format!("{}: {}", name, e)))?;

        Ok(Self::range_to_table(&range))
    }
}
