//! Raw and normalized tables

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::cell::{NormalizedCell, RawCell};

/// A table as read from a sheet, before normalization
///
/// Rows are positional: cell `i` of every row belongs to `columns[i]`.
/// Headers are kept exactly as read (untrimmed).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawTable {
    /// Column headers in sheet order
    pub columns: Vec<String>,
    /// Data rows in sheet order
    pub rows: Vec<Vec<RawCell>>,
}

impl RawTable {
    /// Create a table from headers and rows
    pub fn new(columns: Vec<String>, rows: Vec<Vec<RawCell>>) -> Self {
        Self { columns, rows }
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Index of the first row whose width differs from the header count
    pub fn first_ragged_row(&self) -> Option<usize> {
        let width = self.columns.len();
        self.rows.iter().position(|row| row.len() != width)
    }
}

/// One output row: an ordered mapping from header to cell
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<(String, NormalizedCell)>,
}

impl Record {
    /// Create an empty record with room for `capacity` fields
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Set a field. An existing key keeps its position and takes the new value.
    pub fn set(&mut self, key: impl Into<String>, value: NormalizedCell) {
        let key = key.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Look up a field by header
    pub fn get(&self, key: &str) -> Option<&NormalizedCell> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NormalizedCell)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A table after normalization
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NormalizedTable {
    /// Cleaned column headers, in output order
    pub columns: Vec<String>,
    /// Records, in the same order as the source rows
    pub rows: Vec<Record>,
}

impl NormalizedTable {
    /// Number of records
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Convert the output back into a raw table, e.g. to run it through the
    /// pipeline again
    pub fn to_raw(&self) -> RawTable {
        let rows = self
            .rows
            .iter()
            .map(|record| {
                self.columns
                    .iter()
                    .map(|column| record.get(column).map(RawCell::from).unwrap_or_default())
                    .collect()
            })
            .collect();

        RawTable {
            columns: self.columns.clone(),
            rows,
        }
    }
}
