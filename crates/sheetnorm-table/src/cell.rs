//! Cell values before and after normalization
//!
//! Workbook readers produce [`RawCell`]s, an explicit tagged variant for
//! every scalar a sheet can hold. The normalization pipeline turns them into
//! [`NormalizedCell`]s, which serialize to plain JSON scalars.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize, Serializer};

/// Format used when a date-time is rendered as text
const DISPLAY_DATETIME: &str = "%Y-%m-%d %H:%M:%S";

/// Format used when a date-time is serialized
const ISO_DATETIME: &str = "%Y-%m-%dT%H:%M:%S";

/// An untyped scalar as read from a sheet
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum RawCell {
    /// Absent value (empty cell)
    #[default]
    Null,
    /// Numeric value (integers are widened to f64)
    Number(f64),
    /// Text value, untrimmed
    Text(String),
    /// Boolean value
    Bool(bool),
    /// Typed date/time cell
    DateTime(NaiveDateTime),
}

impl RawCell {
    /// Create a text cell
    pub fn text(value: impl Into<String>) -> Self {
        RawCell::Text(value.into())
    }

    /// True for `Null` and for text that is empty after trimming
    pub fn is_missing(&self) -> bool {
        match self {
            RawCell::Null => true,
            RawCell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for RawCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawCell::Null => Ok(()),
            RawCell::Number(n) => write_number(f, *n),
            RawCell::Text(s) => f.write_str(s),
            RawCell::Bool(b) => write!(f, "{}", b),
            RawCell::DateTime(dt) => write!(f, "{}", dt.format(DISPLAY_DATETIME)),
        }
    }
}

/// Write a number without a trailing `.0` when it is integral
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_finite() && n.fract() == 0.0 {
        write!(f, "{:.0}", n)
    } else {
        write!(f, "{}", n)
    }
}

/// A cell after normalization
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NormalizedCell {
    /// Empty-string marker for missing values
    #[default]
    Empty,
    /// Floating-point number
    Number(f64),
    /// Text, including canonical month names
    Text(String),
    /// Boolean passed through unchanged
    Bool(bool),
    /// Date/time passed through unchanged
    DateTime(NaiveDateTime),
}

impl NormalizedCell {
    /// Create a text cell
    pub fn text(value: impl Into<String>) -> Self {
        NormalizedCell::Text(value.into())
    }

    /// Get the text content, if this is a text cell
    pub fn as_text(&self) -> Option<&str> {
        match self {
            NormalizedCell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the numeric value, if this is a number cell
    pub fn as_number(&self) -> Option<f64> {
        match self {
            NormalizedCell::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// True for the empty-string marker
    pub fn is_empty(&self) -> bool {
        matches!(self, NormalizedCell::Empty)
    }
}

impl fmt::Display for NormalizedCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizedCell::Empty => Ok(()),
            NormalizedCell::Number(n) => write_number(f, *n),
            NormalizedCell::Text(s) => f.write_str(s),
            NormalizedCell::Bool(b) => write!(f, "{}", b),
            NormalizedCell::DateTime(dt) => write!(f, "{}", dt.format(DISPLAY_DATETIME)),
        }
    }
}

impl Serialize for NormalizedCell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NormalizedCell::Empty => serializer.serialize_str(""),
            NormalizedCell::Number(n) => serializer.serialize_f64(*n),
            NormalizedCell::Text(s) => serializer.serialize_str(s),
            NormalizedCell::Bool(b) => serializer.serialize_bool(*b),
            NormalizedCell::DateTime(dt) => {
                serializer.collect_str(&dt.format(ISO_DATETIME))
            }
        }
    }
}

/// Feeding output back in as input (used to check idempotence)
impl From<&NormalizedCell> for RawCell {
    fn from(cell: &NormalizedCell) -> Self {
        match cell {
            NormalizedCell::Empty => RawCell::Null,
            NormalizedCell::Number(n) => RawCell::Number(*n),
            NormalizedCell::Text(s) => RawCell::Text(s.clone()),
            NormalizedCell::Bool(b) => RawCell::Bool(*b),
            NormalizedCell::DateTime(dt) => RawCell::DateTime(*dt),
        }
    }
}
