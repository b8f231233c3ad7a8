//! Canonical month names for month-bearing columns.

use chrono::Datelike;
use sheetnorm_table::{NormalizedCell, RawCell};

use crate::dates::parse_date;

/// The twelve canonical month names, January first
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Label used for missing month values
pub const UNKNOWN_MONTH: &str = "Unknown";

/// Outcome of coercing one month cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthValue {
    /// A canonical month name
    Name(&'static str),
    /// The cell was empty
    Unknown,
    /// Nothing matched; the stringified raw value
    Fallback(String),
}

impl MonthValue {
    /// Convert into an output cell
    pub fn into_cell(self) -> NormalizedCell {
        match self {
            MonthValue::Name(name) => NormalizedCell::text(name),
            MonthValue::Unknown => NormalizedCell::text(UNKNOWN_MONTH),
            MonthValue::Fallback(text) => NormalizedCell::Text(text),
        }
    }
}

/// Month name for a 1-based month number
pub fn month_name(number: u32) -> Option<&'static str> {
    let index = usize::try_from(number).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(index).copied()
}

/// Month name for an integral number in 1..=12
fn from_number(n: f64) -> Option<&'static str> {
    if n.fract() != 0.0 || !(1.0..=12.0).contains(&n) {
        return None;
    }
    month_name(n as u32)
}

/// Month name for a numeral such as `"7"`, `"07"` or `"7.0"`
fn from_numeral(text: &str) -> Option<&'static str> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    text.parse::<f64>().ok().and_then(from_number)
}

/// Month name for an abbreviation (`"jul"`) or a full name (`"July"`)
fn from_name(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    MONTH_NAMES.iter().copied().find(|name| {
        let full = name.to_lowercase();
        lower == full || lower == full[..3]
    })
}

/// Coerce a raw cell from a month-bearing column. The first matching rule
/// wins: missing, month number, month name, date, stringified fallback.
pub fn coerce(cell: &RawCell) -> MonthValue {
    if cell.is_missing() {
        return MonthValue::Unknown;
    }

    match cell {
        RawCell::Number(n) => match from_number(*n) {
            Some(name) => MonthValue::Name(name),
            None => MonthValue::Fallback(cell.to_string()),
        },
        RawCell::Text(text) => coerce_text(text),
        RawCell::DateTime(dt) => month_name(dt.month())
            .map(MonthValue::Name)
            .unwrap_or_else(|| MonthValue::Fallback(cell.to_string())),
        RawCell::Bool(_) | RawCell::Null => MonthValue::Fallback(cell.to_string()),
    }
}

fn coerce_text(text: &str) -> MonthValue {
    let trimmed = text.trim();

    if let Some(name) = from_numeral(trimmed) {
        return MonthValue::Name(name);
    }
    if let Some(name) = from_name(trimmed) {
        return MonthValue::Name(name);
    }
    match parse_date(trimmed) {
        Ok(date) => month_name(date.month())
            .map(MonthValue::Name)
            .unwrap_or_else(|| MonthValue::Fallback(text.to_string())),
        Err(_) => MonthValue::Fallback(text.to_string()),
    }
}
