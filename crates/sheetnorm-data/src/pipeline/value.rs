//! Coercion for cells outside month-bearing columns.

use sheetnorm_table::{NormalizedCell, RawCell};

/// Coerce a raw cell from an ordinary column
pub fn coerce(cell: RawCell) -> NormalizedCell {
    match cell {
        RawCell::Null => NormalizedCell::Empty,
        RawCell::Text(text) => coerce_text(&text),
        RawCell::Number(n) => NormalizedCell::Number(n),
        RawCell::Bool(b) => NormalizedCell::Bool(b),
        RawCell::DateTime(dt) => NormalizedCell::DateTime(dt),
    }
}

fn coerce_text(text: &str) -> NormalizedCell {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return NormalizedCell::Empty;
    }
    match parse_numeric(trimmed) {
        Some(n) => NormalizedCell::Number(n),
        None => NormalizedCell::text(trimmed),
    }
}

/// Parse text such as `"1,234.50"` or `"-42"` as a number.
///
/// The text qualifies when, after dropping one leading `-` and every `,`
/// and `.`, only ASCII digits remain. Thousands separators are removed
/// before parsing; text that qualifies but still does not parse (`"1.2.3"`)
/// yields `None`.
pub fn parse_numeric(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let mut digits = unsigned.chars().filter(|c| *c != ',' && *c != '.').peekable();
    digits.peek()?;
    if !digits.all(|c| c.is_ascii_digit()) {
        return None;
    }
    text.replace(',', "").parse::<f64>().ok()
}
