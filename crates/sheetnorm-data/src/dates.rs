//! Generic date parsing for free-form cell text.
//!
//! Formats are tried in a fixed order, so the result is deterministic:
//! ISO date-times first, then month-first numeric dates, then day-first
//! numeric dates, ISO dates, textual dates, and finally month-year forms
//! anchored to the first day of the month. Two-digit years are tried before
//! four-digit years.
//!
//! chrono reads `%Y` from any number of digits and `%y` from one or two, so
//! every candidate is checked first: a `%Y` field must line up with exactly
//! four digits and a `%y` field with exactly two. Without that check `10/5`
//! would be May of the year 10 and `1.2.3` would be a date in 2003.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// Text that matched none of the supported date formats
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized date: {0:?}")]
pub struct DateParseError(pub String);

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMATS: &[&str] = &[
    // month first
    "%m/%d/%y",
    "%m/%d/%Y",
    "%m-%d-%y",
    "%m-%d-%Y",
    // day first
    "%d/%m/%y",
    "%d/%m/%Y",
    "%d.%m.%y",
    "%d.%m.%Y",
    "%d-%m-%y",
    "%d-%m-%Y",
    // a short year would pass for %Y here, so these run after the numeric forms
    "%Y-%m-%d",
    "%Y/%m/%d",
    // textual; %b also accepts full month names
    "%b %d, %Y",
    "%d %b %Y",
    "%d %b, %Y",
    "%d-%b-%Y",
    "%d-%b-%y",
];

/// Month-year forms, parsed with a day prepended or appended
const MONTH_YEAR_FORMATS: &[(&str, &str)] = &[
    ("{}-01", "%Y-%m-%d"),
    ("01/{}", "%d/%m/%Y"),
    ("01 {}", "%d %b %Y"),
    ("01-{}", "%d-%b-%Y"),
    ("01-{}", "%d-%b-%y"),
];

/// True when every year field of `format` matches a digit run of the right
/// width in `input`: four digits for `%Y`, two for `%y`.
fn year_widths_match(input: &str, format: &str) -> bool {
    let runs: Vec<usize> = input
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .map(str::len)
        .collect();

    let mut field = 0;
    let mut specs = format.chars();
    while let Some(c) = specs.next() {
        if c != '%' {
            continue;
        }
        let width = match specs.next() {
            Some('Y') => Some(4),
            Some('y') => Some(2),
            Some('d' | 'm' | 'H' | 'M' | 'S') => None,
            // `%.f` fraction
            Some('.') => {
                specs.next();
                None
            }
            // non-numeric field such as `%b`
            _ => continue,
        };
        if let Some(width) = width {
            if runs.get(field) != Some(&width) {
                return false;
            }
        }
        field += 1;
    }
    true
}

fn parse_naive_datetime(s: &str, format: &str) -> Option<NaiveDateTime> {
    if !year_widths_match(s, format) {
        return None;
    }
    NaiveDateTime::parse_from_str(s, format).ok()
}

fn parse_naive_date(s: &str, format: &str) -> Option<NaiveDate> {
    if !year_widths_match(s, format) {
        return None;
    }
    NaiveDate::parse_from_str(s, format).ok()
}

/// Parse free-form text into a date-time. Date-only inputs map to midnight.
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime, DateParseError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(DateParseError(input.to_string()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }

    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|format| parse_naive_datetime(s, format))
    {
        return Ok(dt);
    }

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|format| parse_naive_date(s, format))
    {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    if let Some(date) = MONTH_YEAR_FORMATS
        .iter()
        .find_map(|(template, format)| parse_naive_date(&template.replace("{}", s), format))
    {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    Err(DateParseError(input.to_string()))
}

/// Parse free-form text into a calendar date
pub fn parse_date(input: &str) -> Result<NaiveDate, DateParseError> {
    parse_datetime(input).map(|dt| dt.date())
}
