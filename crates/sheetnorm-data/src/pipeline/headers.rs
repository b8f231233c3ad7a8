//! Header cleanup, month-column detection and duplicate handling.

use std::collections::HashSet;

use crate::pipeline::DuplicateHeaders;
use crate::report::Reporter;

/// Trim a header and collapse internal whitespace runs to one space
pub fn clean_header(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A column is month-bearing if its cleaned header contains the keyword,
/// compared case-insensitively. An empty keyword matches nothing.
pub fn is_month_column(header: &str, keyword: &str) -> bool {
    if keyword.is_empty() {
        return false;
    }
    header.to_lowercase().contains(&keyword.to_lowercase())
}

/// Output keys for a set of cleaned headers.
///
/// Returns `(keys, columns)`: `keys[i]` is the record key cell `i` is stored
/// under, `columns` is the ordered, duplicate-free column list.
pub fn resolve_duplicates(
    headers: &[String],
    policy: DuplicateHeaders,
    reporter: &dyn Reporter,
) -> (Vec<String>, Vec<String>) {
    let mut used: HashSet<String> = HashSet::with_capacity(headers.len());
    let mut keys = Vec::with_capacity(headers.len());
    let mut columns = Vec::with_capacity(headers.len());

    for header in headers {
        if used.insert(header.clone()) {
            keys.push(header.clone());
            columns.push(header.clone());
            continue;
        }

        match policy {
            DuplicateHeaders::Overwrite => {
                reporter.duplicate_header(header, header);
                keys.push(header.clone());
            }
            DuplicateHeaders::Suffix => {
                let renamed = (1..)
                    .map(|n| format!("{}.{}", header, n))
                    .find(|candidate| !used.contains(candidate))
                    .unwrap_or_else(|| header.clone());
                reporter.duplicate_header(header, &renamed);
                used.insert(renamed.clone());
                keys.push(renamed.clone());
                columns.push(renamed);
            }
        }
    }

    (keys, columns)
}
