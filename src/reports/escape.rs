//! Escaping utilities for safe report generation.
//!
//! Device names and brands come from an external dataset and may contain
//! quotes, separators or newlines; everything embedded in a quoted CSV
//! field goes through [`escape_csv`] first.

/// Escape a string for CSV embedding: double-quote escaping per RFC 4180,
/// plus newline flattening since fields are already wrapped in double
/// quotes.
#[must_use]
pub fn escape_csv(s: &str) -> String {
    s.replace('"', "\"\"").replace('\n', " ")
}
