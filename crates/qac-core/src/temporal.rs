//! # Date Answers
//!
//! Date questions (2.4, 2.5, 2.8, 3.10, 3.11) are stored as the strings the
//! date picker produced, normally `Date.toISOString()` output such as
//! `2026-10-15T00:00:00.000Z`. The store never rejects a value; this module
//! only interprets it for display.

use chrono::{DateTime, NaiveDate};

/// Parse a stored date answer.
///
/// Accepts RFC 3339 timestamps (any offset; the calendar date in that
/// offset is used) and plain `YYYY-MM-DD`. Returns `None` for blank or
/// unrecognized text.
pub fn parse_answer_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Render a stored date answer long-form, e.g. `October 15, 2026`.
///
/// Values that do not parse are returned unchanged.
pub fn display_answer_date(value: &str) -> String {
    match parse_answer_date(value) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => value.to_string(),
    }
}
