//! Display-date normalization and ordering keys.
//!
//! The archive writes timestamps in one canonical exporter format,
//! `YYYY-MM-DDTHH:MM:SS.mmmZ`. Exactly that format is reformatted for
//! display; every other value passes through unchanged, including the
//! empty string. Ordering uses a separate, more lenient parse so
//! documents with older hand-written dates still sort.

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// Strict exporter timestamp: date, time, exactly three fractional
/// digits, literal Z.
static EXPORT_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}Z$").expect("invalid date regex")
});

const EXPORT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Display format, e.g. `Sep 06, 2025 14:39:07`. chrono's `%b` uses
/// the fixed English month abbreviations regardless of locale.
const DISPLAY_FORMAT: &str = "%b %d, %Y %H:%M:%S";

/// Normalize a raw date value for display
///
/// Iff the value matches the strict exporter pattern it is
/// reformatted from its UTC fields; any other input is returned
/// unchanged. Pure function, no locale dependence.
pub fn normalize_display_date(raw: &str) -> String {
    if !EXPORT_DATE_RE.is_match(raw) {
        return raw.to_string();
    }

    match NaiveDateTime::parse_from_str(raw, EXPORT_FORMAT) {
        Ok(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        // Pattern matched but fields out of range (e.g. month 13)
        Err(_) => raw.to_string(),
    }
}

/// Best-effort timestamp parse for ordering only
///
/// Tries the strict exporter format, then RFC 3339, then a bare
/// date. Returns `None` when nothing matches; ordering treats such
/// documents as equal so discovery order is preserved among them.
pub fn parse_sort_key(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, EXPORT_FORMAT) {
        return Some(dt);
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }
    None
}
