//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Last `len` characters of an identifier
pub fn id_suffix(id: &str, len: usize) -> &str {
    let count = id.chars().count();
    if count <= len {
        return id;
    }
    match id.char_indices().nth(count - len) {
        Some((start, _)) => &id[start..],
        None => id,
    }
}

/// Parse an exported timestamp
///
/// Accepts RFC 3339, a naive date-time (read as UTC), a plain date, or epoch
/// milliseconds as produced by `{"$date": {"$numberLong": ...}}`.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| Utc.from_utc_datetime(&naive));
    }

    value
        .parse::<i64>()
        .ok()
        .and_then(|millis| Utc.timestamp_millis_opt(millis).single())
}

/// Format a timestamp for display, e.g. `Jan 05, 2024, 09:30 AM`
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%b %d, %Y, %I:%M %p").to_string()
}

/// Format an exported date, falling back to the raw text when unparsable
pub fn format_registration_date(value: &str) -> String {
    parse_timestamp(value)
        .map(format_timestamp)
        .unwrap_or_else(|| value.to_string())
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept.trim_end())
    }
}
