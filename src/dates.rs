//! Timestamp parsing and display formatting.
//!
//! The backend sends ISO 8601 strings, with or without an offset.
//! Unparseable input degrades to the raw string rather than failing a view.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }
    None
}

/// "Jul 1, 2025, 14:30" — timestamps in views and reports.
pub fn format_long(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%b %-d, %Y, %H:%M").to_string(),
        None => raw.to_string(),
    }
}

/// "7/1/2025" — short en-US date for CSV cells.
pub fn format_short(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%-m/%-d/%Y").to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_naive_and_offset_timestamps() {
        assert!(parse_timestamp("2025-07-01T12:30:00").is_some());
        assert!(parse_timestamp("2025-07-01T12:30:00.123456").is_some());
        assert!(parse_timestamp("2025-07-01T12:30:00Z").is_some());
        assert!(parse_timestamp("2025-07-01 12:30:00").is_some());
        assert!(parse_timestamp("2025-07-01").is_some());
        assert!(parse_timestamp("not a date").is_none());
    }

    #[test]
    fn long_format_matches_report_style() {
        assert_eq!(format_long("2025-07-01T09:05:00"), "Jul 1, 2025, 09:05");
        assert_eq!(format_long("2025-12-25T23:59:00"), "Dec 25, 2025, 23:59");
    }

    #[test]
    fn short_format_is_unpadded() {
        assert_eq!(format_short("2025-07-01T09:05:00"), "7/1/2025");
        assert_eq!(format_short("2025-11-30T00:00:00"), "11/30/2025");
    }

    #[test]
    fn unparseable_input_passes_through() {
        assert_eq!(format_long("garbage"), "garbage");
        assert_eq!(format_short(""), "");
    }
}
