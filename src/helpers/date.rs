//! Date parsing and formatting for article front-matter

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a front-matter date string, trying the common formats.
pub fn parse(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    let date_formats = ["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%b %d, %Y"];
    for fmt in date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    None
}

/// Short card format ("Jan 11, 2026"). Empty for unparseable input.
pub fn format_short(s: &str) -> String {
    parse(s)
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_default()
}

/// Long article format ("January 11, 2026"). Empty for unparseable input.
pub fn format_long(s: &str) -> String {
    parse(s)
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_default()
}
