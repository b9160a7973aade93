//! Timestamp parsing for the services' mixed ISO-8601 output.

use chrono::{DateTime, Local, NaiveDateTime, Utc};

/// Parse RFC 3339 timestamps, or naive ISO timestamps (read as UTC) as
/// produced by Python's `datetime.isoformat()`.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// `dd/mm/yyyy HH:MM:SS` in local time, or the raw text if unparseable.
pub fn format_local(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt
            .with_timezone(&Local)
            .format("%d/%m/%Y %H:%M:%S")
            .to_string(),
        None => raw.to_string(),
    }
}

/// `HH:MM:SS` in local time, or the raw text if unparseable.
pub fn format_local_time(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.with_timezone(&Local).format("%H:%M:%S").to_string(),
        None => raw.to_string(),
    }
}

/// Whole seconds between `raw` and `now`, clamped at zero.
pub fn seconds_since(raw: &str, now: DateTime<Utc>) -> Option<i64> {
    parse_timestamp(raw).map(|dt| (now - dt).num_seconds().max(0))
}

/// Relative age label: `42s ago`, `5m ago`, `2h ago`.
pub fn age_label(seconds: i64) -> String {
    if seconds < 60 {
        format!("{}s ago", seconds)
    } else if seconds < 3600 {
        format!("{}m ago", (seconds as f64 / 60.0).round() as i64)
    } else {
        format!("{}h ago", (seconds as f64 / 3600.0).round() as i64)
    }
}
