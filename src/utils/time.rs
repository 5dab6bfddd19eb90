//! Time utilities: epoch milliseconds to human-readable local time.

use chrono::{DateTime, Local, TimeZone};

/// Same shape as a browser `Date` string, e.g. `Tue Nov 14 2023 22:13:20 GMT+0000`.
pub const LOCAL_TIMESTAMP_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Text used when the timestamp is absent or out of range.
pub const INVALID_DATE: &str = "Invalid Date";

pub fn local_datetime(epoch_ms: i64) -> Option<DateTime<Local>> {
    Local.timestamp_millis_opt(epoch_ms).single()
}

pub fn format_local_timestamp(epoch_ms: Option<i64>) -> String {
    epoch_ms
        .and_then(local_datetime)
        .map(|dt| dt.format(LOCAL_TIMESTAMP_FORMAT).to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// Short form for tables: `2023-11-14 22:13`.
pub fn format_short_timestamp(epoch_ms: Option<i64>) -> String {
    epoch_ms
        .and_then(local_datetime)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "--".to_string())
}
