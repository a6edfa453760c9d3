//! Time related utils.

use chrono::Utc;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into date: `20220301`
pub fn format_date(t: DateTime) -> String {
    t.format("%Y%m%d").to_string()
}

/// Format time into unix timestamp in seconds: `1646118000`
pub fn format_timestamp(t: DateTime) -> String {
    t.timestamp().to_string()
}

/// Build datetime from unix timestamp in milliseconds.
///
/// Returns `None` if the value is out of range.
pub fn from_timestamp_millis(millis: i64) -> Option<DateTime> {
    DateTime::from_timestamp_millis(millis)
}
