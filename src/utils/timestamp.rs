//! Timestamp helpers for output naming and seeding.

use chrono::{DateTime, Local, TimeZone, Utc};

/// Format used in output file names, e.g. `20241019_153045`
pub const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Format a point in time as `YYYYMMDD_HHMMSS`
pub fn file_timestamp<Tz: TimeZone>(when: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    when.format(FILE_TIMESTAMP_FORMAT).to_string()
}

/// Current local time as `YYYYMMDD_HHMMSS`
pub fn local_file_timestamp() -> String {
    file_timestamp(&Local::now())
}

/// Seed derived from the current wall-clock time in nanoseconds
pub fn time_seed() -> u64 {
    let now = Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros()) as u64
}
