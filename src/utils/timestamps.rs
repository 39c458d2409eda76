use chrono::{DateTime, FixedOffset, NaiveDateTime, Timelike};

const ISO_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

/// Format a naive datetime as ISO-8601 without offset.
/// Fractional seconds are included (6 digits) only when non-zero.
pub fn format_iso_naive(datetime: &NaiveDateTime) -> String {
    let mut out = datetime.format(ISO_SECONDS).to_string();
    if datetime.nanosecond() != 0 {
        out.push_str(&datetime.format("%.6f").to_string());
    }
    out
}

/// Format a zoned datetime as ISO-8601 with a `+HH:MM` offset
pub fn format_iso_offset(datetime: &DateTime<FixedOffset>) -> String {
    let mut out = format_iso_naive(&datetime.naive_local());
    out.push_str(&datetime.format("%:z").to_string());
    out
}

/// Convert microseconds since the Unix epoch (UTC) to a naive UTC datetime
pub fn from_unix_micros(micros: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_micros(micros).map(|dt| dt.naive_utc())
}
