//! Permissive parsing of mail `Date` headers.
//!
//! The MIME parser already understands well-formed RFC 5322 dates. Mail clients emit
//! plenty of other shapes, so the raw header text gets a second chance against RFC 2822,
//! RFC 3339 and a fixed list of formats seen in real archives.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};

use crate::utils::{format_iso_naive, format_iso_offset};

/// Formats carrying a numeric offset
const OFFSET_FORMATS: &[&str] = &[
    "%a, %d %b %Y %H:%M:%S %z",
    "%a, %d %b %Y %H:%M %z",
    "%d %b %Y %H:%M:%S %z",
    "%d %b %Y %H:%M %z",
    "%a %b %e %H:%M:%S %Y %z",
    "%Y-%m-%d %H:%M:%S %z",
    "%Y-%m-%dT%H:%M:%S%z",
    "%A, %d %B %Y %H:%M:%S %z",
    "%d %B %Y %H:%M:%S %z",
    "%A, %B %d, %Y %H:%M:%S %z",
    "%B %d, %Y %H:%M:%S %z",
];

/// Formats with no zone information; rendered without offset
const NAIVE_FORMATS: &[&str] = &[
    "%a, %d %b %Y %H:%M:%S",
    "%a, %d %b %Y %H:%M",
    "%d %b %Y %H:%M:%S",
    "%a %b %e %H:%M:%S %Y",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%A, %d %B %Y %H:%M:%S",
    "%d %B %Y %H:%M:%S",
    "%d %B %Y %H:%M",
    // US long form, 12-hour clock
    "%A, %B %d, %Y %I:%M %p",
    "%A, %B %d, %Y %I:%M:%S %p",
    "%B %d, %Y %I:%M %p",
    "%B %d, %Y %I:%M:%S %p",
    "%B %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M",
];

/// Convert a date parsed by mail-parser into a chrono datetime.
/// Returns None when the fields don't form a valid calendar date.
pub fn from_mail_date(date: &mail_parser::DateTime) -> Option<DateTime<FixedOffset>> {
    let naive = NaiveDate::from_ymd_opt(
        i32::from(date.year),
        u32::from(date.month),
        u32::from(date.day),
    )?
    .and_hms_opt(u32::from(date.hour), u32::from(date.minute), u32::from(date.second))?;

    let magnitude = i32::from(date.tz_hour) * 3600 + i32::from(date.tz_minute) * 60;
    let offset_secs = if date.tz_before_gmt { -magnitude } else { magnitude };
    let offset = FixedOffset::east_opt(offset_secs)?;

    offset.from_local_datetime(&naive).single()
}

/// Parse the raw text of a Date header into an ISO-8601 string.
/// Returns None if no known format matches.
pub fn parse_date_header(raw: &str) -> Option<String> {
    let cleaned = strip_trailing_comment(raw.trim());
    if cleaned.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(cleaned) {
        return Some(format_iso_offset(&dt));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(cleaned) {
        return Some(format_iso_offset(&dt));
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(cleaned, format) {
            return Some(format_iso_offset(&dt));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(cleaned, format) {
            return Some(format_iso_naive(&dt));
        }
    }

    None
}

/// Drop a trailing `(comment)` such as `(UTC)` or `(Pacific Standard Time)`
fn strip_trailing_comment(value: &str) -> &str {
    if value.ends_with(')')
        && let Some(open) = value.rfind('(')
    {
        return value[..open].trim_end();
    }
    value
}
