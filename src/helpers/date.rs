//! Date helper functions

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Parse a catalog date string.
///
/// Accepts plain dates (`2024-06-01`, `2024/06/01`), naive datetimes and
/// RFC 3339 timestamps. Timestamps keep the wall-clock time they were
/// written in, so `2024-06-01T23:30:00-05:00` stays on June 1st.
pub fn parse_post_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    parse_naive(s)
}

/// Parse a catalog date string into a comparable instant.
///
/// RFC 3339 timestamps are converted to UTC so that entries written with
/// different offsets order by when they happened. Dates without an offset
/// are taken as written.
pub fn parse_post_instant(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    parse_naive(s)
}

fn parse_naive(s: &str) -> Option<NaiveDateTime> {
    if s.is_empty() {
        return None;
    }

    const DATETIME_FORMATS: [&str; 3] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }

    for format in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    None
}

/// Full English month name for a 1-based month number
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

/// Short card label like "June 1"
pub fn card_date(date: &NaiveDateTime) -> String {
    format!("{} {}", month_name(date.month()), date.day())
}
