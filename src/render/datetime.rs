use crate::models::Scalar;
use chrono::{
    DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc,
};
use tracing::debug;

pub const FALLBACK: &str = "N/A";

const OFFSET_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Formats a date-like value as `YYYY-MM-DD HH:MM:SS` in local time.
pub fn format_date_time(value: &Scalar) -> String {
    format_date_time_in(value, &Local)
}

/// Same as [`format_date_time`] for an explicit zone.
pub fn format_date_time_in<Tz: TimeZone>(value: &Scalar, tz: &Tz) -> String {
    let Some(raw) = value.as_str() else {
        return FALLBACK.to_string();
    };

    match parse_in(raw.trim(), tz) {
        Some(dt) => format!(
            "{}-{:02}-{:02} {:02}:{:02}:{:02}",
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second()
        ),
        None => {
            debug!("Error formatting date: {:?}", raw);
            FALLBACK.to_string()
        }
    }
}

fn parse_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(tz));
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, fmt) {
            return Some(dt.with_timezone(tz));
        }
    }

    // Date-time without an offset is wall-clock time in the target zone.
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return tz.from_local_datetime(&naive).earliest();
        }
    }

    // Date-only forms are midnight UTC at the start of the period.
    let midnight = start_of_period(raw)?.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).with_timezone(tz))
}

/// `YYYY-MM-DD`, `YYYY-MM` or `YYYY`.
fn start_of_period(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    match raw.split('-').collect::<Vec<_>>().as_slice() {
        [year, month] if is_digits(year, 4) && is_digits(month, 2) => {
            NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
        }
        [year] if is_digits(year, 4) => NaiveDate::from_ymd_opt(year.parse().ok()?, 1, 1),
        _ => None,
    }
}

fn is_digits(part: &str, len: usize) -> bool {
    part.len() == len && part.bytes().all(|b| b.is_ascii_digit())
}
