//! Time utilities: day-first timestamp parsing, minute/second arithmetic and formatting.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Date-time layouts accepted from the sheet, day first.
const DATETIME_FORMATS: [&str; 12] = [
    "%d/%m/%y %H:%M:%S",
    "%d/%m/%y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMATS: [&str; 4] = ["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y-%m-%d"];

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Parse a day-first timestamp.
///
/// A bare time of day is anchored on `reference`. Anything unparseable is `None`.
pub fn parse_day_first(s: &str, reference: NaiveDate) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    // Sheets exports sometimes carry fractional seconds
    let s = match s.rsplit_once('.') {
        Some((head, frac)) if head.len() > 10 && frac.chars().all(|c| c.is_ascii_digit()) => head,
        _ => s,
    };

    for fmt in DATETIME_FORMATS.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in DATE_FORMATS.iter() {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d.and_time(NaiveTime::MIN));
        }
    }

    for fmt in TIME_FORMATS.iter() {
        if let Ok(t) = NaiveTime::parse_from_str(s, fmt) {
            return Some(reference.and_time(t));
        }
    }

    None
}

/// Resolve the evaluation instant: the `--now` override or the local clock.
pub fn resolve_now(input: Option<&String>) -> AppResult<NaiveDateTime> {
    match input {
        Some(s) => {
            let today = Local::now().date_naive();
            parse_day_first(s, today).ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))
        }
        None => Ok(Local::now().naive_local()),
    }
}

pub fn format_timestamp(dt: &NaiveDateTime) -> String {
    dt.format("%d/%m/%Y %H:%M:%S").to_string()
}

pub fn format_clock(dt: &NaiveDateTime) -> String {
    dt.format("%H:%M:%S").to_string()
}

/// ISO layout, the one spreadsheet tools recognise as a date on import.
pub fn format_iso(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn format_optional(dt: Option<&NaiveDateTime>) -> String {
    dt.map(format_timestamp).unwrap_or_else(|| "-".to_string())
}
