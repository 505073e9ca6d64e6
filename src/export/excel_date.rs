// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveDateTime};

/// Interpret an exported cell as a timestamp or a duration,
/// returning the Excel serial value and its number format.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(("dd/mm/yyyy hh:mm:ss", naive_datetime_to_excel_serial(&dt)?));
    }

    parse_duration_secs(s).map(|secs| ("[h]:mm:ss", secs as f64 / 86400.0))
}

/// `H:MM:SS` durations as written by `secs2readable`; hours may exceed 23.
fn parse_duration_secs(s: &str) -> Option<i64> {
    let mut parts = s.split(':');
    let h: i64 = parts.next()?.parse().ok()?;
    let m_str = parts.next()?;
    let s_str = parts.next()?;
    if parts.next().is_some() || m_str.len() != 2 || s_str.len() != 2 || h < 0 {
        return None;
    }
    let m: i64 = m_str.parse().ok()?;
    let sec: i64 = s_str.parse().ok()?;
    if m >= 60 || sec >= 60 {
        return None;
    }
    Some(h * 3600 + m * 60 + sec)
}

fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> Option<f64> {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;

    let duration = *dt - excel_epoch;

    let days = duration.num_days() as f64;
    let secs = (duration.num_seconds() - duration.num_days() * 86400) as f64;

    Some(days + secs / 86400.0)
}
