// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveTime, Timelike};

/// Recognise a date ("YYYY-MM-DD") or a time of day ("HH:MM") and return
/// the Excel serial value with the number format to display it.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
        return Some(("yyyy-mm-dd", (d - epoch).num_days() as f64));
    }

    if let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M") {
        let seconds = t.num_seconds_from_midnight() as f64;
        return Some(("hh:mm", seconds / 86400.0));
    }

    None
}
