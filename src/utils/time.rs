//! Time utilities: parsing HH:MM, hour arithmetic, rounding at the output boundary.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;
use serde::Serializer;

/// Strict "HH:MM" parse (24-hour clock).
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Lenient parse used on stored values: empty, missing or malformed input
/// yields midnight. Callers cannot tell "absent" from a real 00:00.
pub fn parse_time_or_midnight(t: Option<&str>) -> NaiveTime {
    t.and_then(parse_time).unwrap_or(NaiveTime::MIN)
}

/// Wall-clock difference `end - start` in hours, on a common day.
/// An end earlier than the start gives a negative value; overnight
/// spans are not wrapped.
pub fn hours_between(start: NaiveTime, end: NaiveTime) -> f64 {
    (end - start).num_seconds() as f64 / 3600.0
}

pub fn minutes_to_hours(mins: Option<u32>) -> f64 {
    f64::from(mins.unwrap_or(0)) / 60.0
}

pub fn round2(h: f64) -> f64 {
    let r = (h * 100.0).round() / 100.0;
    // avoid printing "-0.00"
    if r == 0.0 { 0.0 } else { r }
}

/// serde helper: hours leave the process rounded to two decimals.
pub fn serialize_hours<S: Serializer>(h: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(round2(*h))
}

/// CLI input: a given time must be valid, and is normalised to "HH:MM".
pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<String>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t.format("%H:%M").to_string()))
    } else {
        Ok(None)
    }
}
