// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::utils::date::{month_bounds, parse_date, parse_year_month};
use chrono::NaiveDate;

fn bad(r: &str) -> AppError {
    AppError::Export(format!(
        "invalid range '{r}': use YYYY, YYYY-MM, YYYY-MM-DD or two of the same shape joined by ':'"
    ))
}

/// First and last day of one range term.
fn term_bounds(t: &str) -> Option<(NaiveDate, NaiveDate)> {
    match t.len() {
        4 => {
            let y: i32 = t.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            ))
        }
        7 => {
            let (y, m) = parse_year_month(t)?;
            month_bounds(y, m)
        }
        10 => {
            let d = parse_date(t)?;
            Some((d, d))
        }
        _ => None,
    }
}

/// Parse --range into inclusive date bounds.
///
/// Accepts:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let r = r.trim();

    let (from, to) = match r.split_once(':') {
        Some((start, end)) => {
            let (start, end) = (start.trim(), end.trim());
            if start.len() != end.len() {
                return Err(bad(r));
            }
            let (first, _) = term_bounds(start).ok_or_else(|| bad(r))?;
            let (_, last) = term_bounds(end).ok_or_else(|| bad(r))?;
            (first, last)
        }
        None => term_bounds(r).ok_or_else(|| bad(r))?,
    };

    if from > to {
        return Err(AppError::Export(format!(
            "invalid range '{r}': start is after end"
        )));
    }

    Ok((from, to))
}
