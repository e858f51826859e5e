pub mod add;
pub mod backup;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod forecast;
pub mod holiday;
pub mod init;
pub mod list;
pub mod log;
pub mod show;
pub mod summary;
pub mod trend;

use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDate;
use serde::Serialize;

/// `--month` / `--until` argument, defaulting to the current month.
pub(crate) fn resolve_month(arg: Option<&String>) -> AppResult<(i32, u32)> {
    match arg {
        Some(s) => date::parse_year_month(s).ok_or_else(|| AppError::InvalidMonth(s.to_string())),
        None => Ok(date::current_year_month()),
    }
}

pub(crate) fn resolve_date(arg: &str) -> AppResult<NaiveDate> {
    date::parse_date(arg).ok_or_else(|| AppError::InvalidDate(arg.to_string()))
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
