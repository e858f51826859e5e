use crate::db::attendance;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Fails with `RecordNotFound` before anything else when the date has no record.
    pub fn ensure_exists(pool: &DbPool, date: NaiveDate) -> AppResult<()> {
        match attendance::get(&pool.conn, &date)? {
            Some(_) => Ok(()),
            None => Err(AppError::RecordNotFound(date.format("%Y-%m-%d").to_string())),
        }
    }

    pub fn apply(pool: &mut DbPool, date: NaiveDate) -> AppResult<()> {
        let date_str = date.format("%Y-%m-%d").to_string();

        attendance::delete(&pool.conn, &date)?;
        ttlog_or_warn(&pool.conn, "del", &date_str, "Attendance record deleted");

        Ok(())
    }
}
