use crate::db::holidays;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::holiday::Holiday;
use chrono::NaiveDate;

pub struct HolidayLogic;

impl HolidayLogic {
    pub fn add(pool: &mut DbPool, date: NaiveDate, name: &str) -> AppResult<Holiday> {
        let h = holidays::add(&pool.conn, &date, name)?;
        ttlog_or_warn(&pool.conn, "holiday_add", &date.to_string(), name);
        Ok(h)
    }

    pub fn update(pool: &mut DbPool, date: NaiveDate, name: &str) -> AppResult<Holiday> {
        let h = holidays::update(&pool.conn, &date, name)?;
        ttlog_or_warn(&pool.conn, "holiday_edit", &date.to_string(), name);
        Ok(h)
    }

    pub fn delete(pool: &mut DbPool, date: NaiveDate) -> AppResult<()> {
        holidays::delete(&pool.conn, &date)?;
        ttlog_or_warn(&pool.conn, "holiday_del", &date.to_string(), "Holiday deleted");
        Ok(())
    }

    pub fn list(pool: &DbPool, month: Option<(i32, u32)>) -> AppResult<Vec<Holiday>> {
        match month {
            Some((y, m)) => holidays::list(&pool.conn, y, m),
            None => holidays::list_all(&pool.conn),
        }
    }
}
