//! Holiday store: at most one named holiday per date.

use crate::errors::{AppError, AppResult};
use crate::models::holiday::Holiday;
use crate::utils::date::month_bounds;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn date_key(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn map_row(row: &Row) -> Result<Holiday> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(Holiday {
        id: row.get("id")?,
        date,
        name: row.get("name")?,
    })
}

fn collect(conn: &Connection, sql: &str, params: impl rusqlite::Params) -> AppResult<Vec<Holiday>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get(conn: &Connection, date: &NaiveDate) -> AppResult<Option<Holiday>> {
    let h = conn
        .query_row(
            "SELECT id, date, name FROM holidays WHERE date = ?1",
            [date_key(date)],
            map_row,
        )
        .optional()?;
    Ok(h)
}

/// Holidays of one month, ascending by date.
pub fn list(conn: &Connection, year: i32, month: u32) -> AppResult<Vec<Holiday>> {
    let (first, last) =
        month_bounds(year, month).ok_or_else(|| AppError::InvalidMonth(format!("{year}-{month:02}")))?;

    collect(
        conn,
        "SELECT id, date, name FROM holidays
         WHERE date BETWEEN ?1 AND ?2
         ORDER BY date ASC",
        params![date_key(&first), date_key(&last)],
    )
}

pub fn list_all(conn: &Connection) -> AppResult<Vec<Holiday>> {
    collect(
        conn,
        "SELECT id, date, name FROM holidays ORDER BY date ASC",
        [],
    )
}

/// Register a new holiday. A date that already has one is rejected.
pub fn add(conn: &Connection, date: &NaiveDate, name: &str) -> AppResult<Holiday> {
    if get(conn, date)?.is_some() {
        return Err(AppError::HolidayExists(date_key(date)));
    }

    conn.execute(
        "INSERT INTO holidays (date, name) VALUES (?1, ?2)",
        params![date_key(date), name],
    )?;

    Ok(Holiday {
        id: conn.last_insert_rowid(),
        date: *date,
        name: name.to_string(),
    })
}

/// Rename the holiday on `date`.
pub fn update(conn: &Connection, date: &NaiveDate, name: &str) -> AppResult<Holiday> {
    let n = conn.execute(
        "UPDATE holidays SET name = ?1 WHERE date = ?2",
        params![name, date_key(date)],
    )?;

    if n == 0 {
        return Err(AppError::HolidayNotFound(date_key(date)));
    }

    get(conn, date)?.ok_or_else(|| AppError::HolidayNotFound(date_key(date)))
}

pub fn delete(conn: &Connection, date: &NaiveDate) -> AppResult<()> {
    let n = conn.execute("DELETE FROM holidays WHERE date = ?1", [date_key(date)])?;

    if n == 0 {
        return Err(AppError::HolidayNotFound(date_key(date)));
    }
    Ok(())
}

pub fn count(conn: &Connection) -> AppResult<i64> {
    let n = conn.query_row("SELECT COUNT(*) FROM holidays", [], |row| row.get(0))?;
    Ok(n)
}
