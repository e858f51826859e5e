//! Attendance store: one row per calendar date.

use crate::errors::{AppError, AppResult};
use crate::models::attendance::{AttendanceFields, AttendanceRecord, now_stamp};
use crate::models::interruption::Interruption;
use crate::utils::date::month_bounds;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const COLUMNS: &str = "id, date, start_time, end_time, break_minutes, interruptions, \
                       side_job_minutes, comment, updated_at";

fn date_key(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> Result<AttendanceRecord> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(AppError::InvalidDate(date_str.clone())))?;

    let raw_interruptions: Option<String> = row.get("interruptions")?;
    let interruptions: Vec<Interruption> = match raw_interruptions.as_deref() {
        None | Some("") => Vec::new(),
        Some(json) => serde_json::from_str(json).map_err(|e| conversion_error(e.into()))?,
    };

    Ok(AttendanceRecord {
        id: row.get("id")?,
        date,
        start_time: row.get("start_time")?,
        end_time: row.get("end_time")?,
        break_minutes: row.get("break_minutes")?,
        interruptions,
        side_job_minutes: row.get("side_job_minutes")?,
        comment: row.get("comment")?,
        updated_at: row.get("updated_at")?,
    })
}

fn query_records(conn: &Connection, sql: &str, from: &str, to: &str) -> AppResult<Vec<AttendanceRecord>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params![from, to], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Record for one date, if any.
pub fn get(conn: &Connection, date: &NaiveDate) -> AppResult<Option<AttendanceRecord>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLUMNS} FROM attendance_records WHERE date = ?1"
    ))?;

    let rec = stmt.query_row([date_key(date)], map_row).optional()?;
    Ok(rec)
}

/// Persisted records between two dates (inclusive), ascending by date.
pub fn list_range(
    conn: &Connection,
    from: &NaiveDate,
    to: &NaiveDate,
) -> AppResult<Vec<AttendanceRecord>> {
    query_records(
        conn,
        &format!(
            "SELECT {COLUMNS} FROM attendance_records
             WHERE date BETWEEN ?1 AND ?2
             ORDER BY date ASC"
        ),
        &date_key(from),
        &date_key(to),
    )
}

/// Persisted records of one month. No gaps are filled.
pub fn list(conn: &Connection, year: i32, month: u32) -> AppResult<Vec<AttendanceRecord>> {
    let (first, last) =
        month_bounds(year, month).ok_or_else(|| AppError::InvalidMonth(format!("{year}-{month:02}")))?;
    list_range(conn, &first, &last)
}

/// Every persisted record, ascending by date.
pub fn list_all(conn: &Connection) -> AppResult<Vec<AttendanceRecord>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLUMNS} FROM attendance_records ORDER BY date ASC"
    ))?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Create the record for `date`, or replace every field of the existing one.
/// `updated_at` is refreshed either way.
pub fn upsert(
    conn: &Connection,
    date: &NaiveDate,
    fields: &AttendanceFields,
) -> AppResult<AttendanceRecord> {
    let interruptions = serde_json::to_string(&fields.interruptions)?;

    conn.execute(
        "INSERT INTO attendance_records
            (date, start_time, end_time, break_minutes, interruptions,
             side_job_minutes, comment, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
         ON CONFLICT(date) DO UPDATE SET
            start_time       = excluded.start_time,
            end_time         = excluded.end_time,
            break_minutes    = excluded.break_minutes,
            interruptions    = excluded.interruptions,
            side_job_minutes = excluded.side_job_minutes,
            comment          = excluded.comment,
            updated_at       = excluded.updated_at",
        params![
            date_key(date),
            fields.start_time,
            fields.end_time,
            fields.break_minutes,
            interruptions,
            fields.side_job_minutes,
            fields.comment,
            now_stamp(),
        ],
    )?;

    get(conn, date)?.ok_or_else(|| AppError::RecordNotFound(date_key(date)))
}

/// Delete the record for `date`; absent records are reported, not ignored.
pub fn delete(conn: &Connection, date: &NaiveDate) -> AppResult<()> {
    let n = conn.execute(
        "DELETE FROM attendance_records WHERE date = ?1",
        [date_key(date)],
    )?;

    if n == 0 {
        return Err(AppError::RecordNotFound(date_key(date)));
    }
    Ok(())
}

pub fn count(conn: &Connection) -> AppResult<i64> {
    let n = conn.query_row("SELECT COUNT(*) FROM attendance_records", [], |row| {
        row.get(0)
    })?;
    Ok(n)
}
