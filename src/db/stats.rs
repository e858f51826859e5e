use crate::db::pool::DbPool;
use crate::db::{attendance, holidays};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::path::expand_tilde;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(expand_tilde(db_path))
        .map(|m| m.len())
        .unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) COUNTS
    //
    let records = attendance::count(&pool.conn)?;
    let hols = holidays::count(&pool.conn)?;
    println!("{}• Attendance records:{} {}{}{}", CYAN, RESET, GREEN, records, RESET);
    println!("{}• Holidays:{} {}{}{}", CYAN, RESET, GREEN, hols, RESET);

    //
    // 3) DATE RANGE
    //
    let (first_date, last_date): (Option<String>, Option<String>) = pool
        .conn
        .query_row(
            "SELECT MIN(date), MAX(date) FROM attendance_records",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?
        .unwrap_or((None, None));

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
