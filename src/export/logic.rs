// src/export/logic.rs

use crate::core::calculator::daily_entries;
use crate::db::attendance;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::pdf_export::export_pdf;
use crate::export::range::parse_range;
use crate::export::xlsx::export_xlsx;
use crate::export::{DayExport, ExportFormat};
use crate::ui::messages::warning;
use crate::utils::date::{month_name, parse_year_month};
use chrono::NaiveDate;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export per-day rows with their computed hours.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or one of
    ///   `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, `YYYY:YYYY`,
    ///   `YYYY-MM:YYYY-MM`, `YYYY-MM-DD:YYYY-MM-DD`
    ///
    /// Returns the number of exported days.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let bounds = match range.as_deref() {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let days = load_days(pool, bounds)?;

        if days.is_empty() {
            warning("No attendance records found for the selected range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;
        format.check_extension(path);

        match format {
            ExportFormat::Csv => export_csv(&days, path)?,
            ExportFormat::Json => export_json(&days, path)?,
            ExportFormat::Xlsx => export_xlsx(&days, path)?,
            ExportFormat::Pdf => export_pdf(&days, path, &pdf_title(range.as_deref()))?,
        }

        ttlog_or_warn(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("{} day(s) exported as {}", days.len(), format.as_str()),
        );

        Ok(days.len())
    }
}

fn load_days(pool: &DbPool, bounds: Option<(NaiveDate, NaiveDate)>) -> AppResult<Vec<DayExport>> {
    let records = match bounds {
        Some((from, to)) => attendance::list_range(&pool.conn, &from, &to)?,
        None => attendance::list_all(&pool.conn)?,
    };

    Ok(daily_entries(&records).iter().map(DayExport::from).collect())
}

/// PDF title from the selected period.
fn pdf_title(range: Option<&str>) -> String {
    let Some(r) = range.map(str::trim).filter(|r| !r.eq_ignore_ascii_case("all")) else {
        return "Attendance".to_string();
    };

    if let Some((from, to)) = r.split_once(':') {
        return format!("Attendance from {from} to {to}");
    }

    match r.len() {
        4 => format!("Attendance for year {r}"),
        7 => match parse_year_month(r) {
            Some((y, m)) => format!("Attendance for {} {y}", month_name(m)),
            None => "Attendance".to_string(),
        },
        _ => format!("Attendance for {r}"),
    }
}
