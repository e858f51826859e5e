// src/export/model.rs

use crate::models::day_summary::DayEntry;
use crate::utils::formatting::fmt_hours;
use crate::utils::time::serialize_hours;
use serde::Serialize;

/// Flat per-day row shared by every export format.
#[derive(Serialize, Clone, Debug)]
pub struct DayExport {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(serialize_with = "serialize_hours")]
    pub break_hours: f64,
    #[serde(serialize_with = "serialize_hours")]
    pub interrupt_hours: f64,
    #[serde(serialize_with = "serialize_hours")]
    pub side_job_hours: f64,
    #[serde(serialize_with = "serialize_hours")]
    pub work_hours: f64,
    #[serde(serialize_with = "serialize_hours")]
    pub actual_work_hours: f64,
    #[serde(serialize_with = "serialize_hours")]
    pub gross_hours: f64,
    pub comment: String,
}

impl From<&DayEntry> for DayExport {
    fn from(e: &DayEntry) -> Self {
        Self {
            date: e.raw.date_str(),
            start_time: e.raw.start_time.clone().unwrap_or_default(),
            end_time: e.raw.end_time.clone().unwrap_or_default(),
            break_hours: e.summary.break_hours,
            interrupt_hours: e.summary.interrupt_hours,
            side_job_hours: e.summary.side_job_hours,
            work_hours: e.summary.work_hours,
            actual_work_hours: e.summary.actual_work_hours,
            gross_hours: e.summary.gross_hours,
            comment: e.raw.comment.clone().unwrap_or_default(),
        }
    }
}

/// Header for CSV / XLSX / PDF, in row order.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "date",
        "start_time",
        "end_time",
        "break_hours",
        "interrupt_hours",
        "side_job_hours",
        "work_hours",
        "actual_work_hours",
        "gross_hours",
        "comment",
    ]
}

pub(crate) fn day_to_row(d: &DayExport) -> Vec<String> {
    vec![
        d.date.clone(),
        d.start_time.clone(),
        d.end_time.clone(),
        fmt_hours(d.break_hours),
        fmt_hours(d.interrupt_hours),
        fmt_hours(d.side_job_hours),
        fmt_hours(d.work_hours),
        fmt_hours(d.actual_work_hours),
        fmt_hours(d.gross_hours),
        d.comment.clone(),
    ]
}

pub(crate) fn days_to_table(days: &[DayExport]) -> Vec<Vec<String>> {
    days.iter().map(day_to_row).collect()
}
