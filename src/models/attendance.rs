use super::interruption::Interruption;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Editable part of an attendance record: everything except the date key
/// and the bookkeeping columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceFields {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub break_minutes: Option<u32>,
    #[serde(default)]
    pub interruptions: Vec<Interruption>,
    pub side_job_minutes: Option<u32>,
    pub comment: Option<String>,
}

/// One day of attendance, as stored in `attendance_records`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceRecord {
    #[serde(skip)]
    pub id: i64,
    pub date: NaiveDate,              // ⇔ date (TEXT "YYYY-MM-DD", UNIQUE)
    pub start_time: Option<String>,   // ⇔ start_time (TEXT "HH:MM")
    pub end_time: Option<String>,     // ⇔ end_time (TEXT "HH:MM")
    pub break_minutes: Option<u32>,   // ⇔ break_minutes (INT)
    pub interruptions: Vec<Interruption>, // ⇔ interruptions (TEXT, JSON array)
    pub side_job_minutes: Option<u32>, // ⇔ side_job_minutes (INT)
    pub comment: Option<String>,
    pub updated_at: Option<String>,   // ⇔ updated_at (TEXT, local "YYYY-MM-DD HH:MM:SS")
}

impl AttendanceRecord {
    pub fn new(date: NaiveDate, fields: AttendanceFields) -> Self {
        Self {
            id: 0,
            date,
            start_time: fields.start_time,
            end_time: fields.end_time,
            break_minutes: fields.break_minutes,
            interruptions: fields.interruptions,
            side_job_minutes: fields.side_job_minutes,
            comment: fields.comment,
            updated_at: Some(now_stamp()),
        }
    }

    /// Zero-valued stand-in for a calendar day without a stored record.
    pub fn placeholder(date: NaiveDate) -> Self {
        Self {
            id: 0,
            date,
            start_time: None,
            end_time: None,
            break_minutes: None,
            interruptions: Vec::new(),
            side_job_minutes: None,
            comment: None,
            updated_at: None,
        }
    }

    pub fn fields(&self) -> AttendanceFields {
        AttendanceFields {
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            break_minutes: self.break_minutes,
            interruptions: self.interruptions.clone(),
            side_job_minutes: self.side_job_minutes,
            comment: self.comment.clone(),
        }
    }

    /// Start and end, when both are present. Empty strings count as absent.
    pub fn work_span(&self) -> Option<(&str, &str)> {
        let start = non_empty(self.start_time.as_deref())?;
        let end = non_empty(self.end_time.as_deref())?;
        Some((start, end))
    }

    pub fn has_work_span(&self) -> bool {
        self.work_span().is_some()
    }

    /// A day counts towards gross days when it has a work span or any
    /// side-job time.
    pub fn is_gross_day(&self) -> bool {
        self.has_work_span() || self.side_job_minutes.unwrap_or(0) > 0
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|v| !v.is_empty())
}

/// Local wall-clock timestamp used for `updated_at`.
pub fn now_stamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
