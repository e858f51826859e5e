use crate::db::attendance;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::attendance::{AttendanceFields, AttendanceRecord};
use crate::models::interruption::Interruption;
use crate::ui::messages::warning;
use crate::utils::time::parse_time;
use chrono::NaiveDate;

/// Changes requested on the command line. `None` / empty means "keep".
#[derive(Debug, Default, Clone)]
pub struct AddOptions {
    pub start: Option<String>,
    pub end: Option<String>,
    pub break_minutes: Option<u32>,
    pub side_job_minutes: Option<u32>,
    pub interruptions: Vec<Interruption>,
    pub clear_interruptions: bool,
    pub clear_times: bool,
    pub comment: Option<String>,
}

impl AddOptions {
    fn is_empty(&self) -> bool {
        self.start.is_none()
            && self.end.is_none()
            && self.break_minutes.is_none()
            && self.side_job_minutes.is_none()
            && self.interruptions.is_empty()
            && !self.clear_interruptions
            && !self.clear_times
            && self.comment.is_none()
    }

    /// Apply the requested changes on top of `base`.
    pub fn merge_into(&self, mut base: AttendanceFields) -> AttendanceFields {
        if self.clear_times {
            base.start_time = None;
            base.end_time = None;
        }
        if let Some(s) = &self.start {
            base.start_time = Some(s.clone());
        }
        if let Some(e) = &self.end {
            base.end_time = Some(e.clone());
        }
        if let Some(b) = self.break_minutes {
            base.break_minutes = Some(b);
        }
        if let Some(sj) = self.side_job_minutes {
            base.side_job_minutes = Some(sj);
        }
        if self.clear_interruptions {
            base.interruptions.clear();
        }
        base.interruptions.extend(self.interruptions.iter().cloned());
        if let Some(c) = &self.comment {
            base.comment = if c.trim().is_empty() {
                None
            } else {
                Some(c.clone())
            };
        }
        base
    }
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Create or update the record of `date`, keeping the fields that are not
    /// mentioned in `opts`.
    pub fn apply(pool: &mut DbPool, date: NaiveDate, opts: &AddOptions) -> AppResult<AttendanceRecord> {
        if opts.is_empty() {
            return Err(AppError::Other(
                "Nothing to do: specify at least one of --in, --out, --break, --side-job, --interrupt or --comment."
                    .into(),
            ));
        }

        let existing = attendance::get(&pool.conn, &date)?;
        let is_update = existing.is_some();

        let base = existing.map(|r| r.fields()).unwrap_or_default();
        let fields = opts.merge_into(base);

        if let (Some(s), Some(e)) = (
            fields.start_time.as_deref().and_then(parse_time),
            fields.end_time.as_deref().and_then(parse_time),
        ) && e < s
        {
            warning(format!(
                "End time {} is earlier than start time {}: overnight shifts are not supported, the day will count negative hours.",
                e.format("%H:%M"),
                s.format("%H:%M")
            ));
        }

        let record = attendance::upsert(&pool.conn, &date, &fields)?;

        let (op, msg) = if is_update {
            ("edit", "Attendance record updated")
        } else {
            ("add", "Attendance record created")
        };
        ttlog_or_warn(&pool.conn, op, &record.date_str(), msg);

        Ok(record)
    }
}
