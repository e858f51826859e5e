use super::day;
use crate::models::attendance::AttendanceRecord;
use crate::models::day_summary::{DayEntry, DaySummary};
use crate::models::month_aggregate::{FullMonth, MonthAggregate};
use crate::utils::date::all_days_of_month;
use chrono::NaiveDate;
use std::collections::BTreeMap;

impl MonthAggregate {
    fn add_day(&mut self, record: &AttendanceRecord, s: &DaySummary) {
        self.work_total_hours += s.work_hours;
        self.break_total_hours += s.break_hours;
        self.interrupt_total_hours += s.interrupt_hours;
        self.side_job_total_hours += s.side_job_hours;

        if record.has_work_span() {
            self.work_days += 1;
        }
        if record.is_gross_day() {
            self.gross_days += 1;
        }
    }

    fn finish(mut self) -> Self {
        self.gross_total_hours = self.work_total_hours + self.side_job_total_hours;
        self.actual_work_hours =
            self.work_total_hours - self.break_total_hours - self.interrupt_total_hours;
        self
    }
}

fn fold(entries: &[DayEntry]) -> MonthAggregate {
    entries
        .iter()
        .fold(MonthAggregate::default(), |mut acc, e| {
            acc.add_day(&e.raw, &e.summary);
            acc
        })
        .finish()
}

/// Per-day entries for the given records, ascending by date whatever the
/// input order.
pub fn daily_entries(records: &[AttendanceRecord]) -> Vec<DayEntry> {
    let mut out: Vec<DayEntry> = records.iter().map(day::entry).collect();
    out.sort_by_key(|e| e.raw.date);
    out
}

/// Totals over the registered days only.
pub fn aggregate_sparse(records: &[AttendanceRecord]) -> MonthAggregate {
    fold(&daily_entries(records))
}

/// Totals over every calendar day of the month. Days without a record get
/// a zero-valued placeholder; records dated outside the month are ignored.
pub fn aggregate_full(year: i32, month: u32, records: &[AttendanceRecord]) -> FullMonth {
    let by_date: BTreeMap<NaiveDate, &AttendanceRecord> =
        records.iter().map(|r| (r.date, r)).collect();

    let days: Vec<DayEntry> = all_days_of_month(year, month)
        .into_iter()
        .map(|d| match by_date.get(&d) {
            Some(r) => day::entry(r),
            None => day::entry(&AttendanceRecord::placeholder(d)),
        })
        .collect();

    FullMonth {
        year,
        month,
        aggregate: fold(&days),
        days,
    }
}
