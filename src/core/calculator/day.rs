use crate::models::attendance::AttendanceRecord;
use crate::models::day_summary::{DayEntry, DaySummary};
use crate::utils::time::{hours_between, minutes_to_hours, parse_time_or_midnight};

/// Compute the summary of one day.
///
/// Never fails: missing or malformed fields contribute zero, except that a
/// present but malformed start/end reads as midnight.
pub fn summarize(record: &AttendanceRecord) -> DaySummary {
    // Work span (date-agnostic, no overnight handling)
    let work_hours = match record.work_span() {
        Some((start, end)) => hours_between(
            parse_time_or_midnight(Some(start)),
            parse_time_or_midnight(Some(end)),
        ),
        None => 0.0,
    };

    let break_hours = minutes_to_hours(record.break_minutes);

    // Overlapping or repeated interruptions are counted as many times as they appear.
    let interrupt_hours: f64 = record.interruptions.iter().map(|it| it.hours()).sum();

    let side_job_hours = minutes_to_hours(record.side_job_minutes);
    let break_total_hours = break_hours + interrupt_hours;

    DaySummary {
        work_hours,
        break_hours,
        interruptions_count: record.interruptions.len(),
        interrupt_hours,
        side_job_hours,
        break_total_hours,
        actual_work_hours: work_hours - break_total_hours,
        gross_hours: work_hours + side_job_hours - interrupt_hours,
    }
}

pub fn entry(record: &AttendanceRecord) -> DayEntry {
    DayEntry {
        raw: record.clone(),
        summary: summarize(record),
    }
}
