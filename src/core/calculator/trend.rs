use super::month::aggregate_sparse;
use crate::models::attendance::AttendanceRecord;
use crate::models::month_aggregate::MonthTrend;

/// Trend point of one month, from the same aggregate as the monthly summary.
pub fn month_trend(year: i32, month: u32, records: &[AttendanceRecord]) -> MonthTrend {
    let agg = aggregate_sparse(records);

    MonthTrend {
        month: format!("{year:04}-{month:02}"),
        work_days: agg.work_days,
        actual_work_hours: agg.actual_work_hours,
    }
}
