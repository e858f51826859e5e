use super::day_summary::DayEntry;
use crate::utils::time::serialize_hours;
use serde::Serialize;

/// Month-level totals, all in hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MonthAggregate {
    #[serde(serialize_with = "serialize_hours")]
    pub work_total_hours: f64,
    #[serde(serialize_with = "serialize_hours")]
    pub break_total_hours: f64,
    #[serde(serialize_with = "serialize_hours")]
    pub interrupt_total_hours: f64,
    #[serde(serialize_with = "serialize_hours")]
    pub side_job_total_hours: f64,
    /// work + side job (interruptions are not subtracted here)
    #[serde(serialize_with = "serialize_hours")]
    pub gross_total_hours: f64,
    /// work - break - interruptions
    #[serde(serialize_with = "serialize_hours")]
    pub actual_work_hours: f64,
    pub work_days: u32,
    pub gross_days: u32,
}

/// Every calendar day of a month, gaps filled with zero-valued entries.
#[derive(Debug, Clone, Serialize)]
pub struct FullMonth {
    pub year: i32,
    pub month: u32,
    pub aggregate: MonthAggregate,
    pub days: Vec<DayEntry>,
}

/// One step of the rolling trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthTrend {
    pub month: String, // "YYYY-MM"
    pub work_days: u32,
    #[serde(serialize_with = "serialize_hours")]
    pub actual_work_hours: f64,
}
