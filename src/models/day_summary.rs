use super::attendance::AttendanceRecord;
use crate::utils::time::serialize_hours;
use serde::Serialize;

/// Derived figures for one day. Values keep full precision; rounding to
/// two decimals happens only when the summary is serialized or printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DaySummary {
    #[serde(serialize_with = "serialize_hours")]
    pub work_hours: f64,
    #[serde(serialize_with = "serialize_hours")]
    pub break_hours: f64,
    pub interruptions_count: usize,
    #[serde(serialize_with = "serialize_hours")]
    pub interrupt_hours: f64,
    #[serde(serialize_with = "serialize_hours")]
    pub side_job_hours: f64,
    #[serde(serialize_with = "serialize_hours")]
    pub break_total_hours: f64,
    #[serde(serialize_with = "serialize_hours")]
    pub actual_work_hours: f64,
    #[serde(serialize_with = "serialize_hours")]
    pub gross_hours: f64,
}

/// A record together with its summary, the unit of every per-day listing.
#[derive(Debug, Clone, Serialize)]
pub struct DayEntry {
    pub raw: AttendanceRecord,
    pub summary: DaySummary,
}
