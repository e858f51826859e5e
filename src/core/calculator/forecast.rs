use super::day::summarize;
use crate::models::attendance::AttendanceRecord;
use crate::models::forecast::{ForecastPoint, ForecastResult};
use crate::models::holiday::Holiday;
use crate::utils::date::{all_days_of_month, is_weekend};
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

pub const DEFAULT_HOURS_PER_DAY: f64 = 8.0;

/// Predicts the monthly total: actual hours where a day is registered, a
/// flat allowance for every other weekday that is not a holiday.
#[derive(Debug, Clone, Copy)]
pub struct ForecastEngine {
    pub hours_per_day: f64,
}

impl Default for ForecastEngine {
    fn default() -> Self {
        Self {
            hours_per_day: DEFAULT_HOURS_PER_DAY,
        }
    }
}

/// Classification of each calendar day of the month.
struct MonthPlan {
    dates: Vec<NaiveDate>,
    /// actual work hours of days with both start and end
    registered: BTreeMap<NaiveDate, f64>,
    holidays: BTreeSet<NaiveDate>,
}

impl MonthPlan {
    fn build(year: i32, month: u32, records: &[AttendanceRecord], holidays: &[Holiday]) -> Self {
        let dates = all_days_of_month(year, month);
        let in_month = |d: &NaiveDate| dates.binary_search(d).is_ok();

        let registered = records
            .iter()
            .filter(|r| in_month(&r.date) && r.has_work_span())
            .map(|r| (r.date, summarize(r).actual_work_hours))
            .collect();

        let holidays = holidays
            .iter()
            .map(|h| h.date)
            .filter(|d| in_month(d))
            .collect();

        Self {
            dates,
            registered,
            holidays,
        }
    }

    fn is_unregistered(&self, d: &NaiveDate) -> bool {
        !self.registered.contains_key(d) && !self.holidays.contains(d) && !is_weekend(*d)
    }
}

impl ForecastEngine {
    pub fn new(hours_per_day: f64) -> Self {
        Self { hours_per_day }
    }

    pub fn forecast(
        &self,
        year: i32,
        month: u32,
        records: &[AttendanceRecord],
        holidays: &[Holiday],
    ) -> ForecastResult {
        let plan = MonthPlan::build(year, month, records, holidays);

        let unregistered = plan
            .dates
            .iter()
            .filter(|d| plan.is_unregistered(d))
            .count() as u32;

        let registered_work_hours: f64 = plan.registered.values().sum();

        ForecastResult {
            registered_work_hours,
            predicted_work_hours: registered_work_hours
                + self.hours_per_day * f64::from(unregistered),
            unregistered_days: unregistered,
            holiday_days: plan.holidays.len() as u32,
        }
    }

    /// Running totals for every day of the month. The last forecast value
    /// equals `predicted_work_hours` of [`ForecastEngine::forecast`].
    pub fn series(
        &self,
        year: i32,
        month: u32,
        records: &[AttendanceRecord],
        holidays: &[Holiday],
    ) -> Vec<ForecastPoint> {
        let plan = MonthPlan::build(year, month, records, holidays);

        let mut actual = 0.0;
        let mut forecast = 0.0;

        plan.dates
            .iter()
            .map(|d| {
                if let Some(h) = plan.registered.get(d) {
                    actual += h;
                    forecast += h;
                } else if plan.is_unregistered(d) {
                    forecast += self.hours_per_day;
                }

                ForecastPoint {
                    date: *d,
                    actual_cumulative: actual,
                    forecast_cumulative: forecast,
                }
            })
            .collect()
    }
}

/// Forecast with the standard 8-hour allowance.
pub fn forecast(
    year: i32,
    month: u32,
    records: &[AttendanceRecord],
    holidays: &[Holiday],
) -> ForecastResult {
    ForecastEngine::default().forecast(year, month, records, holidays)
}
