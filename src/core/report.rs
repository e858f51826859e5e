//! Read side: loads one month from the stores and runs the engine on it.

use crate::config::Config;
use crate::core::calculator::trend::month_trend;
use crate::core::calculator::{ForecastEngine, aggregate_full, aggregate_sparse, daily_entries, day};
use crate::db::pool::DbPool;
use crate::db::{attendance, holidays};
use crate::errors::{AppError, AppResult};
use crate::models::day_summary::DayEntry;
use crate::models::forecast::{ForecastPoint, ForecastResult, ThresholdBand};
use crate::models::month_aggregate::{FullMonth, MonthAggregate, MonthTrend};
use crate::utils::date::months_ending_at;
use chrono::NaiveDate;
use serde::Serialize;

/// Forecast as returned to the user: the engine result plus its place in
/// the configured target band.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastReport {
    pub month: String,
    #[serde(flatten)]
    pub result: ForecastResult,
    pub band: ThresholdBand,
    pub lower_threshold_hours: f64,
    pub upper_threshold_hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<Vec<ForecastPoint>>,
}

pub struct ReportLogic;

impl ReportLogic {
    /// Single-day lookup: a missing record is an error, not a zero day.
    pub fn day(pool: &DbPool, date: NaiveDate) -> AppResult<DayEntry> {
        let rec = attendance::get(&pool.conn, &date)?
            .ok_or_else(|| AppError::RecordNotFound(date.format("%Y-%m-%d").to_string()))?;
        Ok(day::entry(&rec))
    }

    pub fn daily(pool: &DbPool, year: i32, month: u32, full: bool) -> AppResult<Vec<DayEntry>> {
        let records = attendance::list(&pool.conn, year, month)?;
        if full {
            Ok(aggregate_full(year, month, &records).days)
        } else {
            Ok(daily_entries(&records))
        }
    }

    pub fn summary(pool: &DbPool, year: i32, month: u32) -> AppResult<MonthAggregate> {
        let records = attendance::list(&pool.conn, year, month)?;
        Ok(aggregate_sparse(&records))
    }

    pub fn full_month(pool: &DbPool, year: i32, month: u32) -> AppResult<FullMonth> {
        let records = attendance::list(&pool.conn, year, month)?;
        Ok(aggregate_full(year, month, &records))
    }

    pub fn forecast(
        pool: &DbPool,
        cfg: &Config,
        year: i32,
        month: u32,
        with_series: bool,
    ) -> AppResult<ForecastReport> {
        let records = attendance::list(&pool.conn, year, month)?;
        let hols = holidays::list(&pool.conn, year, month)?;

        let engine = ForecastEngine::new(cfg.forecast_hours_per_day);
        let result = engine.forecast(year, month, &records, &hols);

        let series = with_series.then(|| engine.series(year, month, &records, &hols));

        Ok(ForecastReport {
            month: format!("{year:04}-{month:02}"),
            band: ThresholdBand::classify(
                result.predicted_work_hours,
                cfg.lower_threshold_hours,
                cfg.upper_threshold_hours,
            ),
            result,
            lower_threshold_hours: cfg.lower_threshold_hours,
            upper_threshold_hours: cfg.upper_threshold_hours,
            series,
        })
    }

    /// `months` monthly points ending at (year, month), oldest first.
    pub fn trend(pool: &DbPool, year: i32, month: u32, months: u32) -> AppResult<Vec<MonthTrend>> {
        months_ending_at(year, month, months)
            .into_iter()
            .map(|(y, m)| {
                let records = attendance::list(&pool.conn, y, m)?;
                Ok(month_trend(y, m, &records))
            })
            .collect()
    }
}
