use crate::utils::time::serialize_hours;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastResult {
    #[serde(serialize_with = "serialize_hours")]
    pub registered_work_hours: f64,
    #[serde(serialize_with = "serialize_hours")]
    pub predicted_work_hours: f64,
    pub unregistered_days: u32,
    pub holiday_days: u32,
}

/// Where a predicted monthly total sits against the configured target band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdBand {
    Below,
    Within,
    Above,
}

impl ThresholdBand {
    pub fn classify(hours: f64, lower: f64, upper: f64) -> Self {
        if hours < lower {
            ThresholdBand::Below
        } else if hours > upper {
            ThresholdBand::Above
        } else {
            ThresholdBand::Within
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThresholdBand::Below => "below",
            ThresholdBand::Within => "within",
            ThresholdBand::Above => "above",
        }
    }
}

/// One day of the cumulative actual/forecast series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    #[serde(serialize_with = "serialize_hours")]
    pub actual_cumulative: f64,
    #[serde(serialize_with = "serialize_hours")]
    pub forecast_cumulative: f64,
}
