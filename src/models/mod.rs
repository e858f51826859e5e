pub mod attendance;
pub mod day_summary;
pub mod forecast;
pub mod holiday;
pub mod interruption;
pub mod month_aggregate;
