//! Time aggregation engine.
//!
//! Pure functions over in-memory records of one month: no I/O, no shared
//! state. Every month-level figure is built from per-day summaries so that
//! one formula is used everywhere.

pub mod day;
pub mod forecast;
pub mod month;
pub mod trend;

pub use day::summarize;
pub use forecast::{ForecastEngine, forecast};
pub use month::{aggregate_full, aggregate_sparse, daily_entries};
