pub mod add;
pub mod backup;
pub mod calculator;
pub mod del;
pub mod holiday;
pub mod log;
pub mod report;
