/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

use crate::models::forecast::ThresholdBand;

/// Grey out placeholders ("--:--", "0 min", "0.00").
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--:--" || v == "0 min" || v == "0.00" || v == "00h 00m" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Below the band → red, above → yellow, inside → green.
pub fn color_for_band(band: ThresholdBand) -> &'static str {
    match band {
        ThresholdBand::Below => RED,
        ThresholdBand::Within => GREEN,
        ThresholdBand::Above => YELLOW,
    }
}

/// Negative actual hours mean a misconfigured day.
pub fn color_for_hours(h: f64) -> &'static str {
    if h < 0.0 { RED } else { RESET }
}
