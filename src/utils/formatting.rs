//! Formatting utilities used for CLI and export outputs.

use super::time::round2;

/// Two-decimal hours, the way every figure leaves the program.
pub fn fmt_hours(h: f64) -> String {
    format!("{:.2}", round2(h))
}

/// 7.5 → "07h 30m", with an optional sign.
pub fn hours2readable(hours: f64, want_sign: bool) -> String {
    let mins = (hours * 60.0).round() as i64;
    let abs_m = mins.abs();

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 {
        "-"
    } else {
        ""
    };

    format!("{}{:02}h {:02}m", sign, abs_m / 60, abs_m % 60)
}

pub fn opt_text(v: Option<&str>) -> String {
    match v.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => "--:--".to_string(),
    }
}

pub fn opt_minutes(v: Option<u32>) -> String {
    match v {
        Some(m) => format!("{m} min"),
        None => "0 min".to_string(),
    }
}
