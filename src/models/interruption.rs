use crate::utils::time::{hours_between, parse_time};
use serde::{Deserialize, Serialize};

/// A stretch of non-work time inside the work span (stepping away),
/// kept apart from the scheduled break.
///
/// Both sides are stored as entered ("HH:MM"). Nothing checks that the
/// interval lies inside start/end or that intervals do not overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Interruption {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

impl Interruption {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: Some(start.to_string()),
            end: Some(end.to_string()),
        }
    }

    /// Parse the CLI form `HH:MM-HH:MM`.
    pub fn from_range(s: &str) -> Option<Self> {
        let (start, end) = s.split_once('-')?;
        let start = parse_time(start.trim())?;
        let end = parse_time(end.trim())?;

        Some(Self {
            start: Some(start.format("%H:%M").to_string()),
            end: Some(end.format("%H:%M").to_string()),
        })
    }

    /// Length in hours. A side that is missing or not a valid "HH:MM"
    /// makes the whole interruption count as zero.
    pub fn hours(&self) -> f64 {
        let start = self.start.as_deref().and_then(parse_time);
        let end = self.end.as_deref().and_then(parse_time);

        match (start, end) {
            (Some(s), Some(e)) => hours_between(s, e),
            _ => 0.0,
        }
    }

    pub fn label(&self) -> String {
        format!(
            "{}-{}",
            self.start.as_deref().unwrap_or("--:--"),
            self.end.as_deref().unwrap_or("--:--")
        )
    }
}
