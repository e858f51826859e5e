use chrono::NaiveDate;
use serde::Serialize;

/// A named non-working day. At most one per date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Holiday {
    pub id: i64,
    pub date: NaiveDate, // ⇔ holidays.date (TEXT "YYYY-MM-DD", UNIQUE)
    pub name: String,
}

impl Holiday {
    pub fn new(date: NaiveDate, name: &str) -> Self {
        Self {
            id: 0,
            date,
            name: name.to_string(),
        }
    }
}
