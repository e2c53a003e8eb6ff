//! Display formatting for table cells.

#[cfg(test)]
#[path = "fmt_test.rs"]
mod fmt_test;

use chrono::{DateTime, Utc};

/// Render an optional instant for a table cell; `-` when absent.
pub fn display_date(value: Option<DateTime<Utc>>) -> String {
    match value {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => "-".to_owned(),
    }
}
