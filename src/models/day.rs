//! Display day model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single column of the weekly grid: a calendar date plus its short
/// weekday label.
///
/// # Example
///
/// ```
/// use roster_engine::models::DisplayDay;
/// use chrono::NaiveDate;
///
/// // 2024-01-08 is a Monday
/// let day = DisplayDay::from_date(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
/// assert_eq!(day.weekday_label, "Mon");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayDay {
    /// The calendar date of this grid column.
    pub date: NaiveDate,
    /// Short weekday label, `"Mon"` through `"Sun"`.
    pub weekday_label: String,
}

impl DisplayDay {
    /// Builds a display day for the given date, deriving the label.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            date,
            weekday_label: date.format("%a").to_string(),
        }
    }
}
