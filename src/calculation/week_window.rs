//! Week window computation.
//!
//! The grid always shows a Monday-start 7-day window. All date arithmetic
//! here is pure value arithmetic on `NaiveDate`; nothing mutates a shared
//! date in place.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::DisplayDay;

/// Returns the Monday on or before the given date.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::start_of_week;
/// use chrono::NaiveDate;
///
/// // 2024-01-10 is a Wednesday; its week starts Monday 2024-01-08.
/// let wednesday = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// let monday = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
/// assert_eq!(start_of_week(wednesday), monday);
/// ```
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    // Weekday indexed Sunday=0..Saturday=6; Sunday belongs to the week
    // that started six days earlier.
    let days_back = match date.weekday().num_days_from_sunday() {
        0 => 6,
        n => i64::from(n) - 1,
    };
    date - Duration::days(days_back)
}

/// Moves a week-start date forward or backward by whole weeks.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::advance_weeks;
/// use chrono::NaiveDate;
///
/// let monday = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
/// let next = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// assert_eq!(advance_weeks(monday, 1), next);
/// assert_eq!(advance_weeks(next, -1), monday);
/// ```
pub fn advance_weeks(week_start: NaiveDate, weeks: i64) -> NaiveDate {
    week_start + Duration::days(7 * weeks)
}

/// Produces the seven display days of the week starting at `week_start`,
/// Monday through Sunday.
pub fn week_days(week_start: NaiveDate) -> Vec<DisplayDay> {
    (0..7)
        .map(|i| DisplayDay::from_date(week_start + Duration::days(i)))
        .collect()
}
