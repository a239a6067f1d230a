//! Shift record model.
//!
//! This module defines the ShiftRecord struct representing a stored shift
//! row as handed over by the persistence collaborator. The engine consumes
//! these records read-only and derives display values from them.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::calculation::parse_clock_string;
use crate::error::EngineResult;

/// Name rendered when the employee join produced no display name.
pub const UNKNOWN_EMPLOYEE_NAME: &str = "Unknown";

/// A stored shift as provided by the persistence collaborator.
///
/// The calendar date and the start/end wall-clock times are interpreted in
/// facility-local time. The stored `HH:MM` strings are parsed lazily; a
/// malformed value surfaces as an error at the point of use, never earlier.
///
/// # Example
///
/// ```
/// use roster_engine::models::ShiftRecord;
/// use chrono::NaiveDate;
///
/// let shift = ShiftRecord {
///     employee_id: "emp_001".to_string(),
///     employee_name: Some("R. Santos".to_string()),
///     date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
///     start_time: "22:00".to_string(),
///     end_time: "02:00".to_string(),
/// };
/// assert!(shift.crosses_midnight().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Opaque identifier of the employee working the shift.
    pub employee_id: String,
    /// Display name resolved by the collaborator join; absent when the
    /// employee record could not be joined.
    #[serde(default)]
    pub employee_name: Option<String>,
    /// The facility-local calendar date the shift belongs to.
    pub date: NaiveDate,
    /// Facility-local start time as a stored `HH:MM` string.
    pub start_time: String,
    /// Facility-local end time as a stored `HH:MM` string.
    pub end_time: String,
}

impl ShiftRecord {
    /// Parses the stored start time.
    ///
    /// # Errors
    ///
    /// Returns `InvalidClockTime` if the stored string is not `HH:MM`.
    pub fn start_clock(&self) -> EngineResult<NaiveTime> {
        parse_clock_string(&self.start_time)
    }

    /// Parses the stored end time.
    ///
    /// # Errors
    ///
    /// Returns `InvalidClockTime` if the stored string is not `HH:MM`.
    pub fn end_clock(&self) -> EngineResult<NaiveTime> {
        parse_clock_string(&self.end_time)
    }

    /// Returns true if the shift spans into the following facility-local
    /// calendar date.
    ///
    /// A shift crosses midnight when its end hour is numerically less than
    /// or equal to its start hour. The comparison is on hour fields only;
    /// minutes are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_engine::models::ShiftRecord;
    /// use chrono::NaiveDate;
    ///
    /// let shift = ShiftRecord {
    ///     employee_id: "emp_001".to_string(),
    ///     employee_name: None,
    ///     date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
    ///     start_time: "09:00".to_string(),
    ///     end_time: "17:00".to_string(),
    /// };
    /// assert!(!shift.crosses_midnight().unwrap());
    /// ```
    pub fn crosses_midnight(&self) -> EngineResult<bool> {
        Ok(self.end_clock()?.hour() <= self.start_clock()?.hour())
    }

    /// Returns the name to render for this shift's employee.
    ///
    /// Falls back to [`UNKNOWN_EMPLOYEE_NAME`] when the collaborator join
    /// produced no display name. The model itself keeps the explicit
    /// option; the sentinel exists only at the render edge.
    pub fn display_name(&self) -> &str {
        self.employee_name.as_deref().unwrap_or(UNKNOWN_EMPLOYEE_NAME)
    }
}
