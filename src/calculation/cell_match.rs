//! Shift-to-cell matching.
//!
//! This is the integration point of the engine: deciding whether a stored
//! shift occupies a given grid cell under the active display timezone.
//! Both the shift interval and the slot interval may wrap past midnight,
//! so every containment check here is wrap-aware.

use chrono::{Duration, NaiveDate, Timelike};
use tracing::warn;

use crate::error::EngineResult;
use crate::models::{DisplayDay, DisplaySlot, DisplayTimezone, ShiftRecord};

use super::offset::OffsetSource;
use super::slot_label::shifted_hour;

/// Wrap-aware half-open containment: is `hour` inside `[start, end)`?
///
/// When `start <= end` this is ordinary containment; otherwise the range
/// wraps past midnight and `hour` is inside when it falls on either side
/// of the wrap.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::hour_in_range;
///
/// assert!(hour_in_range(9, 8, 11));
/// assert!(!hour_in_range(11, 8, 11));
///
/// // Wrapped range 22..02 covers 23 and 1 but not 12.
/// assert!(hour_in_range(23, 22, 2));
/// assert!(hour_in_range(1, 22, 2));
/// assert!(!hour_in_range(12, 22, 2));
/// ```
pub fn hour_in_range(hour: u32, start: u32, end: u32) -> bool {
    if start <= end {
        start <= hour && hour < end
    } else {
        hour >= start || hour < end
    }
}

/// Decides whether a shift occupies the cell at (`day`, `slot`) under the
/// given display timezone and resolved delta.
///
/// The shift's stored hours are facility-local. Under remote display the
/// calendar day the shift renders on is re-derived by shifting the start
/// instant by the delta, and both the shift hours and the slot boundaries
/// are shifted into remote time before the overlap test. A
/// midnight-crossing shift additionally renders on the day after its
/// display date, catching the spillover segment.
///
/// # Errors
///
/// Returns `InvalidClockTime` when the shift's stored times are malformed.
pub fn occupies_cell(
    shift: &ShiftRecord,
    day: NaiveDate,
    slot: DisplaySlot,
    timezone: DisplayTimezone,
    delta: i32,
) -> EngineResult<bool> {
    let start = shift.start_clock()?;
    let end = shift.end_clock()?;

    let start_hour = start.hour();
    let end_hour = end.hour();
    let crosses_midnight = end_hour <= start_hour;

    let effective_delta = if timezone.is_remote() { delta } else { 0 };

    // Calendar day the shift's start lands on in the display timezone.
    let display_date =
        (shift.date.and_time(start) + Duration::hours(i64::from(effective_delta))).date();

    let intersects_day =
        display_date == day || (crosses_midnight && display_date.succ_opt() == Some(day));
    if !intersects_day {
        return Ok(false);
    }

    let shift_start = shifted_hour(start_hour, effective_delta);
    let shift_end = shifted_hour(end_hour, effective_delta);
    let slot_start = shifted_hour(slot.start_hour, effective_delta);
    let slot_end = shifted_hour(slot.end_hour, effective_delta);

    Ok(hour_in_range(slot_start, shift_start, shift_end)
        || hour_in_range(shift_start, slot_start, slot_end)
        || hour_in_range(shift_end, slot_start, slot_end))
}

/// Finds the employee occupying the cell at (`day`, `slot`), if any.
///
/// Shifts are tested in record order and the first occupant wins; further
/// occupants of the same cell are not reported. The delta is resolved per
/// shift date, falling back to the standard (non-DST) delta when the
/// timezone database cannot answer. A shift with malformed stored times
/// is skipped so one bad row cannot blank the whole grid.
pub fn match_cell<S: OffsetSource>(
    shifts: &[ShiftRecord],
    day: &DisplayDay,
    slot: DisplaySlot,
    timezone: DisplayTimezone,
    resolver: &S,
) -> Option<String> {
    for shift in shifts {
        let delta = if timezone.is_remote() {
            resolver.delta_hours(shift.date).unwrap_or_else(|err| {
                let fallback = resolver.standard_delta_hours();
                warn!(
                    error = %err,
                    fallback,
                    "timezone resolution failed, using standard offset"
                );
                fallback
            })
        } else {
            0
        };

        match occupies_cell(shift, day.date, slot, timezone, delta) {
            Ok(true) => return Some(shift.display_name().to_string()),
            Ok(false) => {}
            Err(err) => {
                warn!(
                    employee_id = %shift.employee_id,
                    error = %err,
                    "skipping shift with malformed stored time"
                );
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EngineError, EngineResult};

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_shift(name: &str, date: &str, start: &str, end: &str) -> ShiftRecord {
        ShiftRecord {
            employee_id: format!("emp_{}", name),
            employee_name: Some(name.to_string()),
            date: make_date(date),
            start_time: start.to_string(),
            end_time: end.to_string(),
        }
    }

    fn slot(start_hour: u32, end_hour: u32) -> DisplaySlot {
        DisplaySlot {
            start_hour,
            end_hour,
        }
    }

    /// Fake resolver with a constant delta, standing in for the timezone
    /// database.
    struct FixedDelta(i32);

    impl OffsetSource for FixedDelta {
        fn delta_hours(&self, _date: NaiveDate) -> EngineResult<i32> {
            Ok(self.0)
        }

        fn standard_delta_hours(&self) -> i32 {
            self.0
        }
    }

    /// Fake resolver whose lookups always fail, exercising the fallback.
    struct FailingSource {
        standard: i32,
    }

    impl OffsetSource for FailingSource {
        fn delta_hours(&self, date: NaiveDate) -> EngineResult<i32> {
            Err(EngineError::OffsetResolution {
                zone: "America/Chicago".to_string(),
                date,
            })
        }

        fn standard_delta_hours(&self) -> i32 {
            self.standard
        }
    }

    // ==========================================================================
    // CM-001: one-hour morning shift matches only the 08-11 band
    // ==========================================================================
    #[test]
    fn test_cm_001_morning_shift_matches_single_band() {
        let shift = make_shift("Ana", "2024-01-10", "09:00", "10:00");
        let day = make_date("2024-01-10");

        for s in crate::calculation::slot_catalog() {
            let expected = s.start_hour == 8;
            assert_eq!(
                occupies_cell(&shift, day, s, DisplayTimezone::Facility, 0).unwrap(),
                expected,
                "band {}",
                s
            );
        }
    }

    // ==========================================================================
    // CM-002: overnight shift occupies its evening bands on the shift date
    // ==========================================================================
    #[test]
    fn test_cm_002_overnight_shift_on_own_date() {
        let shift = make_shift("Ben", "2024-01-10", "22:00", "02:00");
        let day = make_date("2024-01-10");

        assert!(occupies_cell(&shift, day, slot(20, 23), DisplayTimezone::Facility, 0).unwrap());
        assert!(occupies_cell(&shift, day, slot(23, 2), DisplayTimezone::Facility, 0).unwrap());
        assert!(!occupies_cell(&shift, day, slot(8, 11), DisplayTimezone::Facility, 0).unwrap());
        assert!(!occupies_cell(&shift, day, slot(14, 17), DisplayTimezone::Facility, 0).unwrap());
    }

    // ==========================================================================
    // CM-003: overnight shift spills onto the following date
    // ==========================================================================
    #[test]
    fn test_cm_003_overnight_shift_spillover() {
        let shift = make_shift("Ben", "2024-01-10", "22:00", "02:00");
        let next_day = make_date("2024-01-11");

        assert!(
            occupies_cell(&shift, next_day, slot(2, 5), DisplayTimezone::Facility, 0).unwrap()
        );
        // The spillover never reaches days beyond the following one.
        let later = make_date("2024-01-12");
        assert!(!occupies_cell(&shift, later, slot(2, 5), DisplayTimezone::Facility, 0).unwrap());
    }

    // ==========================================================================
    // CM-004: non-crossing shift renders only on its own date
    // ==========================================================================
    #[test]
    fn test_cm_004_day_shift_only_on_own_date() {
        let shift = make_shift("Ana", "2024-01-10", "09:00", "17:00");

        for date in ["2024-01-09", "2024-01-11"] {
            for s in crate::calculation::slot_catalog() {
                assert!(
                    !occupies_cell(&shift, make_date(date), s, DisplayTimezone::Facility, 0)
                        .unwrap()
                );
            }
        }
    }

    // ==========================================================================
    // CM-005: remote display re-derives the calendar day from the start hour
    // ==========================================================================
    #[test]
    fn test_cm_005_remote_display_shifts_calendar_day() {
        // 22:00 + 14h lands at 12:00 on the following day remote-side.
        let shift = make_shift("Ben", "2024-01-10", "22:00", "02:00");

        let own_day = make_date("2024-01-10");
        let next_day = make_date("2024-01-11");

        // Displayed interval is 12..16; the remote-side rows covering it
        // are the converted 20-23 band (10..13) and 23-02 band (13..16).
        assert!(
            occupies_cell(&shift, next_day, slot(23, 2), DisplayTimezone::Remote, 14).unwrap()
        );
        assert!(
            occupies_cell(&shift, next_day, slot(20, 23), DisplayTimezone::Remote, 14).unwrap()
        );
        // Nothing renders on the facility date in remote view: the start
        // no longer lands there.
        assert!(!occupies_cell(&shift, own_day, slot(23, 2), DisplayTimezone::Remote, 14).unwrap());
    }

    // ==========================================================================
    // CM-006: remote display with a start hour that stays on the same date
    // ==========================================================================
    #[test]
    fn test_cm_006_remote_display_same_calendar_day() {
        // 09:00 + 14h = 23:00 on the same calendar day.
        let shift = make_shift("Ana", "2024-01-10", "09:00", "17:00");
        let day = make_date("2024-01-10");

        // Displayed interval is 23..07 (wrapped); converted 08-11 band is 22..01.
        assert!(occupies_cell(&shift, day, slot(8, 11), DisplayTimezone::Remote, 14).unwrap());
        // Converted 11-14 band is 01..04, inside the wrapped interval.
        assert!(occupies_cell(&shift, day, slot(11, 14), DisplayTimezone::Remote, 14).unwrap());
    }

    // ==========================================================================
    // CM-007: facility display ignores the delta entirely
    // ==========================================================================
    #[test]
    fn test_cm_007_facility_display_ignores_delta() {
        let shift = make_shift("Ana", "2024-01-10", "09:00", "10:00");
        let day = make_date("2024-01-10");

        assert_eq!(
            occupies_cell(&shift, day, slot(8, 11), DisplayTimezone::Facility, 14).unwrap(),
            occupies_cell(&shift, day, slot(8, 11), DisplayTimezone::Facility, 0).unwrap()
        );
    }

    // ==========================================================================
    // CM-008: malformed stored time is an error, not a panic
    // ==========================================================================
    #[test]
    fn test_cm_008_malformed_time_is_error() {
        let shift = make_shift("Bad", "2024-01-10", "9am", "17:00");
        let result = occupies_cell(
            &shift,
            make_date("2024-01-10"),
            slot(8, 11),
            DisplayTimezone::Facility,
            0,
        );
        assert!(matches!(result, Err(EngineError::InvalidClockTime { .. })));
    }

    #[test]
    fn test_hour_in_range_ordinary() {
        assert!(hour_in_range(8, 8, 11));
        assert!(hour_in_range(10, 8, 11));
        assert!(!hour_in_range(11, 8, 11));
        assert!(!hour_in_range(7, 8, 11));
    }

    #[test]
    fn test_hour_in_range_wrapped() {
        assert!(hour_in_range(22, 22, 2));
        assert!(hour_in_range(0, 22, 2));
        assert!(!hour_in_range(2, 22, 2));
        assert!(!hour_in_range(12, 22, 2));
    }

    #[test]
    fn test_match_cell_first_record_wins() {
        let shifts = vec![
            make_shift("First", "2024-01-10", "09:00", "10:00"),
            make_shift("Second", "2024-01-10", "09:30", "10:30"),
        ];
        let day = DisplayDay::from_date(make_date("2024-01-10"));

        let occupant = match_cell(
            &shifts,
            &day,
            slot(8, 11),
            DisplayTimezone::Facility,
            &FixedDelta(14),
        );
        assert_eq!(occupant.as_deref(), Some("First"));
    }

    #[test]
    fn test_match_cell_skips_malformed_shift() {
        let shifts = vec![
            make_shift("Broken", "2024-01-10", "9am", "17:00"),
            make_shift("Valid", "2024-01-10", "09:00", "10:00"),
        ];
        let day = DisplayDay::from_date(make_date("2024-01-10"));

        let occupant = match_cell(
            &shifts,
            &day,
            slot(8, 11),
            DisplayTimezone::Facility,
            &FixedDelta(14),
        );
        assert_eq!(occupant.as_deref(), Some("Valid"));
    }

    #[test]
    fn test_match_cell_empty_when_no_occupant() {
        let shifts = vec![make_shift("Ana", "2024-01-10", "09:00", "10:00")];
        let day = DisplayDay::from_date(make_date("2024-01-10"));

        let occupant = match_cell(
            &shifts,
            &day,
            slot(14, 17),
            DisplayTimezone::Facility,
            &FixedDelta(14),
        );
        assert!(occupant.is_none());
    }

    #[test]
    fn test_match_cell_absent_name_renders_unknown() {
        let mut shift = make_shift("Ana", "2024-01-10", "09:00", "10:00");
        shift.employee_name = None;
        let day = DisplayDay::from_date(make_date("2024-01-10"));

        let occupant = match_cell(
            &[shift],
            &day,
            slot(8, 11),
            DisplayTimezone::Facility,
            &FixedDelta(14),
        );
        assert_eq!(occupant.as_deref(), Some("Unknown"));
    }

    #[test]
    fn test_match_cell_falls_back_to_standard_delta() {
        // Resolution failure degrades to the standard delta instead of
        // dropping the shift.
        let shifts = vec![make_shift("Ben", "2024-01-10", "22:00", "02:00")];
        let day = DisplayDay::from_date(make_date("2024-01-11"));

        let occupant = match_cell(
            &shifts,
            &day,
            slot(23, 2),
            DisplayTimezone::Remote,
            &FailingSource { standard: 14 },
        );
        assert_eq!(occupant.as_deref(), Some("Ben"));
    }

    #[test]
    fn test_remote_and_facility_agree_on_physical_interval() {
        // The same wall-clock interval occupies the corresponding
        // converted cell after a timezone toggle plus date adjustment.
        let shift = make_shift("Ana", "2024-01-10", "09:00", "10:00");

        let facility_day = make_date("2024-01-10");
        assert!(
            occupies_cell(&shift, facility_day, slot(8, 11), DisplayTimezone::Facility, 0)
                .unwrap()
        );

        // Remote-side the start lands at 23:00 on the same calendar day;
        // the converted 08-11 row still holds the shift.
        assert!(
            occupies_cell(&shift, facility_day, slot(8, 11), DisplayTimezone::Remote, 14).unwrap()
        );
    }
}
