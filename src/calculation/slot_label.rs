//! Slot header label rendering and timezone conversion.
//!
//! Facility-time headers use the 12-hour `"8 AM - 11 AM"` form; when the
//! grid is displayed in the remote-staff timezone, each boundary hour is
//! shifted by the resolved delta and re-rendered in the compact
//! `"10pm - 1am"` form.

use crate::error::{EngineError, EngineResult};
use crate::models::DisplaySlot;

use super::time_label::{hour_to_compact_label, hour_to_label, parse_label_to_hour};

/// Shifts a 24-hour value by a signed delta, wrapping at 24.
///
/// Negative results are normalised back into 0..24, so a shift of -14
/// from hour 3 lands on 13 rather than underflowing.
pub(crate) fn shifted_hour(hour: u32, delta: i32) -> u32 {
    (hour as i32 + delta).rem_euclid(24) as u32
}

/// Renders a slot's facility-time header label.
///
/// # Errors
///
/// Returns `HourOutOfRange` if the slot carries an invalid boundary hour.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::facility_label;
/// use roster_engine::models::DisplaySlot;
///
/// let slot = DisplaySlot { start_hour: 23, end_hour: 2 };
/// assert_eq!(facility_label(slot).unwrap(), "11 PM - 2 AM");
/// ```
pub fn facility_label(slot: DisplaySlot) -> EngineResult<String> {
    Ok(format!(
        "{} - {}",
        hour_to_label(slot.start_hour)?,
        hour_to_label(slot.end_hour)?
    ))
}

/// Rewrites a facility-time slot label into its remote-staff-time
/// equivalent for the given resolved delta.
///
/// Both boundary hours are parsed from the label, shifted by `delta`
/// modulo 24, and re-rendered compactly.
///
/// # Errors
///
/// Returns `InvalidTimeLabel` when the label is not two 12-hour labels
/// joined by `" - "`.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::convert_label;
///
/// // Standard-time delta for the US-Central / UTC+8 pairing.
/// assert_eq!(convert_label("11 PM - 2 AM", 14).unwrap(), "1pm - 4pm");
/// assert_eq!(convert_label("8 AM - 11 AM", 14).unwrap(), "10pm - 1am");
/// ```
pub fn convert_label(facility_slot_label: &str, delta: i32) -> EngineResult<String> {
    let (start_part, end_part) =
        facility_slot_label
            .split_once(" - ")
            .ok_or_else(|| EngineError::InvalidTimeLabel {
                label: facility_slot_label.to_string(),
            })?;

    let start = shifted_hour(parse_label_to_hour(start_part)?, delta);
    let end = shifted_hour(parse_label_to_hour(end_part)?, delta);

    Ok(format!(
        "{} - {}",
        hour_to_compact_label(start)?,
        hour_to_compact_label(end)?
    ))
}
