//! The fixed catalogue of display slots.
//!
//! The grid's time axis is a product decision: eight contiguous 3-hour
//! bands starting at the facility's 8 AM opening hour and wrapping past
//! midnight back to 8 AM. The ordering must be preserved exactly for UI
//! compatibility.

use crate::models::DisplaySlot;

/// Number of slots on the grid's time axis.
pub const SLOT_COUNT: usize = 8;

/// Width of each slot in hours.
pub const SLOT_SPAN_HOURS: u32 = 3;

/// Facility-local hour the first slot starts at.
pub const SLOT_ANCHOR_HOUR: u32 = 8;

/// Produces the ordered slot catalogue in facility-time hour boundaries.
///
/// The sequence is identical for every week and both display timezones;
/// only the labels change under conversion.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::slot_catalog;
///
/// let slots = slot_catalog();
/// assert_eq!(slots.len(), 8);
/// assert_eq!(slots[0].start_hour, 8);
/// assert_eq!(slots[5].start_hour, 23);
/// assert_eq!(slots[5].end_hour, 2);
/// ```
pub fn slot_catalog() -> Vec<DisplaySlot> {
    (0..SLOT_COUNT as u32)
        .map(|i| DisplaySlot {
            start_hour: (SLOT_ANCHOR_HOUR + i * SLOT_SPAN_HOURS) % 24,
            end_hour: (SLOT_ANCHOR_HOUR + (i + 1) * SLOT_SPAN_HOURS) % 24,
        })
        .collect()
}
