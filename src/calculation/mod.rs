//! Calculation logic for the roster grid engine.
//!
//! This module contains the timezone-aware computations behind the weekly
//! grid: time label parsing and formatting, UTC offset resolution for the
//! facility timezone, the fixed slot catalogue, slot header conversion,
//! the Monday-aligned week window, and shift-to-cell matching with
//! midnight-wrap handling.

mod cell_match;
mod offset;
mod slot_catalog;
mod slot_label;
mod time_label;
mod week_window;

pub use cell_match::{hour_in_range, match_cell, occupies_cell};
pub use offset::{OffsetSource, TzOffsetResolver};
pub use slot_catalog::{SLOT_ANCHOR_HOUR, SLOT_COUNT, SLOT_SPAN_HOURS, slot_catalog};
pub use slot_label::{convert_label, facility_label};
pub use time_label::{
    hour_to_compact_label, hour_to_label, parse_clock_string, parse_label_to_hour,
};
pub use week_window::{advance_weeks, start_of_week, week_days};
