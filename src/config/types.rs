//! Configuration types for the roster grid engine.
//!
//! This module contains the strongly-typed configuration structure that
//! is deserialized from the YAML configuration file.

use serde::Deserialize;

/// Timezone pairing for the roster grid.
///
/// The facility timezone is the one shift times are stored in and the one
/// that observes DST; the remote-staff timezone is a fixed UTC offset.
/// The standard offset is carried separately so the engine can degrade to
/// the non-DST delta when the timezone database cannot answer for a date.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScheduleConfig {
    /// IANA name of the facility timezone (e.g. "America/Chicago").
    pub facility_zone: String,
    /// The facility timezone's standard (non-DST) UTC offset in hours.
    pub facility_standard_offset_hours: i32,
    /// The remote-staff timezone's fixed UTC offset in hours.
    pub remote_offset_hours: i32,
}

impl Default for ScheduleConfig {
    /// The production pairing: US Central facility staff and remote staff
    /// on UTC+8.
    fn default() -> Self {
        Self {
            facility_zone: "America/Chicago".to_string(),
            facility_standard_offset_hours: -6,
            remote_offset_hours: 8,
        }
    }
}
