//! Display timezone selection.

use serde::{Deserialize, Serialize};

/// The timezone a grid is currently rendered in.
///
/// The system offers exactly two: the facility timezone in which shifts
/// are stored, and the fixed remote-staff timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayTimezone {
    /// The timezone shift times are stored in; observes DST.
    Facility,
    /// The secondary timezone offered for display; fixed UTC offset.
    Remote,
}

impl DisplayTimezone {
    /// Returns the other display timezone.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_engine::models::DisplayTimezone;
    ///
    /// assert_eq!(DisplayTimezone::Facility.toggle(), DisplayTimezone::Remote);
    /// assert_eq!(DisplayTimezone::Remote.toggle(), DisplayTimezone::Facility);
    /// ```
    pub fn toggle(self) -> Self {
        match self {
            DisplayTimezone::Facility => DisplayTimezone::Remote,
            DisplayTimezone::Remote => DisplayTimezone::Facility,
        }
    }

    /// Returns true when this is the remote-staff timezone.
    pub fn is_remote(self) -> bool {
        self == DisplayTimezone::Remote
    }
}

impl std::fmt::Display for DisplayTimezone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayTimezone::Facility => write!(f, "Facility"),
            DisplayTimezone::Remote => write!(f, "Remote"),
        }
    }
}
