//! Display slot model.

use serde::{Deserialize, Serialize};

/// A 3-hour band on the grid's time axis.
///
/// The hour boundaries are expressed in whichever timezone is currently
/// being displayed; only the labels change under conversion, the catalogue
/// of slots itself is fixed.
///
/// # Example
///
/// ```
/// use roster_engine::models::DisplaySlot;
///
/// let slot = DisplaySlot {
///     start_hour: 23,
///     end_hour: 2,
/// };
/// assert_eq!(format!("{}", slot), "23-02");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplaySlot {
    /// Inclusive start hour of the band, 24-hour form.
    pub start_hour: u32,
    /// Exclusive end hour of the band, 24-hour form. Numerically smaller
    /// than `start_hour` for the bands that wrap past midnight.
    pub end_hour: u32,
}

impl std::fmt::Display for DisplaySlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.start_hour, self.end_hour)
    }
}
