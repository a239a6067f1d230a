//! The in-process grid facade consumed by the view layer.
//!
//! [`RosterGrid`] bundles the calculation modules behind the small
//! surface the roster screen calls on every render: week days, slot rows
//! with display-timezone labels, per-cell occupancy, and week paging.
//! Every method is a pure function of its inputs; the grid holds no
//! per-render state.

use chrono::NaiveDate;
use tracing::warn;

use crate::calculation::{
    OffsetSource, TzOffsetResolver, advance_weeks, convert_label, facility_label, match_cell,
    slot_catalog, start_of_week, week_days,
};
use crate::config::ScheduleConfig;
use crate::error::EngineResult;
use crate::models::{DisplayDay, DisplaySlot, DisplayTimezone, ShiftRecord};

/// One row of the grid's time axis: a slot and its rendered header label
/// in the active display timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRow {
    /// The slot this row represents, facility-time hour boundaries.
    pub slot: DisplaySlot,
    /// The header label rendered for the active display timezone.
    pub label: String,
}

/// One fully-assembled row of a weekly grid: the slot row plus the seven
/// per-day occupants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekGridRow {
    /// The slot this row represents.
    pub slot: DisplaySlot,
    /// The rendered header label.
    pub label: String,
    /// Occupant names for Monday through Sunday; `None` renders empty.
    pub cells: Vec<Option<String>>,
}

/// A complete weekly grid: seven day columns and eight slot rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekGrid {
    /// The seven day columns, Monday through Sunday.
    pub days: Vec<DisplayDay>,
    /// The eight slot rows with their occupants.
    pub rows: Vec<WeekGridRow>,
}

/// The scheduling grid engine facade.
///
/// Generic over the offset source so tests can substitute a fixed fake
/// for the timezone database.
///
/// # Example
///
/// ```
/// use roster_engine::grid::RosterGrid;
/// use chrono::NaiveDate;
///
/// let grid = RosterGrid::with_defaults().unwrap();
/// let days = grid.week_days(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
/// assert_eq!(days.len(), 7);
/// assert_eq!(days[0].weekday_label, "Mon");
/// ```
#[derive(Debug, Clone)]
pub struct RosterGrid<S = TzOffsetResolver> {
    resolver: S,
}

impl RosterGrid<TzOffsetResolver> {
    /// Creates a grid engine from a schedule configuration.
    ///
    /// # Errors
    ///
    /// Returns `ZoneNotFound` when the configured facility zone is not in
    /// the timezone database.
    pub fn new(config: &ScheduleConfig) -> EngineResult<Self> {
        Ok(Self {
            resolver: TzOffsetResolver::from_config(config)?,
        })
    }

    /// Creates a grid engine with the production default configuration.
    ///
    /// # Errors
    ///
    /// Returns `ZoneNotFound` if the built-in default zone is missing
    /// from the timezone database.
    pub fn with_defaults() -> EngineResult<Self> {
        Self::new(&ScheduleConfig::default())
    }
}

impl<S: OffsetSource> RosterGrid<S> {
    /// Creates a grid engine around an explicit offset source.
    pub fn with_resolver(resolver: S) -> Self {
        Self { resolver }
    }

    /// Returns the seven display days of the week containing `reference`,
    /// Monday through Sunday.
    pub fn week_days(&self, reference: NaiveDate) -> Vec<DisplayDay> {
        week_days(start_of_week(reference))
    }

    /// Returns the start of the week after the one containing `reference`.
    pub fn next_week(&self, reference: NaiveDate) -> NaiveDate {
        advance_weeks(start_of_week(reference), 1)
    }

    /// Returns the start of the week before the one containing
    /// `reference`.
    pub fn previous_week(&self, reference: NaiveDate) -> NaiveDate {
        advance_weeks(start_of_week(reference), -1)
    }

    /// Returns the eight slot rows with header labels rendered for the
    /// given display timezone.
    ///
    /// Remote labels are converted once per render using the displayed
    /// week's start date; the same delta is reused for the whole visible
    /// week even if a DST transition falls inside it. A label that cannot
    /// be rendered degrades to the slot's numeric form rather than
    /// failing the grid.
    pub fn slot_rows(&self, timezone: DisplayTimezone, reference: NaiveDate) -> Vec<SlotRow> {
        let week_start = start_of_week(reference);
        let delta = if timezone.is_remote() {
            Some(self.delta_or_standard(week_start))
        } else {
            None
        };

        slot_catalog()
            .into_iter()
            .map(|slot| {
                let rendered = match delta {
                    None => facility_label(slot),
                    Some(delta) => {
                        facility_label(slot).and_then(|label| convert_label(&label, delta))
                    }
                };

                let label = rendered.unwrap_or_else(|err| {
                    warn!(slot = %slot, error = %err, "falling back to numeric slot label");
                    slot.to_string()
                });

                SlotRow { slot, label }
            })
            .collect()
    }

    /// Finds the employee name occupying the cell at (`day`, `slot`), if
    /// any.
    ///
    /// The first occupant in record order wins; shifts with malformed
    /// stored times are skipped.
    pub fn match_cell(
        &self,
        shifts: &[ShiftRecord],
        day: &DisplayDay,
        slot: DisplaySlot,
        timezone: DisplayTimezone,
    ) -> Option<String> {
        match_cell(shifts, day, slot, timezone, &self.resolver)
    }

    /// Assembles the complete weekly grid for the given shifts, display
    /// timezone, and reference date.
    pub fn render_week(
        &self,
        shifts: &[ShiftRecord],
        timezone: DisplayTimezone,
        reference: NaiveDate,
    ) -> WeekGrid {
        let days = self.week_days(reference);

        let rows = self
            .slot_rows(timezone, reference)
            .into_iter()
            .map(|row| {
                let cells = days
                    .iter()
                    .map(|day| self.match_cell(shifts, day, row.slot, timezone))
                    .collect();

                WeekGridRow {
                    slot: row.slot,
                    label: row.label,
                    cells,
                }
            })
            .collect();

        WeekGrid { days, rows }
    }

    /// Resolves the delta for a date, degrading to the standard (non-DST)
    /// delta when the timezone database cannot answer.
    fn delta_or_standard(&self, date: NaiveDate) -> i32 {
        self.resolver.delta_hours(date).unwrap_or_else(|err| {
            let fallback = self.resolver.standard_delta_hours();
            warn!(
                error = %err,
                fallback,
                "timezone resolution failed, using standard offset"
            );
            fallback
        })
    }
}
