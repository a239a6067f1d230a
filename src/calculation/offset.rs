//! Timezone offset resolution.
//!
//! This module determines, for a given calendar date, the hour delta
//! between the remote-staff timezone and the facility timezone. The
//! facility timezone observes DST, so the delta must be recomputed per
//! date from the timezone database rather than hard-coded.

use chrono::{NaiveDate, Offset, TimeZone};
use chrono_tz::{OffsetComponents, Tz};
use tracing::debug;

use crate::config::ScheduleConfig;
use crate::error::{EngineError, EngineResult};

/// The probe hour used when resolving a date's UTC offset.
///
/// DST transitions occur at 2 AM facility-local time; probing local noon
/// keeps the lookup away from the ambiguous window.
const OFFSET_PROBE_HOUR: u32 = 12;

/// Source of the display-hour delta between the remote-staff timezone and
/// the facility timezone.
///
/// The grid engine consumes offsets exclusively through this trait, so
/// tests can substitute a fixed fake for the timezone database lookup.
pub trait OffsetSource {
    /// Resolves the delta in whole hours for the given calendar date.
    ///
    /// # Errors
    ///
    /// Returns `OffsetResolution` when the timezone database cannot
    /// produce an offset for the date.
    fn delta_hours(&self, date: NaiveDate) -> EngineResult<i32>;

    /// The delta that applies while the facility timezone is on its
    /// standard (non-DST) offset. Used as the degraded fallback when
    /// [`OffsetSource::delta_hours`] fails.
    fn standard_delta_hours(&self) -> i32;
}

/// Resolves display-hour deltas from the embedded timezone database.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::{OffsetSource, TzOffsetResolver};
/// use chrono::NaiveDate;
///
/// let resolver = TzOffsetResolver::new("America/Chicago".parse().unwrap(), -6, 8);
///
/// // January: US Central standard time, UTC-6, so the delta to UTC+8 is 14.
/// let winter = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// assert_eq!(resolver.delta_hours(winter).unwrap(), 14);
///
/// // July: US Central daylight time, UTC-5, so the delta is 13.
/// let summer = NaiveDate::from_ymd_opt(2024, 7, 10).unwrap();
/// assert_eq!(resolver.delta_hours(summer).unwrap(), 13);
/// ```
#[derive(Debug, Clone)]
pub struct TzOffsetResolver {
    facility: Tz,
    facility_standard_offset_hours: i32,
    remote_offset_hours: i32,
}

impl TzOffsetResolver {
    /// Creates a resolver for the given facility timezone and fixed remote
    /// UTC offset.
    pub fn new(facility: Tz, facility_standard_offset_hours: i32, remote_offset_hours: i32) -> Self {
        Self {
            facility,
            facility_standard_offset_hours,
            remote_offset_hours,
        }
    }

    /// Creates a resolver from a schedule configuration.
    ///
    /// # Errors
    ///
    /// Returns `ZoneNotFound` when the configured facility zone name is
    /// not in the timezone database.
    pub fn from_config(config: &ScheduleConfig) -> EngineResult<Self> {
        let facility: Tz =
            config
                .facility_zone
                .parse()
                .map_err(|_| EngineError::ZoneNotFound {
                    zone: config.facility_zone.clone(),
                })?;

        Ok(Self::new(
            facility,
            config.facility_standard_offset_hours,
            config.remote_offset_hours,
        ))
    }

    /// The facility timezone this resolver probes.
    pub fn facility_zone(&self) -> Tz {
        self.facility
    }

    /// Returns true when the facility timezone observes DST on the given
    /// date.
    ///
    /// # Errors
    ///
    /// Returns `OffsetResolution` when the timezone database cannot
    /// produce an offset for the date.
    pub fn is_dst(&self, date: NaiveDate) -> EngineResult<bool> {
        let offset = self.facility_offset(date)?;
        Ok(offset.dst_seconds != 0)
    }

    /// Probes the facility timezone's resolved offset at local noon of the
    /// given date.
    fn facility_offset(&self, date: NaiveDate) -> EngineResult<ResolvedOffset> {
        let unresolved = || EngineError::OffsetResolution {
            zone: self.facility.name().to_string(),
            date,
        };

        let probe = date
            .and_hms_opt(OFFSET_PROBE_HOUR, 0, 0)
            .ok_or_else(unresolved)?;

        let local = self
            .facility
            .from_local_datetime(&probe)
            .earliest()
            .ok_or_else(unresolved)?;

        let offset = local.offset();
        Ok(ResolvedOffset {
            total_seconds: offset.fix().local_minus_utc(),
            dst_seconds: offset.dst_offset().num_seconds(),
        })
    }
}

impl OffsetSource for TzOffsetResolver {
    fn delta_hours(&self, date: NaiveDate) -> EngineResult<i32> {
        let offset = self.facility_offset(date)?;
        let facility_hours = offset.total_seconds / 3600;
        let delta = self.remote_offset_hours - facility_hours;

        debug!(
            date = %date,
            facility_hours,
            delta,
            "resolved facility offset"
        );

        Ok(delta)
    }

    fn standard_delta_hours(&self) -> i32 {
        self.remote_offset_hours - self.facility_standard_offset_hours
    }
}

/// The facility timezone's offset for one probe instant.
struct ResolvedOffset {
    total_seconds: i32,
    dst_seconds: i64,
}
