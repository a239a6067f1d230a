//! Error types for the roster grid engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing the grid.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the roster grid engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use roster_engine::error::EngineError;
///
/// let error = EngineError::InvalidTimeLabel {
///     label: "25 XM".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time label: 25 XM");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A 12-hour time label could not be parsed.
    #[error("Invalid time label: {label}")]
    InvalidTimeLabel {
        /// The label that failed to parse.
        label: String,
    },

    /// A stored clock time string was not in `HH:MM` form.
    #[error("Invalid clock time '{value}': expected HH:MM")]
    InvalidClockTime {
        /// The value that failed to parse.
        value: String,
    },

    /// An hour value was outside the 24-hour range.
    #[error("Hour out of range: {hour}")]
    HourOutOfRange {
        /// The offending hour value.
        hour: u32,
    },

    /// A configured timezone name was not found in the timezone database.
    #[error("Unknown timezone: {zone}")]
    ZoneNotFound {
        /// The timezone name that was not recognised.
        zone: String,
    },

    /// The UTC offset of the facility timezone could not be resolved.
    #[error("Could not resolve UTC offset for timezone '{zone}' on {date}")]
    OffsetResolution {
        /// The timezone whose offset was requested.
        zone: String,
        /// The date for which resolution failed.
        date: NaiveDate,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
