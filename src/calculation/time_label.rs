//! Time label parsing and formatting.
//!
//! This module converts between the human-readable labels used on the
//! grid's time axis and 24-hour hour values, and parses the `HH:MM`
//! strings shift times are stored as.

use chrono::NaiveTime;

use crate::error::{EngineError, EngineResult};

/// Parses a 12-hour label such as `"8 AM"` or `"11 PM"` into a 24-hour
/// hour value.
///
/// `"12 AM"` maps to 0 (midnight) and `"12 PM"` to 12 (noon); other AM
/// hours pass through unchanged and PM hours gain 12. The AM/PM marker is
/// matched case-insensitively.
///
/// # Errors
///
/// Returns `InvalidTimeLabel` when the label is not `"<hour> <AM|PM>"`
/// with an hour in 1..=12.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::parse_label_to_hour;
///
/// assert_eq!(parse_label_to_hour("12 AM").unwrap(), 0);
/// assert_eq!(parse_label_to_hour("12 PM").unwrap(), 12);
/// assert_eq!(parse_label_to_hour("8 AM").unwrap(), 8);
/// assert_eq!(parse_label_to_hour("11 PM").unwrap(), 23);
/// ```
pub fn parse_label_to_hour(label: &str) -> EngineResult<u32> {
    let invalid = || EngineError::InvalidTimeLabel {
        label: label.to_string(),
    };

    let parts: Vec<&str> = label.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(invalid());
    }

    let hour: u32 = parts[0].parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&hour) {
        return Err(invalid());
    }

    if parts[1].eq_ignore_ascii_case("AM") {
        Ok(if hour == 12 { 0 } else { hour })
    } else if parts[1].eq_ignore_ascii_case("PM") {
        Ok(if hour == 12 { 12 } else { hour + 12 })
    } else {
        Err(invalid())
    }
}

/// Renders a 24-hour hour value as the 12-hour label used on facility-time
/// slot headers, the inverse of [`parse_label_to_hour`].
///
/// # Errors
///
/// Returns `HourOutOfRange` when `hour` is 24 or more.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::hour_to_label;
///
/// assert_eq!(hour_to_label(0).unwrap(), "12 AM");
/// assert_eq!(hour_to_label(12).unwrap(), "12 PM");
/// assert_eq!(hour_to_label(23).unwrap(), "11 PM");
/// ```
pub fn hour_to_label(hour: u32) -> EngineResult<String> {
    if hour > 23 {
        return Err(EngineError::HourOutOfRange { hour });
    }

    Ok(match hour {
        0 => "12 AM".to_string(),
        12 => "12 PM".to_string(),
        h if h < 12 => format!("{} AM", h),
        h => format!("{} PM", h - 12),
    })
}

/// Renders a 24-hour hour value as the compact label used on remote-time
/// slot headers.
///
/// Midnight renders as `"12mn"` and noon as `"12nn"`; other hours render
/// as `"{h}am"` / `"{h}pm"`.
///
/// # Errors
///
/// Returns `HourOutOfRange` when `hour` is 24 or more.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::hour_to_compact_label;
///
/// assert_eq!(hour_to_compact_label(0).unwrap(), "12mn");
/// assert_eq!(hour_to_compact_label(12).unwrap(), "12nn");
/// assert_eq!(hour_to_compact_label(8).unwrap(), "8am");
/// assert_eq!(hour_to_compact_label(16).unwrap(), "4pm");
/// ```
pub fn hour_to_compact_label(hour: u32) -> EngineResult<String> {
    if hour > 23 {
        return Err(EngineError::HourOutOfRange { hour });
    }

    Ok(match hour {
        0 => "12mn".to_string(),
        12 => "12nn".to_string(),
        h if h < 12 => format!("{}am", h),
        h => format!("{}pm", h - 12),
    })
}

/// Parses a stored `"HH:MM"` clock string.
///
/// # Errors
///
/// Returns `InvalidClockTime` when the value does not parse as a 24-hour
/// `HH:MM` time.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::parse_clock_string;
/// use chrono::Timelike;
///
/// let time = parse_clock_string("22:30").unwrap();
/// assert_eq!(time.hour(), 22);
/// assert_eq!(time.minute(), 30);
/// ```
pub fn parse_clock_string(value: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| EngineError::InvalidClockTime {
        value: value.to_string(),
    })
}
