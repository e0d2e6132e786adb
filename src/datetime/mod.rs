//! Epoch timestamp and ISO-8601 conversion
//!
//! String-in, string-out converters: numeric epoch values (seconds or
//! milliseconds, auto-detected) to ISO-8601 UTC text and back. Inputs and
//! outputs stay strings so callers can round-trip values through text fields
//! without precision surprises.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use crate::error::{DevKitError, Result};

/// Epoch values above this are already milliseconds
const MILLIS_THRESHOLD: f64 = 1e12;

/// Widest millisecond offset a date value may hold
const MAX_EPOCH_MILLIS: f64 = 8.64e15;

/// Convert a numeric epoch timestamp to ISO-8601 UTC text
///
/// The input is trimmed and parsed as a number; an empty string parses as
/// zero. Values above 1e12 are taken as milliseconds, anything else as
/// seconds and scaled. Non-finite values and values outside the
/// representable date range fail with [`DevKitError::InvalidTimestamp`].
///
/// # Example
///
/// ```rust
/// use devkit_core::datetime::timestamp_to_iso;
///
/// assert_eq!(timestamp_to_iso("1609459200").unwrap(), "2021-01-01T00:00:00.000Z");
/// assert_eq!(timestamp_to_iso("1609459200000").unwrap(), "2021-01-01T00:00:00.000Z");
/// ```
pub fn timestamp_to_iso(value: &str) -> Result<String> {
    let trimmed = value.trim();
    let n: f64 = if trimmed.is_empty() {
        0.0
    } else {
        trimmed.parse().map_err(|_| DevKitError::InvalidTimestamp)?
    };
    if !n.is_finite() {
        return Err(DevKitError::InvalidTimestamp);
    }

    let ms = if n > MILLIS_THRESHOLD { n } else { n * 1000.0 };
    if ms.abs() > MAX_EPOCH_MILLIS {
        return Err(DevKitError::InvalidTimestamp);
    }

    let datetime = DateTime::from_timestamp_millis(ms.trunc() as i64)
        .ok_or(DevKitError::InvalidTimestamp)?;
    Ok(datetime.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Convert a date string to epoch milliseconds, as a decimal string
///
/// Accepts RFC 3339 text with an offset or `Z`, a zone-less datetime with
/// `T` or space separator and optional fractional seconds, or a bare date.
/// Zone-less inputs are pinned to UTC. Anything else fails with
/// [`DevKitError::InvalidDate`].
pub fn iso_to_timestamp(value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DevKitError::InvalidDate);
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(datetime.timestamp_millis().to_string());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(naive.and_utc().timestamp_millis().to_string());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0).ok_or(DevKitError::InvalidDate)?;
        return Ok(midnight.and_utc().timestamp_millis().to_string());
    }

    Err(DevKitError::InvalidDate)
}

/// Current time as epoch milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
