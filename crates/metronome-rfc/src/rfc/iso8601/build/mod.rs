//! Interval serialization.
//!
//! Each serializer reproduces the textual shape the value was constructed
//! from, using the interval's recorded format. Serializing a parsed value
//! therefore yields the original string for canonical input.

use chrono::{SecondsFormat, TimeDelta};
use metronome_core::constants::{DAYS_PER_WEEK, SECONDS_PER_DAY};
use metronome_core::types::Timestamp;
use thiserror::Error;

use crate::rfc::iso8601::core::{Interval, IntervalFormat, Repeating};

/// An error that occurred while serializing an interval.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("duration is negative: {0}")]
    Negative(TimeDelta),

    #[error("duration is not a whole number of days: {0}")]
    SubDayPrecision(TimeDelta),
}

/// Result type for interval serialization operations.
pub type BuildResult<T> = Result<T, BuildError>;

/// Serializes a timestamp as a strict RFC 3339 offset timestamp.
///
/// Fractional seconds are kept when present (in milli, micro, or nano
/// groups) and omitted entirely when zero; a zero offset is written as `Z`.
#[must_use]
pub fn serialize_timestamp(t: Timestamp) -> String {
    t.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Serializes a duration as a `P<n>W`/`P<n>D` token.
///
/// Exact multiples of a week serialize as weeks, everything else as days,
/// and the zero duration as `P0D`. Decoding the result always yields the
/// input value back.
///
/// ## Errors
/// Returns an error for negative durations (the grammar has none) and for
/// durations that are not a whole number of days (the grammar cannot
/// represent them; failing beats silently truncating).
pub fn serialize_duration(duration: TimeDelta) -> BuildResult<String> {
    if duration < TimeDelta::zero() {
        return Err(BuildError::Negative(duration));
    }
    if duration.subsec_nanos() != 0 || duration.num_seconds() % SECONDS_PER_DAY != 0 {
        return Err(BuildError::SubDayPrecision(duration));
    }

    let days = duration.num_days();
    if days == 0 {
        return Ok("P0D".to_owned());
    }
    if days % DAYS_PER_WEEK == 0 {
        return Ok(format!("P{}W", days / DAYS_PER_WEEK));
    }
    Ok(format!("P{days}D"))
}

/// Serializes an interval in the shape it was constructed from.
///
/// ## Errors
/// Returns an error only if the interval's duration side cannot be encoded
/// (see [`serialize_duration`]).
pub fn serialize_interval(interval: &Interval) -> BuildResult<String> {
    let s = match interval.format() {
        IntervalFormat::TimeAndTime => format!(
            "{}/{}",
            serialize_timestamp(interval.starts_at()),
            serialize_timestamp(interval.ends_at())
        ),
        IntervalFormat::TimeAndDuration => format!(
            "{}/{}",
            serialize_timestamp(interval.starts_at()),
            serialize_duration(interval.duration())?
        ),
        IntervalFormat::DurationAndTime => format!(
            "{}/{}",
            serialize_duration(interval.duration())?,
            serialize_timestamp(interval.ends_at())
        ),
    };
    Ok(s)
}

/// Serializes a repeating interval as `R[<count>]/<Interval>`.
///
/// ## Errors
/// Returns an error only if the wrapped interval cannot be serialized.
pub fn serialize_repeating(repeating: &Repeating) -> BuildResult<String> {
    let interval = serialize_interval(repeating.interval())?;
    match repeating.repetitions() {
        Some(count) => Ok(format!("R{count}/{interval}")),
        None => Ok(format!("R/{interval}")),
    }
}
