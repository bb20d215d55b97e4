//! Token parsers for the interval grammar.

use chrono::{DateTime, TimeDelta};
use metronome_core::constants::DAYS_PER_WEEK;
use metronome_core::types::Timestamp;

use super::error::{ParseError, ParseErrorKind, ParseResult};

/// Parses a strict RFC 3339 offset timestamp.
///
/// Format: `YYYY-MM-DDTHH:MM:SS[.fff](Z|+HH:MM|-HH:MM)`
/// (e.g., "2019-01-02T21:00:00Z")
///
/// ## Errors
/// Returns an error if the string does not match this exact shape. The
/// strictness is load-bearing: the interval parser uses it to tell
/// timestamp parts from malformed input.
pub fn parse_timestamp(s: &str) -> ParseResult<Timestamp> {
    DateTime::parse_from_rfc3339(s).map_err(|e| {
        ParseError::new(
            ParseErrorKind::UnknownPart,
            format!("not a timestamp ({e}): {s}"),
        )
    })
}

/// Parses a duration token.
///
/// Format: `P` followed by one or more `<count><unit>` groups with
/// `unit` in `{W, D}` (e.g., "P1W", "P10D", "P1W3D"). A bare unit letter
/// counts as 1, so "PW" is one week.
///
/// ## Errors
/// Returns an error if the marker is missing, a unit letter is not
/// recognized, the digit sequence is malformed or out of range, or digits
/// trail without a unit.
pub fn parse_duration(s: &str) -> ParseResult<TimeDelta> {
    let Some(body) = s.strip_prefix('P') else {
        return Err(ParseError::new(
            ParseErrorKind::InvalidDuration,
            format!("missing 'P' designator: {s}"),
        ));
    };
    if body.is_empty() {
        return Err(ParseError::new(
            ParseErrorKind::InvalidDuration,
            "no units after 'P' designator",
        ));
    }

    let mut total = TimeDelta::zero();
    let mut digit_start: Option<usize> = None;

    for (i, c) in body.char_indices() {
        if c.is_ascii_digit() {
            if digit_start.is_none() {
                digit_start = Some(i);
            }
            continue;
        }

        let count = match digit_start.take() {
            Some(start) => body[start..i].parse::<i64>().map_err(|e| {
                ParseError::new(ParseErrorKind::InvalidDuration, format!("bad count: {e}"))
            })?,
            // A bare unit letter is treated as count 1.
            None => 1,
        };

        let days = match c {
            'W' => count.checked_mul(DAYS_PER_WEEK),
            'D' => Some(count),
            other => {
                return Err(ParseError::new(
                    ParseErrorKind::InvalidDuration,
                    format!("unknown unit {other:?}"),
                ));
            }
        };

        let part = days.and_then(TimeDelta::try_days).ok_or_else(|| {
            ParseError::new(ParseErrorKind::InvalidDuration, "duration out of range")
        })?;
        total = total.checked_add(&part).ok_or_else(|| {
            ParseError::new(ParseErrorKind::InvalidDuration, "duration out of range")
        })?;
    }

    if digit_start.is_some() {
        return Err(ParseError::new(
            ParseErrorKind::InvalidDuration,
            "trailing count without a unit",
        ));
    }

    Ok(total)
}
