//! Interval and repeating-interval parsers.

mod error;
mod values;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use values::{parse_duration, parse_timestamp};

use chrono::TimeDelta;
use metronome_core::types::Timestamp;

use crate::error::RfcResult;
use crate::rfc::iso8601::core::{Interval, Repeating};

/// A classified interval part.
enum Part {
    Time(Timestamp),
    Duration(TimeDelta),
}

/// Classifies and decodes one `/`-separated interval part.
///
/// The duration marker wins the classification; everything else must match
/// the strict timestamp shape.
fn parse_part(s: &str) -> ParseResult<Part> {
    if s.starts_with('P') {
        return Ok(Part::Duration(parse_duration(s)?));
    }
    Ok(Part::Time(parse_timestamp(s)?))
}

/// Parses an interval string (`Time/Time`, `Time/Duration`, or
/// `Duration/Time`).
///
/// ## Errors
///
/// Returns an error if the string does not have exactly two parts, a part
/// is neither a timestamp nor a duration, both parts are durations, or the
/// resulting bounds are invalid (end before start).
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_interval(input: &str) -> RfcResult<Interval> {
    tracing::debug!("Parsing interval");

    let mut split = input.split('/');
    let (Some(first), Some(second), None) = (split.next(), split.next(), split.next()) else {
        return Err(ParseError::new(
            ParseErrorKind::InvalidInterval,
            "expected exactly two '/'-separated parts",
        )
        .into());
    };

    let interval = match (parse_part(first)?, parse_part(second)?) {
        (Part::Time(starts_at), Part::Time(ends_at)) => {
            Interval::time_and_time(starts_at, ends_at)?
        }
        (Part::Time(starts_at), Part::Duration(duration)) => {
            Interval::time_and_duration(starts_at, duration)?
        }
        (Part::Duration(duration), Part::Time(ends_at)) => {
            Interval::duration_and_time(duration, ends_at)?
        }
        (Part::Duration(_), Part::Duration(_)) => {
            return Err(ParseError::new(
                ParseErrorKind::AmbiguousInterval,
                "at most one part may be a duration",
            )
            .into());
        }
    };

    tracing::trace!(format = %interval.format(), "Parsed interval");

    Ok(interval)
}

/// Parses a repeating-interval string (`R[<count>]/<Interval>`).
///
/// ## Errors
///
/// Returns an error if the repetition prefix is missing or malformed, if
/// the wrapped interval fails to parse, or if the count-derived series
/// bound falls outside the representable datetime range.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_repeating(input: &str) -> RfcResult<Repeating> {
    tracing::debug!("Parsing repeating interval");

    let Some(rest) = input.strip_prefix('R') else {
        return Err(ParseError::new(
            ParseErrorKind::InvalidRepeating,
            "missing 'R' designator",
        )
        .into());
    };
    let Some((count, interval)) = rest.split_once('/') else {
        return Err(ParseError::new(
            ParseErrorKind::InvalidRepeating,
            "missing interval after repeat designator",
        )
        .into());
    };

    let repetitions = if count.is_empty() {
        None
    } else {
        Some(count.parse::<u32>().map_err(|e| {
            ParseError::new(
                ParseErrorKind::InvalidRepetitions,
                format!("bad repetition count: {e}"),
            )
        })?)
    };

    let interval = parse_interval(interval)?;

    Ok(Repeating::new(interval, repetitions)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::iso8601::core::IntervalFormat;

    #[test]
    fn parse_interval_classifies_each_part() {
        let cases = [
            (
                "2019-01-02T21:00:00Z/2022-01-03T21:00:00Z",
                IntervalFormat::TimeAndTime,
            ),
            ("2019-01-02T21:00:00Z/P1W", IntervalFormat::TimeAndDuration),
            ("P1W/2022-01-03T21:00:00Z", IntervalFormat::DurationAndTime),
        ];
        for (input, format) in cases {
            let interval = parse_interval(input).unwrap();
            assert_eq!(interval.format(), format, "{input}");
        }
    }

    #[test]
    fn parse_interval_derives_the_missing_endpoint() {
        let interval = parse_interval("2019-01-02T21:00:00Z/P1W").unwrap();
        assert_eq!(interval.ends_at() - interval.starts_at(), TimeDelta::days(7));

        let interval = parse_interval("P1W/2022-01-03T21:00:00Z").unwrap();
        assert_eq!(interval.ends_at() - interval.starts_at(), TimeDelta::days(7));
    }

    #[test]
    fn parse_interval_rejects_end_before_start() {
        let result = parse_interval("2022-01-03T21:00:00Z/2019-01-02T21:00:00Z");
        assert!(matches!(
            result,
            Err(crate::error::RfcError::CoreError(_))
        ));
    }

    #[test]
    fn parse_repeating_count() {
        let repeating = parse_repeating("R10/P1W/2022-01-03T21:00:00Z").unwrap();
        assert_eq!(repeating.repetitions(), Some(10));
        assert_eq!(repeating.repeat_every(), TimeDelta::days(7));
    }

    #[test]
    fn parse_repeating_without_count_is_unbounded() {
        let repeating = parse_repeating("R/2019-01-02T21:00:00Z/P1W").unwrap();
        assert_eq!(repeating.repetitions(), None);
        assert_eq!(repeating.ends_at(), None);
    }

    #[test]
    fn parse_repeating_rejects_bad_prefixes() {
        // No 'R' designator.
        assert!(parse_repeating("2019-01-02T21:00:00Z/P1W").is_err());
        // Negative and non-numeric counts.
        assert!(parse_repeating("R-1/2019-01-02T21:00:00Z/P1W").is_err());
        assert!(parse_repeating("Rten/2019-01-02T21:00:00Z/P1W").is_err());
        // No interval at all.
        assert!(parse_repeating("R10").is_err());
    }
}
