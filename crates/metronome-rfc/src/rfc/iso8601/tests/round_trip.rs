//! Round-trip parsing and serialization tests.
//!
//! These tests verify that every canonical interval string reproduces itself
//! exactly through parse → serialize, including the shape of the duration
//! side and the presence or absence of the repetition count.

use super::fixtures::{INTERVALS, REPEATING_INTERVALS};
use crate::rfc::iso8601::build::{serialize_interval, serialize_repeating};
use crate::rfc::iso8601::core::{Interval, Repeating};
use crate::rfc::iso8601::parse::{parse_interval, parse_repeating};

#[test_log::test]
fn interval_strings_round_trip_exactly() {
    for input in INTERVALS {
        let interval = parse_interval(input).unwrap();
        let output = serialize_interval(&interval).unwrap();
        assert_eq!(output, input);
    }
}

#[test_log::test]
fn repeating_strings_round_trip_exactly() {
    for input in REPEATING_INTERVALS {
        let repeating = parse_repeating(input).unwrap();
        let output = serialize_repeating(&repeating).unwrap();
        assert_eq!(output, input);
    }
}

#[test_log::test]
fn format_tag_survives_identical_bounds() {
    // The two derived shapes describe the same effective span but must not
    // collapse into each other or into Time/Time on output.
    let from_start = parse_interval("2019-01-02T21:00:00Z/P1W").unwrap();
    let from_end = parse_interval("P1W/2019-01-09T21:00:00Z").unwrap();

    assert_eq!(from_start.starts_at(), from_end.starts_at());
    assert_eq!(from_start.ends_at(), from_end.ends_at());
    assert_eq!(
        serialize_interval(&from_start).unwrap(),
        "2019-01-02T21:00:00Z/P1W"
    );
    assert_eq!(
        serialize_interval(&from_end).unwrap(),
        "P1W/2019-01-09T21:00:00Z"
    );
}

#[test_log::test]
fn fractional_second_timestamps_round_trip() {
    let input = "2019-01-02T21:00:00.500Z/P1W";
    let interval = parse_interval(input).unwrap();
    assert_eq!(serialize_interval(&interval).unwrap(), input);
}

#[test_log::test]
fn interval_json_round_trip() {
    for input in INTERVALS {
        let interval: Interval = serde_json::from_value(serde_json::json!(input)).unwrap();
        let json = serde_json::to_string(&interval).unwrap();
        assert_eq!(json, format!("{input:?}"));

        let back: Interval = serde_json::from_str(&json).unwrap();
        assert_eq!(back, interval);
    }
}

#[test_log::test]
fn repeating_json_round_trip() {
    for input in REPEATING_INTERVALS {
        let repeating: Repeating = serde_json::from_value(serde_json::json!(input)).unwrap();
        let json = serde_json::to_string(&repeating).unwrap();
        assert_eq!(json, format!("{input:?}"));

        let back: Repeating = serde_json::from_str(&json).unwrap();
        assert_eq!(back, repeating);
    }
}

#[test_log::test]
fn from_str_matches_the_parsers() {
    let parsed: Interval = "2019-01-02T21:00:00Z/P1W".parse().unwrap();
    assert_eq!(parsed, parse_interval("2019-01-02T21:00:00Z/P1W").unwrap());

    let parsed: Repeating = "R10/P1W/2022-01-03T21:00:00Z".parse().unwrap();
    assert_eq!(
        parsed,
        parse_repeating("R10/P1W/2022-01-03T21:00:00Z").unwrap()
    );
}
