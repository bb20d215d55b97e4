//! A series of back-to-back repetitions of an interval's span.

use chrono::TimeDelta;
use metronome_core::error::{CoreError, CoreResult};
use metronome_core::types::Timestamp;

use crate::rfc::iso8601::core::{Interval, IntervalFormat};

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// A repeating interval: the wrapped interval's span, repeated back to back.
///
/// The step size is the wrapped interval's duration. A repetition count
/// bounds the series on the interval's derived side; without a count the
/// series is unbounded beyond the interval's explicit anchor:
///
/// - `Time/Duration` (end derived): the series starts at the interval's
///   start and, with a count, ends `count x step` after it.
/// - `Duration/Time` (start derived): the series ends at the interval's end
///   and, with a count, starts `count x step` before it.
/// - `Time/Time`: both bounds are the interval's own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repeating {
    interval: Interval,
    repetitions: Option<u32>,
}

impl Repeating {
    /// Creates a repeating interval. `None` repetitions means the series is
    /// unbounded on the interval's derived side.
    ///
    /// ## Errors
    /// Returns [`CoreError::InvalidBounds`] if the count-derived series
    /// bound (`count x step` from the anchor) falls outside the
    /// representable datetime range.
    pub fn new(interval: Interval, repetitions: Option<u32>) -> CoreResult<Self> {
        if let Some(count) = repetitions {
            let span = step_times(interval.duration(), count);
            let bound = match interval.format() {
                IntervalFormat::TimeAndDuration => {
                    span.and_then(|s| interval.starts_at().checked_add_signed(s))
                }
                IntervalFormat::DurationAndTime => {
                    span.and_then(|s| interval.ends_at().checked_sub_signed(s))
                }
                IntervalFormat::TimeAndTime => Some(interval.starts_at()),
            };
            if bound.is_none() {
                return Err(CoreError::InvalidBounds(format!(
                    "series bound is out of range ({count} repetitions of {})",
                    interval.duration()
                )));
            }
        }
        Ok(Self {
            interval,
            repetitions,
        })
    }

    /// Returns the wrapped interval.
    #[must_use]
    pub const fn interval(&self) -> &Interval {
        &self.interval
    }

    /// Returns the repetition count, if the series carries one.
    #[must_use]
    pub const fn repetitions(&self) -> Option<u32> {
        self.repetitions
    }

    /// Returns the step size between occurrences.
    #[must_use]
    pub fn repeat_every(&self) -> TimeDelta {
        self.interval.duration()
    }

    /// Returns the time the series begins, or `None` if it is unbounded
    /// going back in time.
    #[must_use]
    pub fn starts_at(&self) -> Option<Timestamp> {
        match self.interval.format() {
            // The checked arithmetic cannot fail here; the constructor
            // validated the count-derived bound.
            IntervalFormat::DurationAndTime => {
                let span = step_times(self.repeat_every(), self.repetitions?)?;
                self.interval.ends_at().checked_sub_signed(span)
            }
            IntervalFormat::TimeAndTime | IntervalFormat::TimeAndDuration => {
                Some(self.interval.starts_at())
            }
        }
    }

    /// Returns the time the series ends, or `None` if it is unbounded going
    /// into the future.
    #[must_use]
    pub fn ends_at(&self) -> Option<Timestamp> {
        match self.interval.format() {
            IntervalFormat::TimeAndDuration => {
                let span = step_times(self.repeat_every(), self.repetitions?)?;
                self.interval.starts_at().checked_add_signed(span)
            }
            IntervalFormat::TimeAndTime | IntervalFormat::DurationAndTime => {
                Some(self.interval.ends_at())
            }
        }
    }

    /// Returns the span the whole series is active for, or `None` when the
    /// series is unbounded on either side.
    #[must_use]
    pub fn duration(&self) -> Option<TimeDelta> {
        match (self.starts_at(), self.ends_at()) {
            (Some(starts_at), Some(ends_at)) => Some(ends_at - starts_at),
            _ => None,
        }
    }

    /// Returns whether the series has begun at the given time.
    #[must_use]
    pub fn started(&self, t: Timestamp) -> bool {
        match self.starts_at() {
            Some(starts_at) => t >= starts_at,
            None => true,
        }
    }

    /// Returns whether the series has ended at the given time.
    ///
    /// The end instant itself counts as still active.
    #[must_use]
    pub fn ended(&self, t: Timestamp) -> bool {
        match self.ends_at() {
            Some(ends_at) => t > ends_at,
            None => false,
        }
    }

    /// Returns whether the series is active at the given time (started and
    /// not ended).
    #[must_use]
    pub fn contains(&self, t: Timestamp) -> bool {
        self.started(t) && !self.ended(t)
    }

    /// Returns the next occurrence boundary strictly after the given time.
    ///
    /// Returns the series start if the series has not started yet, and
    /// `None` if the series has ended, if the candidate boundary would fall
    /// past the series end, or if the step is zero (a zero-length span
    /// cannot advance).
    #[must_use]
    pub fn next(&self, t: Timestamp) -> Option<Timestamp> {
        if !self.started(t) {
            return self.starts_at();
        }
        let step = self.repeat_every();
        if self.ended(t) || step.is_zero() {
            return None;
        }
        // Any boundary works as the modular anchor; when the series is
        // unbounded below, the interval's own derived start is congruent to
        // the explicit anchor modulo the step.
        let anchor = self
            .starts_at()
            .unwrap_or_else(|| self.interval.starts_at());
        let step_ns = delta_nanos(step);
        let offset_ns = delta_nanos(t - anchor).rem_euclid(step_ns);
        let advance = delta_from_nanos(step_ns - offset_ns)?;
        let boundary = t.checked_add_signed(advance)?;
        if self.ended(boundary) {
            None
        } else {
            Some(boundary)
        }
    }
}

/// `step x n`, or `None` when the product does not fit a `TimeDelta`.
fn step_times(step: TimeDelta, n: u32) -> Option<TimeDelta> {
    delta_from_nanos(delta_nanos(step).checked_mul(i128::from(n))?)
}

/// Exact total nanoseconds of a delta; `i128` so no magnitude is lost.
fn delta_nanos(delta: TimeDelta) -> i128 {
    i128::from(delta.num_seconds()) * NANOS_PER_SECOND + i128::from(delta.subsec_nanos())
}

fn delta_from_nanos(nanos: i128) -> Option<TimeDelta> {
    let secs = i64::try_from(nanos.div_euclid(NANOS_PER_SECOND)).ok()?;
    let subsec = u32::try_from(nanos.rem_euclid(NANOS_PER_SECOND)).ok()?;
    TimeDelta::new(secs, subsec)
}
