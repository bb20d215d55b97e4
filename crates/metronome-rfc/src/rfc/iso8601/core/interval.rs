//! A single bounded span of time.

use chrono::TimeDelta;
use metronome_core::error::{CoreError, CoreResult};
use metronome_core::types::Timestamp;

/// The textual shape an [`Interval`] was constructed from.
///
/// Formatting reproduces this shape exactly: an interval built from
/// `Time/Duration` serializes back as `Time/Duration`, never as the
/// equivalent `Time/Time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalFormat {
    /// `<start>/<end>` — both endpoints explicit.
    TimeAndTime,
    /// `<start>/<duration>` — end derived as `start + duration`.
    TimeAndDuration,
    /// `<duration>/<end>` — start derived as `end - duration`.
    DurationAndTime,
}

impl IntervalFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TimeAndTime => "time-and-time",
            Self::TimeAndDuration => "time-and-duration",
            Self::DurationAndTime => "duration-and-time",
        }
    }
}

impl std::fmt::Display for IntervalFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Construction shape, storing exactly the fields each shape owns.
///
/// Kept private so the endpoint ordering invariant cannot be bypassed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    TimeAndTime {
        starts_at: Timestamp,
        ends_at: Timestamp,
    },
    TimeAndDuration {
        starts_at: Timestamp,
        duration: TimeDelta,
    },
    DurationAndTime {
        duration: TimeDelta,
        ends_at: Timestamp,
    },
}

/// A span of time bounded below by a start and above by an end.
///
/// Exactly one endpoint may be derived (from the other endpoint plus a
/// duration); derived and explicit endpoints behave identically through the
/// accessors. The interval is inclusive at both instants: `started` uses
/// `>=` and `ended` uses strict `>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    shape: Shape,
}

impl Interval {
    /// Creates an interval with two explicit endpoints.
    ///
    /// ## Errors
    /// Returns [`CoreError::InvalidBounds`] if `ends_at` is before
    /// `starts_at`.
    pub fn time_and_time(starts_at: Timestamp, ends_at: Timestamp) -> CoreResult<Self> {
        if ends_at < starts_at {
            return Err(CoreError::InvalidBounds(format!(
                "interval ends ({ends_at}) before it starts ({starts_at})"
            )));
        }
        Ok(Self {
            shape: Shape::TimeAndTime { starts_at, ends_at },
        })
    }

    /// Creates an interval with an explicit start and a derived end.
    ///
    /// ## Errors
    /// Returns [`CoreError::InvalidBounds`] if the duration is negative
    /// (which would put the derived end before the start) or if the derived
    /// end falls outside the representable datetime range.
    pub fn time_and_duration(starts_at: Timestamp, duration: TimeDelta) -> CoreResult<Self> {
        if duration < TimeDelta::zero() {
            return Err(CoreError::InvalidBounds(format!(
                "interval duration is negative ({duration})"
            )));
        }
        if starts_at.checked_add_signed(duration).is_none() {
            return Err(CoreError::InvalidBounds(format!(
                "derived end is out of range ({starts_at} + {duration})"
            )));
        }
        Ok(Self {
            shape: Shape::TimeAndDuration {
                starts_at,
                duration,
            },
        })
    }

    /// Creates an interval with a derived start and an explicit end.
    ///
    /// ## Errors
    /// Returns [`CoreError::InvalidBounds`] if the duration is negative
    /// (which would put the start after the derived end) or if the derived
    /// start falls outside the representable datetime range.
    pub fn duration_and_time(duration: TimeDelta, ends_at: Timestamp) -> CoreResult<Self> {
        if duration < TimeDelta::zero() {
            return Err(CoreError::InvalidBounds(format!(
                "interval duration is negative ({duration})"
            )));
        }
        if ends_at.checked_sub_signed(duration).is_none() {
            return Err(CoreError::InvalidBounds(format!(
                "derived start is out of range ({ends_at} - {duration})"
            )));
        }
        Ok(Self {
            shape: Shape::DurationAndTime { duration, ends_at },
        })
    }

    /// Returns the shape this interval was constructed from.
    #[must_use]
    pub const fn format(&self) -> IntervalFormat {
        match self.shape {
            Shape::TimeAndTime { .. } => IntervalFormat::TimeAndTime,
            Shape::TimeAndDuration { .. } => IntervalFormat::TimeAndDuration,
            Shape::DurationAndTime { .. } => IntervalFormat::DurationAndTime,
        }
    }

    /// Returns the time the interval starts, deriving it when necessary.
    ///
    /// The constructors verified the derived endpoint is representable, so
    /// the subtraction here cannot leave the datetime range.
    #[must_use]
    pub fn starts_at(&self) -> Timestamp {
        match self.shape {
            Shape::TimeAndTime { starts_at, .. } | Shape::TimeAndDuration { starts_at, .. } => {
                starts_at
            }
            Shape::DurationAndTime { duration, ends_at } => ends_at - duration,
        }
    }

    /// Returns the time the interval ends, deriving it when necessary.
    #[must_use]
    pub fn ends_at(&self) -> Timestamp {
        match self.shape {
            Shape::TimeAndTime { ends_at, .. } | Shape::DurationAndTime { ends_at, .. } => ends_at,
            Shape::TimeAndDuration {
                starts_at,
                duration,
            } => starts_at + duration,
        }
    }

    /// Returns the length of the interval.
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        match self.shape {
            Shape::TimeAndTime { starts_at, ends_at } => ends_at - starts_at,
            Shape::TimeAndDuration { duration, .. } | Shape::DurationAndTime { duration, .. } => {
                duration
            }
        }
    }

    /// Returns whether the interval has begun at the given time.
    #[must_use]
    pub fn started(&self, t: Timestamp) -> bool {
        t >= self.starts_at()
    }

    /// Returns whether the interval has ended at the given time.
    ///
    /// The end instant itself counts as still active.
    #[must_use]
    pub fn ended(&self, t: Timestamp) -> bool {
        t > self.ends_at()
    }

    /// Returns whether the interval is active at the given time (started and
    /// not ended).
    #[must_use]
    pub fn contains(&self, t: Timestamp) -> bool {
        self.started(t) && !self.ended(t)
    }
}
