//! Interval parse error types.

use std::fmt;

/// Result type for interval parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error that occurred while parsing an interval string.
#[derive(Debug, Clone)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Additional context or message.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ParseError {}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Wrong number of `/`-separated interval parts.
    InvalidInterval,
    /// Missing or malformed repeating-interval prefix.
    InvalidRepeating,
    /// Malformed duration token.
    InvalidDuration,
    /// Malformed repetition count.
    InvalidRepetitions,
    /// An interval part that is neither a timestamp nor a duration.
    UnknownPart,
    /// Both interval parts are durations.
    AmbiguousInterval,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInterval => write!(f, "invalid interval format"),
            Self::InvalidRepeating => write!(f, "invalid repeating interval format"),
            Self::InvalidDuration => write!(f, "invalid duration"),
            Self::InvalidRepetitions => write!(f, "invalid repetition count"),
            Self::UnknownPart => write!(f, "invalid/unknown format"),
            Self::AmbiguousInterval => write!(f, "interval cannot consist of two durations"),
        }
    }
}
