//! ISO 8601 time intervals (restricted profile).
//!
//! Parses, evaluates, and serializes time intervals (`Time/Time`,
//! `Time/Duration`, `Duration/Time`) and repeating intervals (`R/…`,
//! `R<n>/…`). Pure value library: the only inputs and outputs are strings
//! and immutable interval values.

pub mod error;
pub mod rfc;

pub use error::{RfcError, RfcResult};
pub use rfc::iso8601::build::{serialize_interval, serialize_repeating};
pub use rfc::iso8601::core::{Interval, IntervalFormat, Repeating};
pub use rfc::iso8601::parse::{parse_interval, parse_repeating};
