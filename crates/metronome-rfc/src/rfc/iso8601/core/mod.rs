//! Interval core models.
//!
//! These types are designed for:
//! - Round-trip fidelity: the construction shape is recorded so a value
//!   formats back to the textual form it was parsed from
//! - Type safety: invalid endpoint/duration combinations are unrepresentable
//! - Immutability: every value is fully determined at construction

mod interval;
mod repeating;

pub use interval::{Interval, IntervalFormat};
pub use repeating::Repeating;
