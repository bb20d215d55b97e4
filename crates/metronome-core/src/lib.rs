//! Shared leaf types for the metronome crates.
//!
//! Keeps the error type, the timestamp alias, and the handful of calendar
//! constants the grammar crates agree on, with minimal dependencies.

pub mod constants;
pub mod error;
pub mod types;
