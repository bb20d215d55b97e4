//! ISO 8601 time-interval grammar (restricted profile).
//!
//! The profile covers three interval shapes — `Time/Time`, `Time/Duration`,
//! `Duration/Time` — and repeating intervals prefixed with `R` or `R<n>`.
//! Durations are limited to week and day units. Timestamps are strict
//! RFC 3339 offset timestamps.

pub mod build;
pub mod core;
pub mod parse;

mod serde;

#[cfg(test)]
mod tests;
