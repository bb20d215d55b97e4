//! Grammar-level test suites.

mod round_trip;
