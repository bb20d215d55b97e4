/// A single instant on a fixed-offset timeline.
///
/// The library deliberately stays on `FixedOffset`: the interval grammar
/// carries either `Z` or a numeric offset, never a named zone, so no
/// time-zone database is involved anywhere.
pub type Timestamp = chrono::DateTime<chrono::FixedOffset>;
