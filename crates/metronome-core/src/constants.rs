/// Calendar constants shared across crates
pub const DAYS_PER_WEEK: i64 = 7;

pub const HOURS_PER_DAY: i64 = 24;

pub const SECONDS_PER_DAY: i64 = HOURS_PER_DAY * 60 * 60;
