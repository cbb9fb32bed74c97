//! Fixture builders shared by the unit tests.

use crate::{DateRange, Instant};

/// Local midnight of the given day (zero-based month)
pub fn instant(year: i32, month0: u32, day: u32) -> Instant {
    Instant::from_ymd(year, month0, day).expect("test fixture day must exist")
}

pub fn instant_at(
    year: i32,
    month0: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    millisecond: u32,
) -> Instant {
    Instant::new(year, month0, day, hour, minute, second, millisecond).expect("test fixture instant must exist")
}

/// Time of day pinned to an arbitrary mid-year date
pub fn time_of_day(hour: u32, minute: u32) -> Instant {
    instant_at(2024, 5, 15, hour, minute, 0, 0)
}

pub fn range(start: Instant, end: Instant) -> DateRange {
    DateRange::new(Some(start), Some(end))
}
