use chrono::{Datelike, NaiveDate, TimeDelta};

use crate::{DECEMBER, Instant, JANUARY};

/// Day every time-only instant is pinned to (1970-01-01).
///
/// Wall-clock values carry no daylight-saving shifts, so no time of day on this
/// date rolls over into a neighbouring day.
pub fn time_reference_day() -> NaiveDate {
    NaiveDate::default()
}

/// Independent copy of `date`
pub const fn clone_date(date: &Instant) -> Instant {
    *date
}

/// Instant halfway between `start` and `end`.
///
/// The midpoint's millisecond timestamp is truncated toward zero, so an odd
/// span rounds toward 1970-01-01 whichever bound comes first.
pub fn get_date_between(start: Instant, end: Instant) -> Instant {
    let start_millis = start.timestamp_millis();
    // chrono's calendar range keeps the sum well inside i64
    let midpoint = (start_millis + end.timestamp_millis()) / 2;
    Instant::from(start.naive() + TimeDelta::milliseconds(midpoint - start_millis))
}

/// Calendar day of `date` combined with the time of day of `time`.
/// Without a `time` the result sits at midnight.
pub fn get_date_time(date: Option<Instant>, time: Option<Instant>) -> Option<Instant> {
    let date = date?;
    Some(match time {
        Some(time) => Instant::from(date.date().and_time(time.time())),
        None => date.start_of_day(),
    })
}

/// Time of day of `date` on the [`time_reference_day`]
pub fn get_date_only_with_time(date: Instant) -> Instant {
    Instant::from(time_reference_day().and_time(date.time()))
}

/// Midnight on the first of the month before `date`'s month.
///
/// Day of month and time of day are dropped. Returns `None` past the
/// supported calendar range.
pub fn get_date_previous_month(date: Instant) -> Option<Instant> {
    let (year, month0) = if date.month0() == JANUARY {
        (date.year().checked_sub(1)?, DECEMBER)
    } else {
        (date.year(), date.month0() - 1)
    };
    first_of_month(year, month0)
}

/// Midnight on the first of the month after `date`'s month.
///
/// Day of month and time of day are dropped. Returns `None` past the
/// supported calendar range.
pub fn get_date_next_month(date: Instant) -> Option<Instant> {
    let (year, month0) = if date.month0() == DECEMBER {
        (date.year().checked_add(1)?, JANUARY)
    } else {
        (date.year(), date.month0() + 1)
    };
    first_of_month(year, month0)
}

fn first_of_month(year: i32, month0: u32) -> Option<Instant> {
    Instant::from_ymd(year, month0, 1).ok()
}
