//! Range membership at day, month and time-of-day granularity.
//!
//! An absent range bound leaves that side open.

use chrono::Datelike;

use crate::{DateRange, Instant, are_same_day, are_same_time, get_date_only_with_time};

/// Whether `date`'s calendar day lies within `range`, bounds included.
///
/// With `exclusive` set, a `date` on the same day as either bound is outside.
pub fn is_day_in_range(date: Option<Instant>, range: DateRange, exclusive: bool) -> bool {
    let Some(date) = date else {
        return false;
    };
    let day = date.start_of_day();
    let after_start = range.start().is_none_or(|start| start.start_of_day() <= day);
    let before_end = range.end().is_none_or(|end| day <= end.start_of_day());
    let in_range = after_start && before_end;

    if exclusive {
        in_range && !are_same_day(Some(date), range.start()) && !are_same_day(Some(date), range.end())
    } else {
        in_range
    }
}

/// Whether every present bound of `inner` is a day within `outer`
pub fn is_day_range_in_range(inner: DateRange, outer: DateRange) -> bool {
    [inner.start(), inner.end()]
        .into_iter()
        .flatten()
        .all(|bound| is_day_in_range(Some(bound), outer, false))
}

/// Whether `date`'s calendar month lies within `range`, bounds included
pub fn is_month_in_range(date: Option<Instant>, range: DateRange) -> bool {
    let Some(date) = date else {
        return false;
    };
    let month = month_key(date);
    let after_start = range.start().is_none_or(|start| month_key(start) <= month);
    let before_end = range.end().is_none_or(|end| month <= month_key(end));
    after_start && before_end
}

fn month_key(date: Instant) -> (i32, u32) {
    (date.year(), date.month0())
}

/// Whether `date`'s time of day lies within `[min, max]`.
///
/// When `max` is not later in the day than `min` the window wraps past
/// midnight: 23:00 to 01:00 holds both 23:30 and 00:30.
pub fn is_time_in_range(date: Instant, min: Instant, max: Instant) -> bool {
    let time = get_date_only_with_time(date);
    let min_time = get_date_only_with_time(min);
    let max_time = get_date_only_with_time(max);

    let from_min = time >= min_time;
    let until_max = time <= max_time;
    if max_time <= min_time {
        from_min || until_max
    } else {
        from_min && until_max
    }
}

/// Clamps the time of day of `time` into the `[min, max]` window.
///
/// Equal `min` and `max` times always give back `max`.
pub fn get_time_in_range(time: Instant, min: Instant, max: Instant) -> Instant {
    if are_same_time(Some(min), Some(max)) {
        max
    } else if is_time_in_range(time, min, max) {
        time
    } else if is_time_same_or_after(time, max) {
        max
    } else {
        min
    }
}

/// Time-of-day comparison, ignoring the date
pub fn is_time_same_or_after(a: Instant, b: Instant) -> bool {
    get_date_only_with_time(a) >= get_date_only_with_time(b)
}
