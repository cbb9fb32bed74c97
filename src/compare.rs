//! Equality checks between instants and ranges.
//!
//! None of these look past the fields they name: day checks ignore the time of
//! day, time checks ignore the date.

use chrono::{Datelike, Timelike};

use crate::{DateRange, Instant};

/// Both absent, or both present with the same millisecond timestamp.
pub fn are_equal(a: Option<Instant>, b: Option<Instant>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.timestamp_millis() == b.timestamp_millis(),
        _ => false,
    }
}

/// Same calendar year, month and day of month. Absent on either side is never the same day.
pub fn are_same_day(a: Option<Instant>, b: Option<Instant>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.day() == b.day() && a.month0() == b.month0() && a.year() == b.year(),
        _ => false,
    }
}

pub fn are_same_month(a: Option<Instant>, b: Option<Instant>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.month0() == b.month0() && a.year() == b.year(),
        _ => false,
    }
}

/// Same hour, minute, second and millisecond, whatever the date.
pub fn are_same_time(a: Option<Instant>, b: Option<Instant>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => {
            a.hour() == b.hour()
                && a.minute() == b.minute()
                && a.second() == b.second()
                && a.millisecond() == b.millisecond()
        },
        _ => false,
    }
}

/// Ranges match when each pair of bounds is the same day.
/// Two absent bounds on the same side match each other.
pub fn are_ranges_equal(a: Option<DateRange>, b: Option<DateRange>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => bounds_same_day(a.start(), b.start()) && bounds_same_day(a.end(), b.end()),
        _ => false,
    }
}

fn bounds_same_day(a: Option<Instant>, b: Option<Instant>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(_), Some(_)) => are_same_day(a, b),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{instant, instant_at, range};

    #[test]
    fn test_are_equal() {
        let a = instant_at(2024, 0, 15, 9, 30, 0, 0);
        assert!(are_equal(Some(a), Some(a)));
        assert!(are_equal(None, None));
        assert!(!are_equal(Some(a), None));
        assert!(!are_equal(None, Some(a)));
        assert!(!are_equal(Some(a), Some(instant_at(2024, 0, 15, 9, 30, 0, 1))));
    }

    #[test]
    fn test_are_same_day() {
        let morning = instant_at(2024, 0, 15, 1, 0, 0, 0);
        let night = instant_at(2024, 0, 15, 23, 59, 59, 999);
        assert!(are_same_day(Some(morning), Some(night)));
        assert!(are_same_day(Some(morning), Some(morning)));
        assert!(!are_same_day(Some(morning), Some(instant(2024, 0, 16))));
        assert!(!are_same_day(Some(morning), Some(instant(2023, 0, 15))));
        assert!(!are_same_day(Some(morning), Some(instant(2024, 1, 15))));
    }

    #[test]
    fn test_are_same_day_absent() {
        assert!(!are_same_day(None, None));
        assert!(!are_same_day(Some(instant(2024, 0, 15)), None));
        assert!(!are_same_day(None, Some(instant(2024, 0, 15))));
    }

    #[test]
    fn test_are_same_month() {
        assert!(are_same_month(Some(instant(2024, 2, 1)), Some(instant(2024, 2, 31))));
        assert!(!are_same_month(Some(instant(2024, 2, 1)), Some(instant(2023, 2, 1))));
        assert!(!are_same_month(Some(instant(2024, 2, 31)), Some(instant(2024, 3, 1))));
        assert!(!are_same_month(None, Some(instant(2024, 2, 1))));
        assert!(!are_same_month(None, None));
    }

    #[test]
    fn test_are_same_time() {
        let a = instant_at(2024, 0, 15, 9, 30, 15, 250);
        let b = instant_at(1999, 11, 31, 9, 30, 15, 250);
        assert!(are_same_time(Some(a), Some(b)));
        assert!(!are_same_time(Some(a), Some(instant_at(2024, 0, 15, 9, 30, 15, 251))));
        assert!(!are_same_time(Some(a), Some(instant_at(2024, 0, 15, 10, 30, 15, 250))));
        assert!(!are_same_time(Some(a), None));
        assert!(!are_same_time(None, None));
    }

    #[test]
    fn test_comparisons_are_symmetric() {
        let samples = [
            None,
            Some(instant(2024, 0, 15)),
            Some(instant_at(2024, 0, 15, 12, 0, 0, 0)),
            Some(instant_at(2024, 1, 15, 12, 0, 0, 0)),
            Some(instant_at(2023, 0, 15, 0, 0, 0, 0)),
        ];
        let checks: [fn(Option<Instant>, Option<Instant>) -> bool; 4] =
            [are_equal, are_same_day, are_same_month, are_same_time];

        for check in checks {
            for a in samples {
                for b in samples {
                    assert_eq!(check(a, b), check(b, a), "asymmetric for {a:?} / {b:?}");
                }
            }
        }
    }

    #[test]
    fn test_are_ranges_equal() {
        let jan1 = instant(2024, 0, 1);
        let jan31 = instant(2024, 0, 31);

        assert!(are_ranges_equal(None, None));
        assert!(!are_ranges_equal(Some(range(jan1, jan31)), None));
        assert!(!are_ranges_equal(None, Some(range(jan1, jan31))));

        // time of day is ignored
        let jan31_noon = instant_at(2024, 0, 31, 12, 0, 0, 0);
        assert!(are_ranges_equal(Some(range(jan1, jan31)), Some(range(jan1, jan31_noon))));
        assert!(!are_ranges_equal(Some(range(jan1, jan31)), Some(range(jan1, instant(2024, 1, 1)))));
    }

    #[test]
    fn test_are_ranges_equal_absent_bounds() {
        let end = instant(2024, 0, 31);
        let open_start = DateRange::new(None, Some(end));
        let closed = DateRange::new(Some(instant(2024, 0, 1)), Some(end));

        assert!(are_ranges_equal(Some(open_start), Some(open_start)));
        assert!(!are_ranges_equal(Some(open_start), Some(closed)));
        assert!(!are_ranges_equal(Some(closed), Some(open_start)));
        assert!(are_ranges_equal(Some(DateRange::unbounded()), Some(DateRange::unbounded())));
    }
}
