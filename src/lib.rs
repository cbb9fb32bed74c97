mod compare;
mod config;
mod consts;
mod construct;
mod convert;
mod format;
mod membership;
mod prelude;
mod range;
#[cfg(test)]
mod test_utils;

pub use chrono::Locale;
pub use compare::{are_equal, are_ranges_equal, are_same_day, are_same_month, are_same_time};
pub use config::{CalendarConfig, TimezoneAdjustment};
pub use consts::*;
pub use construct::{
    clone_date, get_date_between, get_date_next_month, get_date_only_with_time,
    get_date_previous_month, get_date_time, time_reference_day,
};
pub use convert::{
    CalendarRange, CalendarValue, ParsingFlags, calendar_range_to_date_range,
    calendar_value_to_date, date_range_to_calendar_range, date_to_calendar_value,
    is_calendar_value_valid_and_in_range, is_null_calendar_value,
};
pub use format::{
    DateFormat, DateFormatter, format_with_locale, lookup_locale, parse_formatted_string,
    to_formatted_string,
};
pub use membership::{
    get_time_in_range, is_day_in_range, is_day_range_in_range, is_month_in_range,
    is_time_in_range, is_time_same_or_after,
};
pub use range::DateRange;

use crate::prelude::*;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::str::FromStr;

/// A point in local wall-clock time with millisecond precision.
///
/// Months are zero-based throughout this crate (`0` is January, `11` is December).
/// The value derefs to [`NaiveDateTime`], so the `chrono::Datelike` and
/// `chrono::Timelike` accessors are available on it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deref, Into, Display)]
#[display(fmt = "{}", "_0.format(INSTANT_FORMAT)")]
pub struct Instant(NaiveDateTime);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Broken-down fields that do not name a calendar instant.
    #[error(
        "Invalid date: year {year}, month {month0} (zero-based), day {day}, \
         time {hour:02}:{minute:02}:{second:02}.{millisecond:03}"
    )]
    InvalidDate {
        year:        i32,
        month0:      u32,
        day:         u32,
        hour:        u32,
        minute:      u32,
        second:      u32,
        millisecond: u32,
    },

    /// Text that is not a serialized instant.
    #[error("Invalid instant format: {0}")]
    InvalidFormat(String),

    /// Text that is not a serialized date range.
    #[error("Invalid range format: {0}")]
    InvalidRange(String),

    /// Locale identifier missing from the locale registry.
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// Pattern string the formatter could not render.
    #[error("Invalid format pattern: {0}")]
    InvalidPattern(String),

    /// Wall-clock fields the configured zone has no offset for.
    #[error("No offset in {0:?} places {1}")]
    UnresolvedOffset(TimezoneAdjustment, Instant),
}

impl Instant {
    /// Creates an instant from broken-down local fields.
    ///
    /// # Errors
    /// Returns `Error::InvalidDate` if any field is out of range for the calendar.
    pub fn new(
        year: i32,
        month0: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Result<Self, Error> {
        let invalid = || Error::InvalidDate {
            year,
            month0,
            day,
            hour,
            minute,
            second,
            millisecond,
        };
        if month0 > DECEMBER || millisecond > MAX_MILLISECOND {
            return Err(invalid());
        }
        let date = NaiveDate::from_ymd_opt(year, month0 + 1, day).ok_or_else(invalid)?;
        let time = NaiveTime::from_hms_milli_opt(hour, minute, second, millisecond).ok_or_else(invalid)?;
        Ok(Self(date.and_time(time)))
    }

    /// Creates an instant at local midnight of the given day
    ///
    /// # Errors
    /// Returns `Error::InvalidDate` if the day does not exist.
    pub fn from_ymd(year: i32, month0: u32, day: u32) -> Result<Self, Error> {
        Self::new(year, month0, day, 0, 0, 0, 0)
    }

    /// Returns the underlying wall-clock value
    pub const fn naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Millisecond-of-second component
    pub fn millisecond(&self) -> u32 {
        self.0.nanosecond() / NANOS_PER_MILLI
    }

    /// Milliseconds since 1970-01-01T00:00:00.000 on the local wall clock
    pub fn timestamp_millis(&self) -> i64 {
        self.0.and_utc().timestamp_millis()
    }

    /// Same calendar day with every time-of-day field zeroed
    pub fn start_of_day(&self) -> Self {
        Self(self.0.date().and_time(NaiveTime::MIN))
    }
}

impl From<NaiveDateTime> for Instant {
    fn from(value: NaiveDateTime) -> Self {
        let nanos = value.nanosecond();
        Self(value.with_nanosecond(nanos - nanos % NANOS_PER_MILLI).unwrap_or(value))
    }
}

impl From<NaiveDate> for Instant {
    fn from(value: NaiveDate) -> Self {
        Self(value.and_time(NaiveTime::MIN))
    }
}

impl FromStr for Instant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = NaiveDateTime::parse_from_str(trimmed, INSTANT_FORMAT) {
            return Ok(value.into());
        }
        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(Self::from)
            .map_err(|_| Error::InvalidFormat(s.to_owned()))
    }
}

impl serde::Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{instant, instant_at};
    use chrono::Datelike;

    #[test]
    fn test_new_valid() {
        let date = Instant::new(2024, 0, 15, 9, 5, 3, 7).unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month0(), 0);
        assert_eq!(date.day(), 15);
        assert_eq!(date.hour(), 9);
        assert_eq!(date.minute(), 5);
        assert_eq!(date.second(), 3);
        assert_eq!(date.millisecond(), 7);
    }

    #[test]
    fn test_new_invalid_fields() {
        struct TestCase {
            fields:      (i32, u32, u32, u32, u32, u32, u32),
            description: &'static str,
        }

        let cases = [
            TestCase {
                fields:      (2024, 12, 1, 0, 0, 0, 0),
                description: "month past December",
            },
            TestCase {
                fields:      (2023, 1, 29, 0, 0, 0, 0),
                description: "February 29th in a common year",
            },
            TestCase {
                fields:      (2024, 3, 31, 0, 0, 0, 0),
                description: "April 31st",
            },
            TestCase {
                fields:      (2024, 0, 1, 24, 0, 0, 0),
                description: "hour 24",
            },
            TestCase {
                fields:      (2024, 0, 1, 0, 60, 0, 0),
                description: "minute 60",
            },
            TestCase {
                fields:      (2024, 0, 1, 0, 0, 0, 1000),
                description: "millisecond 1000",
            },
        ];

        for case in &cases {
            let (y, m, d, h, mi, s, ms) = case.fields;
            let result = Instant::new(y, m, d, h, mi, s, ms);
            assert!(
                matches!(result, Err(Error::InvalidDate { .. })),
                "Expected failure for: {}",
                case.description
            );
        }
    }

    #[test]
    fn test_leap_day() {
        assert!(Instant::from_ymd(2024, 1, 29).is_ok());
        assert!(Instant::from_ymd(2000, 1, 29).is_ok());
        assert!(Instant::from_ymd(1900, 1, 29).is_err());
    }

    #[test]
    fn test_from_naive_truncates_to_millis() {
        let naive = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_nano_opt(12, 0, 0, 123_456_789)
            .unwrap();
        let date = Instant::from(naive);
        assert_eq!(date.millisecond(), 123);
        assert_eq!(date.nanosecond(), 123_000_000);
        assert_eq!(date, instant_at(2024, 4, 1, 12, 0, 0, 123));
    }

    #[test]
    fn test_start_of_day() {
        let date = instant_at(2024, 6, 4, 18, 30, 15, 250);
        assert_eq!(date.start_of_day(), instant(2024, 6, 4));
        // the receiver is untouched
        assert_eq!(date.hour(), 18);
    }

    #[test]
    fn test_timestamp_millis() {
        assert_eq!(instant(1970, 0, 1).timestamp_millis(), 0);
        assert_eq!(instant_at(1970, 0, 1, 0, 0, 1, 500).timestamp_millis(), 1500);
        assert_eq!(instant(1969, 11, 31).timestamp_millis(), -86_400_000);
    }

    #[test]
    fn test_display() {
        let date = instant_at(2024, 0, 15, 9, 5, 3, 7);
        assert_eq!(date.to_string(), "2024-01-15T09:05:03.007");
        assert_eq!(instant(1991, 7, 15).to_string(), "1991-08-15T00:00:00.000");
    }

    #[test]
    fn test_from_str() {
        let date = "2024-01-15T09:05:03.007".parse::<Instant>().unwrap();
        assert_eq!(date, instant_at(2024, 0, 15, 9, 5, 3, 7));

        let date = " 2024-01-15 ".parse::<Instant>().unwrap();
        assert_eq!(date, instant(2024, 0, 15));
    }

    #[test]
    fn test_from_str_invalid() {
        for text in ["", "2024-13-01", "2024-02-30", "15/01/2024", "2024-01-15T25:00:00.000"] {
            let result = text.parse::<Instant>();
            assert!(matches!(result, Err(Error::InvalidFormat(_))), "accepted {text:?}");
        }
    }

    #[test]
    fn test_ordering() {
        let earlier = instant_at(2024, 0, 15, 9, 0, 0, 0);
        let later = instant_at(2024, 0, 15, 9, 0, 0, 1);
        assert!(earlier < later);
        assert!(instant(2023, 11, 31) < instant(2024, 0, 1));
    }

    #[test]
    fn test_serde_string_format() {
        let date = instant_at(2024, 1, 29, 23, 59, 59, 999);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""2024-02-29T23:59:59.999""#);
        let parsed: Instant = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_serde_validation() {
        let result: Result<Instant, _> = serde_json::from_str(r#""2024-02-30""#);
        assert!(result.is_err());

        let result: Result<Instant, _> = serde_json::from_str(r#""2024-02-29""#);
        assert!(result.is_ok());
    }

    #[test]
    fn test_error_display() {
        let err = Instant::new(2024, 12, 1, 0, 0, 0, 0).unwrap_err();
        assert!(err.to_string().contains("month 12 (zero-based)"));
    }
}
