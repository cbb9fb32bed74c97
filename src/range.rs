use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Instant, RANGE_SEPARATOR};

/// An ordered pair of possibly-absent bounds.
/// An absent bound leaves that side of the range open.
///
/// The pair is taken as given: nothing checks that `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateRange {
    start: Option<Instant>,
    end:   Option<Instant>,
}

impl DateRange {
    pub const fn new(start: Option<Instant>, end: Option<Instant>) -> Self {
        Self { start, end }
    }

    /// Range with neither bound set
    pub const fn unbounded() -> Self {
        Self { start: None, end: None }
    }

    /// Returns the start bound of the range
    pub const fn start(&self) -> Option<Instant> {
        self.start
    }

    /// Returns the end bound of the range
    pub const fn end(&self) -> Option<Instant> {
        self.end
    }

    /// Returns both bounds as a tuple
    pub const fn bounds(&self) -> (Option<Instant>, Option<Instant>) {
        (self.start, self.end)
    }
}

impl From<(Option<Instant>, Option<Instant>)> for DateRange {
    fn from((start, end): (Option<Instant>, Option<Instant>)) -> Self {
        Self::new(start, end)
    }
}

impl From<DateRange> for (Option<Instant>, Option<Instant>) {
    fn from(range: DateRange) -> Self {
        range.bounds()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(start) = self.start {
            write!(f, "{start}")?;
        }
        write!(f, "{RANGE_SEPARATOR}")?;
        if let Some(end) = self.end {
            write!(f, "{end}")?;
        }
        Ok(())
    }
}

impl FromStr for DateRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(Error::InvalidRange(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    Error::InvalidRange(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
                })?;
                Ok(Self::new(parse_bound(start_str)?, parse_bound(end_str)?))
            },
            _ => Err(Error::InvalidRange(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

fn parse_bound(s: &str) -> Result<Option<Instant>, Error> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse().map(Some)
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
