//! Settings read by the calendar-value conversions and the pattern formatter.

use chrono::{FixedOffset, Local, NaiveDateTime, Offset, TimeZone};
use serde::{Deserialize, Serialize};

use crate::{Error, Locale, lookup_locale};

/// Zone a calendar value places its wall-clock fields in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimezoneAdjustment {
    /// No adjustment: fields are read in the system's local zone.
    #[default]
    Local,
    Utc,
    FixedOffset { seconds_east: i32 },
}

impl TimezoneAdjustment {
    /// Offset that applies to `local` wall-clock fields in this zone.
    ///
    /// Fields inside a daylight-saving gap take the offset in force at the
    /// same instant read as UTC. Returns `None` for a fixed offset of a day or more.
    pub fn offset_for(&self, local: &NaiveDateTime) -> Option<FixedOffset> {
        match *self {
            Self::Local => Some(
                Local
                    .offset_from_local_datetime(local)
                    .earliest()
                    .unwrap_or_else(|| Local.offset_from_utc_datetime(local))
                    .fix(),
            ),
            Self::Utc => FixedOffset::east_opt(0),
            Self::FixedOffset { seconds_east } => FixedOffset::east_opt(seconds_east),
        }
    }
}

/// Explicit stand-in for process-wide calendar settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub timezone:       TimezoneAdjustment,
    /// Locale pattern formatting falls back to when a call names none.
    /// Unset means the POSIX locale.
    pub default_locale: Option<String>,
}

impl CalendarConfig {
    pub fn with_timezone(mut self, timezone: TimezoneAdjustment) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = Some(locale.into());
        self
    }

    /// Resolves [`Self::default_locale`] against the locale registry.
    ///
    /// # Errors
    /// Returns `Error::UnknownLocale` if the configured identifier is not registered.
    pub fn resolve_default_locale(&self) -> Result<Locale, Error> {
        Ok(lookup_locale(self.default_locale.as_deref())?.unwrap_or(Locale::POSIX))
    }
}
