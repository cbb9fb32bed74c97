//! Conversion between [`Instant`]s and zone-aware calendar values.
//!
//! A calendar value is built from an instant's broken-down fields, never from
//! its timestamp, so the configured [`TimezoneAdjustment`](crate::TimezoneAdjustment)
//! decides which absolute moment those fields name.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};

use crate::{CalendarConfig, DateRange, Instant, Locale};

/// Diagnostics recorded when a calendar value was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParsingFlags {
    /// Built from an absent input.
    pub null_input:     bool,
    /// Built from text or fields that did not describe a date.
    pub invalid_format: bool,
    /// Parser diagnostic, when a pattern parse failed.
    pub parse_error:    Option<chrono::ParseError>,
}

/// Zone-aware calendar value.
///
/// Absence and invalidity are separate states: [`Self::is_null`] marks a value
/// built from an absent input, [`Self::is_valid`] is false for null values and
/// for values whose input could not be read as a date. A value built from
/// wall-clock fields keeps them even when the zone cannot place them.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarValue {
    datetime: Option<DateTime<FixedOffset>>,
    local:    Option<NaiveDateTime>,
    locale:   Option<Locale>,
    flags:    ParsingFlags,
}

/// Calendar values for the start and end of a range.
pub type CalendarRange = (CalendarValue, CalendarValue);

impl CalendarValue {
    /// Value standing for an absent input
    pub const fn null() -> Self {
        Self {
            datetime: None,
            local:    None,
            locale:   None,
            flags:    ParsingFlags {
                null_input:     true,
                invalid_format: false,
                parse_error:    None,
            },
        }
    }

    /// Value for input that could not be read as a date
    pub const fn invalid(parse_error: Option<chrono::ParseError>) -> Self {
        Self {
            datetime: None,
            local:    None,
            locale:   None,
            flags:    ParsingFlags {
                null_input: false,
                invalid_format: true,
                parse_error,
            },
        }
    }

    /// Places `local` wall-clock fields in the configured zone
    pub fn from_local(local: NaiveDateTime, config: &CalendarConfig) -> Self {
        let datetime = config
            .timezone
            .offset_for(&local)
            .and_then(|offset| offset.from_local_datetime(&local).single());
        match datetime {
            Some(datetime) => Self {
                datetime: Some(datetime),
                local:    Some(local),
                locale:   None,
                flags:    ParsingFlags::default(),
            },
            None => {
                log::debug!("no {:?} offset places {local}", config.timezone);
                Self {
                    local: Some(local),
                    ..Self::invalid(None)
                }
            },
        }
    }

    #[must_use]
    pub fn with_locale(mut self, locale: Option<Locale>) -> Self {
        self.locale = locale;
        self
    }

    pub const fn is_valid(&self) -> bool {
        self.datetime.is_some() && !self.flags.null_input && !self.flags.invalid_format
    }

    pub const fn is_null(&self) -> bool {
        self.flags.null_input
    }

    pub const fn datetime(&self) -> Option<DateTime<FixedOffset>> {
        self.datetime
    }

    /// Wall-clock fields the value was built from, whether or not it is valid
    pub const fn local_datetime(&self) -> Option<NaiveDateTime> {
        self.local
    }

    pub const fn locale(&self) -> Option<Locale> {
        self.locale
    }

    pub const fn parsing_flags(&self) -> &ParsingFlags {
        &self.flags
    }

    /// Whether the value's calendar day lies within `[min, max]`, bounds included.
    /// The day is read from the literal fields, so validity is not checked.
    pub fn is_between(&self, min: Instant, max: Instant) -> bool {
        self.local.is_some_and(|local| {
            let day = local.date();
            min.date() <= day && day <= max.date()
        })
    }
}

/// Calendar value for `date`; a null value when `date` is absent
pub fn date_to_calendar_value(date: Option<Instant>, config: &CalendarConfig) -> CalendarValue {
    let Some(date) = date else {
        return CalendarValue::null();
    };
    log::trace!("placing {date} in {:?}", config.timezone);
    CalendarValue::from_local(date.naive(), config)
}

/// Instant holding the value's wall-clock fields.
///
/// Fields are taken literally whether or not the value is valid, so an invalid
/// value built from fields still gives `Some`. An absent value gives `None`, as
/// do null values and unparsable text, which carry no fields.
pub fn calendar_value_to_date(value: Option<&CalendarValue>) -> Option<Instant> {
    value?.local_datetime().map(Instant::from)
}

pub fn date_range_to_calendar_range(range: Option<DateRange>, config: &CalendarConfig) -> Option<CalendarRange> {
    let range = range?;
    Some((
        date_to_calendar_value(range.start(), config),
        date_to_calendar_value(range.end(), config),
    ))
}

pub fn calendar_range_to_date_range(range: Option<&CalendarRange>) -> Option<DateRange> {
    let (start, end) = range?;
    Some(DateRange::new(
        calendar_value_to_date(Some(start)),
        calendar_value_to_date(Some(end)),
    ))
}

/// Whether `value` was built from an absent input. Invalid values are not null.
pub const fn is_null_calendar_value(value: &CalendarValue) -> bool {
    value.is_null()
}

/// Whether `value` is valid and its calendar day lies within `[min, max]`
pub fn is_calendar_value_valid_and_in_range(value: &CalendarValue, min: Instant, max: Instant) -> bool {
    value.is_valid() && value.is_between(min, max)
}
