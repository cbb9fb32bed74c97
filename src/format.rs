//! Rendering instants as text and reading them back.
//!
//! A [`DateFormat`] is either a chrono strftime pattern, rendered through the
//! locale registry, or a caller-supplied [`DateFormatter`]. Formatters never
//! see a locale.

use std::fmt::{self, Write as _};

use chrono::{Datelike, NaiveDateTime, NaiveTime};
use chrono::format::{ParseErrorKind, ParseResult, Parsed, StrftimeItems, parse};

use crate::{
    CalendarConfig, CalendarValue, Error, Instant, Locale, date_to_calendar_value, time_reference_day,
};

/// Caller-supplied text conversion for instants.
pub trait DateFormatter {
    fn date_to_string(&self, date: &Instant) -> String;

    /// Reads `text` back, or `None` when it is not a date.
    fn string_to_date(&self, text: &str) -> Option<Instant>;
}

#[derive(Clone, Copy)]
pub enum DateFormat<'a> {
    /// chrono strftime pattern, e.g. `%Y-%m-%d`
    Pattern(&'a str),
    Formatter(&'a dyn DateFormatter),
}

impl fmt::Debug for DateFormat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(pattern) => f.debug_tuple("Pattern").field(pattern).finish(),
            Self::Formatter(_) => f.write_str("Formatter(..)"),
        }
    }
}

impl<'a> From<&'a str> for DateFormat<'a> {
    fn from(pattern: &'a str) -> Self {
        Self::Pattern(pattern)
    }
}

/// Resolves a locale identifier such as `fr_FR` or `en-US`.
/// An absent or empty identifier resolves to `None`.
///
/// # Errors
/// Returns `Error::UnknownLocale` if the identifier is not registered.
pub fn lookup_locale(identifier: Option<&str>) -> Result<Option<Locale>, Error> {
    let Some(identifier) = identifier.filter(|id| !id.is_empty()) else {
        return Ok(None);
    };
    let normalized = identifier.replace('-', "_");
    Locale::try_from(normalized.as_str()).map(Some).map_err(|_| {
        log::debug!("locale {identifier:?} is not registered");
        Error::UnknownLocale(identifier.to_owned())
    })
}

/// Renders `date` with `format`.
///
/// A pattern is rendered in `locale`, or in the config's default locale when
/// `locale` is `None`. A formatter renders on its own and never sees the locale.
///
/// # Errors
/// Returns `Error::InvalidPattern` if the pattern cannot be rendered,
/// `Error::UnknownLocale` if the config's default locale is not registered, and
/// `Error::UnresolvedOffset` if the configured zone cannot place `date`.
pub fn to_formatted_string(
    date: Instant,
    format: DateFormat<'_>,
    locale: Option<Locale>,
    config: &CalendarConfig,
) -> Result<String, Error> {
    let pattern = match format {
        DateFormat::Formatter(formatter) => return Ok(formatter.date_to_string(&date)),
        DateFormat::Pattern(pattern) => pattern,
    };
    let locale = match locale {
        Some(locale) => locale,
        None => config.resolve_default_locale()?,
    };
    let datetime = date_to_calendar_value(Some(date), config)
        .datetime()
        .ok_or(Error::UnresolvedOffset(config.timezone, date))?;

    let mut rendered = String::new();
    write!(rendered, "{}", datetime.format_localized(pattern, locale))
        .map_err(|_| Error::InvalidPattern(pattern.to_owned()))?;
    Ok(rendered)
}

/// Reads `text` with `format` into a calendar value.
///
/// Text that does not match gives an invalid value, never a null one.
pub fn parse_formatted_string(
    text: &str,
    format: DateFormat<'_>,
    locale: Option<Locale>,
    config: &CalendarConfig,
) -> CalendarValue {
    match format {
        DateFormat::Formatter(formatter) => match formatter.string_to_date(text) {
            Some(date) => date_to_calendar_value(Some(date), config),
            None => {
                log::debug!("formatter rejected {text:?}");
                CalendarValue::invalid(None)
            },
        },
        DateFormat::Pattern(pattern) => match parse_pattern(text, pattern, locale) {
            Ok(local) => CalendarValue::from_local(local, config).with_locale(locale),
            Err(err) => {
                log::debug!("failed to parse {text:?} with pattern {pattern:?}: {err}");
                CalendarValue::invalid(Some(err))
            },
        },
    }
}

/// Renders `date` with `format`, resolving `locale_identifier` for patterns.
///
/// # Errors
/// Returns `Error::UnknownLocale` if a pattern is paired with an unregistered
/// identifier, plus the errors of [`to_formatted_string`].
pub fn format_with_locale(
    date: Instant,
    format: DateFormat<'_>,
    locale_identifier: Option<&str>,
    config: &CalendarConfig,
) -> Result<String, Error> {
    match format {
        DateFormat::Formatter(formatter) => Ok(formatter.date_to_string(&date)),
        DateFormat::Pattern(_) => to_formatted_string(date, format, lookup_locale(locale_identifier)?, config),
    }
}

fn parse_pattern(text: &str, pattern: &str, locale: Option<Locale>) -> ParseResult<NaiveDateTime> {
    let items = match locale {
        Some(locale) => StrftimeItems::new_with_locale(pattern, locale),
        None => StrftimeItems::new(pattern),
    };
    let mut parsed = Parsed::new();
    parse(&mut parsed, text.trim(), items)?;

    let date = match parsed.to_naive_date() {
        Ok(date) => date,
        Err(err) if err.kind() == ParseErrorKind::NotEnough => {
            fill_missing_date(&mut parsed)?;
            parsed.to_naive_date()?
        },
        Err(err) => return Err(err),
    };
    let time = match parsed.to_naive_time() {
        Ok(time) => time,
        Err(err) if err.kind() == ParseErrorKind::NotEnough => NaiveTime::MIN,
        Err(err) => return Err(err),
    };
    Ok(date.and_time(time))
}

/// Defaults the date fields a pattern left out: the reference year, January
/// and the 1st. Fields that were parsed are kept.
fn fill_missing_date(parsed: &mut Parsed) -> ParseResult<()> {
    let reference = time_reference_day();
    if parsed.year().is_none() && parsed.year_mod_100().is_none() && parsed.isoyear().is_none() {
        parsed.set_year(i64::from(reference.year()))?;
    }
    let week_based = parsed.ordinal().is_some()
        || parsed.isoweek().is_some()
        || parsed.week_from_sun().is_some()
        || parsed.week_from_mon().is_some();
    if week_based {
        return Ok(());
    }
    if parsed.month().is_none() {
        parsed.set_month(i64::from(reference.month()))?;
    }
    if parsed.day().is_none() {
        parsed.set_day(i64::from(reference.day()))?;
    }
    Ok(())
}
