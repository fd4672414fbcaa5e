//! This module implements the public `DateTime` value and its `Weekday`
//! navigation type.

use crate::{
    iso::IsoDateTime,
    parsers::{self, FormattableDateTime, DEFAULT_PATTERN},
    DateTimeResult, ParseError, DEFAULT_DATETIME_FORMAT, MILLISECONDS_PER_DAY,
    MILLISECONDS_PER_HOUR, MILLISECONDS_PER_MINUTE, MILLISECONDS_PER_SECOND,
};
use alloc::string::String;
use core::cmp::Ordering;
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

#[cfg(feature = "sys")]
use crate::sys;
#[cfg(feature = "sys")]
use web_time::SystemTime;

/// The day-of-week enumeration, ordered Sunday-first with ordinals 0..=6.
///
/// Distinct from [`DateTime::day_of_week`], which uses the underlying
/// calendar convention of 1=Sunday .. 7=Saturday.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// Returns this weekday's 0-based ordinal, with Sunday as 0.
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Maps a 1=Sunday .. 7=Saturday day-of-week value onto a `Weekday`.
    pub(crate) fn from_day_of_week(day_of_week: u8) -> Self {
        match day_of_week {
            1 => Self::Sunday,
            2 => Self::Monday,
            3 => Self::Tuesday,
            4 => Self::Wednesday,
            5 => Self::Thursday,
            6 => Self::Friday,
            _ => Self::Saturday,
        }
    }
}

/// The instant with timestamp 0, 1970-01-01 00:00:00.
pub const STANDARD_GMT_TIME: DateTime = DateTime::from_timestamp(0);

/// A calendar date-time value with millisecond resolution.
///
/// A `DateTime` is an absolute instant together with the calendar field
/// bundle it denotes; the two are kept consistent through every mutation.
/// Months are 1-based, unlike many platform calendars. Out-of-range fields
/// never error: they normalize by overflow, so setting day 32 of January
/// carries into February.
///
/// Setters and arithmetic mutate in place and return the receiver, so calls
/// chain. The type is `Copy`; take a copy first when the original value is
/// still needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    epoch_milliseconds: i64,
}

// ==== Construction ====

impl DateTime {
    /// Creates a `DateTime` from a timestamp in milliseconds since the Unix
    /// epoch.
    pub const fn from_timestamp(epoch_milliseconds: i64) -> Self {
        Self { epoch_milliseconds }
    }

    /// Creates a `DateTime` from a year, 1-based month, and day, with the
    /// time fields zeroed.
    pub fn from_ymd(year: i32, month: i32, day: i32) -> Self {
        Self::new(year, month, day, 0, 0, 0, 0)
    }

    /// Creates a `DateTime` from a full field bundle. The month is 1-based.
    pub fn new(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
        millisecond: i32,
    ) -> Self {
        Self::from_iso(IsoDateTime::balance(
            i64::from(year),
            i64::from(month),
            i64::from(day),
            i64::from(hour),
            i64::from(minute),
            i64::from(second),
            i64::from(millisecond),
        ))
    }

    /// Creates a `DateTime` from the current system time.
    #[cfg(feature = "sys")]
    pub fn now() -> Self {
        Self::from_timestamp(sys::get_system_milliseconds())
    }

    /// Creates a `DateTime` from a platform instant.
    #[cfg(feature = "sys")]
    pub fn from_system_time(time: SystemTime) -> Self {
        Self::from_timestamp(sys::system_time_to_milliseconds(time))
    }

    fn from_iso(iso: IsoDateTime) -> Self {
        Self::from_timestamp(iso.epoch_milliseconds())
    }

    fn iso(&self) -> IsoDateTime {
        IsoDateTime::from_epoch_milliseconds(self.epoch_milliseconds)
    }
}

#[cfg(feature = "sys")]
impl Default for DateTime {
    /// Equivalent to [`DateTime::now`].
    fn default() -> Self {
        Self::now()
    }
}

impl From<i64> for DateTime {
    fn from(epoch_milliseconds: i64) -> Self {
        Self::from_timestamp(epoch_milliseconds)
    }
}

#[cfg(feature = "sys")]
impl From<SystemTime> for DateTime {
    fn from(time: SystemTime) -> Self {
        Self::from_system_time(time)
    }
}

// ==== Field access ====

impl DateTime {
    /// Returns the timestamp in milliseconds since the Unix epoch.
    pub const fn timestamp(&self) -> i64 {
        self.epoch_milliseconds
    }

    /// Returns this instant as a platform `SystemTime`.
    #[cfg(feature = "sys")]
    pub fn to_system_time(&self) -> SystemTime {
        sys::milliseconds_to_system_time(self.epoch_milliseconds)
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.iso().date.year
    }

    /// Returns the 1-based month, with January as 1.
    pub fn month(&self) -> u8 {
        self.iso().date.month
    }

    /// Returns the day of the month.
    pub fn day(&self) -> u8 {
        self.iso().date.day
    }

    /// Returns the hour of the day on the 24-hour clock.
    pub fn hour(&self) -> u8 {
        self.iso().time.hour
    }

    /// Returns the minute.
    pub fn minute(&self) -> u8 {
        self.iso().time.minute
    }

    /// Returns the second.
    pub fn second(&self) -> u8 {
        self.iso().time.second
    }

    /// Returns the millisecond.
    pub fn millisecond(&self) -> u16 {
        self.iso().time.millisecond
    }

    /// Returns the 1-based ordinal day of the year.
    pub fn day_of_year(&self) -> u16 {
        self.iso().date.day_of_year()
    }

    /// Returns the day of week in the underlying calendar convention,
    /// 1=Sunday .. 7=Saturday.
    pub fn day_of_week(&self) -> u8 {
        self.iso().date.day_of_week()
    }

    /// Returns the [`Weekday`] of this instant.
    pub fn weekday(&self) -> Weekday {
        Weekday::from_day_of_week(self.day_of_week())
    }
}

// ==== Field mutation ====

impl DateTime {
    fn rebalance(
        &mut self,
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
        millisecond: i64,
    ) -> &mut Self {
        self.epoch_milliseconds =
            IsoDateTime::balance(year, month, day, hour, minute, second, millisecond)
                .epoch_milliseconds();
        self
    }

    /// Sets the year, normalizing by overflow.
    pub fn set_year(&mut self, year: i32) -> &mut Self {
        let iso = self.iso();
        self.rebalance(
            i64::from(year),
            i64::from(iso.date.month),
            i64::from(iso.date.day),
            i64::from(iso.time.hour),
            i64::from(iso.time.minute),
            i64::from(iso.time.second),
            i64::from(iso.time.millisecond),
        )
    }

    /// Sets the 1-based month, normalizing by overflow. Note the lenient-set
    /// contract: setting February on a day-31 value overflows into March.
    pub fn set_month(&mut self, month: i32) -> &mut Self {
        let iso = self.iso();
        self.rebalance(
            i64::from(iso.date.year),
            i64::from(month),
            i64::from(iso.date.day),
            i64::from(iso.time.hour),
            i64::from(iso.time.minute),
            i64::from(iso.time.second),
            i64::from(iso.time.millisecond),
        )
    }

    /// Sets the day of the month, normalizing by overflow.
    pub fn set_day(&mut self, day: i32) -> &mut Self {
        let iso = self.iso();
        self.rebalance(
            i64::from(iso.date.year),
            i64::from(iso.date.month),
            i64::from(day),
            i64::from(iso.time.hour),
            i64::from(iso.time.minute),
            i64::from(iso.time.second),
            i64::from(iso.time.millisecond),
        )
    }

    /// Sets the hour of the day, normalizing by overflow.
    pub fn set_hour(&mut self, hour: i32) -> &mut Self {
        let iso = self.iso();
        self.rebalance(
            i64::from(iso.date.year),
            i64::from(iso.date.month),
            i64::from(iso.date.day),
            i64::from(hour),
            i64::from(iso.time.minute),
            i64::from(iso.time.second),
            i64::from(iso.time.millisecond),
        )
    }

    /// Sets the minute, normalizing by overflow.
    pub fn set_minute(&mut self, minute: i32) -> &mut Self {
        let iso = self.iso();
        self.rebalance(
            i64::from(iso.date.year),
            i64::from(iso.date.month),
            i64::from(iso.date.day),
            i64::from(iso.time.hour),
            i64::from(minute),
            i64::from(iso.time.second),
            i64::from(iso.time.millisecond),
        )
    }

    /// Sets the second, normalizing by overflow.
    pub fn set_second(&mut self, second: i32) -> &mut Self {
        let iso = self.iso();
        self.rebalance(
            i64::from(iso.date.year),
            i64::from(iso.date.month),
            i64::from(iso.date.day),
            i64::from(iso.time.hour),
            i64::from(iso.time.minute),
            i64::from(second),
            i64::from(iso.time.millisecond),
        )
    }

    /// Sets the millisecond, normalizing by overflow.
    pub fn set_millisecond(&mut self, millisecond: i32) -> &mut Self {
        let iso = self.iso();
        self.rebalance(
            i64::from(iso.date.year),
            i64::from(iso.date.month),
            i64::from(iso.date.day),
            i64::from(iso.time.hour),
            i64::from(iso.time.minute),
            i64::from(iso.time.second),
            i64::from(millisecond),
        )
    }

    /// Sets the year, 1-based month, and day, keeping the time fields.
    pub fn set_date(&mut self, year: i32, month: i32, day: i32) -> &mut Self {
        let time = self.iso().time;
        self.rebalance(
            i64::from(year),
            i64::from(month),
            i64::from(day),
            i64::from(time.hour),
            i64::from(time.minute),
            i64::from(time.second),
            i64::from(time.millisecond),
        )
    }

    /// Sets the time fields, keeping the date.
    pub fn set_time(&mut self, hour: i32, minute: i32, second: i32, millisecond: i32) -> &mut Self {
        let date = self.iso().date;
        self.rebalance(
            i64::from(date.year),
            i64::from(date.month),
            i64::from(date.day),
            i64::from(hour),
            i64::from(minute),
            i64::from(second),
            i64::from(millisecond),
        )
    }

    /// Sets the full field bundle.
    pub fn set_datetime(
        &mut self,
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
        millisecond: i32,
    ) -> &mut Self {
        self.rebalance(
            i64::from(year),
            i64::from(month),
            i64::from(day),
            i64::from(hour),
            i64::from(minute),
            i64::from(second),
            i64::from(millisecond),
        )
    }
}

// ==== Arithmetic ====

impl DateTime {
    /// Adds a signed number of years, clamping the day to the target month's
    /// length (Feb 29 plus one year is Feb 28).
    pub fn add_years(&mut self, years: i64) -> &mut Self {
        *self = Self::from_iso(self.iso().add_years(years));
        self
    }

    /// Adds a signed number of months, clamping the day to the target
    /// month's length (Jan 31 plus one month is Feb 28 or 29, never March).
    pub fn add_months(&mut self, months: i64) -> &mut Self {
        *self = Self::from_iso(self.iso().add_months(months));
        self
    }

    fn add_milliseconds_total(&mut self, millis: i64) -> &mut Self {
        self.epoch_milliseconds = self.epoch_milliseconds.saturating_add(millis);
        self
    }

    /// Adds a signed number of days, carrying across month and year
    /// boundaries.
    pub fn add_days(&mut self, days: i64) -> &mut Self {
        self.add_milliseconds_total(days.saturating_mul(MILLISECONDS_PER_DAY))
    }

    /// Adds a signed number of wall-clock hours.
    pub fn add_hours(&mut self, hours: i64) -> &mut Self {
        self.add_milliseconds_total(hours.saturating_mul(MILLISECONDS_PER_HOUR))
    }

    /// Adds a signed number of minutes.
    pub fn add_minutes(&mut self, minutes: i64) -> &mut Self {
        self.add_milliseconds_total(minutes.saturating_mul(MILLISECONDS_PER_MINUTE))
    }

    /// Adds a signed number of seconds.
    pub fn add_seconds(&mut self, seconds: i64) -> &mut Self {
        self.add_milliseconds_total(seconds.saturating_mul(MILLISECONDS_PER_SECOND))
    }

    /// Adds a signed number of milliseconds.
    pub fn add_milliseconds(&mut self, milliseconds: i64) -> &mut Self {
        self.add_milliseconds_total(milliseconds)
    }

    /// Jumps to the `span`-th occurrence of `target`, counted in whole weeks
    /// from the occurrence of `target` within the current Sunday..Saturday
    /// week.
    ///
    /// With `span == 0` the result stays within the current week, which may
    /// be earlier than `self` when `target` has a smaller ordinal. Positive
    /// spans move forward by whole weeks from that in-week position,
    /// negative spans backward.
    pub fn add_weekdays(&mut self, target: Weekday, span: i64) -> &mut Self {
        let diff = i64::from(target.ordinal()) - i64::from(self.weekday().ordinal());
        self.add_days(diff + 7 * span)
    }
}

// ==== Comparison ====

impl DateTime {
    /// Compares two instants, equivalent to `a.compare_to(&b)`.
    pub fn compare(a: &DateTime, b: &DateTime) -> Ordering {
        a.compare_to(b)
    }

    /// Compares this instant with another by absolute timestamp.
    pub fn compare_to(&self, other: &DateTime) -> Ordering {
        self.epoch_milliseconds.cmp(&other.epoch_milliseconds)
    }

    /// Whether this instant is strictly before `other`.
    pub fn before(&self, other: &DateTime) -> bool {
        self.epoch_milliseconds < other.epoch_milliseconds
    }

    /// Whether this instant is strictly after `other`.
    pub fn after(&self, other: &DateTime) -> bool {
        self.epoch_milliseconds > other.epoch_milliseconds
    }

    /// Returns the signed millisecond difference `self - other`.
    pub fn diff(&self, other: &DateTime) -> i64 {
        self.epoch_milliseconds - other.epoch_milliseconds
    }
}

// ==== Formatting ====

impl DateTime {
    /// Formats this instant with the given pattern.
    ///
    /// Supported tokens are `yyyy`, `yy`, `MM`, `dd`, `HH`, `mm`, `ss`, and
    /// `SSS`; every other character renders literally.
    pub fn to_string_with(&self, pattern: &str) -> String {
        parsers::format_iso(self.iso(), pattern)
    }

    /// Formats a raw timestamp with the default pattern.
    pub fn format_timestamp(epoch_milliseconds: i64) -> String {
        Self::from_timestamp(epoch_milliseconds).write_to_string().into_owned()
    }

    /// Formats a raw timestamp with the given pattern.
    pub fn format_timestamp_with(epoch_milliseconds: i64, pattern: &str) -> String {
        Self::from_timestamp(epoch_milliseconds).to_string_with(pattern)
    }

    /// Formats a platform instant with the default pattern.
    #[cfg(feature = "sys")]
    pub fn format_system_time(time: SystemTime) -> String {
        Self::from_system_time(time).write_to_string().into_owned()
    }

    /// Formats a platform instant with the given pattern.
    #[cfg(feature = "sys")]
    pub fn format_system_time_with(time: SystemTime, pattern: &str) -> String {
        Self::from_system_time(time).to_string_with(pattern)
    }
}

impl Writeable for DateTime {
    /// Writes this instant in the default `yyyy-MM-dd HH:mm:ss` pattern.
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        FormattableDateTime {
            iso: self.iso(),
            items: &DEFAULT_PATTERN,
        }
        .write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        FormattableDateTime {
            iso: self.iso(),
            items: &DEFAULT_PATTERN,
        }
        .writeable_length_hint()
    }
}

impl_display_with_writeable!(DateTime);

// ==== Parsing and truncation ====

impl DateTime {
    /// Parses `text` with the default pattern.
    ///
    /// Blank input is absent rather than an error and returns `Ok(None)`.
    /// Input that does not conform to the pattern is a [`ParseError`].
    pub fn parse(text: &str) -> DateTimeResult<Option<DateTime>> {
        Self::parse_with(text, DEFAULT_DATETIME_FORMAT)
    }

    /// Parses `text` with the given pattern, falling back to the default
    /// pattern when `pattern` is blank.
    pub fn parse_with(text: &str, pattern: &str) -> DateTimeResult<Option<DateTime>> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        let pattern = if pattern.trim().is_empty() {
            DEFAULT_DATETIME_FORMAT
        } else {
            pattern
        };
        parsers::parse_pattern(text, pattern).map(|iso| Some(Self::from_iso(iso)))
    }

    /// Parses `text` with the default pattern, returning `default` on blank
    /// input or any parse failure.
    pub fn try_parse(text: &str, default: Option<DateTime>) -> Option<DateTime> {
        Self::try_parse_with(text, DEFAULT_DATETIME_FORMAT, default)
    }

    /// Parses `text` with the given pattern, returning `default` on blank
    /// input or any parse failure.
    pub fn try_parse_with(text: &str, pattern: &str, default: Option<DateTime>) -> Option<DateTime> {
        if text.trim().is_empty() {
            return default;
        }
        match Self::parse_with(text, pattern) {
            Ok(Some(parsed)) => Some(parsed),
            _ => default,
        }
    }

    /// Rounds this instant down to the precision of `pattern` by formatting
    /// and re-parsing it. Fields the pattern does not cover collapse to
    /// their epoch defaults: truncating to `yyyy-MM-dd` zeroes the time
    /// fields.
    ///
    /// Fails with a [`ParseError`] when the pattern is blank or does not
    /// round-trip. A pattern with no date tokens formats to its literals and
    /// parses back to the epoch instant; that outcome is parse-dependent
    /// rather than a deliberate contract.
    pub fn truncate(&self, pattern: &str) -> DateTimeResult<DateTime> {
        if pattern.trim().is_empty() {
            return Err(ParseError::syntax().with_message("cannot truncate with a blank pattern"));
        }
        parsers::parse_pattern(&self.to_string_with(pattern), pattern).map(Self::from_iso)
    }

    /// Same as [`Self::truncate`], but returns `default` on any failure.
    pub fn try_truncate(&self, pattern: &str, default: DateTime) -> DateTime {
        self.truncate(pattern).unwrap_or(default)
    }
}

// ==== Test land ====
