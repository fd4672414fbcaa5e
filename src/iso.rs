//! This module implements the internal calendar field records.
//!
//! The three record types are:
//!   - `IsoDateTime`
//!   - `IsoDate`
//!   - `IsoTime`
//!
//! An `IsoDate` holds the `year`, `month` (1-based), and `day` fields; an
//! `IsoTime` holds `hour`, `minute`, `second`, and `millisecond`; an
//! `IsoDateTime` holds both. Records are always normalized: every stored
//! field is within its calendar range, and the record maps one-to-one onto an
//! epoch-millisecond instant.

use crate::{utils, MILLISECONDS_PER_DAY, MILLISECONDS_PER_HOUR, MILLISECONDS_PER_MINUTE};

/// The `year`, `month`, and `day` internal fields. `month` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl Default for IsoDate {
    /// The epoch date, 1970-01-01. Fields left unset by a pattern collapse
    /// to this date.
    fn default() -> Self {
        Self {
            year: 1970,
            month: 1,
            day: 1,
        }
    }
}

impl IsoDate {
    /// Returns this date's epoch day.
    pub(crate) fn to_epoch_days(self) -> i64 {
        utils::epoch_days_from_ymd(self.year, self.month, self.day)
    }

    /// Decomposes an epoch day into a normalized date record.
    pub(crate) fn from_epoch_days(epoch_days: i64) -> Self {
        let (year, month, day) = utils::ymd_from_epoch_days(epoch_days);
        Self { year, month, day }
    }

    /// Returns the day of week with 1=Sunday .. 7=Saturday.
    pub(crate) fn day_of_week(self) -> u8 {
        utils::day_of_week(self.to_epoch_days())
    }

    /// Returns the 1-based ordinal day of the year.
    pub(crate) fn day_of_year(self) -> u16 {
        utils::day_of_year(self.year, self.month, self.day)
    }
}

/// The `hour`, `minute`, `second`, and `millisecond` internal fields.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
}

impl IsoTime {
    /// Returns this time as milliseconds into its day.
    pub(crate) fn to_day_milliseconds(self) -> i64 {
        i64::from(self.hour) * MILLISECONDS_PER_HOUR
            + i64::from(self.minute) * MILLISECONDS_PER_MINUTE
            + i64::from(self.second) * 1000
            + i64::from(self.millisecond)
    }

    /// Decomposes milliseconds into a day (`0..MILLISECONDS_PER_DAY`) into a
    /// normalized time record.
    pub(crate) fn from_day_milliseconds(millis: i64) -> Self {
        debug_assert!((0..MILLISECONDS_PER_DAY).contains(&millis));
        Self {
            hour: (millis / MILLISECONDS_PER_HOUR) as u8,
            minute: (millis / MILLISECONDS_PER_MINUTE % 60) as u8,
            second: (millis / 1000 % 60) as u8,
            millisecond: (millis % 1000) as u16,
        }
    }
}

/// The combined date and time field record.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoDateTime {
    pub date: IsoDate,
    pub time: IsoTime,
}

impl IsoDateTime {
    /// Balances raw, possibly out-of-range fields into a normalized record.
    ///
    /// Overflow carries into the next larger unit: month 13 rolls into the
    /// next year, day 32 of January into February, hour -1 into the previous
    /// day. This is the lenient field contract of the underlying calendar
    /// engine; it never fails.
    pub(crate) fn balance(
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
        millisecond: i64,
    ) -> Self {
        let balanced_year = year + (month - 1).div_euclid(12);
        let balanced_month = ((month - 1).rem_euclid(12)) as u8 + 1;

        let time_millis = millisecond + 1000 * (second + 60 * (minute + 60 * hour));
        let day_carry = time_millis.div_euclid(MILLISECONDS_PER_DAY);

        let epoch_days = utils::epoch_days_from_ymd(balanced_year as i32, balanced_month, 1)
            + (day - 1)
            + day_carry;

        Self {
            date: IsoDate::from_epoch_days(epoch_days),
            time: IsoTime::from_day_milliseconds(time_millis.rem_euclid(MILLISECONDS_PER_DAY)),
        }
    }

    /// Decomposes an epoch-millisecond instant into its field record.
    pub(crate) fn from_epoch_milliseconds(epoch_ms: i64) -> Self {
        Self {
            date: IsoDate::from_epoch_days(epoch_ms.div_euclid(MILLISECONDS_PER_DAY)),
            time: IsoTime::from_day_milliseconds(epoch_ms.rem_euclid(MILLISECONDS_PER_DAY)),
        }
    }

    /// Returns the epoch-millisecond instant this record denotes.
    pub(crate) fn epoch_milliseconds(&self) -> i64 {
        self.date.to_epoch_days() * MILLISECONDS_PER_DAY + self.time.to_day_milliseconds()
    }

    /// Adds a signed number of months, clamping the day to the last valid
    /// day of the target month. Jan 31 plus one month is Feb 28 (or 29),
    /// never a day of March.
    pub(crate) fn add_months(&self, months: i64) -> Self {
        let total = i64::from(self.date.month) - 1 + months;
        let year = i64::from(self.date.year) + total.div_euclid(12);
        let month = total.rem_euclid(12) as u8 + 1;
        let day = self
            .date
            .day
            .min(utils::days_in_month(year as i32, month));
        Self {
            date: IsoDate {
                year: year as i32,
                month,
                day,
            },
            time: self.time,
        }
    }

    /// Adds a signed number of years with the same day clamp as
    /// [`Self::add_months`] (Feb 29 plus one year is Feb 28).
    pub(crate) fn add_years(&self, years: i64) -> Self {
        self.add_months(years * 12)
    }
}
