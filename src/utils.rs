//! Utility calendar equations over epoch days.
//!
//! All equations operate on the proleptic Gregorian calendar with a day zero
//! of 1970-01-01. Months are 1-based.

/// Days elapsed at the start of each month for a common year.
const MONTH_STARTS: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Whether `year` is a Gregorian leap year.
pub(crate) fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `year`.
pub(crate) fn days_in_year(year: i32) -> i64 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Returns the number of days in `month` (1..=12) of `year`.
pub(crate) fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => {
            debug_assert!(false, "month out of range: {month}");
            30
        }
    }
}

/// Returns the epoch day of January 1 of `year`.
pub(crate) fn epoch_days_for_year(year: i32) -> i64 {
    let y = i64::from(year);
    365 * (y - 1970) + (y - 1969).div_euclid(4) - (y - 1901).div_euclid(100)
        + (y - 1601).div_euclid(400)
}

/// Returns the 1-based ordinal day of `year` for `month`/`day`.
pub(crate) fn day_of_year(year: i32, month: u8, day: u8) -> u16 {
    let leap = i64::from(month > 2 && is_leap_year(year));
    (MONTH_STARTS[usize::from(month - 1)] + leap + i64::from(day)) as u16
}

/// Returns the epoch day for a valid `year`/`month`/`day` triple.
pub(crate) fn epoch_days_from_ymd(year: i32, month: u8, day: u8) -> i64 {
    epoch_days_for_year(year) + i64::from(day_of_year(year, month, day)) - 1
}

/// Decomposes an epoch day into its `(year, month, day)` fields.
pub(crate) fn ymd_from_epoch_days(epoch_days: i64) -> (i32, u8, u8) {
    // The Gregorian cycle averages 146_097 days per 400 years.
    let mut year = 1970 + ((epoch_days * 400).div_euclid(146_097)) as i32;
    while epoch_days_for_year(year) > epoch_days {
        year -= 1;
    }
    while epoch_days_for_year(year) + days_in_year(year) <= epoch_days {
        year += 1;
    }

    let mut remainder = epoch_days - epoch_days_for_year(year);
    let mut month = 1u8;
    while remainder >= i64::from(days_in_month(year, month)) {
        remainder -= i64::from(days_in_month(year, month));
        month += 1;
    }
    (year, month, remainder as u8 + 1)
}

/// Returns the day of week for an epoch day, with 1=Sunday .. 7=Saturday.
pub(crate) fn day_of_week(epoch_days: i64) -> u8 {
    // Day zero, 1970-01-01, was a Thursday.
    ((epoch_days + 4).rem_euclid(7)) as u8 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2012));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2013));
        assert_eq!(days_in_month(2012, 2), 29);
        assert_eq!(days_in_month(2013, 2), 28);
    }

    #[test]
    fn year_starts() {
        assert_eq!(epoch_days_for_year(1970), 0);
        assert_eq!(epoch_days_for_year(1971), 365);
        assert_eq!(epoch_days_for_year(1972), 730);
        // 1972 was a leap year.
        assert_eq!(epoch_days_for_year(1973), 1096);
        assert_eq!(epoch_days_for_year(1969), -365);
        assert_eq!(epoch_days_for_year(1968), -731);
    }

    #[test]
    fn ordinal_days() {
        assert_eq!(day_of_year(2013, 1, 2), 2);
        assert_eq!(day_of_year(2012, 9, 2), 246);
        assert_eq!(day_of_year(2012, 12, 31), 366);
        assert_eq!(day_of_year(2013, 12, 31), 365);
    }

    #[test]
    fn epoch_day_round_trips() {
        for days in [-1_000_000, -719_162, -1, 0, 1, 59, 60, 15_585, 1_000_000] {
            let (y, m, d) = ymd_from_epoch_days(days);
            assert_eq!(epoch_days_from_ymd(y, m, d), days, "epoch day {days}");
        }
        assert_eq!(ymd_from_epoch_days(0), (1970, 1, 1));
        assert_eq!(ymd_from_epoch_days(-1), (1969, 12, 31));
        assert_eq!(ymd_from_epoch_days(15_585), (2012, 9, 2));
        // 0001-01-01 is 719_162 days before the epoch.
        assert_eq!(ymd_from_epoch_days(-719_162), (1, 1, 1));
    }

    #[test]
    fn weekdays() {
        // 1970-01-01 was a Thursday.
        assert_eq!(day_of_week(0), 5);
        // 2012-09-02 was a Sunday.
        assert_eq!(day_of_week(15_585), 1);
        // 2013-01-02 was a Wednesday.
        assert_eq!(day_of_week(epoch_days_from_ymd(2013, 1, 2)), 4);
        // 1969-12-28 was a Sunday.
        assert_eq!(day_of_week(-4), 1);
    }
}
