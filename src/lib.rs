//! The `datetime_rs` crate provides an ergonomic, millisecond-resolution
//! calendar date-time value.
//!
//! `DateTime` bundles the calendar fields `{year, month, day, hour, minute,
//! second, millisecond}` with the absolute instant they denote, and exposes
//! construction, field access, calendar-aware arithmetic, pattern-based
//! formatting and parsing, total ordering, truncation, and weekday
//! navigation. Months are 1-based everywhere in the public API.
//!
//! ```rust
//! use datetime_rs::{DateTime, Weekday};
//!
//! let mut dt = DateTime::new(2013, 1, 2, 3, 4, 5, 6);
//! assert_eq!(dt.to_string(), "2013-01-02 03:04:05");
//!
//! // Arithmetic mutates in place and returns the receiver for chaining.
//! dt.add_months(1).add_days(1);
//! assert_eq!(dt.to_string_with("yyyy-MM-dd"), "2013-02-03");
//! assert_eq!(dt.weekday(), Weekday::Sunday);
//!
//! // Jump to the Friday of the current Sunday..Saturday week.
//! let mut first = DateTime::from_ymd(2013, 1, 1);
//! first.add_weekdays(Weekday::Friday, 0);
//! assert_eq!(first.to_string_with("yyyy-MM-dd"), "2013-01-04");
//! ```
//!
//! All field/instant conversions use a fixed zero UTC offset, so the value is
//! an absolute instant; callers that need another zone convert explicitly.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod iso;

pub(crate) mod parsers;
#[cfg(feature = "sys")]
pub(crate) mod sys;
#[doc(hidden)]
pub(crate) mod utils;

mod datetime;

#[doc(inline)]
pub use error::ParseError;

pub use crate::datetime::{DateTime, Weekday, STANDARD_GMT_TIME};

/// The `datetime_rs` result type.
pub type DateTimeResult<T> = Result<T, ParseError>;

/// The default date-time pattern, `yyyy-MM-dd HH:mm:ss`.
pub const DEFAULT_DATETIME_FORMAT: &str = "yyyy-MM-dd HH:mm:ss";

// Relevant numeric constants
/// Milliseconds per second constant: 1000
pub const MILLISECONDS_PER_SECOND: i64 = 1000;
/// Seconds per minute constant: 60
pub const SECONDS_PER_MINUTE: i64 = 60;
/// Minutes per hour constant: 60
pub const MINUTES_PER_HOUR: i64 = 60;
/// Hours per day constant: 24
pub const HOURS_PER_DAY: i64 = 24;
/// Milliseconds per minute constant: 6e+4
pub const MILLISECONDS_PER_MINUTE: i64 = MILLISECONDS_PER_SECOND * SECONDS_PER_MINUTE;
/// Seconds per hour constant: 3600
pub const SECONDS_PER_HOUR: i64 = SECONDS_PER_MINUTE * MINUTES_PER_HOUR;
/// Milliseconds per hour constant: 3.6e+6
pub const MILLISECONDS_PER_HOUR: i64 = MILLISECONDS_PER_MINUTE * MINUTES_PER_HOUR;
/// Minutes per day constant: 1440
pub const MINUTES_PER_DAY: i64 = MINUTES_PER_HOUR * HOURS_PER_DAY;
/// Seconds per day constant: 8.64e+4
pub const SECONDS_PER_DAY: i64 = SECONDS_PER_HOUR * HOURS_PER_DAY;
/// Milliseconds per day constant: 8.64e+7
pub const MILLISECONDS_PER_DAY: i64 = MILLISECONDS_PER_HOUR * HOURS_PER_DAY;
