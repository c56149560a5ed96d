#![doc = include_str!("../README.md")]
#![no_std]

#[cfg(test)]
extern crate std;

mod date;
mod date_time;
mod day;
mod hour;
mod leap_second;
mod minute;
mod misc;
mod month;
mod nanosecond;
mod offset_date_time;
mod partial_date_time;
mod second;
mod temporal_error;
mod temporal_field;
mod time;
mod utc_offset;
mod year_month;

pub use date::Date;
pub use date_time::DateTime;
pub use day::Day;
pub use hour::Hour;
pub use leap_second::{LeapSecond, LeapSecondOutcome};
pub use minute::Minute;
pub use month::Month;
pub use nanosecond::Nanosecond;
pub use offset_date_time::OffsetDateTime;
pub use partial_date_time::PartialDateTime;
pub use second::Second;
pub use temporal_error::TemporalError;
pub use temporal_field::TemporalField;
pub use time::Time;
pub use utc_offset::UtcOffset;
pub use year_month::YearMonth;

pub(crate) const SECONDS_PER_HOUR: i32 = 3_600;
pub(crate) const SECONDS_PER_MINUTE: i32 = 60;

pub(crate) static DAYS_OF_MONTHS: [[u8; 12]; 2] = [
  [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
  [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
];

/// Shortcut of [`core::result::Result<T, TemporalError>`].
pub type Result<T> = core::result::Result<T, TemporalError>;
