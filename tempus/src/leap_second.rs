
use crate::{
  date::Date, date_time::DateTime, day::Day, hour::Hour, minute::Minute, month::Month,
  nanosecond::Nanosecond, offset_date_time::OffsetDateTime, partial_date_time::PartialDateTime,
  second::Second, temporal_error::TemporalError, time::Time, utc_offset::UtcOffset,
};

/// Signal raised when a seconds field of `60` is observed.
///
/// Not an error and deliberately not [`core::error::Error`]: it is a distinguished outcome
/// carrying a best-effort corrected candidate plus a structural plausibility flag so that the
/// caller can decide between acceptance and rejection. No leap-second table is ever consulted
/// and no claim is made that a leap second was actually scheduled.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LeapSecond {
  corrected: OffsetDateTime,
  leap_boundary: bool,
  observed_second: u8,
}

impl LeapSecond {
  /// New instance from the nominal minute boundary.
  ///
  /// The corrected candidate is the nominal `hh:mm:59` boundary advanced by exactly one second
  /// with full minute, hour, day, month and year rollover. Without an offset the candidate
  /// carries [`UtcOffset::UTC`] and the boundary flag is forced to `false` since UTC alignment
  /// cannot be verified.
  #[inline]
  pub const fn new(
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    observed_second: u8,
    offset: Option<UtcOffset>,
  ) -> Result<Self, TemporalError> {
    let month_unit = match Month::from_num(month) {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    let day_unit = match Day::from_num(day) {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    let hour_unit = match Hour::from_num(hour) {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    let minute_unit = match Minute::from_num(minute) {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    let date = match Date::from_ymd(year, month_unit, day_unit) {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    let nominal = DateTime::new(date, Time::from_hms(hour_unit, minute_unit, Second::MAX));
    let date_time = match nominal.next_second() {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    let leap_boundary = match offset {
      Some(elem) => {
        elem.is_utc() && matches!((month, day, hour, minute), (6, 30, 23, 59) | (12, 31, 23, 59))
      }
      None => false,
    };
    let corrected = OffsetDateTime::new(
      date_time,
      match offset {
        Some(elem) => elem,
        None => UtcOffset::UTC,
      },
    );
    Ok(Self { corrected, leap_boundary, observed_second })
  }

  /// Best-effort candidate of what the source meant, one second past the nominal minute
  /// boundary
  #[inline]
  pub const fn corrected(self) -> OffsetDateTime {
    self.corrected
  }

  /// If the nominal minute is 23:59 of June 30 or December 31 in UTC, the only calendar
  /// positions where a real leap second can be inserted
  #[inline]
  pub const fn is_leap_boundary(self) -> bool {
    self.leap_boundary
  }

  /// Raw seconds field that triggered the signal
  #[inline]
  pub const fn observed_second(self) -> u8 {
    self.observed_second
  }
}

/// Two-way outcome produced the moment a parser has read a seconds field.
///
/// Callers are statically forced to handle both the ordinary value and the leap-second
/// candidate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LeapSecondOutcome {
  /// Ordinary full-precision value
  DateTime(PartialDateTime),
  /// Leap-second candidate requiring an explicit decision
  LeapSecond(LeapSecond),
}

impl LeapSecondOutcome {
  /// Routes on the seconds field: `0..=59` produces an ordinary value, `60` produces a
  /// leap-second signal and anything above fails with a bounds violation.
  #[inline]
  pub const fn new(
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    nanosecond: u32,
    offset: Option<UtcOffset>,
  ) -> Result<Self, TemporalError> {
    if second == 60 {
      // The candidate is pinned to the minute boundary. Nanoseconds are still bounds-checked
      // before being discarded.
      let _nanosecond = match Nanosecond::from_num(nanosecond) {
        Ok(elem) => elem,
        Err(err) => return Err(err),
      };
      let elem = match LeapSecond::new(year, month, day, hour, minute, second, offset) {
        Ok(elem) => elem,
        Err(err) => return Err(err),
      };
      return Ok(Self::LeapSecond(elem));
    }
    match PartialDateTime::from_date_time(year, month, day, hour, minute, second, nanosecond, offset)
    {
      Ok(elem) => Ok(Self::DateTime(elem)),
      Err(err) => Err(err),
    }
  }
}
