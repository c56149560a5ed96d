#[cfg(test)]
mod tests;

use crate::{
  date::Date, date_time::DateTime, day::Day, hour::Hour, minute::Minute, misc::u8u32,
  month::Month, nanosecond::Nanosecond, offset_date_time::OffsetDateTime, second::Second,
  temporal_error::TemporalError, temporal_field::TemporalField, time::Time,
  utc_offset::UtcOffset, year_month::YearMonth,
};
use core::hint::unreachable_unchecked;

/// Date-time where only the fields up to a recorded granularity were supplied by the source.
///
/// Fields beyond the recorded granularity are stored as zero and are semantically absent. Raw
/// accessors still return them, so callers that care about presence must consult
/// [`Self::includes_granularity`] first. This low-level contract keeps the representation a
/// single flat `Copy` struct instead of a set of per-granularity variants.
///
/// The seconds field tolerates the structural value `60` so that leap-second-adjacent input
/// can flow through. Clock legality is only enforced by the narrowing conversions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PartialDateTime {
  granularity: TemporalField,
  year: i32,
  month: u8,
  day: u8,
  hour: u8,
  minute: u8,
  second: u8,
  nanosecond: u32,
  offset: Option<UtcOffset>,
}

impl PartialDateTime {
  /// New instance where only a year was supplied.
  #[inline]
  pub const fn from_year(year: i32) -> Self {
    Self {
      granularity: TemporalField::Year,
      year,
      month: 0,
      day: 0,
      hour: 0,
      minute: 0,
      second: 0,
      nanosecond: 0,
      offset: None,
    }
  }

  /// New instance where a year and a month were supplied.
  #[inline]
  pub const fn from_year_month(year: i32, month: u8) -> Result<Self, TemporalError> {
    let month = match Month::from_num(month) {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    Ok(Self {
      granularity: TemporalField::Month,
      year,
      month: month.num(),
      day: 0,
      hour: 0,
      minute: 0,
      second: 0,
      nanosecond: 0,
      offset: None,
    })
  }

  /// New instance where a full date was supplied.
  ///
  /// The day is only checked against the structural `1..=31` range. Whether it exists within
  /// the supplied month is deferred to [`Self::to_date`].
  #[inline]
  pub const fn from_date(year: i32, month: u8, day: u8) -> Result<Self, TemporalError> {
    let month = match Month::from_num(month) {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    let day = match Day::from_num(day) {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    Ok(Self {
      granularity: TemporalField::Day,
      year,
      month: month.num(),
      day: day.num(),
      hour: 0,
      minute: 0,
      second: 0,
      nanosecond: 0,
      offset: None,
    })
  }

  /// New instance where a date and a clock time up to the minute were supplied.
  ///
  /// An offset is mandatory at this granularity.
  #[inline]
  pub const fn from_date_time_minute(
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    offset: Option<UtcOffset>,
  ) -> Result<Self, TemporalError> {
    let month = match Month::from_num(month) {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    let day = match Day::from_num(day) {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    let hour = match Hour::from_num(hour) {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    let minute = match Minute::from_num(minute) {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    let Some(offset) = offset else {
      return Err(TemporalError::MissingOffset);
    };
    Ok(Self {
      granularity: TemporalField::Minute,
      year,
      month: month.num(),
      day: day.num(),
      hour: hour.num(),
      minute: minute.num(),
      second: 0,
      nanosecond: 0,
      offset: Some(offset),
    })
  }

  /// New instance where every field was supplied.
  ///
  /// Nanosecond precision is carried but the recorded granularity stays
  /// [`TemporalField::Second`].
  #[inline]
  pub const fn from_date_time(
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    nanosecond: u32,
    offset: Option<UtcOffset>,
  ) -> Result<Self, TemporalError> {
    let month = match Month::from_num(month) {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    let day = match Day::from_num(day) {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    let hour = match Hour::from_num(hour) {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    let minute = match Minute::from_num(minute) {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    if second > 60 {
      return Err(TemporalError::FieldOutOfBounds {
        expected: 0..=60,
        field: TemporalField::Second,
        received: u8u32(second),
      });
    }
    let nanosecond = match Nanosecond::from_num(nanosecond) {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    Ok(Self {
      granularity: TemporalField::Second,
      year,
      month: month.num(),
      day: day.num(),
      hour: hour.num(),
      minute: minute.num(),
      second,
      nanosecond: nanosecond.num(),
      offset,
    })
  }

  /// Returns the instance unchanged if its granularity is at least `field`, enabling fluent
  /// validation chains.
  #[inline]
  pub const fn assert_min_granularity(self, field: TemporalField) -> Result<Self, TemporalError> {
    if self.includes_granularity(field) {
      return Ok(self);
    }
    Err(TemporalError::MissingField { required: field, found: self.granularity })
  }

  /// Recorded granularity
  #[inline]
  pub const fn granularity(self) -> TemporalField {
    self.granularity
  }

  /// If every field up to `field` was supplied by the source.
  ///
  /// Monotonic over the field ordering: once true for a field, it is true for every coarser
  /// field.
  #[inline]
  pub const fn includes_granularity(self, field: TemporalField) -> bool {
    field.rank() <= self.granularity.rank()
  }

  /// Year and month, discarding any finer field.
  #[inline]
  pub const fn to_year_month(self) -> Result<YearMonth, TemporalError> {
    let this = match self.assert_min_granularity(TemporalField::Month) {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    Ok(YearMonth::new(this.year, this.month_unit()))
  }

  /// Calendar date, discarding any finer field.
  ///
  /// Day-of-month legality against the actual month length is only verified here, never at
  /// construction time.
  #[inline]
  pub const fn to_date(self) -> Result<Date, TemporalError> {
    let this = match self.assert_min_granularity(TemporalField::Day) {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    Date::from_ymd(this.year, this.month_unit(), this.day_unit())
  }

  /// Date and time, discarding offset information.
  ///
  /// At exactly minute granularity the seconds and nanoseconds read as the stored zeros. A
  /// structural second of `60` is rejected here by the clock second unit.
  #[inline]
  pub const fn to_date_time(self) -> Result<DateTime, TemporalError> {
    let this = match self.assert_min_granularity(TemporalField::Minute) {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    let date = match Date::from_ymd(this.year, this.month_unit(), this.day_unit()) {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    let second = match Second::from_num(this.second) {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    let nanosecond = match Nanosecond::from_num(this.nanosecond) {
      Ok(elem) => elem,
      // SAFETY: every factory validates the stored nanosecond
      Err(_err) => unsafe { unreachable_unchecked() },
    };
    let time = Time::from_hms_ns(this.hour_unit(), this.minute_unit(), second, nanosecond);
    Ok(DateTime::new(date, time))
  }

  /// Date and time anchored to the stored offset.
  ///
  /// An insufficient granularity and an absent offset are two independently observable
  /// failures. The granularity gate is checked first.
  #[inline]
  pub const fn to_offset_date_time(self) -> Result<OffsetDateTime, TemporalError> {
    let this = match self.assert_min_granularity(TemporalField::Minute) {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    let Some(offset) = this.offset else {
      return Err(TemporalError::MissingOffset);
    };
    let date_time = match this.to_date_time() {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    Ok(OffsetDateTime::new(date_time, offset))
  }

  /// Stored day regardless of the recorded granularity
  #[inline]
  pub const fn day(self) -> u8 {
    self.day
  }

  /// Stored hour regardless of the recorded granularity
  #[inline]
  pub const fn hour(self) -> u8 {
    self.hour
  }

  /// Stored minute regardless of the recorded granularity
  #[inline]
  pub const fn minute(self) -> u8 {
    self.minute
  }

  /// Stored month regardless of the recorded granularity
  #[inline]
  pub const fn month(self) -> u8 {
    self.month
  }

  /// Stored nanosecond regardless of the recorded granularity
  #[inline]
  pub const fn nanosecond(self) -> u32 {
    self.nanosecond
  }

  /// Stored offset, if supplied by the source
  #[inline]
  pub const fn offset(self) -> Option<UtcOffset> {
    self.offset
  }

  /// Stored second regardless of the recorded granularity
  #[inline]
  pub const fn second(self) -> u8 {
    self.second
  }

  /// Stored year
  #[inline]
  pub const fn year(self) -> i32 {
    self.year
  }

  const fn day_unit(self) -> Day {
    match Day::from_num(self.day) {
      Ok(elem) => elem,
      // SAFETY: every factory that records a day validates it
      Err(_err) => unsafe { unreachable_unchecked() },
    }
  }

  const fn hour_unit(self) -> Hour {
    match Hour::from_num(self.hour) {
      Ok(elem) => elem,
      // SAFETY: every factory that records an hour validates it
      Err(_err) => unsafe { unreachable_unchecked() },
    }
  }

  const fn minute_unit(self) -> Minute {
    match Minute::from_num(self.minute) {
      Ok(elem) => elem,
      // SAFETY: every factory that records a minute validates it
      Err(_err) => unsafe { unreachable_unchecked() },
    }
  }

  const fn month_unit(self) -> Month {
    match Month::from_num(self.month) {
      Ok(elem) => elem,
      // SAFETY: every factory that records a month validates it
      Err(_err) => unsafe { unreachable_unchecked() },
    }
  }
}

impl From<OffsetDateTime> for PartialDateTime {
  #[inline]
  fn from(from: OffsetDateTime) -> Self {
    Self {
      granularity: TemporalField::Second,
      year: from.date().year(),
      month: from.date().month().num(),
      day: from.date().day().num(),
      hour: from.time().hour().num(),
      minute: from.time().minute().num(),
      second: from.time().second().num(),
      nanosecond: from.time().nanosecond().num(),
      offset: Some(from.offset()),
    }
  }
}

#[cfg(feature = "arbitrary")]
mod arbitrary {
  use crate::{PartialDateTime, UtcOffset};
  use arbitrary::{Arbitrary, Unstructured};

  impl<'any> Arbitrary<'any> for PartialDateTime {
    #[inline]
    fn arbitrary(u: &mut Unstructured<'any>) -> arbitrary::Result<Self> {
      let year = i32::arbitrary(u)?;
      let month = u.int_in_range(1..=12)?;
      let day = u.int_in_range(1..=31)?;
      let hour = u.int_in_range(0..=23)?;
      let minute = u.int_in_range(0..=59)?;
      let second = u.int_in_range(0..=60)?;
      let nanosecond = u.int_in_range(0..=999_999_999)?;
      let offset = Option::<UtcOffset>::arbitrary(u)?;
      let rslt = match u.int_in_range(0u8..=4)? {
        0 => return Ok(Self::from_year(year)),
        1 => Self::from_year_month(year, month),
        2 => Self::from_date(year, month, day),
        3 => {
          let offset = Some(offset.unwrap_or(UtcOffset::UTC));
          Self::from_date_time_minute(year, month, day, hour, minute, offset)
        }
        _ => Self::from_date_time(year, month, day, hour, minute, second, nanosecond, offset),
      };
      rslt.map_err(|_err| arbitrary::Error::IncorrectFormat)
    }
  }
}
