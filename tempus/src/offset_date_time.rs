use crate::{
  date::Date, date_time::DateTime, temporal_error::TemporalError, time::Time,
  utc_offset::UtcOffset,
};
use core::fmt::{Debug, Display, Formatter};

/// Fully-specified date and time anchored to a UTC offset.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct OffsetDateTime {
  date_time: DateTime,
  offset: UtcOffset,
}

impl OffsetDateTime {
  /// New instance from basic parameters
  #[inline]
  pub const fn new(date_time: DateTime, offset: UtcOffset) -> Self {
    Self { date_time, offset }
  }

  /// See [`Date`].
  #[inline]
  pub const fn date(self) -> Date {
    self.date_time.date()
  }

  /// See [`DateTime`].
  #[inline]
  pub const fn date_time(self) -> DateTime {
    self.date_time
  }

  /// Exactly one second later with full calendar rollover. The offset is kept untouched.
  #[inline]
  pub const fn next_second(self) -> Result<Self, TemporalError> {
    let date_time = match self.date_time.next_second() {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    Ok(Self { date_time, offset: self.offset })
  }

  /// See [`UtcOffset`].
  #[inline]
  pub const fn offset(self) -> UtcOffset {
    self.offset
  }

  /// See [`Time`].
  #[inline]
  pub const fn time(self) -> Time {
    self.date_time.time()
  }
}

impl Debug for OffsetDateTime {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Display>::fmt(self, f)
  }
}

impl Display for OffsetDateTime {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}{}", self.date_time, self.offset)
  }
}
