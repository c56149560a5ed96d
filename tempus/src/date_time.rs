#[cfg(test)]
mod tests;

use crate::{date::Date, temporal_error::TemporalError, time::Time};
use core::fmt::{Debug, Display, Formatter};

/// Calendar date paired with a clock time, without offset information.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DateTime {
  date: Date,
  time: Time,
}

impl DateTime {
  /// New instance from basic parameters
  #[inline]
  pub const fn new(date: Date, time: Time) -> Self {
    Self { date, time }
  }

  /// See [`Date`].
  #[inline]
  pub const fn date(self) -> Date {
    self.date
  }

  /// Exactly one second later, rolling over minutes, hours, days, months and years as needed.
  #[inline]
  pub const fn next_second(self) -> Result<Self, TemporalError> {
    let (time, day_carry) = self.time.next_second();
    let date = if day_carry {
      match self.date.next_day() {
        Ok(elem) => elem,
        Err(err) => return Err(err),
      }
    } else {
      self.date
    };
    Ok(Self { date, time })
  }

  /// See [`Time`].
  #[inline]
  pub const fn time(self) -> Time {
    self.time
  }
}

impl Debug for DateTime {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Display>::fmt(self, f)
  }
}

impl Display for DateTime {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}T{}", self.date, self.time)
  }
}
