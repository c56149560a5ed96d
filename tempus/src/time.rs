
use crate::{hour::Hour, minute::Minute, nanosecond::Nanosecond, second::Second};
use core::{
  fmt::{Debug, Display, Formatter},
  hint::unreachable_unchecked,
};

/// Clock time with nanosecond precision.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Time {
  hour: Hour,
  minute: Minute,
  second: Second,
  nanosecond: Nanosecond,
}

impl Time {
  /// Instance with the maximum allowed value of `23:59:59.999_999_999`
  pub const MAX: Self = Self::from_hms_ns(Hour::MAX, Minute::MAX, Second::MAX, Nanosecond::MAX);
  /// Instance with the minimum allowed value of `00:00:00.000_000_000`
  pub const MIDNIGHT: Self = Self::from_hms(Hour::ZERO, Minute::ZERO, Second::ZERO);

  /// New instance without nanosecond precision.
  #[inline]
  pub const fn from_hms(hour: Hour, minute: Minute, second: Second) -> Self {
    Self { hour, minute, second, nanosecond: Nanosecond::ZERO }
  }

  /// New instance with nanosecond precision.
  #[inline]
  pub const fn from_hms_ns(
    hour: Hour,
    minute: Minute,
    second: Second,
    nanosecond: Nanosecond,
  ) -> Self {
    Self { hour, minute, second, nanosecond }
  }

  /// Hour of the day
  #[inline]
  pub const fn hour(self) -> Hour {
    self.hour
  }

  /// Minute of the hour
  #[inline]
  pub const fn minute(self) -> Minute {
    self.minute
  }

  /// Nanosecond of the second
  #[inline]
  pub const fn nanosecond(self) -> Nanosecond {
    self.nanosecond
  }

  /// The following second alongside a flag indicating a day rollover. Nanoseconds are kept
  /// untouched.
  #[inline]
  #[must_use]
  pub const fn next_second(self) -> (Self, bool) {
    if self.second.num() < Second::MAX.num() {
      let second = match Second::from_num(self.second.num().wrapping_add(1)) {
        Ok(elem) => elem,
        // SAFETY: the guard keeps the value below 59
        Err(_err) => unsafe { unreachable_unchecked() },
      };
      let this =
        Self { hour: self.hour, minute: self.minute, second, nanosecond: self.nanosecond };
      return (this, false);
    }
    if self.minute.num() < Minute::MAX.num() {
      let minute = match Minute::from_num(self.minute.num().wrapping_add(1)) {
        Ok(elem) => elem,
        // SAFETY: the guard keeps the value below 59
        Err(_err) => unsafe { unreachable_unchecked() },
      };
      let this =
        Self { hour: self.hour, minute, second: Second::ZERO, nanosecond: self.nanosecond };
      return (this, false);
    }
    if self.hour.num() < Hour::MAX.num() {
      let hour = match Hour::from_num(self.hour.num().wrapping_add(1)) {
        Ok(elem) => elem,
        // SAFETY: the guard keeps the value below 23
        Err(_err) => unsafe { unreachable_unchecked() },
      };
      let this =
        Self { hour, minute: Minute::ZERO, second: Second::ZERO, nanosecond: self.nanosecond };
      return (this, false);
    }
    let this = Self {
      hour: Hour::ZERO,
      minute: Minute::ZERO,
      second: Second::ZERO,
      nanosecond: self.nanosecond,
    };
    (this, true)
  }

  /// Second of the minute
  #[inline]
  pub const fn second(self) -> Second {
    self.second
  }
}

impl Debug for Time {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Display>::fmt(self, f)
  }
}

impl Default for Time {
  #[inline]
  fn default() -> Self {
    Self::MIDNIGHT
  }
}

impl Display for Time {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    write!(f, "{:02}:{:02}:{:02}", self.hour.num(), self.minute.num(), self.second.num())?;
    if self.nanosecond.num() > 0 {
      write!(f, ".{:09}", self.nanosecond.num())?;
    }
    Ok(())
  }
}
