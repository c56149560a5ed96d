
use crate::{
  DAYS_OF_MONTHS,
  day::Day,
  misc::{boolusize, u8usize},
  month::Month,
  temporal_error::TemporalError,
};
use core::{
  fmt::{Debug, Display, Formatter},
  hint::unreachable_unchecked,
};

/// Proleptic Gregorian calendar date.
///
/// Years are unbounded within `i32`. Values outside `1..=9999` are perfectly legal.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Date {
  year: i32,
  month: Month,
  day: Day,
}

impl Date {
  /// Instance that refers the UNIX epoch (1970-01-01).
  pub const EPOCH: Self = Self { year: 1970, month: Month::ONE, day: Day::ONE };

  /// Constructs a new instance that automatically deals with leap years.
  #[inline]
  pub const fn from_ymd(year: i32, month: Month, day: Day) -> Result<Self, TemporalError> {
    if day.num() > Self::days_in_month(year, month) {
      return Err(TemporalError::InvalidDayOfMonth { received: day.num() });
    }
    Ok(Self { year, month, day })
  }

  /// Number of days of the given month taking leap years into account.
  #[inline]
  pub const fn days_in_month(year: i32, month: Month) -> u8 {
    #[allow(clippy::indexing_slicing, reason = "zero or one are valid indices for a 2 len array")]
    let months_year = &DAYS_OF_MONTHS[boolusize(Self::is_leap_year(year))];
    #[allow(clippy::indexing_slicing, reason = "month only goes up to 12")]
    let days = months_year[u8usize(month.num().wrapping_sub(1))];
    days
  }

  /// If the given year has 366 days.
  #[inline]
  pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
  }

  /// Day of the month
  #[inline]
  pub const fn day(self) -> Day {
    self.day
  }

  /// Month of the year
  #[inline]
  pub const fn month(self) -> Month {
    self.month
  }

  /// The following calendar day, rolling over months and years as needed.
  #[inline]
  pub const fn next_day(self) -> Result<Self, TemporalError> {
    if self.day.num() < Self::days_in_month(self.year, self.month) {
      let day = match Day::from_num(self.day.num().wrapping_add(1)) {
        Ok(elem) => elem,
        // SAFETY: `days_in_month` never exceeds 31
        Err(_err) => unsafe { unreachable_unchecked() },
      };
      return Ok(Self { year: self.year, month: self.month, day });
    }
    if self.month.num() < Month::MAX.num() {
      let month = match Month::from_num(self.month.num().wrapping_add(1)) {
        Ok(elem) => elem,
        // SAFETY: the guard keeps the value below 12
        Err(_err) => unsafe { unreachable_unchecked() },
      };
      return Ok(Self { year: self.year, month, day: Day::ONE });
    }
    let Some(year) = self.year.checked_add(1) else {
      return Err(TemporalError::ArithmeticOverflow);
    };
    Ok(Self { year, month: Month::ONE, day: Day::ONE })
  }

  /// Year
  #[inline]
  pub const fn year(self) -> i32 {
    self.year
  }
}

impl Debug for Date {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Display>::fmt(self, f)
  }
}

impl Default for Date {
  #[inline]
  fn default() -> Self {
    Self::EPOCH
  }
}

impl Display for Date {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}-{:02}-{:02}", self.year, self.month.num(), self.day.num())
  }
}
