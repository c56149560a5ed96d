use crate::month::Month;
use core::fmt::{Debug, Display, Formatter};

/// Calendar year paired with a month, without a day component.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct YearMonth {
  year: i32,
  month: Month,
}

impl YearMonth {
  /// New instance from basic parameters
  #[inline]
  pub const fn new(year: i32, month: Month) -> Self {
    Self { year, month }
  }

  /// Month of the year
  #[inline]
  pub const fn month(self) -> Month {
    self.month
  }

  /// Year
  #[inline]
  pub const fn year(self) -> i32 {
    self.year
  }
}

impl Debug for YearMonth {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Display>::fmt(self, f)
  }
}

impl Display for YearMonth {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}-{:02}", self.year, self.month.num())
  }
}
