use core::fmt::{Display, Formatter};

/// Calendar field ordered from the coarsest to the finest granularity.
///
/// The declaration order is load-bearing: every "is this field present" query is a comparison
/// of ranks, not a presence flag. The same enum doubles as the field identifier carried by
/// bounds errors.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum TemporalField {
  /// Calendar year
  Year,
  /// Month of the year
  Month,
  /// Day of the month
  Day,
  /// Hour of the day
  Hour,
  /// Minute of the hour
  Minute,
  /// Second of the minute
  Second,
  /// Nanosecond of the second
  Nano,
}

impl TemporalField {
  /// Lowercase name for diagnostics.
  #[inline]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Year => "year",
      Self::Month => "month",
      Self::Day => "day",
      Self::Hour => "hour",
      Self::Minute => "minute",
      Self::Second => "second",
      Self::Nano => "nano",
    }
  }

  /// Position within the granularity ordering. Finer fields have strictly greater ranks.
  #[inline]
  pub const fn rank(self) -> u8 {
    self as u8
  }
}

impl Display for TemporalField {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.name())
  }
}
