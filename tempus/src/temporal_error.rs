use crate::temporal_field::TemporalField;
use core::{
  fmt::{Debug, Display, Formatter},
  ops::RangeInclusive,
};

/// Temporal error
#[derive(Debug, Eq, PartialEq)]
pub enum TemporalError {
  /// Underlying structure couldn't hold the value generated during an arithmetic operation.
  ArithmeticOverflow,
  /// A field value sits outside its legal numeric range
  FieldOutOfBounds {
    /// Legal range
    expected: RangeInclusive<u32>,
    /// Offending field
    field: TemporalField,
    /// Invalid received number
    received: u32,
  },
  /// The day exceeds the number of days of the received month
  InvalidDayOfMonth {
    /// Invalid received number
    received: u8,
  },
  /// Offsets must be strictly within one day in seconds
  InvalidOffsetSeconds {
    /// Invalid received number
    received: i32,
  },
  /// A narrowing conversion required a finer granularity than the one that was recorded
  MissingField {
    /// Minimum granularity of the conversion
    required: TemporalField,
    /// Granularity that was actually recorded
    found: TemporalField,
  },
  /// An offset-requiring operation found no offset information
  MissingOffset,
}

impl Display for TemporalError {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Debug>::fmt(self, f)
  }
}

impl core::error::Error for TemporalError {}
