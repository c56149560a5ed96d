use crate::{misc::u8u32, temporal_error::TemporalError, temporal_field::TemporalField};

/// Hour of the day.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Hour(u8);

impl Hour {
  /// Instance with the maximum allowed value of `23`
  pub const MAX: Self = Self(23);
  /// Instance with the minimum allowed value of `0`
  pub const ZERO: Self = Self(0);

  /// Creates a new instance from a valid `num` number.
  #[inline]
  pub const fn from_num(num: u8) -> Result<Self, TemporalError> {
    if num > 23 {
      return Err(TemporalError::FieldOutOfBounds {
        expected: 0..=23,
        field: TemporalField::Hour,
        received: u8u32(num),
      });
    }
    Ok(Self(num))
  }

  /// Integer representation
  #[inline]
  pub const fn num(&self) -> u8 {
    self.0
  }
}

impl TryFrom<u8> for Hour {
  type Error = TemporalError;

  #[inline]
  fn try_from(from: u8) -> Result<Self, Self::Error> {
    Self::from_num(from)
  }
}
