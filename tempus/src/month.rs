use crate::{misc::u8u32, temporal_error::TemporalError, temporal_field::TemporalField};

/// Month of the year.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Month(u8);

impl Month {
  /// Instance with the maximum allowed value of `12`
  pub const MAX: Self = Self(12);
  /// Instance with the minimum allowed value of `1`
  pub const ONE: Self = Self(1);

  /// Creates a new instance from a valid `num` number.
  #[inline]
  pub const fn from_num(num: u8) -> Result<Self, TemporalError> {
    if num < 1 || num > 12 {
      return Err(TemporalError::FieldOutOfBounds {
        expected: 1..=12,
        field: TemporalField::Month,
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

impl TryFrom<u8> for Month {
  type Error = TemporalError;

  #[inline]
  fn try_from(from: u8) -> Result<Self, Self::Error> {
    Self::from_num(from)
  }
}
