use crate::{misc::u8u32, temporal_error::TemporalError, temporal_field::TemporalField};

/// Day of the month.
///
/// The upper bound of `31` is structural. Whether a given day actually exists within a month
/// is the business of [`crate::Date`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Day(u8);

impl Day {
  /// Instance with the maximum allowed value of `31`
  pub const MAX: Self = Self(31);
  /// Instance with the minimum allowed value of `1`
  pub const ONE: Self = Self(1);

  /// Creates a new instance from a valid `num` number.
  #[inline]
  pub const fn from_num(num: u8) -> Result<Self, TemporalError> {
    if num < 1 || num > 31 {
      return Err(TemporalError::FieldOutOfBounds {
        expected: 1..=31,
        field: TemporalField::Day,
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

impl TryFrom<u8> for Day {
  type Error = TemporalError;

  #[inline]
  fn try_from(from: u8) -> Result<Self, Self::Error> {
    Self::from_num(from)
  }
}
