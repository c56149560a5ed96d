use crate::{temporal_error::TemporalError, temporal_field::TemporalField};

/// Nanosecond of the second.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Nanosecond(u32);

impl Nanosecond {
  /// Instance with the maximum allowed value of `999_999_999`
  pub const MAX: Self = Self(999_999_999);
  /// Instance with the minimum allowed value of `0`
  pub const ZERO: Self = Self(0);

  /// Creates a new instance from a valid `num` number.
  #[inline]
  pub const fn from_num(num: u32) -> Result<Self, TemporalError> {
    if num > 999_999_999 {
      return Err(TemporalError::FieldOutOfBounds {
        expected: 0..=999_999_999,
        field: TemporalField::Nano,
        received: num,
      });
    }
    Ok(Self(num))
  }

  /// Integer representation
  #[inline]
  pub const fn num(&self) -> u32 {
    self.0
  }
}

impl TryFrom<u32> for Nanosecond {
  type Error = TemporalError;

  #[inline]
  fn try_from(from: u32) -> Result<Self, Self::Error> {
    Self::from_num(from)
  }
}
