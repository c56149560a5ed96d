use crate::{misc::u8u32, temporal_error::TemporalError, temporal_field::TemporalField};

/// Minute of the hour.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Minute(u8);

impl Minute {
  /// Instance with the maximum allowed value of `59`
  pub const MAX: Self = Self(59);
  /// Instance with the minimum allowed value of `0`
  pub const ZERO: Self = Self(0);

  /// Creates a new instance from a valid `num` number.
  #[inline]
  pub const fn from_num(num: u8) -> Result<Self, TemporalError> {
    if num > 59 {
      return Err(TemporalError::FieldOutOfBounds {
        expected: 0..=59,
        field: TemporalField::Minute,
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

impl TryFrom<u8> for Minute {
  type Error = TemporalError;

  #[inline]
  fn try_from(from: u8) -> Result<Self, Self::Error> {
    Self::from_num(from)
  }
}
