use crate::{misc::u8u32, temporal_error::TemporalError, temporal_field::TemporalField};

/// Second of the minute.
///
/// This is the strict clock unit: an inserted leap second of `60` is never representable here.
/// The structural `0..=60` allowance lives in [`crate::PartialDateTime`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Second(u8);

impl Second {
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
        field: TemporalField::Second,
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

impl TryFrom<u8> for Second {
  type Error = TemporalError;

  #[inline]
  fn try_from(from: u8) -> Result<Self, Self::Error> {
    Self::from_num(from)
  }
}
