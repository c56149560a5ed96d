
use crate::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE, misc::i8i32, temporal_error::TemporalError};
use core::fmt::{Debug, Display, Formatter};

/// Signed UTC offset in whole seconds, strictly within one day.
///
/// Consumed as an already-validated value. Parsing textual offsets is the business of an
/// upstream tokenizer.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct UtcOffset(i32);

impl UtcOffset {
  /// Instance with an offset of zero seconds
  pub const UTC: Self = Self(0);

  /// Creates a new instance from hour and minute components. Both parameters must carry the
  /// sign of the offset.
  #[inline]
  pub const fn from_hm(hours: i8, minutes: i8) -> Result<Self, TemporalError> {
    Self::from_seconds(
      i8i32(hours)
        .wrapping_mul(SECONDS_PER_HOUR)
        .wrapping_add(i8i32(minutes).wrapping_mul(SECONDS_PER_MINUTE)),
    )
  }

  /// Creates a new instance from the number of seconds.
  #[inline]
  pub const fn from_seconds(seconds: i32) -> Result<Self, TemporalError> {
    let -86_399..=86_399 = seconds else {
      return Err(TemporalError::InvalidOffsetSeconds { received: seconds });
    };
    Ok(Self(seconds))
  }

  /// If the offset normalizes to UTC.
  #[inline]
  pub const fn is_utc(self) -> bool {
    self.0 == 0
  }

  /// Number of seconds
  #[inline]
  pub const fn seconds(self) -> i32 {
    self.0
  }
}

impl Debug for UtcOffset {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Display>::fmt(self, f)
  }
}

impl Display for UtcOffset {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    if self.0 == 0 {
      return f.write_str("Z");
    }
    let sign = if self.0 < 0 { '-' } else { '+' };
    let abs = self.0.abs();
    let hour = abs / SECONDS_PER_HOUR;
    let minute = (abs % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let second = abs % SECONDS_PER_MINUTE;
    write!(f, "{sign}{hour:02}:{minute:02}")?;
    if second > 0 {
      write!(f, ":{second:02}")?;
    }
    Ok(())
  }
}

impl TryFrom<i32> for UtcOffset {
  type Error = TemporalError;

  #[inline]
  fn try_from(from: i32) -> Result<Self, Self::Error> {
    Self::from_seconds(from)
  }
}

#[cfg(feature = "arbitrary")]
mod arbitrary {
  use crate::UtcOffset;
  use arbitrary::{Arbitrary, Unstructured};

  impl<'any> Arbitrary<'any> for UtcOffset {
    #[inline]
    fn arbitrary(u: &mut Unstructured<'any>) -> arbitrary::Result<Self> {
      let seconds = u.int_in_range(-86_399..=86_399)?;
      UtcOffset::from_seconds(seconds).map_err(|_err| arbitrary::Error::IncorrectFormat)
    }
  }
}
