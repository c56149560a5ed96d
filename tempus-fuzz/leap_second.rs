//! Leap second

#![no_main]

use tempus::{LeapSecondOutcome, UtcOffset};

libfuzzer_sys::fuzz_target!(|data: (i16, u8, u8, u8, u8, u8, u32, Option<UtcOffset>)| {
  let (year, month, day, hour, minute, second, nanosecond, offset) = data;
  let Ok(outcome) =
    LeapSecondOutcome::new(year.into(), month, day, hour, minute, second, nanosecond, offset)
  else {
    return;
  };
  match outcome {
    LeapSecondOutcome::DateTime(elem) => {
      assert!(second <= 59);
      assert_eq!(elem.second(), second);
    }
    LeapSecondOutcome::LeapSecond(elem) => {
      assert_eq!(second, 60);
      assert_eq!(elem.observed_second(), 60);
      assert_eq!(elem.corrected().time().second().num(), 0);
      assert_eq!(elem.corrected().time().nanosecond().num(), 0);
      if elem.is_leap_boundary() {
        assert!(matches!(offset, Some(elem) if elem.is_utc()));
      }
    }
  }
});
