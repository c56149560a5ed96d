//! Partial date time

#![no_main]

use tempus::{PartialDateTime, TemporalField};

libfuzzer_sys::fuzz_target!(|data: PartialDateTime| {
  let fields = [
    TemporalField::Year,
    TemporalField::Month,
    TemporalField::Day,
    TemporalField::Hour,
    TemporalField::Minute,
    TemporalField::Second,
    TemporalField::Nano,
  ];
  let mut previous = true;
  for field in fields {
    let current = data.includes_granularity(field);
    if !previous {
      assert!(!current);
    }
    previous = current;
  }
  assert!(data.includes_granularity(data.granularity()));
  if data.includes_granularity(TemporalField::Month) {
    assert!((1..=12).contains(&data.month()));
  }
  if data.granularity().rank() < TemporalField::Minute.rank() {
    assert!(data.to_offset_date_time().is_err());
    assert!(data.to_date_time().is_err());
  }
  if data.offset().is_none() {
    assert!(data.to_offset_date_time().is_err());
  }
});
