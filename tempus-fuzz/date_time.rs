//! Date time

#![no_main]

use tempus::{Date, DateTime, Day, Hour, Minute, Month, Second, Time};

libfuzzer_sys::fuzz_target!(|data: (i16, u8, u8, u8, u8, u8, u8)| {
  let (year, month, day, hour, minute, second, steps) = data;
  let Ok(month) = Month::from_num(month) else {
    return;
  };
  let Ok(day) = Day::from_num(day) else {
    return;
  };
  let Ok(hour) = Hour::from_num(hour) else {
    return;
  };
  let Ok(minute) = Minute::from_num(minute) else {
    return;
  };
  let Ok(second) = Second::from_num(second) else {
    return;
  };
  let Ok(date) = Date::from_ymd(year.into(), month, day) else {
    return;
  };
  let mut date_time = DateTime::new(date, Time::from_hms(hour, minute, second));
  for _ in 0..steps {
    let next = date_time.next_second().unwrap();
    assert!(next > date_time);
    date_time = next;
  }
});
