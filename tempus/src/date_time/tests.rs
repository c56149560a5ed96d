use crate::{Date, DateTime, Second, TemporalError, Time};
use std::string::ToString;

#[test]
fn display() {
  assert_eq!(instance(2023, 7, 1, 0, 0, 0).to_string(), "2023-07-01T00:00:00");
  assert_eq!(instance(2023, 5, 15, 10, 31, 0).to_string(), "2023-05-15T10:31:00");
}

#[test]
fn next_second() {
  macro_rules! test {
    ($lhs:expr, $rslt:expr) => {
      assert_eq!($lhs.next_second().unwrap(), $rslt);
    };
  }

  test!(instance(2023, 5, 15, 10, 30, 29), instance(2023, 5, 15, 10, 30, 30));
  test!(instance(2023, 5, 15, 10, 30, 59), instance(2023, 5, 15, 10, 31, 0));
  test!(instance(2023, 5, 15, 10, 59, 59), instance(2023, 5, 15, 11, 0, 0));
  test!(instance(2023, 5, 15, 23, 59, 59), instance(2023, 5, 16, 0, 0, 0));
  test!(instance(2023, 6, 30, 23, 59, 59), instance(2023, 7, 1, 0, 0, 0));
  test!(instance(2023, 12, 31, 23, 59, 59), instance(2024, 1, 1, 0, 0, 0));
  test!(instance(2024, 2, 28, 23, 59, 59), instance(2024, 2, 29, 0, 0, 0));
  test!(instance(2023, 2, 28, 23, 59, 59), instance(2023, 3, 1, 0, 0, 0));

  assert_eq!(
    instance(i32::MAX, 12, 31, 23, 59, 59).next_second(),
    Err(TemporalError::ArithmeticOverflow)
  );
}

fn instance(y: i32, mo: u8, d: u8, h: u8, mi: u8, s: u8) -> DateTime {
  DateTime::new(
    Date::from_ymd(y, mo.try_into().unwrap(), d.try_into().unwrap()).unwrap(),
    Time::from_hms(h.try_into().unwrap(), mi.try_into().unwrap(), Second::from_num(s).unwrap()),
  )
}
