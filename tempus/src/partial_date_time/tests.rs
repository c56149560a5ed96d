use crate::{PartialDateTime, TemporalError, TemporalField, UtcOffset};
use std::string::ToString;

const FIELDS: [TemporalField; 7] = [
  TemporalField::Year,
  TemporalField::Month,
  TemporalField::Day,
  TemporalField::Hour,
  TemporalField::Minute,
  TemporalField::Second,
  TemporalField::Nano,
];

#[test]
fn factories_record_the_finest_observed_granularity() {
  assert_eq!(PartialDateTime::from_year(2021).granularity(), TemporalField::Year);
  assert_eq!(
    PartialDateTime::from_year_month(2021, 6).unwrap().granularity(),
    TemporalField::Month
  );
  assert_eq!(PartialDateTime::from_date(2021, 6, 30).unwrap().granularity(), TemporalField::Day);
  assert_eq!(
    PartialDateTime::from_date_time_minute(2021, 6, 30, 23, 59, Some(UtcOffset::UTC))
      .unwrap()
      .granularity(),
    TemporalField::Minute
  );
  assert_eq!(full_instance().granularity(), TemporalField::Second);
}

#[test]
fn factories_reject_out_of_bounds_fields_naming_the_field() {
  macro_rules! test {
    ($rslt:expr, $expected:expr, $field:expr, $received:expr) => {
      assert_eq!(
        $rslt,
        Err(TemporalError::FieldOutOfBounds {
          expected: $expected,
          field: $field,
          received: $received,
        })
      );
    };
  }

  test!(PartialDateTime::from_year_month(2023, 0), 1..=12, TemporalField::Month, 0);
  test!(PartialDateTime::from_year_month(2023, 13), 1..=12, TemporalField::Month, 13);
  test!(PartialDateTime::from_date(2023, 1, 0), 1..=31, TemporalField::Day, 0);
  test!(PartialDateTime::from_date(2023, 1, 32), 1..=31, TemporalField::Day, 32);
  test!(
    PartialDateTime::from_date_time_minute(2023, 1, 1, 24, 0, Some(UtcOffset::UTC)),
    0..=23,
    TemporalField::Hour,
    24
  );
  test!(
    PartialDateTime::from_date_time_minute(2023, 1, 1, 0, 60, Some(UtcOffset::UTC)),
    0..=59,
    TemporalField::Minute,
    60
  );
  test!(
    PartialDateTime::from_date_time(2023, 1, 1, 0, 0, 61, 0, None),
    0..=60,
    TemporalField::Second,
    61
  );
  test!(
    PartialDateTime::from_date_time(2023, 1, 1, 0, 0, 0, 1_000_000_000, None),
    0..=999_999_999,
    TemporalField::Nano,
    1_000_000_000
  );
}

#[test]
fn factories_accept_boundary_values() {
  assert!(PartialDateTime::from_year_month(2023, 1).is_ok());
  assert!(PartialDateTime::from_year_month(2023, 12).is_ok());
  assert!(PartialDateTime::from_date(2023, 1, 1).is_ok());
  assert!(PartialDateTime::from_date(2023, 1, 31).is_ok());
  assert!(PartialDateTime::from_date_time(2023, 1, 1, 0, 0, 0, 0, None).is_ok());
  assert!(PartialDateTime::from_date_time(2023, 12, 31, 23, 59, 60, 999_999_999, None).is_ok());
  assert!(PartialDateTime::from_year(i32::MIN).includes_granularity(TemporalField::Year));
  assert!(PartialDateTime::from_year_month(i32::MAX, 12).is_ok());
}

#[test]
fn minute_factory_requires_an_offset_at_construction() {
  assert_eq!(
    PartialDateTime::from_date_time_minute(2023, 1, 1, 0, 0, None),
    Err(TemporalError::MissingOffset)
  );
}

#[test]
fn includes_granularity_is_a_rank_comparison() {
  let value = PartialDateTime::from_date(2023, 6, 30).unwrap();
  assert!(value.includes_granularity(TemporalField::Year));
  assert!(value.includes_granularity(TemporalField::Month));
  assert!(value.includes_granularity(TemporalField::Day));
  assert!(!value.includes_granularity(TemporalField::Hour));
  assert!(!value.includes_granularity(TemporalField::Minute));
  assert!(!value.includes_granularity(TemporalField::Second));
  assert!(!value.includes_granularity(TemporalField::Nano));
}

#[test]
fn includes_granularity_is_monotonic() {
  let values = [
    PartialDateTime::from_year(2023),
    PartialDateTime::from_year_month(2023, 6).unwrap(),
    PartialDateTime::from_date(2023, 6, 30).unwrap(),
    PartialDateTime::from_date_time_minute(2023, 6, 30, 23, 59, Some(UtcOffset::UTC)).unwrap(),
    full_instance(),
  ];
  for value in values {
    let mut previous = true;
    for field in FIELDS {
      let current = value.includes_granularity(field);
      if !previous {
        assert!(!current);
      }
      previous = current;
    }
  }
}

#[test]
fn nano_is_never_a_recorded_granularity() {
  assert!(!full_instance().includes_granularity(TemporalField::Nano));
  assert_eq!(
    full_instance().assert_min_granularity(TemporalField::Nano),
    Err(TemporalError::MissingField {
      required: TemporalField::Nano,
      found: TemporalField::Second
    })
  );
}

#[test]
fn assert_min_granularity_enables_fluent_chains() {
  let value = full_instance();
  let rslt = value
    .assert_min_granularity(TemporalField::Day)
    .unwrap()
    .assert_min_granularity(TemporalField::Second)
    .unwrap();
  assert_eq!(rslt, value);
  assert_eq!(
    PartialDateTime::from_year(2021).assert_min_granularity(TemporalField::Minute),
    Err(TemporalError::MissingField {
      required: TemporalField::Minute,
      found: TemporalField::Year
    })
  );
}

#[test]
fn raw_accessors_ignore_the_recorded_granularity() {
  let value = PartialDateTime::from_year(5);
  assert_eq!(value.year(), 5);
  assert_eq!(value.month(), 0);
  assert_eq!(value.day(), 0);
  assert_eq!(value.hour(), 0);
  assert_eq!(value.minute(), 0);
  assert_eq!(value.second(), 0);
  assert_eq!(value.nanosecond(), 0);
  assert_eq!(value.offset(), None);
}

#[test]
fn to_year_month() {
  let ym = PartialDateTime::from_year_month(2021, 3).unwrap().to_year_month().unwrap();
  assert_eq!((ym.year(), ym.month().num()), (2021, 3));
  assert_eq!(ym.to_string(), "2021-03");
  assert_eq!(
    PartialDateTime::from_year(2021).to_year_month(),
    Err(TemporalError::MissingField {
      required: TemporalField::Month,
      found: TemporalField::Year
    })
  );
}

#[test]
fn to_date_defers_the_cross_field_check() {
  let value = PartialDateTime::from_date(2023, 2, 30).unwrap();
  assert_eq!(value.to_date(), Err(TemporalError::InvalidDayOfMonth { received: 30 }));

  let date = PartialDateTime::from_date(2024, 2, 29).unwrap().to_date().unwrap();
  assert_eq!((date.year(), date.month().num(), date.day().num()), (2024, 2, 29));

  assert_eq!(
    PartialDateTime::from_year_month(2023, 2).unwrap().to_date(),
    Err(TemporalError::MissingField { required: TemporalField::Day, found: TemporalField::Month })
  );
}

#[test]
fn to_date_time_reads_zeros_at_minute_granularity() {
  let value =
    PartialDateTime::from_date_time_minute(2023, 5, 15, 10, 30, Some(UtcOffset::UTC)).unwrap();
  let date_time = value.to_date_time().unwrap();
  assert_eq!(date_time.time().second().num(), 0);
  assert_eq!(date_time.time().nanosecond().num(), 0);

  assert_eq!(
    PartialDateTime::from_date(2023, 5, 15).unwrap().to_date_time(),
    Err(TemporalError::MissingField {
      required: TemporalField::Minute,
      found: TemporalField::Day
    })
  );
}

#[test]
fn to_date_time_rejects_a_structural_leap_second() {
  let value = PartialDateTime::from_date_time(2023, 6, 30, 23, 59, 60, 0, None).unwrap();
  assert_eq!(
    value.to_date_time(),
    Err(TemporalError::FieldOutOfBounds {
      expected: 0..=59,
      field: TemporalField::Second,
      received: 60
    })
  );
}

#[test]
fn to_offset_date_time_round_trips_every_field() {
  let offset = UtcOffset::from_hm(2, 0).unwrap();
  let value =
    PartialDateTime::from_date_time(2020, 2, 29, 23, 59, 59, 500_000_000, Some(offset)).unwrap();
  let odt = value.to_offset_date_time().unwrap();
  assert_eq!(odt.date().year(), 2020);
  assert_eq!(odt.date().month().num(), 2);
  assert_eq!(odt.date().day().num(), 29);
  assert_eq!(odt.time().hour().num(), 23);
  assert_eq!(odt.time().minute().num(), 59);
  assert_eq!(odt.time().second().num(), 59);
  assert_eq!(odt.time().nanosecond().num(), 500_000_000);
  assert_eq!(odt.offset(), offset);
}

#[test]
fn to_offset_date_time_distinguishes_its_two_failure_causes() {
  assert_eq!(
    PartialDateTime::from_date(2023, 1, 1).unwrap().to_offset_date_time(),
    Err(TemporalError::MissingField {
      required: TemporalField::Minute,
      found: TemporalField::Day
    })
  );
  assert_eq!(
    PartialDateTime::from_date_time(2023, 1, 1, 0, 0, 0, 0, None)
      .unwrap()
      .to_offset_date_time(),
    Err(TemporalError::MissingOffset)
  );
}

#[test]
fn from_offset_date_time_records_full_granularity() {
  let odt = full_instance().to_offset_date_time().unwrap();
  let value = PartialDateTime::from(odt);
  assert_eq!(value.granularity(), TemporalField::Second);
  assert_eq!(value, full_instance());
}

fn full_instance() -> PartialDateTime {
  PartialDateTime::from_date_time(2020, 2, 29, 23, 59, 59, 500_000_000, Some(UtcOffset::UTC))
    .unwrap()
}
