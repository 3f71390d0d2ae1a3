//! # chrono as an Independent Oracle
//!
//! Cross-checks the ISO calendar law and the date arithmetic against chrono's
//! proleptic Gregorian implementation: leap years, epoch days, day of week,
//! day of year and clamped month arithmetic.

use chrono::{Datelike, Months, NaiveDate};
use proptest::prelude::*;

use almanac_core::IsoChronology;
use almanac_time::LocalDate;

const ISO: IsoChronology = IsoChronology::INSTANCE;

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
}

fn naive_date() -> impl Strategy<Value = NaiveDate> {
    (-200_000i64..200_000).prop_map(|days| epoch() + chrono::Duration::days(days * 3))
}

fn to_local(date: NaiveDate) -> LocalDate {
    LocalDate::of(date.year(), date.month() as u8, date.day() as u8).unwrap()
}

#[test]
fn known_dates_agree() {
    for (y, m, d) in [(1970, 1, 1), (2000, 2, 29), (1900, 3, 1), (0, 12, 31), (-1, 1, 1)] {
        let naive = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let local = to_local(naive);
        assert_eq!(local.to_epoch_day(), naive.signed_duration_since(epoch()).num_days());
    }
}

proptest! {
    /// Leap years agree for positive, zero and negative proleptic years.
    #[test]
    fn leap_years_agree(year in -200_000i32..200_000) {
        let chrono_leap = NaiveDate::from_ymd_opt(year, 2, 29).is_some();
        prop_assert_eq!(ISO.is_leap_year(i64::from(year)), chrono_leap);
    }

    /// Epoch days, day of week and day of year agree.
    #[test]
    fn derived_fields_agree(naive in naive_date()) {
        let local = to_local(naive);
        prop_assert_eq!(local.to_epoch_day(), naive.signed_duration_since(epoch()).num_days());
        prop_assert_eq!(u32::from(local.day_of_week().value()), naive.weekday().number_from_monday());
        prop_assert_eq!(u32::from(local.day_of_year()), naive.ordinal());
        prop_assert_eq!(LocalDate::of_epoch_day(local.to_epoch_day()).unwrap(), local);
    }

    /// Month arithmetic with the default resolver clamps like chrono does.
    #[test]
    fn plus_months_agrees(naive in naive_date(), months in -1_200i32..1_200) {
        let expected = if months >= 0 {
            naive.checked_add_months(Months::new(months as u32))
        } else {
            naive.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        let expected = expected.unwrap();
        let actual = to_local(naive).plus_months(i64::from(months)).unwrap();
        prop_assert_eq!(actual, to_local(expected));
    }

    /// Day arithmetic agrees across month, year and leap-day boundaries.
    #[test]
    fn plus_days_agrees(naive in naive_date(), days in -100_000i64..100_000) {
        let expected = naive + chrono::Duration::days(days);
        prop_assert_eq!(to_local(naive).plus_days(days).unwrap(), to_local(expected));
    }
}
