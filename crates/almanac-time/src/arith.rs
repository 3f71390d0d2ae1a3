//! Shared overflow-checked date arithmetic.
//!
//! Year and month addition produce a raw tuple that may not be a real date;
//! callers feed it to a resolver. Day addition runs through the epoch day
//! and always lands on a valid date.

use almanac_core::{CalendarError, IsoChronology, RawDate};

pub(crate) const SECONDS_PER_MINUTE: i64 = 60;
pub(crate) const SECONDS_PER_HOUR: i64 = 3_600;
pub(crate) const SECONDS_PER_DAY: i64 = 86_400;
pub(crate) const NANOS_PER_SECOND: i64 = 1_000_000_000;
pub(crate) const NANOS_PER_MINUTE: i64 = 60 * NANOS_PER_SECOND;
pub(crate) const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MINUTE;
pub(crate) const NANOS_PER_DAY: i64 = 24 * NANOS_PER_HOUR;

/// `year + years`, range-checked against the year rule.
pub(crate) fn add_years(year: i32, years: i64, operation: &'static str) -> Result<i32, CalendarError> {
    let sum = i64::from(year)
        .checked_add(years)
        .ok_or_else(|| CalendarError::overflow(operation))?;
    IsoChronology::INSTANCE.year_rule().check_i32(sum)
}

/// `(year, month) + months` using floor division, so month index -1 is
/// December of the previous year.
pub(crate) fn add_months(
    year: i32,
    month: u8,
    months: i64,
    operation: &'static str,
) -> Result<(i32, u8), CalendarError> {
    let index = i64::from(year) * 12 + i64::from(month) - 1;
    let index = index
        .checked_add(months)
        .ok_or_else(|| CalendarError::overflow(operation))?;
    let year = IsoChronology::INSTANCE
        .year_rule()
        .check_i32(index.div_euclid(12))?;
    // rem_euclid(12) is 0..=11
    let month = index.rem_euclid(12) as u8 + 1;
    Ok((year, month))
}

/// `date + days` through the epoch day.
pub(crate) fn add_days(date: RawDate, days: i64, operation: &'static str) -> Result<RawDate, CalendarError> {
    let iso = IsoChronology::INSTANCE;
    let epoch_day = iso
        .epoch_day(date.year, date.month, date.day)
        .checked_add(days)
        .ok_or_else(|| CalendarError::overflow(operation))?;
    iso.date_from_epoch_day(epoch_day)
}

/// `weeks * 7`, checked.
pub(crate) fn weeks_to_days(weeks: i64, operation: &'static str) -> Result<i64, CalendarError> {
    weeks
        .checked_mul(7)
        .ok_or_else(|| CalendarError::overflow(operation))
}

/// `-amount`, checked.
pub(crate) fn negate(amount: i64, operation: &'static str) -> Result<i64, CalendarError> {
    amount
        .checked_neg()
        .ok_or_else(|| CalendarError::overflow(operation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_core::{MAX_YEAR, MIN_YEAR};

    #[test]
    fn test_add_years_overflow_vs_range() {
        assert_eq!(add_years(2008, 1, "plus_years"), Ok(2009));
        assert!(add_years(2008, i64::MAX, "plus_years").unwrap_err().is_overflow());
        assert!(add_years(MAX_YEAR, 1, "plus_years").unwrap_err().is_range_error());
        assert!(add_years(MIN_YEAR, -1, "plus_years").unwrap_err().is_range_error());
    }

    #[test]
    fn test_add_months_floor_division() {
        assert_eq!(add_months(2007, 1, -1, "plus_months"), Ok((2006, 12)));
        assert_eq!(add_months(2007, 12, 1, "plus_months"), Ok((2008, 1)));
        assert_eq!(add_months(2007, 3, -27, "plus_months"), Ok((2004, 12)));
        assert_eq!(add_months(0, 1, -1, "plus_months"), Ok((-1, 12)));
        assert!(add_months(2007, 1, i64::MAX, "plus_months").unwrap_err().is_overflow());
    }

    #[test]
    fn test_add_days_crosses_leap_february() {
        let d = add_days(RawDate::new(2008, 2, 28), 1, "plus_days").unwrap();
        assert_eq!(d, RawDate::new(2008, 2, 29));
        let d = add_days(RawDate::new(2008, 2, 29), 1, "plus_days").unwrap();
        assert_eq!(d, RawDate::new(2008, 3, 1));
        let d = add_days(RawDate::new(2007, 12, 31), 1, "plus_days").unwrap();
        assert_eq!(d, RawDate::new(2008, 1, 1));
        assert!(add_days(RawDate::new(2007, 1, 1), i64::MAX, "plus_days").is_err());
    }

    #[test]
    fn test_negate_min() {
        assert_eq!(negate(5, "minus_days"), Ok(-5));
        assert!(negate(i64::MIN, "minus_days").unwrap_err().is_overflow());
    }
}
