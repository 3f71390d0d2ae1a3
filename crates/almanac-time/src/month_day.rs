//! # Month-Day
//!
//! A month and day-of-month without a year, such as a birthday. 29 February
//! is a valid month-day; whether it exists in a given year is checked when
//! the month-day is placed in that year.
//!
//! ## Arithmetic
//!
//! Month and day arithmetic wrap around the year. Day arithmetic runs over
//! the 366 days of a leap year, so 28 February plus one day is 29 February
//! and 29 February plus one day is 1 March.

use serde::{Deserialize, Serialize};

use almanac_core::{
    Calendrical, CalendarError, DateResolver, DateTimeField, FieldMap, IsoChronology, ResolveDate,
};

use crate::local_date::LocalDate;
use crate::month::MonthOfYear;

/// Reference leap year for year-free arithmetic.
const LEAP_YEAR: i32 = 2000;

const SUPPORTED: &[DateTimeField] = &[DateTimeField::MonthOfYear, DateTimeField::DayOfMonth];

/// A month and day-of-month, valid in at least one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "MonthDayFields", into = "MonthDayFields")]
pub struct MonthDay {
    month: u8,
    day: u8,
}

#[derive(Serialize, Deserialize)]
struct MonthDayFields {
    month: u8,
    day: u8,
}

impl MonthDay {
    /// # Errors
    ///
    /// - [`CalendarError::FieldOutOfRange`] if a field leaves its rule.
    /// - [`CalendarError::InvalidField`] if the day exceeds the month's
    ///   longest length (e.g. 30 February).
    pub fn of(month: u8, day: u8) -> Result<Self, CalendarError> {
        let iso = IsoChronology::INSTANCE;
        let month = MonthOfYear::of(month)?;
        iso.day_of_month_rule().check_value(i64::from(day))?;
        let max = month.max_length();
        if day > max {
            return Err(CalendarError::InvalidField {
                field: DateTimeField::DayOfMonth,
                value: i64::from(day),
                reason: format!("{} has at most {} days", month.name(), max),
            });
        }
        Ok(Self {
            month: month.value(),
            day,
        })
    }

    pub(crate) const fn new_unchecked(month: u8, day: u8) -> Self {
        Self { month, day }
    }

    /// Build from the month and day-of-month fields of a set of calendricals.
    pub fn from_calendricals(calendricals: &[&dyn Calendrical]) -> Result<Self, CalendarError> {
        let iso = IsoChronology::INSTANCE;
        let map = FieldMap::from_calendricals(calendricals)?;
        let month = map.require(DateTimeField::MonthOfYear, "MonthDay")?;
        let day = map.require(DateTimeField::DayOfMonth, "MonthDay")?;
        Self::of(
            iso.month_of_year_rule().check_u8(month)?,
            iso.day_of_month_rule().check_u8(day)?,
        )
    }

    /// The month as an enum.
    pub fn month_of_year(&self) -> MonthOfYear {
        MonthOfYear::from_valid(self.month)
    }

    /// Month of year, 1 to 12.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Day of month, 1 to 31.
    pub fn day_of_month(&self) -> u8 {
        self.day
    }

    /// Change the month, clamping the day to the new month's longest length.
    pub fn with_month_of_year(&self, month: u8) -> Result<Self, CalendarError> {
        self.with_month_of_year_with(month, &DateResolver::PreviousValid)
    }

    /// Change the month, resolving an invalid day with `resolver`.
    pub fn with_month_of_year_with(
        &self,
        month: u8,
        resolver: &dyn ResolveDate,
    ) -> Result<Self, CalendarError> {
        let resolved = resolver.resolve_date(LEAP_YEAR, month, self.day)?;
        Self::of(resolved.month, resolved.day)
    }

    /// # Errors
    ///
    /// Fails if `day` does not exist in this month in any year.
    pub fn with_day_of_month(&self, day: u8) -> Result<Self, CalendarError> {
        Self::of(self.month, day)
    }

    /// The last day of this month, using the leap-year length for February.
    pub fn with_last_day_of_month(&self) -> Self {
        Self {
            month: self.month,
            day: self.month_of_year().max_length(),
        }
    }

    /// Move by whole months, wrapping around the year and clamping the day.
    pub fn plus_months(&self, months: i64) -> Self {
        let month = self.month_of_year().plus(months);
        Self {
            month: month.value(),
            day: self.day.min(month.max_length()),
        }
    }

    /// Move by whole months, resolving an invalid day with `resolver`.
    pub fn plus_months_with(
        &self,
        months: i64,
        resolver: &dyn ResolveDate,
    ) -> Result<Self, CalendarError> {
        let month = self.month_of_year().plus(months);
        self.with_month_of_year_with(month.value(), resolver)
    }

    /// Move by whole weeks around the 366-day leap cycle.
    pub fn plus_weeks(&self, weeks: i64) -> Self {
        // 366 * 7 cannot overflow
        self.plus_days(weeks.rem_euclid(366) * 7)
    }

    /// Move by days around the 366-day leap cycle.
    pub fn plus_days(&self, days: i64) -> Self {
        let doy = i64::from(self.month_of_year().first_day_of_year(true) + u16::from(self.day) - 1);
        // 0..=365, so the target is 1..=366
        let target = (doy - 1 + days.rem_euclid(366)).rem_euclid(366) + 1;
        let (month, day) = MonthOfYear::leap_year_day(target as u16);
        Self {
            month: month.value(),
            day,
        }
    }

    /// Place this month-day in `year`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidField`] for 29 February in a standard year.
    pub fn at_year(&self, year: i32) -> Result<LocalDate, CalendarError> {
        LocalDate::of(year, self.month, self.day)
    }

    /// Place this month-day in `year`, resolving 29 February with `resolver`.
    pub fn at_year_with(&self, year: i32, resolver: &dyn ResolveDate) -> Result<LocalDate, CalendarError> {
        LocalDate::resolve(resolver, year, self.month, self.day)
    }

    /// Whether this month-day exists in `year`.
    pub fn is_valid_year(&self, year: i32) -> bool {
        IsoChronology::INSTANCE.is_valid_date(year, self.month, self.day)
    }

    /// Whether this month-day falls later in the year.
    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    /// Whether this month-day falls earlier in the year.
    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }
}

impl TryFrom<MonthDayFields> for MonthDay {
    type Error = CalendarError;

    fn try_from(fields: MonthDayFields) -> Result<Self, Self::Error> {
        Self::of(fields.month, fields.day)
    }
}

impl From<MonthDay> for MonthDayFields {
    fn from(md: MonthDay) -> Self {
        Self {
            month: md.month,
            day: md.day,
        }
    }
}

impl Calendrical for MonthDay {
    fn type_name(&self) -> &'static str {
        "MonthDay"
    }

    fn supported_fields(&self) -> &'static [DateTimeField] {
        SUPPORTED
    }

    fn get(&self, field: DateTimeField) -> Result<i64, CalendarError> {
        match field {
            DateTimeField::MonthOfYear => Ok(i64::from(self.month)),
            DateTimeField::DayOfMonth => Ok(i64::from(self.day)),
            _ => Err(self.unsupported(field)),
        }
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "--{:02}-{:02}", self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn md(month: u8, day: u8) -> MonthDay {
        MonthDay::of(month, day).unwrap()
    }

    #[test]
    fn test_of_accepts_leap_day() {
        assert_eq!(md(2, 29).day_of_month(), 29);
        assert!(MonthDay::of(2, 30).unwrap_err().is_invalid_field());
        assert!(MonthDay::of(4, 31).unwrap_err().is_invalid_field());
        assert!(MonthDay::of(13, 1).unwrap_err().is_range_error());
        assert!(MonthDay::of(1, 32).unwrap_err().is_range_error());
    }

    #[test]
    fn test_supported_fields_exclude_day_of_year() {
        let v = md(3, 1);
        assert!(v.is_supported(DateTimeField::MonthOfYear));
        assert!(v.is_supported(DateTimeField::DayOfMonth));
        assert!(!v.is_supported(DateTimeField::DayOfYear));
        assert!(!v.is_supported(DateTimeField::Year));
        assert!(v.get(DateTimeField::DayOfYear).unwrap_err().is_unsupported_field());
    }

    #[test]
    fn test_with_month_clamps() {
        assert_eq!(md(3, 31).with_month_of_year(4).unwrap(), md(4, 30));
        assert_eq!(md(3, 31).with_month_of_year(2).unwrap(), md(2, 29));
        assert_eq!(
            md(3, 31)
                .with_month_of_year_with(4, &DateResolver::NextValid)
                .unwrap(),
            md(5, 1)
        );
        assert!(md(3, 31)
            .with_month_of_year_with(4, &DateResolver::Strict)
            .unwrap_err()
            .is_invalid_field());
        assert!(md(3, 31).with_month_of_year(0).unwrap_err().is_range_error());
    }

    #[test]
    fn test_with_last_day_of_month() {
        assert_eq!(md(2, 1).with_last_day_of_month(), md(2, 29));
        assert_eq!(md(6, 10).with_last_day_of_month(), md(6, 30));
    }

    #[test]
    fn test_plus_months_wraps() {
        assert_eq!(md(12, 15).plus_months(1), md(1, 15));
        assert_eq!(md(1, 31).plus_months(1), md(2, 29));
        assert_eq!(md(1, 15).plus_months(-1), md(12, 15));
        assert_eq!(
            md(1, 31).plus_months_with(3, &DateResolver::PreviousValid).unwrap(),
            md(4, 30)
        );
    }

    #[test]
    fn test_plus_days_leap_cycle() {
        assert_eq!(md(2, 28).plus_days(1), md(2, 29));
        assert_eq!(md(2, 29).plus_days(1), md(3, 1));
        assert_eq!(md(12, 31).plus_days(1), md(1, 1));
        assert_eq!(md(1, 1).plus_days(-1), md(12, 31));
        assert_eq!(md(5, 5).plus_days(366), md(5, 5));
        assert_eq!(md(5, 5).plus_days(i64::MAX), md(5, 5).plus_days(i64::MAX.rem_euclid(366)));
        assert_eq!(md(1, 1).plus_weeks(1), md(1, 8));
        assert_eq!(md(1, 1).plus_weeks(-1), md(12, 25));
    }

    #[test]
    fn test_at_year() {
        assert_eq!(md(2, 29).at_year(2008).unwrap(), LocalDate::of(2008, 2, 29).unwrap());
        assert!(md(2, 29).at_year(2007).unwrap_err().is_invalid_field());
        assert_eq!(
            md(2, 29).at_year_with(2007, &DateResolver::PreviousValid).unwrap(),
            LocalDate::of(2007, 2, 28).unwrap()
        );
        assert!(md(2, 29).is_valid_year(2000));
        assert!(!md(2, 29).is_valid_year(1900));
    }

    /// Answers the thirtieth of whatever month it is asked about.
    #[derive(Debug)]
    struct ThirtiethOfMonth;

    impl ResolveDate for ThirtiethOfMonth {
        fn resolve_date(
            &self,
            year: i32,
            month: u8,
            _day: u8,
        ) -> Result<almanac_core::RawDate, CalendarError> {
            Ok(almanac_core::RawDate::new(year, month, 30))
        }
    }

    #[test]
    fn test_custom_resolver_output_is_revalidated() {
        assert!(md(2, 29).at_year_with(2009, &ThirtiethOfMonth).unwrap_err().is_invalid_field());
        assert!(md(1, 31)
            .with_month_of_year_with(2, &ThirtiethOfMonth)
            .unwrap_err()
            .is_invalid_field());
        assert!(md(1, 31).plus_months_with(1, &ThirtiethOfMonth).unwrap_err().is_invalid_field());
        assert_eq!(md(1, 31).with_month_of_year_with(4, &ThirtiethOfMonth).unwrap(), md(4, 30));
    }

    #[test]
    fn test_plus_days_matches_leap_year_dates() {
        let start = LocalDate::of(LEAP_YEAR, 1, 1).unwrap();
        for offset in 0..366 {
            let date = start.plus_days(offset).unwrap();
            assert_eq!(md(1, 1).plus_days(offset), date.month_day());
        }
    }

    #[test]
    fn test_ordering() {
        assert!(md(3, 1).is_after(&md(2, 29)));
        assert!(md(1, 31).is_before(&md(2, 1)));
    }

    #[test]
    fn test_from_local_date() {
        let date = LocalDate::of(2007, 6, 15).unwrap();
        assert_eq!(MonthDay::from_calendricals(&[&date]).unwrap(), md(6, 15));
        let ym = crate::YearMonth::of(2007, 6).unwrap();
        assert!(MonthDay::from_calendricals(&[&ym]).is_err());
    }

    #[test]
    fn test_serde_revalidates() {
        let json = serde_json::to_string(&md(2, 29)).unwrap();
        assert_eq!(json, r#"{"month":2,"day":29}"#);
        assert!(serde_json::from_str::<MonthDay>(r#"{"month":2,"day":30}"#).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(md(7, 4).to_string(), "--07-04");
    }
}
