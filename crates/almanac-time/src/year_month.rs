//! # Year-Month
//!
//! A year and month without a day, such as a card expiry. Every in-range
//! year-month is valid, so its arithmetic never needs a resolver.

use serde::{Deserialize, Serialize};

use almanac_core::{Calendrical, CalendarError, DateTimeField, FieldMap, IsoChronology};

use crate::arith;
use crate::local_date::LocalDate;
use crate::month::MonthOfYear;
use crate::year::Year;

const SUPPORTED: &[DateTimeField] = &[
    DateTimeField::Era,
    DateTimeField::YearOfEra,
    DateTimeField::Year,
    DateTimeField::MonthOfYear,
];

/// A proleptic year and a month of that year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "YearMonthFields", into = "YearMonthFields")]
pub struct YearMonth {
    year: i32,
    month: u8,
}

#[derive(Serialize, Deserialize)]
struct YearMonthFields {
    year: i32,
    month: u8,
}

impl YearMonth {
    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] if either field leaves its rule.
    pub fn of(year: i32, month: u8) -> Result<Self, CalendarError> {
        let iso = IsoChronology::INSTANCE;
        iso.year_rule().check_value(i64::from(year))?;
        iso.month_of_year_rule().check_value(i64::from(month))?;
        Ok(Self { year, month })
    }

    pub(crate) const fn new_unchecked(year: i32, month: u8) -> Self {
        Self { year, month }
    }

    /// Build from the year and month fields of a set of calendricals.
    pub fn from_calendricals(calendricals: &[&dyn Calendrical]) -> Result<Self, CalendarError> {
        let map = FieldMap::from_calendricals(calendricals)?;
        let year = map.resolve_year("YearMonth")?;
        let month = map.require(DateTimeField::MonthOfYear, "YearMonth")?;
        Self::of(
            year,
            IsoChronology::INSTANCE.month_of_year_rule().check_u8(month)?,
        )
    }

    /// The proleptic year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month of year, 1 to 12.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// The year on its own.
    pub fn to_year(&self) -> Year {
        Year::from_raw(self.year)
    }

    /// The month as an enum.
    pub fn month_of_year(&self) -> MonthOfYear {
        MonthOfYear::from_valid(self.month)
    }

    /// Whether the year is a leap year.
    pub fn is_leap_year(&self) -> bool {
        IsoChronology::INSTANCE.is_leap_year(i64::from(self.year))
    }

    /// Number of days in this month of this year.
    pub fn length_of_month(&self) -> u8 {
        self.month_of_year().length(self.is_leap_year())
    }

    /// Number of days in this year.
    pub fn length_of_year(&self) -> u16 {
        IsoChronology::INSTANCE.year_length(i64::from(self.year))
    }

    /// Whether `day` exists in this month.
    pub fn is_valid_day(&self, day: u8) -> bool {
        (1..=self.length_of_month()).contains(&day)
    }

    /// Replace the year. No day is carried, so nothing is resolved.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] if `year` leaves the year rule.
    pub fn with_year(&self, year: i32) -> Result<Self, CalendarError> {
        Self::of(year, self.month)
    }

    /// Replace the month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] unless `month` is 1 to 12.
    pub fn with_month_of_year(&self, month: u8) -> Result<Self, CalendarError> {
        Self::of(self.year, month)
    }

    /// # Errors
    ///
    /// - [`CalendarError::Overflow`] if the addition overflows `i64`.
    /// - [`CalendarError::FieldOutOfRange`] if the year leaves its rule.
    pub fn plus_years(&self, years: i64) -> Result<Self, CalendarError> {
        let year = arith::add_years(self.year, years, "plus_years")?;
        Ok(Self { year, ..*self })
    }

    /// Add months with floor-division carry into the year.
    pub fn plus_months(&self, months: i64) -> Result<Self, CalendarError> {
        let (year, month) = arith::add_months(self.year, self.month, months, "plus_months")?;
        Ok(Self { year, month })
    }

    /// Subtract years.
    ///
    /// # Errors
    ///
    /// As [`YearMonth::plus_years`].
    pub fn minus_years(&self, years: i64) -> Result<Self, CalendarError> {
        self.plus_years(arith::negate(years, "minus_years")?)
    }

    /// Subtract months with floor-division borrow from the year.
    ///
    /// # Errors
    ///
    /// As [`YearMonth::plus_months`].
    pub fn minus_months(&self, months: i64) -> Result<Self, CalendarError> {
        self.plus_months(arith::negate(months, "minus_months")?)
    }

    /// The date on `day` of this month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidField`] if the day does not exist.
    pub fn at_day(&self, day: u8) -> Result<LocalDate, CalendarError> {
        LocalDate::of(self.year, self.month, day)
    }

    /// The last date of this month.
    pub fn at_end_of_month(&self) -> LocalDate {
        LocalDate::new_unchecked(self.year, self.month, self.length_of_month())
    }

    /// Whether this year-month is later.
    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    /// Whether this year-month is earlier.
    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }
}

impl TryFrom<YearMonthFields> for YearMonth {
    type Error = CalendarError;

    fn try_from(fields: YearMonthFields) -> Result<Self, Self::Error> {
        Self::of(fields.year, fields.month)
    }
}

impl From<YearMonth> for YearMonthFields {
    fn from(ym: YearMonth) -> Self {
        Self {
            year: ym.year,
            month: ym.month,
        }
    }
}

impl Calendrical for YearMonth {
    fn type_name(&self) -> &'static str {
        "YearMonth"
    }

    fn supported_fields(&self) -> &'static [DateTimeField] {
        SUPPORTED
    }

    fn get(&self, field: DateTimeField) -> Result<i64, CalendarError> {
        let iso = IsoChronology::INSTANCE;
        match field {
            DateTimeField::Era => Ok(iso.era(self.year).value()),
            DateTimeField::YearOfEra => Ok(iso.year_of_era(self.year)),
            DateTimeField::Year => Ok(i64::from(self.year)),
            DateTimeField::MonthOfYear => Ok(i64::from(self.month)),
            _ => Err(self.unsupported(field)),
        }
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::local_date::write_year(f, self.year)?;
        write!(f, "-{:02}", self.month)
    }
}
