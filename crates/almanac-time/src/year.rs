//! # Year
//!
//! A proleptic ISO year on its own. Year 0 is 1 BCE; the era and
//! year-of-era fields are derived from the proleptic value.

use serde::{Deserialize, Serialize};

use almanac_core::{Calendrical, CalendarError, DateTimeField, Era, FieldMap, IsoChronology};

use crate::arith;
use crate::local_date::LocalDate;
use crate::month::MonthOfYear;
use crate::month_day::MonthDay;
use crate::year_month::YearMonth;

const SUPPORTED: &[DateTimeField] = &[
    DateTimeField::Era,
    DateTimeField::YearOfEra,
    DateTimeField::Year,
];

/// A proleptic ISO year within `MIN_YEAR..=MAX_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Year(i32);

impl Year {
    /// Obtain a year from its proleptic value.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] outside `MIN_YEAR..=MAX_YEAR`.
    pub fn of(year: i32) -> Result<Self, CalendarError> {
        IsoChronology::INSTANCE
            .year_rule()
            .check_value(i64::from(year))?;
        Ok(Self(year))
    }

    pub(crate) const fn from_raw(year: i32) -> Self {
        Self(year)
    }

    /// Obtain a year from an era and a year within it.
    pub fn of_era(era: Era, year_of_era: i64) -> Result<Self, CalendarError> {
        Ok(Self(IsoChronology::INSTANCE.proleptic_year(era, year_of_era)?))
    }

    /// Build from the year fields of a set of calendricals.
    pub fn from_calendricals(calendricals: &[&dyn Calendrical]) -> Result<Self, CalendarError> {
        let map = FieldMap::from_calendricals(calendricals)?;
        Ok(Self(map.resolve_year("Year")?))
    }

    /// The proleptic year value.
    pub fn value(self) -> i32 {
        self.0
    }

    /// The era this year falls in.
    pub fn era(self) -> Era {
        IsoChronology::INSTANCE.era(self.0)
    }

    /// The year within its era, counted from 1.
    pub fn year_of_era(self) -> i64 {
        IsoChronology::INSTANCE.year_of_era(self.0)
    }

    /// Whether this is a leap year.
    pub fn is_leap(self) -> bool {
        IsoChronology::INSTANCE.is_leap_year(i64::from(self.0))
    }

    /// Number of days in this year.
    pub fn length(self) -> u16 {
        IsoChronology::INSTANCE.year_length(i64::from(self.0))
    }

    /// # Errors
    ///
    /// - [`CalendarError::Overflow`] if the addition overflows `i64`.
    /// - [`CalendarError::FieldOutOfRange`] if the result leaves the year rule.
    pub fn plus_years(self, years: i64) -> Result<Self, CalendarError> {
        Ok(Self(arith::add_years(self.0, years, "plus_years")?))
    }

    /// Subtract years.
    ///
    /// # Errors
    ///
    /// As [`Year::plus_years`], plus [`CalendarError::Overflow`] when `years` is `i64::MIN`.
    pub fn minus_years(self, years: i64) -> Result<Self, CalendarError> {
        self.plus_years(arith::negate(years, "minus_years")?)
    }

    /// Combine with a month.
    pub fn at_month(self, month: MonthOfYear) -> YearMonth {
        YearMonth::new_unchecked(self.0, month.value())
    }

    /// Combine with a month-day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidField`] for 29 February in a standard year.
    pub fn at_month_day(self, month_day: MonthDay) -> Result<LocalDate, CalendarError> {
        month_day.at_year(self.0)
    }

    /// The date on one-based day `day_of_year` of this year.
    pub fn at_day(self, day_of_year: u16) -> Result<LocalDate, CalendarError> {
        LocalDate::of_year_day(self.0, day_of_year)
    }

    /// Whether `month_day` exists in this year.
    pub fn is_valid_month_day(self, month_day: MonthDay) -> bool {
        month_day.is_valid_year(self.0)
    }

    /// Whether this year is later.
    pub fn is_after(self, other: Self) -> bool {
        self > other
    }

    /// Whether this year is earlier.
    pub fn is_before(self, other: Self) -> bool {
        self < other
    }
}

impl TryFrom<i32> for Year {
    type Error = CalendarError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::of(value)
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl Calendrical for Year {
    fn type_name(&self) -> &'static str {
        "Year"
    }

    fn supported_fields(&self) -> &'static [DateTimeField] {
        SUPPORTED
    }

    fn get(&self, field: DateTimeField) -> Result<i64, CalendarError> {
        match field {
            DateTimeField::Era => Ok(self.era().value()),
            DateTimeField::YearOfEra => Ok(self.year_of_era()),
            DateTimeField::Year => Ok(i64::from(self.0)),
            _ => Err(self.unsupported(field)),
        }
    }
}

impl std::fmt::Display for Year {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
