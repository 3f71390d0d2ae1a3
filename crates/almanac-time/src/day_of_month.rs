//! # Day of Month
//!
//! A day-of-month value, 1 to 31, without a month. Whether it exists in a
//! particular month is checked against a [`YearMonth`].

use serde::{Deserialize, Serialize};

use almanac_core::{Calendrical, CalendarError, DateTimeField, FieldMap, IsoChronology};

use crate::year_month::YearMonth;

const SUPPORTED: &[DateTimeField] = &[DateTimeField::DayOfMonth];

/// A day of the month, 1 to 31.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayOfMonth(u8);

impl DayOfMonth {
    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] unless `day` is 1 to 31.
    pub fn of(day: u8) -> Result<Self, CalendarError> {
        IsoChronology::INSTANCE
            .day_of_month_rule()
            .check_value(i64::from(day))?;
        Ok(Self(day))
    }

    /// Build from the `DayOfMonth` field of a set of calendricals.
    pub fn from_calendricals(calendricals: &[&dyn Calendrical]) -> Result<Self, CalendarError> {
        let map = FieldMap::from_calendricals(calendricals)?;
        let day = map.require(DateTimeField::DayOfMonth, "DayOfMonth")?;
        Ok(Self(IsoChronology::INSTANCE.day_of_month_rule().check_u8(day)?))
    }

    /// The day value, 1 to 31.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Whether this day exists in `year_month`.
    pub fn is_valid_year_month(self, year_month: YearMonth) -> bool {
        self.0 <= year_month.length_of_month()
    }
}

impl TryFrom<u8> for DayOfMonth {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::of(value)
    }
}

impl From<DayOfMonth> for u8 {
    fn from(day: DayOfMonth) -> Self {
        day.0
    }
}

impl Calendrical for DayOfMonth {
    fn type_name(&self) -> &'static str {
        "DayOfMonth"
    }

    fn supported_fields(&self) -> &'static [DateTimeField] {
        SUPPORTED
    }

    fn get(&self, field: DateTimeField) -> Result<i64, CalendarError> {
        match field {
            DateTimeField::DayOfMonth => Ok(i64::from(self.0)),
            _ => Err(self.unsupported(field)),
        }
    }
}

impl std::fmt::Display for DayOfMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range() {
        assert_eq!(DayOfMonth::of(31).unwrap().value(), 31);
        assert!(DayOfMonth::of(0).unwrap_err().is_range_error());
        assert!(DayOfMonth::of(32).unwrap_err().is_range_error());
    }

    #[test]
    fn test_valid_in_year_month() {
        let d = DayOfMonth::of(29).unwrap();
        assert!(d.is_valid_year_month(YearMonth::of(2008, 2).unwrap()));
        assert!(!d.is_valid_year_month(YearMonth::of(2007, 2).unwrap()));
    }

    #[test]
    fn test_calendrical_merge_with_year_month() {
        let ym = YearMonth::of(2007, 4).unwrap();
        let d = DayOfMonth::of(30).unwrap();
        let date = crate::LocalDate::from_calendricals(&[&ym, &d]).unwrap();
        assert_eq!(date, crate::LocalDate::of(2007, 4, 30).unwrap());
        assert_eq!(DayOfMonth::from_calendricals(&[&date]).unwrap(), d);
    }
}
