//! # Month of Year
//!
//! The twelve ISO months as a closed enum. A month on its own has no year,
//! so February's length depends on a leap flag supplied by the caller.

use serde::{Deserialize, Serialize};

use almanac_core::{Calendrical, CalendarError, DateTimeField, FieldMap, IsoChronology};

/// A month of the ISO year, January = 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MonthOfYear {
    /// January.
    January = 1,
    /// February.
    February,
    /// March.
    March,
    /// April.
    April,
    /// May.
    May,
    /// June.
    June,
    /// July.
    July,
    /// August.
    August,
    /// September.
    September,
    /// October.
    October,
    /// November.
    November,
    /// December.
    December,
}

const MONTHS: [MonthOfYear; 12] = [
    MonthOfYear::January,
    MonthOfYear::February,
    MonthOfYear::March,
    MonthOfYear::April,
    MonthOfYear::May,
    MonthOfYear::June,
    MonthOfYear::July,
    MonthOfYear::August,
    MonthOfYear::September,
    MonthOfYear::October,
    MonthOfYear::November,
    MonthOfYear::December,
];

/// Days in a standard year before the first of each month.
const DAYS_BEFORE: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

const SUPPORTED: &[DateTimeField] = &[DateTimeField::MonthOfYear];

impl MonthOfYear {
    /// Returns every month, January first.
    pub fn all() -> &'static [MonthOfYear] {
        &MONTHS
    }

    /// Obtain a month from its value.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] unless `month` is 1 to 12.
    pub fn of(month: u8) -> Result<Self, CalendarError> {
        let month = IsoChronology::INSTANCE
            .month_of_year_rule()
            .check_u8(i64::from(month))?;
        Ok(MONTHS[usize::from(month - 1)])
    }

    /// The month for a value already checked to be 1 to 12.
    pub(crate) fn from_valid(month: u8) -> Self {
        MONTHS[usize::from(month - 1)]
    }

    /// Build from the `MonthOfYear` field of a set of calendricals.
    pub fn from_calendricals(calendricals: &[&dyn Calendrical]) -> Result<Self, CalendarError> {
        let map = FieldMap::from_calendricals(calendricals)?;
        let month = map.require(DateTimeField::MonthOfYear, "MonthOfYear")?;
        Self::of(IsoChronology::INSTANCE.month_of_year_rule().check_u8(month)?)
    }

    /// The month value, 1 to 12.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// English month name.
    pub fn name(self) -> &'static str {
        IsoChronology::INSTANCE.month_name(self.value())
    }

    /// Length in days, with February resolved by `leap_year`.
    pub fn length(self, leap_year: bool) -> u8 {
        match self {
            Self::February if leap_year => 29,
            Self::February => 28,
            Self::April | Self::June | Self::September | Self::November => 30,
            _ => 31,
        }
    }

    /// Shortest possible length of this month.
    pub fn min_length(self) -> u8 {
        self.length(false)
    }

    /// Longest possible length of this month.
    pub fn max_length(self) -> u8 {
        self.length(true)
    }

    /// One-based day of year of the first day of this month.
    pub fn first_day_of_year(self, leap_year: bool) -> u16 {
        let before = DAYS_BEFORE[usize::from(self.value() - 1)];
        if leap_year && self > Self::February {
            before + 2
        } else {
            before + 1
        }
    }

    /// Month and day for one-based `day_of_year` in a leap year, 1 to 366.
    pub(crate) fn leap_year_day(day_of_year: u16) -> (Self, u8) {
        let mut month = Self::January;
        for candidate in MONTHS {
            if candidate.first_day_of_year(true) <= day_of_year {
                month = candidate;
            }
        }
        (month, (day_of_year + 1 - month.first_day_of_year(true)) as u8)
    }

    /// The month `months` later, wrapping around the year.
    pub fn plus(self, months: i64) -> Self {
        let index = (i64::from(self.value()) - 1 + months.rem_euclid(12)).rem_euclid(12);
        MONTHS[index as usize]
    }

    /// The month `months` earlier, wrapping around the year.
    pub fn minus(self, months: i64) -> Self {
        self.plus(-(months.rem_euclid(12)))
    }

    /// Whether this month comes after `other` in the year.
    pub fn is_after(self, other: Self) -> bool {
        self > other
    }

    /// Whether this month comes before `other` in the year.
    pub fn is_before(self, other: Self) -> bool {
        self < other
    }
}

impl TryFrom<u8> for MonthOfYear {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::of(value)
    }
}

impl From<MonthOfYear> for u8 {
    fn from(month: MonthOfYear) -> Self {
        month.value()
    }
}

impl Calendrical for MonthOfYear {
    fn type_name(&self) -> &'static str {
        "MonthOfYear"
    }

    fn supported_fields(&self) -> &'static [DateTimeField] {
        SUPPORTED
    }

    fn get(&self, field: DateTimeField) -> Result<i64, CalendarError> {
        match field {
            DateTimeField::MonthOfYear => Ok(i64::from(self.value())),
            _ => Err(self.unsupported(field)),
        }
    }
}

impl std::fmt::Display for MonthOfYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
