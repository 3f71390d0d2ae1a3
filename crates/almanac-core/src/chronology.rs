//! # ISO Chronology — Proleptic Gregorian Calendar Law
//!
//! [`IsoChronology`] encodes the rules of the ISO-8601 calendar extended
//! backwards indefinitely: the leap-year test, month lengths, day-of-year
//! and epoch-day conversion, the valid-date test and the BCE/CE era mapping.
//! It also owns the canonical table of [`FieldRule`]s.
//!
//! ## Shared Constant
//!
//! The chronology is a zero-sized `Copy` value exposed as
//! [`IsoChronology::INSTANCE`]. It holds no state; the rule table is a
//! `static` built at compile time, so there is nothing to initialize at
//! runtime and nothing to synchronize across threads.
//!
//! ## Failure Policy
//!
//! Validation failures are reported to the caller. The chronology never
//! clamps; that is a resolver's job (see [`crate::resolver`]).

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::field::{DateTimeField, FieldRule, PeriodUnit};

/// Smallest supported proleptic year.
pub const MIN_YEAR: i32 = -999_999_999;

/// Largest supported proleptic year.
pub const MAX_YEAR: i32 = 999_999_999;

/// Days from 0000-03-01 to 1970-01-01.
const DAYS_0000_TO_1970: i64 = 719_468;

/// Days in one 400-year Gregorian cycle.
const DAYS_PER_CYCLE: i64 = 146_097;

const MONTH_LENGTHS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days before the first of each month in a standard year.
const DAYS_BEFORE_MONTH: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// Indexed by `DateTimeField as usize`.
static FIELD_RULES: [FieldRule; 10] = [
    FieldRule::new(DateTimeField::Era, "Era", 0, 1, PeriodUnit::Eras, PeriodUnit::Forever),
    FieldRule::new(
        DateTimeField::YearOfEra,
        "YearOfEra",
        1,
        MAX_YEAR as i64 + 1,
        PeriodUnit::Years,
        PeriodUnit::Eras,
    ),
    FieldRule::new(
        DateTimeField::Year,
        "Year",
        MIN_YEAR as i64,
        MAX_YEAR as i64,
        PeriodUnit::Years,
        PeriodUnit::Forever,
    ),
    FieldRule::new(
        DateTimeField::MonthOfYear,
        "MonthOfYear",
        1,
        12,
        PeriodUnit::Months,
        PeriodUnit::Years,
    ),
    FieldRule::new(
        DateTimeField::DayOfMonth,
        "DayOfMonth",
        1,
        31,
        PeriodUnit::Days,
        PeriodUnit::Months,
    ),
    FieldRule::new(
        DateTimeField::DayOfYear,
        "DayOfYear",
        1,
        366,
        PeriodUnit::Days,
        PeriodUnit::Years,
    ),
    FieldRule::new(
        DateTimeField::HourOfDay,
        "HourOfDay",
        0,
        23,
        PeriodUnit::Hours,
        PeriodUnit::Days,
    ),
    FieldRule::new(
        DateTimeField::MinuteOfHour,
        "MinuteOfHour",
        0,
        59,
        PeriodUnit::Minutes,
        PeriodUnit::Hours,
    ),
    FieldRule::new(
        DateTimeField::SecondOfMinute,
        "SecondOfMinute",
        0,
        59,
        PeriodUnit::Seconds,
        PeriodUnit::Minutes,
    ),
    FieldRule::new(
        DateTimeField::NanoOfSecond,
        "NanoOfSecond",
        0,
        999_999_999,
        PeriodUnit::Nanos,
        PeriodUnit::Seconds,
    ),
];

// ─── Era ─────────────────────────────────────────────────────────────

/// The two eras of the ISO calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Era {
    /// Before the common era; field value 0. Year 0 is 1 BCE.
    Bce,
    /// The common era; field value 1. Year 1 is 1 CE.
    Ce,
}

impl Era {
    /// Obtain an era from its field value.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] unless `value` is 0 or 1.
    pub fn of(value: i64) -> Result<Self, CalendarError> {
        match DateTimeField::Era.rule().check_value(value)? {
            0 => Ok(Self::Bce),
            _ => Ok(Self::Ce),
        }
    }

    /// The field value: 0 for BCE, 1 for CE.
    pub fn value(self) -> i64 {
        match self {
            Self::Bce => 0,
            Self::Ce => 1,
        }
    }
}

impl std::fmt::Display for Era {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Bce => "BCE",
            Self::Ce => "CE",
        })
    }
}

// ─── Raw Date Tuple ──────────────────────────────────────────────────

/// A year/month/day triple that has not necessarily been validated.
///
/// Resolvers consume and produce this tuple. Value types use it as their
/// structural serialization form and re-validate on the way back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RawDate {
    /// Proleptic year.
    pub year: i32,
    /// Month of year.
    pub month: u8,
    /// Day of month.
    pub day: u8,
}

impl RawDate {
    /// Bundle a year, month and day without validating them.
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

impl std::fmt::Display for RawDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

// ─── Chronology ──────────────────────────────────────────────────────

/// The ISO proleptic Gregorian chronology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IsoChronology {
    _private: (),
}

impl IsoChronology {
    /// The shared chronology constant.
    pub const INSTANCE: IsoChronology = IsoChronology { _private: () };

    /// The chronology identifier.
    pub fn name(&self) -> &'static str {
        "ISO"
    }

    // ── Field rules ──

    /// Every rule in the table, ordered as [`DateTimeField::all()`].
    pub fn rules(&self) -> &'static [FieldRule] {
        &FIELD_RULES
    }

    /// The canonical rule for `field`.
    pub fn rule(&self, field: DateTimeField) -> &'static FieldRule {
        &FIELD_RULES[field as usize]
    }

    /// The era rule.
    pub fn era_rule(&self) -> &'static FieldRule {
        self.rule(DateTimeField::Era)
    }

    /// The year-of-era rule.
    pub fn year_of_era_rule(&self) -> &'static FieldRule {
        self.rule(DateTimeField::YearOfEra)
    }

    /// The proleptic year rule.
    pub fn year_rule(&self) -> &'static FieldRule {
        self.rule(DateTimeField::Year)
    }

    /// The month-of-year rule.
    pub fn month_of_year_rule(&self) -> &'static FieldRule {
        self.rule(DateTimeField::MonthOfYear)
    }

    /// The day-of-month rule.
    pub fn day_of_month_rule(&self) -> &'static FieldRule {
        self.rule(DateTimeField::DayOfMonth)
    }

    /// The day-of-year rule.
    pub fn day_of_year_rule(&self) -> &'static FieldRule {
        self.rule(DateTimeField::DayOfYear)
    }

    /// The hour-of-day rule.
    pub fn hour_of_day_rule(&self) -> &'static FieldRule {
        self.rule(DateTimeField::HourOfDay)
    }

    /// The minute-of-hour rule.
    pub fn minute_of_hour_rule(&self) -> &'static FieldRule {
        self.rule(DateTimeField::MinuteOfHour)
    }

    /// The second-of-minute rule.
    pub fn second_of_minute_rule(&self) -> &'static FieldRule {
        self.rule(DateTimeField::SecondOfMinute)
    }

    /// The nano-of-second rule.
    pub fn nano_of_second_rule(&self) -> &'static FieldRule {
        self.rule(DateTimeField::NanoOfSecond)
    }

    // ── Calendar law ──

    /// ISO leap-year rule: divisible by 4, except centuries not divisible
    /// by 400. Applies unchanged to zero and negative proleptic years.
    pub fn is_leap_year(&self, year: i64) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Number of days in `year`: 365 or 366.
    pub fn year_length(&self, year: i64) -> u16 {
        if self.is_leap_year(year) {
            366
        } else {
            365
        }
    }

    /// Length of `month` in `year`, with February resolved by the leap-year rule.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] if `month` is not 1 to 12.
    pub fn month_length(&self, year: i64, month: u8) -> Result<u8, CalendarError> {
        self.month_of_year_rule().check_value(i64::from(month))?;
        Ok(self.month_length_unchecked(year, month))
    }

    /// Month length for a month already known to be 1 to 12.
    pub(crate) fn month_length_unchecked(&self, year: i64, month: u8) -> u8 {
        let base = MONTH_LENGTHS[usize::from(month - 1)];
        if month == 2 && self.is_leap_year(year) {
            base + 1
        } else {
            base
        }
    }

    /// English name of `month` (1 to 12), used in diagnostics.
    pub fn month_name(&self, month: u8) -> &'static str {
        MONTH_NAMES
            .get(usize::from(month.wrapping_sub(1)))
            .copied()
            .unwrap_or("?")
    }

    /// Check that `(year, month, day)` is a real calendar date.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::FieldOutOfRange`] if the year is outside
    ///   `MIN_YEAR..=MAX_YEAR`.
    /// - [`CalendarError::InvalidField`] if the month is not 1 to 12 or the
    ///   day is not within the month's length.
    pub fn check_valid_date(&self, year: i32, month: u8, day: u8) -> Result<(), CalendarError> {
        self.year_rule().check_value(i64::from(year))?;
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidField {
                field: DateTimeField::MonthOfYear,
                value: i64::from(month),
                reason: "month of year must be 1 to 12".to_string(),
            });
        }
        let length = self.month_length_unchecked(i64::from(year), month);
        if day == 0 || day > length {
            return Err(self.invalid_day_of_month(year, month, day, length));
        }
        Ok(())
    }

    pub(crate) fn invalid_day_of_month(&self, year: i32, month: u8, day: u8, length: u8) -> CalendarError {
        CalendarError::InvalidField {
            field: DateTimeField::DayOfMonth,
            value: i64::from(day),
            reason: format!("{} {} has {} days", self.month_name(month), year, length),
        }
    }

    /// Whether `(year, month, day)` is a real calendar date.
    pub fn is_valid_date(&self, year: i32, month: u8, day: u8) -> bool {
        self.check_valid_date(year, month, day).is_ok()
    }

    /// One-based day of year for a valid date.
    ///
    /// # Errors
    ///
    /// Propagates [`IsoChronology::check_valid_date`] failures.
    pub fn day_of_year(&self, year: i32, month: u8, day: u8) -> Result<u16, CalendarError> {
        self.check_valid_date(year, month, day)?;
        Ok(self.day_of_year_unchecked(i64::from(year), month, day))
    }

    pub(crate) fn day_of_year_unchecked(&self, year: i64, month: u8, day: u8) -> u16 {
        let mut doy = DAYS_BEFORE_MONTH[usize::from(month - 1)] + u16::from(day);
        if month > 2 && self.is_leap_year(year) {
            doy += 1;
        }
        doy
    }

    /// Month and day for a one-based day of `year`.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::FieldOutOfRange`] if `day_of_year` is not 1 to 366.
    /// - [`CalendarError::InvalidField`] for day 366 of a standard year.
    pub fn date_from_day_of_year(&self, year: i32, day_of_year: u16) -> Result<RawDate, CalendarError> {
        self.year_rule().check_value(i64::from(year))?;
        self.day_of_year_rule().check_value(i64::from(day_of_year))?;
        let length = self.year_length(i64::from(year));
        if day_of_year > length {
            return Err(CalendarError::InvalidField {
                field: DateTimeField::DayOfYear,
                value: i64::from(day_of_year),
                reason: format!("year {year} has {length} days"),
            });
        }
        let mut remaining = day_of_year;
        let mut month = 1u8;
        loop {
            let len = u16::from(self.month_length_unchecked(i64::from(year), month));
            if remaining <= len || month == 12 {
                // remaining <= 31 here
                return Ok(RawDate::new(year, month, remaining as u8));
            }
            remaining -= len;
            month += 1;
        }
    }

    /// Days since 1970-01-01 for a date; negative before the epoch.
    ///
    /// The conversion is pure arithmetic and is exact for every valid date.
    pub fn epoch_day(&self, year: i32, month: u8, day: u8) -> i64 {
        let month = i64::from(month);
        let day = i64::from(day);
        let year = if month <= 2 {
            i64::from(year) - 1
        } else {
            i64::from(year)
        };
        let cycle = year.div_euclid(400);
        let year_of_cycle = year.rem_euclid(400);
        let shifted_month = (month + 9) % 12;
        let day_of_shifted_year = (153 * shifted_month + 2) / 5 + day - 1;
        let day_of_cycle =
            year_of_cycle * 365 + year_of_cycle / 4 - year_of_cycle / 100 + day_of_shifted_year;
        cycle * DAYS_PER_CYCLE + day_of_cycle - DAYS_0000_TO_1970
    }

    /// The date `epoch_day` days after 1970-01-01.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::Overflow`] if the day count cannot be shifted.
    /// - [`CalendarError::FieldOutOfRange`] if the resulting year is outside
    ///   `MIN_YEAR..=MAX_YEAR`.
    pub fn date_from_epoch_day(&self, epoch_day: i64) -> Result<RawDate, CalendarError> {
        let days = epoch_day
            .checked_add(DAYS_0000_TO_1970)
            .ok_or_else(|| CalendarError::overflow("date_from_epoch_day"))?;
        let cycle = days.div_euclid(DAYS_PER_CYCLE);
        let day_of_cycle = days.rem_euclid(DAYS_PER_CYCLE);
        let year_of_cycle =
            (day_of_cycle - day_of_cycle / 1_460 + day_of_cycle / 36_524 - day_of_cycle / 146_096)
                / 365;
        let day_of_shifted_year =
            day_of_cycle - (365 * year_of_cycle + year_of_cycle / 4 - year_of_cycle / 100);
        let shifted_month = (5 * day_of_shifted_year + 2) / 153;
        let day = day_of_shifted_year - (153 * shifted_month + 2) / 5 + 1;
        let month = if shifted_month < 10 {
            shifted_month + 3
        } else {
            shifted_month - 9
        };
        // |cycle| <= i64::MAX / 146_097, so the multiplication cannot overflow.
        let year = cycle * 400 + year_of_cycle + i64::from(month <= 2);
        let year = self.year_rule().check_i32(year)?;
        // month in 1..=12 and day in 1..=31 by construction
        Ok(RawDate::new(year, month as u8, day as u8))
    }

    /// ISO day-of-week value for an epoch day: 1 = Monday … 7 = Sunday.
    pub fn day_of_week(&self, epoch_day: i64) -> u8 {
        // 1970-01-01 was a Thursday.
        ((epoch_day.rem_euclid(7) + 3) % 7 + 1) as u8
    }

    // ── Era mapping ──

    /// The era of a proleptic year: year 1 and later is CE, year 0 and
    /// earlier is BCE.
    pub fn era(&self, year: i32) -> Era {
        if year >= 1 {
            Era::Ce
        } else {
            Era::Bce
        }
    }

    /// Year within the era: 1 CE for year 1, 1 BCE for year 0, 2 BCE for year -1.
    pub fn year_of_era(&self, year: i32) -> i64 {
        match self.era(year) {
            Era::Ce => i64::from(year),
            Era::Bce => 1 - i64::from(year),
        }
    }

    /// Proleptic year for an era and year-of-era.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] if `year_of_era` is below 1
    /// or the proleptic year falls outside the year rule.
    pub fn proleptic_year(&self, era: Era, year_of_era: i64) -> Result<i32, CalendarError> {
        self.year_of_era_rule().check_value(year_of_era)?;
        let year = match era {
            Era::Ce => year_of_era,
            Era::Bce => 1 - year_of_era,
        };
        self.year_rule().check_i32(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISO: IsoChronology = IsoChronology::INSTANCE;

    #[test]
    fn test_rule_table_order_matches_fields() {
        for (rule, field) in ISO.rules().iter().zip(DateTimeField::all()) {
            assert_eq!(rule.field(), *field);
        }
    }

    #[test]
    fn test_named_rule_accessors() {
        assert_eq!(ISO.year_rule().field(), DateTimeField::Year);
        assert_eq!(ISO.month_of_year_rule().max(), 12);
        assert_eq!(ISO.day_of_month_rule().max(), 31);
        assert_eq!(ISO.day_of_year_rule().max(), 366);
        assert_eq!(ISO.hour_of_day_rule().max(), 23);
        assert_eq!(ISO.minute_of_hour_rule().max(), 59);
        assert_eq!(ISO.second_of_minute_rule().max(), 59);
        assert_eq!(ISO.nano_of_second_rule().max(), 999_999_999);
        assert_eq!(ISO.era_rule().max(), 1);
        assert_eq!(ISO.year_of_era_rule().min(), 1);
    }

    #[test]
    fn test_leap_years() {
        assert!(ISO.is_leap_year(2008));
        assert!(ISO.is_leap_year(2000));
        assert!(ISO.is_leap_year(0));
        assert!(ISO.is_leap_year(-4));
        assert!(ISO.is_leap_year(-400));
        assert!(!ISO.is_leap_year(1900));
        assert!(!ISO.is_leap_year(2007));
        assert!(!ISO.is_leap_year(-1));
        assert!(!ISO.is_leap_year(-100));
    }

    #[test]
    fn test_month_lengths() {
        assert_eq!(ISO.month_length(2008, 2), Ok(29));
        assert_eq!(ISO.month_length(2007, 2), Ok(28));
        assert_eq!(ISO.month_length(2007, 4), Ok(30));
        assert_eq!(ISO.month_length(2007, 12), Ok(31));
        assert!(ISO.month_length(2007, 0).unwrap_err().is_range_error());
        assert!(ISO.month_length(2007, 13).is_err());
    }

    #[test]
    fn test_check_valid_date() {
        assert!(ISO.check_valid_date(2008, 2, 29).is_ok());
        let err = ISO.check_valid_date(2007, 2, 29).unwrap_err();
        assert!(err.is_invalid_field());
        assert_eq!(
            err.to_string(),
            "invalid value 29 for DayOfMonth: February 2007 has 28 days"
        );
        assert!(ISO.check_valid_date(2007, 4, 31).unwrap_err().is_invalid_field());
        assert!(ISO.check_valid_date(2007, 13, 1).unwrap_err().is_invalid_field());
        assert!(ISO.check_valid_date(2007, 1, 0).unwrap_err().is_invalid_field());
        assert!(ISO.check_valid_date(i32::MAX, 1, 1).unwrap_err().is_range_error());
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(ISO.day_of_year(2007, 1, 1), Ok(1));
        assert_eq!(ISO.day_of_year(2007, 3, 1), Ok(60));
        assert_eq!(ISO.day_of_year(2008, 3, 1), Ok(61));
        assert_eq!(ISO.day_of_year(2008, 12, 31), Ok(366));
        assert_eq!(ISO.day_of_year(2007, 12, 31), Ok(365));
        assert!(ISO.day_of_year(2007, 2, 30).is_err());
    }

    #[test]
    fn test_date_from_day_of_year() {
        assert_eq!(ISO.date_from_day_of_year(2008, 60), Ok(RawDate::new(2008, 2, 29)));
        assert_eq!(ISO.date_from_day_of_year(2007, 60), Ok(RawDate::new(2007, 3, 1)));
        assert_eq!(ISO.date_from_day_of_year(2008, 366), Ok(RawDate::new(2008, 12, 31)));
        assert!(ISO.date_from_day_of_year(2007, 366).unwrap_err().is_invalid_field());
        assert!(ISO.date_from_day_of_year(2007, 0).unwrap_err().is_range_error());
    }

    #[test]
    fn test_epoch_day_known_values() {
        assert_eq!(ISO.epoch_day(1970, 1, 1), 0);
        assert_eq!(ISO.epoch_day(1970, 1, 2), 1);
        assert_eq!(ISO.epoch_day(1969, 12, 31), -1);
        assert_eq!(ISO.epoch_day(2000, 3, 1), 11_017);
        assert_eq!(ISO.epoch_day(0, 1, 1), -719_528);
    }

    #[test]
    fn test_date_from_epoch_day_known_values() {
        assert_eq!(ISO.date_from_epoch_day(0), Ok(RawDate::new(1970, 1, 1)));
        assert_eq!(ISO.date_from_epoch_day(-1), Ok(RawDate::new(1969, 12, 31)));
        assert_eq!(ISO.date_from_epoch_day(11_016), Ok(RawDate::new(2000, 2, 29)));
        assert_eq!(ISO.date_from_epoch_day(-719_528), Ok(RawDate::new(0, 1, 1)));
    }

    #[test]
    fn test_date_from_epoch_day_limits() {
        let max = ISO.epoch_day(MAX_YEAR, 12, 31);
        assert_eq!(ISO.date_from_epoch_day(max), Ok(RawDate::new(MAX_YEAR, 12, 31)));
        assert!(ISO.date_from_epoch_day(max + 1).unwrap_err().is_range_error());
        let min = ISO.epoch_day(MIN_YEAR, 1, 1);
        assert_eq!(ISO.date_from_epoch_day(min), Ok(RawDate::new(MIN_YEAR, 1, 1)));
        assert!(ISO.date_from_epoch_day(min - 1).unwrap_err().is_range_error());
        assert!(ISO.date_from_epoch_day(i64::MAX).unwrap_err().is_overflow());
    }

    #[test]
    fn test_day_of_week() {
        assert_eq!(ISO.day_of_week(0), 4); // 1970-01-01 Thursday
        assert_eq!(ISO.day_of_week(ISO.epoch_day(2024, 3, 31)), 7);
        assert_eq!(ISO.day_of_week(ISO.epoch_day(2000, 1, 3)), 1);
        assert_eq!(ISO.day_of_week(-1), 3);
    }

    #[test]
    fn test_era_mapping() {
        assert_eq!(ISO.era(1), Era::Ce);
        assert_eq!(ISO.era(0), Era::Bce);
        assert_eq!(ISO.year_of_era(1), 1);
        assert_eq!(ISO.year_of_era(0), 1);
        assert_eq!(ISO.year_of_era(-1), 2);
        assert_eq!(ISO.proleptic_year(Era::Ce, 2008), Ok(2008));
        assert_eq!(ISO.proleptic_year(Era::Bce, 1), Ok(0));
        assert_eq!(ISO.proleptic_year(Era::Bce, 2), Ok(-1));
        assert!(ISO.proleptic_year(Era::Ce, 0).is_err());
        assert_eq!(ISO.proleptic_year(Era::Bce, MAX_YEAR as i64 + 1), Ok(MIN_YEAR));
    }

    #[test]
    fn test_era_values() {
        assert_eq!(Era::of(0), Ok(Era::Bce));
        assert_eq!(Era::of(1), Ok(Era::Ce));
        assert!(Era::of(2).is_err());
        assert_eq!(Era::Ce.value(), 1);
        assert_eq!(Era::Bce.to_string(), "BCE");
    }

    #[test]
    fn test_raw_date_display() {
        assert_eq!(RawDate::new(2007, 3, 9).to_string(), "2007-03-09");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const ISO: IsoChronology = IsoChronology::INSTANCE;

    proptest! {
        /// The leap-year test matches the arithmetic rule for every year,
        /// including zero and negative proleptic years.
        #[test]
        fn leap_year_rule(year in -1_000_000i64..1_000_000) {
            let expected = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
            prop_assert_eq!(ISO.is_leap_year(year), expected);
        }

        /// February is 29 days exactly in leap years; every other month is
        /// fixed-length regardless of year.
        #[test]
        fn month_length_table(year in -100_000i64..100_000, month in 1u8..=12) {
            let len = ISO.month_length(year, month).unwrap();
            if month == 2 {
                prop_assert_eq!(len == 29, ISO.is_leap_year(year));
                prop_assert!(len == 28 || len == 29);
            } else {
                prop_assert_eq!(len, ISO.month_length(2001, month).unwrap());
            }
        }

        /// Epoch-day conversion is a bijection over valid dates.
        #[test]
        fn epoch_day_bijection(epoch_day in -400_000_000_000i64..400_000_000_000) {
            match ISO.date_from_epoch_day(epoch_day) {
                Ok(date) => {
                    prop_assert!(ISO.is_valid_date(date.year, date.month, date.day));
                    prop_assert_eq!(ISO.epoch_day(date.year, date.month, date.day), epoch_day);
                }
                Err(e) => prop_assert!(e.is_range_error()),
            }
        }

        /// Consecutive epoch days are consecutive calendar days.
        #[test]
        fn day_of_year_consistent_with_epoch_day(year in -5000i32..5000, doy in 1u16..=365) {
            let date = ISO.date_from_day_of_year(year, doy).unwrap();
            let jan1 = ISO.epoch_day(year, 1, 1);
            prop_assert_eq!(ISO.epoch_day(date.year, date.month, date.day) - jan1, i64::from(doy) - 1);
        }
    }
}
