//! # Local Date
//!
//! A date in the ISO calendar without time or zone: `{year, month, day}`.
//!
//! ## Invariants
//!
//! - Every instance satisfies `IsoChronology::check_valid_date`. Factories
//!   validate; `with_*` and `plus_*` either return a valid date or fail.
//! - Year and month changes that land on a missing day go through a
//!   [`ResolveDate`] policy, `PreviousValid` unless the caller picks one.
//! - Day arithmetic runs through the epoch day and needs no resolver.
//!
//! ## Ordering
//!
//! Chronological: by year, then month, then day.

use serde::{Deserialize, Serialize};

use almanac_core::{
    Calendrical, CalendarError, DateResolver, DateTimeField, Era, FieldMap, IsoChronology,
    RawDate, ResolveDate,
};

use crate::arith;
use crate::day_of_week::DayOfWeek;
use crate::local_date_time::LocalDateTime;
use crate::local_time::LocalTime;
use crate::month::MonthOfYear;
use crate::month_day::MonthDay;
use crate::year::Year;
use crate::year_month::YearMonth;

const SUPPORTED: &[DateTimeField] = &[
    DateTimeField::Era,
    DateTimeField::YearOfEra,
    DateTimeField::Year,
    DateTimeField::MonthOfYear,
    DateTimeField::DayOfMonth,
    DateTimeField::DayOfYear,
];

/// A valid ISO calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDate", into = "RawDate")]
pub struct LocalDate {
    year: i32,
    month: u8,
    day: u8,
}

impl LocalDate {
    /// 1970-01-01.
    pub const EPOCH: LocalDate = LocalDate::new_unchecked(1970, 1, 1);

    /// Obtain a date from its year, month and day.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::FieldOutOfRange`] if a field leaves its rule.
    /// - [`CalendarError::InvalidField`] if the day does not exist in the
    ///   month (e.g. 31 April, 29 February 2007).
    pub fn of(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let iso = IsoChronology::INSTANCE;
        iso.year_rule().check_value(i64::from(year))?;
        iso.month_of_year_rule().check_value(i64::from(month))?;
        iso.day_of_month_rule().check_value(i64::from(day))?;
        iso.check_valid_date(year, month, day)?;
        Ok(Self { year, month, day })
    }

    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Wrap a tuple produced by the chronology's own date law.
    pub(crate) const fn from_raw(raw: RawDate) -> Self {
        Self::new_unchecked(raw.year, raw.month, raw.day)
    }

    /// Run `resolver` over a tuple and re-check its answer, since a caller's
    /// [`ResolveDate`] is free to return a tuple that is not a date.
    pub(crate) fn resolve(
        resolver: &dyn ResolveDate,
        year: i32,
        month: u8,
        day: u8,
    ) -> Result<Self, CalendarError> {
        Self::try_from(resolver.resolve_date(year, month, day)?)
    }

    /// The date on one-based day `day_of_year` of `year`.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::FieldOutOfRange`] if the year or day leaves its rule.
    /// - [`CalendarError::InvalidField`] for day 366 of a standard year.
    pub fn of_year_day(year: i32, day_of_year: u16) -> Result<Self, CalendarError> {
        Ok(Self::from_raw(
            IsoChronology::INSTANCE.date_from_day_of_year(year, day_of_year)?,
        ))
    }

    /// The date `epoch_day` days after 1970-01-01.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] if the date falls outside
    /// the supported years.
    pub fn of_epoch_day(epoch_day: i64) -> Result<Self, CalendarError> {
        Ok(Self::from_raw(
            IsoChronology::INSTANCE.date_from_epoch_day(epoch_day)?,
        ))
    }

    /// Build from the date fields of a set of calendricals.
    ///
    /// Accepts a year (or era plus year-of-era) with either month and
    /// day-of-month or day-of-year.
    ///
    /// # Errors
    ///
    /// Fails with `MissingField` or `ConflictingField` rather than defaulting.
    pub fn from_calendricals(calendricals: &[&dyn Calendrical]) -> Result<Self, CalendarError> {
        let map = FieldMap::from_calendricals(calendricals)?;
        Ok(Self::from_raw(map.resolve_date("LocalDate")?))
    }

    // ── Accessors ──

    /// The proleptic year: 0 is 1 BCE, -1 is 2 BCE.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month of year, 1 to 12.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Day of month, 1 to 31.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// The month as an enum.
    pub fn month_of_year(&self) -> MonthOfYear {
        MonthOfYear::from_valid(self.month)
    }

    /// Day of month, 1 to 31.
    pub fn day_of_month(&self) -> u8 {
        self.day
    }

    /// One-based day of year.
    pub fn day_of_year(&self) -> u16 {
        self.month_of_year().first_day_of_year(self.is_leap_year()) + u16::from(self.day) - 1
    }

    /// ISO day of week, Monday first.
    pub fn day_of_week(&self) -> DayOfWeek {
        DayOfWeek::from_epoch_day(self.to_epoch_day())
    }

    /// `BCE` for years up to 0, `CE` after.
    pub fn era(&self) -> Era {
        IsoChronology::INSTANCE.era(self.year)
    }

    /// Year counted within the era, always at least 1.
    pub fn year_of_era(&self) -> i64 {
        IsoChronology::INSTANCE.year_of_era(self.year)
    }

    /// Whether the year is a leap year.
    pub fn is_leap_year(&self) -> bool {
        IsoChronology::INSTANCE.is_leap_year(i64::from(self.year))
    }

    /// Number of days in this date's month.
    pub fn length_of_month(&self) -> u8 {
        self.month_of_year().length(self.is_leap_year())
    }

    /// Number of days in this date's year.
    pub fn length_of_year(&self) -> u16 {
        IsoChronology::INSTANCE.year_length(i64::from(self.year))
    }

    /// Days since 1970-01-01.
    pub fn to_epoch_day(&self) -> i64 {
        IsoChronology::INSTANCE.epoch_day(self.year, self.month, self.day)
    }

    // ── Projections ──

    /// The year on its own.
    pub fn to_year(&self) -> Year {
        Year::from_raw(self.year)
    }

    /// The year and month, dropping the day.
    pub fn year_month(&self) -> YearMonth {
        YearMonth::new_unchecked(self.year, self.month)
    }

    /// The month and day, dropping the year.
    pub fn month_day(&self) -> MonthDay {
        MonthDay::new_unchecked(self.month, self.day)
    }

    fn raw(&self) -> RawDate {
        RawDate::new(self.year, self.month, self.day)
    }

    // ── Field replacement ──

    /// Change the year, clamping 29 February to the 28th in a standard year.
    pub fn with_year(&self, year: i32) -> Result<Self, CalendarError> {
        self.with_year_with(year, &DateResolver::PreviousValid)
    }

    /// Change the year, resolving a missing day with `resolver`.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::FieldOutOfRange`] if `year` leaves the year rule.
    /// - Whatever `resolver` rejects with, such as `InvalidField` from
    ///   [`DateResolver::Strict`].
    /// - [`CalendarError::InvalidField`] if `resolver` answers with a tuple
    ///   that is not a date.
    pub fn with_year_with(&self, year: i32, resolver: &dyn ResolveDate) -> Result<Self, CalendarError> {
        Self::resolve(resolver, year, self.month, self.day)
    }

    /// Change the month, clamping the day to the new month's length.
    pub fn with_month_of_year(&self, month: u8) -> Result<Self, CalendarError> {
        self.with_month_of_year_with(month, &DateResolver::PreviousValid)
    }

    /// Change the month, resolving a missing day with `resolver`.
    ///
    /// # Errors
    ///
    /// As [`LocalDate::with_year_with`], with `month` checked against 1 to 12.
    pub fn with_month_of_year_with(
        &self,
        month: u8,
        resolver: &dyn ResolveDate,
    ) -> Result<Self, CalendarError> {
        Self::resolve(resolver, self.year, month, self.day)
    }

    /// # Errors
    ///
    /// Fails if `day` does not exist in this month; days are never clamped.
    pub fn with_day_of_month(&self, day: u8) -> Result<Self, CalendarError> {
        Self::of(self.year, self.month, day)
    }

    /// Move to one-based `day_of_year` of the same year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidField`] for day 366 of a standard year.
    pub fn with_day_of_year(&self, day_of_year: u16) -> Result<Self, CalendarError> {
        Self::of_year_day(self.year, day_of_year)
    }

    /// The last day of this month.
    pub fn with_last_day_of_month(&self) -> Self {
        Self {
            day: self.length_of_month(),
            ..*self
        }
    }

    /// 31 December of this year.
    pub fn with_last_day_of_year(&self) -> Self {
        Self {
            month: 12,
            day: 31,
            ..*self
        }
    }

    /// The date with weekday `day_of_week` in the same Monday-based week.
    pub fn with_day_of_week(&self, day_of_week: DayOfWeek) -> Result<Self, CalendarError> {
        let delta = i64::from(day_of_week.value()) - i64::from(self.day_of_week().value());
        self.plus_days(delta)
    }

    /// Replace the fields supplied by `calendricals`, keeping the rest.
    ///
    /// A day-of-year replaces month and day together. The result must be a
    /// valid date as given; nothing is clamped.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::UnsupportedField`] if a calendrical supplies a
    ///   field a date does not carry.
    /// - [`CalendarError::ConflictingField`] if the supplied fields disagree.
    /// - [`CalendarError::InvalidField`] if the result is not a real date.
    pub fn with_fields(&self, calendricals: &[&dyn Calendrical]) -> Result<Self, CalendarError> {
        let map = FieldMap::from_calendricals(calendricals)?;
        self.overlay(&map)
    }

    pub(crate) fn overlay(&self, map: &FieldMap) -> Result<Self, CalendarError> {
        let iso = IsoChronology::INSTANCE;
        if let Some((field, _)) = map.iter().find(|(f, _)| !SUPPORTED.contains(f)) {
            return Err(self.unsupported(field));
        }

        let year = if map.contains(DateTimeField::Year)
            || (map.contains(DateTimeField::Era) && map.contains(DateTimeField::YearOfEra))
        {
            map.resolve_year("LocalDate")?
        } else if let Some(year_of_era) = map.get(DateTimeField::YearOfEra) {
            iso.proleptic_year(self.era(), year_of_era)?
        } else if let Some(era) = map.get(DateTimeField::Era) {
            iso.proleptic_year(Era::of(era)?, self.year_of_era())?
        } else {
            self.year
        };

        match map.get(DateTimeField::DayOfYear) {
            Some(day_of_year) => {
                let date = Self::of_year_day(year, iso.day_of_year_rule().check_u16(day_of_year)?)?;
                for (field, derived) in [
                    (DateTimeField::MonthOfYear, i64::from(date.month)),
                    (DateTimeField::DayOfMonth, i64::from(date.day)),
                ] {
                    match map.get(field) {
                        Some(value) if value != derived => {
                            return Err(CalendarError::ConflictingField {
                                field,
                                first: value,
                                second: derived,
                            })
                        }
                        _ => {}
                    }
                }
                Ok(date)
            }
            None => {
                let month = match map.get(DateTimeField::MonthOfYear) {
                    Some(month) => iso.month_of_year_rule().check_u8(month)?,
                    None => self.month,
                };
                let day = match map.get(DateTimeField::DayOfMonth) {
                    Some(day) => iso.day_of_month_rule().check_u8(day)?,
                    None => self.day,
                };
                Self::of(year, month, day)
            }
        }
    }

    // ── Arithmetic ──

    /// Add years, resolving 29 February with `PreviousValid`.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::Overflow`] if the year addition overflows `i64`.
    /// - [`CalendarError::FieldOutOfRange`] if the year leaves its rule.
    pub fn plus_years(&self, years: i64) -> Result<Self, CalendarError> {
        self.plus_years_with(years, &DateResolver::PreviousValid)
    }

    /// Add years, resolving a missing day with `resolver`.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::Overflow`] if the year addition overflows `i64`.
    /// - [`CalendarError::FieldOutOfRange`] if the year leaves its rule.
    /// - Whatever `resolver` rejects with, or `InvalidField` if it answers
    ///   with a tuple that is not a date.
    pub fn plus_years_with(&self, years: i64, resolver: &dyn ResolveDate) -> Result<Self, CalendarError> {
        let year = arith::add_years(self.year, years, "plus_years")?;
        Self::resolve(resolver, year, self.month, self.day)
    }

    /// Add months with floor-division carry, resolving the day with
    /// `PreviousValid`: 2007-03-31 plus one month is 2007-04-30.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::Overflow`] if the month count overflows.
    /// - [`CalendarError::FieldOutOfRange`] if the year leaves its rule.
    pub fn plus_months(&self, months: i64) -> Result<Self, CalendarError> {
        self.plus_months_with(months, &DateResolver::PreviousValid)
    }

    /// Add months, resolving a missing day with `resolver`.
    ///
    /// # Errors
    ///
    /// As [`LocalDate::plus_years_with`].
    pub fn plus_months_with(&self, months: i64, resolver: &dyn ResolveDate) -> Result<Self, CalendarError> {
        let (year, month) = arith::add_months(self.year, self.month, months, "plus_months")?;
        Self::resolve(resolver, year, month, self.day)
    }

    /// Add whole weeks as seven-day steps.
    ///
    /// # Errors
    ///
    /// Fails on overflow or when the result leaves the year rule.
    pub fn plus_weeks(&self, weeks: i64) -> Result<Self, CalendarError> {
        self.plus_days(arith::weeks_to_days(weeks, "plus_weeks")?)
    }

    /// Add days through the epoch day, rolling over months and years.
    ///
    /// # Errors
    ///
    /// Fails on overflow or when the result leaves the year rule.
    pub fn plus_days(&self, days: i64) -> Result<Self, CalendarError> {
        Ok(Self::from_raw(arith::add_days(self.raw(), days, "plus_days")?))
    }

    /// Subtract years with the default resolver.
    ///
    /// # Errors
    ///
    /// As [`LocalDate::plus_years`], plus `Overflow` for `i64::MIN`.
    pub fn minus_years(&self, years: i64) -> Result<Self, CalendarError> {
        self.plus_years(arith::negate(years, "minus_years")?)
    }

    /// Subtract months with the default resolver.
    ///
    /// # Errors
    ///
    /// As [`LocalDate::plus_months`], plus `Overflow` for `i64::MIN`.
    pub fn minus_months(&self, months: i64) -> Result<Self, CalendarError> {
        self.plus_months(arith::negate(months, "minus_months")?)
    }

    /// Subtract whole weeks.
    pub fn minus_weeks(&self, weeks: i64) -> Result<Self, CalendarError> {
        self.plus_weeks(arith::negate(weeks, "minus_weeks")?)
    }

    /// Subtract days.
    pub fn minus_days(&self, days: i64) -> Result<Self, CalendarError> {
        self.plus_days(arith::negate(days, "minus_days")?)
    }

    // ── Composition and comparison ──

    /// Combine with a time of day.
    pub fn at_time(&self, time: LocalTime) -> LocalDateTime {
        LocalDateTime::new(*self, time)
    }

    /// Midnight at the start of this date.
    pub fn at_start_of_day(&self) -> LocalDateTime {
        LocalDateTime::new(*self, LocalTime::MIDNIGHT)
    }

    /// Whether this date is later.
    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    /// Whether this date is earlier.
    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }
}

impl TryFrom<RawDate> for LocalDate {
    type Error = CalendarError;

    fn try_from(raw: RawDate) -> Result<Self, Self::Error> {
        Self::of(raw.year, raw.month, raw.day)
    }
}

impl From<LocalDate> for RawDate {
    fn from(date: LocalDate) -> Self {
        date.raw()
    }
}

impl Calendrical for LocalDate {
    fn type_name(&self) -> &'static str {
        "LocalDate"
    }

    fn supported_fields(&self) -> &'static [DateTimeField] {
        SUPPORTED
    }

    fn get(&self, field: DateTimeField) -> Result<i64, CalendarError> {
        match field {
            DateTimeField::Era => Ok(self.era().value()),
            DateTimeField::YearOfEra => Ok(self.year_of_era()),
            DateTimeField::Year => Ok(i64::from(self.year)),
            DateTimeField::MonthOfYear => Ok(i64::from(self.month)),
            DateTimeField::DayOfMonth => Ok(i64::from(self.day)),
            DateTimeField::DayOfYear => Ok(i64::from(self.day_of_year())),
            _ => Err(self.unsupported(field)),
        }
    }
}

/// ISO-8601 year: four digits, a sign below year 0, `+` beyond 9999.
pub(crate) fn write_year(f: &mut std::fmt::Formatter<'_>, year: i32) -> std::fmt::Result {
    if year > 9999 {
        write!(f, "+{year}")
    } else if year < 0 {
        write!(f, "-{:04}", year.unsigned_abs())
    } else {
        write!(f, "{year:04}")
    }
}

impl std::fmt::Display for LocalDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_year(f, self.year)?;
        write!(f, "-{:02}-{:02}", self.month, self.day)
    }
}
