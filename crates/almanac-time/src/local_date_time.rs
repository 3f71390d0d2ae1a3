//! # Local Date-Time
//!
//! A [`LocalDate`] and a [`LocalTime`] with no offset or zone. This is the
//! local-field half of the offset and zoned types; all their field-based
//! arithmetic happens here before an offset is attached.
//!
//! Time arithmetic carries whole days into the date through the epoch day,
//! so `23:30 + 1h` on 31 December lands on 1 January of the next year.

use serde::{Deserialize, Serialize};

use almanac_core::{Calendrical, CalendarError, DateTimeField, FieldMap, ResolveDate};

use crate::arith::{self, NANOS_PER_HOUR, NANOS_PER_MINUTE, NANOS_PER_SECOND, SECONDS_PER_DAY};
use crate::day_of_week::DayOfWeek;
use crate::instant::Instant;
use crate::local_date::LocalDate;
use crate::local_time::LocalTime;
use crate::month::MonthOfYear;
use crate::offset::ZoneOffset;

const SUPPORTED: &[DateTimeField] = &[
    DateTimeField::Era,
    DateTimeField::YearOfEra,
    DateTimeField::Year,
    DateTimeField::MonthOfYear,
    DateTimeField::DayOfMonth,
    DateTimeField::DayOfYear,
    DateTimeField::HourOfDay,
    DateTimeField::MinuteOfHour,
    DateTimeField::SecondOfMinute,
    DateTimeField::NanoOfSecond,
];

/// A date and time of day without offset or zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LocalDateTime {
    date: LocalDate,
    time: LocalTime,
}

impl LocalDateTime {
    /// Combine a date and a time.
    pub const fn new(date: LocalDate, time: LocalTime) -> Self {
        Self { date, time }
    }

    /// # Errors
    ///
    /// Propagates the validation errors of [`LocalDate::of`] and [`LocalTime::of`].
    pub fn of(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        nano: u32,
    ) -> Result<Self, CalendarError> {
        Ok(Self::new(
            LocalDate::of(year, month, day)?,
            LocalTime::of(hour, minute, second, nano)?,
        ))
    }

    /// The local date-time of `instant` seen at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] if the date leaves the year rule.
    pub fn from_instant(instant: Instant, offset: ZoneOffset) -> Result<Self, CalendarError> {
        let local_second = instant
            .epoch_second()
            .checked_add(i64::from(offset.total_seconds()))
            .ok_or_else(|| CalendarError::overflow("from_instant"))?;
        let epoch_day = local_second.div_euclid(SECONDS_PER_DAY);
        let second_of_day = local_second.rem_euclid(SECONDS_PER_DAY);
        let date = LocalDate::of_epoch_day(epoch_day)?;
        let time = LocalTime::of_nano_of_day(
            second_of_day * NANOS_PER_SECOND + i64::from(instant.nano()),
        )?;
        Ok(Self::new(date, time))
    }

    /// Build from all ten fields of a set of calendricals, or a date plus the
    /// four time fields.
    pub fn from_calendricals(calendricals: &[&dyn Calendrical]) -> Result<Self, CalendarError> {
        let map = FieldMap::from_calendricals(calendricals)?;
        let date = LocalDate::from_raw(map.resolve_date("LocalDateTime")?);
        let time = LocalTime::from_map(&map, "LocalDateTime")?;
        Ok(Self::new(date, time))
    }

    // ── Accessors ──

    /// The date part.
    pub fn date(&self) -> LocalDate {
        self.date
    }

    /// The time part.
    pub fn time(&self) -> LocalTime {
        self.time
    }

    /// The proleptic year.
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// The month as an enum.
    pub fn month_of_year(&self) -> MonthOfYear {
        self.date.month_of_year()
    }

    /// Day of month, 1 to 31.
    pub fn day_of_month(&self) -> u8 {
        self.date.day_of_month()
    }

    /// One-based day of year.
    pub fn day_of_year(&self) -> u16 {
        self.date.day_of_year()
    }

    /// ISO day of week, Monday first.
    pub fn day_of_week(&self) -> DayOfWeek {
        self.date.day_of_week()
    }

    /// Hour of day, 0 to 23.
    pub fn hour(&self) -> u8 {
        self.time.hour()
    }

    /// Minute of hour, 0 to 59.
    pub fn minute(&self) -> u8 {
        self.time.minute()
    }

    /// Second of minute, 0 to 59.
    pub fn second(&self) -> u8 {
        self.time.second()
    }

    /// Nano of second.
    pub fn nano(&self) -> u32 {
        self.time.nano()
    }

    /// The nano-of-second as a fraction of a second.
    pub fn nano_fraction(&self) -> f64 {
        self.time.nano_fraction()
    }

    /// Seconds since 1970-01-01T00:00Z when read at `offset`.
    ///
    /// Cannot overflow: the year rule bounds the epoch day far inside `i64`
    /// seconds.
    pub fn to_epoch_second(&self, offset: ZoneOffset) -> i64 {
        self.date.to_epoch_day() * SECONDS_PER_DAY + self.time.to_second_of_day()
            - i64::from(offset.total_seconds())
    }

    /// The instant this local date-time denotes at `offset`.
    pub fn to_instant(&self, offset: ZoneOffset) -> Instant {
        Instant::new_unchecked(self.to_epoch_second(offset), self.time.nano())
    }

    // ── Field replacement ──

    /// Replace the date, keeping the time.
    pub fn with_date(&self, date: LocalDate) -> Self {
        Self { date, ..*self }
    }

    /// Replace the time, keeping the date.
    pub fn with_time(&self, time: LocalTime) -> Self {
        Self { time, ..*self }
    }

    /// Change the year with the default resolver.
    ///
    /// # Errors
    ///
    /// As [`LocalDate::with_year`].
    pub fn with_year(&self, year: i32) -> Result<Self, CalendarError> {
        Ok(self.with_date(self.date.with_year(year)?))
    }

    /// Change the year, resolving a missing day with `resolver`.
    ///
    /// # Errors
    ///
    /// As [`LocalDate::with_year_with`].
    pub fn with_year_with(&self, year: i32, resolver: &dyn ResolveDate) -> Result<Self, CalendarError> {
        Ok(self.with_date(self.date.with_year_with(year, resolver)?))
    }

    /// Change the month with the default resolver.
    ///
    /// # Errors
    ///
    /// As [`LocalDate::with_month_of_year`].
    pub fn with_month_of_year(&self, month: u8) -> Result<Self, CalendarError> {
        Ok(self.with_date(self.date.with_month_of_year(month)?))
    }

    /// Change the month, resolving a missing day with `resolver`.
    ///
    /// # Errors
    ///
    /// As [`LocalDate::with_month_of_year_with`].
    pub fn with_month_of_year_with(
        &self,
        month: u8,
        resolver: &dyn ResolveDate,
    ) -> Result<Self, CalendarError> {
        Ok(self.with_date(self.date.with_month_of_year_with(month, resolver)?))
    }

    /// Replace the day of month; never clamped.
    ///
    /// # Errors
    ///
    /// As [`LocalDate::with_day_of_month`].
    pub fn with_day_of_month(&self, day: u8) -> Result<Self, CalendarError> {
        Ok(self.with_date(self.date.with_day_of_month(day)?))
    }

    /// Move to one-based `day_of_year` of the same year.
    ///
    /// # Errors
    ///
    /// As [`LocalDate::with_day_of_year`].
    pub fn with_day_of_year(&self, day_of_year: u16) -> Result<Self, CalendarError> {
        Ok(self.with_date(self.date.with_day_of_year(day_of_year)?))
    }

    /// The last day of this month at the same time.
    pub fn with_last_day_of_month(&self) -> Self {
        self.with_date(self.date.with_last_day_of_month())
    }

    /// 31 December of this year at the same time.
    pub fn with_last_day_of_year(&self) -> Self {
        self.with_date(self.date.with_last_day_of_year())
    }

    /// The day with weekday `day_of_week` in the same Monday-based week.
    ///
    /// # Errors
    ///
    /// Fails only if the target day leaves the year rule.
    pub fn with_day_of_week(&self, day_of_week: DayOfWeek) -> Result<Self, CalendarError> {
        Ok(self.with_date(self.date.with_day_of_week(day_of_week)?))
    }

    /// Replace the hour.
    ///
    /// # Errors
    ///
    /// As [`LocalTime::with_hour_of_day`].
    pub fn with_hour_of_day(&self, hour: u8) -> Result<Self, CalendarError> {
        Ok(self.with_time(self.time.with_hour_of_day(hour)?))
    }

    /// Replace the minute.
    pub fn with_minute_of_hour(&self, minute: u8) -> Result<Self, CalendarError> {
        Ok(self.with_time(self.time.with_minute_of_hour(minute)?))
    }

    /// Replace the second.
    pub fn with_second_of_minute(&self, second: u8) -> Result<Self, CalendarError> {
        Ok(self.with_time(self.time.with_second_of_minute(second)?))
    }

    /// Replace the nano-of-second.
    pub fn with_nano_of_second(&self, nano: u32) -> Result<Self, CalendarError> {
        Ok(self.with_time(self.time.with_nano_of_second(nano)?))
    }

    /// Replace the fields supplied by `calendricals`, keeping the rest.
    pub fn with_fields(&self, calendricals: &[&dyn Calendrical]) -> Result<Self, CalendarError> {
        let map = FieldMap::from_calendricals(calendricals)?;
        let date = self.date.overlay(&map.select(DateTimeField::is_date_field))?;
        let time = self.time.overlay(&map.select(DateTimeField::is_time_field))?;
        Ok(Self::new(date, time))
    }

    // ── Arithmetic ──

    /// Add years to the date, keeping the time.
    ///
    /// # Errors
    ///
    /// As [`LocalDate::plus_years`].
    pub fn plus_years(&self, years: i64) -> Result<Self, CalendarError> {
        Ok(self.with_date(self.date.plus_years(years)?))
    }

    /// Add years, resolving a missing day with `resolver`.
    ///
    /// # Errors
    ///
    /// As [`LocalDate::plus_years_with`].
    pub fn plus_years_with(&self, years: i64, resolver: &dyn ResolveDate) -> Result<Self, CalendarError> {
        Ok(self.with_date(self.date.plus_years_with(years, resolver)?))
    }

    /// Add months to the date, keeping the time.
    ///
    /// # Errors
    ///
    /// As [`LocalDate::plus_months`].
    pub fn plus_months(&self, months: i64) -> Result<Self, CalendarError> {
        Ok(self.with_date(self.date.plus_months(months)?))
    }

    /// Add months, resolving a missing day with `resolver`.
    ///
    /// # Errors
    ///
    /// As [`LocalDate::plus_months_with`].
    pub fn plus_months_with(&self, months: i64, resolver: &dyn ResolveDate) -> Result<Self, CalendarError> {
        Ok(self.with_date(self.date.plus_months_with(months, resolver)?))
    }

    /// Add whole weeks.
    pub fn plus_weeks(&self, weeks: i64) -> Result<Self, CalendarError> {
        Ok(self.with_date(self.date.plus_weeks(weeks)?))
    }

    /// Add days, keeping the time.
    pub fn plus_days(&self, days: i64) -> Result<Self, CalendarError> {
        Ok(self.with_date(self.date.plus_days(days)?))
    }

    /// Add hours, carrying whole days into the date.
    pub fn plus_hours(&self, hours: i64) -> Result<Self, CalendarError> {
        self.plus_time(i128::from(hours) * i128::from(NANOS_PER_HOUR), "plus_hours")
    }

    /// Add minutes, carrying whole days into the date.
    pub fn plus_minutes(&self, minutes: i64) -> Result<Self, CalendarError> {
        self.plus_time(i128::from(minutes) * i128::from(NANOS_PER_MINUTE), "plus_minutes")
    }

    /// Add seconds, carrying whole days into the date.
    pub fn plus_seconds(&self, seconds: i64) -> Result<Self, CalendarError> {
        self.plus_time(i128::from(seconds) * i128::from(NANOS_PER_SECOND), "plus_seconds")
    }

    /// Add nanoseconds, carrying whole days into the date.
    ///
    /// # Errors
    ///
    /// Fails with `Overflow` or `FieldOutOfRange` when the carried date leaves
    /// the year rule.
    pub fn plus_nanos(&self, nanos: i64) -> Result<Self, CalendarError> {
        self.plus_time(i128::from(nanos), "plus_nanos")
    }

    fn plus_time(&self, nanos: i128, operation: &'static str) -> Result<Self, CalendarError> {
        let (time, days) = self.time.plus_nanos_carry(nanos);
        let days = i64::try_from(days).map_err(|_| CalendarError::overflow(operation))?;
        let date = LocalDate::from_raw(arith::add_days(self.date.into(), days, operation)?);
        Ok(Self::new(date, time))
    }

    /// Subtract days.
    pub fn minus_days(&self, days: i64) -> Result<Self, CalendarError> {
        self.plus_days(arith::negate(days, "minus_days")?)
    }

    /// Subtract hours, borrowing whole days from the date.
    pub fn minus_hours(&self, hours: i64) -> Result<Self, CalendarError> {
        self.plus_time(-(i128::from(hours) * i128::from(NANOS_PER_HOUR)), "minus_hours")
    }

    /// Whether this date-time is later.
    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    /// Whether this date-time is earlier.
    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }
}

impl Calendrical for LocalDateTime {
    fn type_name(&self) -> &'static str {
        "LocalDateTime"
    }

    fn supported_fields(&self) -> &'static [DateTimeField] {
        SUPPORTED
    }

    fn get(&self, field: DateTimeField) -> Result<i64, CalendarError> {
        if field.is_date_field() {
            self.date.get(field)
        } else {
            self.time.get(field)
        }
    }
}

impl std::fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}
