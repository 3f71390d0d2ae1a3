//! # Offset Date-Time
//!
//! A [`LocalDateTime`] paired with a fixed [`ZoneOffset`]. Every local
//! date-time is valid at every offset, so no gap or overlap handling is
//! needed; field arithmetic runs on the local part and keeps the offset.
//!
//! ## Ordering
//!
//! Values order by instant first, then by local date-time, then by offset.
//! Two values at the same instant but different offsets are therefore
//! ordered and unequal; [`OffsetDateTime::is_same_instant`] compares the
//! time-line position alone.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use almanac_core::{Calendrical, CalendarError, DateTimeField, ResolveDate};

use crate::day_of_week::DayOfWeek;
use crate::instant::Instant;
use crate::local_date::LocalDate;
use crate::local_date_time::LocalDateTime;
use crate::local_time::LocalTime;
use crate::month::MonthOfYear;
use crate::month_day::MonthDay;
use crate::offset::ZoneOffset;
use crate::year::Year;
use crate::year_month::YearMonth;

/// A date and time at a fixed offset from UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OffsetDateTime {
    date_time: LocalDateTime,
    offset: ZoneOffset,
}

impl OffsetDateTime {
    /// Attach `offset` to a local date-time.
    pub const fn new(date_time: LocalDateTime, offset: ZoneOffset) -> Self {
        Self { date_time, offset }
    }

    /// Attach `offset` to a date and a time.
    pub const fn of(date: LocalDate, time: LocalTime, offset: ZoneOffset) -> Self {
        Self::new(LocalDateTime::new(date, time), offset)
    }

    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] if the local date leaves the
    /// year rule.
    pub fn from_instant(instant: Instant, offset: ZoneOffset) -> Result<Self, CalendarError> {
        Ok(Self::new(LocalDateTime::from_instant(instant, offset)?, offset))
    }

    /// Build the local part from `calendricals` and attach `offset`.
    pub fn from_calendricals(
        calendricals: &[&dyn Calendrical],
        offset: ZoneOffset,
    ) -> Result<Self, CalendarError> {
        Ok(Self::new(LocalDateTime::from_calendricals(calendricals)?, offset))
    }

    fn map_local(
        &self,
        f: impl FnOnce(&LocalDateTime) -> Result<LocalDateTime, CalendarError>,
    ) -> Result<Self, CalendarError> {
        Ok(Self::new(f(&self.date_time)?, self.offset))
    }

    // ── Accessors ──

    /// The local date-time.
    pub fn date_time(&self) -> LocalDateTime {
        self.date_time
    }

    /// The local date.
    pub fn date(&self) -> LocalDate {
        self.date_time.date()
    }

    /// The local time.
    pub fn time(&self) -> LocalTime {
        self.date_time.time()
    }

    /// The offset from UTC.
    pub fn offset(&self) -> ZoneOffset {
        self.offset
    }

    /// The proleptic year.
    pub fn year(&self) -> i32 {
        self.date_time.year()
    }

    /// The year on its own.
    pub fn to_year(&self) -> Year {
        self.date().to_year()
    }

    /// The month as an enum.
    pub fn month_of_year(&self) -> MonthOfYear {
        self.date_time.month_of_year()
    }

    /// The year and month.
    pub fn year_month(&self) -> YearMonth {
        self.date().year_month()
    }

    /// The month and day.
    pub fn month_day(&self) -> MonthDay {
        self.date().month_day()
    }

    /// Day of month, 1 to 31.
    pub fn day_of_month(&self) -> u8 {
        self.date_time.day_of_month()
    }

    /// One-based day of year.
    pub fn day_of_year(&self) -> u16 {
        self.date_time.day_of_year()
    }

    /// ISO day of week, Monday first.
    pub fn day_of_week(&self) -> DayOfWeek {
        self.date_time.day_of_week()
    }

    /// Hour of day, 0 to 23.
    pub fn hour(&self) -> u8 {
        self.date_time.hour()
    }

    /// Minute of hour, 0 to 59.
    pub fn minute(&self) -> u8 {
        self.date_time.minute()
    }

    /// Second of minute, 0 to 59.
    pub fn second(&self) -> u8 {
        self.date_time.second()
    }

    /// Nano of second.
    pub fn nano(&self) -> u32 {
        self.date_time.nano()
    }

    /// The nano-of-second as a fraction of a second.
    pub fn nano_fraction(&self) -> f64 {
        self.date_time.nano_fraction()
    }

    /// Seconds since 1970-01-01T00:00Z.
    pub fn to_epoch_second(&self) -> i64 {
        self.date_time.to_epoch_second(self.offset)
    }

    /// The point on the time-line.
    pub fn to_instant(&self) -> Instant {
        self.date_time.to_instant(self.offset)
    }

    // ── Offset changes ──

    /// Keep the local fields and attach `offset`; the instant moves.
    pub fn with_offset_same_local(&self, offset: ZoneOffset) -> Self {
        Self::new(self.date_time, offset)
    }

    /// Keep the instant and re-read the local fields at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] if the local date leaves the
    /// year rule.
    pub fn with_offset_same_instant(&self, offset: ZoneOffset) -> Result<Self, CalendarError> {
        Self::from_instant(self.to_instant(), offset)
    }

    // ── Field replacement ──

    /// Replace the local date, keeping time and offset.
    pub fn with_date(&self, date: LocalDate) -> Self {
        Self::new(self.date_time.with_date(date), self.offset)
    }

    /// Replace the local time, keeping date and offset.
    pub fn with_time(&self, time: LocalTime) -> Self {
        Self::new(self.date_time.with_time(time), self.offset)
    }

    /// Change the year with the default resolver.
    ///
    /// # Errors
    ///
    /// As [`LocalDate::with_year`].
    pub fn with_year(&self, year: i32) -> Result<Self, CalendarError> {
        self.map_local(|dt| dt.with_year(year))
    }

    /// Change the year, resolving a missing day with `resolver`.
    ///
    /// # Errors
    ///
    /// As [`LocalDate::with_year_with`].
    pub fn with_year_with(&self, year: i32, resolver: &dyn ResolveDate) -> Result<Self, CalendarError> {
        self.map_local(|dt| dt.with_year_with(year, resolver))
    }

    /// Change the month with the default resolver.
    ///
    /// # Errors
    ///
    /// As [`LocalDate::with_month_of_year`].
    pub fn with_month_of_year(&self, month: u8) -> Result<Self, CalendarError> {
        self.map_local(|dt| dt.with_month_of_year(month))
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
        self.map_local(|dt| dt.with_month_of_year_with(month, resolver))
    }

    /// Replace the day of month; never clamped.
    ///
    /// # Errors
    ///
    /// As [`LocalDate::with_day_of_month`].
    pub fn with_day_of_month(&self, day: u8) -> Result<Self, CalendarError> {
        self.map_local(|dt| dt.with_day_of_month(day))
    }

    /// Move to one-based `day_of_year` of the same year.
    pub fn with_day_of_year(&self, day_of_year: u16) -> Result<Self, CalendarError> {
        self.map_local(|dt| dt.with_day_of_year(day_of_year))
    }

    /// The last day of this month, same time and offset.
    pub fn with_last_day_of_month(&self) -> Self {
        Self::new(self.date_time.with_last_day_of_month(), self.offset)
    }

    /// Replace the hour.
    ///
    /// # Errors
    ///
    /// As [`LocalTime::with_hour_of_day`].
    pub fn with_hour_of_day(&self, hour: u8) -> Result<Self, CalendarError> {
        self.map_local(|dt| dt.with_hour_of_day(hour))
    }

    /// Replace the minute.
    pub fn with_minute_of_hour(&self, minute: u8) -> Result<Self, CalendarError> {
        self.map_local(|dt| dt.with_minute_of_hour(minute))
    }

    /// Replace the second.
    pub fn with_second_of_minute(&self, second: u8) -> Result<Self, CalendarError> {
        self.map_local(|dt| dt.with_second_of_minute(second))
    }

    /// Replace the nano-of-second.
    pub fn with_nano_of_second(&self, nano: u32) -> Result<Self, CalendarError> {
        self.map_local(|dt| dt.with_nano_of_second(nano))
    }

    /// Replace the local fields supplied by `calendricals`; the offset is kept.
    ///
    /// # Errors
    ///
    /// As [`LocalDateTime::with_fields`].
    pub fn with_fields(&self, calendricals: &[&dyn Calendrical]) -> Result<Self, CalendarError> {
        self.map_local(|dt| dt.with_fields(calendricals))
    }

    // ── Arithmetic ──

    /// Add years to the local date; the offset is kept.
    ///
    /// # Errors
    ///
    /// As [`LocalDate::plus_years`].
    pub fn plus_years(&self, years: i64) -> Result<Self, CalendarError> {
        self.map_local(|dt| dt.plus_years(years))
    }

    /// Add years, resolving a missing day with `resolver`.
    ///
    /// # Errors
    ///
    /// As [`LocalDate::plus_years_with`].
    pub fn plus_years_with(&self, years: i64, resolver: &dyn ResolveDate) -> Result<Self, CalendarError> {
        self.map_local(|dt| dt.plus_years_with(years, resolver))
    }

    /// Add months to the local date; the offset is kept.
    ///
    /// # Errors
    ///
    /// As [`LocalDate::plus_months`].
    pub fn plus_months(&self, months: i64) -> Result<Self, CalendarError> {
        self.map_local(|dt| dt.plus_months(months))
    }

    /// Add months, resolving a missing day with `resolver`.
    ///
    /// # Errors
    ///
    /// As [`LocalDate::plus_months_with`].
    pub fn plus_months_with(&self, months: i64, resolver: &dyn ResolveDate) -> Result<Self, CalendarError> {
        self.map_local(|dt| dt.plus_months_with(months, resolver))
    }

    /// Add whole weeks.
    pub fn plus_weeks(&self, weeks: i64) -> Result<Self, CalendarError> {
        self.map_local(|dt| dt.plus_weeks(weeks))
    }

    /// Add days.
    pub fn plus_days(&self, days: i64) -> Result<Self, CalendarError> {
        self.map_local(|dt| dt.plus_days(days))
    }

    /// Add hours to the local time. At a fixed offset this equals moving
    /// the instant by the same amount.
    ///
    /// # Errors
    ///
    /// Fails when the carried date leaves the year rule.
    pub fn plus_hours(&self, hours: i64) -> Result<Self, CalendarError> {
        self.map_local(|dt| dt.plus_hours(hours))
    }

    /// Add minutes.
    pub fn plus_minutes(&self, minutes: i64) -> Result<Self, CalendarError> {
        self.map_local(|dt| dt.plus_minutes(minutes))
    }

    /// Add seconds.
    pub fn plus_seconds(&self, seconds: i64) -> Result<Self, CalendarError> {
        self.map_local(|dt| dt.plus_seconds(seconds))
    }

    /// Add nanoseconds.
    pub fn plus_nanos(&self, nanos: i64) -> Result<Self, CalendarError> {
        self.map_local(|dt| dt.plus_nanos(nanos))
    }

    /// Subtract days.
    pub fn minus_days(&self, days: i64) -> Result<Self, CalendarError> {
        self.map_local(|dt| dt.minus_days(days))
    }

    /// Subtract hours.
    pub fn minus_hours(&self, hours: i64) -> Result<Self, CalendarError> {
        self.map_local(|dt| dt.minus_hours(hours))
    }

    // ── Comparison ──

    /// Whether this value orders after `other`: by instant first.
    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    /// Whether this value orders before `other`: by instant first.
    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    /// Whether both denote the same point on the time-line.
    pub fn is_same_instant(&self, other: &Self) -> bool {
        self.to_instant() == other.to_instant()
    }
}

impl Ord for OffsetDateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_instant()
            .cmp(&other.to_instant())
            .then_with(|| self.date_time.cmp(&other.date_time))
            .then_with(|| self.offset.cmp(&other.offset))
    }
}

impl PartialOrd for OffsetDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Calendrical for OffsetDateTime {
    fn type_name(&self) -> &'static str {
        "OffsetDateTime"
    }

    fn supported_fields(&self) -> &'static [DateTimeField] {
        DateTimeField::all()
    }

    fn get(&self, field: DateTimeField) -> Result<i64, CalendarError> {
        self.date_time.get(field)
    }
}

impl std::fmt::Display for OffsetDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.date_time, self.offset)
    }
}
