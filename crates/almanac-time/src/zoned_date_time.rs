//! # Zoned Date-Time
//!
//! A local date-time, the offset it currently resolves to, and the [`Zone`]
//! that produced that offset. The offset is always one the zone accepts for
//! the local date-time.
//!
//! ## Field-Based vs. Duration-Based Arithmetic
//!
//! Two kinds of addition are offered and they differ at transitions:
//!
//! - `plus_hours`, `plus_days` and the other field-based operations change the
//!   local fields by exactly the amount, then resolve the result in the zone
//!   through the [`ResolutionPolicy`](crate::ResolutionPolicy) of a
//!   [`CalendarPolicy`]. The elapsed time may differ from the amount.
//! - `plus_hours_duration`, `plus_minutes_duration` and
//!   `plus_seconds_duration` move the instant by exactly the amount and
//!   re-read the local fields. The hour field may change by more or less.
//!
//! In a zone that springs forward from 01:00 to 02:00, `00:30 + 2h` is
//! `02:30` by field and `03:30` by duration.
//!
//! ## Ordering
//!
//! Values order by instant, then local date-time, then zone identifier, so
//! values in different zones compare by their position on the time-line.
//!
//! Not serializable: the zone is an opaque collaborator.

use std::cmp::Ordering;

use almanac_core::{Calendrical, CalendarError, DateTimeField};

use crate::arith::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::day_of_week::DayOfWeek;
use crate::instant::Instant;
use crate::local_date::LocalDate;
use crate::local_date_time::LocalDateTime;
use crate::local_time::LocalTime;
use crate::month::MonthOfYear;
use crate::offset::ZoneOffset;
use crate::offset_date_time::OffsetDateTime;
use crate::policy::CalendarPolicy;
use crate::year::Year;
use crate::year_month::YearMonth;
use crate::zone::{LocalOffsets, Zone};

/// A date and time in a zone, with its resolved offset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZonedDateTime {
    date_time: LocalDateTime,
    offset: ZoneOffset,
    zone: Zone,
}

impl ZonedDateTime {
    /// Resolve `local` in `zone` with the default policy.
    ///
    /// # Errors
    ///
    /// See [`ZonedDateTime::of_with`].
    pub fn of(local: LocalDateTime, zone: Zone) -> Result<Self, CalendarError> {
        Self::of_with(local, zone, &CalendarPolicy::default())
    }

    /// Resolve `local` in `zone` with `policy`.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::NonExistentLocalTime`] / [`CalendarError::AmbiguousLocalTime`]
    ///   when the policy rejects gaps and overlaps.
    /// - [`CalendarError::FieldOutOfRange`] if a gap shift leaves the year rule.
    pub fn of_with(
        local: LocalDateTime,
        zone: Zone,
        policy: &CalendarPolicy,
    ) -> Result<Self, CalendarError> {
        let (date_time, offset) = policy.local_resolution.resolve(&zone, local, None)?;
        Ok(Self {
            date_time,
            offset,
            zone,
        })
    }

    /// The local date-time of `instant` in `zone`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] if the local date leaves the
    /// year rule.
    pub fn of_instant(instant: Instant, zone: Zone) -> Result<Self, CalendarError> {
        let offset = zone.offset_at(instant);
        let date_time = LocalDateTime::from_instant(instant, offset)?;
        Ok(Self {
            date_time,
            offset,
            zone,
        })
    }

    /// Build the local part from `calendricals` and resolve it in `zone` with
    /// the default policy.
    ///
    /// # Errors
    ///
    /// - Any [`LocalDateTime::from_calendricals`] failure, such as
    ///   `MissingField` or `ConflictingField`.
    /// - As [`ZonedDateTime::of`] for the resolution step.
    pub fn from_calendricals(
        calendricals: &[&dyn Calendrical],
        zone: Zone,
    ) -> Result<Self, CalendarError> {
        Self::of(LocalDateTime::from_calendricals(calendricals)?, zone)
    }

    /// Apply `f` to the local part and resolve the result, preferring the
    /// current offset in an overlap.
    fn shift_local(
        &self,
        policy: &CalendarPolicy,
        f: impl FnOnce(&LocalDateTime) -> Result<LocalDateTime, CalendarError>,
    ) -> Result<Self, CalendarError> {
        let local = f(&self.date_time)?;
        let (date_time, offset) = policy
            .local_resolution
            .resolve(&self.zone, local, Some(self.offset))?;
        Ok(Self {
            date_time,
            offset,
            zone: self.zone.clone(),
        })
    }

    fn shift_instant(&self, seconds: Option<i64>, operation: &'static str) -> Result<Self, CalendarError> {
        let seconds = seconds.ok_or_else(|| CalendarError::overflow(operation))?;
        Self::of_instant(self.to_instant().plus_seconds(seconds)?, self.zone.clone())
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

    /// The offset currently in force.
    pub fn offset(&self) -> ZoneOffset {
        self.offset
    }

    /// The zone.
    pub fn zone(&self) -> &Zone {
        &self.zone
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

    /// Drop the zone, keeping the resolved offset.
    pub fn to_offset_date_time(&self) -> OffsetDateTime {
        OffsetDateTime::new(self.date_time, self.offset)
    }

    // ── Zone changes ──

    /// Keep the instant and re-read the local fields in `zone`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] if the local date leaves the
    /// year rule.
    pub fn with_zone_same_instant(&self, zone: Zone) -> Result<Self, CalendarError> {
        Self::of_instant(self.to_instant(), zone)
    }

    /// Keep the local fields and resolve them in `zone` with the default
    /// policy. The current offset is kept if `zone` accepts it.
    ///
    /// # Errors
    ///
    /// As [`ZonedDateTime::with_zone_same_fields_with`].
    pub fn with_zone_same_fields(&self, zone: Zone) -> Result<Self, CalendarError> {
        self.with_zone_same_fields_with(zone, &CalendarPolicy::default())
    }

    /// Keep the local fields and resolve them in `zone` with `policy`.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::NonExistentLocalTime`] / [`CalendarError::AmbiguousLocalTime`]
    ///   when `policy` rejects gaps and overlaps.
    /// - [`CalendarError::FieldOutOfRange`] if a gap shift leaves the year rule.
    pub fn with_zone_same_fields_with(
        &self,
        zone: Zone,
        policy: &CalendarPolicy,
    ) -> Result<Self, CalendarError> {
        let (date_time, offset) = policy
            .local_resolution
            .resolve(&zone, self.date_time, Some(self.offset))?;
        Ok(Self {
            date_time,
            offset,
            zone,
        })
    }

    /// In an overlap, switch to the pre-transition offset; otherwise unchanged.
    pub fn with_earlier_offset_at_overlap(&self) -> Self {
        match self.zone.local_offsets(&self.date_time) {
            LocalOffsets::Overlap { earlier, .. } => Self {
                offset: earlier,
                ..self.clone()
            },
            _ => self.clone(),
        }
    }

    /// In an overlap, switch to the post-transition offset; otherwise unchanged.
    pub fn with_later_offset_at_overlap(&self) -> Self {
        match self.zone.local_offsets(&self.date_time) {
            LocalOffsets::Overlap { later, .. } => Self {
                offset: later,
                ..self.clone()
            },
            _ => self.clone(),
        }
    }

    // ── Field replacement ──

    /// Replace the local date and resolve in the zone.
    ///
    /// # Errors
    ///
    /// As [`ZonedDateTime::of`].
    pub fn with_date(&self, date: LocalDate) -> Result<Self, CalendarError> {
        self.shift_local(&CalendarPolicy::default(), |dt| Ok(dt.with_date(date)))
    }

    /// Replace the local time and resolve in the zone.
    ///
    /// # Errors
    ///
    /// As [`ZonedDateTime::of`].
    pub fn with_time(&self, time: LocalTime) -> Result<Self, CalendarError> {
        self.shift_local(&CalendarPolicy::default(), |dt| Ok(dt.with_time(time)))
    }

    /// Change the year with the default policy.
    pub fn with_year(&self, year: i32) -> Result<Self, CalendarError> {
        self.with_year_with(year, &CalendarPolicy::default())
    }

    /// Change the year, resolving the day with `policy.date_resolver` and
    /// the local time with `policy.local_resolution`.
    ///
    /// # Errors
    ///
    /// - As [`LocalDate::with_year_with`] for the date step.
    /// - As [`ZonedDateTime::of_with`] for the zone step.
    pub fn with_year_with(&self, year: i32, policy: &CalendarPolicy) -> Result<Self, CalendarError> {
        self.shift_local(policy, |dt| dt.with_year_with(year, &policy.date_resolver))
    }

    /// Change the month with the default policy.
    pub fn with_month_of_year(&self, month: u8) -> Result<Self, CalendarError> {
        self.with_month_of_year_with(month, &CalendarPolicy::default())
    }

    /// Change the month under `policy`.
    ///
    /// # Errors
    ///
    /// As [`ZonedDateTime::with_year_with`].
    pub fn with_month_of_year_with(
        &self,
        month: u8,
        policy: &CalendarPolicy,
    ) -> Result<Self, CalendarError> {
        self.shift_local(policy, |dt| {
            dt.with_month_of_year_with(month, &policy.date_resolver)
        })
    }

    /// Replace the day of month; never clamped.
    ///
    /// # Errors
    ///
    /// As [`LocalDate::with_day_of_month`], then as [`ZonedDateTime::of`].
    pub fn with_day_of_month(&self, day: u8) -> Result<Self, CalendarError> {
        self.shift_local(&CalendarPolicy::default(), |dt| dt.with_day_of_month(day))
    }

    /// Move to one-based `day_of_year` of the same year.
    pub fn with_day_of_year(&self, day_of_year: u16) -> Result<Self, CalendarError> {
        self.shift_local(&CalendarPolicy::default(), |dt| dt.with_day_of_year(day_of_year))
    }

    /// Replace the hour and resolve in the zone; the hour of a gap shifts.
    pub fn with_hour_of_day(&self, hour: u8) -> Result<Self, CalendarError> {
        self.shift_local(&CalendarPolicy::default(), |dt| dt.with_hour_of_day(hour))
    }

    /// Replace the minute and resolve in the zone.
    pub fn with_minute_of_hour(&self, minute: u8) -> Result<Self, CalendarError> {
        self.shift_local(&CalendarPolicy::default(), |dt| dt.with_minute_of_hour(minute))
    }

    /// Replace the second and resolve in the zone.
    pub fn with_second_of_minute(&self, second: u8) -> Result<Self, CalendarError> {
        self.shift_local(&CalendarPolicy::default(), |dt| dt.with_second_of_minute(second))
    }

    /// Replace the nano-of-second and resolve in the zone.
    pub fn with_nano_of_second(&self, nano: u32) -> Result<Self, CalendarError> {
        self.shift_local(&CalendarPolicy::default(), |dt| dt.with_nano_of_second(nano))
    }

    /// Replace the local fields supplied by `calendricals` and resolve.
    ///
    /// # Errors
    ///
    /// As [`LocalDateTime::with_fields`], then as [`ZonedDateTime::of`].
    pub fn with_fields(&self, calendricals: &[&dyn Calendrical]) -> Result<Self, CalendarError> {
        self.shift_local(&CalendarPolicy::default(), |dt| dt.with_fields(calendricals))
    }

    // ── Field-based arithmetic ──

    /// Add years to the local date with the default policy.
    pub fn plus_years(&self, years: i64) -> Result<Self, CalendarError> {
        self.plus_years_with(years, &CalendarPolicy::default())
    }

    /// Add years under `policy`.
    ///
    /// # Errors
    ///
    /// - As [`LocalDate::plus_years_with`] for the date step.
    /// - As [`ZonedDateTime::of_with`] for the zone step.
    pub fn plus_years_with(&self, years: i64, policy: &CalendarPolicy) -> Result<Self, CalendarError> {
        self.shift_local(policy, |dt| dt.plus_years_with(years, &policy.date_resolver))
    }

    /// Add months to the local date with the default policy.
    pub fn plus_months(&self, months: i64) -> Result<Self, CalendarError> {
        self.plus_months_with(months, &CalendarPolicy::default())
    }

    /// Add months under `policy`.
    ///
    /// # Errors
    ///
    /// As [`ZonedDateTime::plus_years_with`].
    pub fn plus_months_with(&self, months: i64, policy: &CalendarPolicy) -> Result<Self, CalendarError> {
        self.shift_local(policy, |dt| dt.plus_months_with(months, &policy.date_resolver))
    }

    /// Add weeks to the local date with the default policy.
    pub fn plus_weeks(&self, weeks: i64) -> Result<Self, CalendarError> {
        self.plus_weeks_with(weeks, &CalendarPolicy::default())
    }

    /// Add weeks, resolving the local result with `policy`.
    pub fn plus_weeks_with(&self, weeks: i64, policy: &CalendarPolicy) -> Result<Self, CalendarError> {
        self.shift_local(policy, |dt| dt.plus_weeks(weeks))
    }

    /// Add days to the local date, keeping the wall-clock time unless the
    /// result lands in a gap.
    pub fn plus_days(&self, days: i64) -> Result<Self, CalendarError> {
        self.plus_days_with(days, &CalendarPolicy::default())
    }

    /// Add days, resolving the local result with `policy`.
    ///
    /// # Errors
    ///
    /// Fails when the date leaves the year rule or `policy` rejects the
    /// resulting local time.
    pub fn plus_days_with(&self, days: i64, policy: &CalendarPolicy) -> Result<Self, CalendarError> {
        self.shift_local(policy, |dt| dt.plus_days(days))
    }

    /// Change the local hour by `hours`, then resolve in the zone with the
    /// default policy. Across a gap the elapsed time is shorter than `hours`.
    ///
    /// # Errors
    ///
    /// As [`ZonedDateTime::plus_hours_with`].
    pub fn plus_hours(&self, hours: i64) -> Result<Self, CalendarError> {
        self.plus_hours_with(hours, &CalendarPolicy::default())
    }

    /// Change the local hour under `policy`.
    ///
    /// # Errors
    ///
    /// As [`ZonedDateTime::plus_days_with`].
    pub fn plus_hours_with(&self, hours: i64, policy: &CalendarPolicy) -> Result<Self, CalendarError> {
        self.shift_local(policy, |dt| dt.plus_hours(hours))
    }

    /// Change the local minutes with the default policy.
    pub fn plus_minutes(&self, minutes: i64) -> Result<Self, CalendarError> {
        self.plus_minutes_with(minutes, &CalendarPolicy::default())
    }

    /// Change the local minutes under `policy`.
    pub fn plus_minutes_with(&self, minutes: i64, policy: &CalendarPolicy) -> Result<Self, CalendarError> {
        self.shift_local(policy, |dt| dt.plus_minutes(minutes))
    }

    /// Change the local seconds with the default policy.
    pub fn plus_seconds(&self, seconds: i64) -> Result<Self, CalendarError> {
        self.plus_seconds_with(seconds, &CalendarPolicy::default())
    }

    /// Change the local seconds under `policy`.
    pub fn plus_seconds_with(&self, seconds: i64, policy: &CalendarPolicy) -> Result<Self, CalendarError> {
        self.shift_local(policy, |dt| dt.plus_seconds(seconds))
    }

    /// Change the local nanoseconds with the default policy.
    pub fn plus_nanos(&self, nanos: i64) -> Result<Self, CalendarError> {
        self.plus_nanos_with(nanos, &CalendarPolicy::default())
    }

    /// Change the local nanoseconds under `policy`.
    pub fn plus_nanos_with(&self, nanos: i64, policy: &CalendarPolicy) -> Result<Self, CalendarError> {
        self.shift_local(policy, |dt| dt.plus_nanos(nanos))
    }

    /// Subtract days from the local date.
    pub fn minus_days(&self, days: i64) -> Result<Self, CalendarError> {
        self.shift_local(&CalendarPolicy::default(), |dt| dt.minus_days(days))
    }

    /// Subtract hours from the local time.
    pub fn minus_hours(&self, hours: i64) -> Result<Self, CalendarError> {
        self.shift_local(&CalendarPolicy::default(), |dt| dt.minus_hours(hours))
    }

    // ── Duration-based arithmetic ──

    /// Move the instant by exactly `hours` elapsed hours.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::Overflow`] if the seconds overflow `i64`.
    /// - [`CalendarError::FieldOutOfRange`] if the new local date leaves the
    ///   year rule.
    pub fn plus_hours_duration(&self, hours: i64) -> Result<Self, CalendarError> {
        self.shift_instant(hours.checked_mul(SECONDS_PER_HOUR), "plus_hours_duration")
    }

    /// Move the instant by exactly `minutes` elapsed minutes.
    ///
    /// # Errors
    ///
    /// As [`ZonedDateTime::plus_hours_duration`].
    pub fn plus_minutes_duration(&self, minutes: i64) -> Result<Self, CalendarError> {
        self.shift_instant(minutes.checked_mul(SECONDS_PER_MINUTE), "plus_minutes_duration")
    }

    /// Move the instant by exactly `seconds` elapsed seconds.
    ///
    /// # Errors
    ///
    /// As [`ZonedDateTime::plus_hours_duration`].
    pub fn plus_seconds_duration(&self, seconds: i64) -> Result<Self, CalendarError> {
        self.shift_instant(Some(seconds), "plus_seconds_duration")
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

    /// Whether both denote the same point on the time-line, whatever the zone.
    pub fn is_same_instant(&self, other: &Self) -> bool {
        self.to_instant() == other.to_instant()
    }
}

impl Ord for ZonedDateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_instant()
            .cmp(&other.to_instant())
            .then_with(|| self.date_time.cmp(&other.date_time))
            .then_with(|| self.zone.id().cmp(other.zone.id()))
    }
}

impl PartialOrd for ZonedDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Calendrical for ZonedDateTime {
    fn type_name(&self) -> &'static str {
        "ZonedDateTime"
    }

    fn supported_fields(&self) -> &'static [DateTimeField] {
        DateTimeField::all()
    }

    fn get(&self, field: DateTimeField) -> Result<i64, CalendarError> {
        self.date_time.get(field)
    }
}

impl std::fmt::Display for ZonedDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}[{}]", self.date_time, self.offset, self.zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::{ResolutionPolicy, Transition, TransitionZone};
    use almanac_core::DateResolver;

    fn offset(hours: i8) -> ZoneOffset {
        ZoneOffset::of_hours(hours).unwrap()
    }

    fn ldt(mo: u8, d: u8, h: u8, mi: u8) -> LocalDateTime {
        LocalDateTime::of(2008, mo, d, h, mi, 0, 0).unwrap()
    }

    /// Springs forward at local 01:00 on 30 March, falls back at local 02:00
    /// on 26 October.
    fn dst_zone() -> Zone {
        let at = |mo, d| ldt(mo, d, 0, 0).to_epoch_second(ZoneOffset::UTC);
        Zone::new(
            TransitionZone::new(
                "Test/Dst",
                offset(1),
                vec![
                    Transition { epoch_second: at(3, 30), offset: offset(2) },
                    Transition { epoch_second: at(10, 26), offset: offset(1) },
                ],
            )
            .unwrap(),
        )
    }

    fn zdt(mo: u8, d: u8, h: u8, mi: u8) -> ZonedDateTime {
        ZonedDateTime::of(ldt(mo, d, h, mi), dst_zone()).unwrap()
    }

    #[test]
    fn test_field_and_duration_addition_diverge_across_gap() {
        let start = zdt(3, 30, 0, 30);
        assert_eq!(start.offset(), offset(1));

        let by_field = start.plus_hours(2).unwrap();
        assert_eq!(by_field.date_time(), ldt(3, 30, 2, 30));
        assert_eq!(by_field.offset(), offset(2));
        assert_eq!(by_field.to_epoch_second() - start.to_epoch_second(), 3_600);

        let by_duration = start.plus_hours_duration(2).unwrap();
        assert_eq!(by_duration.date_time(), ldt(3, 30, 3, 30));
        assert_eq!(by_duration.to_epoch_second() - start.to_epoch_second(), 7_200);
    }

    #[test]
    fn test_field_addition_into_gap_uses_policy() {
        let start = zdt(3, 30, 0, 30);
        assert_eq!(start.plus_hours(1).unwrap().date_time(), ldt(3, 30, 2, 30));
        let err = start
            .plus_hours_with(1, &CalendarPolicy::strict())
            .unwrap_err();
        assert!(matches!(err, CalendarError::NonExistentLocalTime { .. }));
        let later = CalendarPolicy::new(DateResolver::PreviousValid, ResolutionPolicy::Later);
        assert_eq!(
            start.plus_hours_with(1, &later).unwrap().date_time(),
            ldt(3, 30, 0, 30)
        );
    }

    #[test]
    fn test_overlap_offsets() {
        let v = zdt(10, 26, 1, 30);
        assert_eq!(v.offset(), offset(2));
        let later = v.with_later_offset_at_overlap();
        assert_eq!(later.offset(), offset(1));
        assert_eq!(later.date_time(), v.date_time());
        assert!(later.is_after(&v));
        assert_eq!(later.with_earlier_offset_at_overlap(), v);

        // outside an overlap both are no-ops
        let plain = zdt(6, 1, 12, 0);
        assert_eq!(plain.with_later_offset_at_overlap(), plain);
    }

    #[test]
    fn test_field_arithmetic_keeps_offset_in_overlap() {
        let later = zdt(10, 26, 1, 0).with_later_offset_at_overlap();
        let moved = later.plus_minutes(30).unwrap();
        assert_eq!(moved.date_time(), ldt(10, 26, 1, 30));
        assert_eq!(moved.offset(), offset(1));
    }

    #[test]
    fn test_duration_addition_through_overlap() {
        let v = zdt(10, 26, 1, 30);
        let w = v.plus_minutes_duration(60).unwrap();
        assert_eq!(w.date_time(), v.date_time());
        assert_eq!(w.offset(), offset(1));
        assert_eq!(v.plus_seconds_duration(7_200).unwrap().date_time(), ldt(10, 26, 2, 30));
    }

    #[test]
    fn test_with_zone_same_instant() {
        let v = zdt(6, 1, 12, 0);
        let utc = v.with_zone_same_instant(Zone::utc()).unwrap();
        assert!(utc.is_same_instant(&v));
        assert_eq!(utc.date_time(), ldt(6, 1, 10, 0));
        assert_eq!(utc.zone(), &Zone::utc());
    }

    #[test]
    fn test_with_zone_same_fields() {
        let v = ZonedDateTime::of(ldt(3, 30, 1, 30), Zone::utc()).unwrap();
        let moved = v.with_zone_same_fields(dst_zone()).unwrap();
        assert_eq!(moved.date_time(), ldt(3, 30, 2, 30));

        let err = v
            .with_zone_same_fields_with(dst_zone(), &CalendarPolicy::strict())
            .unwrap_err();
        assert!(matches!(err, CalendarError::NonExistentLocalTime { .. }));

        let plain = ZonedDateTime::of(ldt(6, 1, 12, 0), Zone::utc()).unwrap();
        let moved = plain.with_zone_same_fields(dst_zone()).unwrap();
        assert_eq!(moved.date_time(), plain.date_time());
        assert_eq!(moved.offset(), offset(2));
        assert!(!moved.is_same_instant(&plain));
    }

    #[test]
    fn test_same_fields_keeps_valid_current_offset() {
        let at_plus_one = ZonedDateTime::of(ldt(10, 26, 1, 30), Zone::fixed(offset(1))).unwrap();
        let moved = at_plus_one.with_zone_same_fields(dst_zone()).unwrap();
        assert_eq!(moved.offset(), offset(1));
        assert!(moved.is_same_instant(&at_plus_one));
    }

    #[test]
    fn test_cross_zone_ordering_by_instant() {
        let berlin_noon = zdt(6, 1, 12, 0);
        let utc_eleven = ZonedDateTime::of(ldt(6, 1, 11, 0), Zone::utc()).unwrap();
        assert!(berlin_noon < utc_eleven);
        assert!(utc_eleven.is_after(&berlin_noon));

        let utc_ten = ZonedDateTime::of(ldt(6, 1, 10, 0), Zone::utc()).unwrap();
        assert!(utc_ten.is_same_instant(&berlin_noon));
        assert_ne!(utc_ten, berlin_noon);
        assert_eq!(utc_ten.cmp(&berlin_noon), Ordering::Less);
    }

    #[test]
    fn test_date_arithmetic_resolves_date_then_zone() {
        let v = ZonedDateTime::of(LocalDateTime::of(2008, 2, 29, 1, 30, 0, 0).unwrap(), dst_zone())
            .unwrap();
        let next = v.plus_years(1).unwrap();
        assert_eq!(next.day_of_month(), 28);
        let strict = v.plus_years_with(1, &CalendarPolicy::strict()).unwrap_err();
        assert!(strict.is_invalid_field());
        // a month later is the day before the transition; thirty days is in the gap
        let march = v.plus_months(1).unwrap();
        assert_eq!(march.date_time(), LocalDateTime::of(2008, 3, 29, 1, 30, 0, 0).unwrap());
        assert_eq!(v.plus_days(30).unwrap().date_time(), ldt(3, 30, 2, 30));
    }

    #[test]
    fn test_display_and_calendrical() {
        let v = zdt(6, 1, 12, 0);
        assert_eq!(v.to_string(), "2008-06-01T12:00:00+02:00[Test/Dst]");
        assert_eq!(v.get(DateTimeField::HourOfDay), Ok(12));
        assert_eq!(v.to_offset_date_time().offset(), offset(2));
    }
}
