//! # Field Rules — Addressable Calendrical Quantities
//!
//! A [`FieldRule`] describes one calendrical quantity: its name, its
//! inclusive value range, the unit it is measured in and the coarser unit
//! it is expressed relative to. Day-of-month is measured in `Days` relative
//! to `Months`; hour-of-day in `Hours` relative to `Days`.
//!
//! Field rules carry no calendar logic beyond range and unit metadata. All
//! calendar-specific computation lives in [`crate::chronology`].
//!
//! ## Identity
//!
//! Rules are produced only by the chronology and live in a `static` table,
//! so the rule for a logical field is one canonical instance. Callers can
//! compare either by value (`==`) or by address; both agree. The closed
//! [`DateTimeField`] enum is the tag used to address a rule.

use serde::{Deserialize, Serialize};

use crate::chronology::IsoChronology;
use crate::error::CalendarError;

/// Units in which calendrical quantities are measured, finest first.
///
/// The derived ordering is by granularity, so `Nanos < Seconds < … < Forever`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodUnit {
    /// Nanoseconds.
    Nanos,
    /// Seconds.
    Seconds,
    /// Minutes.
    Minutes,
    /// Hours.
    Hours,
    /// Days.
    Days,
    /// Months.
    Months,
    /// Years.
    Years,
    /// Eras (BCE / CE).
    Eras,
    /// Unbounded; the relative unit of fields that never wrap.
    Forever,
}

impl PeriodUnit {
    /// Returns the lowercase name of this unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nanos => "nanos",
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::Days => "days",
            Self::Months => "months",
            Self::Years => "years",
            Self::Eras => "eras",
            Self::Forever => "forever",
        }
    }
}

impl std::fmt::Display for PeriodUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed set of fields the ISO chronology defines.
///
/// Every value type reports its supported fields as a subset of this enum,
/// and [`DateTimeField::rule()`] maps each tag to its canonical rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateTimeField {
    /// Era: 0 = BCE, 1 = CE.
    Era,
    /// Year within the era, counted from 1.
    YearOfEra,
    /// Proleptic ISO year: 1 = 1 CE, 0 = 1 BCE, -1 = 2 BCE.
    Year,
    /// Month of year, 1 (January) to 12 (December).
    MonthOfYear,
    /// Day of month, 1 to 31.
    DayOfMonth,
    /// Day of year, 1 to 366.
    DayOfYear,
    /// Hour of day, 0 to 23.
    HourOfDay,
    /// Minute of hour, 0 to 59.
    MinuteOfHour,
    /// Second of minute, 0 to 59. Leap seconds are not represented.
    SecondOfMinute,
    /// Nanosecond of second, 0 to 999,999,999.
    NanoOfSecond,
}

/// Number of [`DateTimeField`] variants.
pub const DATE_TIME_FIELD_COUNT: usize = 10;

impl DateTimeField {
    /// Returns every field, coarsest first.
    pub fn all() -> &'static [DateTimeField] {
        &[
            Self::Era,
            Self::YearOfEra,
            Self::Year,
            Self::MonthOfYear,
            Self::DayOfMonth,
            Self::DayOfYear,
            Self::HourOfDay,
            Self::MinuteOfHour,
            Self::SecondOfMinute,
            Self::NanoOfSecond,
        ]
    }

    /// The canonical rule for this field in the ISO chronology.
    pub fn rule(self) -> &'static FieldRule {
        IsoChronology::INSTANCE.rule(self)
    }

    /// The rule name, e.g. `DayOfMonth`.
    pub fn name(self) -> &'static str {
        self.rule().name()
    }

    /// Whether this field belongs to the date part (as opposed to time-of-day).
    pub fn is_date_field(self) -> bool {
        self.rule().unit() >= PeriodUnit::Days
    }

    /// Whether this field belongs to the time-of-day part.
    pub fn is_time_field(self) -> bool {
        !self.is_date_field()
    }
}

impl std::fmt::Display for DateTimeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Range and unit metadata for one calendrical field.
///
/// # Invariants
///
/// - `min <= max`.
/// - `unit < range_unit`: a field is always expressed relative to a
///   strictly coarser unit.
/// - Instances are created only by the chronology's rule table.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct FieldRule {
    field: DateTimeField,
    name: &'static str,
    min: i64,
    max: i64,
    unit: PeriodUnit,
    range_unit: PeriodUnit,
}

impl FieldRule {
    pub(crate) const fn new(
        field: DateTimeField,
        name: &'static str,
        min: i64,
        max: i64,
        unit: PeriodUnit,
        range_unit: PeriodUnit,
    ) -> Self {
        Self {
            field,
            name,
            min,
            max,
            unit,
            range_unit,
        }
    }

    /// The tag addressing this rule.
    pub fn field(&self) -> DateTimeField {
        self.field
    }

    /// The rule name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Smallest valid value (inclusive).
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Largest valid value (inclusive).
    pub fn max(&self) -> i64 {
        self.max
    }

    /// The unit this field is measured in.
    pub fn unit(&self) -> PeriodUnit {
        self.unit
    }

    /// The coarser unit this field is expressed relative to.
    pub fn range_unit(&self) -> PeriodUnit {
        self.range_unit
    }

    /// Whether both this field's unit and its relative unit lie within
    /// `[min_unit, max_unit]`.
    ///
    /// Day-of-month (`Days` relative to `Months`) is within `[Days, Months]`
    /// but not within `[Hours, Days]` or `[Months, Forever]`.
    pub fn is_supported(&self, min_unit: PeriodUnit, max_unit: PeriodUnit) -> bool {
        self.unit >= min_unit && self.range_unit <= max_unit
    }

    /// Whether `value` lies within `[min, max]`.
    pub fn is_valid_value(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Check `value` against `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] naming this field.
    pub fn check_value(&self, value: i64) -> Result<i64, CalendarError> {
        if self.is_valid_value(value) {
            Ok(value)
        } else {
            Err(self.out_of_range(value))
        }
    }

    /// Check `value` and narrow it to `i32`.
    pub fn check_i32(&self, value: i64) -> Result<i32, CalendarError> {
        let value = self.check_value(value)?;
        i32::try_from(value).map_err(|_| self.out_of_range(value))
    }

    /// Check `value` and narrow it to `u32`.
    pub fn check_u32(&self, value: i64) -> Result<u32, CalendarError> {
        let value = self.check_value(value)?;
        u32::try_from(value).map_err(|_| self.out_of_range(value))
    }

    /// Check `value` and narrow it to `u16`.
    pub fn check_u16(&self, value: i64) -> Result<u16, CalendarError> {
        let value = self.check_value(value)?;
        u16::try_from(value).map_err(|_| self.out_of_range(value))
    }

    /// Check `value` and narrow it to `u8`.
    pub fn check_u8(&self, value: i64) -> Result<u8, CalendarError> {
        let value = self.check_value(value)?;
        u8::try_from(value).map_err(|_| self.out_of_range(value))
    }

    fn out_of_range(&self, value: i64) -> CalendarError {
        CalendarError::FieldOutOfRange {
            field: self.field,
            value,
            min: self.min,
            max: self.max,
        }
    }
}

impl std::fmt::Display for FieldRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}..={}] ({} of {})",
            self.name, self.min, self.max, self.unit, self.range_unit
        )
    }
}
