//! Conversions to and from `chrono`'s naive types (`chrono` feature).
//!
//! chrono covers a narrower year range and can represent a leap second;
//! conversions that can meet either case are fallible.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use almanac_core::{CalendarError, DateTimeField};

use crate::local_date::LocalDate;
use crate::local_date_time::LocalDateTime;
use crate::local_time::LocalTime;

impl TryFrom<LocalDate> for NaiveDate {
    type Error = CalendarError;

    fn try_from(date: LocalDate) -> Result<Self, Self::Error> {
        NaiveDate::from_ymd_opt(date.year(), u32::from(date.month()), u32::from(date.day()))
            .ok_or(CalendarError::FieldOutOfRange {
                field: DateTimeField::Year,
                value: i64::from(date.year()),
                min: i64::from(NaiveDate::MIN.year()),
                max: i64::from(NaiveDate::MAX.year()),
            })
    }
}

impl From<NaiveDate> for LocalDate {
    fn from(date: NaiveDate) -> Self {
        // chrono's year range lies inside the year rule
        LocalDate::new_unchecked(date.year(), date.month() as u8, date.day() as u8)
    }
}

impl TryFrom<LocalTime> for NaiveTime {
    type Error = CalendarError;

    fn try_from(time: LocalTime) -> Result<Self, Self::Error> {
        NaiveTime::from_hms_nano_opt(
            u32::from(time.hour()),
            u32::from(time.minute()),
            u32::from(time.second()),
            time.nano(),
        )
        .ok_or(CalendarError::InvalidField {
            field: DateTimeField::NanoOfSecond,
            value: i64::from(time.nano()),
            reason: "not representable as a chrono time".to_string(),
        })
    }
}

impl TryFrom<NaiveTime> for LocalTime {
    type Error = CalendarError;

    /// Fails on a leap second, which chrono encodes as a nanosecond of one
    /// second or more.
    fn try_from(time: NaiveTime) -> Result<Self, Self::Error> {
        LocalTime::of(
            time.hour() as u8,
            time.minute() as u8,
            time.second() as u8,
            time.nanosecond(),
        )
    }
}

impl TryFrom<LocalDateTime> for NaiveDateTime {
    type Error = CalendarError;

    fn try_from(date_time: LocalDateTime) -> Result<Self, Self::Error> {
        Ok(NaiveDateTime::new(
            date_time.date().try_into()?,
            date_time.time().try_into()?,
        ))
    }
}

impl TryFrom<NaiveDateTime> for LocalDateTime {
    type Error = CalendarError;

    fn try_from(date_time: NaiveDateTime) -> Result<Self, Self::Error> {
        Ok(LocalDateTime::new(
            date_time.date().into(),
            date_time.time().try_into()?,
        ))
    }
}
