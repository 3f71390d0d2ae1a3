//! # Local Time
//!
//! A time of day without date or zone, to nanosecond precision. Leap seconds
//! are not represented: second-of-minute is 0 to 59.
//!
//! Time arithmetic wraps around midnight. The date-bearing types use
//! [`LocalTime::plus_nanos_carry`] to learn how many days the wrap crossed.

use serde::{Deserialize, Serialize};

use almanac_core::{Calendrical, CalendarError, DateTimeField, FieldMap, IsoChronology};

use crate::arith::{NANOS_PER_DAY, NANOS_PER_HOUR, NANOS_PER_MINUTE, NANOS_PER_SECOND};

const SUPPORTED: &[DateTimeField] = &[
    DateTimeField::HourOfDay,
    DateTimeField::MinuteOfHour,
    DateTimeField::SecondOfMinute,
    DateTimeField::NanoOfSecond,
];

/// A time of day, 00:00 to 23:59:59.999999999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "LocalTimeFields", into = "LocalTimeFields")]
pub struct LocalTime {
    hour: u8,
    minute: u8,
    second: u8,
    nano: u32,
}

#[derive(Serialize, Deserialize)]
struct LocalTimeFields {
    hour: u8,
    minute: u8,
    #[serde(default)]
    second: u8,
    #[serde(default)]
    nano: u32,
}

impl LocalTime {
    /// 00:00, the start of the day.
    pub const MIDNIGHT: LocalTime = LocalTime::new_unchecked(0, 0, 0, 0);
    /// 12:00.
    pub const NOON: LocalTime = LocalTime::new_unchecked(12, 0, 0, 0);
    /// The earliest time of day.
    pub const MIN: LocalTime = LocalTime::MIDNIGHT;
    /// The latest time of day.
    pub const MAX: LocalTime = LocalTime::new_unchecked(23, 59, 59, 999_999_999);

    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] naming the first field
    /// outside its rule.
    pub fn of(hour: u8, minute: u8, second: u8, nano: u32) -> Result<Self, CalendarError> {
        let iso = IsoChronology::INSTANCE;
        iso.hour_of_day_rule().check_value(i64::from(hour))?;
        iso.minute_of_hour_rule().check_value(i64::from(minute))?;
        iso.second_of_minute_rule().check_value(i64::from(second))?;
        iso.nano_of_second_rule().check_value(i64::from(nano))?;
        Ok(Self::new_unchecked(hour, minute, second, nano))
    }

    /// Hour and minute, with zero seconds.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] if either field leaves its rule.
    pub fn of_hm(hour: u8, minute: u8) -> Result<Self, CalendarError> {
        Self::of(hour, minute, 0, 0)
    }

    /// Hour, minute and second, with zero nanoseconds.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] if any field leaves its rule.
    pub fn of_hms(hour: u8, minute: u8, second: u8) -> Result<Self, CalendarError> {
        Self::of(hour, minute, second, 0)
    }

    pub(crate) const fn new_unchecked(hour: u8, minute: u8, second: u8, nano: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            nano,
        }
    }

    /// The time `nano_of_day` nanoseconds after midnight.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidField`] unless `nano_of_day` lies
    /// within one day.
    pub fn of_nano_of_day(nano_of_day: i64) -> Result<Self, CalendarError> {
        if !(0..NANOS_PER_DAY).contains(&nano_of_day) {
            return Err(CalendarError::InvalidField {
                field: DateTimeField::NanoOfSecond,
                value: nano_of_day,
                reason: format!("nano of day must be 0 to {}", NANOS_PER_DAY - 1),
            });
        }
        Ok(Self::from_nano_of_day(nano_of_day))
    }

    fn from_nano_of_day(nano_of_day: i64) -> Self {
        // caller guarantees 0 <= nano_of_day < NANOS_PER_DAY
        let hour = nano_of_day / NANOS_PER_HOUR;
        let minute = nano_of_day / NANOS_PER_MINUTE % 60;
        let second = nano_of_day / NANOS_PER_SECOND % 60;
        let nano = nano_of_day % NANOS_PER_SECOND;
        Self::new_unchecked(hour as u8, minute as u8, second as u8, nano as u32)
    }

    /// Build from the four time fields of a set of calendricals.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::MissingField`] if any of hour, minute,
    /// second or nano is absent.
    pub fn from_calendricals(calendricals: &[&dyn Calendrical]) -> Result<Self, CalendarError> {
        let map = FieldMap::from_calendricals(calendricals)?;
        Self::from_map(&map, "LocalTime")
    }

    pub(crate) fn from_map(map: &FieldMap, target: &'static str) -> Result<Self, CalendarError> {
        let iso = IsoChronology::INSTANCE;
        Self::of(
            iso.hour_of_day_rule()
                .check_u8(map.require(DateTimeField::HourOfDay, target)?)?,
            iso.minute_of_hour_rule()
                .check_u8(map.require(DateTimeField::MinuteOfHour, target)?)?,
            iso.second_of_minute_rule()
                .check_u8(map.require(DateTimeField::SecondOfMinute, target)?)?,
            iso.nano_of_second_rule()
                .check_u32(map.require(DateTimeField::NanoOfSecond, target)?)?,
        )
    }

    /// Hour of day, 0 to 23.
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute of hour, 0 to 59.
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Second of minute, 0 to 59.
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Nano of second, 0 to 999,999,999.
    pub fn nano(&self) -> u32 {
        self.nano
    }

    /// The nano-of-second as a fraction of a second, in `[0, 1)`.
    pub fn nano_fraction(&self) -> f64 {
        f64::from(self.nano) / 1_000_000_000.0
    }

    /// Whole seconds since midnight.
    pub fn to_second_of_day(&self) -> i64 {
        i64::from(self.hour) * 3_600 + i64::from(self.minute) * 60 + i64::from(self.second)
    }

    /// Nanoseconds since midnight.
    pub fn to_nano_of_day(&self) -> i64 {
        self.to_second_of_day() * NANOS_PER_SECOND + i64::from(self.nano)
    }

    /// Replace the hour.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] unless `hour` is 0 to 23.
    pub fn with_hour_of_day(&self, hour: u8) -> Result<Self, CalendarError> {
        Self::of(hour, self.minute, self.second, self.nano)
    }

    /// Replace the minute.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] unless `minute` is 0 to 59.
    pub fn with_minute_of_hour(&self, minute: u8) -> Result<Self, CalendarError> {
        Self::of(self.hour, minute, self.second, self.nano)
    }

    /// Replace the second.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] unless `second` is 0 to 59.
    pub fn with_second_of_minute(&self, second: u8) -> Result<Self, CalendarError> {
        Self::of(self.hour, self.minute, second, self.nano)
    }

    /// Replace the nano-of-second.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] if `nano` is a second or more.
    pub fn with_nano_of_second(&self, nano: u32) -> Result<Self, CalendarError> {
        Self::of(self.hour, self.minute, self.second, nano)
    }

    /// Replace the fields supplied by `calendricals`, keeping the rest.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedField`] if a calendrical supplies
    /// a date field.
    pub fn with_fields(&self, calendricals: &[&dyn Calendrical]) -> Result<Self, CalendarError> {
        let map = FieldMap::from_calendricals(calendricals)?;
        self.overlay(&map)
    }

    pub(crate) fn overlay(&self, map: &FieldMap) -> Result<Self, CalendarError> {
        let mut time = *self;
        for (field, value) in map.iter() {
            let rule = field.rule();
            match field {
                DateTimeField::HourOfDay => time.hour = rule.check_u8(value)?,
                DateTimeField::MinuteOfHour => time.minute = rule.check_u8(value)?,
                DateTimeField::SecondOfMinute => time.second = rule.check_u8(value)?,
                DateTimeField::NanoOfSecond => time.nano = rule.check_u32(value)?,
                _ => return Err(self.unsupported(field)),
            }
        }
        Ok(time)
    }

    /// Add hours, wrapping around midnight.
    pub fn plus_hours(&self, hours: i64) -> Self {
        self.plus_nanos_carry(i128::from(hours) * i128::from(NANOS_PER_HOUR)).0
    }

    /// Add minutes, wrapping around midnight.
    pub fn plus_minutes(&self, minutes: i64) -> Self {
        self.plus_nanos_carry(i128::from(minutes) * i128::from(NANOS_PER_MINUTE)).0
    }

    /// Add seconds, wrapping around midnight.
    pub fn plus_seconds(&self, seconds: i64) -> Self {
        self.plus_nanos_carry(i128::from(seconds) * i128::from(NANOS_PER_SECOND)).0
    }

    /// Add nanoseconds, wrapping around midnight.
    pub fn plus_nanos(&self, nanos: i64) -> Self {
        self.plus_nanos_carry(i128::from(nanos)).0
    }

    /// Add `nanos` and return the wrapped time with the number of midnights
    /// crossed (negative when moving backwards).
    pub(crate) fn plus_nanos_carry(&self, nanos: i128) -> (Self, i128) {
        let per_day = i128::from(NANOS_PER_DAY);
        let total = i128::from(self.to_nano_of_day()) + nanos;
        let days = total.div_euclid(per_day);
        // rem_euclid is within one day
        let nano_of_day = total.rem_euclid(per_day) as i64;
        (Self::from_nano_of_day(nano_of_day), days)
    }

    /// Whether this time is later in the day.
    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    /// Whether this time is earlier in the day.
    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }
}

impl TryFrom<LocalTimeFields> for LocalTime {
    type Error = CalendarError;

    fn try_from(fields: LocalTimeFields) -> Result<Self, Self::Error> {
        Self::of(fields.hour, fields.minute, fields.second, fields.nano)
    }
}

impl From<LocalTime> for LocalTimeFields {
    fn from(time: LocalTime) -> Self {
        Self {
            hour: time.hour,
            minute: time.minute,
            second: time.second,
            nano: time.nano,
        }
    }
}

impl Calendrical for LocalTime {
    fn type_name(&self) -> &'static str {
        "LocalTime"
    }

    fn supported_fields(&self) -> &'static [DateTimeField] {
        SUPPORTED
    }

    fn get(&self, field: DateTimeField) -> Result<i64, CalendarError> {
        match field {
            DateTimeField::HourOfDay => Ok(i64::from(self.hour)),
            DateTimeField::MinuteOfHour => Ok(i64::from(self.minute)),
            DateTimeField::SecondOfMinute => Ok(i64::from(self.second)),
            DateTimeField::NanoOfSecond => Ok(i64::from(self.nano)),
            _ => Err(self.unsupported(field)),
        }
    }
}

impl std::fmt::Display for LocalTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
        if self.nano != 0 {
            write!(f, ".{:09}", self.nano)?;
        }
        Ok(())
    }
}
