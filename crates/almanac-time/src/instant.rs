//! # Instant
//!
//! A point on the UTC time-line: seconds since 1970-01-01T00:00Z plus a
//! nano-of-second adjustment. Instants have no calendar fields; they anchor
//! the offset and zoned types and drive duration-based arithmetic.

use serde::{Deserialize, Serialize};

use almanac_core::{CalendarError, IsoChronology};

use crate::arith::NANOS_PER_SECOND;

/// Seconds and nanoseconds since the epoch; `nano` is always below one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "InstantFields", into = "InstantFields")]
pub struct Instant {
    seconds: i64,
    nano: u32,
}

#[derive(Serialize, Deserialize)]
struct InstantFields {
    seconds: i64,
    #[serde(default)]
    nano: u32,
}

impl Instant {
    /// 1970-01-01T00:00Z.
    pub const EPOCH: Instant = Instant { seconds: 0, nano: 0 };

    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] if `nano` is a second or more.
    pub fn of_epoch_second(seconds: i64, nano: u32) -> Result<Self, CalendarError> {
        IsoChronology::INSTANCE
            .nano_of_second_rule()
            .check_value(i64::from(nano))?;
        Ok(Self { seconds, nano })
    }

    pub(crate) const fn new_unchecked(seconds: i64, nano: u32) -> Self {
        Self { seconds, nano }
    }

    /// Whole seconds since 1970-01-01T00:00Z, negative before the epoch.
    pub fn epoch_second(&self) -> i64 {
        self.seconds
    }

    /// Nanosecond adjustment within the second, always below one billion.
    pub fn nano(&self) -> u32 {
        self.nano
    }

    /// Move along the time-line by `seconds`.
    pub fn plus_seconds(&self, seconds: i64) -> Result<Self, CalendarError> {
        let seconds = self
            .seconds
            .checked_add(seconds)
            .ok_or_else(|| CalendarError::overflow("plus_seconds"))?;
        Ok(Self { seconds, ..*self })
    }

    /// Move along the time-line by `nanos`.
    pub fn plus_nanos(&self, nanos: i128) -> Result<Self, CalendarError> {
        let total = i128::from(self.seconds) * i128::from(NANOS_PER_SECOND)
            + i128::from(self.nano)
            + nanos;
        let seconds = i64::try_from(total.div_euclid(i128::from(NANOS_PER_SECOND)))
            .map_err(|_| CalendarError::overflow("plus_nanos"))?;
        // rem_euclid is below one second
        let nano = total.rem_euclid(i128::from(NANOS_PER_SECOND)) as u32;
        Ok(Self { seconds, nano })
    }

    /// Whether this instant is strictly later on the time-line.
    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    /// Whether this instant is strictly earlier on the time-line.
    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }
}

impl TryFrom<InstantFields> for Instant {
    type Error = CalendarError;

    fn try_from(fields: InstantFields) -> Result<Self, Self::Error> {
        Self::of_epoch_second(fields.seconds, fields.nano)
    }
}

impl From<Instant> for InstantFields {
    fn from(instant: Instant) -> Self {
        Self {
            seconds: instant.seconds,
            nano: instant.nano,
        }
    }
}

impl std::fmt::Display for Instant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:09}s", self.seconds, self.nano)
    }
}
