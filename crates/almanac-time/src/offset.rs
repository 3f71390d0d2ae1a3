//! # Zone Offset
//!
//! A fixed difference from UTC, within ±18:00. Offsets are ordered by their
//! total seconds, so `-05:00 < Z < +01:00`.

use serde::{Deserialize, Serialize};

use almanac_core::CalendarError;

use crate::arith::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// Largest offset magnitude in seconds (18 hours).
pub const MAX_OFFSET_SECONDS: i32 = 18 * 3_600;

/// An offset from UTC in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct ZoneOffset {
    seconds: i32,
}

impl ZoneOffset {
    /// UTC, `Z`.
    pub const UTC: ZoneOffset = ZoneOffset { seconds: 0 };

    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidZone`] beyond ±18:00.
    pub fn of_total_seconds(seconds: i32) -> Result<Self, CalendarError> {
        if !(-MAX_OFFSET_SECONDS..=MAX_OFFSET_SECONDS).contains(&seconds) {
            return Err(CalendarError::InvalidZone(format!(
                "offset of {seconds} seconds is outside ±18:00"
            )));
        }
        Ok(Self { seconds })
    }

    /// Offset of whole hours.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidZone`] beyond ±18 hours.
    pub fn of_hours(hours: i8) -> Result<Self, CalendarError> {
        Self::of_hours_minutes(hours, 0)
    }

    /// Offset of `hours` and `minutes`; both must carry the same sign.
    pub fn of_hours_minutes(hours: i8, minutes: i8) -> Result<Self, CalendarError> {
        if (hours > 0 && minutes < 0) || (hours < 0 && minutes > 0) || minutes.abs() > 59 {
            return Err(CalendarError::InvalidZone(format!(
                "offset hours {hours} and minutes {minutes} are inconsistent"
            )));
        }
        let seconds = i64::from(hours) * SECONDS_PER_HOUR + i64::from(minutes) * SECONDS_PER_MINUTE;
        // |seconds| <= 127 * 3600 + 59 * 60
        Self::of_total_seconds(seconds as i32)
    }

    /// Signed offset from UTC in seconds, east positive.
    pub fn total_seconds(&self) -> i32 {
        self.seconds
    }
}

impl TryFrom<i32> for ZoneOffset {
    type Error = CalendarError;

    fn try_from(seconds: i32) -> Result<Self, Self::Error> {
        Self::of_total_seconds(seconds)
    }
}

impl From<ZoneOffset> for i32 {
    fn from(offset: ZoneOffset) -> Self {
        offset.seconds
    }
}

impl std::fmt::Display for ZoneOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.seconds == 0 {
            return f.write_str("Z");
        }
        let sign = if self.seconds < 0 { '-' } else { '+' };
        let abs = self.seconds.unsigned_abs();
        write!(f, "{sign}{:02}:{:02}", abs / 3_600, abs / 60 % 60)?;
        if abs % 60 != 0 {
            write!(f, ":{:02}", abs % 60)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(ZoneOffset::of_hours(18).is_ok());
        assert!(ZoneOffset::of_hours(-18).is_ok());
        assert!(ZoneOffset::of_hours(19).is_err());
        assert!(ZoneOffset::of_total_seconds(MAX_OFFSET_SECONDS + 1).is_err());
    }

    #[test]
    fn test_sign_consistency() {
        assert_eq!(ZoneOffset::of_hours_minutes(5, 30).unwrap().total_seconds(), 19_800);
        assert_eq!(ZoneOffset::of_hours_minutes(-3, -30).unwrap().total_seconds(), -12_600);
        assert_eq!(ZoneOffset::of_hours_minutes(0, -30).unwrap().total_seconds(), -1_800);
        assert!(ZoneOffset::of_hours_minutes(5, -30).is_err());
        assert!(ZoneOffset::of_hours_minutes(1, 60).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ZoneOffset::UTC.to_string(), "Z");
        assert_eq!(ZoneOffset::of_hours(2).unwrap().to_string(), "+02:00");
        assert_eq!(ZoneOffset::of_hours_minutes(-3, -30).unwrap().to_string(), "-03:30");
        assert_eq!(ZoneOffset::of_total_seconds(3_661).unwrap().to_string(), "+01:01:01");
    }

    #[test]
    fn test_ordering() {
        assert!(ZoneOffset::of_hours(-5).unwrap() < ZoneOffset::UTC);
        assert!(ZoneOffset::UTC < ZoneOffset::of_hours(1).unwrap());
    }
}
