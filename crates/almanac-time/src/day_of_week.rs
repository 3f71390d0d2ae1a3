//! # Day of Week
//!
//! ISO weekday numbering, Monday = 1 through Sunday = 7, derived from the
//! epoch day. The weekday is not a field rule; it is computed on demand from
//! a complete date.

use serde::{Deserialize, Serialize};

use almanac_core::IsoChronology;

/// A day of the ISO week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayOfWeek {
    /// Monday, value 1.
    Monday = 1,
    /// Tuesday, value 2.
    Tuesday,
    /// Wednesday, value 3.
    Wednesday,
    /// Thursday, value 4.
    Thursday,
    /// Friday, value 5.
    Friday,
    /// Saturday, value 6.
    Saturday,
    /// Sunday, value 7.
    Sunday,
}

const DAYS: [DayOfWeek; 7] = [
    DayOfWeek::Monday,
    DayOfWeek::Tuesday,
    DayOfWeek::Wednesday,
    DayOfWeek::Thursday,
    DayOfWeek::Friday,
    DayOfWeek::Saturday,
    DayOfWeek::Sunday,
];

impl DayOfWeek {
    /// Returns every weekday, Monday first.
    pub fn all() -> &'static [DayOfWeek] {
        &DAYS
    }

    /// Obtain a weekday from its ISO value, `None` unless 1 to 7.
    pub fn of(value: u8) -> Option<Self> {
        match value {
            1..=7 => Some(DAYS[usize::from(value - 1)]),
            _ => None,
        }
    }

    /// The weekday of a day counted from 1970-01-01.
    pub fn from_epoch_day(epoch_day: i64) -> Self {
        let value = IsoChronology::INSTANCE.day_of_week(epoch_day);
        DAYS[usize::from(value - 1)]
    }

    /// The ISO value, 1 to 7.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// The weekday `days` later, wrapping around the week.
    pub fn plus(self, days: i64) -> Self {
        let index = (i64::from(self.value()) - 1 + days.rem_euclid(7)).rem_euclid(7);
        DAYS[index as usize]
    }

    /// Whether this is Saturday or Sunday.
    pub fn is_weekend(self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }

    /// English weekday name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_is_thursday() {
        assert_eq!(DayOfWeek::from_epoch_day(0), DayOfWeek::Thursday);
        assert_eq!(DayOfWeek::from_epoch_day(-1), DayOfWeek::Wednesday);
        assert_eq!(DayOfWeek::from_epoch_day(4), DayOfWeek::Monday);
    }

    #[test]
    fn test_of_bounds() {
        assert_eq!(DayOfWeek::of(1), Some(DayOfWeek::Monday));
        assert_eq!(DayOfWeek::of(7), Some(DayOfWeek::Sunday));
        assert_eq!(DayOfWeek::of(0), None);
        assert_eq!(DayOfWeek::of(8), None);
    }

    #[test]
    fn test_plus_wraps() {
        assert_eq!(DayOfWeek::Sunday.plus(1), DayOfWeek::Monday);
        assert_eq!(DayOfWeek::Monday.plus(-1), DayOfWeek::Sunday);
        assert_eq!(DayOfWeek::Wednesday.plus(14), DayOfWeek::Wednesday);
        assert!(DayOfWeek::Saturday.is_weekend());
        assert!(!DayOfWeek::Friday.is_weekend());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&DayOfWeek::Friday).unwrap(), "\"FRIDAY\"");
    }
}
