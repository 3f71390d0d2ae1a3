//! # Date Resolvers — Overflow Policy After Arithmetic
//!
//! Arithmetic on a valid date can produce a field tuple that is in range
//! field-by-field but is not a real date: 2008-02-29 plus one year gives
//! 2009-02-29, 2007-03-31 plus one month gives 2007-04-31. A resolver maps
//! such a tuple to a valid one, or rejects it.
//!
//! ## Policies
//!
//! | Policy | Invalid tuple | Example |
//! |--------|---------------|---------|
//! | [`DateResolver::Strict`] | rejected | 2009-02-29 → `InvalidField` |
//! | [`DateResolver::PreviousValid`] | day clamped to the month's last day | 2009-02-29 → 2009-02-28 |
//! | [`DateResolver::NextValid`] | rolled to the first day of the next month | 2009-02-29 → 2009-03-01 |
//!
//! `PreviousValid` is the default used by `with_year`, `with_month_of_year`,
//! `plus_years` and `plus_months` on every value type.
//!
//! ## Invariants
//!
//! - Deterministic and stateless: no resolver consults anything but its input.
//! - Idempotent: an already-valid tuple is returned unchanged by every policy.
//! - Out-of-range single fields (month 13, day 32) are never resolved; they
//!   fail with `FieldOutOfRange` before any policy runs.
//!
//! Callers choose a resolver per call site through the [`ResolveDate`] trait,
//! so custom policies compose without touching the chronology.

use serde::{Deserialize, Serialize};

use crate::chronology::{IsoChronology, RawDate};
use crate::error::CalendarError;

/// Strategy that turns a possibly invalid `(year, month, day)` into a valid date.
pub trait ResolveDate: std::fmt::Debug + Send + Sync {
    /// Resolve the tuple to a valid date.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::FieldOutOfRange`] if a single field is out of range.
    /// - Any error the policy uses to reject the combination.
    fn resolve_date(&self, year: i32, month: u8, day: u8) -> Result<RawDate, CalendarError>;
}

/// The built-in resolution policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateResolver {
    /// Reject invalid combinations with `InvalidField`.
    Strict,
    /// Clamp the day to the last valid day of the month.
    #[default]
    PreviousValid,
    /// Roll forward to the first day of the following month.
    NextValid,
}

impl DateResolver {
    /// Returns every built-in policy.
    pub fn all() -> &'static [DateResolver] {
        &[Self::Strict, Self::PreviousValid, Self::NextValid]
    }

    /// Returns the snake_case identifier of this policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::PreviousValid => "previous_valid",
            Self::NextValid => "next_valid",
        }
    }
}

impl std::fmt::Display for DateResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ResolveDate for DateResolver {
    fn resolve_date(&self, year: i32, month: u8, day: u8) -> Result<RawDate, CalendarError> {
        let iso = IsoChronology::INSTANCE;
        iso.year_rule().check_value(i64::from(year))?;
        iso.month_of_year_rule().check_value(i64::from(month))?;
        iso.day_of_month_rule().check_value(i64::from(day))?;

        let length = iso.month_length_unchecked(i64::from(year), month);
        if day <= length {
            return Ok(RawDate::new(year, month, day));
        }

        match self {
            Self::Strict => Err(iso.invalid_day_of_month(year, month, day, length)),
            Self::PreviousValid => {
                tracing::debug!(
                    year,
                    month,
                    day,
                    resolved_day = length,
                    "clamped day-of-month to last valid day"
                );
                Ok(RawDate::new(year, month, length))
            }
            Self::NextValid => {
                let (next_year, next_month) = if month == 12 {
                    let next = iso.year_rule().check_i32(i64::from(year) + 1)?;
                    (next, 1)
                } else {
                    (year, month + 1)
                };
                tracing::debug!(
                    year,
                    month,
                    day,
                    resolved_year = next_year,
                    resolved_month = next_month,
                    "rolled invalid day forward to first of next month"
                );
                Ok(RawDate::new(next_year, next_month, 1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chronology::MAX_YEAR;
    use crate::field::DateTimeField;

    #[test]
    fn test_previous_valid_leap_day() {
        let r = DateResolver::PreviousValid.resolve_date(2009, 2, 29).unwrap();
        assert_eq!(r, RawDate::new(2009, 2, 28));
    }

    #[test]
    fn test_previous_valid_thirty_day_month() {
        let r = DateResolver::PreviousValid.resolve_date(2007, 4, 31).unwrap();
        assert_eq!(r, RawDate::new(2007, 4, 30));
    }

    #[test]
    fn test_strict_rejects_invalid() {
        let err = DateResolver::Strict.resolve_date(2009, 2, 29).unwrap_err();
        assert!(err.is_invalid_field());
        match err {
            CalendarError::InvalidField { field, value, .. } => {
                assert_eq!(field, DateTimeField::DayOfMonth);
                assert_eq!(value, 29);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_next_valid_rolls_forward() {
        let r = DateResolver::NextValid.resolve_date(2009, 2, 29).unwrap();
        assert_eq!(r, RawDate::new(2009, 3, 1));
        let r = DateResolver::NextValid.resolve_date(2007, 4, 31).unwrap();
        assert_eq!(r, RawDate::new(2007, 5, 1));
    }

    #[test]
    fn test_next_valid_year_boundary_is_unreachable_for_december() {
        // December has 31 days, so a day-in-range December tuple is always valid.
        let r = DateResolver::NextValid.resolve_date(2007, 12, 31).unwrap();
        assert_eq!(r, RawDate::new(2007, 12, 31));
    }

    #[test]
    fn test_next_valid_at_max_year() {
        let r = DateResolver::NextValid.resolve_date(MAX_YEAR, 11, 31).unwrap();
        assert_eq!(r, RawDate::new(MAX_YEAR, 12, 1));
    }

    #[test]
    fn test_out_of_range_fields_never_resolved() {
        for resolver in DateResolver::all() {
            assert!(resolver.resolve_date(2007, 13, 1).unwrap_err().is_range_error());
            assert!(resolver.resolve_date(2007, 0, 1).unwrap_err().is_range_error());
            assert!(resolver.resolve_date(2007, 1, 32).unwrap_err().is_range_error());
            assert!(resolver.resolve_date(2007, 1, 0).unwrap_err().is_range_error());
        }
    }

    #[test]
    fn test_default_is_previous_valid() {
        assert_eq!(DateResolver::default(), DateResolver::PreviousValid);
    }

    #[test]
    fn test_serde_identifiers() {
        for resolver in DateResolver::all() {
            let json = serde_json::to_string(resolver).unwrap();
            assert_eq!(json, format!("\"{}\"", resolver.as_str()));
            let parsed: DateResolver = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, *resolver);
        }
    }

    #[derive(Debug)]
    struct FirstOfMonth;

    impl ResolveDate for FirstOfMonth {
        fn resolve_date(&self, year: i32, month: u8, day: u8) -> Result<RawDate, CalendarError> {
            let iso = IsoChronology::INSTANCE;
            if iso.is_valid_date(year, month, day) {
                Ok(RawDate::new(year, month, day))
            } else {
                Ok(RawDate::new(year, month, 1))
            }
        }
    }

    #[test]
    fn test_custom_policy_through_trait_object() {
        let resolver: &dyn ResolveDate = &FirstOfMonth;
        assert_eq!(resolver.resolve_date(2009, 2, 30).unwrap(), RawDate::new(2009, 2, 1));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every policy returns an already-valid tuple unchanged.
        #[test]
        fn resolvers_are_idempotent(year in -10_000i32..10_000, month in 1u8..=12, day in 1u8..=31) {
            let iso = IsoChronology::INSTANCE;
            for resolver in DateResolver::all() {
                match resolver.resolve_date(year, month, day) {
                    Ok(resolved) => {
                        prop_assert!(iso.is_valid_date(resolved.year, resolved.month, resolved.day));
                        let again = resolver.resolve_date(resolved.year, resolved.month, resolved.day).unwrap();
                        prop_assert_eq!(again, resolved);
                        if iso.is_valid_date(year, month, day) {
                            prop_assert_eq!(resolved, RawDate::new(year, month, day));
                        }
                    }
                    Err(e) => {
                        prop_assert_eq!(*resolver, DateResolver::Strict);
                        prop_assert!(e.is_invalid_field());
                    }
                }
            }
        }
    }
}
