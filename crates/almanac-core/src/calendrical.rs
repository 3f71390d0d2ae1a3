//! # Calendrical Capability — Generic Field Access
//!
//! Every value type implements [`Calendrical`]: it reports which fields it
//! carries and returns the value of any of them. Generic construction code
//! can then accept an arbitrary ordered collection of calendricals and pull
//! out exactly the fields it needs, without knowing which concrete types
//! supplied them.
//!
//! ## Contract
//!
//! - `get(field)` fails with `UnsupportedField` whenever
//!   `is_supported(field)` is false, and never fails when it is true.
//! - The supported set of a type is fixed; it is exposed as a `'static`
//!   slice of [`DateTimeField`] tags.
//!
//! ## Merging
//!
//! [`FieldMap`] gathers the fields of several calendricals. Agreement is
//! required: two sources that report different values for the same field
//! are a `ConflictingField` error, not a last-writer-wins overwrite. A target
//! type that needs a field nobody supplied fails with `MissingField`; no
//! field is ever defaulted.

use std::collections::BTreeMap;

use crate::chronology::{Era, IsoChronology, RawDate};
use crate::error::CalendarError;
use crate::field::DateTimeField;

/// Capability to report supported fields and their values.
pub trait Calendrical {
    /// Name of the implementing type, used in error messages.
    fn type_name(&self) -> &'static str;

    /// The fixed set of fields this type carries.
    fn supported_fields(&self) -> &'static [DateTimeField];

    /// Whether `field` can be queried on this value.
    fn is_supported(&self, field: DateTimeField) -> bool {
        self.supported_fields().contains(&field)
    }

    /// The value of `field`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedField`] if `is_supported(field)`
    /// is false.
    fn get(&self, field: DateTimeField) -> Result<i64, CalendarError>;

    /// The error `get` returns for a field outside the supported set.
    fn unsupported(&self, field: DateTimeField) -> CalendarError {
        CalendarError::UnsupportedField {
            field,
            value_type: self.type_name(),
        }
    }
}

/// Field values merged from one or more calendricals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    values: BTreeMap<DateTimeField, i64>,
}

impl FieldMap {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge every supported field of each calendrical, in order.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::ConflictingField`] if two calendricals
    /// disagree on a field.
    pub fn from_calendricals(calendricals: &[&dyn Calendrical]) -> Result<Self, CalendarError> {
        let mut map = Self::new();
        for calendrical in calendricals {
            map.merge(*calendrical)?;
        }
        tracing::trace!(
            sources = calendricals.len(),
            fields = map.len(),
            "merged calendrical fields"
        );
        Ok(map)
    }

    /// Merge every supported field of `calendrical` into this map.
    pub fn merge(&mut self, calendrical: &dyn Calendrical) -> Result<(), CalendarError> {
        for field in calendrical.supported_fields() {
            let value = calendrical.get(*field)?;
            self.insert(*field, value)?;
        }
        Ok(())
    }

    /// Record `value` for `field`.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::FieldOutOfRange`] if the value breaks the field rule.
    /// - [`CalendarError::ConflictingField`] if a different value is already
    ///   recorded for the field.
    pub fn insert(&mut self, field: DateTimeField, value: i64) -> Result<(), CalendarError> {
        field.rule().check_value(value)?;
        match self.values.get(&field) {
            Some(&existing) if existing != value => Err(CalendarError::ConflictingField {
                field,
                first: existing,
                second: value,
            }),
            Some(_) => Ok(()),
            None => {
                self.values.insert(field, value);
                Ok(())
            }
        }
    }

    /// The value recorded for `field`, if any.
    pub fn get(&self, field: DateTimeField) -> Option<i64> {
        self.values.get(&field).copied()
    }

    /// Whether a value is recorded for `field`.
    pub fn contains(&self, field: DateTimeField) -> bool {
        self.values.contains_key(&field)
    }

    /// Number of recorded fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no field is recorded.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Recorded fields and values, coarsest field first.
    pub fn iter(&self) -> impl Iterator<Item = (DateTimeField, i64)> + '_ {
        self.values.iter().map(|(f, v)| (*f, *v))
    }

    /// The subset of recorded fields for which `keep` holds.
    pub fn select(&self, keep: impl Fn(DateTimeField) -> bool) -> Self {
        Self {
            values: self
                .values
                .iter()
                .filter(|(f, _)| keep(**f))
                .map(|(f, v)| (*f, *v))
                .collect(),
        }
    }

    /// The value of `field`, which `target` needs.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::MissingField`] if nothing supplied it.
    pub fn require(&self, field: DateTimeField, target: &'static str) -> Result<i64, CalendarError> {
        self.get(field)
            .ok_or(CalendarError::MissingField { target, field })
    }

    /// The proleptic year, taken from `Year` or derived from `Era` plus
    /// `YearOfEra`. When both forms are present they must agree.
    pub fn resolve_year(&self, target: &'static str) -> Result<i32, CalendarError> {
        let iso = IsoChronology::INSTANCE;
        match self.get(DateTimeField::Year) {
            Some(year) => {
                let year = iso.year_rule().check_i32(year)?;
                if let Some(era) = self.get(DateTimeField::Era) {
                    let expected = iso.era(year).value();
                    if era != expected {
                        return Err(CalendarError::ConflictingField {
                            field: DateTimeField::Era,
                            first: expected,
                            second: era,
                        });
                    }
                }
                if let Some(yoe) = self.get(DateTimeField::YearOfEra) {
                    let expected = iso.year_of_era(year);
                    if yoe != expected {
                        return Err(CalendarError::ConflictingField {
                            field: DateTimeField::YearOfEra,
                            first: expected,
                            second: yoe,
                        });
                    }
                }
                Ok(year)
            }
            None => {
                let era = self.require(DateTimeField::Era, target).map_err(|_| {
                    CalendarError::MissingField {
                        target,
                        field: DateTimeField::Year,
                    }
                })?;
                let yoe = self.require(DateTimeField::YearOfEra, target).map_err(|_| {
                    CalendarError::MissingField {
                        target,
                        field: DateTimeField::Year,
                    }
                })?;
                iso.proleptic_year(Era::of(era)?, yoe)
            }
        }
    }

    /// A valid date built from the year plus either month and day-of-month
    /// or day-of-year. Redundant fields must agree with the result.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::MissingField`] if the fields cannot determine a date.
    /// - [`CalendarError::InvalidField`] if they name a date that does not exist.
    /// - [`CalendarError::ConflictingField`] if redundant fields disagree.
    pub fn resolve_date(&self, target: &'static str) -> Result<RawDate, CalendarError> {
        let iso = IsoChronology::INSTANCE;
        let year = self.resolve_year(target)?;
        let month = self.get(DateTimeField::MonthOfYear);
        let day = self.get(DateTimeField::DayOfMonth);
        let day_of_year = self.get(DateTimeField::DayOfYear);

        let date = match (month, day, day_of_year) {
            (Some(month), Some(day), _) => {
                let month = iso.month_of_year_rule().check_u8(month)?;
                let day = iso.day_of_month_rule().check_u8(day)?;
                iso.check_valid_date(year, month, day)?;
                RawDate::new(year, month, day)
            }
            (_, _, Some(doy)) => {
                let doy = iso.day_of_year_rule().check_u16(doy)?;
                iso.date_from_day_of_year(year, doy)?
            }
            (None, _, None) => {
                return Err(CalendarError::MissingField {
                    target,
                    field: DateTimeField::MonthOfYear,
                })
            }
            (Some(_), None, None) => {
                return Err(CalendarError::MissingField {
                    target,
                    field: DateTimeField::DayOfMonth,
                })
            }
        };

        self.cross_check(DateTimeField::MonthOfYear, i64::from(date.month))?;
        self.cross_check(DateTimeField::DayOfMonth, i64::from(date.day))?;
        if day_of_year.is_some() {
            let derived = iso.day_of_year_unchecked(i64::from(date.year), date.month, date.day);
            self.cross_check(DateTimeField::DayOfYear, i64::from(derived))?;
        }
        Ok(date)
    }

    fn cross_check(&self, field: DateTimeField, derived: i64) -> Result<(), CalendarError> {
        match self.get(field) {
            Some(value) if value != derived => Err(CalendarError::ConflictingField {
                field,
                first: value,
                second: derived,
            }),
            _ => Ok(()),
        }
    }
}
