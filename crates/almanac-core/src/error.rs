//! # Error Types — Calendrical Failure Taxonomy
//!
//! Defines the single error type raised by the engine and by every value
//! type built on it. All errors use `thiserror` for derive-based `Display`
//! and `Error` implementations.
//!
//! ## Design
//!
//! - Range errors name the field, the rejected value and the inclusive bounds.
//! - Invalid-field errors carry the offending value and the calendar rule it
//!   broke (e.g. "April has 30 days").
//! - No error is ever recovered inside the engine. Recovery from an invalid
//!   field combination happens only through an explicitly selected resolver.

use thiserror::Error;

use crate::field::DateTimeField;

/// Top-level error type for calendrical operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// A single field value lies outside its field rule's `[min, max]`.
    #[error("value {value} for {field} is outside the valid range {min}..={max}")]
    FieldOutOfRange {
        /// The field whose rule rejected the value.
        field: DateTimeField,
        /// The rejected value.
        value: i64,
        /// Inclusive lower bound of the rule.
        min: i64,
        /// Inclusive upper bound of the rule.
        max: i64,
    },

    /// In-range fields that do not combine into a valid date or time.
    #[error("invalid value {value} for {field}: {reason}")]
    InvalidField {
        /// The field that cannot take this value in context.
        field: DateTimeField,
        /// The rejected value.
        value: i64,
        /// The calendar rule that was violated.
        reason: String,
    },

    /// A field was queried on a value type that does not carry it.
    #[error("{value_type} does not support field {field}")]
    UnsupportedField {
        /// The queried field.
        field: DateTimeField,
        /// Name of the value type that was queried.
        value_type: &'static str,
    },

    /// Integer arithmetic exceeded representable bounds.
    #[error("arithmetic overflow in {operation}")]
    Overflow {
        /// The operation that overflowed (e.g. `plus_years`).
        operation: &'static str,
    },

    /// A set of calendricals did not carry a field the target type needs.
    #[error("cannot build {target}: no calendrical supplied {field}")]
    MissingField {
        /// The type being constructed.
        target: &'static str,
        /// The field nobody supplied.
        field: DateTimeField,
    },

    /// Two calendricals supplied different values for the same field.
    #[error("conflicting values for {field}: {first} and {second}")]
    ConflictingField {
        /// The field with two values.
        field: DateTimeField,
        /// The value seen first.
        first: i64,
        /// The value that contradicted it.
        second: i64,
    },

    /// A local date-time falls inside a zone gap and the policy rejects it.
    #[error("local date-time {local} does not exist in zone {zone}")]
    NonExistentLocalTime {
        /// The local date-time, rendered for diagnostics.
        local: String,
        /// Identifier of the zone.
        zone: String,
    },

    /// A local date-time falls inside a zone overlap and the policy rejects it.
    #[error("local date-time {local} is ambiguous in zone {zone}")]
    AmbiguousLocalTime {
        /// The local date-time, rendered for diagnostics.
        local: String,
        /// Identifier of the zone.
        zone: String,
    },

    /// A zone stand-in was defined inconsistently.
    #[error("invalid zone definition: {0}")]
    InvalidZone(String),

    /// Policy configuration could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl CalendarError {
    /// Shorthand for an [`CalendarError::Overflow`] error.
    pub fn overflow(operation: &'static str) -> Self {
        Self::Overflow { operation }
    }

    /// Whether this is a single-field range violation.
    pub fn is_range_error(&self) -> bool {
        matches!(self, Self::FieldOutOfRange { .. })
    }

    /// Whether this is an invalid field combination.
    pub fn is_invalid_field(&self) -> bool {
        matches!(self, Self::InvalidField { .. })
    }

    /// Whether this is an unsupported field query.
    pub fn is_unsupported_field(&self) -> bool {
        matches!(self, Self::UnsupportedField { .. })
    }

    /// Whether this is an arithmetic overflow.
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }
}
