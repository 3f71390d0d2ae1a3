//! # almanac-core — Calendrical Engine
//!
//! This crate is the engine under every almanac value type. It defines what
//! a calendrical field is, encodes ISO calendar law, and provides the
//! resolution policies applied when arithmetic produces a field combination
//! that is not a real date. `almanac-time` builds the value types on top of
//! it; this crate knows nothing about any specific value type.
//!
//! ## Key Design Principles
//!
//! 1. **Closed field set.** [`DateTimeField`] enumerates every field the ISO
//!    chronology defines. Each tag maps to exactly one canonical
//!    [`FieldRule`] in a compile-time table.
//!
//! 2. **Explicit shared chronology.** [`IsoChronology::INSTANCE`] is a
//!    zero-sized constant. There is no lazily initialized global.
//!
//! 3. **Validation never clamps.** The chronology only reports invalid
//!    combinations. Recovery happens through a [`ResolveDate`] policy chosen
//!    by the caller.
//!
//! 4. **Capability-based field access.** Value types expose themselves
//!    through [`Calendrical`], and [`FieldMap`] merges several of them into
//!    one consistent field set for cross-type construction.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `almanac-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All fallible operations return [`CalendarError`].

pub mod calendrical;
pub mod chronology;
pub mod error;
pub mod field;
pub mod resolver;

// Re-export primary types for ergonomic imports.
pub use calendrical::{Calendrical, FieldMap};
pub use chronology::{Era, IsoChronology, RawDate, MAX_YEAR, MIN_YEAR};
pub use error::CalendarError;
pub use field::{DateTimeField, FieldRule, PeriodUnit, DATE_TIME_FIELD_COUNT};
pub use resolver::{DateResolver, ResolveDate};
