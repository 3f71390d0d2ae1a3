//! # almanac-time — Calendrical Value Types
//!
//! Immutable date and time values built on the `almanac-core` engine. Every
//! value is validated on construction, and every `with_*` / `plus_*`
//! operation returns a new valid value or a [`CalendarError`].
//!
//! ## Value Types
//!
//! | Type | Fields |
//! |------|--------|
//! | [`Year`] | proleptic year |
//! | [`MonthOfYear`] | month |
//! | [`DayOfMonth`] | day of month |
//! | [`DayOfWeek`] | ISO day of week, derived only |
//! | [`MonthDay`] | month, day |
//! | [`YearMonth`] | year, month |
//! | [`LocalDate`] | year, month, day |
//! | [`LocalTime`] | hour, minute, second, nanosecond |
//! | [`LocalDateTime`] | date, time |
//! | [`OffsetDateTime`] | date, time, [`ZoneOffset`] |
//! | [`ZonedDateTime`] | date, time, offset, [`Zone`] |
//!
//! ## Key Design Principles
//!
//! 1. **Raw fields only.** Projections such as [`LocalDate::year_month`] are
//!    computed on demand, never stored.
//!
//! 2. **Resolution is explicit.** Arithmetic that can produce an invalid
//!    date uses `PreviousValid` by default and has a `*_with` variant taking
//!    a resolver or a [`CalendarPolicy`].
//!
//! 3. **Zones are collaborators.** The engine needs only the [`TimeZone`]
//!    lookups; rule databases plug in from outside.
//!
//! 4. **Field vs. duration arithmetic.** Zoned values offer both, and they
//!    differ across transitions.
//!
//! ## Crate Policy
//!
//! - Depends only on `almanac-core` within the workspace.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

mod arith;

pub mod day_of_month;
pub mod day_of_week;
pub mod instant;
pub mod local_date;
pub mod local_date_time;
pub mod local_time;
pub mod month;
pub mod month_day;
pub mod offset;
pub mod offset_date_time;
pub mod policy;
pub mod year;
pub mod year_month;
pub mod zone;
pub mod zoned_date_time;

#[cfg(feature = "chrono")]
pub mod interop;

// Re-export primary types for ergonomic imports.
pub use almanac_core::{CalendarError, Calendrical, DateResolver, DateTimeField, ResolveDate};
pub use day_of_month::DayOfMonth;
pub use day_of_week::DayOfWeek;
pub use instant::Instant;
pub use local_date::LocalDate;
pub use local_date_time::LocalDateTime;
pub use local_time::LocalTime;
pub use month::MonthOfYear;
pub use month_day::MonthDay;
pub use offset::{ZoneOffset, MAX_OFFSET_SECONDS};
pub use offset_date_time::OffsetDateTime;
pub use policy::CalendarPolicy;
pub use year::Year;
pub use year_month::YearMonth;
pub use zone::{FixedOffsetZone, LocalOffsets, ResolutionPolicy, TimeZone, Transition, TransitionZone, Zone};
pub use zoned_date_time::ZonedDateTime;
