//! # Time Zones — Offset Lookup Seam
//!
//! The engine treats a zone as an identifier plus two lookups: the offset in
//! force at an instant, and the valid offsets for a local date-time. Rule
//! databases live outside this crate; they plug in by implementing
//! [`TimeZone`]. Two stand-ins are provided:
//!
//! - [`FixedOffsetZone`]: one offset forever.
//! - [`TransitionZone`]: an initial offset plus an ordered list of
//!   transitions, enough to model daylight-saving gaps and overlaps.
//!
//! ## Local Date-Time Resolution
//!
//! A local date-time is unique, falls in a gap (skipped by a forward
//! transition) or in an overlap (repeated by a backward transition).
//! [`ResolutionPolicy`] decides what happens in the last two cases:
//!
//! | Policy | Overlap | Gap |
//! |--------|---------|-----|
//! | `Reject` | `AmbiguousLocalTime` | `NonExistentLocalTime` |
//! | `Earlier` | the pre-transition offset | pre-transition offset applied; local time moves forward by the gap length |
//! | `Later` | the post-transition offset | post-transition offset applied; local time moves back by the gap length |
//!
//! In an overlap, a caller-preferred offset that is one of the two valid
//! offsets is always retained, whatever the policy.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use almanac_core::CalendarError;

use crate::instant::Instant;
use crate::local_date_time::LocalDateTime;
use crate::offset::{ZoneOffset, MAX_OFFSET_SECONDS};

/// Offset rules for one zone.
pub trait TimeZone: std::fmt::Debug + Send + Sync {
    /// Stable identifier; zones with equal identifiers are equal.
    fn id(&self) -> &str;

    /// The offset in force at `instant`.
    fn offset_at(&self, instant: Instant) -> ZoneOffset;

    /// The valid offsets for `local`.
    fn local_offsets(&self, local: &LocalDateTime) -> LocalOffsets;
}

/// The valid offsets for a local date-time in some zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalOffsets {
    /// Exactly one offset is valid.
    Unique(ZoneOffset),
    /// No offset is valid: the local time was skipped.
    Gap {
        /// Offset in force before the transition.
        before: ZoneOffset,
        /// Offset in force after the transition.
        after: ZoneOffset,
    },
    /// Two offsets are valid: the local time occurs twice.
    Overlap {
        /// Offset of the first occurrence (before the transition).
        earlier: ZoneOffset,
        /// Offset of the second occurrence (after the transition).
        later: ZoneOffset,
    },
}

impl LocalOffsets {
    /// Whether `offset` makes the local date-time valid.
    pub fn is_valid_offset(&self, offset: ZoneOffset) -> bool {
        match *self {
            Self::Unique(o) => o == offset,
            Self::Gap { .. } => false,
            Self::Overlap { earlier, later } => offset == earlier || offset == later,
        }
    }
}

// ─── Zone handle ─────────────────────────────────────────────────────

/// A shared, cheaply cloned handle to a [`TimeZone`].
///
/// Equality and hashing use the identifier only.
#[derive(Clone)]
pub struct Zone(Arc<dyn TimeZone>);

impl Zone {
    /// Wrap a zone implementation in a shared handle.
    pub fn new(zone: impl TimeZone + 'static) -> Self {
        Self(Arc::new(zone))
    }

    /// A zone fixed at `offset`.
    pub fn fixed(offset: ZoneOffset) -> Self {
        Self::new(FixedOffsetZone::new(offset))
    }

    /// The UTC zone.
    pub fn utc() -> Self {
        Self::fixed(ZoneOffset::UTC)
    }

    /// The zone identifier.
    pub fn id(&self) -> &str {
        self.0.id()
    }

    /// The offset in force at `instant`.
    pub fn offset_at(&self, instant: Instant) -> ZoneOffset {
        self.0.offset_at(instant)
    }

    /// The valid offsets for `local`: one, none (a gap) or two (an overlap).
    pub fn local_offsets(&self, local: &LocalDateTime) -> LocalOffsets {
        self.0.local_offsets(local)
    }
}

impl PartialEq for Zone {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Zone {}

impl std::hash::Hash for Zone {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl std::fmt::Debug for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Zone").field(&self.id()).finish()
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

// ─── Fixed offset ────────────────────────────────────────────────────

/// A zone whose offset never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedOffsetZone {
    id: String,
    offset: ZoneOffset,
}

impl FixedOffsetZone {
    /// Identified as `UTC` for a zero offset, otherwise by the offset text.
    pub fn new(offset: ZoneOffset) -> Self {
        let id = if offset == ZoneOffset::UTC {
            "UTC".to_string()
        } else {
            offset.to_string()
        };
        Self { id, offset }
    }

    /// A fixed zone under a caller-chosen identifier, such as `Etc/GMT-2`.
    pub fn with_id(id: impl Into<String>, offset: ZoneOffset) -> Self {
        Self {
            id: id.into(),
            offset,
        }
    }

    /// The single offset of this zone.
    pub fn offset(&self) -> ZoneOffset {
        self.offset
    }
}

impl TimeZone for FixedOffsetZone {
    fn id(&self) -> &str {
        &self.id
    }

    fn offset_at(&self, _instant: Instant) -> ZoneOffset {
        self.offset
    }

    fn local_offsets(&self, _local: &LocalDateTime) -> LocalOffsets {
        LocalOffsets::Unique(self.offset)
    }
}

// ─── Transition list ─────────────────────────────────────────────────

/// A change of offset at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Epoch second at which `offset` takes effect.
    pub epoch_second: i64,
    /// The offset from that instant on.
    pub offset: ZoneOffset,
}

/// A zone defined by an initial offset and strictly ordered transitions.
///
/// # Invariants
///
/// Transition instants are strictly increasing, and each one stays a full
/// offset span away from the ends of `i64` so its local wall-clock seconds
/// are representable. Deserialization checks both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TransitionZoneDef")]
pub struct TransitionZone {
    id: String,
    initial: ZoneOffset,
    transitions: Vec<Transition>,
}

#[derive(Deserialize)]
struct TransitionZoneDef {
    id: String,
    initial: ZoneOffset,
    #[serde(default)]
    transitions: Vec<Transition>,
}

impl TryFrom<TransitionZoneDef> for TransitionZone {
    type Error = CalendarError;

    fn try_from(def: TransitionZoneDef) -> Result<Self, Self::Error> {
        Self::new(def.id, def.initial, def.transitions)
    }
}

impl TransitionZone {
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidZone`] if the transitions are not in
    /// strictly increasing order, or if a transition instant lies within
    /// [`MAX_OFFSET_SECONDS`] of `i64::MIN` or `i64::MAX`.
    pub fn new(
        id: impl Into<String>,
        initial: ZoneOffset,
        transitions: Vec<Transition>,
    ) -> Result<Self, CalendarError> {
        let id = id.into();
        let limit = i64::MAX - i64::from(MAX_OFFSET_SECONDS);
        if let Some(t) = transitions.iter().find(|t| !(-limit..=limit).contains(&t.epoch_second)) {
            return Err(CalendarError::InvalidZone(format!(
                "{id}: transition at {} is outside the representable range",
                t.epoch_second
            )));
        }
        if let Some(pair) = transitions
            .windows(2)
            .find(|w| w[0].epoch_second >= w[1].epoch_second)
        {
            return Err(CalendarError::InvalidZone(format!(
                "{id}: transition at {} does not follow {}",
                pair[1].epoch_second, pair[0].epoch_second
            )));
        }
        Ok(Self {
            id,
            initial,
            transitions,
        })
    }

    /// The transitions in time-line order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }
}

impl TimeZone for TransitionZone {
    fn id(&self) -> &str {
        &self.id
    }

    fn offset_at(&self, instant: Instant) -> ZoneOffset {
        let index = self
            .transitions
            .partition_point(|t| t.epoch_second <= instant.epoch_second());
        match index {
            0 => self.initial,
            i => self.transitions[i - 1].offset,
        }
    }

    fn local_offsets(&self, local: &LocalDateTime) -> LocalOffsets {
        // Transitions fall on whole seconds, so the floored local second
        // classifies the local date-time exactly.
        let local_second = local.to_epoch_second(ZoneOffset::UTC);
        let mut before = self.initial;
        for transition in &self.transitions {
            let after = transition.offset;
            let at_before = transition.epoch_second.saturating_add(i64::from(before.total_seconds()));
            let at_after = transition.epoch_second.saturating_add(i64::from(after.total_seconds()));
            if local_second < at_before.min(at_after) {
                return LocalOffsets::Unique(before);
            }
            if local_second < at_before.max(at_after) {
                return if at_after > at_before {
                    LocalOffsets::Gap { before, after }
                } else {
                    LocalOffsets::Overlap {
                        earlier: before,
                        later: after,
                    }
                };
            }
            before = after;
        }
        LocalOffsets::Unique(before)
    }
}

// ─── Resolution policy ───────────────────────────────────────────────

/// How a local date-time in a gap or overlap is mapped onto the time-line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionPolicy {
    /// Fail with `NonExistentLocalTime` or `AmbiguousLocalTime`.
    Reject,
    /// Use the offset in force before the transition.
    #[default]
    Earlier,
    /// Use the offset in force after the transition.
    Later,
}

impl ResolutionPolicy {
    /// Returns every policy.
    pub fn all() -> &'static [ResolutionPolicy] {
        &[Self::Reject, Self::Earlier, Self::Later]
    }

    /// Returns the snake_case identifier of this policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Earlier => "earlier",
            Self::Later => "later",
        }
    }

    /// Map `local` in `zone` to a valid local date-time and its offset.
    ///
    /// `preferred` is kept in an overlap when it is one of the two valid
    /// offsets; zoned values pass their current offset here.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::NonExistentLocalTime`] / [`CalendarError::AmbiguousLocalTime`]
    ///   under `Reject`.
    /// - [`CalendarError::FieldOutOfRange`] if a gap shift leaves the year rule.
    pub fn resolve(
        &self,
        zone: &Zone,
        local: LocalDateTime,
        preferred: Option<ZoneOffset>,
    ) -> Result<(LocalDateTime, ZoneOffset), CalendarError> {
        match zone.local_offsets(&local) {
            LocalOffsets::Unique(offset) => Ok((local, offset)),
            LocalOffsets::Overlap { earlier, later } => {
                if let Some(offset) = preferred.filter(|o| *o == earlier || *o == later) {
                    return Ok((local, offset));
                }
                let offset = match self {
                    Self::Reject => {
                        return Err(CalendarError::AmbiguousLocalTime {
                            local: local.to_string(),
                            zone: zone.id().to_string(),
                        })
                    }
                    Self::Earlier => earlier,
                    Self::Later => later,
                };
                tracing::debug!(
                    zone = zone.id(),
                    %local,
                    %offset,
                    policy = self.as_str(),
                    "resolved local date-time in overlap"
                );
                Ok((local, offset))
            }
            LocalOffsets::Gap { before, after } => {
                let chosen = match self {
                    Self::Reject => {
                        return Err(CalendarError::NonExistentLocalTime {
                            local: local.to_string(),
                            zone: zone.id().to_string(),
                        })
                    }
                    Self::Earlier => before,
                    Self::Later => after,
                };
                let instant = local.to_instant(chosen);
                let offset = zone.offset_at(instant);
                let shifted = LocalDateTime::from_instant(instant, offset)?;
                tracing::debug!(
                    zone = zone.id(),
                    %local,
                    %shifted,
                    policy = self.as_str(),
                    "shifted local date-time out of gap"
                );
                Ok((shifted, offset))
            }
        }
    }
}

impl std::fmt::Display for ResolutionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
