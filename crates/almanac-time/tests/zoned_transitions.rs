//! # Zoned Arithmetic Across Transitions
//!
//! End-to-end checks of the zone seam: a transition zone loaded from a YAML
//! fixture, resolution policies loaded from YAML, the field-vs-duration
//! divergence at a daylight-saving gap, and zone rebasing.

use proptest::prelude::*;

use almanac_time::{
    CalendarError, CalendarPolicy, DateResolver, Instant, LocalDateTime, LocalOffsets,
    ResolutionPolicy, TransitionZone, Zone, ZoneOffset, ZonedDateTime,
};

/// +01:00, springing to +02:00 at 2008-03-30T01:00Z and falling back at
/// 2008-10-26T01:00Z: a local gap 02:00-03:00 on 30 March and a local
/// overlap 02:00-03:00 on 26 October.
const EUROPE_LIKE: &str = r#"
id: Test/Central
initial: 3600
transitions:
  - epoch_second: 1206838800
    offset: 7200
  - epoch_second: 1224982800
    offset: 3600
"#;

fn central() -> Zone {
    let zone: TransitionZone = serde_yaml::from_str(EUROPE_LIKE).unwrap();
    Zone::new(zone)
}

fn ldt(mo: u8, d: u8, h: u8, mi: u8) -> LocalDateTime {
    LocalDateTime::of(2008, mo, d, h, mi, 0, 0).unwrap()
}

fn hours(h: i8) -> ZoneOffset {
    ZoneOffset::of_hours(h).unwrap()
}

#[test]
fn fixture_transitions_land_on_expected_local_times() {
    let zone = central();
    assert_eq!(zone.local_offsets(&ldt(3, 30, 1, 59)), LocalOffsets::Unique(hours(1)));
    assert_eq!(
        zone.local_offsets(&ldt(3, 30, 2, 30)),
        LocalOffsets::Gap { before: hours(1), after: hours(2) }
    );
    assert_eq!(zone.local_offsets(&ldt(3, 30, 3, 0)), LocalOffsets::Unique(hours(2)));
    assert_eq!(
        zone.local_offsets(&ldt(10, 26, 2, 30)),
        LocalOffsets::Overlap { earlier: hours(2), later: hours(1) }
    );
}

#[test]
fn fixture_with_unordered_transitions_is_rejected() {
    let yaml = r#"
id: Test/Broken
initial: 0
transitions:
  - epoch_second: 100
    offset: 3600
  - epoch_second: 50
    offset: 0
"#;
    let err = serde_yaml::from_str::<TransitionZone>(yaml).unwrap_err();
    assert!(err.to_string().contains("Test/Broken"));
}

#[test]
fn plus_hours_by_field_and_by_duration_diverge_in_gap() {
    let start = ZonedDateTime::of(ldt(3, 30, 1, 30), central()).unwrap();

    let by_field = start.plus_hours(2).unwrap();
    assert_eq!(by_field.date_time(), ldt(3, 30, 3, 30));
    assert_eq!(by_field.to_epoch_second() - start.to_epoch_second(), 3_600);

    let by_duration = start.plus_hours_duration(2).unwrap();
    assert_eq!(by_duration.date_time(), ldt(3, 30, 4, 30));
    assert_eq!(by_duration.to_epoch_second() - start.to_epoch_second(), 7_200);
}

#[test]
fn policy_from_yaml_drives_gap_resolution() {
    let start = ZonedDateTime::of(ldt(3, 30, 1, 30), central()).unwrap();

    let reject = CalendarPolicy::from_yaml_str("local_resolution: reject").unwrap();
    let err = start.plus_hours_with(1, &reject).unwrap_err();
    assert!(matches!(err, CalendarError::NonExistentLocalTime { ref zone, .. } if zone == "Test/Central"));

    let later = CalendarPolicy::from_yaml_str("local_resolution: later").unwrap();
    assert_eq!(start.plus_hours_with(1, &later).unwrap().date_time(), ldt(3, 30, 1, 30));

    let default = CalendarPolicy::from_yaml_str("{}").unwrap();
    assert_eq!(start.plus_hours_with(1, &default).unwrap().date_time(), ldt(3, 30, 3, 30));
}

#[test]
fn policy_combines_date_resolver_and_zone_resolution() {
    let policy = CalendarPolicy::new(DateResolver::NextValid, ResolutionPolicy::Reject);
    let start = ZonedDateTime::of(LocalDateTime::of(2008, 1, 31, 12, 0, 0, 0).unwrap(), central())
        .unwrap();
    let moved = start.plus_months_with(1, &policy).unwrap();
    assert_eq!(moved.date_time(), ldt(3, 1, 12, 0));
    assert!(start.plus_months_with(1, &CalendarPolicy::strict()).unwrap_err().is_invalid_field());
}

#[test]
fn overlap_resolution_and_switching() {
    let local = ldt(10, 26, 2, 30);
    let earlier = ZonedDateTime::of(local, central()).unwrap();
    assert_eq!(earlier.offset(), hours(2));

    let strict = CalendarPolicy::strict();
    assert!(matches!(
        ZonedDateTime::of_with(local, central(), &strict).unwrap_err(),
        CalendarError::AmbiguousLocalTime { .. }
    ));

    let later = earlier.with_later_offset_at_overlap();
    assert_eq!(later.offset(), hours(1));
    assert_eq!(later.to_epoch_second() - earlier.to_epoch_second(), 3_600);
    assert!(earlier < later);
}

#[test]
fn rebasing_between_zones() {
    let utc = ZonedDateTime::of(ldt(3, 30, 1, 30), Zone::utc()).unwrap();

    let same_instant = utc.with_zone_same_instant(central()).unwrap();
    assert_eq!(same_instant.date_time(), ldt(3, 30, 3, 30));
    assert!(same_instant.is_same_instant(&utc));

    // 01:30 exists in the new zone; the instant moves instead
    let same_fields = utc.with_zone_same_fields(central()).unwrap();
    assert_eq!(same_fields.date_time(), utc.date_time());
    assert_eq!(same_fields.offset(), hours(1));
    assert_eq!(utc.to_epoch_second() - same_fields.to_epoch_second(), 3_600);

    // 02:30 is in the gap
    let gap = ZonedDateTime::of(ldt(3, 30, 2, 30), Zone::utc()).unwrap();
    assert_eq!(gap.with_zone_same_fields(central()).unwrap().date_time(), ldt(3, 30, 3, 30));
    assert!(gap.with_zone_same_fields_with(central(), &CalendarPolicy::strict()).is_err());
}

#[test]
fn cross_zone_comparison_is_by_instant() {
    let paris = ZonedDateTime::of(ldt(6, 1, 12, 0), central()).unwrap();
    let new_york = ZonedDateTime::of(ldt(6, 1, 6, 30), Zone::fixed(hours(-4))).unwrap();
    // 10:00Z vs 10:30Z: later local fields do not make paris later
    assert!(paris.is_before(&new_york));
    assert!(new_york.is_after(&paris));
    assert!(paris.to_offset_date_time() < new_york.to_offset_date_time());
}

proptest! {
    /// Reading an instant in a zone and re-resolving its local fields in the
    /// same zone returns the same instant, including inside the overlap.
    #[test]
    fn of_instant_then_same_fields_is_stable(second in 1_206_000_000i64..1_226_000_000) {
        let instant = Instant::of_epoch_second(second, 0).unwrap();
        let zoned = ZonedDateTime::of_instant(instant, central()).unwrap();
        let again = zoned.with_zone_same_fields(central()).unwrap();
        prop_assert_eq!(again.to_instant(), instant);
        prop_assert_eq!(&again, &zoned);
    }

    /// Duration-based addition moves the instant by exactly the amount.
    #[test]
    fn duration_addition_is_exact(second in 1_206_000_000i64..1_226_000_000, delta in -200_000i64..200_000) {
        let zoned = ZonedDateTime::of_instant(Instant::of_epoch_second(second, 0).unwrap(), central())
            .unwrap();
        let moved = zoned.plus_seconds_duration(delta).unwrap();
        prop_assert_eq!(moved.to_epoch_second() - zoned.to_epoch_second(), delta);
    }

    /// Field-based day addition keeps the wall-clock time unless it lands in
    /// the gap.
    #[test]
    fn plus_days_keeps_wall_clock(second in 1_200_000_000i64..1_230_000_000, days in -60i64..60) {
        let zoned = ZonedDateTime::of_instant(Instant::of_epoch_second(second, 0).unwrap(), central())
            .unwrap();
        let moved = zoned.plus_days(days).unwrap();
        let target = zoned.date_time().plus_days(days).unwrap();
        match central().local_offsets(&target) {
            LocalOffsets::Gap { .. } => prop_assert!(moved.date_time() > target),
            _ => prop_assert_eq!(moved.date_time(), target),
        }
    }
}
