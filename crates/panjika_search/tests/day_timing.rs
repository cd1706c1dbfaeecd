//! Day segment partitions with fixed 06:00/18:00 sunrise and sunset.

mod common;

use common::{LinearEphemeris, greenwich};
use panjika_base::{Kalam, Vaar};
use panjika_core::{GeoLocation, SunEvents};
use panjika_search::{
    DaySegmentKind, DayTimingSegment, SearchError, compute_day_timings,
};
use panjika_time::CivilDate;

fn hm(seg: &DayTimingSegment) -> ((u32, u32), (u32, u32)) {
    let (s, e) = (seg.start.to_utc(), seg.end.to_utc());
    ((s.hour, s.minute), (e.hour, e.minute))
}

#[test]
fn monday_segments() {
    let eph = LinearEphemeris::new(0.0, 0.0);
    let date = CivilDate::new(2024, 1, 1).unwrap();
    let r = compute_day_timings(&eph, date, &greenwich()).unwrap();

    assert_eq!(r.weekday, Vaar::Somvaar);
    assert_eq!(hm(&r.rahu_kalam), ((7, 30), (9, 0)));
    assert_eq!(hm(&r.yama_gandam), ((10, 30), (12, 0)));
    assert_eq!(hm(&r.gulika_kalam), ((13, 30), (15, 0)));
    assert_eq!(hm(&r.abhijit_muhurat), ((11, 36), (12, 24)));
    assert!((r.abhijit_muhurat.duration_seconds() - 2880.0).abs() < 1e-6);

    // Night runs 18:00 to 06:00 in 90-minute parts.
    assert_eq!(hm(&r.night_rahu_kalam), ((19, 30), (21, 0)));
    assert_eq!(hm(&r.night_yama_gandam), ((22, 30), (0, 0)));
    assert_eq!(r.night_yama_gandam.end.to_utc().day, 2);
    assert_eq!(hm(&r.night_gulika_kalam), ((1, 30), (3, 0)));
}

#[test]
fn sunday_rahu_kalam_ends_at_sunset() {
    let eph = LinearEphemeris::new(0.0, 0.0);
    let date = CivilDate::new(2023, 12, 31).unwrap();
    let r = compute_day_timings(&eph, date, &greenwich()).unwrap();
    assert_eq!(r.weekday, Vaar::Ravivaar);
    assert_eq!(hm(&r.rahu_kalam), ((16, 30), (18, 0)));
    assert_eq!(r.rahu_kalam.end, r.sunset);
    assert_eq!(r.rahu_kalam.kind, DaySegmentKind::Day(Kalam::RahuKalam));
}

#[test]
fn segments_lie_within_their_half() {
    let eph = LinearEphemeris::new(0.0, 0.0);
    let mut date = CivilDate::new(2024, 1, 1).unwrap();
    for _ in 0..7 {
        let r = compute_day_timings(&eph, date, &greenwich()).unwrap();
        for seg in r.segments() {
            let (lo, hi) = match seg.kind {
                DaySegmentKind::Night(_) => (r.sunset, r.next_sunrise),
                _ => (r.sunrise, r.sunset),
            };
            assert!(lo <= seg.start && seg.end <= hi, "{} outside", seg.kind.label());
        }
        date = date.succ();
    }
}

#[test]
fn polar_day_is_unavailable() {
    for events in [SunEvents::NeverRises, SunEvents::NeverSets] {
        let eph = LinearEphemeris::polar(events);
        let date = CivilDate::new(2024, 6, 21).unwrap();
        let err = compute_day_timings(&eph, date, &greenwich()).unwrap_err();
        assert!(matches!(err, SearchError::DataUnavailable(_)), "got {err:?}");
    }
}

#[test]
fn invalid_location_rejected() {
    let eph = LinearEphemeris::new(0.0, 0.0);
    let date = CivilDate::new(2024, 1, 1).unwrap();
    let err = compute_day_timings(&eph, date, &GeoLocation::sea_level(0.0, f64::NAN)).unwrap_err();
    assert!(matches!(err, SearchError::Domain(_)), "got {err:?}");
}
