//! Panchang engine behaviour against a linear ephemeris, where every
//! boundary has an exact answer.

mod common;

use common::{LinearEphemeris, assert_close, greenwich};
use panjika_base::{DomainError, Karana, Nakshatra, Paksha, Tithi, Vaar, Yoga, tithi_index};
use panjika_core::{EphemerisPort, GeoLocation, SunEvents};
use panjika_search::{
    PanchangConfig, SearchError, TransitionConfig, compute_panchang, elongation_at,
};

/// Sun 10°, Moon 15° at the epoch: elongation 5 + 12 d, Moon 15 + 13 d,
/// sum 25 + 14 d.
fn linear() -> LinearEphemeris {
    LinearEphemeris::new(10.0, 15.0)
}

#[test]
fn elements_and_boundaries_at_sunrise() {
    let eph = linear();
    let t = eph.at(0.25);
    let p = compute_panchang(&eph, t, &greenwich(), &PanchangConfig::default()).unwrap();

    // Elongation 8°: tithi 1, karana 2.
    assert_eq!(p.tithi.state.index, 1);
    assert_eq!(p.tithi.tithi, Tithi::ShuklaPratipada);
    assert_eq!(p.tithi.paksha, Paksha::Shukla);
    assert_eq!(p.tithi.tithi_in_paksha, 1);
    assert_close(p.tithi.state.start, eph.at(-5.0 / 12.0), 5.0);
    assert_close(p.tithi.state.end, eph.at(7.0 / 12.0), 5.0);

    assert_eq!(p.karana.state.index, 2);
    assert_eq!(p.karana.karana, Karana::Bava);
    assert_close(p.karana.state.start, eph.at(1.0 / 12.0), 5.0);
    assert_close(p.karana.state.end, eph.at(7.0 / 12.0), 5.0);

    // Moon 18.25°: nakshatra 2, pada 2.
    assert_eq!(p.nakshatra.state.index, 2);
    assert_eq!(p.nakshatra.nakshatra, Nakshatra::Bharani);
    assert_eq!(p.nakshatra.pada, 2);
    assert_close(p.nakshatra.state.start, eph.at((40.0 / 3.0 - 15.0) / 13.0), 5.0);
    assert_close(p.nakshatra.state.end, eph.at((80.0 / 3.0 - 15.0) / 13.0), 5.0);

    // Sum 28.5°: yoga 3.
    assert_eq!(p.yoga.state.index, 3);
    assert_eq!(p.yoga.yoga, Yoga::Ayushman);
    assert_close(p.yoga.state.start, eph.at((80.0 / 3.0 - 25.0) / 14.0), 5.0);
    assert_close(p.yoga.state.end, eph.at(15.0 / 14.0), 5.0);

    // 06:00 on Monday 2024-01-01 is exactly sunrise.
    assert_eq!(p.vaar.vaar, Vaar::Somvaar);
    assert_eq!(p.vaar.state.index, 1);
    assert_close(p.vaar.state.start, t, 1e-3);
    assert_close(p.vaar.state.end, eph.at(1.25), 1e-3);
}

#[test]
fn every_state_brackets_the_query() {
    let eph = linear();
    for step in 0..20 {
        let t = eph.at(step as f64 * 0.37);
        let p = compute_panchang(&eph, t, &greenwich(), &PanchangConfig::default()).unwrap();
        for state in [
            p.tithi.state,
            p.nakshatra.state,
            p.yoga.state,
            p.karana.state,
            p.vaar.state,
        ] {
            assert!(
                state.start <= t && t < state.end,
                "{:?} {} not bracketing {t}: {}..{}",
                state.element,
                state.index,
                state.start,
                state.end
            );
        }
    }
}

#[test]
fn classification_flips_at_found_end() {
    let eph = linear();
    let p = compute_panchang(&eph, eph.at(0.25), &greenwich(), &PanchangConfig::default())
        .unwrap();
    let end = p.tithi.state.end;
    let before = eph.longitudes(end.plus_seconds(-10.0)).unwrap();
    let after = eph.longitudes(end.plus_seconds(10.0)).unwrap();
    assert_eq!(tithi_index(before.sun_deg, before.moon_deg).unwrap(), 1);
    assert_eq!(tithi_index(after.sun_deg, after.moon_deg).unwrap(), 2);
}

#[test]
fn instant_before_sunrise_belongs_to_previous_weekday() {
    let eph = linear();
    // 03:00 Monday, before the 06:00 sunrise: still Sunday's Vedic day.
    let p = compute_panchang(&eph, eph.at(0.125), &greenwich(), &PanchangConfig::default())
        .unwrap();
    assert_eq!(p.vaar.vaar, Vaar::Ravivaar);
    assert_eq!(p.vaar.state.index, 0);
    assert_close(p.vaar.state.start, eph.at(-0.75), 1e-3);
    assert_close(p.vaar.state.end, eph.at(0.25), 1e-3);
}

#[test]
fn tithi_is_monotone_over_a_synodic_cycle() {
    let eph = linear();
    let config = PanchangConfig::default();
    let mut prev = compute_panchang(&eph, eph.at(0.0), &greenwich(), &config)
        .unwrap()
        .tithi
        .state
        .index;
    for step in 1..=62 {
        let t = eph.at(step as f64 * 0.5);
        let idx = compute_panchang(&eph, t, &greenwich(), &config)
            .unwrap()
            .tithi
            .state
            .index;
        assert!((1..=30).contains(&idx));
        let advance = (idx as i64 - prev as i64).rem_euclid(30);
        assert!(advance <= 1, "tithi jumped from {prev} to {idx}");
        prev = idx;
    }
}

#[test]
fn repeated_queries_are_identical() {
    let eph = linear();
    let t = eph.at(3.3);
    let config = PanchangConfig::default();
    let a = compute_panchang(&eph, t, &greenwich(), &config).unwrap();
    let b = compute_panchang(&eph, t, &greenwich(), &config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn spillover_only_inside_window() {
    let eph = linear();
    let t = eph.at(0.25);
    let p = compute_panchang(&eph, t, &greenwich(), &PanchangConfig::default()).unwrap();

    // Tithi started 16 h ago and ends in 8 h.
    assert_eq!(p.tithi.state.previous, None);
    assert_eq!(p.tithi.state.next, None);
    // Karana started 4 h ago.
    assert_eq!(p.karana.state.previous, Some(1));
    assert_eq!(p.karana.state.next, None);
    // Query sits on sunrise.
    assert_eq!(p.vaar.state.previous, Some(0));

    let off = PanchangConfig {
        spillover_window_hours: 0.0,
        ..PanchangConfig::default()
    };
    let p = compute_panchang(&eph, t, &greenwich(), &off).unwrap();
    assert_eq!(p.karana.state.previous, None);
    assert_eq!(p.vaar.state.previous, None);
}

#[test]
fn spillover_wraps_the_cycle() {
    // Elongation 359° one hour before new moon: tithi 30, next is 1.
    let eph = LinearEphemeris::new(0.0, 359.0);
    let p = compute_panchang(&eph, eph.at(0.0), &greenwich(), &PanchangConfig::default())
        .unwrap();
    assert_eq!(p.tithi.tithi, Tithi::Amavasya);
    assert_eq!(p.tithi.state.next, Some(1));
    assert_eq!(p.karana.karana, Karana::Naga);
    assert_eq!(p.karana.state.next, Some(1));
}

#[test]
fn iteration_cap_reports_no_convergence() {
    let eph = linear();
    let config = PanchangConfig {
        transition: TransitionConfig {
            max_iterations: 1,
            ..TransitionConfig::default()
        },
        ..PanchangConfig::default()
    };
    let err = compute_panchang(&eph, eph.at(0.25), &greenwich(), &config).unwrap_err();
    assert!(matches!(err, SearchError::NoConvergence(_)), "got {err:?}");
}

#[test]
fn polar_location_has_no_vaar() {
    let eph = LinearEphemeris::polar(SunEvents::NeverRises);
    let err = compute_panchang(&eph, eph.at(0.25), &greenwich(), &PanchangConfig::default())
        .unwrap_err();
    assert!(matches!(err, SearchError::DataUnavailable(_)), "got {err:?}");
}

#[test]
fn invalid_location_rejected_first() {
    let eph = linear();
    let bad = GeoLocation::sea_level(95.0, 0.0);
    let err =
        compute_panchang(&eph, eph.at(0.25), &bad, &PanchangConfig::default()).unwrap_err();
    assert!(
        matches!(err, SearchError::Domain(DomainError::InvalidLocation(_))),
        "got {err:?}"
    );
}

#[test]
fn elongation_helper_matches_port() {
    let eph = linear();
    let e = elongation_at(&eph, eph.at(1.0)).unwrap();
    assert!((e - 17.0).abs() < 1e-9, "elongation = {e}");
}
