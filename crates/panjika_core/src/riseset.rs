//! Sunrise/sunset computation.
//!
//! Iterative hour-angle solution: find the transit near local noon, step
//! back (or forward) by the hour angle at which the Sun's centre reaches
//! the target altitude, then refine with the Sun's position at the event.
//!
//! Sources: standard spherical astronomy (Meeus ch. 15, Montenbruck &
//! Pfleger).

use std::f64::consts::{PI, TAU};

use panjika_time::{gmst_rad, jd_to_centuries, jd_utc_to_tt, local_sidereal_time_rad};

use crate::location::GeoLocation;
use crate::riseset_types::{RiseSetConfig, RiseSetEvent, RiseSetResult};
use crate::sun::{SolarEquatorial, solar_equatorial};

/// Maximum iterations for the rise/set refinement loop.
const MAX_ITERATIONS: usize = 5;

/// Convergence threshold in days (~0.086 seconds).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// IAU 2015 nominal solar radius in km (Resolution B3).
const SUN_RADIUS_KM: f64 = 696_000.0;

/// Sidereal rotation rate in radians per UT day.
const SIDEREAL_RATE: f64 = TAU * 1.002_737_811_911_354_6;

/// Approximate local solar noon JD from 0h UT JD and longitude.
///
/// `JD_noon = JD_0h + 0.5 - longitude_deg / 360`
pub fn approximate_local_noon_jd(jd_ut_midnight: f64, longitude_deg: f64) -> f64 {
    jd_ut_midnight + 0.5 - longitude_deg / 360.0
}

fn sun_at(jd_utc: f64) -> SolarEquatorial {
    solar_equatorial(jd_to_centuries(jd_utc_to_tt(jd_utc)))
}

/// Solar angular semidiameter in arcminutes.
fn solar_semidiameter_arcmin(distance_km: f64) -> f64 {
    (SUN_RADIUS_KM / distance_km).asin().to_degrees() * 60.0
}

/// Wrap an angle to [-π, π).
fn wrap_pi(angle: f64) -> f64 {
    (angle + PI).rem_euclid(TAU) - PI
}

/// Cosine of the hour angle at which the Sun reaches its target altitude.
fn cos_hour_angle(
    sun: &SolarEquatorial,
    location: &GeoLocation,
    config: &RiseSetConfig,
) -> f64 {
    let phi = location.latitude_rad();
    let sd = solar_semidiameter_arcmin(sun.distance_km);
    let h0 = config
        .target_altitude_deg(sd, location.altitude_m)
        .to_radians();
    (h0.sin() - phi.sin() * sun.dec_rad.sin()) / (phi.cos() * sun.dec_rad.cos())
}

/// Compute a single rise/set event for the Sun.
///
/// `jd_utc_noon` is the approximate local noon of the desired date; use
/// [`approximate_local_noon_jd`].
pub fn compute_rise_set(
    location: &GeoLocation,
    event: RiseSetEvent,
    jd_utc_noon: f64,
    config: &RiseSetConfig,
) -> RiseSetResult {
    let sun = sun_at(jd_utc_noon);
    let cos_h0 = cos_hour_angle(&sun, location, config);
    if cos_h0 > 1.0 {
        return RiseSetResult::NeverRises;
    }
    if cos_h0 < -1.0 {
        return RiseSetResult::NeverSets;
    }

    // Transit: correct noon by the Sun's hour angle at noon.
    let lst_noon = local_sidereal_time_rad(gmst_rad(jd_utc_noon), location.longitude_rad());
    let ha_noon = wrap_pi(lst_noon - sun.ra_rad);
    let jd_utc_transit = jd_utc_noon - ha_noon / SIDEREAL_RATE;

    let h0_days = cos_h0.acos() / SIDEREAL_RATE;
    let mut jd_utc_event = if event.is_rising() {
        jd_utc_transit - h0_days
    } else {
        jd_utc_transit + h0_days
    };

    for _ in 0..MAX_ITERATIONS {
        let sun_i = sun_at(jd_utc_event);
        let cos_h = cos_hour_angle(&sun_i, location, config);
        if cos_h > 1.0 {
            return RiseSetResult::NeverRises;
        }
        if cos_h < -1.0 {
            return RiseSetResult::NeverSets;
        }
        let h_target = cos_h.acos();
        let ha_target = if event.is_rising() { -h_target } else { h_target };

        let lst = local_sidereal_time_rad(gmst_rad(jd_utc_event), location.longitude_rad());
        let ha_actual = wrap_pi(lst - sun_i.ra_rad);

        let correction = wrap_pi(ha_target - ha_actual) / SIDEREAL_RATE;
        jd_utc_event += correction;
        if correction.abs() < CONVERGENCE_DAYS {
            break;
        }
    }

    RiseSetResult::Event {
        jd_utc: jd_utc_event,
        event,
    }
}
