//! Low-precision solar theory.
//!
//! Geometric mean longitude, mean anomaly and equation of centre with
//! respect to the mean equinox of date, good to about 0.01°.
//!
//! Source: Meeus, *Astronomical Algorithms*, 2nd ed., ch. 25.

use std::f64::consts::TAU;

use crate::nutation::{mean_obliquity_deg, nutation_arcsec};

/// Annual aberration in longitude for the mean Earth-Sun distance, degrees.
const ABERRATION_DEG: f64 = 20.4898 / 3600.0;

/// Kilometres per astronomical unit.
pub const AU_KM: f64 = 149_597_870.7;

/// Geometric position of the Sun referred to the mean equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// True geometric longitude, degrees in [0, 360).
    pub true_longitude_deg: f64,
    /// Earth-Sun distance in AU.
    pub radius_au: f64,
}

/// Equatorial coordinates of the apparent Sun.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarEquatorial {
    pub ra_rad: f64,
    pub dec_rad: f64,
    pub distance_km: f64,
}

/// Geometric solar position at `t` Julian centuries of TT from J2000.0.
pub fn solar_position(t: f64) -> SolarPosition {
    let t2 = t * t;
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t2;
    let m = (357.52911 + 35999.05029 * t - 0.0001537 * t2).to_radians();
    let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t2;

    let c = (1.914602 - 0.004817 * t - 0.000014 * t2) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();

    let true_longitude_deg = (l0 + c).rem_euclid(360.0);
    let nu = m + c.to_radians();
    let radius_au = 1.000001018 * (1.0 - e * e) / (1.0 + e * nu.cos());

    SolarPosition {
        true_longitude_deg,
        radius_au,
    }
}

/// Apparent tropical longitude of the Sun, true equinox of date, degrees.
///
/// `dpsi_arcsec` is the nutation in longitude at `t`.
pub fn apparent_longitude_deg(t: f64, dpsi_arcsec: f64) -> f64 {
    apparent_from(solar_position(t), dpsi_arcsec)
}

fn apparent_from(pos: SolarPosition, dpsi_arcsec: f64) -> f64 {
    (pos.true_longitude_deg - ABERRATION_DEG / pos.radius_au + dpsi_arcsec / 3600.0)
        .rem_euclid(360.0)
}

/// Apparent right ascension, declination and distance of the Sun.
pub fn solar_equatorial(t: f64) -> SolarEquatorial {
    let pos = solar_position(t);
    let (dpsi, deps) = nutation_arcsec(t);
    let lambda = apparent_from(pos, dpsi).to_radians();
    let eps = (mean_obliquity_deg(t) + deps / 3600.0).to_radians();

    let ra_rad = (eps.cos() * lambda.sin()).atan2(lambda.cos()).rem_euclid(TAU);
    let dec_rad = (eps.sin() * lambda.sin()).asin();
    SolarEquatorial {
        ra_rad,
        dec_rad,
        distance_km: pos.radius_au * AU_KM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centuries(jd: f64) -> f64 {
        (jd - 2_451_545.0) / 36525.0
    }

    #[test]
    fn meeus_example_25a() {
        // 1992 October 13.0 TD: true longitude 199.90988°, R = 0.99766 AU
        let pos = solar_position(centuries(2_448_908.5));
        assert!(
            (pos.true_longitude_deg - 199.90988).abs() < 1e-3,
            "λ = {}",
            pos.true_longitude_deg
        );
        assert!((pos.radius_au - 0.99766).abs() < 1e-4, "R = {}", pos.radius_au);
    }

    #[test]
    fn meeus_example_25a_apparent() {
        // Apparent λ = 199.90895° (with the book's low-precision nutation)
        let t = centuries(2_448_908.5);
        let lambda = apparent_longitude_deg(t, nutation_arcsec(t).0);
        assert!((lambda - 199.90895).abs() < 2e-3, "λ = {lambda}");
    }

    #[test]
    fn meeus_example_25a_equatorial() {
        // α = 13h13m31.4s = 198.3808°, δ = -7°47′06″ = -7.7850°
        let eq = solar_equatorial(centuries(2_448_908.5));
        assert!((eq.ra_rad.to_degrees() - 198.3808).abs() < 0.01);
        assert!((eq.dec_rad.to_degrees() - -7.7850).abs() < 0.01);
    }

    #[test]
    fn equinox_near_zero_longitude() {
        // 2024-03-20 03:06 UTC vernal equinox
        let t = centuries(2_460_389.5 + 3.1 / 24.0);
        let lambda = apparent_longitude_deg(t, nutation_arcsec(t).0);
        let off = if lambda > 180.0 { lambda - 360.0 } else { lambda };
        assert!(off.abs() < 0.02, "λ = {lambda}");
    }
}
