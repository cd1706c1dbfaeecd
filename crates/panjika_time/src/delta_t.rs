//! ΔT = TT − UT estimate.
//!
//! Polynomial fits of Espenak & Meeus (NASA, 2006) for 1900–2150. Outside
//! that span the long-term parabola is used. Good to a few seconds over
//! the twentieth and twenty-first centuries, which moves the Moon by
//! about a thousandth of a degree.

use crate::julian::{J2000_JD, SECONDS_PER_DAY};

/// Estimated ΔT in seconds for a decimal year.
pub fn delta_t_seconds(decimal_year: f64) -> f64 {
    let y = decimal_year;
    if (1900.0..1920.0).contains(&y) {
        let t = y - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
            - 0.000197 * t.powi(4)
    } else if (1920.0..1941.0).contains(&y) {
        let t = y - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3)
    } else if (1941.0..1961.0).contains(&y) {
        let t = y - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if (1961.0..1986.0).contains(&y) {
        let t = y - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if (1986.0..2005.0).contains(&y) {
        let t = y - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t.powi(2)
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if (2005.0..2050.0).contains(&y) {
        let t = y - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t.powi(2)
    } else if (2050.0..2150.0).contains(&y) {
        -20.0 + 32.0 * ((y - 1820.0) / 100.0).powi(2) - 0.5628 * (2150.0 - y)
    } else {
        -20.0 + 32.0 * ((y - 1820.0) / 100.0).powi(2)
    }
}

/// Decimal year for a Julian Date (UTC scale), sufficient for ΔT lookup.
pub fn jd_to_decimal_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / 365.25
}

/// Julian Date on the TT scale for a UTC Julian Date.
pub fn jd_utc_to_tt(jd_utc: f64) -> f64 {
    jd_utc + delta_t_seconds(jd_to_decimal_year(jd_utc)) / SECONDS_PER_DAY
}
