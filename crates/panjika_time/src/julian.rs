//! Julian Date ↔ Gregorian calendar conversions.
//!
//! Standard algorithm (Meeus, *Astronomical Algorithms*, ch. 7) for the
//! proleptic Gregorian calendar. Dates are UTC throughout this workspace;
//! no leap-second bookkeeping is applied.

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a Gregorian calendar date (with fractional day) to a Julian Date.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Convert a Julian Date to a Gregorian calendar date.
///
/// Returns `(year, month, day_frac)` where `day_frac` carries the time of
/// day as a fraction (e.g. 15.5 = 15th at 12:00).
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day_frac)
}

/// Julian Date to seconds past J2000.0.
pub fn jd_to_j2000_seconds(jd: f64) -> f64 {
    (jd - J2000_JD) * SECONDS_PER_DAY
}

/// Seconds past J2000.0 to Julian Date.
pub fn j2000_seconds_to_jd(s: f64) -> f64 {
    J2000_JD + s / SECONDS_PER_DAY
}

/// Julian centuries since J2000.0 for a Julian Date.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}
