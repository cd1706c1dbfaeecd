//! Low-precision nutation and mean obliquity.
//!
//! Nutation keeps the four largest lunisolar terms of IAU 2000B, which
//! is good to about half an arcsecond in longitude. The Delaunay
//! arguments are the full IERS polynomials.
//!
//! Sources: IERS Conventions 2010, Tables 5.2e and 5.3b; mean obliquity
//! from IAU 2006 (Hilton et al. 2006).

use std::f64::consts::TAU;

/// Arcseconds to radians.
const AS2RAD: f64 = TAU / 1_296_000.0;

/// The five Delaunay fundamental arguments `[l, l', F, D, Ω]` in radians.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let l = (485868.249036 + 1717915923.2178 * t + 31.8792 * t2 + 0.051635 * t3 - 0.00024470 * t4)
        * AS2RAD;
    let lp = (1287104.79305 + 129596581.0481 * t - 0.5532 * t2 + 0.000136 * t3 - 0.00001149 * t4)
        * AS2RAD;
    let f = (335779.526232 + 1739527262.8478 * t - 12.7512 * t2 - 0.001037 * t3 + 0.00000417 * t4)
        * AS2RAD;
    let d = (1072260.70369 + 1602961601.2090 * t - 6.3706 * t2 + 0.006593 * t3 - 0.00003169 * t4)
        * AS2RAD;
    let om =
        (450160.398036 - 6962890.5431 * t + 7.4722 * t2 + 0.007702 * t3 - 0.00005939 * t4) * AS2RAD;

    [l, lp, f, d, om]
}

/// Leading lunisolar terms, `[nl, nl', nF, nD, nΩ, S, S', C, C']`,
/// amplitudes in 0.1 μas.
#[rustfmt::skip]
static NUTATION_COEFFS: [[i64; 9]; 4] = [
    //  nl  nl'  nF   nD   nΩ       S_i         S'_i         C_i         C'_i
    [   0,   0,   0,   0,   1, -172064161,  -174666,   92052331,    9086],
    [   0,   0,   2,  -2,   2,  -13170906,    -1675,    5730336,   -3015],
    [   0,   0,   2,   0,   2,   -2276413,     -234,     978459,    -485],
    [   0,   0,   0,   0,   2,    2074554,      207,    -897492,     470],
];

/// Nutation in longitude and obliquity, `(Δψ, Δε)` in arcseconds.
pub fn nutation_arcsec(t: f64) -> (f64, f64) {
    let args = fundamental_arguments(t);

    let mut dpsi = 0.0;
    let mut deps = 0.0;
    for row in &NUTATION_COEFFS {
        let arg: f64 = row[..5]
            .iter()
            .zip(args.iter())
            .map(|(&n, &a)| n as f64 * a)
            .sum();
        dpsi += (row[5] as f64 + row[6] as f64 * t) * arg.sin();
        deps += (row[7] as f64 + row[8] as f64 * t) * arg.cos();
    }

    (dpsi * 1e-7, deps * 1e-7)
}

/// Mean obliquity of the ecliptic in degrees (IAU 2006).
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 84381.406 - 46.836769 * t - 0.0001831 * t * t + 0.00200340 * t * t * t;
    arcsec / 3600.0
}
