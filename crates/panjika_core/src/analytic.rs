//! Built-in analytic Sun/Moon provider.
//!
//! A self-contained [`EphemerisPort`] that needs no kernel files: Meeus
//! solar and lunar series, four-term nutation, an estimated ΔT and the
//! configured ayanamsha. Accurate to roughly 0.01° for the Sun and 0.003°
//! for the Moon, which places element transitions within a minute or two
//! and sunrise within about a minute.

use log::trace;
use panjika_time::{CivilDate, Instant, calendar_to_jd, jd_to_centuries, jd_utc_to_tt};

use crate::ayanamsha::{AyanamshaSystem, ayanamsha_true_deg};
use crate::error::EphemerisError;
use crate::location::GeoLocation;
use crate::moon::geometric_longitude_deg;
use crate::nutation::nutation_arcsec;
use crate::port::{EphemerisPort, Longitudes, SunEvents};
use crate::riseset::{approximate_local_noon_jd, compute_rise_set};
use crate::riseset_types::{RiseSetConfig, RiseSetEvent, RiseSetResult};
use crate::sun::apparent_longitude_deg;

/// First supported year (inclusive).
pub const FIRST_YEAR: i32 = 1900;
/// Last supported year (inclusive).
pub const LAST_YEAR: i32 = 2100;

/// Configuration for [`AnalyticEphemeris`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnalyticConfig {
    /// Sidereal reference system. Default: Lahiri.
    pub ayanamsha: AyanamshaSystem,
    /// Sunrise/sunset conventions.
    pub rise_set: RiseSetConfig,
}

impl AnalyticConfig {
    pub fn validate(&self) -> Result<(), EphemerisError> {
        self.rise_set.validate()
    }
}

/// Analytic ephemeris for 1900–2100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticEphemeris {
    config: AnalyticConfig,
    jd_min: f64,
    jd_max: f64,
}

impl AnalyticEphemeris {
    pub fn new(config: AnalyticConfig) -> Result<Self, EphemerisError> {
        config.validate()?;
        Ok(Self {
            config,
            jd_min: calendar_to_jd(FIRST_YEAR, 1, 1.0),
            jd_max: calendar_to_jd(LAST_YEAR + 1, 1, 1.0),
        })
    }

    pub fn config(&self) -> &AnalyticConfig {
        &self.config
    }

    fn check_range(&self, jd_utc: f64) -> Result<(), EphemerisError> {
        if jd_utc.is_finite() && jd_utc >= self.jd_min && jd_utc < self.jd_max {
            Ok(())
        } else {
            Err(EphemerisError::OutOfRange { jd_utc })
        }
    }
}

impl Default for AnalyticEphemeris {
    fn default() -> Self {
        Self {
            config: AnalyticConfig::default(),
            jd_min: calendar_to_jd(FIRST_YEAR, 1, 1.0),
            jd_max: calendar_to_jd(LAST_YEAR + 1, 1, 1.0),
        }
    }
}

impl EphemerisPort for AnalyticEphemeris {
    fn longitudes(&self, instant: Instant) -> Result<Longitudes, EphemerisError> {
        let jd_utc = instant.as_jd_utc();
        self.check_range(jd_utc)?;

        let t = jd_to_centuries(jd_utc_to_tt(jd_utc));
        let (dpsi, _) = nutation_arcsec(t);
        let ayanamsha = ayanamsha_true_deg(self.config.ayanamsha, t, dpsi);

        let sun_tropical = apparent_longitude_deg(t, dpsi);
        let moon_tropical = geometric_longitude_deg(t) + dpsi / 3600.0;

        Ok(Longitudes {
            sun_deg: (sun_tropical - ayanamsha).rem_euclid(360.0),
            moon_deg: (moon_tropical - ayanamsha).rem_euclid(360.0),
        })
    }

    fn sunrise_sunset(
        &self,
        date: CivilDate,
        location: &GeoLocation,
    ) -> Result<SunEvents, EphemerisError> {
        location.validate()?;
        let jd_noon = approximate_local_noon_jd(date.jd_midnight(), location.longitude_deg);
        self.check_range(jd_noon)?;

        let rise_set = &self.config.rise_set;
        let rise = compute_rise_set(location, RiseSetEvent::Sunrise, jd_noon, rise_set);
        let set = compute_rise_set(location, RiseSetEvent::Sunset, jd_noon, rise_set);

        let events = match (rise, set) {
            (RiseSetResult::Event { jd_utc: r, .. }, RiseSetResult::Event { jd_utc: s, .. }) => {
                SunEvents::Regular {
                    sunrise: Instant::from_jd_utc(r),
                    sunset: Instant::from_jd_utc(s),
                }
            }
            (RiseSetResult::NeverSets, _) | (_, RiseSetResult::NeverSets) => SunEvents::NeverSets,
            _ => SunEvents::NeverRises,
        };
        trace!("sun events for {date} at {location:?}: {events:?}");
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_new_default() {
        let built = AnalyticEphemeris::new(AnalyticConfig::default()).unwrap();
        assert_eq!(built, AnalyticEphemeris::default());
    }

    #[test]
    fn rejects_bad_config() {
        let mut cfg = AnalyticConfig::default();
        cfg.rise_set.refraction_arcmin = f64::NAN;
        assert!(AnalyticEphemeris::new(cfg).is_err());
    }

    #[test]
    fn out_of_range_epoch() {
        let eph = AnalyticEphemeris::default();
        let t = Instant::from_utc(2150, 1, 1, 0, 0, 0.0);
        assert!(matches!(
            eph.longitudes(t),
            Err(EphemerisError::OutOfRange { .. })
        ));
        let t = Instant::from_utc(1899, 12, 31, 23, 0, 0.0);
        assert!(eph.longitudes(t).is_err());
    }

    #[test]
    fn longitudes_in_range() {
        let eph = AnalyticEphemeris::default();
        for day in 0..30 {
            let t = Instant::from_utc(2024, 1, 1, 0, 0, 0.0).plus_days(day as f64 * 12.3);
            let l = eph.longitudes(t).unwrap();
            assert!((0.0..360.0).contains(&l.sun_deg));
            assert!((0.0..360.0).contains(&l.moon_deg));
        }
    }

    #[test]
    fn sunrise_rejects_invalid_location() {
        let eph = AnalyticEphemeris::default();
        let date = CivilDate::new(2024, 4, 14).unwrap();
        let bad = GeoLocation::sea_level(95.0, 0.0);
        assert!(matches!(
            eph.sunrise_sunset(date, &bad),
            Err(EphemerisError::InvalidLocation(_))
        ));
    }
}
