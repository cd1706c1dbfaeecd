//! Deterministic ephemeris double for engine tests.
//!
//! Sun and Moon move at constant rates from an epoch, and the Sun rises and
//! sets at fixed local-mean-time hours every day, so every boundary has a
//! closed-form answer.

#![allow(dead_code)]

use panjika_base::normalize_360;
use panjika_core::{EphemerisError, EphemerisPort, GeoLocation, Longitudes, SunEvents};
use panjika_time::{CivilDate, Instant};

pub struct LinearEphemeris {
    pub epoch: Instant,
    pub sun0_deg: f64,
    pub sun_rate: f64,
    pub moon0_deg: f64,
    pub moon_rate: f64,
    pub sunrise_hour: f64,
    pub sunset_hour: f64,
    /// Replaces every day's events when set (polar tests).
    pub sun_events: Option<SunEvents>,
}

impl LinearEphemeris {
    /// Epoch 2024-01-01T00:00Z. Rates differ from the finder's mean rates
    /// so that root finding has to iterate.
    pub fn new(sun0_deg: f64, moon0_deg: f64) -> Self {
        Self {
            epoch: epoch(),
            sun0_deg,
            sun_rate: 1.0,
            moon0_deg,
            moon_rate: 13.0,
            sunrise_hour: 6.0,
            sunset_hour: 18.0,
            sun_events: None,
        }
    }

    pub fn polar(events: SunEvents) -> Self {
        Self {
            sun_events: Some(events),
            ..Self::new(0.0, 0.0)
        }
    }

    /// Instant `days` after the epoch.
    pub fn at(&self, days: f64) -> Instant {
        self.epoch.plus_days(days)
    }
}

impl EphemerisPort for LinearEphemeris {
    fn longitudes(&self, instant: Instant) -> Result<Longitudes, EphemerisError> {
        let d = instant.days_since(self.epoch);
        Ok(Longitudes {
            sun_deg: normalize_360(self.sun0_deg + self.sun_rate * d),
            moon_deg: normalize_360(self.moon0_deg + self.moon_rate * d),
        })
    }

    fn sunrise_sunset(
        &self,
        date: CivilDate,
        location: &GeoLocation,
    ) -> Result<SunEvents, EphemerisError> {
        if let Some(events) = self.sun_events {
            return Ok(events);
        }
        let local_midnight = Instant::from_jd_utc(date.jd_midnight())
            .plus_days(-location.longitude_deg / 360.0);
        Ok(SunEvents::Regular {
            sunrise: local_midnight.plus_seconds(self.sunrise_hour * 3600.0),
            sunset: local_midnight.plus_seconds(self.sunset_hour * 3600.0),
        })
    }
}

pub fn epoch() -> Instant {
    Instant::from_utc(2024, 1, 1, 0, 0, 0.0)
}

pub fn greenwich() -> GeoLocation {
    GeoLocation::sea_level(51.48, 0.0)
}

/// Assert two instants agree within `tol` seconds.
pub fn assert_close(actual: Instant, expected: Instant, tol: f64) {
    let diff = actual.seconds_since(expected);
    assert!(
        diff.abs() <= tol,
        "expected {expected}, got {actual} (diff {diff:.3} s)"
    );
}
