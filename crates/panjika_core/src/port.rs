//! The ephemeris port consumed by the panchang engines.
//!
//! Engines never talk to a concrete provider. Anything that can report
//! sidereal Sun/Moon longitudes and local sunrise/sunset implements
//! [`EphemerisPort`]; the built-in [`AnalyticEphemeris`](crate::AnalyticEphemeris)
//! is one such provider.

use panjika_time::{CivilDate, Instant};

use crate::error::EphemerisError;
use crate::location::GeoLocation;

/// Sidereal apparent geocentric longitudes, degrees in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Longitudes {
    pub sun_deg: f64,
    pub moon_deg: f64,
}

/// Sunrise and sunset for one local day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SunEvents {
    /// Both events occur; `sunrise < sunset`.
    Regular { sunrise: Instant, sunset: Instant },
    /// Sun stays below the horizon all day (polar night).
    NeverRises,
    /// Sun stays above the horizon all day (midnight sun).
    NeverSets,
}

impl SunEvents {
    /// `(sunrise, sunset)` when both occur.
    pub fn regular(self) -> Option<(Instant, Instant)> {
        match self {
            Self::Regular { sunrise, sunset } => Some((sunrise, sunset)),
            Self::NeverRises | Self::NeverSets => None,
        }
    }
}

/// Source of Sun/Moon positions and local sunrise/sunset.
pub trait EphemerisPort {
    /// Sidereal apparent longitudes of the Sun and Moon at an instant.
    fn longitudes(&self, instant: Instant) -> Result<Longitudes, EphemerisError>;

    /// Sunrise and sunset on `date`, read as the local mean time date at
    /// the location's longitude.
    fn sunrise_sunset(
        &self,
        date: CivilDate,
        location: &GeoLocation,
    ) -> Result<SunEvents, EphemerisError>;
}

impl<T: EphemerisPort + ?Sized> EphemerisPort for &T {
    fn longitudes(&self, instant: Instant) -> Result<Longitudes, EphemerisError> {
        (**self).longitudes(instant)
    }

    fn sunrise_sunset(
        &self,
        date: CivilDate,
        location: &GeoLocation,
    ) -> Result<SunEvents, EphemerisError> {
        (**self).sunrise_sunset(date, location)
    }
}
