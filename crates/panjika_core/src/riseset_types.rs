//! Types for sunrise/sunset calculations.

use std::f64::consts::PI;

use crate::error::EphemerisError;

/// Mean Earth radius in meters (IAU nominal, for geometric dip).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Rise/set event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetEvent {
    /// Upper limb of the Sun appears at the horizon.
    Sunrise,
    /// Upper limb disappears below the horizon.
    Sunset,
}

impl RiseSetEvent {
    /// Whether this is a rising (morning) event.
    pub fn is_rising(self) -> bool {
        matches!(self, Self::Sunrise)
    }
}

/// Which point of the solar disc defines the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SunLimb {
    /// Upper limb touches the horizon (almanac convention).
    #[default]
    Upper,
    /// Disc centre at the horizon.
    Center,
}

/// Configurable parameters for rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.0.
    pub refraction_arcmin: f64,
    /// Limb convention. Default: upper limb.
    pub sun_limb: SunLimb,
    /// Whether to apply geometric dip for observer altitude.
    /// Approximation: dip = sqrt(2h/R) radians. Default: true.
    pub altitude_correction: bool,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            sun_limb: SunLimb::Upper,
            altitude_correction: true,
        }
    }
}

impl RiseSetConfig {
    pub fn validate(&self) -> Result<(), EphemerisError> {
        if !self.refraction_arcmin.is_finite() || !(0.0..=120.0).contains(&self.refraction_arcmin)
        {
            return Err(EphemerisError::InvalidConfig(
                "refraction_arcmin must be within [0, 120]",
            ));
        }
        Ok(())
    }

    /// Geometric altitude of the Sun's centre at the event, in degrees.
    ///
    /// `h0 = -(refraction + semidiameter) / 60 - dip`, where the
    /// semidiameter term only applies to the upper limb.
    pub fn target_altitude_deg(&self, semidiameter_arcmin: f64, altitude_m: f64) -> f64 {
        let sd = match self.sun_limb {
            SunLimb::Upper => semidiameter_arcmin,
            SunLimb::Center => 0.0,
        };
        let mut depression = (self.refraction_arcmin + sd) / 60.0;
        if self.altitude_correction && altitude_m > 0.0 {
            let dip_rad = (2.0 * altitude_m / EARTH_RADIUS_M).sqrt();
            depression += dip_rad * (180.0 / PI);
        }
        -depression
    }
}

/// Result of a single rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// Event occurs at the given Julian Date (UTC).
    Event { jd_utc: f64, event: RiseSetEvent },
    /// Sun never rises during this day (polar night).
    NeverRises,
    /// Sun never sets during this day (midnight sun).
    NeverSets,
}
