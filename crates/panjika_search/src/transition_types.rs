//! Types for angular transition search.

use panjika_base::DomainError;

/// Mean Moon-Sun elongation rate in degrees per day.
pub const ELONGATION_RATE_DEG_PER_DAY: f64 = 12.19;
/// Mean sidereal lunar motion in degrees per day.
pub const MOON_RATE_DEG_PER_DAY: f64 = 13.18;
/// Mean rate of the Sun + Moon longitude sum in degrees per day.
pub const LONGITUDE_SUM_RATE_DEG_PER_DAY: f64 = 14.16;
/// Mean sidereal solar motion in degrees per day.
pub const SUN_RATE_DEG_PER_DAY: f64 = 0.9856;

/// Which crossing to look for relative to the starting instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchDirection {
    /// Next crossing after the start.
    Forward,
    /// Most recent crossing at or before the start.
    Backward,
}

/// Configuration for transition root finding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    /// Convergence threshold on the angle residual, degrees (default 1″).
    pub tolerance_deg: f64,
    /// Cap on angle evaluations, bracket widening included (default 64).
    pub max_iterations: u32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            tolerance_deg: 1.0 / 3600.0,
            max_iterations: 64,
        }
    }
}

impl TransitionConfig {
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.tolerance_deg.is_finite() || self.tolerance_deg <= 0.0 || self.tolerance_deg >= 1.0
        {
            return Err(DomainError::InvalidConfig(
                "tolerance_deg must be within (0, 1)",
            ));
        }
        if self.max_iterations == 0 {
            return Err(DomainError::InvalidConfig("max_iterations must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = TransitionConfig::default();
        assert!((c.tolerance_deg * 3600.0 - 1.0).abs() < 1e-12);
        assert_eq!(c.max_iterations, 64);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_zero_iterations() {
        let c = TransitionConfig {
            max_iterations: 0,
            ..TransitionConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_bad_tolerance() {
        for tol in [0.0, -1.0, f64::NAN, 2.0] {
            let c = TransitionConfig {
                tolerance_deg: tol,
                ..TransitionConfig::default()
            };
            assert!(c.validate().is_err(), "tol = {tol}");
        }
    }
}
