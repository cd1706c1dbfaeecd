//! Ephemeris port and the built-in analytic provider.
//!
//! The panchang engines only see [`EphemerisPort`]: sidereal Sun/Moon
//! longitudes and local sunrise/sunset. [`AnalyticEphemeris`] implements it
//! from closed-form solar and lunar theories so the engines run without
//! external data files.

pub mod analytic;
pub mod ayanamsha;
pub mod error;
pub mod location;
pub mod moon;
pub mod nutation;
pub mod port;
pub mod riseset;
pub mod riseset_types;
pub mod sun;

pub use analytic::{AnalyticConfig, AnalyticEphemeris};
pub use ayanamsha::{AyanamshaSystem, ayanamsha_mean_deg, ayanamsha_true_deg};
pub use error::EphemerisError;
pub use location::GeoLocation;
pub use port::{EphemerisPort, Longitudes, SunEvents};
pub use riseset_types::{RiseSetConfig, RiseSetEvent, RiseSetResult, SunLimb};
