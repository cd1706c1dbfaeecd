//! Time primitives for the panjika workspace.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions
//! - [`Instant`], the UTC instant every engine consumes and produces
//! - [`CivilDate`] with local-mean-time and fixed-offset derivations
//! - Sidereal time and a ΔT estimate for the analytic ephemeris
//!
//! Enable the `chrono` feature for conversions to and from
//! `chrono::DateTime<Utc>`.

pub mod civil;
pub mod delta_t;
pub mod error;
pub mod instant;
pub mod julian;
pub mod sidereal;
pub mod utc_time;

pub use civil::CivilDate;
pub use delta_t::{delta_t_seconds, jd_to_decimal_year, jd_utc_to_tt};
pub use error::TimeError;
pub use instant::Instant;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar, jd_to_centuries,
    j2000_seconds_to_jd, jd_to_j2000_seconds,
};
pub use sidereal::{earth_rotation_angle_rad, gmst_rad, local_sidereal_time_rad};
pub use utc_time::UtcTime;
