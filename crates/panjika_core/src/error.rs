//! Error types for ephemeris providers.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors raised by an [`EphemerisPort`](crate::EphemerisPort) implementation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Requested epoch is outside the provider's supported range.
    OutOfRange { jd_utc: f64 },
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
    /// Invalid provider configuration.
    InvalidConfig(&'static str),
    /// Any other provider failure, carried as text.
    Provider(String),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { jd_utc } => {
                write!(f, "epoch JD {jd_utc} outside supported ephemeris range")
            }
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid ephemeris config: {msg}"),
            Self::Provider(msg) => write!(f, "ephemeris provider error: {msg}"),
        }
    }
}

impl Error for EphemerisError {}
