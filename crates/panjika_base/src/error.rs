//! Error type for angle arithmetic and classification.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from domain-level validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum DomainError {
    /// A segment span was zero, negative or not finite.
    NonPositiveSpan(f64),
    /// An angle to classify was NaN or infinite.
    NonFiniteAngle(f64),
    /// A configuration value is out of range.
    InvalidConfig(&'static str),
    /// A geographic location is out of range.
    InvalidLocation(&'static str),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveSpan(span) => write!(f, "segment span must be positive, got {span}"),
            Self::NonFiniteAngle(angle) => write!(f, "angle must be finite, got {angle}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
        }
    }
}

impl Error for DomainError {}
