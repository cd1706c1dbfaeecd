//! Error types for the panchang search engines.

use std::error::Error;
use std::fmt::{Display, Formatter};

use panjika_base::DomainError;
use panjika_core::EphemerisError;

/// Errors from panchang, Sankranti and day-timing queries.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Invalid input: bad span, non-finite angle, config or location.
    Domain(DomainError),
    /// Failure reported by the ephemeris port, passed through unchanged.
    Ephemeris(EphemerisError),
    /// Root finding exhausted its iteration cap.
    NoConvergence(&'static str),
    /// The port cannot supply a required event (e.g. no sunrise at polar
    /// latitudes).
    DataUnavailable(&'static str),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "domain error: {e}"),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
            Self::DataUnavailable(msg) => write!(f, "data unavailable: {msg}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::Ephemeris(e) => Some(e),
            Self::NoConvergence(_) | Self::DataUnavailable(_) => None,
        }
    }
}

impl From<DomainError> for SearchError {
    fn from(e: DomainError) -> Self {
        Self::Domain(e)
    }
}

impl From<EphemerisError> for SearchError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_wraps_inner() {
        let e = SearchError::from(DomainError::NonPositiveSpan(0.0));
        assert_eq!(
            e.to_string(),
            "domain error: segment span must be positive, got 0"
        );
        assert!(e.source().is_some());
    }

    #[test]
    fn ephemeris_error_passes_through() {
        let inner = EphemerisError::OutOfRange { jd_utc: 1.0 };
        assert_eq!(
            SearchError::from(inner.clone()),
            SearchError::Ephemeris(inner)
        );
    }
}
