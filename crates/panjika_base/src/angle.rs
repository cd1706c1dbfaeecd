//! Cyclic angle arithmetic.
//!
//! Every longitude computation in the workspace reduces through these
//! helpers; nothing else does its own modulo.

use crate::error::DomainError;

/// Reduce an angle to [0, 360).
///
/// A result that rounds up to exactly 360 is folded to 0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// How far `a` is ahead of `b` going forward around the circle, in [0, 360).
pub fn cyclic_diff(a: f64, b: f64) -> f64 {
    normalize_360(a - b)
}

/// Signed residual in (-180, 180].
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let r = normalize_360(deg);
    if r > 180.0 { r - 360.0 } else { r }
}

/// Zero-based segment containing `value` for segments of `span_deg`.
///
/// `floor(value / span)`, with negative values clamped to segment 0.
pub fn segment_index(value: f64, span_deg: f64) -> Result<u32, DomainError> {
    if !span_deg.is_finite() || span_deg <= 0.0 {
        return Err(DomainError::NonPositiveSpan(span_deg));
    }
    if !value.is_finite() {
        return Err(DomainError::NonFiniteAngle(value));
    }
    Ok((value / span_deg).floor().max(0.0) as u32)
}
