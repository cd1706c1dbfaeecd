//! Root finding for the instant a cyclic angle reaches a target value.
//!
//! Every panchang boundary (tithi, karana, nakshatra, yoga, Sankranti) is the
//! moment a monotonically increasing angle crosses a multiple of its span.
//! The finder seeds a bracket from the mean rate, widens it until the signed
//! residual changes sign, then refines with Illinois regula falsi.

use log::{debug, trace};
use panjika_base::{DomainError, cyclic_diff, normalize_to_pm180};
use panjika_time::Instant;

use crate::error::SearchError;
use crate::transition_types::{SearchDirection, TransitionConfig};

/// Brackets narrower than this are taken as converged, seconds.
const MIN_BRACKET_SECONDS: f64 = 1e-3;

/// Residual `angle(t) - target` in (-180, 180], with an evaluation budget.
struct Residual<'a, F> {
    angle_fn: F,
    target_deg: f64,
    evaluations: u32,
    config: &'a TransitionConfig,
}

impl<F> Residual<'_, F>
where
    F: FnMut(Instant) -> Result<f64, SearchError>,
{
    fn at(&mut self, t: Instant) -> Result<f64, SearchError> {
        if self.evaluations >= self.config.max_iterations {
            return Err(SearchError::NoConvergence(
                "transition search exhausted its iteration cap",
            ));
        }
        self.evaluations += 1;
        let angle = (self.angle_fn)(t)?;
        if !angle.is_finite() {
            return Err(DomainError::NonFiniteAngle(angle).into());
        }
        let r = normalize_to_pm180(angle - self.target_deg);
        trace!(
            "transition iter {}: t={} residual={r:.9}",
            self.evaluations,
            t.as_j2000_seconds()
        );
        Ok(r)
    }

    fn converged(&self, r: f64) -> bool {
        r.abs() < self.config.tolerance_deg
    }
}

/// Find the instant an increasing cyclic angle crosses `target_deg`.
///
/// `current_deg` is the angle at `from`; `rate_deg_per_day` is its mean
/// rate and only seeds the bracket. `Forward` returns the next crossing
/// after `from`, `Backward` the most recent crossing at or before it. When
/// the angle already sits on the target, `from` is returned.
///
/// Fails with [`SearchError::NoConvergence`] once `config.max_iterations`
/// angle evaluations are spent, bracket widening included.
pub fn find_transition<F>(
    angle_fn: F,
    from: Instant,
    current_deg: f64,
    target_deg: f64,
    rate_deg_per_day: f64,
    direction: SearchDirection,
    config: &TransitionConfig,
) -> Result<Instant, SearchError>
where
    F: FnMut(Instant) -> Result<f64, SearchError>,
{
    config.validate()?;
    if !rate_deg_per_day.is_finite() || rate_deg_per_day <= 0.0 {
        return Err(DomainError::InvalidConfig("transition rate must be positive").into());
    }
    for angle in [current_deg, target_deg] {
        if !angle.is_finite() {
            return Err(DomainError::NonFiniteAngle(angle).into());
        }
    }

    let distance = match direction {
        SearchDirection::Forward => cyclic_diff(target_deg, current_deg),
        SearchDirection::Backward => cyclic_diff(current_deg, target_deg),
    };
    if distance == 0.0 {
        return Ok(from);
    }

    let mut residual = Residual {
        angle_fn,
        target_deg,
        evaluations: 0,
        config,
    };

    let (lo, f_lo, hi, f_hi) = match direction {
        SearchDirection::Forward => {
            bracket_forward(&mut residual, from, distance, rate_deg_per_day)?
        }
        SearchDirection::Backward => {
            bracket_backward(&mut residual, from, distance, rate_deg_per_day)?
        }
    };
    if residual.converged(f_lo) {
        return Ok(lo);
    }
    if residual.converged(f_hi) {
        return Ok(hi);
    }

    let found = refine(&mut residual, lo, f_lo, hi, f_hi)?;
    debug!(
        "transition to {target_deg:.6} deg found at {found} after {} evaluations",
        residual.evaluations
    );
    Ok(found)
}

/// Initial half-width of the search around the estimate, in days.
fn initial_step_days(rate_deg_per_day: f64) -> f64 {
    (2.0 / rate_deg_per_day).max(0.02)
}

/// Bracket `(lo, f_lo, hi, f_hi)` with `f_lo < 0 <= f_hi`, all after `from`.
///
/// The residual at `from` is `-distance`, so `from` itself is a valid lower
/// end whenever the estimate overshoots.
fn bracket_forward<F>(
    residual: &mut Residual<'_, F>,
    from: Instant,
    distance: f64,
    rate: f64,
) -> Result<(Instant, f64, Instant, f64), SearchError>
where
    F: FnMut(Instant) -> Result<f64, SearchError>,
{
    let estimate = from.plus_days(distance / rate);
    let f_est = residual.at(estimate)?;
    if residual.converged(f_est) {
        return Ok((estimate, f_est, estimate, f_est));
    }

    let mut step = initial_step_days(rate);
    if f_est < 0.0 {
        let (mut lo, mut f_lo) = (estimate, f_est);
        loop {
            let hi = lo.plus_days(step);
            let f_hi = residual.at(hi)?;
            if f_hi >= 0.0 {
                return Ok((lo, f_lo, hi, f_hi));
            }
            lo = hi;
            f_lo = f_hi;
            step *= 2.0;
        }
    }

    let (mut hi, mut f_hi) = (estimate, f_est);
    loop {
        let lo = hi.plus_days(-step);
        if lo <= from {
            return Ok((from, -distance, hi, f_hi));
        }
        let f_lo = residual.at(lo)?;
        if f_lo < 0.0 {
            return Ok((lo, f_lo, hi, f_hi));
        }
        hi = lo;
        f_hi = f_lo;
        step *= 2.0;
    }
}

/// Bracket `(lo, f_lo, hi, f_hi)` with `f_lo < 0 <= f_hi`, all at or before
/// `from`, whose residual is `+distance`.
fn bracket_backward<F>(
    residual: &mut Residual<'_, F>,
    from: Instant,
    distance: f64,
    rate: f64,
) -> Result<(Instant, f64, Instant, f64), SearchError>
where
    F: FnMut(Instant) -> Result<f64, SearchError>,
{
    let estimate = from.plus_days(-distance / rate);
    let f_est = residual.at(estimate)?;
    if residual.converged(f_est) {
        return Ok((estimate, f_est, estimate, f_est));
    }

    let mut step = initial_step_days(rate);
    if f_est >= 0.0 {
        let (mut hi, mut f_hi) = (estimate, f_est);
        loop {
            let lo = hi.plus_days(-step);
            let f_lo = residual.at(lo)?;
            if f_lo < 0.0 {
                return Ok((lo, f_lo, hi, f_hi));
            }
            hi = lo;
            f_hi = f_lo;
            step *= 2.0;
        }
    }

    let (mut lo, mut f_lo) = (estimate, f_est);
    loop {
        let hi = lo.plus_days(step);
        if hi >= from {
            return Ok((lo, f_lo, from, distance));
        }
        let f_hi = residual.at(hi)?;
        if f_hi >= 0.0 {
            return Ok((lo, f_lo, hi, f_hi));
        }
        lo = hi;
        f_lo = f_hi;
        step *= 2.0;
    }
}

/// Illinois regula falsi on a sign-changing bracket, bisecting whenever the
/// secant point falls outside it.
fn refine<F>(
    residual: &mut Residual<'_, F>,
    mut lo: Instant,
    mut f_lo: f64,
    mut hi: Instant,
    mut f_hi: f64,
) -> Result<Instant, SearchError>
where
    F: FnMut(Instant) -> Result<f64, SearchError>,
{
    // -1 when the last update moved `lo`, +1 when it moved `hi`.
    let mut last_side = 0i8;
    loop {
        if hi.seconds_since(lo) < MIN_BRACKET_SECONDS {
            return Ok(lo.lerp(hi, 0.5));
        }

        let denom = f_hi - f_lo;
        let fraction = if denom.abs() > 0.0 { -f_lo / denom } else { 0.5 };
        let fraction = if fraction.is_finite() && fraction > 0.0 && fraction < 1.0 {
            fraction
        } else {
            0.5
        };
        let t = lo.lerp(hi, fraction);
        let f = residual.at(t)?;
        if residual.converged(f) {
            return Ok(t);
        }

        if f < 0.0 {
            lo = t;
            f_lo = f;
            if last_side == -1 {
                f_hi *= 0.5;
            }
            last_side = -1;
        } else {
            hi = t;
            f_hi = f;
            if last_side == 1 {
                f_lo *= 0.5;
            }
            last_side = 1;
        }
    }
}
