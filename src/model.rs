//! The two closed-form models evaluated at every grid point.
//!
//! - Exponential survival: `(1-p)^n`, the probability that none of n
//!   independent units fails at per-unit rate p.
//! - Linear coherence: `max(0, 1 - n·p)`, a signal that reaches zero exactly
//!   at the threshold `p* = 1/n`.
//!
//! The power is computed as `exp(n · ln_1p(-p))` rather than by repeated
//! multiplication or `powi`: at n = 2^20 and p ~ 1e-7 the naive form loses
//! precision in `1 - p` before the exponent is ever applied.

use crate::error::SweepError;

/// Both model values at a single (n, p) grid point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelPoint {
    /// System size (unit count).
    pub n: usize,
    /// Per-unit error probability.
    pub p: f64,
    /// `(1-p)^n`, in [0, 1].
    pub survival_exponential: f64,
    /// `max(0, 1 - n·p)`, in [0, 1].
    pub coherence_linear: f64,
}

/// Check that p lies in [0, 1], rejecting NaN as well.
pub(crate) fn check_probability(p: f64) -> Result<(), SweepError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(SweepError::domain(format!("p = {} outside [0, 1]", p)));
    }
    Ok(())
}

pub(crate) fn check_size(n: usize) -> Result<(), SweepError> {
    if n == 0 {
        return Err(SweepError::domain("n = 0 is not a valid system size"));
    }
    Ok(())
}

/// `(1-p)^n` via `exp(n · ln_1p(-p))`.
///
/// Exact at the endpoints: returns 1 at p = 0 and 0 at p = 1 (for n ≥ 1).
/// Callers must have validated p ∈ [0, 1].
pub(crate) fn survival_raw(n: usize, p: f64) -> f64 {
    if n == 0 || p == 0.0 {
        return 1.0;
    }
    if p == 1.0 {
        return 0.0;
    }
    (n as f64 * (-p).ln_1p()).exp()
}

/// `max(0, 1 - n·p)`. Callers must have validated p ∈ [0, 1].
pub(crate) fn coherence_raw(n: usize, p: f64) -> f64 {
    // At p ∈ [0,1] this can never exceed 1, so only the floor needs clamping.
    (1.0 - n as f64 * p).max(0.0)
}

/// Evaluate both models at (n, p).
///
/// Pure: same inputs always produce the same `ModelPoint`. Fails with a
/// domain error when `p ∉ [0, 1]` or `n = 0`.
pub fn evaluate(n: usize, p: f64) -> Result<ModelPoint, SweepError> {
    check_size(n)?;
    check_probability(p)?;
    Ok(ModelPoint {
        n,
        p,
        survival_exponential: survival_raw(n, p),
        coherence_linear: coherence_raw(n, p),
    })
}
