//! Seeded single-run traces.
//!
//! Where the sweep reports expectation values, a trace draws one Bernoulli
//! outcome per sample against the closed-form survival curve, giving the
//! jagged single-realization picture a live run would show. The coherence
//! side needs no sampling: the linear signal is deterministically present
//! below p* and absent above it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::codes::{logical_survival, ErrorCode};
use crate::error::SweepError;
use crate::model::{check_probability, check_size, coherence_raw};

/// One sample of a single-run trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracePoint {
    /// Per-unit error probability at this sample.
    pub p: f64,
    /// Whether the logical information survived this realization.
    pub survived: bool,
    /// Whether the coherence signal is still present (p < 1/n).
    pub coherence_detected: bool,
}

/// Draw a single stochastic realization of the survival curve for `code` at
/// size `n` across `samples`, seeded for reproducibility.
pub fn single_run_trace(
    code: ErrorCode,
    n: usize,
    samples: &[f64],
    seed: u64,
) -> Result<Vec<TracePoint>, SweepError> {
    check_size(n)?;
    for &p in samples {
        check_probability(p)?;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut trace = Vec::with_capacity(samples.len());
    for &p in samples {
        let survival = logical_survival(code, n, p)?;
        let survived = rng.gen::<f64>() < survival;
        trace.push(TracePoint {
            p,
            survived,
            coherence_detected: coherence_raw(n, p) > 0.0,
        });
    }
    Ok(trace)
}
