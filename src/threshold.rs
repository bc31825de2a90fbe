//! Crossover detection: where a size's coherence signal dies.
//!
//! The analytic threshold is closed-form, `p* = 1/n`. The detector also scans
//! the sampled curves for the *observed* crossover — the first sample where
//! the linear coherence has reached zero — and for the point where the
//! exponential survival drops below a configurable epsilon, so the two can be
//! validated against each other by the caller.

use crate::error::SweepError;
use crate::model::{check_probability, coherence_raw, survival_raw};

/// Classification of a single probability sample relative to p* = 1/n.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// p < p*: the coherence signal is still alive.
    LogicalSurvival,
    /// p ≥ p*: noise has extinguished the signal.
    NoiseDominance,
}

impl Regime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Regime::LogicalSurvival => "logical-survival",
            Regime::NoiseDominance => "noise-dominance",
        }
    }
}

/// Detector tuning.
#[derive(Debug, Clone, Copy)]
pub struct DetectorConfig {
    /// Survival level whose downward crossing is reported alongside the
    /// coherence crossover.
    pub survival_epsilon: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            survival_epsilon: 0.5,
        }
    }
}

/// Crossover analysis for a single size across its sampled probabilities.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossoverResult {
    /// System size the analysis belongs to.
    pub n: usize,
    /// Closed-form threshold p* = 1/n.
    pub analytic_threshold: f64,
    /// First sampled p at which the coherence signal has reached zero, or
    /// None when the sweep never reaches p*.
    pub observed_threshold: Option<f64>,
    /// Interpolated p at which survival drops below `survival_epsilon`, or
    /// None when it stays above epsilon across the whole sweep.
    pub survival_crossing: Option<f64>,
    /// Per-sample classification, same order as the input samples.
    pub regimes: Vec<Regime>,
}

/// Detect the crossover for size `n` with the default detector tuning.
pub fn detect(n: usize, samples: &[f64]) -> Result<CrossoverResult, SweepError> {
    detect_with(n, samples, &DetectorConfig::default())
}

/// Detect the crossover for size `n` across ascending probability samples.
///
/// Fails with a domain error when `n = 0` (p* = 1/n is undefined) or when any
/// sample lies outside [0, 1], and with a range error when the samples are
/// not in ascending order — the first-zero scan depends on monotone p.
pub fn detect_with(
    n: usize,
    samples: &[f64],
    config: &DetectorConfig,
) -> Result<CrossoverResult, SweepError> {
    if n == 0 {
        return Err(SweepError::domain(
            "n = 0: threshold p* = 1/n is undefined",
        ));
    }
    for &p in samples {
        check_probability(p)?;
    }
    for w in samples.windows(2) {
        if w[0] > w[1] {
            return Err(SweepError::invalid_range(format!(
                "probability samples not ascending: {} before {}",
                w[0], w[1]
            )));
        }
    }

    let analytic_threshold = 1.0 / n as f64;
    let regimes: Vec<Regime> = samples
        .iter()
        .map(|&p| {
            if p < analytic_threshold {
                Regime::LogicalSurvival
            } else {
                Regime::NoiseDominance
            }
        })
        .collect();

    // First sample where the coherence signal has died.
    let observed_threshold = samples
        .iter()
        .copied()
        .find(|&p| coherence_raw(n, p) == 0.0);

    let survival_crossing = survival_crossing(n, samples, config.survival_epsilon);

    Ok(CrossoverResult {
        n,
        analytic_threshold,
        observed_threshold,
        survival_crossing,
        regimes,
    })
}

/// Locate where survival drops below epsilon, interpolating linearly between
/// the two bracketing samples (the same interpolation used for Monte Carlo
/// threshold estimates elsewhere in this family of tools).
fn survival_crossing(n: usize, samples: &[f64], epsilon: f64) -> Option<f64> {
    if let Some(&first) = samples.first() {
        if survival_raw(n, first) < epsilon {
            return Some(first);
        }
    }
    for w in samples.windows(2) {
        let (pa, pb) = (w[0], w[1]);
        let (sa, sb) = (survival_raw(n, pa), survival_raw(n, pb));
        if sa >= epsilon && sb < epsilon {
            if sa == sb {
                return Some(pb);
            }
            let frac = (sa - epsilon) / (sa - sb);
            return Some(pa + frac * (pb - pa));
        }
    }
    None
}
