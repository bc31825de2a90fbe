//! Agreement between the two models when used as binary detectors.
//!
//! Treat the survival curve as ground truth and the coherence curve as a
//! detector: at each sample, "signal present" means the curve exceeds the
//! cutoff. The true-positive rate is the fraction of samples where both agree
//! signal is present; the false-positive rate is the fraction where only the
//! detector claims it.

use crate::error::SweepError;

/// Detection-rate summary for one pair of curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionRates {
    /// Fraction of samples where truth and detector both report signal.
    pub true_positive: f64,
    /// Fraction of samples where only the detector reports signal.
    pub false_positive: f64,
}

/// Compute detection rates of `coherence` against `survival` at `cutoff`.
///
/// Both rates are fractions of the full sample count. Fails when the two
/// curves have different lengths or no samples at all.
pub fn detection_rates(
    survival: &[f64],
    coherence: &[f64],
    cutoff: f64,
) -> Result<DetectionRates, SweepError> {
    if survival.len() != coherence.len() {
        return Err(SweepError::invalid_range(format!(
            "curve length mismatch: {} survival vs {} coherence samples",
            survival.len(),
            coherence.len()
        )));
    }
    if survival.is_empty() {
        return Err(SweepError::invalid_range(
            "detection rates need at least one sample",
        ));
    }

    let total = survival.len() as f64;
    let mut tp = 0usize;
    let mut fp = 0usize;
    for (&s, &c) in survival.iter().zip(coherence.iter()) {
        let truth = s > cutoff;
        let predicted = c > cutoff;
        if truth && predicted {
            tp += 1;
        }
        if !truth && predicted {
            fp += 1;
        }
    }

    Ok(DetectionRates {
        true_positive: tp as f64 / total,
        false_positive: fp as f64 / total,
    })
}
