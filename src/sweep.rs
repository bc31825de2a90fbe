//! The full sweep pipeline and its aggregated result.
//!
//! One invocation runs grid generation → model evaluation → threshold
//! detection → aggregation, with no state carried between invocations. Sizes
//! are independent of each other, so with the `parallel` feature enabled the
//! per-size work runs on rayon; within a size the probability sweep is always
//! ascending (the detector depends on it).

use crate::error::SweepError;
use crate::grid::{generate_probabilities_spaced, generate_sizes, Spacing};
use crate::model::evaluate;
use crate::threshold::{detect_with, CrossoverResult, DetectorConfig};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Configuration for a full sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Smallest size exponent: the sweep starts at 2^min_exponent.
    pub min_exponent: u32,
    /// Largest size exponent: the sweep ends at 2^max_exponent.
    pub max_exponent: u32,
    /// Number of probability samples per size (at least 2).
    pub probability_count: usize,
    /// Lower probability bound, inclusive.
    pub probability_lower: f64,
    /// Upper probability bound, inclusive.
    pub probability_upper: f64,
    /// Sample spacing across [lower, upper].
    pub spacing: Spacing,
    /// Threshold detector tuning.
    pub detector: DetectorConfig,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            min_exponent: 0,
            max_exponent: 10,
            probability_count: 41,
            probability_lower: 0.0,
            probability_upper: 1.0,
            spacing: Spacing::Linear,
            detector: DetectorConfig::default(),
        }
    }
}

/// Everything evaluated for one size: the sampled curves, their residual,
/// and the crossover analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeRecord {
    /// System size.
    pub n: usize,
    /// Ascending probability samples.
    pub probabilities: Vec<f64>,
    /// `(1-p)^n` at each sample.
    pub survival: Vec<f64>,
    /// `max(0, 1 - n·p)` at each sample.
    pub coherence: Vec<f64>,
    /// `survival[i] - coherence[i]` at each sample.
    pub residual: Vec<f64>,
    /// Analytic and observed crossover for this size.
    pub crossover: CrossoverResult,
}

/// Aggregated results for all sizes, in the order the grid produced them.
///
/// Owned by the aggregator; external reporting consumes it read-only via
/// `iter()` (restartable, lazy) or `IntoIterator`.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    records: Vec<SizeRecord>,
}

impl SweepResult {
    /// Iterate over per-size records in size order. Restartable: each call
    /// yields a fresh iterator over the same records.
    pub fn iter(&self) -> std::slice::Iter<'_, SizeRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrow all records as a slice.
    pub fn records(&self) -> &[SizeRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a SweepResult {
    type Item = &'a SizeRecord;
    type IntoIter = std::slice::Iter<'a, SizeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for SweepResult {
    type Item = SizeRecord;
    type IntoIter = std::vec::IntoIter<SizeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// Assemble per-size records into a `SweepResult`.
///
/// Pure assembly: no recomputation, input order preserved.
pub fn aggregate(records: Vec<SizeRecord>) -> SweepResult {
    SweepResult { records }
}

/// Evaluate one size across the shared probability samples.
fn evaluate_size(
    n: usize,
    samples: &[f64],
    detector: &DetectorConfig,
) -> Result<SizeRecord, SweepError> {
    let mut survival = Vec::with_capacity(samples.len());
    let mut coherence = Vec::with_capacity(samples.len());
    for &p in samples {
        let pt = evaluate(n, p)?;
        survival.push(pt.survival_exponential);
        coherence.push(pt.coherence_linear);
    }
    let residual = survival
        .iter()
        .zip(coherence.iter())
        .map(|(s, c)| s - c)
        .collect();
    let crossover = detect_with(n, samples, detector)?;
    Ok(SizeRecord {
        n,
        probabilities: samples.to_vec(),
        survival,
        coherence,
        residual,
        crossover,
    })
}

/// Run the full sweep described by `config`.
///
/// Fails on the first invalid input; a sweep either completes in full or
/// returns an error, never a partial result.
pub fn run_sweep(config: &SweepConfig) -> Result<SweepResult, SweepError> {
    let sizes = generate_sizes(config.min_exponent, config.max_exponent)?;
    let samples = generate_probabilities_spaced(
        config.probability_count,
        config.probability_lower,
        config.probability_upper,
        config.spacing,
    )?;

    #[cfg(feature = "parallel")]
    let records: Result<Vec<SizeRecord>, SweepError> = sizes
        .par_iter()
        .map(|&n| evaluate_size(n, &samples, &config.detector))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let records: Result<Vec<SizeRecord>, SweepError> = sizes
        .iter()
        .map(|&n| evaluate_size(n, &samples, &config.detector))
        .collect();

    Ok(aggregate(records?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::threshold::Regime;

    fn small_config() -> SweepConfig {
        SweepConfig {
            min_exponent: 1,
            max_exponent: 5,
            probability_count: 21,
            ..SweepConfig::default()
        }
    }

    #[test]
    fn records_follow_size_order() {
        let result = run_sweep(&small_config()).unwrap();
        let ns: Vec<usize> = result.iter().map(|r| r.n).collect();
        assert_eq!(ns, vec![2, 4, 8, 16, 32]);
    }

    #[test]
    fn every_record_carries_full_curves() {
        let config = small_config();
        let result = run_sweep(&config).unwrap();
        for record in &result {
            assert_eq!(record.probabilities.len(), config.probability_count);
            assert_eq!(record.survival.len(), config.probability_count);
            assert_eq!(record.coherence.len(), config.probability_count);
            assert_eq!(record.residual.len(), config.probability_count);
            assert_eq!(record.crossover.regimes.len(), config.probability_count);
        }
    }

    #[test]
    fn thresholds_are_reciprocal_sizes() {
        let result = run_sweep(&small_config()).unwrap();
        for record in &result {
            assert_eq!(record.crossover.analytic_threshold, 1.0 / record.n as f64);
        }
    }

    #[test]
    fn curves_are_non_increasing_within_each_size() {
        let result = run_sweep(&small_config()).unwrap();
        for record in &result {
            for w in record.survival.windows(2) {
                assert!(w[1] <= w[0] + 1e-15);
            }
            for w in record.coherence.windows(2) {
                assert!(w[1] <= w[0]);
            }
        }
    }

    #[test]
    fn residual_is_survival_minus_coherence() {
        let result = run_sweep(&small_config()).unwrap();
        for record in &result {
            for i in 0..record.residual.len() {
                assert_eq!(
                    record.residual[i],
                    record.survival[i] - record.coherence[i]
                );
            }
        }
    }

    #[test]
    fn first_sample_at_p_zero_is_logical_survival() {
        let result = run_sweep(&small_config()).unwrap();
        for record in &result {
            assert_eq!(record.crossover.regimes[0], Regime::LogicalSurvival);
        }
    }

    #[test]
    fn iteration_is_restartable() {
        let result = run_sweep(&small_config()).unwrap();
        let first: Vec<usize> = result.iter().map(|r| r.n).collect();
        let second: Vec<usize> = result.iter().map(|r| r.n).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn owned_iteration_consumes_in_order() {
        let result = run_sweep(&small_config()).unwrap();
        let expected = result.len();
        let ns: Vec<usize> = result.into_iter().map(|r| r.n).collect();
        assert_eq!(ns.len(), expected);
        assert_eq!(ns, vec![2, 4, 8, 16, 32]);
    }

    #[test]
    fn aggregate_preserves_order_without_recomputation() {
        let config = small_config();
        let result = run_sweep(&config).unwrap();
        let records: Vec<SizeRecord> = result.iter().cloned().collect();
        let reassembled = aggregate(records);
        assert_eq!(reassembled, result);
    }

    #[test]
    fn invalid_config_fails_before_any_evaluation() {
        let config = SweepConfig {
            probability_lower: 0.6,
            probability_upper: 0.2,
            ..SweepConfig::default()
        };
        let err = run_sweep(&config).unwrap_err();
        assert!(matches!(err, SweepError::InvalidRange { .. }));

        let config = SweepConfig {
            min_exponent: 7,
            max_exponent: 3,
            ..SweepConfig::default()
        };
        assert!(run_sweep(&config).is_err());
    }

    #[test]
    fn default_config_matches_documented_grid() {
        let config = SweepConfig::default();
        let result = run_sweep(&config).unwrap();
        assert_eq!(result.len(), 11); // 2^0 ..= 2^10
        let first = result.iter().next().unwrap();
        assert_eq!(first.n, 1);
        assert_eq!(first.probabilities.len(), 41);
        assert_eq!(first.probabilities[0], 0.0);
        assert_eq!(*first.probabilities.last().unwrap(), 1.0);
    }
}
