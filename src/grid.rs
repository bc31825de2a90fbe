//! Evaluation grid generation: size sequences and probability samples.
//!
//! Sizes are powers of two across a configured exponent range; probability
//! samples are evenly or log-spaced across [lower, upper]. Both sequences are
//! strictly ordered — the threshold detector relies on ascending p to find
//! the first zero-crossing.

use crate::error::SweepError;

/// Spacing scheme for probability samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spacing {
    /// Evenly spaced samples, endpoints inclusive.
    Linear,
    /// Log-spaced samples, endpoints inclusive. Requires lower > 0.
    Log,
}

/// Generate the ordered size sequence `2^min_exp ..= 2^max_exp`.
pub fn generate_sizes(min_exp: u32, max_exp: u32) -> Result<Vec<usize>, SweepError> {
    if min_exp > max_exp {
        return Err(SweepError::invalid_range(format!(
            "min_exponent {} > max_exponent {}",
            min_exp, max_exp
        )));
    }
    if max_exp >= usize::BITS {
        return Err(SweepError::invalid_range(format!(
            "max_exponent {} overflows usize",
            max_exp
        )));
    }
    Ok((min_exp..=max_exp).map(|e| 1usize << e).collect())
}

/// Generate `count` evenly spaced probability samples across [lower, upper].
pub fn generate_probabilities(
    count: usize,
    lower: f64,
    upper: f64,
) -> Result<Vec<f64>, SweepError> {
    generate_probabilities_spaced(count, lower, upper, Spacing::Linear)
}

/// Generate `count` probability samples across [lower, upper] with the given
/// spacing. Endpoints are always included exactly.
pub fn generate_probabilities_spaced(
    count: usize,
    lower: f64,
    upper: f64,
    spacing: Spacing,
) -> Result<Vec<f64>, SweepError> {
    if count < 2 {
        return Err(SweepError::invalid_range(format!(
            "probability_count {} < 2",
            count
        )));
    }
    if !(0.0..=1.0).contains(&lower) || !(0.0..=1.0).contains(&upper) {
        return Err(SweepError::invalid_range(format!(
            "probability bounds [{}, {}] outside [0, 1]",
            lower, upper
        )));
    }
    if lower > upper {
        return Err(SweepError::invalid_range(format!(
            "probability_lower {} > probability_upper {}",
            lower, upper
        )));
    }

    let samples = match spacing {
        Spacing::Linear => {
            let step = (upper - lower) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        upper
                    } else {
                        lower + step * i as f64
                    }
                })
                .collect()
        }
        Spacing::Log => {
            if lower <= 0.0 {
                return Err(SweepError::invalid_range(format!(
                    "log spacing requires probability_lower > 0, got {}",
                    lower
                )));
            }
            let log_lo = lower.ln();
            let log_step = (upper.ln() - log_lo) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        upper
                    } else {
                        (log_lo + log_step * i as f64).exp()
                    }
                })
                .collect()
        }
    };

    Ok(samples)
}
