//! Code-specific logical survival models.
//!
//! The bare exponential `(1-p)^n` is the survival of an unprotected register.
//! A code that corrects any single fault keeps the logical state alive when
//! exactly one unit fails, adding the first-order term `n·p·(1-p)^(n-1)`.
//!
//! - bit-flip / phase-flip: `(1-p)^n + n·p·(1-p)^(n-1)`
//! - depolarizing: `(1-p)^n` (both flip types possible, no correction credit)

use crate::error::SweepError;
use crate::model::{check_probability, check_size, survival_raw};

/// Error-channel family the survival model is evaluated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    BitFlip,
    PhaseFlip,
    Depolarizing,
}

impl ErrorCode {
    /// All code families, in reporting order.
    pub const ALL: [ErrorCode; 3] = [
        ErrorCode::BitFlip,
        ErrorCode::PhaseFlip,
        ErrorCode::Depolarizing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ErrorCode::BitFlip => "bit-flip",
            ErrorCode::PhaseFlip => "phase-flip",
            ErrorCode::Depolarizing => "depolarizing",
        }
    }
}

/// Logical survival probability for the given code at (n, p).
///
/// Evaluated with the same `exp`/`ln_1p` form as the plain exponential so the
/// single-fault term stays accurate at large n and small p.
pub fn logical_survival(code: ErrorCode, n: usize, p: f64) -> Result<f64, SweepError> {
    check_size(n)?;
    check_probability(p)?;
    let base = survival_raw(n, p);
    match code {
        ErrorCode::BitFlip | ErrorCode::PhaseFlip => {
            let single_fault = n as f64 * p * survival_raw(n - 1, p);
            // Both terms are exact probabilities of disjoint events, but the
            // float sum can tip past 1 by an ulp at tiny p.
            Ok((base + single_fault).min(1.0))
        }
        ErrorCode::Depolarizing => Ok(base),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depolarizing_matches_plain_exponential() {
        for &p in &[0.0, 0.01, 0.3, 1.0] {
            let s = logical_survival(ErrorCode::Depolarizing, 16, p).unwrap();
            let pt = crate::model::evaluate(16, p).unwrap();
            assert_eq!(s, pt.survival_exponential);
        }
    }

    #[test]
    fn corrected_codes_survive_better_than_uncorrected() {
        for &p in &[0.01, 0.05, 0.1] {
            let corrected = logical_survival(ErrorCode::BitFlip, 32, p).unwrap();
            let bare = logical_survival(ErrorCode::Depolarizing, 32, p).unwrap();
            assert!(
                corrected > bare,
                "single-fault correction must help at p={}: {} !> {}",
                p,
                corrected,
                bare
            );
        }
    }

    #[test]
    fn bit_flip_and_phase_flip_are_identical() {
        for &p in &[0.0, 0.02, 0.5, 1.0] {
            assert_eq!(
                logical_survival(ErrorCode::BitFlip, 64, p).unwrap(),
                logical_survival(ErrorCode::PhaseFlip, 64, p).unwrap()
            );
        }
    }

    #[test]
    fn survival_stays_in_unit_interval() {
        for code in ErrorCode::ALL {
            for n in [1usize, 8, 1 << 20] {
                for &p in &[0.0, 1e-9, 0.1, 0.999, 1.0] {
                    let s = logical_survival(code, n, p).unwrap();
                    assert!(
                        (0.0..=1.0).contains(&s),
                        "{} survival {} out of range at n={} p={}",
                        code.label(),
                        s,
                        n,
                        p
                    );
                }
            }
        }
    }

    #[test]
    fn boundary_values() {
        for code in ErrorCode::ALL {
            assert_eq!(logical_survival(code, 8, 0.0).unwrap(), 1.0);
        }
        // At p = 1 every unit fails; only the single-fault term could save a
        // corrected code, and with n > 1 faults it cannot.
        assert_eq!(logical_survival(ErrorCode::BitFlip, 8, 1.0).unwrap(), 0.0);
        assert_eq!(
            logical_survival(ErrorCode::Depolarizing, 8, 1.0).unwrap(),
            0.0
        );
    }

    #[test]
    fn single_unit_bit_flip_always_survives() {
        // n = 1: one fault is still correctable, so survival is (1-p) + p = 1.
        for &p in &[0.0, 0.25, 0.9, 1.0] {
            let s = logical_survival(ErrorCode::BitFlip, 1, p).unwrap();
            assert!((s - 1.0).abs() < 1e-12, "got {}", s);
        }
    }

    #[test]
    fn invalid_inputs_rejected() {
        assert!(logical_survival(ErrorCode::BitFlip, 0, 0.1).is_err());
        assert!(logical_survival(ErrorCode::BitFlip, 4, 1.5).is_err());
    }

    #[test]
    fn labels_match_reporting_names() {
        assert_eq!(ErrorCode::BitFlip.label(), "bit-flip");
        assert_eq!(ErrorCode::PhaseFlip.label(), "phase-flip");
        assert_eq!(ErrorCode::Depolarizing.label(), "depolarizing");
    }
}
