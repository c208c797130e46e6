// src/validation/mod.rs

//! Normalization checks for state vectors and probability distributions.
//!
//! A failed check means a unitary step is implemented wrong. These are not
//! user-facing errors: the engine asserts on them in debug builds and the
//! tests call them after every step.

use crate::core::{NORM_TOLERANCE, StateVector};
use thiserror::Error;

/// Total probability deviated from 1 by more than the tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("normalization drifted: Σ|a_k|² = {total} (allowed deviation {tolerance})")]
pub struct NormalizationDrift {
    pub total: f64,
    pub tolerance: f64,
}

/// Checks if the state vector is normalized (sum of squared amplitudes ≈ 1.0).
///
/// # Arguments
/// * `state` - The `StateVector` to check.
/// * `tolerance` - Allowed deviation from 1.0; defaults to `NORM_TOLERANCE` (1e-9).
pub fn check_normalization(
    state: &StateVector,
    tolerance: Option<f64>,
) -> Result<(), NormalizationDrift> {
    check_total(state.norm_sqr(), tolerance)
}

/// Same check for an already computed probability vector.
pub fn check_probabilities(
    probabilities: &[f64],
    tolerance: Option<f64>,
) -> Result<(), NormalizationDrift> {
    check_total(probabilities.iter().sum(), tolerance)
}

fn check_total(total: f64, tolerance: Option<f64>) -> Result<(), NormalizationDrift> {
    let tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    // NaN fails this comparison as well
    if (total - 1.0).abs() <= tolerance {
        Ok(())
    } else {
        Err(NormalizationDrift { total, tolerance })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    #[test]
    fn test_normalized_states_pass() {
        assert!(check_normalization(&StateVector::new(3).unwrap(), None).is_ok());
        assert!(check_normalization(&StateVector::uniform(10).unwrap(), None).is_ok());
        assert!(check_probabilities(&[0.25; 4], None).is_ok());
    }

    #[test]
    fn test_drift_is_reported() {
        let amplitudes = vec![Complex::new(0.8, 0.0), Complex::new(0.8, 0.0)];
        let state = StateVector::from_amplitudes(amplitudes).unwrap();
        let err = check_normalization(&state, None).unwrap_err();
        assert!((err.total - 1.28).abs() < 1e-12);
        assert!(err.to_string().contains("normalization drifted"));
        assert!(check_normalization(&state, Some(0.5)).is_ok());
        assert!(check_probabilities(&[f64::NAN, 0.0], None).is_err());
    }
}
