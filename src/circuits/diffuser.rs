// src/circuits/diffuser.rs

//! Grover diffusion: reflection of every amplitude about the mean.

use super::oracle::mark_states;
use crate::core::StateVector;
use num_complex::Complex;

/// Applies `H^⊗N · (phase flip of |0…0⟩) · H^⊗N`.
///
/// This is `I - 2|s⟩⟨s|`, i.e. the textbook `2|s⟩⟨s| - I` times a global
/// phase of -1. Probabilities are identical to [`reflect_about_mean`].
pub fn invert_about_mean(vector: &mut StateVector) {
    vector.apply_hadamard_all();
    mark_states(vector, [0]);
    vector.apply_hadamard_all();
}

/// Closed form `a_i ← 2·mean(a) - a_i`, O(D).
pub fn reflect_about_mean(vector: &mut StateVector) {
    let amps = vector.amplitudes_mut();
    let mean = amps.iter().sum::<Complex<f64>>() / amps.len() as f64;
    let twice_mean = mean.scale(2.0);
    for amp in amps.iter_mut() {
        *amp = twice_mean - *amp;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn skewed() -> StateVector {
        let amps = vec![
            Complex::new(0.1, 0.0),
            Complex::new(-0.7, 0.0),
            Complex::new(0.3, 0.2),
            Complex::new(0.1, -0.1),
            Complex::new(0.2, 0.0),
            Complex::new(0.4, 0.1),
            Complex::new(-0.2, 0.0),
            Complex::new(0.0, 0.3),
        ];
        let norm = amps.iter().map(|a: &Complex<f64>| a.norm_sqr()).sum::<f64>().sqrt();
        StateVector::from_amplitudes(amps.into_iter().map(|a| a / norm).collect()).unwrap()
    }

    #[test]
    fn test_gate_and_closed_form_agree_up_to_global_sign() {
        let mut gates = skewed();
        let mut closed = skewed();
        invert_about_mean(&mut gates);
        reflect_about_mean(&mut closed);

        for (g, c) in gates.amplitudes().iter().zip(closed.amplitudes()) {
            assert_abs_diff_eq!((g + c).norm(), 0.0, epsilon = 1e-12);
        }
        for (p, q) in gates.probabilities().iter().zip(closed.probabilities()) {
            assert_abs_diff_eq!(*p, q, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_uniform_state_is_fixed_point_of_reflection() {
        let mut state = StateVector::uniform(3).unwrap();
        let before = state.clone();
        reflect_about_mean(&mut state);
        for (a, b) in state.amplitudes().iter().zip(before.amplitudes()) {
            assert_abs_diff_eq!((a - b).norm(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_diffuser_preserves_norm() {
        let mut state = skewed();
        invert_about_mean(&mut state);
        assert_abs_diff_eq!(state.norm_sqr(), 1.0, epsilon = 1e-12);
    }
}
