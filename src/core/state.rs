// src/core/state.rs

use super::basis::bit_position;
use super::constants::qsearch_constants::MAX_QUBITS;
use super::error::{GroverError, Result};
use num_complex::Complex;
use num_traits::{One, Zero};
use std::fmt;

/// The 2^N complex amplitudes of an N-qubit register.
///
/// Index `k` is the basis state whose binary expansion (qubit 0 as the most
/// significant bit) is `k`. Every mutating method is unitary, so the sum of
/// `|a_k|²` stays at 1 within floating-point tolerance.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct StateVector {
    amplitudes: Vec<Complex<f64>>,
    num_qubits: usize,
}

impl StateVector {
    /// Creates the zero state |0…0⟩ on `num_qubits` qubits.
    pub fn new(num_qubits: usize) -> Result<Self> {
        let dim = dimension(num_qubits)?;
        let mut amplitudes = vec![Complex::zero(); dim];
        amplitudes[0] = Complex::one();
        Ok(Self { amplitudes, num_qubits })
    }

    /// Creates the uniform superposition, every amplitude equal to `D^(-1/2)`.
    pub fn uniform(num_qubits: usize) -> Result<Self> {
        let dim = dimension(num_qubits)?;
        let amp = Complex::new((dim as f64).sqrt().recip(), 0.0);
        Ok(Self { amplitudes: vec![amp; dim], num_qubits })
    }

    /// Builds a state directly from amplitudes. The length must be a power
    /// of two within the supported range; no normalization is enforced.
    pub fn from_amplitudes(amplitudes: Vec<Complex<f64>>) -> Result<Self> {
        let dim = amplitudes.len();
        if !dim.is_power_of_two() {
            return Err(GroverError::InvalidAmplitudeCount { len: dim });
        }
        let num_qubits = dim.trailing_zeros() as usize;
        dimension(num_qubits)?;
        Ok(Self { amplitudes, num_qubits })
    }

    /// Provides read-only access to the amplitudes.
    pub fn amplitudes(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    pub(crate) fn amplitudes_mut(&mut self) -> &mut [Complex<f64>] {
        &mut self.amplitudes
    }

    /// Hilbert-space dimension D = 2^N.
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Measurement probabilities `|a_k|²`, indexed by state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// `Σ|a_k|²`; 1.0 for a normalized state.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Applies a Hadamard gate to every qubit.
    ///
    /// Implemented as an in-place fast Walsh-Hadamard transform followed by a
    /// single `D^(-1/2)` scaling, O(D log D).
    pub fn apply_hadamard_all(&mut self) {
        let dim = self.dim();
        let mut half = 1;
        while half < dim {
            for block in (0..dim).step_by(half * 2) {
                for i in block..block + half {
                    let a = self.amplitudes[i];
                    let b = self.amplitudes[i + half];
                    self.amplitudes[i] = a + b;
                    self.amplitudes[i + half] = a - b;
                }
            }
            half *= 2;
        }
        let scale = (dim as f64).sqrt().recip();
        for amp in &mut self.amplitudes {
            *amp = amp.scale(scale);
        }
    }

    /// Negates the amplitude of every listed state. Indices outside the
    /// register are ignored; callers validate targets up front.
    pub fn apply_phase_flip<I>(&mut self, states: I)
    where
        I: IntoIterator<Item = usize>,
    {
        for k in states {
            if let Some(amp) = self.amplitudes.get_mut(k) {
                *amp = -*amp;
            }
        }
    }

    /// Applies a Pauli-X to `qubit`, swapping every pair of amplitudes that
    /// differ only in that qubit's bit.
    pub fn apply_bit_flip(&mut self, qubit: usize) -> Result<()> {
        if qubit >= self.num_qubits {
            return Err(GroverError::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            });
        }
        let mask = 1usize << bit_position(self.num_qubits, qubit);
        for k in 0..self.dim() {
            if k & mask == 0 {
                self.amplitudes.swap(k, k | mask);
            }
        }
        Ok(())
    }
}

/// Validates the qubit count and returns `2^N`.
fn dimension(num_qubits: usize) -> Result<usize> {
    if num_qubits == 0 || num_qubits > MAX_QUBITS {
        return Err(GroverError::invalid_dimension(num_qubits));
    }
    Ok(1usize << num_qubits)
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateVector[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_new_is_zero_state() {
        let state = StateVector::new(3).unwrap();
        assert_eq!(state.dim(), 8);
        assert_eq!(state.amplitudes()[0], Complex::one());
        assert!(state.amplitudes()[1..].iter().all(|a| a.is_zero()));
    }

    #[test]
    fn test_dimension_bounds() {
        assert_eq!(StateVector::new(0), Err(GroverError::invalid_dimension(0)));
        assert_eq!(
            StateVector::uniform(MAX_QUBITS + 1),
            Err(GroverError::invalid_dimension(MAX_QUBITS + 1))
        );
        assert_eq!(
            StateVector::from_amplitudes(vec![Complex::one(); 3]),
            Err(GroverError::InvalidAmplitudeCount { len: 3 })
        );
    }

    #[test]
    fn test_hadamard_all_on_zero_gives_uniform() {
        let mut state = StateVector::new(4).unwrap();
        state.apply_hadamard_all();
        let uniform = StateVector::uniform(4).unwrap();
        for (a, b) in state.amplitudes().iter().zip(uniform.amplitudes()) {
            assert_abs_diff_eq!(a.re, b.re, epsilon = 1e-12);
            assert_abs_diff_eq!(a.im, b.im, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_hadamard_all_is_self_inverse() {
        let amps = vec![
            Complex::new(0.5, 0.0),
            Complex::new(0.0, 0.5),
            Complex::new(-0.5, 0.0),
            Complex::new(0.5, 0.0),
        ];
        let mut state = StateVector::from_amplitudes(amps.clone()).unwrap();
        state.apply_hadamard_all();
        state.apply_hadamard_all();
        for (a, b) in state.amplitudes().iter().zip(&amps) {
            assert_abs_diff_eq!((a - b).norm(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_phase_flip_only_touches_listed_states() {
        let mut state = StateVector::uniform(2).unwrap();
        state.apply_phase_flip([1, 3]);
        let signs: Vec<f64> = state.amplitudes().iter().map(|a| a.re.signum()).collect();
        assert_eq!(signs, vec![1.0, -1.0, 1.0, -1.0]);
    }

    #[test]
    fn test_bit_flip_uses_msb_for_qubit_zero() {
        // |000> with X on qubit 0 -> |100> = index 4
        let mut state = StateVector::new(3).unwrap();
        state.apply_bit_flip(0).unwrap();
        assert_eq!(state.amplitudes()[4], Complex::one());
        // X on qubit 2 -> |101> = index 5
        state.apply_bit_flip(2).unwrap();
        assert_eq!(state.amplitudes()[5], Complex::one());
        assert_eq!(
            state.apply_bit_flip(3),
            Err(GroverError::QubitOutOfRange { qubit: 3, num_qubits: 3 })
        );
    }
}
