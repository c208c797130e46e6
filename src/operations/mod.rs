// src/operations/mod.rs

//! The elementary gates Grover's algorithm is built from.
//!
//! Each `Operation` is a stateless description; [`Operation::apply`]
//! performs it in place on a [`StateVector`]. Only the gates the search
//! needs exist here: a Hadamard layer, a single-qubit bit flip and a
//! multi-controlled phase flip addressed by basis-state index.

use crate::core::{Result, StateVector, bitstring};
use std::fmt;

/// A single unitary step applied to the whole register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Hadamard on every qubit (H^⊗N).
    ///
    /// Takes |0…0⟩ to the uniform superposition and is its own inverse.
    HadamardAll,

    /// Pauli-X on one qubit; qubit 0 is the most significant bit.
    BitFlip {
        /// The flipped qubit.
        qubit: usize,
    },

    /// Negates the amplitude of each listed basis state.
    ///
    /// For a single state this is a multi-controlled Z, usually built from
    /// X, H and an (N-1)-controlled Toffoli; for several states it is the
    /// product of those phase flips.
    PhaseFlip {
        /// The marked basis-state indices.
        states: Vec<usize>,
    },
}

impl Operation {
    /// Applies the operation to `state`.
    pub fn apply(&self, state: &mut StateVector) -> Result<()> {
        match self {
            Operation::HadamardAll => state.apply_hadamard_all(),
            Operation::BitFlip { qubit } => state.apply_bit_flip(*qubit)?,
            Operation::PhaseFlip { states } => state.apply_phase_flip(states.iter().copied()),
        }
        Ok(())
    }

    /// Short label used by [`crate::circuits::Circuit`]'s listing.
    pub fn describe(&self, num_qubits: usize) -> String {
        match self {
            Operation::HadamardAll => "H on all qubits".to_string(),
            Operation::BitFlip { qubit } => format!("X on q{}", qubit),
            Operation::PhaseFlip { states } => {
                let marked: Vec<String> =
                    states.iter().map(|k| bitstring(*k, num_qubits)).collect();
                format!("phase flip [{}]", marked.join(", "))
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::HadamardAll => write!(f, "H*"),
            Operation::BitFlip { qubit } => write!(f, "X(q{})", qubit),
            Operation::PhaseFlip { states } => write!(f, "Z{:?}", states),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GroverError;
    use num_complex::Complex;

    #[test]
    fn test_apply_matches_state_methods() {
        let mut via_op = StateVector::new(3).unwrap();
        let mut direct = via_op.clone();

        for op in [
            Operation::HadamardAll,
            Operation::PhaseFlip { states: vec![2, 5] },
            Operation::BitFlip { qubit: 1 },
        ] {
            op.apply(&mut via_op).unwrap();
        }
        direct.apply_hadamard_all();
        direct.apply_phase_flip([2, 5]);
        direct.apply_bit_flip(1).unwrap();

        assert_eq!(via_op, direct);
    }

    #[test]
    fn test_bit_flip_out_of_range_is_rejected() {
        let mut state = StateVector::new(2).unwrap();
        assert_eq!(
            Operation::BitFlip { qubit: 2 }.apply(&mut state),
            Err(GroverError::QubitOutOfRange { qubit: 2, num_qubits: 2 })
        );
        assert_eq!(state.amplitudes()[0], Complex::new(1.0, 0.0));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Operation::PhaseFlip { states: vec![3] }.describe(3), "phase flip [011]");
        assert_eq!(Operation::BitFlip { qubit: 0 }.to_string(), "X(q0)");
    }
}
