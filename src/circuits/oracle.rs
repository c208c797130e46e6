// src/circuits/oracle.rs

//! Phase oracle: marks target states with a negative phase.

use crate::core::basis::bit_position;
use crate::core::{Result, StateVector};
use crate::operations::Operation;

/// Flips the sign of every amplitude in `states` and leaves the rest alone.
///
/// Any nonempty subset of indices is accepted, including the `{0}` the
/// diffuser marks internally.
pub fn mark_states<I>(vector: &mut StateVector, states: I)
where
    I: IntoIterator<Item = usize>,
{
    vector.apply_phase_flip(states);
}

/// Gate-level form of marking a single `target`: X on every qubit whose bit
/// is 0, a multi-controlled Z (phase flip of |1…1⟩), then the same X gates.
pub fn decomposed_oracle(num_qubits: usize, target: usize) -> Vec<Operation> {
    let zero_qubits: Vec<usize> = (0..num_qubits)
        .filter(|&q| (target >> bit_position(num_qubits, q)) & 1 == 0)
        .collect();
    let all_ones = (1usize << num_qubits) - 1;

    let mut ops: Vec<Operation> = zero_qubits
        .iter()
        .map(|&qubit| Operation::BitFlip { qubit })
        .collect();
    ops.push(Operation::PhaseFlip { states: vec![all_ones] });
    ops.extend(zero_qubits.iter().map(|&qubit| Operation::BitFlip { qubit }));
    ops
}

/// Marks `target` through [`decomposed_oracle`]. Produces exactly the same
/// vector as `mark_states(vector, [target])`.
pub fn mark_state_decomposed(vector: &mut StateVector, target: usize) -> Result<()> {
    for op in decomposed_oracle(vector.num_qubits(), target) {
        op.apply(vector)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    fn ramp(num_qubits: usize) -> StateVector {
        // Distinct amplitudes so any misplaced flip is visible.
        let dim = 1usize << num_qubits;
        let amps = (0..dim).map(|k| Complex::new(k as f64 + 1.0, 0.5 * k as f64)).collect();
        StateVector::from_amplitudes(amps).unwrap()
    }

    #[test]
    fn test_mark_states_twice_restores_vector() {
        let before = ramp(3);
        let mut state = before.clone();
        mark_states(&mut state, [1, 6]);
        assert_ne!(state, before);
        mark_states(&mut state, [1, 6]);
        assert_eq!(state, before);
    }

    #[test]
    fn test_decomposed_oracle_matches_direct_flip() {
        for target in 0..16 {
            let mut direct = ramp(4);
            let mut decomposed = direct.clone();
            mark_states(&mut direct, [target]);
            mark_state_decomposed(&mut decomposed, target).unwrap();
            assert_eq!(direct, decomposed, "target {}", target);
        }
    }

    #[test]
    fn test_decomposed_oracle_shape() {
        // target 011 on 3 qubits: only q0 is zero
        let ops = decomposed_oracle(3, 0b011);
        assert_eq!(
            ops,
            vec![
                Operation::BitFlip { qubit: 0 },
                Operation::PhaseFlip { states: vec![7] },
                Operation::BitFlip { qubit: 0 },
            ]
        );
    }
}
