// src/core/basis.rs

//! Conversions between basis-state indices and N-bit strings.
//!
//! The leftmost character of a bit-string is the most significant bit and
//! belongs to qubit 0. No reversal is applied anywhere in the crate.

use super::error::{GroverError, Result};

/// Renders `index` as a zero-padded bit-string of `width` characters.
pub fn bitstring(index: usize, width: usize) -> String {
    format!("{:0width$b}", index, width = width)
}

/// Parses an N-bit string (characters `0`/`1` only) into its state index.
pub fn parse_bitstring(bits: &str) -> Result<usize> {
    if bits.is_empty() {
        return Err(GroverError::invalid_targets("empty bit-string"));
    }
    if bits.len() > usize::BITS as usize {
        return Err(GroverError::invalid_targets(format!(
            "bit-string '{}' is wider than {} bits",
            bits,
            usize::BITS
        )));
    }
    bits.chars().try_fold(0usize, |acc, c| match c {
        '0' => Ok(acc << 1),
        '1' => Ok((acc << 1) | 1),
        other => Err(GroverError::invalid_targets(format!(
            "bit-string '{}' contains '{}'",
            bits, other
        ))),
    })
}

/// Position of qubit `qubit`'s bit inside a state index (qubit 0 is the MSB).
pub(crate) fn bit_position(num_qubits: usize, qubit: usize) -> usize {
    num_qubits - 1 - qubit
}
