// src/core/targets.rs

use super::basis::{bitstring, parse_bitstring};
use super::error::{GroverError, Result};
use std::collections::BTreeSet;
use std::fmt;

/// The marked states of a search, validated against a register width.
///
/// Invariants: nonempty, every index `< 2^N`, distinct. Covering all `2^N`
/// states is allowed and simply yields zero amplification rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSet {
    indices: BTreeSet<usize>,
    num_qubits: usize,
}

impl TargetSet {
    /// Validates integer targets for an `num_qubits`-qubit register.
    pub fn new<I>(num_qubits: usize, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = u64>,
    {
        let dim = 1u64
            .checked_shl(num_qubits as u32)
            .filter(|_| num_qubits > 0 && num_qubits <= super::MAX_QUBITS)
            .ok_or_else(|| GroverError::invalid_dimension(num_qubits))?;

        let mut indices = BTreeSet::new();
        for value in values {
            if value >= dim {
                return Err(GroverError::invalid_targets(format!(
                    "target {} does not fit in {} qubits (must be < {})",
                    value, num_qubits, dim
                )));
            }
            indices.insert(value as usize);
        }
        if indices.is_empty() {
            return Err(GroverError::invalid_targets("at least one target state is required"));
        }
        Ok(Self { indices, num_qubits })
    }

    /// Validates N-bit string targets; every string must be exactly
    /// `num_qubits` characters wide.
    pub fn from_bitstrings<'a, I>(num_qubits: usize, bits: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let values = bits
            .into_iter()
            .map(|b| {
                if b.len() != num_qubits {
                    return Err(GroverError::invalid_targets(format!(
                        "bit-string '{}' is not {} bits wide",
                        b, num_qubits
                    )));
                }
                parse_bitstring(b).map(|v| v as u64)
            })
            .collect::<Result<Vec<u64>>>()?;
        Self::new(num_qubits, values)
    }

    pub fn contains(&self, state: usize) -> bool {
        self.indices.contains(&state)
    }

    /// Number of marked states, `m`.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Always false for a validated set.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Marked indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Marked states as N-bit strings, in ascending index order.
    pub fn bitstrings(&self) -> Vec<String> {
        self.iter().map(|k| bitstring(k, self.num_qubits)).collect()
    }
}

impl fmt::Display for TargetSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, bits) in self.bitstrings().iter().enumerate() {
            write!(f, "{}{}", if i > 0 { ", " } else { "" }, bits)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_are_sorted_and_deduplicated() {
        let targets = TargetSet::new(5, [11, 9, 0, 3, 9]).unwrap();
        assert_eq!(targets.len(), 4);
        assert_eq!(targets.iter().collect::<Vec<_>>(), vec![0, 3, 9, 11]);
        assert_eq!(targets.bitstrings(), vec!["00000", "00011", "01001", "01011"]);
    }

    #[test]
    fn test_rejects_empty_and_out_of_range() {
        assert!(matches!(
            TargetSet::new(3, Vec::<u64>::new()),
            Err(GroverError::InvalidTargetSet { .. })
        ));
        assert!(matches!(TargetSet::new(3, [8]), Err(GroverError::InvalidTargetSet { .. })));
        assert!(matches!(TargetSet::new(0, [0]), Err(GroverError::InvalidDimension { .. })));
    }

    #[test]
    fn test_full_set_is_allowed() {
        let targets = TargetSet::new(1, [0, 1]).unwrap();
        assert_eq!(targets.len(), 2);
    }

    #[test]
    fn test_from_bitstrings_matches_integers() {
        let from_bits = TargetSet::from_bitstrings(3, ["000", "011"]).unwrap();
        let from_ints = TargetSet::new(3, [0, 3]).unwrap();
        assert_eq!(from_bits, from_ints);
        assert!(TargetSet::from_bitstrings(3, ["11"]).is_err());
    }

    #[test]
    fn test_display() {
        let targets = TargetSet::new(3, [3, 0]).unwrap();
        assert_eq!(targets.to_string(), "{000, 011}");
    }
}
