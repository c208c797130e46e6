// src/simulation/results.rs
use crate::analysis::Outcome;
use crate::core::bitstring;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Measurement counts of one run: basis-state index → number of shots.
///
/// Sparse: states that were never measured are absent and read as 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Histogram {
    num_qubits: usize,
    counts: BTreeMap<usize, u64>,
}

impl Histogram {
    /// Creates an empty histogram for an `num_qubits`-qubit register.
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            counts: BTreeMap::new(),
        }
    }

    /// Builds a histogram from `(state, count)` pairs. Repeated states are
    /// summed and zero counts are dropped.
    pub fn from_counts<I>(num_qubits: usize, counts: I) -> Self
    where
        I: IntoIterator<Item = (usize, u64)>,
    {
        let mut histogram = Self::new(num_qubits);
        for (state, count) in counts {
            if count > 0 {
                *histogram.counts.entry(state).or_insert(0) += count;
            }
        }
        histogram
    }

    /// Records one shot that measured `state`. (Internal visibility)
    pub(crate) fn record(&mut self, state: usize) {
        *self.counts.entry(state).or_insert(0) += 1;
    }

    /// Count for `state`, 0 when it was never measured.
    pub fn count(&self, state: usize) -> u64 {
        self.counts.get(&state).copied().unwrap_or(0)
    }

    /// Sum of all counts, i.e. the number of shots.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct states measured at least once.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// `(state, count)` pairs in ascending state order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.counts.iter().map(|(k, v)| (*k, *v))
    }

    /// Counts keyed by N-bit string, the form the plotting layer labels bars with.
    pub fn to_bitstrings(&self) -> BTreeMap<String, u64> {
        self.iter().map(|(k, v)| (bitstring(k, self.num_qubits), v)).collect()
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Histogram ({} shots):", self.total())?;
        for (state, count) in self.iter() {
            let bits = bitstring(state, self.num_qubits);
            writeln!(f, "  {} ({:>3}): {}", bits, state, count)?;
        }
        Ok(())
    }
}

/// Everything one simulated run hands to the result consumer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    histogram: Histogram,
    outcome: Outcome,
    /// Grover iterations that were applied.
    iterations: usize,
    /// Final `|a_k|²` before sampling.
    probabilities: Vec<f64>,
}

impl SimulationResult {
    /// (Internal visibility)
    pub(crate) fn new(
        histogram: Histogram,
        outcome: Outcome,
        iterations: usize,
        probabilities: Vec<f64>,
    ) -> Self {
        Self {
            histogram,
            outcome,
            iterations,
            probabilities,
        }
    }

    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Results ({} Grover iterations):", self.iterations)?;
        write!(f, "{}", self.histogram)?;
        writeln!(f)?;
        write!(f, "{}", self.outcome)
    }
}
