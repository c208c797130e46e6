// src/config.rs

//! Run configuration.
//!
//! Everything a run needs is carried by one [`GroverConfig`] value handed to
//! [`crate::GroverSimulator::new`]. It deserializes with serde, so a CLI or
//! file loader can supply it; every field is optional and falls back to the
//! defaults below.

use crate::core::{GroverError, MAX_QUBITS, Result, TargetSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Parameters of one Grover search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroverConfig {
    /// Window/report title, only read by the plotting layer.
    pub title: String,
    /// Register width N.
    pub num_qubits: usize,
    /// Target values, each `< 2^N`.
    pub search: BTreeSet<u64>,
    /// Number of measurement shots.
    pub shots: u64,
    /// Sampler seed; `None` draws one from entropy.
    pub seed: Option<u64>,
    /// Hand the oracle/diffuser/grover circuits to the diagnostic printer.
    pub print_circuits: bool,
    /// Merge all non-winning bars into a single "Others" bar.
    pub combine_states: bool,
}

impl Default for GroverConfig {
    fn default() -> Self {
        Self {
            title: "Grover's Algorithm".to_string(),
            num_qubits: 5,
            search: [11, 9, 0, 3].into_iter().collect(),
            shots: 10_000,
            seed: None,
            print_circuits: false,
            combine_states: false,
        }
    }
}

impl GroverConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_num_qubits(mut self, num_qubits: usize) -> Self {
        self.num_qubits = num_qubits;
        self
    }

    /// Replaces the target values.
    pub fn with_search<I>(mut self, search: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        self.search = search.into_iter().collect();
        self
    }

    pub fn with_shots(mut self, shots: u64) -> Self {
        self.shots = shots;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_print_circuits(mut self, print_circuits: bool) -> Self {
        self.print_circuits = print_circuits;
        self
    }

    pub fn with_combine_states(mut self, combine_states: bool) -> Self {
        self.combine_states = combine_states;
        self
    }

    /// Checks qubit count, targets and shots, in that order, and returns
    /// the validated [`TargetSet`].
    ///
    /// # Errors
    /// `InvalidDimension`, `InvalidTargetSet` or `InvalidShotCount`.
    pub fn validate(&self) -> Result<TargetSet> {
        if self.num_qubits == 0 || self.num_qubits > MAX_QUBITS {
            return Err(GroverError::invalid_dimension(self.num_qubits));
        }
        let targets = TargetSet::new(self.num_qubits, self.search.iter().copied())?;
        if self.shots == 0 {
            return Err(GroverError::InvalidShotCount { shots: self.shots });
        }
        Ok(targets)
    }
}
