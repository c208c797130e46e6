// src/simulation/engine.rs
use crate::circuits::{mark_states, reflect_about_mean};
use crate::core::{PI, Result, StateVector, TargetSet};
use crate::validation::check_normalization;
use std::fmt;
use tracing::{debug, trace};

/// Phase of a [`GroverEngine`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Zero state allocated, nothing applied yet.
    Init,
    /// Uniform superposition prepared and `k` Grover iterations applied.
    Amplify(usize),
    /// Terminal: all iterations done, probabilities are final.
    Measured,
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineState::Init => write!(f, "Init"),
            EngineState::Amplify(k) => write!(f, "Amplify({})", k),
            EngineState::Measured => write!(f, "Measured"),
        }
    }
}

/// Optimal number of Grover iterations for `marked` targets among `dim`
/// states: `⌊(π/4)·√(dim/marked)⌋`, truncated toward zero.
///
/// Returns 0 when `marked == 0` or `marked >= dim`; amplification is
/// degenerate there and the uniform superposition is left as is.
pub fn optimal_iterations(dim: usize, marked: usize) -> usize {
    if marked == 0 || marked >= dim {
        return 0;
    }
    ((PI / 4.0) * (dim as f64 / marked as f64).sqrt()).floor() as usize
}

/// Owns the state vector of one search and evolves it through
/// `Init → Amplify(0..=r) → Measured`.
///
/// Entirely deterministic: given the register width and the targets, the
/// final probabilities are always the same.
#[derive(Debug, Clone)]
pub struct GroverEngine {
    vector: StateVector,
    targets: TargetSet,
    iterations: usize,
    state: EngineState,
}

impl GroverEngine {
    /// Allocates the zero state for `targets.num_qubits()` qubits and fixes
    /// the iteration count.
    pub fn new(targets: TargetSet) -> Result<Self> {
        let vector = StateVector::new(targets.num_qubits())?;
        let iterations = optimal_iterations(vector.dim(), targets.len());
        debug!(
            num_qubits = vector.num_qubits(),
            marked = targets.len(),
            iterations,
            "grover engine initialised"
        );
        Ok(Self {
            vector,
            targets,
            iterations,
            state: EngineState::Init,
        })
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Total iterations `r` this engine will apply.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn targets(&self) -> &TargetSet {
        &self.targets
    }

    /// Current amplitudes, valid in every state.
    pub fn vector(&self) -> &StateVector {
        &self.vector
    }

    /// Performs one transition and returns the new state.
    ///
    /// `Init` prepares the superposition, each `Amplify(k)` with `k < r`
    /// applies the oracle and then the diffuser, `Amplify(r)` moves to
    /// `Measured`. Advancing a measured engine changes nothing.
    ///
    /// The diffuser is the O(D) closed form; the gate form differs only by
    /// a global phase of -1.
    pub fn advance(&mut self) -> EngineState {
        self.state = match self.state {
            EngineState::Init => {
                self.vector.apply_hadamard_all();
                self.assert_normalized("superposition");
                EngineState::Amplify(0)
            }
            EngineState::Amplify(k) if k < self.iterations => {
                mark_states(&mut self.vector, self.targets.iter());
                self.assert_normalized("oracle");
                reflect_about_mean(&mut self.vector);
                self.assert_normalized("diffuser");
                trace!(iteration = k + 1, of = self.iterations, "grover iteration applied");
                EngineState::Amplify(k + 1)
            }
            EngineState::Amplify(_) | EngineState::Measured => EngineState::Measured,
        };
        self.state
    }

    /// Drives the engine to `Measured` and returns the final probabilities.
    pub fn run(&mut self) -> Vec<f64> {
        while self.advance() != EngineState::Measured {}
        let probabilities = self.probabilities();
        debug!(
            target_mass = self.targets.iter().map(|k| probabilities[k]).sum::<f64>(),
            "amplification finished"
        );
        probabilities
    }

    /// `|a_k|²` for every basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.vector.probabilities()
    }

    fn assert_normalized(&self, step: &str) {
        debug_assert!(
            check_normalization(&self.vector, None).is_ok(),
            "state norm drifted after {}: {}",
            step,
            self.vector.norm_sqr()
        );
    }
}
