// src/simulation/mod.rs

//! Runs Grover's search end to end: amplification, sampling, analysis.
//! This module contains the `GroverSimulator` entry point, the
//! `GroverEngine` that evolves the state vector and the `Sampler` that
//! turns the final probabilities into a histogram.

pub mod engine;
mod results;
pub mod sampler;

// Re-export the main public interface types
pub use engine::{EngineState, GroverEngine, optimal_iterations};
pub use results::{Histogram, SimulationResult};
pub use sampler::Sampler;

use crate::analysis;
use crate::circuits::{Circuit, CircuitBuilder};
use crate::config::GroverConfig;
use crate::core::Result;
use tracing::{info, instrument};

/// Orchestrates independent runs of one [`GroverConfig`].
///
/// Every call to [`run`](Self::run) builds its own state vector, sampler and
/// histogram; nothing is shared between runs.
#[derive(Debug, Clone, Default)] // Allows GroverSimulator::default() with the default config
pub struct GroverSimulator {
    config: GroverConfig,
}

impl GroverSimulator {
    pub fn new(config: GroverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GroverConfig {
        &self.config
    }

    /// Runs one simulation.
    ///
    /// # Returns
    /// * `Ok(SimulationResult)` with the histogram, its analysis, the
    ///   iteration count and the final probabilities.
    /// * `Err(GroverError)` when the configuration fails validation; nothing
    ///   is simulated in that case.
    #[instrument(skip_all, fields(num_qubits = self.config.num_qubits, shots = self.config.shots))]
    pub fn run(&self) -> Result<SimulationResult> {
        // 1. Validate everything before any amplitude is allocated.
        let targets = self.config.validate()?;

        // 2. Deterministic amplification.
        let mut engine = GroverEngine::new(targets.clone())?;
        let probabilities = engine.run();

        // 3. Sampling, the only random step.
        let mut sampler = match self.config.seed {
            Some(seed) => Sampler::seeded(seed),
            None => Sampler::from_entropy(),
        };
        let histogram = sampler.sample(&probabilities, self.config.shots)?;

        // 4. Winners and accuracy.
        let outcome = analysis::analyze(&histogram, &targets);
        info!(
            iterations = engine.iterations(),
            success = outcome.is_success(),
            accuracy = outcome.accuracy().unwrap_or(0.0),
            "grover run complete"
        );

        Ok(SimulationResult::new(histogram, outcome, engine.iterations(), probabilities))
    }

    /// The oracle, diffuser and full Grover circuit for this configuration,
    /// in that order, for the diagnostic printer. Purely descriptive.
    pub fn circuits(&self) -> Result<Vec<Circuit>> {
        let targets = self.config.validate()?;
        let n = targets.num_qubits();
        let iterations = optimal_iterations(1usize << n, targets.len());
        Ok(vec![
            CircuitBuilder::new(n).with_name("ORACLE").oracle(&targets).build(),
            CircuitBuilder::new(n).with_name("DIFFUSER").diffuser().build(),
            CircuitBuilder::new(n)
                .with_name("GROVER CIRCUIT")
                .grover(&targets, iterations)
                .build(),
        ])
    }
}
