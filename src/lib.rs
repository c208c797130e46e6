// src/lib.rs

//! `qsearch` - State-vector simulation of Grover's search
//!
//! This library prepares a uniform superposition over N qubits, amplifies a
//! set of marked basis states with the optimal number of oracle/diffuser
//! rounds, samples measurement shots from the result and reports which
//! states won and how accurate the search was.

pub mod analysis;
pub mod circuits;
pub mod config;
pub mod core;
pub mod operations;
pub mod simulation;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use analysis::{Outcome, Verdict, Winner, analyze, chart_series, winners};
pub use circuits::{Circuit, CircuitBuilder, invert_about_mean, mark_states, reflect_about_mean};
pub use config::GroverConfig;
pub use core::{GroverError, Result, StateVector, TargetSet};
pub use operations::Operation;
pub use simulation::{
    EngineState, GroverEngine, GroverSimulator, Histogram, Sampler, SimulationResult,
    optimal_iterations,
};
pub use validation::{NormalizationDrift, check_normalization, check_probabilities};

// Example 1: Default search
// Five qubits, targets {0, 3, 9, 11}, seeded sampling.
/// ```
/// use qsearch::{GroverConfig, GroverError, GroverSimulator};
///
/// let config = GroverConfig::default().with_seed(7).with_shots(4000);
/// let result = GroverSimulator::new(config).run()?;
///
/// println!("{}", result);
/// // Two iterations for 4 targets among 32 states.
/// assert_eq!(result.iterations(), 2);
/// assert_eq!(result.histogram().total(), 4000);
/// assert!(result.outcome().is_success());
/// # Ok::<(), GroverError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Driving the engine by hand
// Steps through the state machine, then samples and analyzes separately.
/// ```
/// use qsearch::{EngineState, GroverEngine, Sampler, TargetSet, analyze};
///
/// let targets = TargetSet::from_bitstrings(3, ["000", "011"]).unwrap();
/// let mut engine = GroverEngine::new(targets.clone()).unwrap();
///
/// assert_eq!(engine.advance(), EngineState::Amplify(0)); // superposition
/// assert_eq!(engine.advance(), EngineState::Amplify(1)); // oracle + diffuser
/// assert_eq!(engine.advance(), EngineState::Measured);
///
/// let histogram = Sampler::seeded(1).sample(&engine.probabilities(), 1000).unwrap();
/// let outcome = analyze(&histogram, &targets);
/// assert_eq!(outcome.accuracy(), Some(100.0));
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
