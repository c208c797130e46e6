// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod basis;
pub mod error;
pub mod state;
pub mod targets;

// Re-export public types for convenient access via `qsearch::core::TypeName`
pub use basis::{bitstring, parse_bitstring};
pub use error::{GroverError, Result};
pub use state::StateVector;
pub use targets::TargetSet;

pub mod constants;
pub use constants::qsearch_constants::{MAX_QUBITS, NORM_TOLERANCE, PI}; // Re-export
