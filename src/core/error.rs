//! Error handling logic

use thiserror::Error;

/// Input-validation failures. All of them are detected before any
/// amplitude is touched and are returned to the caller unchanged.
///
/// Norm drift is not an input error; see
/// [`crate::validation::check_normalization`].
#[derive(Debug, Clone, PartialEq, Eq, Error)] // Eq useful for testing error variants
pub enum GroverError {
    /// Qubit count is zero or too large to simulate.
    #[error("Invalid Dimension: {num_qubits} qubits requested, supported range is 1..={max}")]
    InvalidDimension {
        /// Requested number of qubits
        num_qubits: usize,
        /// Largest supported number of qubits
        max: usize,
    },

    /// Target set is empty, holds a value outside `0..2^N`, or a malformed bit-string.
    #[error("Invalid Target Set: {message}")]
    InvalidTargetSet {
        /// InvalidTargetSet failure message
        message: String,
    },

    /// Amplitude or probability vector whose length is not `2^N`.
    #[error("Invalid Amplitude Count: {len} entries (length must be a power of two)")]
    InvalidAmplitudeCount {
        /// Length that was supplied
        len: usize,
    },

    /// Gate addressed a qubit the register does not have.
    #[error("Qubit Out Of Range: qubit {qubit} on a {num_qubits}-qubit register")]
    QubitOutOfRange {
        /// Requested qubit
        qubit: usize,
        /// Register width
        num_qubits: usize,
    },

    /// Circuit replayed on a state of a different width.
    #[error("Width Mismatch: circuit spans {expected} qubits, state has {found}")]
    WidthMismatch {
        /// Circuit width
        expected: usize,
        /// State width
        found: usize,
    },

    /// Shot count is zero.
    #[error("Invalid Shot Count: {shots} (at least one shot is required)")]
    InvalidShotCount {
        /// Requested number of shots
        shots: u64,
    },
}

impl GroverError {
    /// Builds an `InvalidDimension` error against the crate-wide limit.
    pub fn invalid_dimension(num_qubits: usize) -> Self {
        Self::InvalidDimension { num_qubits, max: crate::core::MAX_QUBITS }
    }

    /// Builds an `InvalidTargetSet` error from any message.
    pub fn invalid_targets(message: impl Into<String>) -> Self {
        Self::InvalidTargetSet { message: message.into() }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GroverError>;
