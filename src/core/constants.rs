//! Numerical constants shared by the simulator.

/// Limits and tolerances used across the crate
pub mod qsearch_constants {
    /// Largest supported register. A 2^24 vector of `Complex<f64>` is 256 MiB.
    pub const MAX_QUBITS: usize = 24;
    /// Allowed deviation of `Σ|a_i|²` from 1.0 after a unitary step.
    pub const NORM_TOLERANCE: f64 = 1e-9;
    /// Used for the optimal iteration count `⌊(π/4)·√(D/m)⌋`
    pub const PI: f64 = std::f64::consts::PI;
}
