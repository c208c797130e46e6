// src/simulation/sampler.rs
use super::results::Histogram;
use crate::core::{GroverError, Result};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use tracing::debug;

/// Draws measurement shots from a probability vector.
///
/// One `StdRng` is shared by every shot of a run, so a seeded sampler
/// reproduces the same histogram for the same distribution.
#[derive(Debug)]
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    /// Deterministic sampler, for tests and reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Sampler seeded from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self {
            rng: rand::make_rng(),
        }
    }

    /// Draws `shots` independent outcomes from `probabilities` (index = basis
    /// state) and returns their histogram; counts sum to exactly `shots`.
    ///
    /// Builds the cumulative distribution over the nonzero entries only and
    /// inverts it with a binary search per shot, so sparse distributions on
    /// large registers cost O(support) to prepare and O(log support) per
    /// shot. A distribution that does not sum to exactly 1 is sampled
    /// relative to its total.
    ///
    /// # Errors
    /// * `InvalidShotCount` when `shots` is 0.
    /// * `InvalidAmplitudeCount` when `probabilities` is not a power-of-two
    ///   length.
    /// * `InvalidDimension` when it carries no positive mass.
    pub fn sample(&mut self, probabilities: &[f64], shots: u64) -> Result<Histogram> {
        if shots == 0 {
            return Err(GroverError::InvalidShotCount { shots });
        }
        if !probabilities.len().is_power_of_two() {
            return Err(GroverError::InvalidAmplitudeCount { len: probabilities.len() });
        }
        let num_qubits = probabilities.len().trailing_zeros() as usize;

        let (support, cumulative): (Vec<usize>, Vec<f64>) = probabilities
            .iter()
            .enumerate()
            .filter(|(_, p)| **p > 0.0)
            .scan(0.0, |acc, (k, p)| {
                *acc += p;
                Some((k, *acc))
            })
            .unzip();

        let total = match cumulative.last() {
            Some(&total) if total > 0.0 && total.is_finite() => total,
            _ => return Err(GroverError::invalid_dimension(num_qubits)),
        };
        let last = support.len() - 1;

        let mut histogram = Histogram::new(num_qubits);
        for _ in 0..shots {
            let u = self.rng.random::<f64>() * total;
            let slot = cumulative.partition_point(|&c| c <= u).min(last);
            histogram.record(support[slot]);
        }
        debug!(shots, support = support.len(), distinct = histogram.len(), "sampling finished");
        Ok(histogram)
    }
}
