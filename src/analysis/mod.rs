// src/analysis/mod.rs

//! Interprets a measurement histogram: which states won, whether they are
//! the targets, and how much of the shot budget landed on the targets.

use crate::core::{TargetSet, bitstring};
use crate::simulation::Histogram;
use serde::Serialize;
use std::fmt;

/// Label of the merged non-winner bar.
pub const OTHERS_LABEL: &str = "Others";

/// One of the most frequently measured states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Winner {
    pub state: usize,
    /// `state` as an N-bit string, MSB first.
    pub bits: String,
    pub count: u64,
}

/// Whether the winners are exactly target states.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Verdict {
    /// Every winner is a target. `accuracy` is the percentage of all shots
    /// that measured some target state.
    Found { accuracy: f64 },
    /// At least one winner is not a target; no accuracy is reported.
    NotFound,
}

/// Analysis of one histogram against its target set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub winners: Vec<Winner>,
    pub targets: Vec<usize>,
    pub num_qubits: usize,
    pub verdict: Verdict,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self.verdict, Verdict::Found { .. })
    }

    /// Accuracy in percent, `None` on failure.
    pub fn accuracy(&self) -> Option<f64> {
        match self.verdict {
            Verdict::Found { accuracy } => Some(accuracy),
            Verdict::NotFound => None,
        }
    }
}

/// The `k` states with the highest counts, most frequent first.
///
/// Equal counts are ordered by ascending state index, which also decides
/// who takes the last slot when a tie straddles the cutoff. Fewer than `k`
/// winners are returned when fewer states were measured.
pub fn winners(histogram: &Histogram, k: usize) -> Vec<Winner> {
    let mut ranked: Vec<(usize, u64)> = histogram.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked
        .into_iter()
        .take(k)
        .map(|(state, count)| Winner {
            state,
            bits: bitstring(state, histogram.num_qubits()),
            count,
        })
        .collect()
}

/// Picks `|targets|` winners and judges them.
///
/// Success requires every winner to be a target and at least one shot in
/// the histogram. Targets that never showed up count as 0 towards the
/// accuracy rather than being an error.
pub fn analyze(histogram: &Histogram, targets: &TargetSet) -> Outcome {
    let winners = winners(histogram, targets.len());
    let total = histogram.total();

    let verdict = if total > 0 && winners.iter().all(|w| targets.contains(w.state)) {
        let hits: u64 = targets.iter().map(|t| histogram.count(t)).sum();
        Verdict::Found {
            accuracy: 100.0 * hits as f64 / total as f64,
        }
    } else {
        Verdict::NotFound
    };

    Outcome {
        winners,
        targets: targets.iter().collect(),
        num_qubits: targets.num_qubits(),
        verdict,
    }
}

/// One histogram bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bar {
    pub label: String,
    pub count: u64,
}

/// Bars for the results chart: winners first, then the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    pub winners: Vec<Bar>,
    pub others: Vec<Bar>,
}

/// Splits `histogram` into winner bars and non-winner bars.
///
/// With `combine` set, all non-winners are merged into one bar labelled
/// [`OTHERS_LABEL`] (present even when its count is 0); otherwise each
/// non-winner gets its own bar, in ascending state order.
pub fn chart_series(histogram: &Histogram, winners: &[Winner], combine: bool) -> ChartSeries {
    let winner_bars = winners
        .iter()
        .map(|w| Bar {
            label: w.bits.clone(),
            count: w.count,
        })
        .collect();

    let rest = histogram
        .iter()
        .filter(|(state, _)| !winners.iter().any(|w| w.state == *state));
    let others = if combine {
        vec![Bar {
            label: OTHERS_LABEL.to_string(),
            count: rest.map(|(_, count)| count).sum(),
        }]
    } else {
        rest.map(|(state, count)| Bar {
            label: bitstring(state, histogram.num_qubits()),
            count,
        })
        .collect()
    };

    ChartSeries {
        winners: winner_bars,
        others,
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let winner_bits: Vec<&str> = self.winners.iter().map(|w| w.bits.as_str()).collect();
        let winner_ints: Vec<usize> = self.winners.iter().map(|w| w.state).collect();
        let target_bits: Vec<String> = self
            .targets
            .iter()
            .map(|t| bitstring(*t, self.num_qubits))
            .collect();

        writeln!(f, "WINNER(S):")?;
        writeln!(f, "Binary = {:?}", winner_bits)?;
        writeln!(f, "Decimal = {:?}", winner_ints)?;
        writeln!(f)?;
        writeln!(f, "TARGET(S):")?;
        writeln!(f, "Binary = {:?}", target_bits)?;
        writeln!(f, "Decimal = {:?}", self.targets)?;
        writeln!(f)?;
        match self.verdict {
            Verdict::Found { accuracy } => {
                writeln!(f, "Target(s) found with {:.2}% accuracy!", accuracy)
            }
            Verdict::NotFound => writeln!(f, "Target(s) not found..."),
        }
    }
}
