// src/circuits/mod.rs

//! Builds the oracle and diffuser and describes Grover circuits as ordered
//! sequences of operations (`qsearch::operations::Operation`).
//!
//! The engine applies [`oracle::mark_states`] and
//! [`diffuser::invert_about_mean`] directly to the state vector. A
//! [`Circuit`] is the same sequence written down, so it can be printed for
//! diagnostics or replayed against a fresh [`StateVector`].

pub mod diffuser;
pub mod oracle;

pub use diffuser::{invert_about_mean, reflect_about_mean};
pub use oracle::{decomposed_oracle, mark_state_decomposed, mark_states};

use crate::core::{GroverError, Result, StateVector, TargetSet};
use crate::operations::Operation;
use std::fmt;

/// An ordered sequence of operations on an N-qubit register.
#[derive(Clone, PartialEq)]
pub struct Circuit {
    /// Optional label shown in the listing ("ORACLE", "DIFFUSER", ...).
    name: Option<String>,
    num_qubits: usize,
    /// The order is significant: operations are applied first to last.
    operations: Vec<Operation>,
}

impl Circuit {
    /// An unnamed circuit with no operations.
    pub fn new(num_qubits: usize) -> Self {
        Self {
            name: None,
            num_qubits,
            operations: Vec::new(),
        }
    }

    pub fn add_operation(&mut self, op: Operation) {
        self.operations.push(op);
    }

    /// Appends `ops` after the current last operation.
    pub fn add_operations<I>(&mut self, ops: I)
    where
        I: IntoIterator<Item = Operation>,
    {
        self.operations.extend(ops);
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Operations in application order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Replays every operation, in order, on `state`.
    ///
    /// # Errors
    /// `WidthMismatch` when `state` does not have this circuit's width.
    pub fn apply(&self, state: &mut StateVector) -> Result<()> {
        if state.num_qubits() != self.num_qubits {
            return Err(GroverError::WidthMismatch {
                expected: self.num_qubits,
                found: state.num_qubits(),
            });
        }
        for op in &self.operations {
            op.apply(state)?;
        }
        Ok(())
    }
}

/// Chained construction of [`Circuit`]s, with shortcuts for the Grover
/// building blocks.
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    /// Starts an empty circuit on `num_qubits` qubits.
    pub fn new(num_qubits: usize) -> Self {
        Self {
            circuit: Circuit::new(num_qubits),
        }
    }

    /// Appends one operation.
    pub fn add_op(mut self, op: Operation) -> Self {
        self.circuit.add_operation(op);
        self
    }

    pub fn add_ops<I>(mut self, ops: I) -> Self
    where
        I: IntoIterator<Item = Operation>,
    {
        self.circuit.add_operations(ops);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.circuit.set_name(name);
        self
    }

    /// Hadamard layer: |0…0⟩ becomes the uniform superposition.
    pub fn superposition(self) -> Self {
        self.add_op(Operation::HadamardAll)
    }

    /// Phase oracle marking every state in `targets`.
    pub fn oracle(self, targets: &TargetSet) -> Self {
        self.add_op(Operation::PhaseFlip { states: targets.iter().collect() })
    }

    /// Diffuser as H^⊗N, phase flip of |0…0⟩, H^⊗N.
    pub fn diffuser(self) -> Self {
        self.add_ops([
            Operation::HadamardAll,
            Operation::PhaseFlip { states: vec![0] },
            Operation::HadamardAll,
        ])
    }

    /// Full Grover sequence: superposition, then `iterations` rounds of
    /// oracle followed by diffuser.
    pub fn grover(self, targets: &TargetSet, iterations: usize) -> Self {
        (0..iterations).fold(self.superposition(), |b, _| b.oracle(targets).diffuser())
    }

    /// Returns the finished circuit.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            writeln!(f, "{}:", name)?;
        }
        writeln!(f, "Circuit[{} operations on {} qubits]", self.len(), self.num_qubits)?;
        let width = self.len().to_string().len();
        for (t, op) in self.operations.iter().enumerate() {
            writeln!(f, "  {:>width$}: {}", t, op.describe(self.num_qubits), width = width)?;
        }
        Ok(())
    }
}

// Debug prints the same listing
impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
