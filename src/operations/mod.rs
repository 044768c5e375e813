// src/operations/mod.rs

//! The unit of work a client submits: one named gate at one target qubit.

use crate::gates::GateCatalogue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One gate application request.
///
/// The name is resolved against the catalogue only when the step is applied,
/// so a `GateStep` can be built, stored and serialized without one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GateStep {
    /// Catalogue name, e.g. `"H"` or `"CNOT"`.
    pub gate: String,
    /// Target qubit. Ignored by the fixed two-qubit gate apart from a range
    /// check.
    pub target: usize,
}

impl GateStep {
    /// Creates a step.
    pub fn new(gate: impl Into<String>, target: usize) -> Self {
        Self { gate: gate.into(), target }
    }

    /// Number of qubits the named gate acts on, per the shared catalogue.
    /// Names the catalogue does not know count as single-qubit.
    pub fn width(&self) -> usize {
        GateCatalogue::shared().lookup(&self.gate).map_or(1, |gate| gate.num_qubits())
    }

    /// Whether this names a two-qubit gate (the fixed controlled-NOT).
    pub fn is_two_qubit(&self) -> bool {
        self.width() == 2
    }

    /// Smallest register this step can be applied to. Saturates for targets
    /// no register could hold.
    pub fn min_qubits(&self) -> usize {
        match self.width() {
            1 => self.target.saturating_add(1),
            width => width,
        }
    }
}

impl fmt::Display for GateStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_two_qubit() {
            write!(f, "{}(0->1)", self.gate)
        } else {
            write!(f, "{}[{}]", self.gate, self.target)
        }
    }
}
