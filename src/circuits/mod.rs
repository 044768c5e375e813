// src/circuits/mod.rs

//! Ordered sequences of [`GateStep`]s and a builder for them.
//!
//! A `Circuit` is the batch form of step-by-step submission: running it is
//! the same as applying each step in order. Order matters, since gates do not
//! commute in general.

pub mod presets;

use crate::core::MAX_QUBITS;
use crate::operations::GateStep;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered list of gate applications.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Circuit {
    steps: Vec<GateStep>,
}

impl Circuit {
    /// Creates a new, empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step.
    pub fn add_step(&mut self, step: GateStep) {
        self.steps.push(step);
    }

    /// Appends every step from `steps`, in order.
    pub fn add_steps<I>(&mut self, steps: I)
    where
        I: IntoIterator<Item = GateStep>,
    {
        self.steps.extend(steps);
    }

    /// The steps, in application order.
    pub fn steps(&self) -> &[GateStep] {
        &self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the circuit has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Smallest register every step fits on (0 for an empty circuit).
    pub fn min_qubits(&self) -> usize {
        self.steps.iter().map(GateStep::min_qubits).max().unwrap_or(0)
    }
}

impl FromIterator<GateStep> for Circuit {
    fn from_iter<I: IntoIterator<Item = GateStep>>(iter: I) -> Self {
        Self { steps: iter.into_iter().collect() }
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// Chained construction of a [`Circuit`].
///
/// ```
/// use qstep::CircuitBuilder;
///
/// let bell = CircuitBuilder::new().gate("H", 0).gate("CNOT", 0).build();
/// assert_eq!(bell.len(), 2);
/// assert_eq!(bell.min_qubits(), 2);
/// ```
#[derive(Default)]
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    /// Creates a new, empty CircuitBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `gate` at `target`.
    pub fn gate(mut self, gate: impl Into<String>, target: usize) -> Self {
        self.circuit.add_step(GateStep::new(gate, target));
        self
    }

    /// Appends a prepared step.
    pub fn add_step(mut self, step: GateStep) -> Self {
        self.circuit.add_step(step);
        self
    }

    /// Appends several steps.
    pub fn add_steps<I>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = GateStep>,
    {
        self.circuit.add_steps(steps);
        self
    }

    /// Finalizes the construction process and returns the built `Circuit`.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num_qubits = self.min_qubits();
        if self.steps.is_empty() {
            return writeln!(f, "Circuit[0 steps on 0 qubits]");
        }
        let num_steps = self.steps.len();

        // No register is this wide, so there is no diagram to draw.
        if num_qubits > MAX_QUBITS {
            writeln!(f, "Circuit[{} steps, targets beyond {} qubits]", num_steps, MAX_QUBITS)?;
            for (t, step) in self.steps.iter().enumerate() {
                writeln!(f, "  {}: {}", t, step)?;
            }
            return Ok(());
        }

        const GATE_WIDTH: usize = 7; // "───H───"
        const WIRE: &str = "───────";
        const V_WIRE: char = '│';
        const H_WIRE: char = '─';

        let mut grid: Vec<Vec<String>> = vec![vec![WIRE.to_string(); num_steps]; num_qubits];
        let mut v_connect: Vec<Vec<char>> = vec![vec![' '; num_steps]; num_qubits];

        fn format_gate(symbol: &str) -> String {
            let slen = symbol.chars().count();
            if slen >= GATE_WIDTH {
                symbol.chars().take(GATE_WIDTH).collect()
            } else {
                let total = GATE_WIDTH - slen;
                let pre = total / 2;
                let post = total - pre;
                format!("{}{}{}", H_WIRE.to_string().repeat(pre), symbol, H_WIRE.to_string().repeat(post))
            }
        }

        for (t, step) in self.steps.iter().enumerate() {
            if step.is_two_qubit() {
                grid[0][t] = format_gate("@");
                grid[1][t] = format_gate("X");
                v_connect[0][t] = V_WIRE;
                continue;
            }
            let symbol = match step.gate.as_str() {
                "I" => continue,
                "Sdg" => "S†",
                "Tdg" => "T†",
                other => other,
            };
            grid[step.target][t] = format_gate(symbol);
        }

        let label_width = format!("q{}: ", num_qubits - 1).len();
        writeln!(f, "Circuit[{} steps on {} qubits]", num_steps, num_qubits)?;
        for (q, row) in grid.iter().enumerate() {
            writeln!(f, "{:<width$}{}", format!("q{}: ", q), row.join(""), width = label_width)?;
            if q + 1 < num_qubits {
                write!(f, "{}", " ".repeat(label_width))?;
                for connector in &v_connect[q] {
                    let pad = GATE_WIDTH - 1;
                    write!(f, "{}{}{}", " ".repeat(pad / 2), connector, " ".repeat(pad - pad / 2))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_order() {
        let circuit = CircuitBuilder::new().gate("H", 0).gate("Z", 0).gate("X", 0).build();
        let names: Vec<&str> = circuit.steps().iter().map(|s| s.gate.as_str()).collect();
        assert_eq!(names, ["H", "Z", "X"]);
        assert_eq!(circuit.min_qubits(), 1);
    }

    #[test]
    fn test_empty_circuit() {
        let circuit = Circuit::new();
        assert!(circuit.is_empty());
        assert_eq!(circuit.min_qubits(), 0);
        assert_eq!(circuit.to_string(), "Circuit[0 steps on 0 qubits]\n");
    }

    #[test]
    fn test_batch_request_shape() {
        let circuit: Circuit =
            serde_json::from_str(r#"{ "steps": [ { "gate": "H", "target": 0 }, { "gate": "CNOT", "target": 0 } ] }"#)
                .unwrap();
        assert_eq!(circuit, CircuitBuilder::new().gate("H", 0).gate("CNOT", 0).build());
    }

    #[test]
    fn test_diagram_marks_cnot_and_skips_identity() {
        let circuit = CircuitBuilder::new().gate("H", 0).gate("I", 1).gate("CNOT", 0).build();
        let text = circuit.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Circuit[3 steps on 2 qubits]");
        assert_eq!(lines[1], "q0: ───H─────────────@───");
        assert_eq!(lines[2], "                     │   ");
        assert_eq!(lines[3], "q1: ─────────────────X───");
    }

    #[test]
    fn test_out_of_range_targets_format_as_step_list() {
        let circuit: Circuit =
            serde_json::from_str(r#"{"steps":[{"gate":"H","target":18446744073709551615}]}"#).unwrap();
        assert_eq!(circuit.min_qubits(), usize::MAX);
        let text = circuit.to_string();
        assert_eq!(text, "Circuit[1 steps, targets beyond 10 qubits]\n  0: H[18446744073709551615]\n");
        assert!(format!("{:?}", circuit).contains("18446744073709551615"));

        let wide = CircuitBuilder::new().gate("X", 0).gate("H", 1_000_000_000).build();
        assert!(wide.to_string().lines().nth(2).is_some_and(|l| l == "  1: H[1000000000]"));
    }
}
