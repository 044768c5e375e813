// src/simulation/results.rs
use crate::core::StateVector;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Outcome of one gate application.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepResult {
    /// Gate name as submitted.
    pub gate: String,
    /// Target qubit as submitted.
    pub target: usize,
    /// Register state after the gate.
    pub state: StateVector,
    /// `|a_i|^2` of `state`, one entry per basis index.
    pub probabilities: Vec<f64>,
}

impl StepResult {
    pub(crate) fn new(gate: &str, target: usize, state: StateVector) -> Self {
        let probabilities = state.probabilities();
        Self { gate: gate.to_string(), target, state, probabilities }
    }
}

impl fmt::Display for StepResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{} -> {} P[", self.gate, self.target, self.state)?;
        for (i, p) in self.probabilities.iter().enumerate() {
            write!(f, "{}{:.3}", if i > 0 { ", " } else { "" }, p)?;
        }
        write!(f, "]")
    }
}

/// Counts from a batch of computational-basis samples.
///
/// Labels are `num_qubits`-character bit strings, qubit 0 first. Outcomes
/// that were never observed are absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeasurementOutcome {
    num_qubits: usize,
    shots: usize,
    counts: BTreeMap<String, u64>,
}

impl MeasurementOutcome {
    pub(crate) fn new(num_qubits: usize, shots: usize, counts: BTreeMap<String, u64>) -> Self {
        Self { num_qubits, shots, counts }
    }

    /// Number of samples drawn.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Register size the labels are padded to.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Observed count for `label`, zero if it never occurred.
    pub fn count(&self, label: &str) -> u64 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// All observed labels with their counts, in label order.
    pub fn counts(&self) -> &BTreeMap<String, u64> {
        &self.counts
    }

    /// Observed frequency of `label` in `[0, 1]`.
    pub fn frequency(&self, label: &str) -> f64 {
        self.count(label) as f64 / self.shots as f64
    }
}

impl fmt::Display for MeasurementOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Measurement ({} shots):", self.shots)?;
        for (label, count) in &self.counts {
            writeln!(
                f,
                "  '{}': {} ({:.1}%)",
                label,
                count,
                100.0 * *count as f64 / self.shots as f64
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors_and_display() {
        let counts: BTreeMap<String, u64> = [("00".to_string(), 3), ("11".to_string(), 1)].into_iter().collect();
        let outcome = MeasurementOutcome::new(2, 4, counts);
        assert_eq!(outcome.count("00"), 3);
        assert_eq!(outcome.count("01"), 0);
        assert!((outcome.frequency("11") - 0.25).abs() < 1e-12);
        assert_eq!(outcome.to_string(), "Measurement (4 shots):\n  '00': 3 (75.0%)\n  '11': 1 (25.0%)\n");
    }

    #[test]
    fn test_outcome_serializes_counts_by_label() {
        let counts: BTreeMap<String, u64> = [("1".to_string(), 2)].into_iter().collect();
        let json = serde_json::to_string(&MeasurementOutcome::new(1, 2, counts)).unwrap();
        assert_eq!(json, r#"{"num_qubits":1,"shots":2,"counts":{"1":2}}"#);
    }

    #[test]
    fn test_step_result_serializes_pairs() {
        let result = StepResult::new("I", 0, StateVector::zero(1).unwrap());
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"gate":"I","target":0,"state":[[1.0,0.0],[0.0,0.0]],"probabilities":[1.0,0.0]}"#
        );
    }
}
