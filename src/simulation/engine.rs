// src/simulation/engine.rs
use crate::circuits::Circuit;
use crate::config::EngineConfig;
use crate::core::{BlochVector, EngineError, Result, StateVector};
use crate::gates::GateCatalogue;
use crate::simulation::expander::operator_for;
use crate::simulation::{MeasurementOutcome, StepResult, sampler};
use ndarray::ArrayView1;
use num_complex::Complex64;
use rand::Rng;
use std::sync::Arc;

/// Stateless state-vector engine.
///
/// Every method takes the register state as an argument and returns a new
/// value; nothing is retained between calls. The engine holds only the
/// read-only gate catalogue and its configuration, so it is cheap to clone
/// and can be shared across threads serving different sessions.
///
/// It does not log. Callers that want a trace of a session use
/// [`Session`](crate::Session), which wraps an engine and a retained state.
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    catalogue: Arc<GateCatalogue>,
    config: EngineConfig,
}

impl SimulationEngine {
    /// Engine over the shared standard catalogue.
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::with_catalogue(GateCatalogue::shared(), config)
    }

    /// Engine over an explicitly supplied catalogue.
    pub fn with_catalogue(catalogue: Arc<GateCatalogue>, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { catalogue, config })
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The gate catalogue used to resolve names.
    pub fn catalogue(&self) -> &GateCatalogue {
        &self.catalogue
    }

    /// Names of every gate `apply` accepts, sorted.
    pub fn list_gates(&self) -> Vec<&'static str> {
        self.catalogue.names()
    }

    /// `|0…0⟩` on `num_qubits` qubits.
    ///
    /// # Errors
    /// * `InvalidRegisterSize` unless `1 <= num_qubits <= config.max_qubits`.
    pub fn create(&self, num_qubits: usize) -> Result<StateVector> {
        self.check_register_size(num_qubits)?;
        StateVector::zero(num_qubits)
    }

    /// Validates caller-supplied amplitudes against the configured tolerance
    /// and register limit.
    pub fn state_from_amplitudes(&self, amplitudes: Vec<Complex64>) -> Result<StateVector> {
        let state = StateVector::from_amplitudes_with_tolerance(amplitudes, self.config.norm_tolerance)?;
        self.check_register_size(state.num_qubits())?;
        Ok(state)
    }

    /// Applies `gate` at `target` to `state`, returning the evolved state and
    /// its basis probabilities. `state` itself is untouched.
    ///
    /// The same arguments always produce bit-identical results.
    ///
    /// # Errors
    /// * `UnknownGate` for a name outside the catalogue.
    /// * `RegisterSizeMismatch` for the two-qubit gate on a register other
    ///   than two qubits.
    /// * `InvalidTarget` if `target >= state.num_qubits()`.
    /// * `InvalidRegisterSize` if the state is wider than `config.max_qubits`.
    pub fn apply(&self, state: &StateVector, gate: &str, target: usize) -> Result<StepResult> {
        let matrix = self.catalogue.lookup(gate)?;
        let n = state.num_qubits();
        self.check_register_size(n)?;
        let operator = operator_for(matrix, target, n)?;

        let evolved = operator.dot(&ArrayView1::from(state.amplitudes()));
        Ok(StepResult::new(gate, target, StateVector::from_evolved(evolved.to_vec(), n)))
    }

    /// Stateless form of [`apply`](Self::apply) for a raw amplitude list as
    /// received from a caller.
    ///
    /// The gate name is checked first, then the amplitudes (shape and
    /// normalization, `MalformedState`), then the target.
    pub fn apply_amplitudes(&self, amplitudes: Vec<Complex64>, gate: &str, target: usize) -> Result<StepResult> {
        self.catalogue.lookup(gate)?;
        let state = self.state_from_amplitudes(amplitudes)?;
        self.apply(&state, gate, target)
    }

    /// Applies every step of `circuit` in order starting from `state`,
    /// returning one result per step. Stops at the first failing step.
    pub fn run(&self, state: &StateVector, circuit: &Circuit) -> Result<Vec<StepResult>> {
        let mut results: Vec<StepResult> = Vec::with_capacity(circuit.len());
        for step in circuit.steps() {
            let current = results.last().map_or(state, |r| &r.state);
            let next = self.apply(current, &step.gate, step.target)?;
            results.push(next);
        }
        Ok(results)
    }

    /// Samples `shots` computational-basis outcomes of `state` using `rng`.
    /// Does not change `state`.
    pub fn measure<R: Rng + ?Sized>(&self, state: &StateVector, shots: usize, rng: &mut R) -> Result<MeasurementOutcome> {
        sampler::measure(state, shots, rng)
    }

    /// Reduced Bloch vector of `qubit`.
    pub fn bloch(&self, state: &StateVector, qubit: usize) -> Result<BlochVector> {
        BlochVector::for_qubit(state, qubit)
    }

    pub(crate) fn check_register_size(&self, num_qubits: usize) -> Result<()> {
        if num_qubits == 0 || num_qubits > self.config.max_qubits {
            return Err(EngineError::InvalidRegisterSize { num_qubits, max: self.config.max_qubits });
        }
        Ok(())
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self { catalogue: GateCatalogue::shared(), config: EngineConfig::default() }
    }
}
