// src/simulation/session.rs

//! Stateful calling convention: one retained register per client session.

use crate::circuits::Circuit;
use crate::core::{BlochVector, Result, StateVector};
use crate::operations::GateStep;
use crate::simulation::{MeasurementOutcome, SimulationEngine, StepResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use tracing::{debug, warn};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    /// State is `|0…0⟩` and no gate has been applied since.
    Initialized,
    /// At least one gate has been applied, or a state was resumed.
    Ready,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionPhase::Initialized => write!(f, "INITIALIZED"),
            SessionPhase::Ready => write!(f, "READY"),
        }
    }
}

/// A register state retained across calls, plus the history needed to undo.
///
/// Each session exclusively owns its state; sessions share only the
/// engine's read-only catalogue. Results agree exactly with calling
/// [`SimulationEngine::apply`] on the same state.
///
/// A rejected operation returns the error and leaves state, history and
/// phase exactly as they were.
pub struct Session {
    engine: SimulationEngine,
    state: StateVector,
    history: Vec<StateVector>,
    phase: SessionPhase,
    // Phase to fall back to once undo has emptied the history.
    base_phase: SessionPhase,
    rng: StdRng,
}

impl Session {
    /// Starts a session at `|0…0⟩` on `num_qubits` qubits.
    ///
    /// The sampling source is seeded from `config.seed` when set, otherwise
    /// from the OS.
    pub fn new(engine: SimulationEngine, num_qubits: usize) -> Result<Self> {
        let state = engine.create(num_qubits)?;
        let rng = match engine.config().seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        debug!(num_qubits, "session started");
        Ok(Self {
            engine,
            state,
            history: Vec::new(),
            phase: SessionPhase::Initialized,
            base_phase: SessionPhase::Initialized,
            rng,
        })
    }

    /// Current register state.
    pub fn state(&self) -> &StateVector {
        &self.state
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Register size.
    pub fn num_qubits(&self) -> usize {
        self.state.num_qubits()
    }

    /// Number of states that [`undo`](Self::undo) can step back through.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Basis probabilities of the current state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.state.probabilities()
    }

    /// The engine this session runs on.
    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    /// Applies `gate` at `target` to the retained state.
    pub fn apply(&mut self, gate: &str, target: usize) -> Result<StepResult> {
        let result = self.engine.apply(&self.state, gate, target).inspect_err(|err| {
            warn!(%err, gate, target, "rejected gate application");
        })?;
        self.commit(result.state.clone());
        debug!(gate, target, step = self.history.len(), "applied gate");
        Ok(result)
    }

    /// [`apply`](Self::apply) for a prepared step.
    pub fn apply_step(&mut self, step: &GateStep) -> Result<StepResult> {
        self.apply(&step.gate, step.target)
    }

    /// Runs `circuit` against the retained state.
    ///
    /// All or nothing: if any step fails, the error is returned and the
    /// session is left as it was before the call. On success every
    /// intermediate state is pushed to the history, so each step can be
    /// undone individually.
    pub fn run(&mut self, circuit: &Circuit) -> Result<Vec<StepResult>> {
        let results = self.engine.run(&self.state, circuit).inspect_err(|err| {
            warn!(%err, steps = circuit.len(), "rejected circuit");
        })?;
        for result in &results {
            self.commit(result.state.clone());
        }
        debug!(steps = results.len(), history = self.history.len(), "ran circuit");
        Ok(results)
    }

    /// Samples the current state with the session's own random source.
    /// The state is not changed.
    pub fn measure(&mut self, shots: usize) -> Result<MeasurementOutcome> {
        self.engine.measure(&self.state, shots, &mut self.rng)
    }

    /// [`measure`](Self::measure) with the configured default shot count.
    pub fn measure_default(&mut self) -> Result<MeasurementOutcome> {
        let shots = self.engine.config().default_shots;
        self.measure(shots)
    }

    /// Samples the current state with a caller-supplied random source.
    pub fn measure_with<R: Rng + ?Sized>(&self, shots: usize, rng: &mut R) -> Result<MeasurementOutcome> {
        self.engine.measure(&self.state, shots, rng)
    }

    /// Reduced Bloch vector of `qubit` in the current state.
    pub fn bloch(&self, qubit: usize) -> Result<BlochVector> {
        self.engine.bloch(&self.state, qubit)
    }

    /// Steps back to the state before the most recent gate.
    ///
    /// Returns the restored state, or `None` when there is nothing to undo.
    /// Undoing every step returns the session to the phase it started in:
    /// `Initialized` after `new`, `reset` or `resize`, `Ready` after `resume`.
    pub fn undo(&mut self) -> Option<&StateVector> {
        let previous = self.history.pop()?;
        self.state = previous;
        if self.history.is_empty() {
            self.phase = self.base_phase;
        }
        debug!(history = self.history.len(), phase = %self.phase, "undid step");
        Some(&self.state)
    }

    /// Back to `|0…0⟩` on the same register, with empty history.
    pub fn reset(&mut self) -> Result<()> {
        let n = self.num_qubits();
        self.start_fresh(n)?;
        debug!(num_qubits = n, "session reset");
        Ok(())
    }

    /// Discards state and history and starts over at `|0…0⟩` on
    /// `num_qubits` qubits.
    pub fn resize(&mut self, num_qubits: usize) -> Result<()> {
        self.start_fresh(num_qubits)?;
        debug!(num_qubits, "session resized");
        Ok(())
    }

    /// Replaces the retained state with a caller-supplied one, discarding
    /// history. The register size follows the new state.
    pub fn resume(&mut self, state: StateVector) -> Result<()> {
        self.engine.check_register_size(state.num_qubits())?;
        self.state = state;
        self.history.clear();
        self.phase = SessionPhase::Ready;
        self.base_phase = SessionPhase::Ready;
        debug!(num_qubits = self.state.num_qubits(), "session resumed from supplied state");
        Ok(())
    }

    fn commit(&mut self, next: StateVector) {
        let previous = std::mem::replace(&mut self.state, next);
        self.history.push(previous);
        self.phase = SessionPhase::Ready;
    }

    // Nothing is touched unless the new zero state can be built.
    fn start_fresh(&mut self, num_qubits: usize) -> Result<()> {
        self.state = self.engine.create(num_qubits)?;
        self.history.clear();
        self.phase = SessionPhase::Initialized;
        self.base_phase = SessionPhase::Initialized;
        Ok(())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("phase", &self.phase)
            .field("state", &self.state)
            .field("history_len", &self.history.len())
            .finish_non_exhaustive()
    }
}
