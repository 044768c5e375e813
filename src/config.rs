// src/config.rs

//! Engine configuration.

use crate::core::constants::engine_constants::{DEFAULT_MAX_QUBITS, DEFAULT_SHOTS, MAX_QUBITS, NORM_TOLERANCE};
use crate::core::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Tunables for a [`SimulationEngine`](crate::SimulationEngine) and the
/// sessions built on it. Missing fields take their defaults when loaded from
/// JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Allowed deviation of `Σ|a_i|^2` from 1 for caller-supplied states.
    pub norm_tolerance: f64,
    /// Largest register a session may create or resume. At most 10.
    pub max_qubits: usize,
    /// Shots used by `Session::measure_default`.
    pub default_shots: usize,
    /// Seed for a session's internal random source. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            norm_tolerance: NORM_TOLERANCE,
            max_qubits: DEFAULT_MAX_QUBITS,
            default_shots: DEFAULT_SHOTS,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Parses and validates a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| EngineError::Config { message: e.to_string() })?;
        config.validate()?;
        debug!(?config, "loaded engine config");
        Ok(config)
    }

    /// Reads, parses and validates a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| EngineError::Config {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_json_str(&json)
    }

    /// Same config with a fixed sampling seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks every field is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.norm_tolerance.is_finite() || self.norm_tolerance <= 0.0 {
            return Err(EngineError::Config {
                message: format!("norm_tolerance must be a positive number, got {}", self.norm_tolerance),
            });
        }
        if !(1..=MAX_QUBITS).contains(&self.max_qubits) {
            return Err(EngineError::Config {
                message: format!("max_qubits must be in 1..={}, got {}", MAX_QUBITS, self.max_qubits),
            });
        }
        if self.default_shots == 0 {
            return Err(EngineError::Config { message: "default_shots must be at least 1".to_string() });
        }
        Ok(())
    }
}
