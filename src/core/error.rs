//! Error handling logic

use thiserror::Error;

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Failures reported by the simulation engine.
///
/// Every variant is produced *before* any state is mutated, so a caller that
/// receives one of these still holds its previous, valid state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// The gate name is not part of the catalogue.
    #[error("Unknown gate: '{name}'")]
    UnknownGate {
        /// Name the caller asked for
        name: String,
    },

    /// Target qubit outside `[0, num_qubits)`.
    #[error("Invalid target qubit {target} for a {num_qubits}-qubit register")]
    InvalidTarget {
        /// Requested target index
        target: usize,
        /// Size of the register the target was checked against
        num_qubits: usize,
    },

    /// The gate does not support this register size.
    #[error("Gate '{gate}' requires a {required}-qubit register, got {actual}")]
    RegisterSizeMismatch {
        /// Gate that was rejected
        gate: String,
        /// Register size the gate is wired for
        required: usize,
        /// Register size it was applied to
        actual: usize,
    },

    /// A supplied amplitude list cannot be a register state.
    #[error("Malformed state vector: {reason}")]
    MalformedState {
        /// What was wrong with it
        reason: String,
    },

    /// Non-positive shot count.
    #[error("Invalid shot count {shots}: at least one shot is required")]
    InvalidShots {
        /// Requested shots
        shots: usize,
    },

    /// Register size outside the supported range.
    #[error("Invalid register size {num_qubits}: expected 1..={max} qubits")]
    InvalidRegisterSize {
        /// Requested number of qubits
        num_qubits: usize,
        /// Largest register the engine will build
        max: usize,
    },

    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {message}")]
    Config {
        /// Config failure message
        message: String,
    },
}

impl EngineError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedState { reason: reason.into() }
    }

    pub(crate) fn invalid_target(target: usize, num_qubits: usize) -> Self {
        Self::InvalidTarget { target, num_qubits }
    }
}
