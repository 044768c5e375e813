// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod state;
pub mod bloch;

// Re-export public types for convenient access via `qstep::core::TypeName`
pub use error::{EngineError, Result};
pub use state::StateVector;
pub use bloch::BlochVector;

pub mod constants;
pub use constants::engine_constants::{MAX_QUBITS, NORM_TOLERANCE, UNITARY_TOLERANCE};
