// src/lib.rs

//! `qstep` - step-by-step state-vector simulation of small quantum registers
//!
//! The crate evolves an `n`-qubit register under a fixed catalogue of unitary
//! gates, one gate at a time or as a batch, and samples computational-basis
//! measurements. It is meant to sit behind a visualization front end: every
//! step returns the new amplitudes and outcome probabilities.
//!
//! Basis indices are big-endian: qubit 0 is the most significant bit, and
//! the leftmost character of a measurement label.

pub mod core;
pub mod gates;
pub mod operations;
pub mod circuits;
pub mod simulation;
pub mod validation;
pub mod config;

// Re-export the most common types for easier top-level use
pub use core::{BlochVector, EngineError, Result, StateVector};
pub use gates::{GateCatalogue, GateMatrix};
pub use operations::GateStep;
pub use circuits::{Circuit, CircuitBuilder};
pub use simulation::{MeasurementOutcome, Session, SessionPhase, SimulationEngine, StepResult};
pub use config::EngineConfig;
pub use validation::{check_normalization, is_unitary};

// Example 1: Stateless stepping
// The caller owns the state and passes it back in on every step.
/// ```
/// use qstep::{SimulationEngine, EngineError};
///
/// let engine = SimulationEngine::default();
/// let state = engine.create(1)?;
///
/// let step = engine.apply(&state, "H", 0)?;
/// assert!((step.probabilities[0] - 0.5).abs() < 1e-9);
/// assert!((step.probabilities[1] - 0.5).abs() < 1e-9);
///
/// // Hadamard is self-inverse
/// let back = engine.apply(&step.state, "H", 0)?;
/// assert!((back.probabilities[0] - 1.0).abs() < 1e-9);
///
/// assert_eq!(
///     engine.apply(&state, "Q", 0).unwrap_err(),
///     EngineError::UnknownGate { name: "Q".to_string() },
/// );
/// # Ok::<(), EngineError>(())
/// ```
#[doc(hidden)]
const _: () = ();

// Example 2: Bell pair in a session, then sampling
// A seeded config makes the counts reproducible.
/// ```
/// use qstep::{EngineConfig, Session, SimulationEngine};
///
/// let engine = SimulationEngine::new(EngineConfig::default().with_seed(2024))?;
/// let mut session = Session::new(engine, 2)?;
/// session.apply("H", 0)?;
/// session.apply("CNOT", 0)?;
///
/// let outcome = session.measure(1000)?;
/// println!("{}", outcome);
/// assert_eq!(outcome.count("00") + outcome.count("11"), 1000);
/// assert_eq!(outcome.count("01"), 0);
/// assert_eq!(outcome.count("10"), 0);
/// # Ok::<(), qstep::EngineError>(())
/// ```
#[doc(hidden)]
const _: () = ();
