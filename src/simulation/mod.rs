// src/simulation/mod.rs

//! State-vector simulation: operator expansion, gate application and
//! measurement sampling.
//!
//! [`SimulationEngine`] is the stateless entry point: it takes a state and
//! returns a new one. [`Session`] wraps an engine with a retained state for
//! callers that submit gates one at a time.

mod results;
pub mod engine;
pub mod expander;
pub mod sampler;
pub mod session;

pub use engine::SimulationEngine;
pub use expander::{Operator, expand, operator_for};
pub use results::{MeasurementOutcome, StepResult};
pub use sampler::{basis_label, measure};
pub use session::{Session, SessionPhase};
