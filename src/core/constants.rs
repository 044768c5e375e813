//! Numeric constants shared by the engine.

/// Tolerances and limits used when validating register states
pub mod engine_constants {
    /// Allowed deviation of `Σ|a_i|^2` from 1 for a supplied state.
    pub const NORM_TOLERANCE: f64 = 1e-6;
    /// Tolerance for `G†·G == I` when checking catalogue entries.
    pub const UNITARY_TOLERANCE: f64 = 1e-9;
    /// Largest register the engine builds dense operators for.
    pub const MAX_QUBITS: usize = 10;
    /// Default register limit applied by `EngineConfig`.
    pub const DEFAULT_MAX_QUBITS: usize = 8;
    /// Default shot count for `Session::measure_default`.
    pub const DEFAULT_SHOTS: usize = 1024;
}
