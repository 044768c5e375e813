// src/gates/mod.rs

//! The fixed catalogue of named unitary gates.
//!
//! Matrices are built once, in closed form, and never change afterwards. A
//! process-wide instance is available through [`GateCatalogue::shared`]; it
//! is read-only, so sessions on different threads can use it without
//! synchronization.

use crate::core::{EngineError, Result};
use crate::validation::is_unitary;
use ndarray::{Array2, array};
use num_complex::Complex64;
use num_traits::{One, Zero};
use std::collections::BTreeMap;
use std::f64::consts::FRAC_1_SQRT_2;
use std::sync::{Arc, OnceLock};

/// Name of the fixed two-qubit controlled-NOT entry.
pub const CNOT: &str = "CNOT";
/// Accepted alias for [`CNOT`].
pub const CX: &str = "CX";

/// A named unitary matrix.
///
/// Single-qubit gates are 2×2. The only wider entry is the 4×4 controlled-NOT,
/// wired with qubit 0 as control and qubit 1 as target over a whole
/// two-qubit register.
#[derive(Debug, Clone, PartialEq)]
pub struct GateMatrix {
    name: &'static str,
    matrix: Array2<Complex64>,
}

impl GateMatrix {
    fn new(name: &'static str, matrix: Array2<Complex64>) -> Self {
        debug_assert!(matrix.nrows() == matrix.ncols() && matrix.nrows().is_power_of_two());
        Self { name, matrix }
    }

    /// Canonical name of the gate.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The gate's matrix in the computational basis.
    pub fn matrix(&self) -> &Array2<Complex64> {
        &self.matrix
    }

    /// Number of qubits the matrix acts on (1 or 2).
    pub fn num_qubits(&self) -> usize {
        self.matrix.nrows().trailing_zeros() as usize
    }

    /// Whether `G†·G == I` within `1e-9`.
    pub fn is_unitary(&self) -> bool {
        is_unitary(&self.matrix, None)
    }

    /// Conjugate transpose `G†`.
    pub fn adjoint(&self) -> Array2<Complex64> {
        self.matrix.t().mapv(|c| c.conj())
    }
}

/// Immutable table of the gates the engine accepts.
#[derive(Debug, Clone)]
pub struct GateCatalogue {
    gates: BTreeMap<&'static str, GateMatrix>,
}

impl GateCatalogue {
    /// Builds the standard catalogue: `I`, `X`, `Y`, `Z`, `H`, `S`, `Sdg`,
    /// `T`, `Tdg` and the two-qubit `CNOT` (also reachable as `CX`).
    pub fn standard() -> Self {
        let one = Complex64::one();
        let zero = Complex64::zero();
        let i = Complex64::i();
        let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
        // e^(iπ/4) = (1+i)/√2
        let exp_i_pi_4 = Complex64::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2);

        let single = [
            ("I", array![[one, zero], [zero, one]]),
            ("X", array![[zero, one], [one, zero]]),
            ("Y", array![[zero, -i], [i, zero]]),
            ("Z", array![[one, zero], [zero, -one]]),
            ("H", array![[h, h], [h, -h]]),
            ("S", array![[one, zero], [zero, i]]),
            ("Sdg", array![[one, zero], [zero, -i]]),
            ("T", array![[one, zero], [zero, exp_i_pi_4]]),
            ("Tdg", array![[one, zero], [zero, exp_i_pi_4.conj()]]),
        ];

        // Basis order |q0 q1⟩: |00⟩, |01⟩, |10⟩, |11⟩. Flips q1 when q0 is 1.
        let cnot = GateMatrix::new(
            CNOT,
            array![
                [one, zero, zero, zero],
                [zero, one, zero, zero],
                [zero, zero, zero, one],
                [zero, zero, one, zero],
            ],
        );

        let mut gates: BTreeMap<&'static str, GateMatrix> = single
            .into_iter()
            .map(|(name, matrix)| (name, GateMatrix::new(name, matrix)))
            .collect();
        gates.insert(CX, cnot.clone());
        gates.insert(CNOT, cnot);

        Self { gates }
    }

    /// Process-wide read-only catalogue, built on first use.
    pub fn shared() -> Arc<GateCatalogue> {
        static SHARED: OnceLock<Arc<GateCatalogue>> = OnceLock::new();
        Arc::clone(SHARED.get_or_init(|| Arc::new(GateCatalogue::standard())))
    }

    /// Looks up a gate by name. Names are case-sensitive (`Sdg`, not `SDG`).
    pub fn lookup(&self, name: &str) -> Result<&GateMatrix> {
        self.gates
            .get(name)
            .ok_or_else(|| EngineError::UnknownGate { name: name.to_string() })
    }

    /// Whether `name` is an accepted gate name.
    pub fn contains(&self, name: &str) -> bool {
        self.gates.contains_key(name)
    }

    /// Every accepted name, aliases included, in sorted order.
    pub fn names(&self) -> Vec<&'static str> {
        self.gates.keys().copied().collect()
    }

    /// Iterates over `(name, gate)` pairs in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &GateMatrix)> {
        self.gates.iter().map(|(name, gate)| (*name, gate))
    }
}

impl Default for GateCatalogue {
    fn default() -> Self {
        Self::standard()
    }
}
