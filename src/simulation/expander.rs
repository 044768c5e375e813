// src/simulation/expander.rs

//! Lifts a catalogue gate to an operator on the whole register.

use crate::core::{EngineError, Result};
use crate::gates::GateMatrix;
use ndarray::Array2;
use ndarray::linalg::kron;
use num_complex::Complex64;

/// A `2^n × 2^n` operator on the full register. Built per application and
/// never cached.
pub type Operator = Array2<Complex64>;

/// Builds `F_0 ⊗ F_1 ⊗ … ⊗ F_{n-1}` where `F_target` is the single-qubit
/// `gate` and every other factor is the 2×2 identity.
///
/// Qubit 0 is the leftmost factor, matching the big-endian index order of
/// [`StateVector`](crate::core::StateVector).
///
/// # Errors
/// * `InvalidTarget` if `target >= n`.
/// * `RegisterSizeMismatch` if `gate` is not a single-qubit gate; wider
///   gates go through [`operator_for`].
pub fn expand(gate: &GateMatrix, target: usize, n: usize) -> Result<Operator> {
    if target >= n {
        return Err(EngineError::invalid_target(target, n));
    }
    if gate.num_qubits() != 1 {
        return Err(EngineError::RegisterSizeMismatch {
            gate: gate.name().to_string(),
            required: gate.num_qubits(),
            actual: 1,
        });
    }

    let identity = Array2::<Complex64>::eye(2);
    let factor = |q: usize| if q == target { gate.matrix() } else { &identity };

    let mut operator = factor(0).clone();
    for q in 1..n {
        operator = kron(&operator.view(), &factor(q).view());
    }
    Ok(operator)
}

/// Full-register operator for `gate` applied at `target` on an `n`-qubit
/// register.
///
/// Single-qubit gates are expanded with [`expand`]. The fixed two-qubit
/// controlled-NOT is returned as is, and only for `n == 2`; its wiring is
/// control 0, target 1 regardless of `target`, which is still range-checked.
pub fn operator_for(gate: &GateMatrix, target: usize, n: usize) -> Result<Operator> {
    match gate.num_qubits() {
        1 => expand(gate, target, n),
        width => {
            if n != width {
                return Err(EngineError::RegisterSizeMismatch {
                    gate: gate.name().to_string(),
                    required: width,
                    actual: n,
                });
            }
            if target >= n {
                return Err(EngineError::invalid_target(target, n));
            }
            Ok(gate.matrix().clone())
        }
    }
}
