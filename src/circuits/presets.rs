// src/circuits/presets.rs

//! Ready-made two-qubit circuits over the fixed catalogue.

use super::{Circuit, CircuitBuilder};

/// `H` on qubit 0 then `CNOT`: `(|00⟩ + |11⟩)/√2`.
pub fn bell_pair() -> Circuit {
    CircuitBuilder::new().gate("H", 0).gate("CNOT", 0).build()
}

/// Superdense coding of the classical message `11`: prepare a Bell pair,
/// encode with `Z` then `X` on qubit 0, decode with `CNOT` then `H`. Ends in
/// `|11⟩` up to a global phase.
pub fn superdense_coding_11() -> Circuit {
    CircuitBuilder::new()
        .gate("H", 0)
        .gate("CNOT", 0)
        .gate("Z", 0)
        .gate("X", 0)
        .gate("CNOT", 0)
        .gate("H", 0)
        .build()
}

/// One Grover iteration searching for `|11⟩` on two qubits, which finds it
/// with certainty. The controlled-Z of the oracle and the diffuser is built
/// as `H·CNOT·H` on qubit 1.
pub fn grover_11() -> Circuit {
    let cz = || CircuitBuilder::new().gate("H", 1).gate("CNOT", 0).gate("H", 1).build().steps().to_vec();
    CircuitBuilder::new()
        .gate("H", 0)
        .gate("H", 1)
        // oracle
        .add_steps(cz())
        // diffuser
        .gate("H", 0)
        .gate("H", 1)
        .gate("Z", 0)
        .gate("Z", 1)
        .add_steps(cz())
        .gate("H", 0)
        .gate("H", 1)
        .build()
}

/// Every preset by display name.
pub fn all() -> Vec<(&'static str, Circuit)> {
    vec![
        ("Bell State", bell_pair()),
        ("Superdense Coding (11)", superdense_coding_11()),
        ("Grover Search (|11>)", grover_11()),
    ]
}
