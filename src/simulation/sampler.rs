// src/simulation/sampler.rs

//! Computational-basis measurement sampling.

use crate::core::{EngineError, Result, StateVector};
use crate::simulation::MeasurementOutcome;
use rand::Rng;
use std::collections::BTreeMap;

/// Zero-padded, MSB-first bit string of `index` over `num_qubits` qubits.
/// Qubit 0 is the leftmost character.
pub fn basis_label(index: usize, num_qubits: usize) -> String {
    format!("{:0width$b}", index, width = num_qubits)
}

/// Draws one basis index from `probabilities` using a single uniform draw.
///
/// A draw that falls past the accumulated total (rounding in a distribution
/// that sums to slightly under 1) resolves to the last index with non-zero
/// weight, so an outcome of probability zero is never returned.
fn sample_index<R: Rng + ?Sized>(probabilities: &[f64], rng: &mut R) -> usize {
    let r: f64 = rng.random();
    let mut cumulative = 0.0;
    let mut last_nonzero = 0;
    for (i, &p) in probabilities.iter().enumerate() {
        if p > 0.0 {
            last_nonzero = i;
        }
        cumulative += p;
        if r < cumulative {
            return i;
        }
    }
    last_nonzero
}

/// Samples `shots` independent computational-basis outcomes of `state`.
///
/// The state is not collapsed or renormalized. All randomness comes from
/// `rng`, so a seeded generator reproduces the same counts exactly.
///
/// # Errors
/// * `InvalidShots` if `shots == 0`.
pub fn measure<R: Rng + ?Sized>(state: &StateVector, shots: usize, rng: &mut R) -> Result<MeasurementOutcome> {
    if shots == 0 {
        return Err(EngineError::InvalidShots { shots });
    }

    let probabilities = state.probabilities();
    let mut by_index: BTreeMap<usize, u64> = BTreeMap::new();
    for _ in 0..shots {
        *by_index.entry(sample_index(&probabilities, rng)).or_insert(0) += 1;
    }

    let n = state.num_qubits();
    let counts = by_index
        .into_iter()
        .map(|(index, count)| (basis_label(index, n), count))
        .collect();
    Ok(MeasurementOutcome::new(n, shots, counts))
}
