// src/validation/mod.rs

//! Checks applied to amplitude lists and gate matrices before the engine
//! trusts them.

use crate::core::constants::engine_constants::{NORM_TOLERANCE, UNITARY_TOLERANCE};
use crate::core::{EngineError, Result};
use ndarray::Array2;
use num_complex::Complex64;
use num_traits::{One, Zero};

/// Returns `n` such that `len == 2^n`.
///
/// # Returns
/// * `Ok(n)` for a non-empty, power-of-two length.
/// * `Err(EngineError::MalformedState)` otherwise.
pub fn qubits_for_len(len: usize) -> Result<usize> {
    if len == 0 {
        return Err(EngineError::malformed("state vector is empty"));
    }
    if !len.is_power_of_two() {
        return Err(EngineError::malformed(format!("length {} is not a power of two", len)));
    }
    Ok(len.trailing_zeros() as usize)
}

/// Checks that `Σ|a_i|^2` is within `tolerance` of 1.
///
/// # Arguments
/// * `amplitudes` - The amplitudes to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to `1e-6`.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(EngineError::MalformedState)` if the norm is off or not finite.
pub fn check_normalization(amplitudes: &[Complex64], tolerance: Option<f64>) -> Result<()> {
    let effective_tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let norm_sq: f64 = amplitudes.iter().map(|c| c.norm_sqr()).sum();
    if !norm_sq.is_finite() || (norm_sq - 1.0).abs() > effective_tolerance {
        Err(EngineError::malformed(format!(
            "normalization failed, sum(|a_i|^2) = {} (deviation > {})",
            norm_sq, effective_tolerance
        )))
    } else {
        Ok(())
    }
}

/// Whether `G†·G` equals the identity within `tolerance` (default `1e-9`),
/// compared entry by entry.
pub fn is_unitary(matrix: &Array2<Complex64>, tolerance: Option<f64>) -> bool {
    let effective_tolerance = tolerance.unwrap_or(UNITARY_TOLERANCE);
    let (rows, cols) = matrix.dim();
    if rows != cols {
        return false;
    }
    let adjoint = matrix.t().mapv(|c| c.conj());
    let product = adjoint.dot(matrix);
    product.indexed_iter().all(|((r, c), value)| {
        let expected = if r == c { Complex64::one() } else { Complex64::zero() };
        (*value - expected).norm() <= effective_tolerance
    })
}
