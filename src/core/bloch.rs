// src/core/bloch.rs

use super::error::{EngineError, Result};
use super::state::StateVector;
use num_complex::Complex64;
use num_traits::Zero;
use serde::Serialize;
use std::fmt;

/// Bloch vector of one qubit of a register.
///
/// For a register larger than one qubit this is the vector of the qubit's
/// reduced density matrix. Its length is 1 for a qubit in a pure product
/// state and shrinks towards 0 as the qubit becomes entangled with the rest
/// of the register, which is what a visualization wants to show.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlochVector {
    /// `⟨σ_x⟩`
    pub x: f64,
    /// `⟨σ_y⟩`
    pub y: f64,
    /// `⟨σ_z⟩`; +1 is `|0⟩`, -1 is `|1⟩`
    pub z: f64,
}

impl BlochVector {
    /// Reduced Bloch vector for `qubit` of `state`.
    ///
    /// With `ρ` the qubit's reduced density matrix:
    /// `x = 2·Re ρ₁₀`, `y = 2·Im ρ₁₀`, `z = ρ₀₀ − ρ₁₁`.
    pub fn for_qubit(state: &StateVector, qubit: usize) -> Result<Self> {
        let n = state.num_qubits();
        if qubit >= n {
            return Err(EngineError::invalid_target(qubit, n));
        }
        let mask = 1usize << (n - 1 - qubit);
        let amps = state.amplitudes();

        let mut rho00 = 0.0;
        let mut rho11 = 0.0;
        let mut rho10 = Complex64::zero();
        for i0 in (0..amps.len()).filter(|i| i & mask == 0) {
            let a0 = amps[i0];
            let a1 = amps[i0 | mask];
            rho00 += a0.norm_sqr();
            rho11 += a1.norm_sqr();
            rho10 += a0.conj() * a1;
        }

        Ok(Self {
            x: 2.0 * rho10.re,
            y: 2.0 * rho10.im,
            z: rho00 - rho11,
        })
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl fmt::Display for BlochVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bloch({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_1_SQRT_2;

    const TOL: f64 = 1e-12;

    fn state(amps: &[(f64, f64)]) -> StateVector {
        StateVector::from_amplitudes(amps.iter().map(|&(re, im)| Complex64::new(re, im)).collect())
            .expect("test state must be valid")
    }

    #[test]
    fn test_zero_state_points_north() -> Result<()> {
        let b = BlochVector::for_qubit(&StateVector::zero(1)?, 0)?;
        assert!((b.z - 1.0).abs() < TOL);
        assert!(b.x.abs() < TOL && b.y.abs() < TOL);
        Ok(())
    }

    #[test]
    fn test_plus_i_points_along_y() -> Result<()> {
        let b = BlochVector::for_qubit(&state(&[(FRAC_1_SQRT_2, 0.0), (0.0, FRAC_1_SQRT_2)]), 0)?;
        assert!((b.y - 1.0).abs() < TOL);
        assert!(b.x.abs() < TOL && b.z.abs() < TOL);
        Ok(())
    }

    #[test]
    fn test_second_qubit_of_product_state() -> Result<()> {
        // |0⟩ ⊗ |1⟩ = index 1
        let b = BlochVector::for_qubit(&state(&[(0.0, 0.0), (1.0, 0.0), (0.0, 0.0), (0.0, 0.0)]), 1)?;
        assert!((b.z + 1.0).abs() < TOL);
        let b0 = BlochVector::for_qubit(&state(&[(0.0, 0.0), (1.0, 0.0), (0.0, 0.0), (0.0, 0.0)]), 0)?;
        assert!((b0.z - 1.0).abs() < TOL);
        Ok(())
    }

    #[test]
    fn test_bell_pair_is_maximally_mixed() -> Result<()> {
        let bell = state(&[(FRAC_1_SQRT_2, 0.0), (0.0, 0.0), (0.0, 0.0), (FRAC_1_SQRT_2, 0.0)]);
        for q in 0..2 {
            assert!(BlochVector::for_qubit(&bell, q)?.length() < 1e-9);
        }
        Ok(())
    }

    #[test]
    fn test_out_of_range_qubit() {
        let err = BlochVector::for_qubit(&StateVector::zero(2).unwrap(), 2).unwrap_err();
        assert_eq!(err, EngineError::InvalidTarget { target: 2, num_qubits: 2 });
    }
}
