// src/core/state.rs

use crate::core::constants::engine_constants::{MAX_QUBITS, NORM_TOLERANCE};
use crate::core::error::{EngineError, Result};
use crate::validation::{check_normalization, qubits_for_len};
use num_complex::Complex64;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Amplitudes of an `n`-qubit register.
///
/// Index bits map to qubit values big-endian: qubit 0 is the most significant
/// bit of the basis index, so `|10⟩` on two qubits lives at index 2.
///
/// Construction always validates the shape (non-empty, power-of-two length)
/// and the normalization `Σ|a_i|^2 ≈ 1`, so holding a `StateVector` means
/// holding a valid register state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Complex64>", into = "Vec<Complex64>")]
pub struct StateVector {
    amplitudes: Vec<Complex64>,
    num_qubits: usize,
}

impl StateVector {
    /// The all-zero basis state `|0…0⟩` for `num_qubits` qubits.
    pub fn zero(num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 || num_qubits > MAX_QUBITS {
            return Err(EngineError::InvalidRegisterSize { num_qubits, max: MAX_QUBITS });
        }
        let mut amplitudes = vec![Complex64::zero(); 1usize << num_qubits];
        amplitudes[0] = Complex64::one();
        Ok(Self { amplitudes, num_qubits })
    }

    /// Builds a state from caller-supplied amplitudes, checking normalization
    /// against the default tolerance.
    pub fn from_amplitudes(amplitudes: Vec<Complex64>) -> Result<Self> {
        Self::from_amplitudes_with_tolerance(amplitudes, NORM_TOLERANCE)
    }

    /// Like [`StateVector::from_amplitudes`] with an explicit tolerance.
    pub fn from_amplitudes_with_tolerance(amplitudes: Vec<Complex64>, tolerance: f64) -> Result<Self> {
        let num_qubits = qubits_for_len(amplitudes.len())?;
        if num_qubits == 0 {
            return Err(EngineError::malformed("a register needs at least one qubit"));
        }
        if num_qubits > MAX_QUBITS {
            return Err(EngineError::InvalidRegisterSize { num_qubits, max: MAX_QUBITS });
        }
        check_normalization(&amplitudes, Some(tolerance))?;
        Ok(Self { amplitudes, num_qubits })
    }

    /// Wraps the output of a unitary step. Shape is inherited from the input
    /// state, and normalization is preserved by unitarity, so neither is
    /// re-checked here.
    pub(crate) fn from_evolved(amplitudes: Vec<Complex64>, num_qubits: usize) -> Self {
        debug_assert_eq!(amplitudes.len(), 1usize << num_qubits);
        Self { amplitudes, num_qubits }
    }

    /// Read-only access to the amplitudes.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Number of qubits `n` in the register.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of basis states, `2^n`.
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// `|a_i|^2` for every basis index, in index order.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|c| c.norm_sqr()).collect()
    }

    /// `Σ|a_i|^2`.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum()
    }

    /// Consumes the state, returning the amplitudes.
    pub fn into_amplitudes(self) -> Vec<Complex64> {
        self.amplitudes
    }
}

impl TryFrom<Vec<Complex64>> for StateVector {
    type Error = EngineError;

    fn try_from(amplitudes: Vec<Complex64>) -> Result<Self> {
        Self::from_amplitudes(amplitudes)
    }
}

impl From<StateVector> for Vec<Complex64> {
    fn from(state: StateVector) -> Self {
        state.amplitudes
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateVector[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn test_zero_state_layout() -> Result<()> {
        let state = StateVector::zero(3)?;
        assert_eq!(state.dim(), 8);
        assert_eq!(state.num_qubits(), 3);
        assert_eq!(state.amplitudes()[0], Complex64::one());
        assert!(state.amplitudes()[1..].iter().all(|c| c.is_zero()));
        Ok(())
    }

    #[test]
    fn test_zero_qubits_rejected() {
        assert_eq!(
            StateVector::zero(0),
            Err(EngineError::InvalidRegisterSize { num_qubits: 0, max: MAX_QUBITS })
        );
        assert!(StateVector::zero(MAX_QUBITS + 1).is_err());
    }

    #[test]
    fn test_from_amplitudes_rejects_bad_length() {
        let amps = vec![Complex64::one(), Complex64::zero(), Complex64::zero()];
        assert!(matches!(StateVector::from_amplitudes(amps), Err(EngineError::MalformedState { .. })));
        assert!(matches!(StateVector::from_amplitudes(Vec::new()), Err(EngineError::MalformedState { .. })));
    }

    #[test]
    fn test_from_amplitudes_rejects_unnormalized() {
        let amps = vec![Complex64::one(), Complex64::one()];
        assert!(matches!(StateVector::from_amplitudes(amps), Err(EngineError::MalformedState { .. })));
    }

    #[test]
    fn test_from_amplitudes_accepts_plus_state() -> Result<()> {
        let amps = vec![Complex64::new(FRAC_1_SQRT_2, 0.0), Complex64::new(0.0, FRAC_1_SQRT_2)];
        let state = StateVector::from_amplitudes(amps)?;
        assert_eq!(state.num_qubits(), 1);
        let probs = state.probabilities();
        assert!((probs[0] - 0.5).abs() < 1e-12);
        assert!((probs[1] - 0.5).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_serde_pairs_and_validation() {
        let state = StateVector::zero(1).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, "[[1.0,0.0],[0.0,0.0]]");

        let back: StateVector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);

        let bad = serde_json::from_str::<StateVector>("[[1.0,0.0],[1.0,0.0]]");
        assert!(bad.is_err(), "unnormalized wire state must not deserialize");
    }

    #[test]
    fn test_display() {
        let state = StateVector::zero(1).unwrap();
        assert_eq!(state.to_string(), "StateVector[1.0000+0.0000i, 0.0000+0.0000i]");
    }
}
