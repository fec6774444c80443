//! Named reference states
//!
//! Starting points for the demos. All constructors are pure functions of
//! their arguments and build amplitudes directly rather than by running
//! circuits.

use crate::config::MAX_QUBITS;
use crate::state_vector::{check_qubit_count, StateVector};
use num_complex::Complex64;
use qlab_core::basis::{dimension, qubit_mask};
use qlab_core::complex::{from_polar, ZERO};
use qlab_core::{QuantumError, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;

/// The four maximally entangled two-qubit Bell states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BellState {
    /// |Φ+⟩ = (|00⟩ + |11⟩)/√2, selector 0
    PhiPlus,
    /// |Φ−⟩ = (|00⟩ − |11⟩)/√2, selector 1
    PhiMinus,
    /// |Ψ+⟩ = (|01⟩ + |10⟩)/√2, selector 2
    PsiPlus,
    /// |Ψ−⟩ = (|01⟩ − |10⟩)/√2, selector 3
    PsiMinus,
}

impl BellState {
    /// All four variants in selector order
    pub const ALL: [BellState; 4] = [
        BellState::PhiPlus,
        BellState::PhiMinus,
        BellState::PsiPlus,
        BellState::PsiMinus,
    ];

    /// Basis indices carrying the two amplitudes, and the relative sign
    fn support(self) -> (usize, usize, f64) {
        match self {
            BellState::PhiPlus => (0b00, 0b11, 1.0),
            BellState::PhiMinus => (0b00, 0b11, -1.0),
            BellState::PsiPlus => (0b01, 0b10, 1.0),
            BellState::PsiMinus => (0b01, 0b10, -1.0),
        }
    }
}

impl TryFrom<usize> for BellState {
    type Error = QuantumError;

    fn try_from(index: usize) -> Result<Self> {
        Self::ALL.get(index).copied().ok_or_else(|| {
            QuantumError::invalid_argument(format!("Bell state selector {} not in 0..4", index))
        })
    }
}

/// The all-zero state |0...0⟩; `num_qubits = 0` is allowed
pub fn zero_state(num_qubits: usize) -> Result<StateVector> {
    StateVector::zero(num_qubits)
}

/// Computational basis state |index⟩
pub fn basis_state(index: usize, num_qubits: usize) -> Result<StateVector> {
    StateVector::basis(index, num_qubits)
}

/// One of the four Bell states on two qubits
pub fn bell_state(variant: BellState) -> StateVector {
    let (first, second, sign) = variant.support();
    let mut amplitudes = vec![ZERO; 4];
    amplitudes[first] = Complex64::new(FRAC_1_SQRT_2, 0.0);
    amplitudes[second] = Complex64::new(sign * FRAC_1_SQRT_2, 0.0);
    StateVector::from_parts(2, amplitudes)
}

/// Bell state by selector 0..=3
///
/// # Errors
/// [`QuantumError::InvalidArgument`] for a selector above 3.
pub fn bell_state_by_index(index: usize) -> Result<StateVector> {
    Ok(bell_state(BellState::try_from(index)?))
}

/// GHZ state (|0...0⟩ + |1...1⟩)/√2
///
/// For one qubit this is |+⟩.
pub fn ghz_state(num_qubits: usize) -> Result<StateVector> {
    check_preset_qubits(num_qubits)?;
    let dim = dimension(num_qubits);
    let mut amplitudes = vec![ZERO; dim];
    amplitudes[0] = Complex64::new(FRAC_1_SQRT_2, 0.0);
    amplitudes[dim - 1] = Complex64::new(FRAC_1_SQRT_2, 0.0);
    Ok(StateVector::from_parts(num_qubits, amplitudes))
}

/// W state: equal superposition of every single-excitation basis state
///
/// For one qubit this is |1⟩.
pub fn w_state(num_qubits: usize) -> Result<StateVector> {
    check_preset_qubits(num_qubits)?;
    let amplitude = Complex64::new(1.0 / (num_qubits as f64).sqrt(), 0.0);
    let mut amplitudes = vec![ZERO; dimension(num_qubits)];
    for qubit in 0..num_qubits {
        amplitudes[qubit_mask(qubit)] = amplitude;
    }
    Ok(StateVector::from_parts(num_qubits, amplitudes))
}

/// |+⟩ on every qubit: all 2^n amplitudes equal to 1/√(2^n)
pub fn uniform_superposition(num_qubits: usize) -> Result<StateVector> {
    check_preset_qubits(num_qubits)?;
    let dim = dimension(num_qubits);
    let amplitude = Complex64::new(1.0 / (dim as f64).sqrt(), 0.0);
    Ok(StateVector::from_parts(num_qubits, vec![amplitude; dim]))
}

/// cos(θ/2)|0⟩ + e^(iφ)sin(θ/2)|1⟩, the pure state at Bloch angles (θ, φ)
pub fn single_qubit_from_angles(theta: f64, phi: f64) -> StateVector {
    let alpha = Complex64::new((theta / 2.0).cos(), 0.0);
    let beta = from_polar((theta / 2.0).sin(), phi);
    StateVector::from_parts(1, vec![alpha, beta])
}

fn check_preset_qubits(num_qubits: usize) -> Result<()> {
    if num_qubits == 0 {
        return Err(QuantumError::invalid_argument(
            "preset states need at least one qubit",
        ));
    }
    check_qubit_count(num_qubits, MAX_QUBITS)
}
