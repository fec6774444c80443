//! Immutable pure-state representation
//!
//! A [`StateVector`] owns `2^n` amplitudes and always has unit norm. Every
//! operation in qlab takes a state by reference and returns a new one, so a
//! state handed to a renderer can never change underneath it.

use crate::config::{StateConfig, MAX_QUBITS};
use crate::gates;
use num_complex::Complex64;
use qlab_core::basis::{self, dimension};
use qlab_core::complex::{ONE, ZERO};
use qlab_core::{QuantumError, Result};
use qlab_gates::Gate;
use serde::{Deserialize, Serialize};

/// Quantum state vector of `n` qubits
///
/// Basis index `i` holds the amplitude of the classical outcome whose
/// qubit `k` equals bit `k` of `i` (see [`qlab_core::basis`]).
///
/// # Example
///
/// ```
/// use qlab_state::StateVector;
///
/// // Create a 2-qubit state (4 amplitudes)
/// let state = StateVector::zero(2).unwrap();
/// assert_eq!(state.num_qubits(), 2);
/// assert_eq!(state.dimension(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Complex64>", into = "Vec<Complex64>")]
pub struct StateVector {
    /// Number of qubits
    num_qubits: usize,

    /// Amplitudes, length 2^num_qubits
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// Create the all-zero state |0...0⟩
    ///
    /// `num_qubits = 0` gives the one-amplitude scalar state.
    ///
    /// # Errors
    /// [`QuantumError::InvalidArgument`] if `num_qubits` exceeds [`MAX_QUBITS`].
    pub fn zero(num_qubits: usize) -> Result<Self> {
        Self::basis(0, num_qubits)
    }

    /// Create the computational basis state with amplitude 1 at `index`
    pub fn basis(index: usize, num_qubits: usize) -> Result<Self> {
        check_qubit_count(num_qubits, MAX_QUBITS)?;
        let dim = dimension(num_qubits);
        if index >= dim {
            return Err(QuantumError::invalid_argument(format!(
                "basis index {} out of range for {} qubits",
                index, num_qubits
            )));
        }

        let mut amplitudes = vec![ZERO; dim];
        amplitudes[index] = ONE;
        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Create a state from amplitudes that must already have unit norm
    ///
    /// # Errors
    /// [`QuantumError::InvalidState`] if the length is not a power of two,
    /// an amplitude is not finite, or the norm deviates from 1 by more than
    /// the default tolerance.
    pub fn from_amplitudes(amplitudes: Vec<Complex64>) -> Result<Self> {
        Self::from_amplitudes_with(amplitudes, &StateConfig::default())
    }

    /// [`StateVector::from_amplitudes`] with explicit tolerances
    pub fn from_amplitudes_with(amplitudes: Vec<Complex64>, config: &StateConfig) -> Result<Self> {
        let num_qubits = check_shape(&amplitudes, config)?;

        let norm_sqr = norm_sqr(&amplitudes);
        if (norm_sqr - 1.0).abs() > config.norm_tolerance {
            return Err(QuantumError::invalid_state(format!(
                "norm² = {} deviates from 1 by more than {:e}",
                norm_sqr, config.norm_tolerance
            )));
        }

        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Create a state by rescaling arbitrary non-zero amplitudes to unit norm
    ///
    /// # Errors
    /// [`QuantumError::InvalidState`] for a bad length, non-finite values or an
    /// all-zero vector.
    pub fn from_unnormalized(mut amplitudes: Vec<Complex64>) -> Result<Self> {
        let config = StateConfig::default();
        let num_qubits = check_shape(&amplitudes, &config)?;

        let norm = norm_sqr(&amplitudes).sqrt();
        if norm <= config.zero_mass_threshold {
            return Err(QuantumError::invalid_state("cannot normalize the zero vector"));
        }

        let inv_norm = 1.0 / norm;
        for amplitude in amplitudes.iter_mut() {
            *amplitude *= inv_norm;
        }

        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Wrap amplitudes produced by a norm-preserving operation
    pub(crate) fn from_parts(num_qubits: usize, amplitudes: Vec<Complex64>) -> Self {
        debug_assert_eq!(amplitudes.len(), dimension(num_qubits));
        Self {
            num_qubits,
            amplitudes,
        }
    }

    /// Get the number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the state dimension (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Get a reference to the state amplitudes
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Amplitude at a basis index, if in range
    #[inline]
    pub fn amplitude(&self, index: usize) -> Option<Complex64> {
        self.amplitudes.get(index).copied()
    }

    /// Consume the state and return its amplitudes
    pub fn into_amplitudes(self) -> Vec<Complex64> {
        self.amplitudes
    }

    /// The L2 norm of the state vector
    pub fn norm(&self) -> f64 {
        norm_sqr(&self.amplitudes).sqrt()
    }

    /// True if |norm - 1| < epsilon
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.norm() - 1.0).abs() < epsilon
    }

    /// Re-check shape and norm against `config`
    pub fn validate(&self, config: &StateConfig) -> Result<()> {
        let num_qubits = check_shape(&self.amplitudes, config)?;
        debug_assert_eq!(num_qubits, self.num_qubits);
        let norm_sqr = norm_sqr(&self.amplitudes);
        if (norm_sqr - 1.0).abs() > config.norm_tolerance {
            return Err(QuantumError::invalid_state(format!(
                "norm² = {} deviates from 1",
                norm_sqr
            )));
        }
        Ok(())
    }

    /// Tensor product `other ⊗ self`
    ///
    /// `self` keeps qubits `0..n`, `other` is placed on qubits
    /// `n..n + m` above it.
    pub fn tensor(&self, other: &StateVector) -> Result<Self> {
        let num_qubits = self.num_qubits + other.num_qubits;
        check_qubit_count(num_qubits, MAX_QUBITS)?;

        let mut amplitudes = vec![ZERO; dimension(num_qubits)];
        for (high, &b) in other.amplitudes.iter().enumerate() {
            for (low, &a) in self.amplitudes.iter().enumerate() {
                amplitudes[basis::join(high, low, self.num_qubits)] = a * b;
            }
        }

        Ok(Self::from_parts(num_qubits, amplitudes))
    }

    /// Inner product ⟨self|other⟩
    ///
    /// # Errors
    /// [`QuantumError::InvalidArgument`] if the qubit counts differ.
    pub fn inner_product(&self, other: &StateVector) -> Result<Complex64> {
        if self.num_qubits != other.num_qubits {
            return Err(QuantumError::invalid_argument(format!(
                "cannot compare a {}-qubit state with a {}-qubit state",
                self.num_qubits, other.num_qubits
            )));
        }
        Ok(self
            .amplitudes
            .iter()
            .zip(other.amplitudes.iter())
            .map(|(a, b)| a.conj() * b)
            .sum())
    }

    /// Fidelity |⟨self|other⟩|², insensitive to global phase
    pub fn fidelity(&self, other: &StateVector) -> Result<f64> {
        Ok(self.inner_product(other)?.norm_sqr())
    }

    /// Apply a single-qubit gate, returning the new state
    pub fn apply(&self, gate: &Gate, target: usize) -> Result<Self> {
        gates::apply_single_qubit_gate(gate, target, self)
    }

    /// Apply a CNOT, returning the new state
    pub fn cnot(&self, control: usize, target: usize) -> Result<Self> {
        gates::apply_cnot(control, target, self)
    }
}

impl TryFrom<Vec<Complex64>> for StateVector {
    type Error = QuantumError;

    fn try_from(amplitudes: Vec<Complex64>) -> Result<Self> {
        Self::from_amplitudes(amplitudes)
    }
}

impl From<StateVector> for Vec<Complex64> {
    fn from(state: StateVector) -> Self {
        state.amplitudes
    }
}

/// Qubit count implied by a raw amplitude list
///
/// # Errors
/// [`QuantumError::InvalidState`] if the length is not a power of two.
pub fn num_qubits(amplitudes: &[Complex64]) -> Result<usize> {
    basis::num_qubits_for_len(amplitudes.len())
}

pub(crate) fn check_qubit_count(num_qubits: usize, limit: usize) -> Result<()> {
    if num_qubits > limit {
        return Err(QuantumError::invalid_argument(format!(
            "{} qubits exceeds the limit of {}",
            num_qubits, limit
        )));
    }
    Ok(())
}

fn check_shape(amplitudes: &[Complex64], config: &StateConfig) -> Result<usize> {
    let num_qubits = basis::num_qubits_for_len(amplitudes.len())?;
    if num_qubits > config.effective_max_qubits() {
        return Err(QuantumError::invalid_state(format!(
            "{} qubits exceeds the limit of {}",
            num_qubits,
            config.effective_max_qubits()
        )));
    }
    if let Some(index) = amplitudes.iter().position(|a| !a.is_finite()) {
        return Err(QuantumError::invalid_state(format!(
            "amplitude at index {} is not finite",
            index
        )));
    }
    Ok(num_qubits)
}

fn norm_sqr(amplitudes: &[Complex64]) -> f64 {
    amplitudes.iter().map(|a| a.norm_sqr()).sum()
}
