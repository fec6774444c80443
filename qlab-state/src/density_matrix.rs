//! Density matrices, partial trace and Bloch extraction
//!
//! A density matrix ρ is a positive semi-definite, Hermitian matrix with
//! Tr(ρ) = 1. For a pure state ρ = |ψ⟩⟨ψ|. Tracing out part of an entangled
//! state leaves a mixed ρ, which is how a single qubit of a Bell pair ends
//! up at the centre of its Bloch sphere.
//!
//! # Example
//!
//! ```
//! use qlab_state::{bell_state_by_index, density_matrix, partial_trace, bloch_from_density};
//!
//! let rho = density_matrix(&bell_state_by_index(0).unwrap()).unwrap();
//! let reduced = partial_trace(&rho, 1, 2).unwrap();
//! let bloch = bloch_from_density(&reduced).unwrap();
//! assert!(bloch.magnitude() < 1e-12);
//! ```

use crate::config::MAX_DENSITY_QUBITS;
use crate::state_vector::{check_qubit_count, StateVector};
use num_complex::Complex64;
use qlab_core::basis::{dimension, insert_bit};
use qlab_core::complex::ZERO;
use qlab_core::{BlochVector, QuantumError, Result};
use std::fmt;
use tracing::trace;

/// Density matrix of `n` qubits
///
/// Stores the full 2^n × 2^n matrix in row-major order, using the same
/// basis indexing as [`StateVector`].
#[derive(Clone, PartialEq)]
pub struct DensityMatrix {
    /// Number of qubits
    num_qubits: usize,

    /// Dimension (2^num_qubits)
    dimension: usize,

    /// Elements in row-major order, length dimension²
    matrix: Vec<Complex64>,
}

impl DensityMatrix {
    /// Compute ρ = |ψ⟩⟨ψ|
    ///
    /// # Errors
    /// [`QuantumError::InvalidArgument`] if the state has more than
    /// [`MAX_DENSITY_QUBITS`] qubits.
    pub fn from_state_vector(state: &StateVector) -> Result<Self> {
        check_qubit_count(state.num_qubits(), MAX_DENSITY_QUBITS)?;
        let amplitudes = state.amplitudes();
        let dim = amplitudes.len();
        let mut matrix = Vec::with_capacity(dim * dim);

        // ρᵢⱼ = ψᵢ ψⱼ*
        for a_i in amplitudes {
            for a_j in amplitudes {
                matrix.push(a_i * a_j.conj());
            }
        }

        Ok(Self {
            num_qubits: state.num_qubits(),
            dimension: dim,
            matrix,
        })
    }

    /// Create maximally mixed state: ρ = I/2^n
    pub fn maximally_mixed(num_qubits: usize) -> Result<Self> {
        check_qubit_count(num_qubits, MAX_DENSITY_QUBITS)?;
        let dim = dimension(num_qubits);
        let mut matrix = vec![ZERO; dim * dim];

        let value = Complex64::new(1.0 / dim as f64, 0.0);
        for i in 0..dim {
            matrix[i * dim + i] = value;
        }

        Ok(Self {
            num_qubits,
            dimension: dim,
            matrix,
        })
    }

    /// Get number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get matrix dimension (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Get a matrix element ρᵢⱼ
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.matrix[row * self.dimension + col]
    }

    /// Get reference to the full matrix data
    pub fn matrix(&self) -> &[Complex64] {
        &self.matrix
    }

    /// Calculate trace: Tr(ρ)
    pub fn trace(&self) -> f64 {
        (0..self.dimension).map(|i| self.get(i, i).re).sum()
    }

    /// Calculate the purity: Tr(ρ²)
    ///
    /// Returns 1 for pure states, 1/2^n for the maximally mixed state.
    pub fn purity(&self) -> f64 {
        let dim = self.dimension;
        let mut trace = ZERO;

        // Tr(ρ²) = Σᵢⱼ ρᵢⱼ ρⱼᵢ
        for i in 0..dim {
            for j in 0..dim {
                trace += self.get(i, j) * self.get(j, i);
            }
        }

        trace.re
    }

    /// Check trace 1, Hermiticity and a non-negative diagonal
    pub fn is_valid(&self, tolerance: f64) -> bool {
        if (self.trace() - 1.0).abs() > tolerance {
            return false;
        }

        for i in 0..self.dimension {
            for j in (i + 1)..self.dimension {
                let diff = (self.get(i, j) - self.get(j, i).conj()).norm();
                if diff > tolerance {
                    return false;
                }
            }
        }

        (0..self.dimension).all(|i| self.get(i, i).re >= -tolerance)
    }

    /// Trace out one qubit, giving an (n−1)-qubit density matrix
    ///
    /// reduced[a][b] = Σ_v ρ[a with v inserted at `qubit`][b with v inserted at `qubit`]
    ///
    /// # Errors
    /// [`QuantumError::InvalidQubitIndex`] if `qubit >= n`.
    pub fn partial_trace(&self, qubit: usize) -> Result<Self> {
        QuantumError::check_qubit(qubit, self.num_qubits)?;
        trace!(qubit, num_qubits = self.num_qubits, "partial trace");

        let reduced_qubits = self.num_qubits - 1;
        let reduced_dim = dimension(reduced_qubits);
        let mut reduced = vec![ZERO; reduced_dim * reduced_dim];

        for a in 0..reduced_dim {
            for b in 0..reduced_dim {
                reduced[a * reduced_dim + b] = (0..=1u8)
                    .map(|v| self.get(insert_bit(a, qubit, v), insert_bit(b, qubit, v)))
                    .sum();
            }
        }

        Ok(Self {
            num_qubits: reduced_qubits,
            dimension: reduced_dim,
            matrix: reduced,
        })
    }

    /// Bloch vector of a single-qubit density matrix
    ///
    /// x = 2·Re(ρ₀₁), y = −2·Im(ρ₀₁), z = ρ₀₀ − ρ₁₁
    ///
    /// # Errors
    /// [`QuantumError::InvalidArgument`] unless the matrix is 2×2.
    pub fn bloch_vector(&self) -> Result<BlochVector> {
        self.require_single_qubit()?;
        let rho01 = self.get(0, 1);
        Ok(BlochVector::new(
            2.0 * rho01.re,
            -2.0 * rho01.im,
            self.get(0, 0).re - self.get(1, 1).re,
        ))
    }

    /// Von Neumann entropy S = −Tr(ρ log₂ ρ) of a single-qubit matrix, in bits
    ///
    /// Uses the exact eigenvalues (1 ± |r|)/2 from the Bloch length |r|.
    ///
    /// # Errors
    /// [`QuantumError::InvalidArgument`] unless the matrix is 2×2.
    pub fn von_neumann_entropy(&self) -> Result<f64> {
        let r = self.bloch_vector()?.magnitude().min(1.0);
        let entropy: f64 = [(1.0 + r) / 2.0, (1.0 - r) / 2.0]
            .iter()
            .filter(|&&lambda| lambda > 1e-15)
            .map(|&lambda| -lambda * lambda.log2())
            .sum();
        Ok(entropy)
    }

    fn require_single_qubit(&self) -> Result<()> {
        if self.dimension != 2 {
            return Err(QuantumError::invalid_argument(format!(
                "expected a single-qubit (2×2) density matrix, got {}×{}",
                self.dimension, self.dimension
            )));
        }
        Ok(())
    }
}

impl fmt::Debug for DensityMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DensityMatrix {{ qubits: {}, dim: {}, purity: {:.4} }}",
            self.num_qubits,
            self.dimension,
            self.purity()
        )
    }
}

/// Build ρ = |ψ⟩⟨ψ| from a pure state
///
/// # Errors
/// [`QuantumError::InvalidArgument`] above [`MAX_DENSITY_QUBITS`] qubits; use
/// [`reduced_density_matrix`] for single-qubit views of larger states.
pub fn density_matrix(state: &StateVector) -> Result<DensityMatrix> {
    DensityMatrix::from_state_vector(state)
}

/// Remove `qubit` from an m-qubit density matrix
///
/// # Errors
/// - [`QuantumError::InvalidArgument`] if `total_qubits` does not match `rho`
/// - [`QuantumError::InvalidQubitIndex`] if `qubit >= total_qubits`
pub fn partial_trace(rho: &DensityMatrix, qubit: usize, total_qubits: usize) -> Result<DensityMatrix> {
    if total_qubits != rho.num_qubits() {
        return Err(QuantumError::invalid_argument(format!(
            "density matrix has {} qubits, caller expected {}",
            rho.num_qubits(),
            total_qubits
        )));
    }
    rho.partial_trace(qubit)
}

/// 2×2 reduced density matrix of `keep` with every other qubit traced out
///
/// Computed directly from the amplitudes in O(2^n), without building the
/// full 4^n matrix.
///
/// # Errors
/// [`QuantumError::InvalidQubitIndex`] if `keep >= n`.
pub fn reduced_density_matrix(state: &StateVector, keep: usize) -> Result<DensityMatrix> {
    let n = state.num_qubits();
    QuantumError::check_qubit(keep, n)?;

    let amplitudes = state.amplitudes();
    let mut matrix = [ZERO; 4];
    for rest in 0..dimension(n - 1) {
        let a0 = amplitudes[insert_bit(rest, keep, 0)];
        let a1 = amplitudes[insert_bit(rest, keep, 1)];
        matrix[0] += a0 * a0.conj();
        matrix[1] += a0 * a1.conj();
        matrix[2] += a1 * a0.conj();
        matrix[3] += a1 * a1.conj();
    }

    Ok(DensityMatrix {
        num_qubits: 1,
        dimension: 2,
        matrix: matrix.to_vec(),
    })
}

/// Bloch vector of a single-qubit density matrix
pub fn bloch_from_density(rho: &DensityMatrix) -> Result<BlochVector> {
    rho.bloch_vector()
}

/// Bloch vector of a pure single-qubit state
///
/// # Errors
/// [`QuantumError::InvalidArgument`] unless the state has exactly one qubit.
pub fn bloch_coords(state: &StateVector) -> Result<BlochVector> {
    match state.amplitudes() {
        &[alpha, beta] => Ok(BlochVector::from_state(&[alpha, beta])),
        _ => Err(QuantumError::invalid_argument(format!(
            "expected a single-qubit state, got {} qubits",
            state.num_qubits()
        ))),
    }
}

/// Bloch vector of one qubit of a possibly entangled state
///
/// Shorter than 1 whenever the qubit is entangled with the others.
pub fn qubit_bloch_vector(state: &StateVector, qubit: usize) -> Result<BlochVector> {
    reduced_density_matrix(state, qubit)?.bloch_vector()
}

/// Von Neumann entropy of a single-qubit density matrix, in bits
pub fn von_neumann_entropy(rho: &DensityMatrix) -> Result<f64> {
    rho.von_neumann_entropy()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use qlab_gates::matrices::{HADAMARD, S_GATE};

    const TOL: f64 = 1e-10;

    fn bell() -> StateVector {
        StateVector::zero(2)
            .unwrap()
            .apply(&HADAMARD, 0)
            .unwrap()
            .cnot(0, 1)
            .unwrap()
    }

    fn plus_i() -> StateVector {
        StateVector::zero(1)
            .unwrap()
            .apply(&HADAMARD, 0)
            .unwrap()
            .apply(&S_GATE, 0)
            .unwrap()
    }

    #[test]
    fn test_from_state_vector() {
        let dm = density_matrix(&bell()).unwrap();
        assert_eq!(dm.num_qubits(), 2);
        assert_eq!(dm.dimension(), 4);
        assert_relative_eq!(dm.purity(), 1.0, epsilon = TOL);
        assert_relative_eq!(dm.trace(), 1.0, epsilon = TOL);
        assert_relative_eq!(dm.get(0, 3).re, 0.5, epsilon = TOL);
        assert!(dm.is_valid(TOL));
    }

    #[test]
    fn test_density_matrix_size_limit() {
        let wide = StateVector::zero(MAX_DENSITY_QUBITS + 1).unwrap();
        assert!(matches!(
            density_matrix(&wide),
            Err(QuantumError::InvalidArgument(_))
        ));
        assert!(matches!(
            DensityMatrix::from_state_vector(&StateVector::zero(16).unwrap()),
            Err(QuantumError::InvalidArgument(_))
        ));

        // Single-qubit views of wide states stay available
        let bloch = qubit_bloch_vector(&wide, MAX_DENSITY_QUBITS).unwrap();
        assert_relative_eq!(bloch.z, 1.0, epsilon = TOL);
    }

    #[test]
    fn test_maximally_mixed() {
        let dm = DensityMatrix::maximally_mixed(2).unwrap();
        assert!(dm.is_valid(TOL));
        assert_relative_eq!(dm.purity(), 0.25, epsilon = TOL);
        assert!(DensityMatrix::maximally_mixed(MAX_DENSITY_QUBITS + 1).is_err());
    }

    #[test]
    fn test_partial_trace_bell_is_maximally_mixed() {
        let dm = density_matrix(&bell()).unwrap();
        for qubit in 0..2 {
            let reduced = partial_trace(&dm, qubit, 2).unwrap();
            assert_eq!(reduced.num_qubits(), 1);
            assert!(reduced.is_valid(TOL));
            assert_relative_eq!(reduced.purity(), 0.5, epsilon = TOL);
            let bloch = bloch_from_density(&reduced).unwrap();
            assert_abs_diff_eq!(bloch.magnitude(), 0.0, epsilon = TOL);
            assert_relative_eq!(von_neumann_entropy(&reduced).unwrap(), 1.0, epsilon = TOL);
        }
    }

    #[test]
    fn test_partial_trace_product_state() {
        // |+i⟩ on qubit 0, |1⟩ on qubit 1
        let state = plus_i().tensor(&StateVector::basis(1, 1).unwrap()).unwrap();
        let dm = density_matrix(&state).unwrap();

        let q0 = dm.partial_trace(1).unwrap().bloch_vector().unwrap();
        assert!(q0.approx_eq(&BlochVector::new(0.0, 1.0, 0.0), TOL));

        let q1 = dm.partial_trace(0).unwrap().bloch_vector().unwrap();
        assert!(q1.approx_eq(&BlochVector::new(0.0, 0.0, -1.0), TOL));
    }

    #[test]
    fn test_partial_trace_errors() {
        let dm = density_matrix(&bell()).unwrap();
        assert!(matches!(
            partial_trace(&dm, 2, 2),
            Err(QuantumError::InvalidQubitIndex { index: 2, .. })
        ));
        assert!(matches!(
            partial_trace(&dm, 0, 3),
            Err(QuantumError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_partial_trace_to_scalar() {
        let dm = density_matrix(&plus_i()).unwrap();
        let scalar = dm.partial_trace(0).unwrap();
        assert_eq!(scalar.num_qubits(), 0);
        assert_relative_eq!(scalar.trace(), 1.0, epsilon = TOL);
    }

    #[test]
    fn test_reduced_matches_partial_trace() {
        let state = StateVector::from_unnormalized(
            (0..8)
                .map(|k| Complex64::new((k as f64).cos(), (0.3 * k as f64).sin()))
                .collect(),
        )
        .unwrap();
        let full = density_matrix(&state).unwrap();

        // Keep qubit 1: trace out qubit 2, then qubit 0
        let traced = full.partial_trace(2).unwrap().partial_trace(0).unwrap();
        let direct = reduced_density_matrix(&state, 1).unwrap();
        for (a, b) in traced.matrix().iter().zip(direct.matrix()) {
            assert_abs_diff_eq!(a.re, b.re, epsilon = TOL);
            assert_abs_diff_eq!(a.im, b.im, epsilon = TOL);
        }
    }

    #[test]
    fn test_bloch_coords_matches_density_path() {
        let state = plus_i();
        let direct = bloch_coords(&state).unwrap();
        let via_rho = bloch_from_density(&density_matrix(&state).unwrap()).unwrap();
        assert!(direct.approx_eq(&via_rho, TOL));
        assert_relative_eq!(direct.y, 1.0, epsilon = TOL);
    }

    #[test]
    fn test_single_qubit_requirements() {
        assert!(matches!(
            bloch_coords(&bell()),
            Err(QuantumError::InvalidArgument(_))
        ));
        assert!(matches!(
            bloch_from_density(&density_matrix(&bell()).unwrap()),
            Err(QuantumError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_qubit_bloch_vector() {
        let state = StateVector::basis(0b10, 2).unwrap();
        assert_relative_eq!(qubit_bloch_vector(&state, 0).unwrap().z, 1.0, epsilon = TOL);
        assert_relative_eq!(qubit_bloch_vector(&state, 1).unwrap().z, -1.0, epsilon = TOL);
        assert!(qubit_bloch_vector(&state, 2).is_err());
        assert_abs_diff_eq!(
            qubit_bloch_vector(&bell(), 0).unwrap().magnitude(),
            0.0,
            epsilon = TOL
        );
    }

    #[test]
    fn test_entropy_of_pure_state() {
        let rho = density_matrix(&plus_i()).unwrap();
        assert_abs_diff_eq!(rho.von_neumann_entropy().unwrap(), 0.0, epsilon = 1e-6);
    }
}
