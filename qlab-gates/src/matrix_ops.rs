//! 2×2 matrix utilities for single-qubit gates
//!
//! Used to compose gates, build adjoints, and check unitarity in debug
//! builds and tests.

use crate::matrices::IDENTITY;
use crate::Gate;
use num_complex::Complex64;
use qlab_core::complex::ZERO;

/// Matrix product `a · b` (apply `b` first, then `a`)
pub fn multiply(a: &Gate, b: &Gate) -> Gate {
    let mut result = [[ZERO; 2]; 2];
    for (i, row) in result.iter_mut().enumerate() {
        for (j, value) in row.iter_mut().enumerate() {
            *value = a[i][0] * b[0][j] + a[i][1] * b[1][j];
        }
    }
    result
}

/// Conjugate transpose `U†`
pub fn adjoint(gate: &Gate) -> Gate {
    [
        [gate[0][0].conj(), gate[1][0].conj()],
        [gate[0][1].conj(), gate[1][1].conj()],
    ]
}

/// Determinant `ad − bc`
pub fn determinant(gate: &Gate) -> Complex64 {
    gate[0][0] * gate[1][1] - gate[0][1] * gate[1][0]
}

/// Element-wise comparison within `tolerance`
pub fn approx_eq(a: &Gate, b: &Gate, tolerance: f64) -> bool {
    a.iter()
        .flatten()
        .zip(b.iter().flatten())
        .all(|(x, y)| (x - y).norm() <= tolerance)
}

/// Check `U†U = I` within `tolerance`
pub fn is_unitary(gate: &Gate, tolerance: f64) -> bool {
    approx_eq(&multiply(&adjoint(gate), gate), &IDENTITY, tolerance)
}

/// Check `U = U†` within `tolerance`
pub fn is_hermitian(gate: &Gate, tolerance: f64) -> bool {
    approx_eq(gate, &adjoint(gate), tolerance)
}
