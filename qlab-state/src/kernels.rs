//! In-place amplitude kernels
//!
//! These are the only loops that walk amplitude pairs. They mutate a buffer
//! owned by the caller; the public gate engine in [`crate::gates`] copies
//! the input state into a fresh buffer first, so callers' states are never
//! touched. Indices are not validated here; the engine checks them first.
//!
//! # Panics
//! Every kernel indexes `amplitudes` directly and panics if its length is
//! less than `2^num_qubits` or a qubit index is `>= num_qubits`.

use num_complex::Complex64;
use qlab_core::basis::{self, bit_of};
use qlab_gates::Gate;

/// Apply a single-qubit gate to `amplitudes`
///
/// # Algorithm
/// For a gate on qubit `q` in an n-qubit system:
/// - Group amplitudes into pairs (i0, i1) that differ only in bit q
/// - Replace each pair with the 2×2 matrix-vector product
/// - Complexity: O(2^n) operations
pub(crate) fn apply_gate_in_place(
    amplitudes: &mut [Complex64],
    gate: &Gate,
    qubit: usize,
    num_qubits: usize,
) {
    let [[m00, m01], [m10, m11]] = *gate;

    for (i0, i1) in basis::pairs(qubit, num_qubits) {
        let amp0 = amplitudes[i0];
        let amp1 = amplitudes[i1];

        amplitudes[i0] = m00 * amp0 + m01 * amp1;
        amplitudes[i1] = m10 * amp0 + m11 * amp1;
    }
}

/// Apply `gate` to `target` on the half of the basis where `control` is 1
///
/// `control` must differ from `target`.
pub(crate) fn apply_controlled_in_place(
    amplitudes: &mut [Complex64],
    gate: &Gate,
    control: usize,
    target: usize,
    num_qubits: usize,
) {
    let [[m00, m01], [m10, m11]] = *gate;

    // Both members of a pair share the control bit
    for (i0, i1) in basis::pairs(target, num_qubits) {
        if bit_of(i0, control) == 0 {
            continue;
        }
        let amp0 = amplitudes[i0];
        let amp1 = amplitudes[i1];

        amplitudes[i0] = m00 * amp0 + m01 * amp1;
        amplitudes[i1] = m10 * amp0 + m11 * amp1;
    }
}

/// Apply a CNOT: swap each pair differing in `target` whose `control` bit is 1
///
/// A pure permutation, so amplitudes are moved bit-for-bit.
pub(crate) fn apply_cnot_in_place(
    amplitudes: &mut [Complex64],
    control: usize,
    target: usize,
    num_qubits: usize,
) {
    for (i0, i1) in basis::pairs(target, num_qubits) {
        if bit_of(i0, control) == 1 {
            amplitudes.swap(i0, i1);
        }
    }
}
