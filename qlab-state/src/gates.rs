//! Gate application engine
//!
//! Every function here borrows the input state, copies its amplitudes into
//! a fresh buffer, runs an in-place kernel on that buffer and
//! returns the result as a new [`StateVector`]. On error nothing is
//! allocated and the input is untouched.

use crate::kernels;
use crate::state_vector::StateVector;
use qlab_core::{QuantumError, Result};
use qlab_gates::matrices::PAULI_Z;
use qlab_gates::matrix_ops::is_unitary;
use qlab_gates::Gate;
use tracing::trace;

/// Tolerance for the debug-build unitarity assertion
pub const UNITARY_TOLERANCE: f64 = 1e-9;

/// Apply a single-qubit unitary to `target`
///
/// All other qubits are spectators. Unitarity of `gate` is trusted and only
/// asserted in debug builds.
///
/// # Errors
/// [`QuantumError::InvalidQubitIndex`] if `target >= n`.
///
/// # Example
/// ```
/// use qlab_state::{apply_single_qubit_gate, StateVector};
/// use qlab_gates::matrices::PAULI_X;
///
/// let state = StateVector::zero(2).unwrap();
/// let flipped = apply_single_qubit_gate(&PAULI_X, 1, &state).unwrap();
/// assert_eq!(flipped.amplitudes()[0b10].re, 1.0);
/// ```
pub fn apply_single_qubit_gate(gate: &Gate, target: usize, state: &StateVector) -> Result<StateVector> {
    let num_qubits = state.num_qubits();
    QuantumError::check_qubit(target, num_qubits)?;
    debug_assert!(
        is_unitary(gate, UNITARY_TOLERANCE),
        "gate matrix is not unitary: {:?}",
        gate
    );
    trace!(qubit = target, num_qubits, "applying single-qubit gate");

    let mut amplitudes = state.amplitudes().to_vec();
    kernels::apply_gate_in_place(&mut amplitudes, gate, target, num_qubits);
    Ok(StateVector::from_parts(num_qubits, amplitudes))
}

/// Apply a controlled-NOT
///
/// Self-inverse: applying the same CNOT twice returns the original
/// amplitudes exactly, since the gate only permutes them.
///
/// # Errors
/// - [`QuantumError::InvalidQubitIndex`] if either qubit is out of range
/// - [`QuantumError::InvalidArgument`] if `control == target`
pub fn apply_cnot(control: usize, target: usize, state: &StateVector) -> Result<StateVector> {
    let num_qubits = state.num_qubits();
    check_pair(control, target, num_qubits)?;
    trace!(control, target_qubit = target, num_qubits, "applying CNOT");

    let mut amplitudes = state.amplitudes().to_vec();
    kernels::apply_cnot_in_place(&mut amplitudes, control, target, num_qubits);
    Ok(StateVector::from_parts(num_qubits, amplitudes))
}

/// Apply `gate` to `target` conditioned on `control` being 1
///
/// # Errors
/// Same as [`apply_cnot`].
pub fn apply_controlled_gate(
    gate: &Gate,
    control: usize,
    target: usize,
    state: &StateVector,
) -> Result<StateVector> {
    let num_qubits = state.num_qubits();
    check_pair(control, target, num_qubits)?;
    debug_assert!(
        is_unitary(gate, UNITARY_TOLERANCE),
        "gate matrix is not unitary: {:?}",
        gate
    );
    trace!(control, target_qubit = target, num_qubits, "applying controlled gate");

    let mut amplitudes = state.amplitudes().to_vec();
    kernels::apply_controlled_in_place(&mut amplitudes, gate, control, target, num_qubits);
    Ok(StateVector::from_parts(num_qubits, amplitudes))
}

/// Apply a controlled-Z (symmetric in its two qubits)
pub fn apply_cz(control: usize, target: usize, state: &StateVector) -> Result<StateVector> {
    apply_controlled_gate(&PAULI_Z, control, target, state)
}

/// Exchange the states of qubits `a` and `b`
///
/// Built from three CNOTs on one scratch buffer.
///
/// # Errors
/// Same as [`apply_cnot`].
pub fn apply_swap(a: usize, b: usize, state: &StateVector) -> Result<StateVector> {
    let num_qubits = state.num_qubits();
    check_pair(a, b, num_qubits)?;
    trace!(a, b, num_qubits, "applying SWAP");

    let mut amplitudes = state.amplitudes().to_vec();
    kernels::apply_cnot_in_place(&mut amplitudes, a, b, num_qubits);
    kernels::apply_cnot_in_place(&mut amplitudes, b, a, num_qubits);
    kernels::apply_cnot_in_place(&mut amplitudes, a, b, num_qubits);
    Ok(StateVector::from_parts(num_qubits, amplitudes))
}

fn check_pair(control: usize, target: usize, num_qubits: usize) -> Result<()> {
    QuantumError::check_qubit(control, num_qubits)?;
    QuantumError::check_qubit(target, num_qubits)?;
    if control == target {
        return Err(QuantumError::invalid_argument(format!(
            "control and target must differ (both are qubit {})",
            control
        )));
    }
    Ok(())
}
