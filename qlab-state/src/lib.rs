//! Pure-state quantum simulation for the qlab visualizations
//!
//! This crate holds the math behind every interactive demo: n-qubit state
//! vectors, gate application, projective measurement with collapse, and
//! reduced single-qubit descriptions via partial trace and Bloch vectors.
//!
//! Everything is functional: operations borrow their inputs and return new
//! values, so a state shown on screen never changes while it is displayed.
//! Qubit `k` is always bit `k` of a basis index ([`qlab_core::basis`]).
//!
//! # Example
//!
//! ```
//! use qlab_state::{StateVector, probabilities, qubit_bloch_vector};
//! use qlab_gates::matrices::HADAMARD;
//!
//! // Entangle two qubits
//! let state = StateVector::zero(2).unwrap()
//!     .apply(&HADAMARD, 0).unwrap()
//!     .cnot(0, 1).unwrap();
//!
//! let probs = probabilities(&state);
//! assert!((probs[0b00] - 0.5).abs() < 1e-12);
//! assert!((probs[0b11] - 0.5).abs() < 1e-12);
//!
//! // Each qubit alone is maximally mixed
//! assert!(qubit_bloch_vector(&state, 0).unwrap().magnitude() < 1e-12);
//! ```

pub mod config;
pub mod density_matrix;
pub mod gates;
mod kernels;
pub mod measurement;
pub mod presets;
pub mod state_vector;

pub use config::{StateConfig, MAX_DENSITY_QUBITS, MAX_QUBITS};
pub use density_matrix::{
    bloch_coords, bloch_from_density, density_matrix, partial_trace, qubit_bloch_vector,
    reduced_density_matrix, von_neumann_entropy, DensityMatrix,
};
pub use gates::{apply_cnot, apply_controlled_gate, apply_cz, apply_single_qubit_gate, apply_swap};
pub use measurement::{
    amplitude_info, measure_all, measure_qubit, probabilities, project_and_collapse,
    project_and_collapse_with, qubit_probability, sample_counts, sample_index, AmplitudeInfo,
    Constraint, MeasurementResult, QubitMeasurement, SamplingResult,
};
pub use presets::{
    basis_state, bell_state, bell_state_by_index, ghz_state, single_qubit_from_angles,
    uniform_superposition, w_state, zero_state, BellState,
};
pub use qlab_core::basis::basis_label;
pub use qlab_core::{BlochVector, QuantumError, Result};
pub use state_vector::{num_qubits, StateVector};
