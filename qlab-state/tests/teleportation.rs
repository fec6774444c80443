//! End-to-end teleportation across all four measurement branches
//!
//! Qubit layout:
//!   q0: sender's state |ψ⟩
//!   q1: sender's half of the Bell pair
//!   q2: receiver's half of the Bell pair

use qlab_core::BlochVector;
use qlab_gates::matrices::{HADAMARD, PAULI_X, PAULI_Z};
use qlab_state::{
    bell_state, measure_qubit, probabilities, project_and_collapse, qubit_bloch_vector,
    single_qubit_from_angles, BellState, Constraint, StateVector,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::PI;

const TOL: f64 = 1e-10;

fn entangle_and_rotate(psi: &StateVector) -> StateVector {
    let initial = psi.tensor(&bell_state(BellState::PhiPlus)).unwrap();
    initial.cnot(0, 1).unwrap().apply(&HADAMARD, 0).unwrap()
}

fn correct(state: &StateVector, m0: u8, m1: u8) -> StateVector {
    let mut corrected = state.clone();
    if m1 == 1 {
        corrected = corrected.apply(&PAULI_X, 2).unwrap();
    }
    if m0 == 1 {
        corrected = corrected.apply(&PAULI_Z, 2).unwrap();
    }
    corrected
}

#[test]
fn test_teleportation_every_branch() {
    let theta = PI / 3.0;
    let phi = PI / 4.0;
    let expected = BlochVector::new(theta.sin() * phi.cos(), theta.sin() * phi.sin(), theta.cos());

    let psi = single_qubit_from_angles(theta, phi);
    let before_measurement = entangle_and_rotate(&psi);

    for m0 in 0..=1u8 {
        for m1 in 0..=1u8 {
            let collapsed = project_and_collapse(
                &before_measurement,
                &[Constraint::new(0, m0), Constraint::new(1, m1)],
            )
            .unwrap();
            let total: f64 = probabilities(&collapsed).iter().sum();
            assert!((total - 1.0).abs() < TOL);

            let received = qubit_bloch_vector(&correct(&collapsed, m0, m1), 2).unwrap();
            assert!(
                received.approx_eq(&expected, TOL),
                "branch m0={} m1={}: got {}, expected {}",
                m0,
                m1,
                received,
                expected
            );
        }
    }
}

#[test]
fn test_each_branch_equally_likely() {
    let psi = single_qubit_from_angles(1.1, -0.4);
    let state = entangle_and_rotate(&psi);
    let probs = probabilities(&state);
    for m0 in 0..=1usize {
        for m1 in 0..=1usize {
            let branch: f64 = probs
                .iter()
                .enumerate()
                .filter(|(i, _)| i & 1 == m0 && (i >> 1) & 1 == m1)
                .map(|(_, p)| p)
                .sum();
            assert!((branch - 0.25).abs() < TOL);
        }
    }
}

#[test]
fn test_teleportation_with_sampled_measurements() {
    let mut rng = StdRng::seed_from_u64(31);
    for k in 0..8 {
        let theta = 0.37 * k as f64;
        let phi = 1.9 * k as f64;
        let psi = single_qubit_from_angles(theta, phi);
        let expected = BlochVector::from_angles(theta, phi);

        let state = entangle_and_rotate(&psi);
        let first = measure_qubit(&state, 0, &mut rng).unwrap();
        let second = measure_qubit(&first.state, 1, &mut rng).unwrap();

        let corrected = correct(&second.state, first.outcome, second.outcome);
        let received = qubit_bloch_vector(&corrected, 2).unwrap();
        assert!(received.approx_eq(&expected, TOL));
    }
}

#[test]
fn test_receiver_is_mixed_before_correction_is_known() {
    // Before anyone measures, the receiver's qubit carries no information
    let psi = single_qubit_from_angles(PI / 3.0, PI / 4.0);
    let state = entangle_and_rotate(&psi);
    assert!(qubit_bloch_vector(&state, 2).unwrap().magnitude() < TOL);
}
