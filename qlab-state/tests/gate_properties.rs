//! Integration tests for norm preservation and self-inverse gates

use approx::assert_relative_eq;
use qlab_gates::matrices::{HADAMARD, PAULI_X};
use qlab_gates::StandardGate;
use qlab_state::{
    apply_cnot, apply_single_qubit_gate, ghz_state, probabilities, uniform_superposition,
    w_state, StateVector,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_gate(rng: &mut StdRng) -> StandardGate {
    let angle = rng.gen_range(-std::f64::consts::PI..std::f64::consts::PI);
    match rng.gen_range(0..12) {
        0 => StandardGate::H,
        1 => StandardGate::X,
        2 => StandardGate::Y,
        3 => StandardGate::Z,
        4 => StandardGate::S,
        5 => StandardGate::Sdg,
        6 => StandardGate::T,
        7 => StandardGate::Tdg,
        8 => StandardGate::Rx(angle),
        9 => StandardGate::Ry(angle),
        10 => StandardGate::Rz(angle),
        _ => StandardGate::Phase(angle),
    }
}

fn random_circuit(state: &StateVector, steps: usize, rng: &mut StdRng) -> StateVector {
    let n = state.num_qubits();
    let mut current = state.clone();
    for _ in 0..steps {
        let target = rng.gen_range(0..n);
        if n > 1 && rng.gen_bool(0.3) {
            let control = (target + rng.gen_range(1..n)) % n;
            current = apply_cnot(control, target, &current).unwrap();
        } else {
            let gate = random_gate(rng).matrix();
            current = apply_single_qubit_gate(&gate, target, &current).unwrap();
        }
    }
    current
}

#[test]
fn test_norm_preserved_by_random_circuits() {
    let mut rng = StdRng::seed_from_u64(2024);
    for n in 1..=6 {
        for start in [
            StateVector::zero(n).unwrap(),
            ghz_state(n).unwrap(),
            w_state(n).unwrap(),
            uniform_superposition(n).unwrap(),
        ] {
            let result = random_circuit(&start, 60, &mut rng);
            let total: f64 = probabilities(&result).iter().sum();
            assert_relative_eq!(total, 1.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_hadamard_twice_is_identity() {
    let mut rng = StdRng::seed_from_u64(5);
    let state = random_circuit(&StateVector::zero(4).unwrap(), 30, &mut rng);
    for q in 0..4 {
        let back = state.apply(&HADAMARD, q).unwrap().apply(&HADAMARD, q).unwrap();
        for (a, b) in back.amplitudes().iter().zip(state.amplitudes()) {
            assert_relative_eq!(a.re, b.re, epsilon = 1e-12);
            assert_relative_eq!(a.im, b.im, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_x_twice_is_exact_identity() {
    let mut rng = StdRng::seed_from_u64(6);
    let state = random_circuit(&StateVector::zero(3).unwrap(), 30, &mut rng);
    for q in 0..3 {
        let back = state.apply(&PAULI_X, q).unwrap().apply(&PAULI_X, q).unwrap();
        assert_eq!(back, state);
    }
}

#[test]
fn test_cnot_twice_is_exact_identity() {
    let mut rng = StdRng::seed_from_u64(8);
    let state = random_circuit(&StateVector::zero(4).unwrap(), 40, &mut rng);
    for control in 0..4 {
        for target in (0..4).filter(|&t| t != control) {
            let back = state.cnot(control, target).unwrap().cnot(control, target).unwrap();
            assert_eq!(back, state);
        }
    }
}

#[test]
fn test_gate_then_inverse_restores_state() {
    let mut rng = StdRng::seed_from_u64(13);
    let state = random_circuit(&StateVector::zero(3).unwrap(), 20, &mut rng);
    for _ in 0..50 {
        let gate = random_gate(&mut rng);
        let q = rng.gen_range(0..3);
        let back = state
            .apply(&gate.matrix(), q)
            .unwrap()
            .apply(&gate.inverse().matrix(), q)
            .unwrap();
        assert_relative_eq!(back.fidelity(&state).unwrap(), 1.0, epsilon = 1e-12);
    }
}
