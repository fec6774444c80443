//! Quantum teleportation walkthrough
//!
//! Prints each step of teleporting a single-qubit state, using a seeded
//! generator for the sender's measurements. Set `RUST_LOG=qlab_state=debug`
//! to see the collapse events.
//!
//! Qubit layout:
//!   q0: sender's state |ψ⟩
//!   q1: sender's half of the Bell pair
//!   q2: receiver's half of the Bell pair

use qlab_gates::matrices::{HADAMARD, PAULI_X, PAULI_Z};
use qlab_state::{
    amplitude_info, bell_state, measure_qubit, qubit_bloch_vector, single_qubit_from_angles,
    BellState, Result,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::PI;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Quantum Teleportation ===\n");

    let theta = PI / 3.0;
    let phi = PI / 4.0;
    let psi = single_qubit_from_angles(theta, phi);
    println!("θ = π/3, φ = π/4");
    println!("Sender's Bloch vector:   {}", qubit_bloch_vector(&psi, 0)?);

    let state = psi.tensor(&bell_state(BellState::PhiPlus))?;
    let state = state.cnot(0, 1)?.apply(&HADAMARD, 0)?;

    println!("\nAmplitudes before measurement:");
    for info in amplitude_info(&state) {
        println!(
            "  {}  |a| = {:.4}  arg = {:+.4}",
            info.label, info.magnitude, info.phase
        );
    }
    println!(
        "Receiver before correction: {}",
        qubit_bloch_vector(&state, 2)?
    );

    let mut rng = StdRng::seed_from_u64(7);
    let m0 = measure_qubit(&state, 0, &mut rng)?;
    let m1 = measure_qubit(&m0.state, 1, &mut rng)?;
    println!(
        "\nSender measured q0 = {}, q1 = {}",
        m0.outcome, m1.outcome
    );

    let mut received = m1.state;
    if m1.outcome == 1 {
        println!("Receiver applies X");
        received = received.apply(&PAULI_X, 2)?;
    }
    if m0.outcome == 1 {
        println!("Receiver applies Z");
        received = received.apply(&PAULI_Z, 2)?;
    }

    println!("\nReceiver's Bloch vector: {}", qubit_bloch_vector(&received, 2)?);
    Ok(())
}
