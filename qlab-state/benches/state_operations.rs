//! Benchmarks for per-frame state operations
//!
//! The demos recompute these up to 60 times per second while a slider is
//! dragged, at up to 6 qubits.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qlab_gates::matrices::{rotation_y, HADAMARD};
use qlab_state::{
    apply_cnot, apply_single_qubit_gate, density_matrix, partial_trace, project_and_collapse,
    qubit_bloch_vector, uniform_superposition, Constraint,
};

fn bench_single_qubit_gate(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_qubit_gate");

    for num_qubits in [2, 4, 6, 10].iter() {
        group.throughput(Throughput::Elements(1 << num_qubits));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_qubits),
            num_qubits,
            |b, &num_qubits| {
                let state = uniform_superposition(num_qubits).unwrap();
                let gate = rotation_y(0.3);
                b.iter(|| apply_single_qubit_gate(black_box(&gate), 0, black_box(&state)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_cnot(c: &mut Criterion) {
    let mut group = c.benchmark_group("cnot");

    for num_qubits in [2, 4, 6, 10].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_qubits),
            num_qubits,
            |b, &num_qubits| {
                let state = uniform_superposition(num_qubits)
                    .unwrap()
                    .apply(&HADAMARD, 0)
                    .unwrap();
                b.iter(|| apply_cnot(0, num_qubits - 1, black_box(&state)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_collapse(c: &mut Criterion) {
    let state = uniform_superposition(6).unwrap();
    let constraints = [Constraint::new(0, 1), Constraint::new(3, 0)];
    c.bench_function("collapse_6_qubits", |b| {
        b.iter(|| project_and_collapse(black_box(&state), &constraints).unwrap())
    });
}

fn bench_reduced_bloch(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduced_bloch");
    let state = uniform_superposition(6).unwrap().cnot(0, 5).unwrap();

    group.bench_function("direct", |b| {
        b.iter(|| qubit_bloch_vector(black_box(&state), 2).unwrap())
    });

    group.bench_function("full_density_matrix", |b| {
        b.iter(|| {
            let mut rho = density_matrix(black_box(&state)).unwrap();
            for q in (0..6).rev().filter(|&q| q != 2) {
                let total = rho.num_qubits();
                rho = partial_trace(&rho, q, total).unwrap();
            }
            rho.bloch_vector().unwrap()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_qubit_gate,
    bench_cnot,
    bench_collapse,
    bench_reduced_bloch
);
criterion_main!(benches);
