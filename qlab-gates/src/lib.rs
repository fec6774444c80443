//! Quantum gate library for qlab
//!
//! Single-qubit gates are plain 2×2 matrices ([`Gate`]). Fixed gates are
//! `const` values computed at compile time; rotations are built on demand
//! from an angle.
//!
//! # Example
//!
//! ```
//! use qlab_gates::{matrices, StandardGate};
//! use qlab_gates::matrix_ops::is_unitary;
//! use std::f64::consts::PI;
//!
//! let h = &matrices::HADAMARD;
//! assert!(is_unitary(h, 1e-12));
//!
//! let rx = StandardGate::Rx(PI / 2.0).matrix();
//! assert!(is_unitary(&rx, 1e-12));
//! ```

pub mod matrices;
pub mod matrix_ops;
pub mod standard;

pub use standard::StandardGate;

use num_complex::Complex64;

/// A single-qubit unitary as a row-major 2×2 matrix
///
/// Row `r`, column `c` maps the amplitude of the target bit `c` into the
/// amplitude of target bit `r`.
pub type Gate = [[Complex64; 2]; 2];
