//! Core types for the qlab quantum state simulator
//!
//! This crate provides the leaf-level building blocks shared by every other
//! qlab crate:
//! - [`QuantumError`]: the error taxonomy for every fallible operation
//! - [`ComplexExt`]: magnitude/phase helpers on [`Complex64`]
//! - [`basis`]: the one qubit-to-bit convention (qubit `k` is bit `k`)
//! - [`BlochVector`]: single-qubit coordinates inside the unit sphere
//!
//! # Example
//! ```
//! use qlab_core::basis::{basis_label, bit_of};
//!
//! // Qubit 0 is the least significant bit, printed right-most
//! assert_eq!(bit_of(0b01, 0), 1);
//! assert_eq!(basis_label(0b01, 2).unwrap(), "|01⟩");
//! ```

pub mod basis;
pub mod bloch_sphere;
pub mod complex;
pub mod error;

// Re-exports for convenience
pub use bloch_sphere::{BlochAngles, BlochVector};
pub use complex::ComplexExt;
pub use error::QuantumError;
pub use num_complex::Complex64;

/// Type alias for results in qlab
pub type Result<T> = std::result::Result<T, QuantumError>;
