//! Error types for qlab

use thiserror::Error;

/// Errors that can occur in state construction, evolution and measurement
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QuantumError {
    /// Qubit index outside `[0, num_qubits)`
    #[error("Invalid qubit index {index} for {num_qubits}-qubit state")]
    InvalidQubitIndex { index: usize, num_qubits: usize },

    /// Amplitude data that cannot be a pure state (bad length or norm)
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Argument rejected before any work was done
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Collapse constraints select a zero-probability outcome
    #[error("Impossible measurement outcome: retained probability mass {mass:e}")]
    ImpossibleOutcome { mass: f64 },
}

impl QuantumError {
    /// Create an invalid qubit index error
    pub fn invalid_qubit(index: usize, num_qubits: usize) -> Self {
        Self::InvalidQubitIndex { index, num_qubits }
    }

    /// Create an invalid state error
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Fail with [`QuantumError::InvalidQubitIndex`] unless `index < num_qubits`
    #[inline]
    pub fn check_qubit(index: usize, num_qubits: usize) -> Result<(), Self> {
        if index < num_qubits {
            Ok(())
        } else {
            Err(Self::invalid_qubit(index, num_qubits))
        }
    }
}
