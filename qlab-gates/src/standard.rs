//! Named standard gates
//!
//! [`StandardGate`] is the tagged form of every gate the UI offers. It is
//! what gets stored in undo history or sent across to a renderer; the engine
//! only ever sees the 2×2 matrix it resolves to.

use crate::matrices;
use crate::Gate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named single-qubit gate, optionally parametrized by an angle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "gate", content = "angle")]
pub enum StandardGate {
    /// Identity
    I,
    /// Hadamard: H|0⟩ = (|0⟩ + |1⟩)/√2
    H,
    /// Pauli-X, bit flip
    X,
    /// Pauli-Y
    Y,
    /// Pauli-Z, phase flip
    Z,
    /// √Z
    S,
    /// S†
    Sdg,
    /// √S
    T,
    /// T†
    Tdg,
    /// Rotation about X by θ
    Rx(f64),
    /// Rotation about Y by θ
    Ry(f64),
    /// Rotation about Z by θ
    Rz(f64),
    /// Relative phase e^(iλ) on |1⟩
    Phase(f64),
}

impl StandardGate {
    /// Short gate name ("H", "RX", ...)
    pub fn name(&self) -> &'static str {
        match self {
            Self::I => "I",
            Self::H => "H",
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
            Self::S => "S",
            Self::Sdg => "S†",
            Self::T => "T",
            Self::Tdg => "T†",
            Self::Rx(_) => "RX",
            Self::Ry(_) => "RY",
            Self::Rz(_) => "RZ",
            Self::Phase(_) => "P",
        }
    }

    /// Rotation or phase angle, if the gate has one
    pub fn angle(&self) -> Option<f64> {
        match *self {
            Self::Rx(theta) | Self::Ry(theta) | Self::Rz(theta) | Self::Phase(theta) => {
                Some(theta)
            }
            _ => None,
        }
    }

    /// The 2×2 unitary this gate applies
    pub fn matrix(&self) -> Gate {
        match *self {
            Self::I => matrices::IDENTITY,
            Self::H => matrices::HADAMARD,
            Self::X => matrices::PAULI_X,
            Self::Y => matrices::PAULI_Y,
            Self::Z => matrices::PAULI_Z,
            Self::S => matrices::S_GATE,
            Self::Sdg => matrices::S_GATE_DAGGER,
            Self::T => matrices::T_GATE,
            Self::Tdg => matrices::T_GATE_DAGGER,
            Self::Rx(theta) => matrices::rotation_x(theta),
            Self::Ry(theta) => matrices::rotation_y(theta),
            Self::Rz(theta) => matrices::rotation_z(theta),
            Self::Phase(lambda) => matrices::phase(lambda),
        }
    }

    /// The gate that undoes this one
    pub fn inverse(&self) -> Self {
        match *self {
            Self::S => Self::Sdg,
            Self::Sdg => Self::S,
            Self::T => Self::Tdg,
            Self::Tdg => Self::T,
            Self::Rx(theta) => Self::Rx(-theta),
            Self::Ry(theta) => Self::Ry(-theta),
            Self::Rz(theta) => Self::Rz(-theta),
            Self::Phase(lambda) => Self::Phase(-lambda),
            other => other,
        }
    }

    /// Whether applying the gate twice is the identity
    pub fn is_self_inverse(&self) -> bool {
        matches!(self, Self::I | Self::H | Self::X | Self::Y | Self::Z)
    }
}

impl fmt::Display for StandardGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.angle() {
            Some(theta) => write!(f, "{}({:.4})", self.name(), theta),
            None => f.write_str(self.name()),
        }
    }
}

impl From<StandardGate> for Gate {
    fn from(gate: StandardGate) -> Self {
        gate.matrix()
    }
}
