//! Bloch vectors for single-qubit states
//!
//! Any single-qubit state, pure or mixed, is a point in the unit ball:
//!
//! ρ = (I + x·σx + y·σy + z·σz) / 2
//!
//! Pure states lie on the surface (|r| = 1) and can be written as
//! |ψ⟩ = cos(θ/2)|0⟩ + e^(iφ)sin(θ/2)|1⟩, which is the point
//! (sin θ cos φ, sin θ sin φ, cos θ). The maximally mixed state is the origin.
//!
//! # Example
//!
//! ```
//! use qlab_core::BlochVector;
//! use num_complex::Complex64;
//!
//! // |0⟩ state points to north pole
//! let state = [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)];
//! let bloch = BlochVector::from_state(&state);
//! assert!((bloch.z - 1.0).abs() < 1e-10);
//!
//! // |+⟩ state points along +x axis
//! let plus = [
//!     Complex64::new(1.0/2.0_f64.sqrt(), 0.0),
//!     Complex64::new(1.0/2.0_f64.sqrt(), 0.0)
//! ];
//! let bloch = BlochVector::from_state(&plus);
//! assert!((bloch.x - 1.0).abs() < 1e-10);
//! ```

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// A point in the Bloch ball in Cartesian coordinates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlochVector {
    /// X coordinate (-1 to 1)
    pub x: f64,
    /// Y coordinate (-1 to 1)
    pub y: f64,
    /// Z coordinate (-1 to 1), where +Z is |0⟩ and -Z is |1⟩
    pub z: f64,
}

/// Bloch sphere angles (spherical coordinates)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlochAngles {
    /// Polar angle θ ∈ [0, π]
    pub theta: f64,
    /// Azimuthal angle φ ∈ [0, 2π)
    pub phi: f64,
}

impl BlochVector {
    /// Create a Bloch vector from Cartesian coordinates
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The centre of the ball (maximally mixed state)
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Point on the sphere for the pure state with polar angle `theta` and azimuth `phi`
    pub fn from_angles(theta: f64, phi: f64) -> Self {
        Self {
            x: theta.sin() * phi.cos(),
            y: theta.sin() * phi.sin(),
            z: theta.cos(),
        }
    }

    /// Convert a pure single-qubit state `[α, β]` to a Bloch vector
    ///
    /// The state is not required to be normalized; the result then scales
    /// with `|α|² + |β|²`.
    pub fn from_state(state: &[Complex64; 2]) -> Self {
        let alpha = state[0];
        let beta = state[1];

        // x = ⟨σx⟩ = 2Re(α*β), y = ⟨σy⟩ = 2Im(α*β), z = ⟨σz⟩ = |α|² - |β|²
        let alpha_conj_beta = alpha.conj() * beta;

        Self {
            x: 2.0 * alpha_conj_beta.re,
            y: 2.0 * alpha_conj_beta.im,
            z: alpha.norm_sqr() - beta.norm_sqr(),
        }
    }

    /// Convert Bloch vector to spherical coordinates
    ///
    /// The zero vector has no direction and maps to θ = φ = 0.
    pub fn to_angles(&self) -> BlochAngles {
        let r = self.magnitude();

        if r < 1e-10 {
            return BlochAngles {
                theta: 0.0,
                phi: 0.0,
            };
        }

        let theta = (self.z / r).clamp(-1.0, 1.0).acos();
        let phi = self.y.atan2(self.x);
        let phi = if phi < 0.0 { phi + 2.0 * PI } else { phi };

        BlochAngles { theta, phi }
    }

    /// Length of the vector: 1 for pure states, 0 for maximally mixed
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Check if this represents a pure state (magnitude ≈ 1.0)
    pub fn is_pure(&self, tolerance: f64) -> bool {
        (self.magnitude() - 1.0).abs() < tolerance
    }

    /// Component-wise comparison within `tolerance`
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
    }
}

impl fmt::Display for BlochVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}
