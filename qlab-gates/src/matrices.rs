//! Pre-computed gate matrices
//!
//! Fixed gates are compile-time constants; rotation gates are functions of
//! an angle θ using the half-angle convention, so a 2π rotation equals the
//! identity up to a global phase of −1.

use crate::Gate;
use num_complex::Complex64;
use qlab_core::complex::{I, ONE, ZERO};

const NEG_I: Complex64 = Complex64::new(0.0, -1.0);
const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);

const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Identity gate matrix
/// I = [[1, 0],
///      [0, 1]]
pub const IDENTITY: Gate = [[ONE, ZERO], [ZERO, ONE]];

/// Hadamard gate matrix
/// H = 1/√2 * [[1,  1],
///             [1, -1]]
pub const HADAMARD: Gate = [
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(INV_SQRT2, 0.0),
    ],
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(-INV_SQRT2, 0.0),
    ],
];

/// Pauli-X gate matrix (NOT gate)
/// X = [[0, 1],
///      [1, 0]]
pub const PAULI_X: Gate = [[ZERO, ONE], [ONE, ZERO]];

/// Pauli-Y gate matrix
/// Y = [[0, -i],
///      [i,  0]]
pub const PAULI_Y: Gate = [[ZERO, NEG_I], [I, ZERO]];

/// Pauli-Z gate matrix
/// Z = [[1,  0],
///      [0, -1]]
pub const PAULI_Z: Gate = [[ONE, ZERO], [ZERO, NEG_ONE]];

/// S gate matrix (√Z)
/// S = [[1, 0],
///      [0, i]]
pub const S_GATE: Gate = [[ONE, ZERO], [ZERO, I]];

/// S† gate matrix
pub const S_GATE_DAGGER: Gate = [[ONE, ZERO], [ZERO, NEG_I]];

/// T gate matrix (√S)
/// T = [[1, 0],
///      [0, e^(iπ/4)]]
pub const T_GATE: Gate = [
    [ONE, ZERO],
    [ZERO, Complex64::new(INV_SQRT2, INV_SQRT2)],
];

/// T† gate matrix
pub const T_GATE_DAGGER: Gate = [
    [ONE, ZERO],
    [ZERO, Complex64::new(INV_SQRT2, -INV_SQRT2)],
];

/// Rotation about X
/// RX(θ) = [[cos(θ/2),    -i·sin(θ/2)],
///          [-i·sin(θ/2),  cos(θ/2)  ]]
#[inline]
pub fn rotation_x(theta: f64) -> Gate {
    let (sin_val, cos_val) = (theta / 2.0).sin_cos();
    [
        [Complex64::new(cos_val, 0.0), Complex64::new(0.0, -sin_val)],
        [Complex64::new(0.0, -sin_val), Complex64::new(cos_val, 0.0)],
    ]
}

/// Rotation about Y
/// RY(θ) = [[cos(θ/2), -sin(θ/2)],
///          [sin(θ/2),  cos(θ/2)]]
#[inline]
pub fn rotation_y(theta: f64) -> Gate {
    let (sin_val, cos_val) = (theta / 2.0).sin_cos();
    [
        [Complex64::new(cos_val, 0.0), Complex64::new(-sin_val, 0.0)],
        [Complex64::new(sin_val, 0.0), Complex64::new(cos_val, 0.0)],
    ]
}

/// Rotation about Z
/// RZ(θ) = [[e^(-iθ/2), 0        ],
///          [0,         e^(iθ/2) ]]
///
/// Turns the Bloch vector counter-clockwise about +z, matching the
/// `y = 2·Im(α*β)` sign used by [`qlab_core::BlochVector`].
#[inline]
pub fn rotation_z(theta: f64) -> Gate {
    let (sin_val, cos_val) = (theta / 2.0).sin_cos();
    [
        [Complex64::new(cos_val, -sin_val), ZERO],
        [ZERO, Complex64::new(cos_val, sin_val)],
    ]
}

/// Phase gate
/// P(λ) = [[1, 0     ],
///         [0, e^(iλ)]]
#[inline]
pub fn phase(lambda: f64) -> Gate {
    [[ONE, ZERO], [ZERO, Complex64::new(lambda.cos(), lambda.sin())]]
}
