//! Complex arithmetic helpers
//!
//! Amplitudes are [`Complex64`] values from `num-complex`, which already
//! provides addition, multiplication and conjugation. This module adds the
//! visualization-facing accessors (magnitude, phase) under the names the
//! rest of qlab uses, with a fixed phase for the zero value.

use num_complex::Complex64;

/// Complex zero
pub const ZERO: Complex64 = Complex64::new(0.0, 0.0);

/// Complex one
pub const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Imaginary unit
pub const I: Complex64 = Complex64::new(0.0, 1.0);

/// Magnitude and phase accessors for amplitudes
pub trait ComplexExt {
    /// `sqrt(re² + im²)`
    fn magnitude(&self) -> f64;

    /// `re² + im²`, the measurement probability of an amplitude
    fn magnitude_squared(&self) -> f64;

    /// `atan2(im, re)` in `(-π, π]`; exactly 0 for the zero value
    fn phase(&self) -> f64;

    /// Component-wise comparison within `tolerance`
    fn approx_eq(&self, other: &Self, tolerance: f64) -> bool;
}

impl ComplexExt for Complex64 {
    #[inline]
    fn magnitude(&self) -> f64 {
        self.norm()
    }

    #[inline]
    fn magnitude_squared(&self) -> f64 {
        self.norm_sqr()
    }

    #[inline]
    fn phase(&self) -> f64 {
        if self.re == 0.0 && self.im == 0.0 {
            0.0
        } else {
            self.im.atan2(self.re)
        }
    }

    #[inline]
    fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.re - other.re).abs() <= tolerance && (self.im - other.im).abs() <= tolerance
    }
}

/// Build `magnitude · e^(i·phase)`
#[inline]
pub fn from_polar(magnitude: f64, phase: f64) -> Complex64 {
    Complex64::new(magnitude * phase.cos(), magnitude * phase.sin())
}
