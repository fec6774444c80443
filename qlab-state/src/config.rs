//! State configuration

use serde::{Deserialize, Serialize};

/// Largest qubit count any state or density matrix may have
pub const MAX_QUBITS: usize = 24;

/// Largest qubit count for a density matrix, which holds 4^n entries
pub const MAX_DENSITY_QUBITS: usize = MAX_QUBITS / 2;

/// Tolerances and limits used by validation and collapse
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateConfig {
    /// Allowed deviation of `Σ|aᵢ|²` from 1 before a state is rejected
    ///
    /// Default: 1e-9
    pub norm_tolerance: f64,

    /// Retained probability mass at or below which a collapse is impossible
    ///
    /// Default: 1e-12
    pub zero_mass_threshold: f64,

    /// Maximum qubit count accepted when building states from external data
    ///
    /// Values above [`MAX_QUBITS`] are treated as [`MAX_QUBITS`].
    ///
    /// Default: 24
    pub max_qubits: usize,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            norm_tolerance: 1e-9,
            zero_mass_threshold: 1e-12,
            max_qubits: MAX_QUBITS,
        }
    }
}

impl StateConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Tight tolerances for tests and offline verification
    pub fn strict() -> Self {
        Self {
            norm_tolerance: 1e-12,
            zero_mass_threshold: 1e-15,
            ..Default::default()
        }
    }

    /// Loose tolerances for states that went through lossy serialization
    /// (e.g. amplitudes rounded for display and read back)
    pub fn relaxed() -> Self {
        Self {
            norm_tolerance: 1e-6,
            zero_mass_threshold: 1e-10,
            ..Default::default()
        }
    }

    /// Set the norm tolerance
    pub fn with_norm_tolerance(mut self, tolerance: f64) -> Self {
        self.norm_tolerance = tolerance;
        self
    }

    /// Set the impossible-outcome threshold
    pub fn with_zero_mass_threshold(mut self, threshold: f64) -> Self {
        self.zero_mass_threshold = threshold;
        self
    }

    /// Set the qubit limit
    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    /// The qubit limit actually enforced
    pub fn effective_max_qubits(&self) -> usize {
        self.max_qubits.min(MAX_QUBITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StateConfig::default();
        assert_eq!(config.norm_tolerance, 1e-9);
        assert_eq!(config.max_qubits, MAX_QUBITS);
    }

    #[test]
    fn test_presets() {
        assert!(StateConfig::strict().norm_tolerance < StateConfig::default().norm_tolerance);
        assert!(StateConfig::relaxed().norm_tolerance > StateConfig::default().norm_tolerance);
    }

    #[test]
    fn test_effective_max_qubits() {
        let config = StateConfig::new().with_max_qubits(100);
        assert_eq!(config.effective_max_qubits(), MAX_QUBITS);
        let config = StateConfig::new().with_max_qubits(4);
        assert_eq!(config.effective_max_qubits(), 4);
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let config: StateConfig = serde_json::from_str(r#"{"norm_tolerance":1e-6}"#).unwrap();
        assert_eq!(config.norm_tolerance, 1e-6);
        assert_eq!(config.zero_mass_threshold, 1e-12);
        assert_eq!(config.max_qubits, MAX_QUBITS);
    }
}
