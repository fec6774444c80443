//! Computational basis measurement and collapse
//!
//! Observation is split in two:
//! - deterministic functions ([`probabilities`], [`amplitude_info`],
//!   [`project_and_collapse`]) that take an outcome as input
//! - sampling functions ([`measure_qubit`], [`measure_all`],
//!   [`sample_counts`]) that draw the outcome from a caller-supplied
//!   [`rand::Rng`], so tests can pin outcomes with a seeded generator

use crate::config::StateConfig;
use crate::state_vector::StateVector;
use qlab_core::basis::{self, bit_of};
use qlab_core::complex::{ComplexExt, ZERO};
use qlab_core::{QuantumError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Per-basis-state decomposition for visualization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmplitudeInfo {
    /// Basis index
    pub index: usize,
    /// Ket label, e.g. `|01⟩`
    pub label: String,
    /// |a|, drawn as bar height
    pub magnitude: f64,
    /// arg(a) in (-π, π], drawn as colour
    pub phase: f64,
    /// |a|²
    pub probability: f64,
}

/// An observed classical value for one qubit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Constraint {
    /// Measured qubit
    pub qubit: usize,
    /// Observed value, 0 or 1
    pub value: u8,
}

impl Constraint {
    /// Create a constraint
    pub const fn new(qubit: usize, value: u8) -> Self {
        Self { qubit, value }
    }

    /// Whether basis index `index` agrees with this constraint
    #[inline]
    pub fn matches(&self, index: usize) -> bool {
        bit_of(index, self.qubit) == self.value
    }
}

/// Outcome of measuring a single qubit
#[derive(Debug, Clone, PartialEq)]
pub struct QubitMeasurement {
    /// Measured qubit
    pub qubit: usize,
    /// Observed value, 0 or 1
    pub outcome: u8,
    /// Probability of that value before collapse
    pub probability: f64,
    /// Post-measurement state
    pub state: StateVector,
}

/// Outcome of measuring every qubit
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementResult {
    /// Observed basis index
    pub outcome: usize,
    /// Probability of this outcome before collapse
    pub probability: f64,
    /// Post-measurement state (a basis state up to global phase)
    pub state: StateVector,
}

impl MeasurementResult {
    /// The outcome as a bitstring, most significant qubit first
    pub fn as_bitstring(&self) -> String {
        let n = self.state.num_qubits();
        (0..n)
            .rev()
            .map(|q| if self.bit(q) == 1 { '1' } else { '0' })
            .collect()
    }

    /// Value observed on `qubit`
    pub fn bit(&self, qubit: usize) -> u8 {
        bit_of(self.outcome, qubit)
    }
}

/// Counts from repeated non-destructive sampling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingResult {
    /// Map from basis state index to count
    pub counts: BTreeMap<usize, usize>,
    /// Total number of shots
    pub shots: usize,
    /// Qubit count of the sampled state
    pub num_qubits: usize,
}

impl SamplingResult {
    /// Create an empty sampling result
    pub fn new(shots: usize, num_qubits: usize) -> Self {
        Self {
            counts: BTreeMap::new(),
            shots,
            num_qubits,
        }
    }

    /// Record one outcome
    pub fn add_outcome(&mut self, outcome: usize) {
        *self.counts.entry(outcome).or_insert(0) += 1;
    }

    /// Get the count for a specific outcome
    pub fn get_count(&self, outcome: usize) -> usize {
        self.counts.get(&outcome).copied().unwrap_or(0)
    }

    /// Observed frequency of an outcome (count / shots)
    pub fn get_probability(&self, outcome: usize) -> f64 {
        if self.shots == 0 {
            return 0.0;
        }
        self.get_count(outcome) as f64 / self.shots as f64
    }

    /// Counts keyed by ket label
    pub fn to_label_counts(&self) -> BTreeMap<String, usize> {
        self.counts
            .iter()
            .map(|(&outcome, &count)| (basis::ket(outcome, self.num_qubits), count))
            .collect()
    }
}

/// Probability of each basis index, |aᵢ|²
pub fn probabilities(state: &StateVector) -> Vec<f64> {
    state
        .amplitudes()
        .iter()
        .map(|a| a.magnitude_squared())
        .collect()
}

/// Magnitude and phase of each amplitude
pub fn amplitude_info(state: &StateVector) -> Vec<AmplitudeInfo> {
    let n = state.num_qubits();
    state
        .amplitudes()
        .iter()
        .enumerate()
        .map(|(index, a)| AmplitudeInfo {
            index,
            label: basis::ket(index, n),
            magnitude: a.magnitude(),
            phase: a.phase(),
            probability: a.magnitude_squared(),
        })
        .collect()
}

/// Probability that `qubit` reads 1
///
/// # Errors
/// [`QuantumError::InvalidQubitIndex`] if `qubit >= n`.
pub fn qubit_probability(state: &StateVector, qubit: usize) -> Result<f64> {
    QuantumError::check_qubit(qubit, state.num_qubits())?;
    Ok(state
        .amplitudes()
        .iter()
        .enumerate()
        .filter(|(index, _)| bit_of(*index, qubit) == 1)
        .map(|(_, a)| a.norm_sqr())
        .sum())
}

/// Keep only amplitudes consistent with `constraints` and renormalize
///
/// # Errors
/// - [`QuantumError::InvalidQubitIndex`] for a constraint on a missing qubit
/// - [`QuantumError::InvalidArgument`] for a value other than 0 or 1
/// - [`QuantumError::ImpossibleOutcome`] if the retained probability mass is
///   numerically zero (including contradictory constraints)
///
/// # Example
/// ```
/// use qlab_state::{bell_state_by_index, probabilities, project_and_collapse, Constraint};
///
/// let bell = bell_state_by_index(0).unwrap();
/// let collapsed = project_and_collapse(&bell, &[Constraint::new(0, 1)]).unwrap();
/// let probs = probabilities(&collapsed);
/// assert_eq!(probs[0], 0.0);
/// assert!((probs[3] - 1.0).abs() < 1e-12);
/// ```
pub fn project_and_collapse(state: &StateVector, constraints: &[Constraint]) -> Result<StateVector> {
    project_and_collapse_with(state, constraints, &StateConfig::default())
}

/// [`project_and_collapse`] with an explicit impossible-outcome threshold
pub fn project_and_collapse_with(
    state: &StateVector,
    constraints: &[Constraint],
    config: &StateConfig,
) -> Result<StateVector> {
    let n = state.num_qubits();
    for constraint in constraints {
        QuantumError::check_qubit(constraint.qubit, n)?;
        if constraint.value > 1 {
            return Err(QuantumError::invalid_argument(format!(
                "measured value for qubit {} must be 0 or 1, got {}",
                constraint.qubit, constraint.value
            )));
        }
    }

    let mass = retained_mass(state, constraints);
    if mass <= config.zero_mass_threshold {
        warn!(?constraints, mass, "collapse onto impossible outcome");
        return Err(QuantumError::ImpossibleOutcome { mass });
    }
    debug!(?constraints, mass, "collapsing state");

    Ok(rescale_consistent(state, constraints, mass))
}

/// Collapse onto an outcome drawn from the state's own distribution
///
/// The draw already has non-zero probability, so no threshold applies: a
/// rare but possible branch is kept however small its mass. Constraints
/// must be validated by the caller.
fn collapse_sampled(state: &StateVector, constraints: &[Constraint]) -> Result<StateVector> {
    let mass = retained_mass(state, constraints);
    if mass <= 0.0 {
        return Err(QuantumError::ImpossibleOutcome { mass });
    }
    Ok(rescale_consistent(state, constraints, mass))
}

fn retained_mass(state: &StateVector, constraints: &[Constraint]) -> f64 {
    state
        .amplitudes()
        .iter()
        .enumerate()
        .filter(|&(index, _)| constraints.iter().all(|c| c.matches(index)))
        .map(|(_, a)| a.norm_sqr())
        .sum()
}

fn rescale_consistent(state: &StateVector, constraints: &[Constraint], mass: f64) -> StateVector {
    let scale = 1.0 / mass.sqrt();
    let amplitudes = state
        .amplitudes()
        .iter()
        .enumerate()
        .map(|(index, &a)| {
            if constraints.iter().all(|c| c.matches(index)) {
                a * scale
            } else {
                ZERO
            }
        })
        .collect();

    StateVector::from_parts(state.num_qubits(), amplitudes)
}

/// Pick a basis index from a distribution with a uniform draw `r ∈ [0, 1)`
///
/// Walks the cumulative distribution. Round-off that leaves `r` beyond the
/// final cumulative sum falls back to the last index with non-zero
/// probability, so a zero-probability outcome is never returned.
pub fn sample_index(probabilities: &[f64], r: f64) -> usize {
    let mut cumulative = 0.0;
    let mut last_nonzero = 0;
    for (index, &p) in probabilities.iter().enumerate() {
        if p <= 0.0 {
            continue;
        }
        cumulative += p;
        last_nonzero = index;
        if r < cumulative {
            return index;
        }
    }
    last_nonzero
}

/// Measure one qubit, collapsing the rest of the state
///
/// Only a value with non-zero probability can be drawn, and the drawn
/// branch is always renormalized, however small its probability.
///
/// # Errors
/// [`QuantumError::InvalidQubitIndex`] if `qubit >= n`.
pub fn measure_qubit<R: Rng + ?Sized>(
    state: &StateVector,
    qubit: usize,
    rng: &mut R,
) -> Result<QubitMeasurement> {
    QuantumError::check_qubit(qubit, state.num_qubits())?;
    let (p0, p1) = state
        .amplitudes()
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(p0, p1), (index, a)| {
            if bit_of(index, qubit) == 0 {
                (p0 + a.norm_sqr(), p1)
            } else {
                (p0, p1 + a.norm_sqr())
            }
        });

    let r: f64 = rng.gen();
    let outcome: u8 = if p1 <= 0.0 {
        0
    } else if p0 <= 0.0 || r * (p0 + p1) >= p0 {
        1
    } else {
        0
    };
    let mass = if outcome == 1 { p1 } else { p0 };

    debug!(qubit, outcome, probability = mass, "measured qubit");
    let collapsed = collapse_sampled(state, &[Constraint::new(qubit, outcome)])?;

    Ok(QubitMeasurement {
        qubit,
        outcome,
        probability: mass / (p0 + p1),
        state: collapsed,
    })
}

/// Measure every qubit at once
pub fn measure_all<R: Rng + ?Sized>(state: &StateVector, rng: &mut R) -> Result<MeasurementResult> {
    let probs = probabilities(state);
    let outcome = sample_index(&probs, rng.gen());
    let probability = probs[outcome];

    debug!(outcome, probability, "measured all qubits");
    let constraints: Vec<Constraint> = (0..state.num_qubits())
        .map(|q| Constraint::new(q, bit_of(outcome, q)))
        .collect();
    let collapsed = collapse_sampled(state, &constraints)?;

    Ok(MeasurementResult {
        outcome,
        probability,
        state: collapsed,
    })
}

/// Draw `shots` outcomes without collapsing the state
pub fn sample_counts<R: Rng + ?Sized>(state: &StateVector, shots: usize, rng: &mut R) -> SamplingResult {
    let probs = probabilities(state);
    let mut result = SamplingResult::new(shots, state.num_qubits());
    for _ in 0..shots {
        result.add_outcome(sample_index(&probs, rng.gen()));
    }
    result
}
