//! Basis indexing: the single qubit-to-bit convention
//!
//! A pure state of `n` qubits has `2^n` amplitudes, one per basis index.
//! Qubit `k` is bit `k` of the index, so qubit 0 is the least significant
//! bit. Labels print the most significant qubit first:
//!
//! ```text
//! index 0b110 in a 3-qubit state  →  |110⟩  (q2 = 1, q1 = 1, q0 = 0)
//! ```
//!
//! Every component that needs to read, set or pair up qubit bits goes
//! through these functions. Nothing else in qlab shifts basis indices by
//! hand.

use crate::error::QuantumError;
use crate::Result;

/// Number of amplitudes for `num_qubits` qubits
#[inline]
pub const fn dimension(num_qubits: usize) -> usize {
    1usize << num_qubits
}

/// Bit mask selecting `qubit` inside a basis index
#[inline]
pub const fn qubit_mask(qubit: usize) -> usize {
    1usize << qubit
}

/// Classical value (0 or 1) of `qubit` in basis index `index`
#[inline]
pub const fn bit_of(index: usize, qubit: usize) -> u8 {
    ((index >> qubit) & 1) as u8
}

/// `index` with the bit of `qubit` forced to `value` (any non-zero value means 1)
#[inline]
pub const fn with_bit(index: usize, qubit: usize, value: u8) -> usize {
    if value == 0 {
        index & !qubit_mask(qubit)
    } else {
        index | qubit_mask(qubit)
    }
}

/// `index` with the bit of `qubit` inverted
#[inline]
pub const fn flip_bit(index: usize, qubit: usize) -> usize {
    index ^ qubit_mask(qubit)
}

/// Insert a bit with `value` at position `qubit`, shifting higher bits up
///
/// Maps an index over the other `n - 1` qubits to the full `n`-qubit index.
#[inline]
pub const fn insert_bit(index: usize, qubit: usize, value: u8) -> usize {
    let low = index & (qubit_mask(qubit) - 1);
    let high = (index >> qubit) << (qubit + 1);
    with_bit(high | low, qubit, value)
}

/// Remove the bit at position `qubit`, shifting higher bits down
///
/// Inverse of [`insert_bit`].
#[inline]
pub const fn remove_bit(index: usize, qubit: usize) -> usize {
    let low = index & (qubit_mask(qubit) - 1);
    let high = (index >> (qubit + 1)) << qubit;
    high | low
}

/// Index pairs `(i0, i1)` that differ only in `qubit`, with `i0` holding 0
///
/// Yields `2^(n-1)` pairs in increasing order of `i0`.
pub fn pairs(qubit: usize, num_qubits: usize) -> impl Iterator<Item = (usize, usize)> {
    let half = dimension(num_qubits) >> 1;
    (0..half).map(move |k| {
        let i0 = insert_bit(k, qubit, 0);
        (i0, i0 | qubit_mask(qubit))
    })
}

/// Qubit count implied by an amplitude list length
///
/// # Errors
/// [`QuantumError::InvalidState`] if `len` is zero or not a power of two.
pub fn num_qubits_for_len(len: usize) -> Result<usize> {
    if len == 0 || !len.is_power_of_two() {
        return Err(QuantumError::invalid_state(format!(
            "length {} is not a power of two",
            len
        )));
    }
    Ok(len.trailing_zeros() as usize)
}

/// Index of the joint basis state with `high` on the qubits above
/// `low_qubits` and `low` on qubits `0..low_qubits`
#[inline]
pub const fn join(high: usize, low: usize, low_qubits: usize) -> usize {
    (high << low_qubits) | low
}

/// Human-readable ket label for a basis index, e.g. `|0110⟩`
///
/// # Errors
/// [`QuantumError::InvalidArgument`] if `num_qubits` is too wide for a basis
/// index or `index >= 2^num_qubits`.
pub fn basis_label(index: usize, num_qubits: usize) -> Result<String> {
    if num_qubits >= usize::BITS as usize {
        return Err(QuantumError::invalid_argument(format!(
            "{} qubits do not fit in a basis index",
            num_qubits
        )));
    }
    if index >= dimension(num_qubits) {
        return Err(QuantumError::invalid_argument(format!(
            "basis index {} out of range for {} qubits",
            index, num_qubits
        )));
    }
    Ok(ket(index, num_qubits))
}

/// Ket label of the low `num_qubits` bits of `index`, without range checks
///
/// Qubits beyond the width of `usize` print as 0.
pub fn ket(index: usize, num_qubits: usize) -> String {
    let bits: String = (0..num_qubits)
        .rev()
        .map(|q| match u32::try_from(q).ok().and_then(|q| index.checked_shr(q)) {
            Some(shifted) if shifted & 1 == 1 => '1',
            _ => '0',
        })
        .collect();
    format!("|{}⟩", bits)
}
