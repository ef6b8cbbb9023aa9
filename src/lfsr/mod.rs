//! Serial (bit-at-a-time) Galois LFSR over GF(2)
//!
//! One step with polynomial taps p and state s (length N):
//! - feedback f = s[N-1] ⊕ d
//! - next[j] = s[j-1] ⊕ (p[j] ∧ f) for j in 1..N
//! - next[0] = f (the x^0 tap is always present)
//!
//! The matrix builder derives everything by probing these functions,
//! so they must stay bit-exact.

use bitvec::prelude::*;

use crate::poly::Polynomial;
use crate::CrcGenError;

/// Current contents of the N-stage register, index 0 = x^0 stage
pub type CrcState = BitVec;

/// Absorb a single data bit, returning the next state
pub fn advance_one(
    poly: &Polynomial,
    state: &BitSlice,
    data: bool,
) -> Result<CrcState, CrcGenError> {
    check_state(poly, state)?;
    Ok(shift_bit(poly, state, data))
}

/// Absorb `data` in order (position 0 first), returning the final state
pub fn advance_many(
    poly: &Polynomial,
    state: &BitSlice,
    data: &BitSlice,
) -> Result<CrcState, CrcGenError> {
    check_state(poly, state)?;
    Ok(shift_serial(poly, state, data.iter().by_vals()))
}

fn check_state(poly: &Polynomial, state: &BitSlice) -> Result<(), CrcGenError> {
    if state.len() != poly.degree() {
        return Err(CrcGenError::LengthMismatch {
            what: "LFSR state",
            expected: poly.degree(),
            found: state.len(),
        });
    }
    Ok(())
}

/// Unchecked single step; caller guarantees `state.len() == poly.degree()`
pub(crate) fn shift_bit(poly: &Polynomial, state: &BitSlice, data: bool) -> CrcState {
    let n = poly.degree();
    let feedback = state[n - 1] ^ data;

    let mut next = bitvec![0; n];
    for j in (1..n).rev() {
        next.set(j, state[j - 1] ^ (poly.tap(j) && feedback));
    }
    next.set(0, feedback);
    next
}

/// Unchecked serial run over an arbitrary bit sequence
pub(crate) fn shift_serial<I>(poly: &Polynomial, state: &BitSlice, data: I) -> CrcState
where
    I: IntoIterator<Item = bool>,
{
    data.into_iter()
        .fold(state.to_bitvec(), |current, bit| shift_bit(poly, &current, bit))
}
