//! CRC generator polynomials over GF(2)
//!
//! A polynomial of degree N is stored as its N reduced taps:
//! - bit i set ⇔ term x^i present
//! - the leading x^N term is implicit and never stored
//!
//! Three lossless forms: tap vector, unsigned integer (bit i ⇔ tap i),
//! and the sum-of-powers string `x^N + ... + 1`.

mod parse;

use std::fmt;

use bitvec::prelude::*;

use crate::CrcGenError;

/// Normal-form (non-reversed, non-reciprocal) CRC polynomial
///
/// Immutable once constructed. Degree is in `1..=MAX_DEGREE`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Polynomial {
    /// Reduced taps, index i ⇔ x^i
    taps: BitVec,
}

impl Polynomial {
    /// Largest degree representable in the integer form
    pub const MAX_DEGREE: usize = 64;

    /// Build from a tap vector (index 0 = x^0)
    pub fn from_bits(bits: &BitSlice) -> Result<Self, CrcGenError> {
        check_degree(bits.len())?;
        Ok(Self {
            taps: bits.to_bitvec(),
        })
    }

    /// Build from the integer form; `value` must fit in `length` bits
    pub fn from_int(length: usize, value: u64) -> Result<Self, CrcGenError> {
        check_degree(length)?;
        if length < u64::BITS as usize && value >> length != 0 {
            return Err(CrcGenError::ValueTooWide { value, length });
        }

        let taps = (0..length).map(|i| (value >> i) & 1 != 0).collect();
        Ok(Self { taps })
    }

    /// Integer form (bit i ⇔ x^i)
    pub fn to_int(&self) -> u64 {
        self.taps
            .iter_ones()
            .fold(0u64, |acc, i| acc | (1u64 << i))
    }

    /// Degree N (= register length)
    pub fn degree(&self) -> usize {
        self.taps.len()
    }

    /// Whether term x^i is present (i < N)
    pub fn tap(&self, i: usize) -> bool {
        self.taps[i]
    }

    /// Reduced tap vector
    pub fn taps(&self) -> &BitSlice {
        &self.taps
    }
}

fn check_degree(length: usize) -> Result<(), CrcGenError> {
    if length == 0 || length > Polynomial::MAX_DEGREE {
        return Err(CrcGenError::InvalidDegree {
            length,
            max: Polynomial::MAX_DEGREE,
        });
    }
    Ok(())
}

/// Write `x^k`, `x` or `1` for a single power
fn write_power(f: &mut fmt::Formatter<'_>, power: usize) -> fmt::Result {
    match power {
        0 => f.write_str("1"),
        1 => f.write_str("x"),
        _ => write!(f, "x^{}", power),
    }
}

impl fmt::Display for Polynomial {
    /// Descending sum of powers, e.g. `x^5 + x^2 + 1`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_power(f, self.degree())?;
        for power in self.taps.iter_ones().rev() {
            f.write_str(" + ")?;
            write_power(f, power)?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.to_int(), f)
    }
}
