//! Parallel propagation matrices
//!
//! W serial LFSR steps are linear over GF(2), so the next state splits into
//! a zero-data response and a zero-state response:
//!
//! ```text
//! next[j] = ⊕ { state[i] : S[i][j] = 1 } ⊕ { data[i] : D[i][j] = 1 }
//! ```
//!
//! S (N × N) and D (W × N) are found by pushing one-hot basis vectors
//! through the serial simulator, one probe per row.

use bitvec::prelude::*;
use tracing::{debug, trace};

use crate::lfsr::{shift_serial, CrcState};
use crate::poly::Polynomial;
use crate::CrcGenError;

/// State→state and data→state matrices for one (polynomial, width) pair
///
/// Rows are sources, columns are destination state bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropagationMatrices {
    /// N rows indexed by source state bit
    state: Vec<BitVec>,
    /// W rows indexed by data wire
    data: Vec<BitVec>,
    reflect_input: bool,
}

/// Derive the propagation matrices for `width` data bits per step
///
/// With `reflect_input` the data row at index i is the bit applied i-th
/// (data wire 0 enters the register first). Without it the rows run in
/// reverse, so wire 0 is the bit applied last.
pub fn build_matrices(
    poly: &Polynomial,
    width: usize,
    reflect_input: bool,
) -> Result<PropagationMatrices, CrcGenError> {
    if width == 0 {
        return Err(CrcGenError::ZeroWidth);
    }
    let n = poly.degree();

    let state: Vec<BitVec> = (0..n)
        .map(|i| {
            let mut basis = bitvec![0; n];
            basis.set(i, true);
            let row = shift_serial(poly, &basis, std::iter::repeat(false).take(width));
            trace!(source = i, row = %bit_string(&row), "state probe");
            row
        })
        .collect();

    let null_state = bitvec![0; n];
    let probe_data = |i: usize| {
        let row = shift_serial(poly, &null_state, (0..width).map(|k| k == i));
        trace!(position = i, row = %bit_string(&row), "data probe");
        row
    };
    let data: Vec<BitVec> = if reflect_input {
        (0..width).map(probe_data).collect()
    } else {
        (0..width).rev().map(probe_data).collect()
    };

    let matrices = PropagationMatrices {
        state,
        data,
        reflect_input,
    };
    debug!(
        degree = n,
        width,
        reflect_input,
        state_ones = matrices.state_ones(),
        data_ones = matrices.data_ones(),
        "built propagation matrices"
    );
    Ok(matrices)
}

impl PropagationMatrices {
    /// CRC width N
    pub fn crc_width(&self) -> usize {
        self.state.len()
    }

    /// Parallel data width W
    pub fn data_width(&self) -> usize {
        self.data.len()
    }

    /// Row ordering the data matrix was built with
    pub fn reflect_input(&self) -> bool {
        self.reflect_input
    }

    /// State→state rows, row i = response to state bit i
    pub fn state_rows(&self) -> &[BitVec] {
        &self.state
    }

    /// Data→state rows, row i = response to data wire i
    pub fn data_rows(&self) -> &[BitVec] {
        &self.data
    }

    /// Source state bits feeding destination bit `j`, ascending
    pub fn state_terms(&self, j: usize) -> impl Iterator<Item = usize> + '_ {
        column(&self.state, j)
    }

    /// Data wires feeding destination bit `j`, ascending
    pub fn data_terms(&self, j: usize) -> impl Iterator<Item = usize> + '_ {
        column(&self.data, j)
    }

    /// One parallel step: XOR-reduce `state` and `data` through the matrices
    ///
    /// `data[i]` is data wire i, in the row order of `data_rows`.
    pub fn next_state(&self, state: &BitSlice, data: &BitSlice) -> Result<CrcState, CrcGenError> {
        if state.len() != self.crc_width() {
            return Err(CrcGenError::LengthMismatch {
                what: "parallel state",
                expected: self.crc_width(),
                found: state.len(),
            });
        }
        if data.len() != self.data_width() {
            return Err(CrcGenError::LengthMismatch {
                what: "parallel data",
                expected: self.data_width(),
                found: data.len(),
            });
        }

        let mut next = bitvec![0; self.crc_width()];
        let active_rows = state
            .iter_ones()
            .map(|i| &self.state[i])
            .chain(data.iter_ones().map(|i| &self.data[i]));
        for row in active_rows {
            for j in row.iter_ones() {
                let bit = next[j];
                next.set(j, !bit);
            }
        }
        Ok(next)
    }

    fn state_ones(&self) -> usize {
        self.state.iter().map(|row| row.count_ones()).sum()
    }

    fn data_ones(&self) -> usize {
        self.data.iter().map(|row| row.count_ones()).sum()
    }
}

fn column(rows: &[BitVec], j: usize) -> impl Iterator<Item = usize> + '_ {
    rows.iter()
        .enumerate()
        .filter(move |(_, row)| row[j])
        .map(|(i, _)| i)
}

/// Render a bit vector index 0 first, as in `10100`
pub(crate) fn bit_string(bits: &BitSlice) -> String {
    bits.iter()
        .by_vals()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}
