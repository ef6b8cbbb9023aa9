//! # Parallel CRC Generator
//!
//! Derives a W-bit-parallel hardware implementation of an arbitrary CRC from
//! its serial LFSR definition and emits it as synthesizable VHDL.
//!
//! ## Pipeline
//!
//! 1. **Configuration**: preset or explicit polynomial → one validated `(N, poly)`
//! 2. **LFSR simulation**: bit-exact serial Galois register over GF(2)
//! 3. **Matrix building**: probe the simulator with one-hot vectors to get
//!    the state→state (N × N) and data→state (W × N) propagation matrices
//! 4. **Emission**: one XOR reduction per next-state bit
//!
//! Because the register is linear, `next = S·state ⊕ D·data` reproduces W
//! serial steps exactly.
//!
//! ## Usage Example
//!
//! ```
//! use crcgen::{generate, GeneratorConfig, PolySelection};
//!
//! let selection = PolySelection::from_options(Some("CRC5-USB"), None, None)?;
//! let config = GeneratorConfig::new(&selection, 4)?;
//! let vhdl = generate(&config)?;
//! assert!(vhdl.contains("package crc5_usb_4b_pkg is"));
//! # Ok::<(), crcgen::CrcGenError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod config; // Presets, polynomial selection, generator settings
pub mod emit; // HDL text output
pub mod lfsr; // Serial LFSR simulator
pub mod matrix; // Parallel propagation matrices
pub mod poly; // Polynomial representations

pub use config::{parse_int_literal, GeneratorConfig, PolySelection, Preset, PRESETS};
pub use emit::{render_unit, write_unit, HdlUnit, OutputMode};
pub use lfsr::{advance_many, advance_one, CrcState};
pub use matrix::{build_matrices, PropagationMatrices};
pub use poly::Polynomial;

use std::io::Write;

use thiserror::Error;

/// Errors raised while configuring or running the generator
#[derive(Error, Debug)]
pub enum CrcGenError {
    /// Polynomial degree outside the supported range
    #[error("invalid CRC length {length}: must be between 1 and {max}")]
    InvalidDegree {
        /// Requested degree
        length: usize,
        /// Largest supported degree
        max: usize,
    },

    /// Polynomial value has bits at or above its declared length
    #[error("polynomial value {value:#x} does not fit in {length} bits")]
    ValueTooWide {
        /// Supplied value
        value: u64,
        /// Declared length
        length: usize,
    },

    /// Polynomial value of zero
    #[error("polynomial value must be non-zero")]
    ZeroPolynomial,

    /// Parallel data width of zero
    #[error("data width must be > 0")]
    ZeroWidth,

    /// Preset name not in the table
    #[error("unknown preset '{0}'")]
    UnknownPreset(String),

    /// Preset given together with an explicit polynomial or length
    #[error("a preset cannot be combined with an explicit polynomial or length")]
    ConflictingPolynomial,

    /// Neither a preset nor a complete (value, length) pair
    #[error("need to specify both polynomial and length, or use a preset")]
    MissingPolynomial,

    /// Unparsable sum-of-powers expression
    #[error("invalid polynomial expression '{input}': {reason}")]
    ParsePolynomial {
        /// Text that failed to parse
        input: String,
        /// What was wrong with it
        reason: String,
    },

    /// Unparsable integer literal
    #[error("invalid integer literal '{0}'")]
    ParseInt(String),

    /// Unit name that is not a VHDL basic identifier
    #[error("invalid unit name '{0}': expected a letter followed by letters, digits or single underscores")]
    InvalidName(String),

    /// Bit vector of the wrong length handed to the simulator or matrices
    #[error("length mismatch for {what}: expected {expected} bits, found {found}")]
    LengthMismatch {
        /// Which vector was wrong
        what: &'static str,
        /// Required length
        expected: usize,
        /// Supplied length
        found: usize,
    },

    /// Failure writing generated output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of a `CrcGenError`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad or incomplete caller configuration, found before any computation
    Configuration,
    /// Contract violation inside the core (vector lengths)
    InvalidInput,
    /// Output could not be written
    Io,
}

impl CrcGenError {
    /// Which part of the taxonomy this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            CrcGenError::LengthMismatch { .. } => ErrorKind::InvalidInput,
            CrcGenError::Io(_) => ErrorKind::Io,
            _ => ErrorKind::Configuration,
        }
    }
}

/// Build the matrices for `config` and write the generated unit
///
/// Nothing is written unless the configuration validates and the matrices
/// are complete.
pub fn generate_to<W: Write>(writer: &mut W, config: &GeneratorConfig) -> Result<(), CrcGenError> {
    with_unit(config, |unit| write_unit(writer, config.mode, unit))
}

/// Build the matrices for `config` and render the generated unit to a string
pub fn generate(config: &GeneratorConfig) -> Result<String, CrcGenError> {
    with_unit(config, |unit| render_unit(config.mode, unit))
}

fn with_unit<T, F>(config: &GeneratorConfig, emit: F) -> Result<T, CrcGenError>
where
    F: FnOnce(&HdlUnit<'_>) -> Result<T, CrcGenError>,
{
    config.validate()?;
    let matrices = build_matrices(&config.polynomial, config.width, config.reflect_input)?;
    emit(&HdlUnit {
        name: &config.name,
        polynomial: &config.polynomial,
        matrices: &matrices,
        invocation: &config.invocation,
    })
}
