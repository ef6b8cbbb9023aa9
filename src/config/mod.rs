//! Generator configuration
//!
//! Turns the caller's choices into one validated configuration before any
//! matrix work starts:
//! - polynomial selection: preset or explicit (value, length), never both
//! - data width, input ordering, output mode and unit name

mod preset;

pub use preset::{Preset, PRESETS};

use crate::emit::OutputMode;
use crate::poly::Polynomial;
use crate::CrcGenError;

/// Where the polynomial comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolySelection {
    /// Entry from the preset table
    Preset(&'static Preset),
    /// Explicit normal-form value with its bit length
    Explicit {
        /// Polynomial value without the leading term
        value: u64,
        /// Degree N
        length: usize,
    },
}

impl PolySelection {
    /// Resolve optional caller inputs into exactly one selection
    ///
    /// A preset excludes both value and length; otherwise both are needed.
    pub fn from_options(
        preset: Option<&str>,
        value: Option<u64>,
        length: Option<usize>,
    ) -> Result<Self, CrcGenError> {
        match (preset, value, length) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(CrcGenError::ConflictingPolynomial),
            (Some(name), None, None) => Preset::lookup(name)
                .map(PolySelection::Preset)
                .ok_or_else(|| CrcGenError::UnknownPreset(name.to_string())),
            (None, Some(0), Some(_)) => Err(CrcGenError::ZeroPolynomial),
            (None, Some(value), Some(length)) => Ok(PolySelection::Explicit { value, length }),
            (None, _, _) => Err(CrcGenError::MissingPolynomial),
        }
    }

    /// Canonical polynomial for this selection
    pub fn resolve(&self) -> Result<Polynomial, CrcGenError> {
        match *self {
            PolySelection::Preset(preset) => preset.polynomial(),
            PolySelection::Explicit { value, length } => Polynomial::from_int(length, value),
        }
    }

    /// Base of the default unit name: preset identifier or `crc<N>`
    pub fn base_name(&self) -> String {
        match self {
            PolySelection::Preset(preset) => preset.identifier(),
            PolySelection::Explicit { length, .. } => format!("crc{}", length),
        }
    }
}

/// Validated inputs for one generator run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Resolved polynomial
    pub polynomial: Polynomial,
    /// Parallel data width W
    pub width: usize,
    /// Data wire 0 is the earliest serial bit when set
    pub reflect_input: bool,
    /// Output format
    pub mode: OutputMode,
    /// Function/package base name
    pub name: String,
    /// Invocation recorded in the output header
    pub invocation: String,
}

impl GeneratorConfig {
    /// Configuration with defaults: reflected input, VHDL package, and a
    /// unit name of `<base>_<W>b`
    pub fn new(selection: &PolySelection, width: usize) -> Result<Self, CrcGenError> {
        if width == 0 {
            return Err(CrcGenError::ZeroWidth);
        }
        let polynomial = selection.resolve()?;

        Ok(Self {
            polynomial,
            width,
            reflect_input: true,
            mode: OutputMode::default(),
            name: format!("{}_{}b", selection.base_name(), width),
            invocation: String::new(),
        })
    }

    /// Set input ordering
    pub fn with_reflect_input(mut self, reflect_input: bool) -> Self {
        self.reflect_input = reflect_input;
        self
    }

    /// Set output mode
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Override the unit name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Record the invocation shown in the header
    pub fn with_invocation(mut self, invocation: impl Into<String>) -> Self {
        self.invocation = invocation.into();
        self
    }

    /// Re-check fields that may have been set directly
    pub fn validate(&self) -> Result<(), CrcGenError> {
        if self.width == 0 {
            return Err(CrcGenError::ZeroWidth);
        }
        if !is_basic_identifier(&self.name) {
            return Err(CrcGenError::InvalidName(self.name.clone()));
        }
        Ok(())
    }
}

/// VHDL basic identifier: letter first, then letters, digits and single
/// underscores, no trailing underscore
fn is_basic_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    let mut previous = ' ';
    for c in chars {
        let valid = c.is_ascii_alphanumeric() || (c == '_' && previous != '_');
        if !valid {
            return false;
        }
        previous = c;
    }
    previous != '_'
}

/// Parse an integer literal with an optional `0x`, `0o` or `0b` prefix
///
/// Underscores between digits are ignored.
pub fn parse_int_literal(text: &str) -> Result<u64, CrcGenError> {
    let fail = || CrcGenError::ParseInt(text.to_string());
    let trimmed = text.trim();
    let (digits, radix) = match trimmed.get(..2) {
        Some("0x") | Some("0X") => (&trimmed[2..], 16),
        Some("0o") | Some("0O") => (&trimmed[2..], 8),
        Some("0b") | Some("0B") => (&trimmed[2..], 2),
        _ => (trimmed, 10),
    };
    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') {
        return Err(fail());
    }
    u64::from_str_radix(&digits.replace('_', ""), radix).map_err(|_| fail())
}
