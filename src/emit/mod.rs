//! HDL emission
//!
//! Renders propagation matrices as a single-cycle combinational function:
//! one XOR reduction per destination state bit, terms kept in matrix row
//! order.

mod vhdl;

pub use vhdl::write_vhdl_package;

use std::io::Write;

use tracing::debug;

use crate::matrix::PropagationMatrices;
use crate::poly::Polynomial;
use crate::CrcGenError;

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputMode {
    /// VHDL package with a next-state function
    #[default]
    #[value(name = "vhdl_package")]
    VhdlPackage,
}

/// Everything needed to render one generated unit
#[derive(Debug, Clone, Copy)]
pub struct HdlUnit<'a> {
    /// Function name; the package is `<name>_pkg`
    pub name: &'a str,
    /// Polynomial recorded in the header
    pub polynomial: &'a Polynomial,
    /// Matrices driving the body
    pub matrices: &'a PropagationMatrices,
    /// Invocation recorded in the header
    pub invocation: &'a str,
}

impl HdlUnit<'_> {
    /// XOR terms for destination bit `j`: state terms, then data terms
    pub fn terms(&self, j: usize) -> Vec<Term> {
        self.matrices
            .state_terms(j)
            .map(Term::State)
            .chain(self.matrices.data_terms(j).map(Term::Data))
            .collect()
    }
}

/// One XOR input of a next-state expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    /// Prior state bit
    State(usize),
    /// Data wire
    Data(usize),
}

/// Write `unit` in the requested format
pub fn write_unit<W: Write>(
    writer: &mut W,
    mode: OutputMode,
    unit: &HdlUnit<'_>,
) -> Result<(), CrcGenError> {
    debug!(name = unit.name, ?mode, "emitting unit");
    match mode {
        OutputMode::VhdlPackage => write_vhdl_package(writer, unit),
    }
}

/// Render `unit` into a string (useful for tests and snapshots)
pub fn render_unit(mode: OutputMode, unit: &HdlUnit<'_>) -> Result<String, CrcGenError> {
    let mut buffer = Vec::new();
    write_unit(&mut buffer, mode, unit)?;
    String::from_utf8(buffer).map_err(|err| {
        CrcGenError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
    })
}
