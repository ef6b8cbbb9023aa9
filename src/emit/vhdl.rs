//! VHDL package writer

use std::io::Write;

use super::{HdlUnit, Term};
use crate::CrcGenError;

const RULE: &str = "----------------------------------------";

/// Write a VHDL package declaring and implementing `<name>(state, data)`
///
/// The comment header carries the CRC and data widths (`CRC width: N data
/// width: W`), the polynomial in sum-of-powers and hex form, and the command
/// line arguments. There is no project URL, licence tag or version line, and
/// the widths line keeps a space after `CRC width:`.
pub fn write_vhdl_package<W: Write>(writer: &mut W, unit: &HdlUnit<'_>) -> Result<(), CrcGenError> {
    let name = unit.name;
    let crc_width = unit.matrices.crc_width();
    let data_width = unit.matrices.data_width();
    let signature = format!(
        "function {name}(state: std_logic_vector({} downto 0); data: std_logic_vector({} downto 0)) return std_logic_vector",
        crc_width - 1,
        data_width - 1
    );

    writeln!(writer, "{RULE}")?;
    writeln!(writer, "-- Parallel CRC Calculation Package")?;
    writeln!(writer, "-- CRC width: {crc_width} data width: {data_width}")?;
    writeln!(
        writer,
        "-- polynomial: {} (0x{:X})",
        unit.polynomial, unit.polynomial
    )?;
    writeln!(writer, "-- Generated with crcgen")?;
    writeln!(writer, "-- arguments: {}", unit.invocation)?;
    writeln!(writer, "{RULE}")?;
    writeln!(writer)?;

    writeln!(writer, "library ieee;")?;
    writeln!(writer, "use ieee.std_logic_1164.all;")?;
    writeln!(writer)?;
    writeln!(writer, "package {name}_pkg is")?;
    writeln!(writer)?;
    writeln!(writer, "    {signature};")?;
    writeln!(writer)?;
    writeln!(writer, "end {name}_pkg;")?;
    writeln!(writer)?;

    writeln!(writer, "library ieee;")?;
    writeln!(writer, "use ieee.std_logic_1164.all;")?;
    writeln!(writer)?;
    writeln!(writer, "package body {name}_pkg is")?;
    writeln!(writer)?;
    writeln!(writer, "    {signature} is")?;
    writeln!(
        writer,
        "        variable next_state : std_logic_vector({} downto 0);",
        crc_width - 1
    )?;
    writeln!(writer, "    begin")?;
    for j in 0..crc_width {
        writeln!(writer, "        next_state({j}) := {};", expression(&unit.terms(j)))?;
    }
    writeln!(writer, "        return next_state;")?;
    writeln!(writer, "    end {name};")?;
    writeln!(writer)?;
    writeln!(writer, "end {name}_pkg;")?;

    writer.flush()?;
    Ok(())
}

/// `a xor b xor ...`, or the constant `'0'` when nothing feeds the bit
fn expression(terms: &[Term]) -> String {
    if terms.is_empty() {
        return "'0'".to_string();
    }
    terms
        .iter()
        .map(|term| match term {
            Term::State(i) => format!("state({i})"),
            Term::Data(i) => format!("data({i})"),
        })
        .collect::<Vec<_>>()
        .join(" xor ")
}
