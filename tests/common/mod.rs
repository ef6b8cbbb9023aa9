#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use bitvec::prelude::*;
use crcgen::{generate, GeneratorConfig, Polynomial};

/// Regenerates golden files instead of comparing against them
const UPDATE_VAR: &str = "CRCGEN_UPDATE_SNAPSHOTS";

fn golden_path(stem: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/snapshots/vhdl")
        .join(format!("{stem}.vhd"))
}

/// Render `config` and compare it with `tests/snapshots/vhdl/<stem>.vhd`
pub fn assert_renders_golden(config: &GeneratorConfig, stem: &str) {
    let vhdl = generate(config).expect("generation should succeed");
    assert_golden_vhdl(stem, &vhdl);
}

/// Compare already rendered VHDL (e.g. captured stdout) with a golden file
pub fn assert_golden_vhdl(stem: &str, actual: &str) {
    let path = golden_path(stem);
    if std::env::var_os(UPDATE_VAR).is_some() {
        fs::write(&path, actual).expect("write golden file");
        return;
    }

    let expected = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("golden file {} unreadable: {err}", path.display()));
    let expected = expected.replace("\r\n", "\n");
    if let Some((line, (want, got))) = expected
        .lines()
        .zip(actual.lines())
        .enumerate()
        .find(|(_, (want, got))| want != got)
    {
        panic!(
            "{stem}.vhd differs at line {}:\n  expected: {want}\n  actual:   {got}\nset {UPDATE_VAR}=1 to regenerate",
            line + 1
        );
    }
    assert_eq!(
        expected.lines().count(),
        actual.lines().count(),
        "{stem}.vhd line count differs; set {UPDATE_VAR}=1 to regenerate"
    );
}

/// `"10100"` → bit vector with index 0 = first character
pub fn bits_of(text: &str) -> BitVec {
    text.chars().map(|c| c == '1').collect()
}

/// Low `width` bits of `value`, bit 0 first
pub fn word_bits(width: usize, value: u64) -> BitVec {
    (0..width).map(|i| (value >> i) & 1 != 0).collect()
}

pub fn crc5_usb() -> Polynomial {
    Polynomial::from_int(5, 0x5).expect("CRC5-USB polynomial")
}

pub fn crc32() -> Polynomial {
    Polynomial::from_int(32, 0x04C1_1DB7).expect("CRC32 polynomial")
}
