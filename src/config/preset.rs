//! Built-in polynomial presets
//!
//! Presets fix only the polynomial and its length; width and input
//! ordering always come from the caller.

use crate::poly::Polynomial;
use crate::CrcGenError;

/// Named CRC polynomial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Lookup name, e.g. `CRC5-USB`
    pub name: &'static str,
    /// Polynomial degree N
    pub length: usize,
    /// Normal-form polynomial value
    pub value: u64,
}

/// Read-only preset table
pub static PRESETS: [Preset; 2] = [
    Preset {
        name: "CRC5-USB",
        length: 5,
        value: 0x5,
    },
    Preset {
        name: "CRC32",
        length: 32,
        value: 0x04C1_1DB7,
    },
];

impl Preset {
    /// Find a preset by exact name
    pub fn lookup(name: &str) -> Option<&'static Preset> {
        PRESETS.iter().find(|preset| preset.name == name)
    }

    /// All preset names, in table order
    pub fn names() -> impl Iterator<Item = &'static str> {
        PRESETS.iter().map(|preset| preset.name)
    }

    /// Polynomial described by this preset
    pub fn polynomial(&self) -> Result<Polynomial, CrcGenError> {
        Polynomial::from_int(self.length, self.value)
    }

    /// Identifier-safe form of the name: `CRC5-USB` → `crc5_usb`
    pub fn identifier(&self) -> String {
        self.name.to_lowercase().replace('-', "_")
    }
}
