//! End-to-end CRC checks: seed, step the parallel matrices, then compare
//! against published check values after output reflection and inversion.

mod common;

use bitvec::prelude::*;
use common::{bits_of, crc32, crc5_usb, word_bits};
use crcgen::{build_matrices, Polynomial};
use test_case::test_case;

/// Published values are reflected and complemented relative to the register
fn reflected_complement(mut bits: BitVec) -> BitVec {
    bits.reverse();
    !bits
}

// USB token CRC5 examples
#[test_case("00001000111", "10100")]
#[test_case("10101000111", "10111")]
#[test_case("01011100101", "11100")]
#[test_case("00001110010", "01110")]
#[test_case("10000000000", "10111")]
fn crc5_usb_serial(data: &str, expected: &str) {
    let matrices = build_matrices(&crc5_usb(), 1, false).unwrap();
    let mut state = bitvec![1; 5];
    for bit in bits_of(data).iter().by_vals() {
        let mut word = bitvec![0; 1];
        word.set(0, bit);
        state = matrices.next_state(&state, &word).unwrap();
    }
    assert_eq!(state, reflected_complement(bits_of(expected)));
}

#[test_case("00001000111", "10100")]
#[test_case("10101000111", "10111")]
#[test_case("01011100101", "11100")]
#[test_case("00001110010", "01110")]
#[test_case("10000000000", "10111")]
fn crc5_usb_single_step(data: &str, expected: &str) {
    let matrices = build_matrices(&crc5_usb(), 11, true).unwrap();
    let state = matrices.next_state(bits![1; 5], &bits_of(data)).unwrap();
    assert_eq!(state, reflected_complement(bits_of(expected)));
}

/// CRC-32/ISO-HDLC: init all ones, reflected in and out, final complement
fn crc32_parallel(width: usize, words: &[u64]) -> BitVec {
    let matrices = build_matrices(&crc32(), width, true).unwrap();
    words.iter().fold(bitvec![1; 32], |state, &word| {
        matrices.next_state(&state, &word_bits(width, word)).unwrap()
    })
}

// AUTOSAR CRC library test vectors
#[test_case(&[0x00, 0x00, 0x00, 0x00], 0x2144_DF1C)]
#[test_case(&[0xF2, 0x01, 0x83], 0x24AB_9D77)]
#[test_case(&[0x0F, 0xAA, 0x00, 0x55], 0xB6C9_B287)]
#[test_case(&[0x00, 0xFF, 0x55, 0x11], 0x32A0_6212)]
#[test_case(&[0x33, 0x22, 0x55, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF], 0xB0AE_863D)]
#[test_case(&[0x92, 0x6B, 0x55], 0x9CDE_A29B)]
#[test_case(&[0xFF, 0xFF, 0xFF, 0xFF], 0xFFFF_FFFF)]
fn crc32_bytewise(bytes: &[u64], check: u64) {
    let state = crc32_parallel(8, bytes);
    assert_eq!(state, reflected_complement(word_bits(32, check)));
}

#[test_case(&[0x0000, 0x0000], 0x2144_DF1C)]
#[test_case(&[0xAA0F, 0x5500], 0xB6C9_B287)]
#[test_case(&[0xFF00, 0x1155], 0x32A0_6212)]
#[test_case(&[0xFFFF, 0xFFFF], 0xFFFF_FFFF)]
fn crc32_halfwordwise(halfwords: &[u64], check: u64) {
    let state = crc32_parallel(16, halfwords);
    assert_eq!(state, reflected_complement(word_bits(32, check)));
}

#[test]
fn crc32_check_string() {
    // "123456789" → 0xCBF43926
    let bytes: Vec<u64> = b"123456789".iter().map(|&b| u64::from(b)).collect();
    let state = crc32_parallel(8, &bytes);
    assert_eq!(state, reflected_complement(word_bits(32, 0xCBF4_3926)));
}

#[test]
fn crc16_ccitt_false_check_string() {
    // CRC-16/IBM-3740: poly 0x1021, init 0xFFFF, no reflection, no final xor.
    // Without reflection the MSB of each byte enters first, so data wire 0
    // (the last bit applied) carries bit 0 of the byte.
    let poly = Polynomial::from_int(16, 0x1021).unwrap();
    let matrices = build_matrices(&poly, 8, false).unwrap();
    let state = b"123456789".iter().fold(bitvec![1; 16], |state, &byte| {
        matrices
            .next_state(&state, &word_bits(8, u64::from(byte)))
            .unwrap()
    });
    assert_eq!(state, word_bits(16, 0x29B1));
}
