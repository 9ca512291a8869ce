// Koinos Miner - Free and Open Source Software Statement
//
// This project, koinos-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/word.rs
// Version: 1.0.2
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file defines the 256-bit word used for every quantity the worker
// handles (seeds, hashes, targets, nonces, buffer entries), located in the
// core subdirectory. It adds the small-scalar arithmetic and hex parsing the
// proof of work needs on top of the uint crate.
//
// Tree Location:
// - src/core/word.rs (256-bit word type and helpers)
// - Depends on: uint, hex, thiserror

use thiserror::Error;
use uint::construct_uint;

construct_uint! {
    pub struct U256(4);
}

/// A 256-bit unsigned word with wrapping arithmetic.
pub type Word = U256;

/// Number of bytes in a serialized word.
pub const WORD_BYTES: usize = 32;

/// Maximum number of hex digits in a word field.
const WORD_HEX_DIGITS: usize = WORD_BYTES * 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WordParseError {
    #[error("empty word field")]
    Empty,
    #[error("word field has {0} hex digits (max 64)")]
    TooLong(usize),
    #[error("invalid hex in word field: {0}")]
    InvalidHex(String),
    #[error("invalid decimal word: {0}")]
    InvalidDecimal(String),
}

/// Word operations used by the buffer generator, the evaluator and the search.
pub trait WordExt: Sized {
    /// Parse a `0x`-prefixed (or bare) hex field of up to 64 digits.
    fn from_hex_field(field: &str) -> Result<Self, WordParseError>;

    /// Parse a decimal string.
    fn from_decimal(field: &str) -> Result<Self, WordParseError>;

    /// Remainder of the division by a small modulus.
    fn mod_small(&self, modulus: u32) -> u32;

    /// Add a scalar, carrying through every limb and wrapping at 2^256.
    fn wrapping_add_small(&self, n: u64) -> Self;

    /// Big-endian byte representation.
    fn to_be_bytes(&self) -> [u8; WORD_BYTES];

    /// Zero-padded 64 digit hex with `0x` prefix.
    fn to_hex_field(&self) -> String;
}

impl WordExt for Word {
    fn from_hex_field(field: &str) -> Result<Self, WordParseError> {
        let digits = field
            .strip_prefix("0x")
            .or_else(|| field.strip_prefix("0X"))
            .unwrap_or(field);

        if digits.is_empty() {
            return Err(WordParseError::Empty);
        }
        if digits.len() > WORD_HEX_DIGITS {
            return Err(WordParseError::TooLong(digits.len()));
        }

        let padded = format!("{:0>width$}", digits, width = WORD_HEX_DIGITS);
        let bytes = hex::decode(&padded).map_err(|e| WordParseError::InvalidHex(e.to_string()))?;
        Ok(Word::from_big_endian(&bytes))
    }

    fn from_decimal(field: &str) -> Result<Self, WordParseError> {
        Word::from_dec_str(field).map_err(|e| WordParseError::InvalidDecimal(format!("{:?}", e)))
    }

    #[inline]
    fn mod_small(&self, modulus: u32) -> u32 {
        let m = modulus as u128;
        let mut rem = 0u128;
        for limb in self.0.iter().rev() {
            rem = ((rem << 64) | *limb as u128) % m;
        }
        rem as u32
    }

    #[inline]
    fn wrapping_add_small(&self, n: u64) -> Self {
        self.overflowing_add(Word::from(n)).0
    }

    fn to_be_bytes(&self) -> [u8; WORD_BYTES] {
        let mut bytes = [0u8; WORD_BYTES];
        for (i, limb) in self.0.iter().rev().enumerate() {
            bytes[i * 8..(i + 1) * 8].copy_from_slice(&limb.to_be_bytes());
        }
        bytes
    }

    fn to_hex_field(&self) -> String {
        format!("0x{}", hex::encode(self.to_be_bytes()))
    }
}


// Changelog:
// - v1.0.2 (2026-10-17): Build multi-limb words through U256 directly; the
//   Word alias is not a tuple constructor.
// - v1.0.1 (2026-10-17): Serialize words limb by limb instead of through uint's
//   byte helpers, whose signatures changed between uint releases.
// - v1.0.0 (2026-10-17): Initial word type.
//   - Purpose: 256-bit word with hex/decimal parsing, small modulus and
//     wrapping scalar addition for nonce advancement.
