// Koinos Miner - Free and Open Source Software Statement
//
// This project, koinos-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/params.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file holds the fixed proof-of-work parameters: the word buffer
// geometry and the ten coprime moduli. They are built once at startup and
// passed by reference to the buffer generator, evaluator and search.

use crate::core::word::WORD_BYTES;

/// Word buffer size in bytes (2 MiB)
pub const WORD_BUFFER_BYTES: usize = 2 << 20;

/// Number of words in the buffer
pub const WORD_BUFFER_LENGTH: usize = WORD_BUFFER_BYTES / WORD_BYTES;

/// Number of buffer samples folded into each proof
pub const SAMPLE_INDICES: usize = 10;

/// Number of polynomial coefficients derived from a nonce
pub const COEFFICIENTS: usize = 5;

const COPRIMES: [u32; SAMPLE_INDICES] = [
    0x0000fffd, 0x0000fffb, 0x0000fff7, 0x0000fff1, 0x0000ffef,
    0x0000ffe5, 0x0000ffdf, 0x0000ffd9, 0x0000ffd3, 0x0000ffd1,
];

/// Immutable proof-of-work parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkParams {
    coprimes: [u32; SAMPLE_INDICES],
    buffer_length: usize,
}

impl WorkParams {
    pub fn new() -> Self {
        Self {
            coprimes: COPRIMES,
            buffer_length: WORD_BUFFER_LENGTH,
        }
    }

    pub fn coprimes(&self) -> &[u32; SAMPLE_INDICES] {
        &self.coprimes
    }

    pub fn buffer_length(&self) -> usize {
        self.buffer_length
    }

    /// Modulus applied to every index step. One less than the buffer length,
    /// so the last word is never sampled; changing it changes every proof.
    pub fn index_modulus(&self) -> u64 {
        (self.buffer_length - 1) as u64
    }
}

impl Default for WorkParams {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_geometry() {
        let params = WorkParams::new();
        assert_eq!(params.buffer_length(), 65536);
        assert_eq!(params.index_modulus(), 65535);
        assert!(params.buffer_length().is_power_of_two());
    }

    #[test]
    fn test_coprimes_are_distinct_odd_and_below_length() {
        let params = WorkParams::new();
        let coprimes = params.coprimes();
        for (i, c) in coprimes.iter().enumerate() {
            assert_eq!(c % 2, 1);
            assert!((*c as usize) < params.buffer_length());
            assert!(!coprimes[..i].contains(c));
        }
    }
}

// Changelog:
// - v1.0.0 (2026-10-17): Buffer geometry and coprime moduli gathered into
//   WorkParams.
