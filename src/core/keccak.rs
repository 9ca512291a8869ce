// Koinos Miner - Free and Open Source Software Statement
//
// This project, koinos-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/keccak.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file wraps the Keccak-256 digest (Ethereum padding, not NIST SHA3-256)
// used to derive the word buffer, located in the core subdirectory.
//
// Tree Location:
// - src/core/keccak.rs (hash primitive)
// - Depends on: sha3 crate

use crate::core::word::{WORD_BYTES, Word, WordExt};
use sha3::{Digest, Keccak256};

/// Keccak-256 of an arbitrary byte string
pub fn keccak256(data: &[u8]) -> [u8; WORD_BYTES] {
    Keccak256::digest(data).into()
}

/// Keccak-256 of two words packed big-endian, read back as a big-endian word.
///
/// Matches `keccak256(abi.encode(uint256 a, uint256 b))` on chain.
pub fn keccak_words(a: &Word, b: &Word) -> Word {
    let mut packed = [0u8; 2 * WORD_BYTES];
    packed[..WORD_BYTES].copy_from_slice(&a.to_be_bytes());
    packed[WORD_BYTES..].copy_from_slice(&b.to_be_bytes());
    Word::from_big_endian(&keccak256(&packed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak_empty() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_keccak_words_matches_packed_encoding() {
        let a = Word::from(1u64);
        let b = Word::from(2u64);

        let mut packed = Vec::with_capacity(64);
        packed.extend_from_slice(&a.to_be_bytes());
        packed.extend_from_slice(&b.to_be_bytes());

        assert_eq!(keccak_words(&a, &b), Word::from_big_endian(&keccak256(&packed)));
        assert_ne!(keccak_words(&a, &b), keccak_words(&b, &a));
    }
}

// Changelog:
// - v1.0.0 (2026-10-17): Initial Keccak-256 wrapper.
