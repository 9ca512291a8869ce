// Koinos Miner - Free and Open Source Software Statement
//
// This project, koinos-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/work.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the proof-of-work function, located in the core
// subdirectory. A proof folds ten buffer words into the committed hash by
// XOR; the word indices come from a quartic in x[i] = hash mod p[i] whose
// coefficients are c[j] = 1 + nonce mod p[j]. A proof only counts when the
// ten indices are pairwise distinct.
//
// Tree Location:
// - src/core/work.rs (proof evaluation and uniqueness check)
// - Depends on: params, table, word

use crate::core::params::{COEFFICIENTS, SAMPLE_INDICES, WorkParams};
use crate::core::table::WordTable;
use crate::core::word::{Word, WordExt};
use thiserror::Error;

/// x[i] = committed hash mod p[i]; fixed for a whole job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkIndices([u32; SAMPLE_INDICES]);

impl WorkIndices {
    pub fn new(params: &WorkParams, committed_hash: &Word) -> Self {
        let coprimes = params.coprimes();
        Self(std::array::from_fn(|i| committed_hash.mod_small(coprimes[i])))
    }

    pub fn values(&self) -> &[u32; SAMPLE_INDICES] {
        &self.0
    }
}

/// c[j] = 1 + nonce mod p[j]; recomputed for every nonce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coefficients([u64; COEFFICIENTS]);

impl Coefficients {
    pub fn new(params: &WorkParams, nonce: &Word) -> Self {
        let coprimes = params.coprimes();
        Self(std::array::from_fn(|j| 1 + nonce.mod_small(coprimes[j]) as u64))
    }

    pub fn values(&self) -> &[u64; COEFFICIENTS] {
        &self.0
    }

    /// Horner evaluation of c4*x^4 + c3*x^3 + c2*x^2 + c1*x + c0, reduced
    /// after every multiply-accumulate.
    #[inline]
    fn word_index(&self, x: u32, modulus: u64) -> usize {
        let x = x as u64;
        let c = self.values();
        let mut y = c[4];
        y = (y * x + c[3]) % modulus;
        y = (y * x + c[2]) % modulus;
        y = (y * x + c[1]) % modulus;
        y = (y * x + c[0]) % modulus;
        y as usize
    }
}

/// Folded result and the buffer indices it touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proof {
    pub result: Word,
    pub indices: [usize; SAMPLE_INDICES],
}

impl Proof {
    pub fn is_unique(&self) -> bool {
        indices_are_unique(&self.indices)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProofError {
    #[error("proof result {result:#x} is not below target {target:#x}")]
    AboveTarget { result: Word, target: Word },
    #[error("proof samples buffer word {index} more than once")]
    NonUniqueIndices { index: usize },
}

/// Evaluate a nonce against a prepared job.
///
/// `indices` must have been built from `committed_hash`.
#[inline]
pub fn evaluate_with_indices(
    params: &WorkParams,
    indices: &WorkIndices,
    committed_hash: &Word,
    nonce: &Word,
    table: &WordTable,
) -> Proof {
    let coefficients = Coefficients::new(params, nonce);
    let modulus = params.index_modulus();

    let mut result = *committed_hash;
    let mut touched = [0usize; SAMPLE_INDICES];
    for (slot, x) in touched.iter_mut().zip(indices.values().iter()) {
        let y = coefficients.word_index(*x, modulus);
        result = result ^ table[y];
        *slot = y;
    }

    Proof { result, indices: touched }
}

/// Evaluate a nonce from scratch
pub fn evaluate(params: &WorkParams, committed_hash: &Word, nonce: &Word, table: &WordTable) -> Proof {
    let indices = WorkIndices::new(params, committed_hash);
    evaluate_with_indices(params, &indices, committed_hash, nonce, table)
}

/// True when no buffer index repeats
#[inline]
pub fn indices_are_unique(indices: &[usize; SAMPLE_INDICES]) -> bool {
    first_repeat(indices).is_none()
}

fn first_repeat(indices: &[usize; SAMPLE_INDICES]) -> Option<usize> {
    for i in 1..SAMPLE_INDICES {
        if indices[..i].contains(&indices[i]) {
            return Some(indices[i]);
        }
    }
    None
}

/// Full check of a claimed nonce: below target and unique samples
pub fn verify_nonce(
    params: &WorkParams,
    table: &WordTable,
    committed_hash: &Word,
    target: &Word,
    nonce: &Word,
) -> Result<Word, ProofError> {
    let proof = evaluate(params, committed_hash, nonce, table);
    if proof.result >= *target {
        return Err(ProofError::AboveTarget {
            result: proof.result,
            target: *target,
        });
    }
    if let Some(index) = first_repeat(&proof.indices) {
        return Err(ProofError::NonUniqueIndices { index });
    }
    Ok(proof.result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_word(s: &str) -> Word {
        Word::from_hex_field(s).unwrap()
    }

    #[test]
    fn test_work_indices_are_hash_residues() {
        let params = WorkParams::new();
        let hash = hex_word("0xbb43631d5c0a7a7742528d00f299b0e65828e7fa7a189ef13de2778b4ea1851a");
        let indices = WorkIndices::new(&params, &hash);
        assert_eq!(
            indices.values(),
            &[29611, 7757, 38849, 30811, 7228, 56617, 57531, 6196, 31128, 50878]
        );
    }

    #[test]
    fn test_coefficients_are_offset_residues() {
        let params = WorkParams::new();
        let nonce = hex_word("0xe2c4d01980e3d5ffdc12fa62a9041759fd138f7f81c68dd55d76b8b7cb294779");
        let coefficients = Coefficients::new(&params, &nonce);
        assert_eq!(coefficients.values(), &[15433, 39659, 46500, 60950, 45783]);

        let zero = Coefficients::new(&params, &Word::zero());
        assert_eq!(zero.values(), &[1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_word_index_never_reaches_last_entry() {
        let params = WorkParams::new();
        let modulus = params.index_modulus();
        let coefficients = Coefficients([0xfffd, 0xfffb, 0xfff7, 0xfff1, 0xffef]);
        for x in [0u32, 1, 2, 0xfffc, 0xffd0, 12345] {
            assert!(coefficients.word_index(x, modulus) < params.buffer_length() - 1);
        }
    }

    #[test]
    fn test_zero_hash_samples_one_word_repeatedly() {
        // x[i] == 0 for every i, so each index collapses to c0
        let params = WorkParams::new();
        let indices = WorkIndices::new(&params, &Word::zero());
        assert!(indices.values().iter().all(|x| *x == 0));
    }

    #[test]
    fn test_uniqueness_check() {
        assert!(indices_are_unique(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]));
        assert!(!indices_are_unique(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 0]));
        assert!(!indices_are_unique(&[5; SAMPLE_INDICES]));
        assert_eq!(first_repeat(&[9, 8, 7, 6, 6, 4, 3, 2, 1, 9]), Some(6));
    }
}

// Changelog:
// - v1.1.0 (2026-10-17): Added verify_nonce for checking a reported winner.
// - v1.0.0 (2026-10-17): Initial proof-of-work function.
//   - Features: per-job WorkIndices, per-nonce Coefficients, XOR fold over ten
//     buffer words and the index uniqueness check.
