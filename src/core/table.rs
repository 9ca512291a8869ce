// Koinos Miner - Free and Open Source Software Statement
//
// This project, koinos-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/table.rs
// Version: 1.0.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file generates the per-job word buffer, located in the core
// subdirectory. Every entry is w[i] = keccak256(seed, i), so any party holding
// the seed can rebuild the buffer; nothing is persisted between jobs.
//
// Tree Location:
// - src/core/table.rs (word buffer generation)
// - Depends on: keccak, params, rayon

use crate::core::keccak::keccak_words;
use crate::core::params::WorkParams;
use crate::core::word::{Word, WordExt};
use log::debug;
use rayon::prelude::*;
use std::ops::Index;
use std::time::Instant;

const LOG_TARGET: &str = "koinos::miner::table";

/// Seed-derived lookup buffer. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordTable {
    words: Vec<Word>,
}

impl WordTable {
    /// Procedurally generate the buffer for a seed
    pub fn generate(seed: &Word, params: &WorkParams) -> Self {
        let start = Instant::now();
        let mut words = vec![Word::zero(); params.buffer_length()];

        words.par_iter_mut().enumerate().for_each(|(i, word)| {
            *word = keccak_words(seed, &Word::from(i as u64));
        });

        debug!(target: LOG_TARGET,
            "Generated {} words for seed {} in {:.2?}",
            words.len(),
            seed.to_hex_field(),
            start.elapsed()
        );
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Index<usize> for WordTable {
    type Output = Word;

    #[inline]
    fn index(&self, index: usize) -> &Word {
        &self.words[index]
    }
}


// Changelog:
// - v1.0.1 (2026-10-17): Seed logged as a padded hex field.
// - v1.0.0 (2026-10-17): Parallel Keccak word buffer generation.
