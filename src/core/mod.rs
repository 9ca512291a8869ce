// Koinos Miner - Free and Open Source Software Statement
//
// This project, koinos-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/mod.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the module declaration for the core functionality of the
// Koinos miner: the 256-bit word type, the Keccak primitive, the word buffer
// and the proof-of-work function.

pub mod keccak;
pub mod params;
pub mod table;
pub mod types;
pub mod word;
pub mod work;

// Re-export the most commonly used items
pub use keccak::{keccak256, keccak_words};
pub use params::WorkParams;
pub use table::WordTable;
pub use types::{Args, Job, JobParseError, MinerReport};
pub use word::{Word, WordExt, WordParseError};
pub use work::{Proof, ProofError, WorkIndices, evaluate, verify_nonce};

// Changelog:
// - v1.1.0 (2026-10-17): Added verify_nonce to the re-exports.
// - v1.0.0 (2026-10-17): Word type, Keccak primitive, word buffer and proof
//   function.
