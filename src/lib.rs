// Koinos Miner - Free and Open Source Software Statement
//
// This project, koinos-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file serves as the main library entry point for the Koinos miner,
// located at the root of the source tree. It exports all public modules
// and types that the binary and integration tests use.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: core, miner, benchmark, utils

pub mod benchmark;
pub mod core;
pub mod miner;
pub mod utils;

// Re-export commonly used types at the crate root for convenience
pub use crate::benchmark::runner::BenchmarkRunner;
pub use crate::core::{Job, MinerReport, Word, WordTable, WorkParams};
pub use crate::miner::{Search, SearchConfig, SearchOutcome, Session};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

// Changelog:
// - v1.1.0 (2026-10-17): Koinos worker library.
//   - Dropped pool, help and tui modules; the miner is driven by its manager
//     over stdin/stdout.
// - v1.0.0 (2026-10-17): Initial library root with core, miner, utils and
//   benchmark modules.
