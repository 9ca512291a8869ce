// Koinos Miner - Free and Open Source Software Statement
//
// This project, koinos-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/mod.rs
// Version: 1.2.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the module declaration for the miner functionality of the
// Koinos miner. It declares submodules and re-exports key types for use
// throughout the project.
//
// Tree Location:
// - src/miner/mod.rs (miner module entry point)
// - Submodules: search, session, stats

pub mod search;
pub mod session;
pub mod stats;

// Re-export key types for convenience
pub use search::{Candidate, Search, SearchConfig, SearchOutcome, SearchReport, SearchState};
pub use session::{JobReader, Session};
pub use stats::{MinerStats, SearchStats, WorkerStats};

// Changelog:
// - v1.2.0 (2026-10-17): Replaced the pool-driven CPU/GPU miners with the
//   scoped search and the stdin/stdout session loop.
