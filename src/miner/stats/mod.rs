// Koinos Miner - Free and Open Source Software Statement
//
// This project, koinos-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/stats/mod.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the module declaration for the statistics tracking of the
// Koinos miner, located in the stats subdirectory of the miner module.
//
// Tree Location:
// - src/miner/stats/mod.rs (stats module entry point)
// - Submodules: miner_stats, worker_stats

pub mod miner_stats;
pub mod worker_stats;

// Re-export key types for convenience
pub use miner_stats::{MinerStats, SearchStats};
pub use worker_stats::WorkerStats;

// Changelog:
// - v1.1.0 (2026-10-17): Added SearchStats for per-job totals.
// - v1.0.0 (2026-10-17): Worker and session statistics.
