// Koinos Miner - Free and Open Source Software Statement
//
// This project, koinos-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/mod.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file declares the benchmark module for measuring buffer generation and
// search throughput of the Koinos miner without a mining manager.
//
// Tree Location:
// - src/benchmark/mod.rs (benchmark module entry point)
// - Submodules: jobs, runner

pub mod jobs;
pub mod runner;

pub use jobs::{BenchmarkJob, create_benchmark_job};
pub use runner::{BenchmarkConfig, BenchmarkResult, BenchmarkRunner};

// Changelog:
// - v1.0.0 (2026-10-17): Benchmark module with synthetic jobs and runner.
