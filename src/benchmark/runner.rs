// Koinos Miner - Free and Open Source Software Statement
//
// This project, koinos-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/runner.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the benchmark execution engine for the Koinos miner. It
// times word buffer generation and a full search over a synthetic job on the
// same worker pool the session uses, then logs the results. Nothing is
// written to stdout.

use crate::Result;
use crate::benchmark::jobs::create_benchmark_job;
use crate::core::params::WorkParams;
use crate::core::table::WordTable;
use crate::miner::search::{DEFAULT_REPORT_THRESHOLD, Search, SearchConfig};
use crate::utils::format::FormatUtils;
use log::info;
use std::time::{Duration, Instant};

const LOG_TARGET: &str = "koinos::miner::benchmark";

/// Configuration for benchmark execution
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub search: SearchConfig,
    pub hash_budget: u64,
}

/// Timings and totals of one benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    /// Nonces evaluated by the workers
    pub total_hashes: u64,
    /// Word buffer generation time
    pub table_duration: Duration,
    /// Search time
    pub duration: Duration,
    /// Average hashrate (H/s)
    pub hashrate: f64,
    /// Below-target samples with repeated indices (always 0 with a zero target)
    pub rejected: u64,
    pub thread_count: usize,
}

/// Main benchmark runner
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
    params: WorkParams,
}

impl BenchmarkRunner {
    pub fn new(threads: usize, hash_budget: u64) -> Self {
        Self {
            config: BenchmarkConfig {
                search: SearchConfig::new(threads, DEFAULT_REPORT_THRESHOLD),
                hash_budget,
            },
            params: WorkParams::new(),
        }
    }

    pub fn run(&self) -> Result<BenchmarkResult> {
        let bench = create_benchmark_job(&mut rand::thread_rng(), self.config.hash_budget);
        info!(target: LOG_TARGET,
            "🧪 Starting benchmark with {} threads",
            self.config.search.threads
        );
        info!(target: LOG_TARGET, "📋 Using benchmark job: {}", bench.description);

        let table_start = Instant::now();
        let table = WordTable::generate(&bench.job.seed, &self.params);
        let table_duration = table_start.elapsed();
        info!(target: LOG_TARGET,
            "🧮 Generated {} buffer words in {}",
            table.len(),
            FormatUtils::format_duration(table_duration)
        );

        let search = Search::new(&self.params, &table, self.config.search);
        let report = search.run(&bench.job, None);

        Ok(BenchmarkResult {
            total_hashes: report.hashes_evaluated,
            table_duration,
            duration: report.elapsed,
            hashrate: report.hashrate(),
            rejected: report.rejected,
            thread_count: self.config.search.threads,
        })
    }
}

impl BenchmarkResult {
    pub fn display(&self) {
        info!(target: LOG_TARGET, "📊 BENCHMARK RESULTS");
        info!(target: LOG_TARGET, "├─ Threads: {}", self.thread_count);
        info!(target: LOG_TARGET, "├─ Buffer Generation: {}", FormatUtils::format_duration(self.table_duration));
        info!(target: LOG_TARGET, "├─ Search Time: {}", FormatUtils::format_duration(self.duration));
        info!(target: LOG_TARGET, "├─ Total Work: {} hashes", FormatUtils::format_number(self.total_hashes));
        info!(target: LOG_TARGET, "├─ Uniqueness Rejections: {}", self.rejected);
        info!(target: LOG_TARGET, "└─ Hashrate: {}", FormatUtils::format_hashrate(self.hashrate));
    }
}


// Changelog:
// - v1.1.0 (2026-10-17): Benchmark drives the production search.
//   - Removed the duration-based share loop, progress reporter and profiler;
//     the run length is now a hash limit and both phases are timed.
// - v1.0.0 (2026-10-17): Initial benchmark runner.
