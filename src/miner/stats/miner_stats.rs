// Koinos Miner - Free and Open Source Software Statement
//
// This project, koinos-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/stats/miner_stats.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements job-wide and session-wide statistics for the Koinos
// miner, located in the stats subdirectory of the miner module. SearchStats
// aggregates the workers of one job; MinerStats accumulates across jobs.
//
// Tree Location:
// - src/miner/stats/miner_stats.rs (job and session statistics logic)
// - Depends on: std, worker_stats, utils::format

use super::worker_stats::WorkerStats;
use crate::utils::format::FormatUtils;
use log::info;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

const LOG_TARGET: &str = "koinos::miner::stats";

/// Counters for a single job's search
#[derive(Debug)]
pub struct SearchStats {
    start_time: Instant,
    pub workers: Vec<WorkerStats>,
}

impl SearchStats {
    pub fn new(num_workers: usize) -> Self {
        Self {
            start_time: Instant::now(),
            workers: (0..num_workers).map(WorkerStats::new).collect(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn total_claims(&self) -> u64 {
        self.workers.iter().map(|w| w.claims()).sum()
    }

    pub fn total_hashes(&self) -> u64 {
        self.workers.iter().map(|w| w.hashes()).sum()
    }

    pub fn total_rejections(&self) -> u64 {
        self.workers.iter().map(|w| w.rejections()).sum()
    }

    pub fn total_candidates(&self) -> u64 {
        self.workers.iter().map(|w| w.candidates()).sum()
    }

    pub fn hashrate(&self) -> f64 {
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.total_hashes() as f64 / elapsed
        } else {
            0.0
        }
    }
}

/// Totals across every job handled by this process
pub struct MinerStats {
    pub jobs_completed: AtomicU64,
    pub proofs_found: AtomicU64,
    pub jobs_exhausted: AtomicU64,
    pub malformed_jobs: AtomicU64,
    pub hashes_computed: AtomicU64,
    pub uniqueness_rejections: AtomicU64,
    start_time: Instant,
}

impl MinerStats {
    pub fn new() -> Self {
        Self {
            jobs_completed: AtomicU64::new(0),
            proofs_found: AtomicU64::new(0),
            jobs_exhausted: AtomicU64::new(0),
            malformed_jobs: AtomicU64::new(0),
            hashes_computed: AtomicU64::new(0),
            uniqueness_rejections: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn record_malformed(&self) {
        self.malformed_jobs.fetch_add(1, Ordering::Relaxed);
    }

    /// Fold a finished job into the session totals
    pub fn record_job(&self, found: bool, hashes: u64, rejections: u64) {
        self.jobs_completed.fetch_add(1, Ordering::Relaxed);
        if found {
            self.proofs_found.fetch_add(1, Ordering::Relaxed);
        } else {
            self.jobs_exhausted.fetch_add(1, Ordering::Relaxed);
        }
        self.hashes_computed.fetch_add(hashes, Ordering::Relaxed);
        self.uniqueness_rejections.fetch_add(rejections, Ordering::Relaxed);
    }

    pub fn get_total_hashrate(&self) -> f64 {
        let total_hashes = self.hashes_computed.load(Ordering::Relaxed);
        let elapsed = self.start_time.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            total_hashes as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Log the running session totals
    pub fn display_summary(&self) {
        let jobs = self.jobs_completed.load(Ordering::Relaxed);
        let found = self.proofs_found.load(Ordering::Relaxed);
        let exhausted = self.jobs_exhausted.load(Ordering::Relaxed);
        let malformed = self.malformed_jobs.load(Ordering::Relaxed);
        let hashes = self.hashes_computed.load(Ordering::Relaxed);
        let rejections = self.uniqueness_rejections.load(Ordering::Relaxed);

        info!(target: LOG_TARGET, "📊 SESSION SUMMARY");
        info!(target: LOG_TARGET, "├─ Jobs: {} ({} found, {} exhausted, {} malformed)", jobs, found, exhausted, malformed);
        info!(target: LOG_TARGET, "├─ Total Work: {} hashes", FormatUtils::format_number(hashes));
        info!(target: LOG_TARGET, "├─ Uniqueness Rejections: {}", rejections);
        info!(target: LOG_TARGET, "├─ Session Avg: {}", FormatUtils::format_hashrate(self.get_total_hashrate()));
        info!(target: LOG_TARGET, "└─ Session Time: {}", FormatUtils::format_duration(self.start_time.elapsed()));
    }
}

impl Default for MinerStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_stats_totals() {
        let stats = SearchStats::new(3);
        stats.workers[0].record_hashes(100);
        stats.workers[2].record_hashes(50);
        stats.workers[1].record_rejection();
        stats.workers[2].record_candidate();
        stats.workers[0].record_claim();
        stats.workers[1].record_claim();

        assert_eq!(stats.total_hashes(), 150);
        assert_eq!(stats.total_rejections(), 1);
        assert_eq!(stats.total_candidates(), 1);
        assert_eq!(stats.total_claims(), 2);
        assert_eq!(stats.workers[2].worker_id(), 2);
    }

    #[test]
    fn test_miner_stats_record_job() {
        let stats = MinerStats::new();
        stats.record_job(true, 1000, 2);
        stats.record_job(false, 500, 0);
        stats.record_malformed();

        assert_eq!(stats.jobs_completed.load(Ordering::Relaxed), 2);
        assert_eq!(stats.proofs_found.load(Ordering::Relaxed), 1);
        assert_eq!(stats.jobs_exhausted.load(Ordering::Relaxed), 1);
        assert_eq!(stats.malformed_jobs.load(Ordering::Relaxed), 1);
        assert_eq!(stats.hashes_computed.load(Ordering::Relaxed), 1500);
        assert_eq!(stats.uniqueness_rejections.load(Ordering::Relaxed), 2);
    }
}

// Changelog:
// - v1.1.0 (2026-10-17): Split into per-job SearchStats and session MinerStats.
//   - Removed share tracking and the pool dashboard; the worker reports proofs
//     to its manager instead of a pool.
// - v1.0.0 (2026-10-17): Initial statistics for the worker.
