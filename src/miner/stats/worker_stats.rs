// Koinos Miner - Free and Open Source Software Statement
//
// This project, koinos-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/stats/worker_stats.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements per-worker statistics for one search, located in the
// stats subdirectory of the miner module. Counters are written by a single
// worker thread and read by the job summary once the worker has joined.
//
// Tree Location:
// - src/miner/stats/worker_stats.rs (per-worker statistics logic)
// - Depends on: std

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct WorkerStats {
    worker_id: usize,
    pub claims: AtomicU64,
    pub hashes_evaluated: AtomicU64,
    pub uniqueness_rejections: AtomicU64,
    pub candidates_found: AtomicU64,
}

impl WorkerStats {
    /// Create a new WorkerStats instance for a specific worker
    pub fn new(worker_id: usize) -> Self {
        Self {
            worker_id,
            ..Default::default()
        }
    }

    pub fn worker_id(&self) -> usize {
        self.worker_id
    }

    pub fn record_claim(&self) {
        self.claims.fetch_add(1, Ordering::Relaxed);
    }

    /// Add the hashes evaluated since the last flush
    pub fn record_hashes(&self, hashes: u64) {
        self.hashes_evaluated.fetch_add(hashes, Ordering::Relaxed);
    }

    pub fn record_rejection(&self) {
        self.uniqueness_rejections.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_candidate(&self) {
        self.candidates_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn claims(&self) -> u64 {
        self.claims.load(Ordering::Relaxed)
    }

    pub fn hashes(&self) -> u64 {
        self.hashes_evaluated.load(Ordering::Relaxed)
    }

    pub fn rejections(&self) -> u64 {
        self.uniqueness_rejections.load(Ordering::Relaxed)
    }

    pub fn candidates(&self) -> u64 {
        self.candidates_found.load(Ordering::Relaxed)
    }
}

// Changelog:
// - v1.0.0 (2026-10-17): Per-worker counters for claims, evaluated hashes,
//   uniqueness rejections and candidate winners.
