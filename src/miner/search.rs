// Koinos Miner - Free and Open Source Software Statement
//
// This project, koinos-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/search.rs
// Version: 1.2.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file contains the parallel nonce search for the Koinos miner, located
// in the miner module. Worker threads claim contiguous nonce blocks from a
// shared cursor, evaluate every nonce in the block and offer candidate winners
// for arbitration. Claims and arbitration share one lock; the stop flag is
// mirrored in an atomic so workers can poll it per nonce without locking.
//
// Tree Location:
// - src/miner/search.rs (search orchestrator and worker loop)
// - Depends on: core::work, miner::stats, crossbeam, num_cpus

use crate::core::params::WorkParams;
use crate::core::table::WordTable;
use crate::core::types::{Job, MinerReport};
use crate::core::work::{WorkIndices, evaluate_with_indices};
use crate::core::word::{Word, WordExt};
use crate::miner::stats::{SearchStats, WorkerStats};
use crate::utils::format::FormatUtils;
use crossbeam::channel::Sender;
use log::{debug, info, trace};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

const LOG_TARGET: &str = "koinos::miner::search";

/// Default number of claim steps skipped between progress reports
pub const DEFAULT_REPORT_THRESHOLD: u32 = 1;

/// Worker pool settings shared by every job of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub threads: usize,
    pub report_threshold: u32,
}

impl SearchConfig {
    /// `threads == 0` selects one worker per logical CPU
    pub fn new(threads: usize, report_threshold: u32) -> Self {
        let threads = if threads == 0 { num_cpus::get().max(1) } else { threads };
        Self {
            threads,
            report_threshold,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(0, DEFAULT_REPORT_THRESHOLD)
    }
}

/// A nonce whose result beat the target with distinct samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub nonce: Word,
    pub result: Word,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Found { nonce: Word, result: Word },
    Exhausted,
}

impl SearchOutcome {
    /// Terminal line for the mining manager
    pub fn report(&self) -> MinerReport {
        match self {
            SearchOutcome::Found { nonce, .. } => MinerReport::Found { nonce: *nonce },
            SearchOutcome::Exhausted => MinerReport::Exhausted,
        }
    }
}

/// Summary of one finished search
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    /// Hashes reserved by claim steps (budget accounting)
    pub hashes_claimed: u64,
    /// Nonces actually evaluated, less than claimed once a winner stops the workers
    pub hashes_evaluated: u64,
    /// Below-target nonces dropped for repeating a buffer index
    pub rejected: u64,
    pub elapsed: Duration,
}

impl SearchReport {
    pub fn hashrate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.hashes_evaluated as f64 / secs
        } else {
            0.0
        }
    }
}

/// Everything guarded by the search lock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub cursor: Word,
    pub hashes: u64,
    pub report_counter: u32,
    pub best: Option<Candidate>,
    pub stopped: bool,
}

impl SearchState {
    pub fn new(start_nonce: Word) -> Self {
        Self {
            cursor: start_nonce,
            hashes: 0,
            report_counter: 0,
            best: None,
            stopped: false,
        }
    }

    /// Reserve the next block of `iterations` nonces.
    ///
    /// Returns the block start and, when the report cadence fires, the hash
    /// count to report (taken before this claim is added).
    pub fn claim(&mut self, iterations: u64, hash_budget: u64, report_threshold: u32) -> Option<(Word, Option<u64>)> {
        if self.stopped || self.hashes >= hash_budget {
            return None;
        }

        let start = self.cursor;
        self.cursor = start.wrapping_add_small(iterations);

        let progress = if self.report_counter >= report_threshold {
            self.report_counter = 0;
            Some(self.hashes)
        } else {
            self.report_counter += 1;
            None
        };

        self.hashes = self.hashes.saturating_add(iterations);
        Some((start, progress))
    }

    /// Offer a candidate winner. The first one stops the search; later ones
    /// replace it only with a strictly smaller result.
    pub fn offer(&mut self, candidate: Candidate) -> bool {
        let accepted = match self.best {
            None => true,
            Some(best) => candidate.result < best.result,
        };
        if accepted {
            self.best = Some(candidate);
        }
        self.stopped = true;
        accepted
    }

    pub fn outcome(&self) -> SearchOutcome {
        match self.best {
            Some(Candidate { nonce, result }) => SearchOutcome::Found { nonce, result },
            None => SearchOutcome::Exhausted,
        }
    }
}

/// Shared view handed to every worker of one job
struct SharedSearch<'a> {
    params: &'a WorkParams,
    table: &'a WordTable,
    job: &'a Job,
    indices: WorkIndices,
    iterations: u64,
    report_threshold: u32,
    state: Mutex<SearchState>,
    stop: AtomicBool,
    reports: Option<&'a Sender<MinerReport>>,
}

impl SharedSearch<'_> {
    fn lock(&self) -> MutexGuard<'_, SearchState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn claim(&self) -> Option<Word> {
        let mut state = self.lock();
        let (start, progress) = state.claim(self.iterations, self.job.hash_budget, self.report_threshold)?;
        if let (Some(hashes), Some(reports)) = (progress, self.reports) {
            // Sent under the lock so reports leave in claim order
            let _ = reports.send(MinerReport::progress(hashes));
        }
        Some(start)
    }

    fn arbitrate(&self, candidate: Candidate) {
        let mut state = self.lock();
        if state.offer(candidate) {
            debug!(target: LOG_TARGET, "New best nonce {} with result {}", candidate.nonce, candidate.result.to_hex_field());
        }
        self.stop.store(true, Ordering::Release);
    }

    fn run_worker(&self, stats: &WorkerStats) {
        trace!(target: LOG_TARGET, "Worker {} started", stats.worker_id());

        while let Some(start) = self.claim() {
            stats.record_claim();
            let mut nonce = start;
            let mut evaluated = 0u64;

            for _ in 0..self.iterations {
                if self.stop.load(Ordering::Acquire) {
                    break;
                }

                let proof = evaluate_with_indices(self.params, &self.indices, &self.job.committed_hash, &nonce, self.table);
                evaluated += 1;

                if proof.result < self.job.target {
                    if proof.is_unique() {
                        stats.record_candidate();
                        self.arbitrate(Candidate {
                            nonce,
                            result: proof.result,
                        });
                    } else {
                        stats.record_rejection();
                        debug!(target: LOG_TARGET,
                            "Worker {} dropped nonce {}: buffer indices repeat {:?}",
                            stats.worker_id(),
                            nonce,
                            proof.indices
                        );
                    }
                }

                nonce = nonce.wrapping_add_small(1);
            }

            stats.record_hashes(evaluated);
        }

        trace!(target: LOG_TARGET, "Worker {} finished after {} hashes", stats.worker_id(), stats.hashes());
    }
}

/// Parallel nonce search over one job's word buffer
pub struct Search<'a> {
    params: &'a WorkParams,
    table: &'a WordTable,
    config: SearchConfig,
}

impl<'a> Search<'a> {
    pub fn new(params: &'a WorkParams, table: &'a WordTable, config: SearchConfig) -> Self {
        Self { params, table, config }
    }

    /// Search `job` until a winner is found or the hash budget is claimed.
    /// Progress lines go to `reports` when given; the terminal outcome is
    /// returned and never sent.
    pub fn run(&self, job: &Job, reports: Option<&Sender<MinerReport>>) -> SearchReport {
        let threads = self.config.threads.max(1);
        let shared = SharedSearch {
            params: self.params,
            table: self.table,
            job,
            indices: WorkIndices::new(self.params, &job.committed_hash),
            iterations: job.iterations_per_claim.max(1),
            report_threshold: self.config.report_threshold,
            state: Mutex::new(SearchState::new(job.start_nonce)),
            stop: AtomicBool::new(false),
            reports,
        };
        let stats = SearchStats::new(threads);

        debug!(target: LOG_TARGET,
            "Searching from nonce {} with {} workers, {} nonces per claim, budget {}",
            job.start_nonce,
            threads,
            shared.iterations,
            job.hash_budget
        );

        std::thread::scope(|scope| {
            for worker in &stats.workers {
                let shared = &shared;
                scope.spawn(move || shared.run_worker(worker));
            }
        });

        let state = shared.lock();
        let report = SearchReport {
            outcome: state.outcome(),
            hashes_claimed: state.hashes,
            hashes_evaluated: stats.total_hashes(),
            rejected: stats.total_rejections(),
            elapsed: stats.elapsed(),
        };

        match report.outcome {
            SearchOutcome::Found { nonce, .. } => info!(target: LOG_TARGET,
                "💎 Found nonce {} after {} hashes in {:.2?}",
                nonce,
                report.hashes_evaluated,
                report.elapsed
            ),
            SearchOutcome::Exhausted => info!(target: LOG_TARGET,
                "⏹️ Hash limit reached after {} hashes in {:.2?}",
                report.hashes_evaluated,
                report.elapsed
            ),
        }
        debug!(target: LOG_TARGET,
            "{} claims, {} candidate winners, {}",
            stats.total_claims(),
            stats.total_candidates(),
            FormatUtils::format_hashrate(stats.hashrate())
        );
        report
    }
}


// Changelog:
// - v1.2.1 (2026-10-17): Claim and candidate counts in the search debug log.
// - v1.2.0 (2026-10-17): Best-of arbitration.
//   - A later winner replaces the recorded one only with a strictly smaller
//     result; ties keep the first.
// - v1.1.0 (2026-10-17): Claim-step progress reports on the report channel.
// - v1.0.0 (2026-10-17): Scoped worker pool with shared cursor and hash limit.
