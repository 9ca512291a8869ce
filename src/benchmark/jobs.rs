// Koinos Miner - Free and Open Source Software Statement
//
// This project, koinos-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/jobs.rs
// Version: 1.1.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file builds synthetic jobs for benchmarking the Koinos miner without a
// mining manager. Benchmark jobs use a zero target so no nonce can win and the
// search always runs to its hash limit.
//
// Tree Location:
// - src/benchmark/jobs.rs (synthetic benchmark jobs)
// - Depends on: core::types, rand

use crate::core::types::Job;
use crate::core::word::{U256, Word};
use rand::Rng;

/// Nonces claimed per step by benchmark jobs
pub const BENCHMARK_ITERATIONS: u64 = 600_000;

/// A job plus a description for the benchmark log
#[derive(Debug, Clone)]
pub struct BenchmarkJob {
    pub description: String,
    pub job: Job,
}

fn random_word<R: Rng>(rng: &mut R) -> Word {
    U256([rng.r#gen(), rng.r#gen(), rng.r#gen(), rng.r#gen()])
}

/// Random seed and committed hash; the target can never be met
pub fn create_benchmark_job<R: Rng>(rng: &mut R, hash_budget: u64) -> BenchmarkJob {
    let job = Job {
        seed: random_word(rng),
        committed_hash: random_word(rng),
        target: Word::zero(),
        start_nonce: random_word(rng),
        iterations_per_claim: BENCHMARK_ITERATIONS.min(hash_budget.max(1)),
        hash_budget,
    };
    BenchmarkJob {
        description: format!("Unreachable target, {} hash limit", hash_budget),
        job,
    }
}


// Changelog:
// - v1.1.1 (2026-10-17): Random words are built through U256.
// - v1.1.0 (2026-10-17): Replaced the static share-difficulty job table with a
//   random unwinnable job sized by the hash limit.
// - v1.0.0 (2026-10-17): Initial benchmark job creation.
