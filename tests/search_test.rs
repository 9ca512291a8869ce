// Koinos Miner - Free and Open Source Software Statement
//
// This project, koinos-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/search_test.rs
// Version: 1.0.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file contains tests for the parallel nonce search, located in the tests
// directory. It checks that the answer does not depend on the worker count,
// that the hash limit and uniqueness rule hold, and that progress reports
// follow the claim cadence.
//
// Tree Location:
// - tests/search_test.rs (search orchestrator tests)
// - Depends on: koinos-miner, crossbeam

#[cfg(test)]
mod tests {
    use koinos_miner::core::params::WorkParams;
    use koinos_miner::core::table::WordTable;
    use koinos_miner::core::types::{Job, MinerReport};
    use koinos_miner::core::word::{Word, WordExt};
    use koinos_miner::core::work::evaluate;
    use koinos_miner::miner::search::{Search, SearchConfig, SearchOutcome};

    const SEED: &str = "0xe2c4d01980e3d5ffdc12fa62a904175929058ae633a7dc383c781e15eb0c7001";
    const SECURED_HASH: &str = "0xbb43631d5c0a7a7742528d00f299b0e65828e7fa7a189ef13de2778b4ea1851a";
    const TARGET: &str = "0x00000000000003ffffffffffffffffffffffffffffffffffffffffffffffffff";
    const WINNING_NONCE: &str = "0xe2c4d01980e3d5ffdc12fa62a9041759fd138f7f81c68dd55d76b8b7cb294779";
    const WINNING_RESULT: &str = "0x000000000000021fd0ca06a42469968b8664b69e64bf5ef6c2d346bb3467ed70";

    fn word(s: &str) -> Word {
        Word::from_hex_field(s).unwrap()
    }

    fn reference_job(iterations: u64) -> Job {
        Job {
            seed: word(SEED),
            committed_hash: word(SECURED_HASH),
            target: word(TARGET),
            // 20 nonces before the only winner in range
            start_nonce: word("0xe2c4d01980e3d5ffdc12fa62a9041759fd138f7f81c68dd55d76b8b7cb294765"),
            iterations_per_claim: iterations,
            hash_budget: 60,
        }
    }

    #[test]
    fn test_answer_is_independent_of_worker_count() {
        let params = WorkParams::new();
        let table = WordTable::generate(&word(SEED), &params);

        for (threads, iterations) in [(1, 1), (2, 1), (8, 1), (4, 7), (3, 60)] {
            let search = Search::new(&params, &table, SearchConfig::new(threads, 1));
            let report = search.run(&reference_job(iterations), None);
            assert_eq!(
                report.outcome,
                SearchOutcome::Found {
                    nonce: word(WINNING_NONCE),
                    result: word(WINNING_RESULT)
                },
                "threads={} iterations={}",
                threads,
                iterations
            );
            assert!(report.hashes_claimed >= 21);
        }
    }

    #[test]
    fn test_zero_target_exhausts_budget() {
        let params = WorkParams::new();
        let table = WordTable::generate(&Word::from(9u64), &params);
        let job = Job {
            seed: Word::from(9u64),
            committed_hash: Word::from(12345u64),
            target: Word::zero(),
            start_nonce: Word::zero(),
            iterations_per_claim: 100,
            hash_budget: 1000,
        };

        for threads in [1, 4] {
            let report = Search::new(&params, &table, SearchConfig::new(threads, 1)).run(&job, None);
            assert_eq!(report.outcome, SearchOutcome::Exhausted);
            assert_eq!(report.hashes_claimed, 1000);
            assert_eq!(report.hashes_evaluated, 1000);
            assert_eq!(report.rejected, 0);
        }
    }

    #[test]
    fn test_budget_overshoot_is_bounded() {
        let params = WorkParams::new();
        let table = WordTable::generate(&Word::from(9u64), &params);
        let job = Job {
            seed: Word::from(9u64),
            committed_hash: Word::from(12345u64),
            target: Word::zero(),
            start_nonce: Word::zero(),
            iterations_per_claim: 300,
            hash_budget: 1000,
        };

        let threads = 4;
        let report = Search::new(&params, &table, SearchConfig::new(threads, 1)).run(&job, None);
        assert_eq!(report.outcome, SearchOutcome::Exhausted);
        assert!(report.hashes_claimed >= 1000);
        assert!(report.hashes_claimed <= 1000 + (threads as u64 - 1) * 300);
    }

    #[test]
    fn test_repeated_indices_never_win() {
        // A zero committed hash samples one word ten times for every nonce
        let params = WorkParams::new();
        let table = WordTable::generate(&Word::one(), &params);
        let job = Job {
            seed: Word::one(),
            committed_hash: Word::zero(),
            target: Word::max_value(),
            start_nonce: Word::zero(),
            iterations_per_claim: 1000,
            hash_budget: 1000,
        };

        let report = Search::new(&params, &table, SearchConfig::new(2, 1)).run(&job, None);
        assert_eq!(report.outcome, SearchOutcome::Exhausted);
        assert_eq!(report.rejected, report.hashes_evaluated);
        assert!(report.hashes_evaluated >= 1000);
    }

    #[test]
    fn test_rejected_nonce_is_skipped() {
        let params = WorkParams::new();
        let table = WordTable::generate(&word(SEED), &params);
        let mut job = Job {
            seed: word(SEED),
            committed_hash: word(SECURED_HASH),
            target: Word::max_value(),
            start_nonce: Word::from(1284u64),
            iterations_per_claim: 1,
            hash_budget: 2,
        };
        let search = Search::new(&params, &table, SearchConfig::new(1, 1));

        let report = search.run(&job, None);
        assert!(matches!(report.outcome, SearchOutcome::Found { nonce, .. } if nonce == Word::from(1285u64)));
        assert_eq!(report.rejected, 1);

        job.hash_budget = 1;
        let report = search.run(&job, None);
        assert_eq!(report.outcome, SearchOutcome::Exhausted);
        assert_eq!(report.rejected, 1);
    }

    #[test]
    fn test_max_target_accepts_first_nonce() {
        let params = WorkParams::new();
        let table = WordTable::generate(&word(SEED), &params);
        let job = Job {
            seed: word(SEED),
            committed_hash: word(SECURED_HASH),
            target: Word::max_value(),
            start_nonce: Word::zero(),
            iterations_per_claim: 1000,
            hash_budget: 1000,
        };

        let report = Search::new(&params, &table, SearchConfig::new(1, 1)).run(&job, None);
        assert!(matches!(report.outcome, SearchOutcome::Found { nonce, .. } if nonce.is_zero()));
        assert_eq!(report.hashes_evaluated, 1);
        assert_eq!(report.outcome.report().to_string(), "N:0;");
    }

    #[test]
    fn test_first_finder_stops_its_block() {
        // Nonces 0 and 5 both beat this target and nonce 5 has the smaller
        // result. Arbitration only compares winners offered before the stop
        // flag is seen, so a single worker reports the first one it meets.
        let params = WorkParams::new();
        let table = WordTable::generate(&word(SEED), &params);
        let hash = word(SECURED_HASH);
        let target = word("0x0f00000000000000000000000000000000000000000000000000000000000000");

        let first = evaluate(&params, &hash, &Word::zero(), &table);
        let second = evaluate(&params, &hash, &Word::from(5u64), &table);
        assert!(first.is_unique() && first.result < target);
        assert!(second.is_unique() && second.result < first.result);
        for n in 1u64..5 {
            assert!(evaluate(&params, &hash, &Word::from(n), &table).result >= target);
        }

        let mut job = Job {
            seed: word(SEED),
            committed_hash: hash,
            target,
            start_nonce: Word::zero(),
            iterations_per_claim: 10,
            hash_budget: 10,
        };
        let search = Search::new(&params, &table, SearchConfig::new(1, 1));

        let report = search.run(&job, None);
        assert_eq!(
            report.outcome,
            SearchOutcome::Found {
                nonce: Word::zero(),
                result: first.result
            }
        );
        assert_eq!(report.hashes_evaluated, 1);

        job.start_nonce = Word::one();
        let report = search.run(&job, None);
        assert_eq!(
            report.outcome,
            SearchOutcome::Found {
                nonce: Word::from(5u64),
                result: second.result
            }
        );
        assert_eq!(report.hashes_evaluated, 5);
    }

    #[test]
    fn test_progress_follows_claim_cadence() {
        let params = WorkParams::new();
        let table = WordTable::generate(&Word::from(3u64), &params);
        let job = Job {
            seed: Word::from(3u64),
            committed_hash: Word::from(777u64),
            target: Word::zero(),
            start_nonce: Word::zero(),
            iterations_per_claim: 10,
            hash_budget: 100,
        };

        let (tx, rx) = crossbeam::channel::unbounded();
        let report = Search::new(&params, &table, SearchConfig::new(4, 1)).run(&job, Some(&tx));
        drop(tx);
        assert_eq!(report.outcome, SearchOutcome::Exhausted);

        let hashes: Vec<u64> = rx
            .iter()
            .map(|line| match line {
                MinerReport::Progress { hashes, .. } => hashes,
                other => panic!("unexpected report {:?}", other),
            })
            .collect();
        assert_eq!(hashes, vec![10, 30, 50, 70, 90]);
    }
}

// Changelog:
// - v1.0.1 (2026-10-17): Two winners inside one claimed block.
// - v1.0.0 (2026-10-17): Search determinism, hash limit, uniqueness and
//   progress cadence tests.
