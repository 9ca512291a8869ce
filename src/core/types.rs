// Koinos Miner - Free and Open Source Software Statement
//
// This project, koinos-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/types.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file defines core data structures for the Koinos miner, located in the
// core subdirectory. It includes the command-line arguments, the job record
// received from the mining manager and the report lines sent back to it.
//
// Tree Location:
// - src/core/types.rs (core data structures)
// - Depends on: clap, chrono, thiserror, word

use crate::core::word::{Word, WordExt, WordParseError};
use chrono::{DateTime, Local};
use clap::Parser;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Command-line arguments for the Koinos miner
#[derive(Parser, Debug, Clone)]
#[command(
    name = "koinos_miner",
    author = "Koinos Mining Team",
    version,
    about = "Koinos proof-of-work worker driven over stdin/stdout",
    long_about = "Koinos Miner reads one job per line from stdin:\n\
                  \n  <seed> <secured_hash> <target> <start_nonce> <thread_iterations> <hash_limit>;\n\n\
                  and searches the nonce space on all worker threads. It writes\n\
                  H:<time> <hashes>; progress lines, then N:<nonce>; when a proof is\n\
                  found or F:1; when the hash limit is exhausted. Diagnostics go to stderr.\n\n\
                  Examples:\n\
                    Worker: koinos_miner --threads 8\n\
                    Benchmark: koinos_miner --benchmark --benchmark-hashes 20000000"
)]
pub struct Args {
    /// Number of search threads per job
    /// 0 = auto-detect (recommended), or specify exact count
    #[arg(
        short,
        long,
        default_value = "0",
        value_name = "COUNT",
        help = "Number of search threads (0 = auto-detect)"
    )]
    pub threads: usize,

    /// Claim steps between hash reports
    /// 1 reports on every second claim step
    #[arg(
        long,
        default_value = "1",
        value_name = "STEPS",
        help = "Hash report threshold in claim steps"
    )]
    pub report_threshold: u32,

    /// Reject malformed jobs instead of running them with zero-filled fields
    #[arg(long, default_value = "false", help = "Answer malformed jobs with F:1; without searching")]
    pub strict_input: bool,

    /// Log level for the stderr logger (error, warn, info, debug, trace)
    #[arg(
        long,
        default_value = "info",
        value_name = "LEVEL",
        value_parser = parse_log_level,
        help = "Log level"
    )]
    pub log_level: log::LevelFilter,

    /// Optional log4rs YAML configuration, replaces the default stderr logger
    #[arg(long, value_name = "PATH", help = "log4rs configuration file")]
    pub log_config: Option<std::path::PathBuf>,

    /// Run a synthetic job and report the hashrate instead of reading stdin
    #[arg(long, default_value = "false", help = "Run performance benchmark (no manager required)")]
    pub benchmark: bool,

    /// Hash budget of the benchmark job
    #[arg(
        long,
        default_value = "10000000",
        value_name = "HASHES",
        help = "Number of hashes the benchmark job searches"
    )]
    pub benchmark_hashes: u64,
}

impl Args {
    /// Validate arguments and return helpful errors
    pub fn validate(&self) -> Result<(), String> {
        if self.benchmark && self.benchmark_hashes == 0 {
            return Err("Benchmark needs a hash limit above zero. Use --benchmark-hashes N".to_string());
        }
        if let Some(ref path) = self.log_config {
            if !path.is_file() {
                return Err(format!("Log configuration file {} does not exist", path.display()));
            }
        }
        Ok(())
    }
}

fn parse_log_level(level: &str) -> Result<log::LevelFilter, String> {
    level
        .parse::<log::LevelFilter>()
        .map_err(|_| format!("unknown log level `{}`", level))
}

/// One search request from the mining manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    /// Seed of the word buffer (recent block hash)
    pub seed: Word,
    /// Hash of the proof's committed inputs
    pub committed_hash: Word,
    /// Results must be strictly below this value
    pub target: Word,
    /// First nonce handed out
    pub start_nonce: Word,
    /// Nonces reserved per claim step
    pub iterations_per_claim: u64,
    /// Claimed hashes after which the search gives up
    pub hash_budget: u64,
}

impl Default for Job {
    fn default() -> Self {
        Self {
            seed: Word::zero(),
            committed_hash: Word::zero(),
            target: Word::zero(),
            start_nonce: Word::zero(),
            iterations_per_claim: 0,
            hash_budget: 0,
        }
    }
}

const JOB_FIELDS: [&str; 6] = [
    "seed",
    "secured_hash",
    "target",
    "start_nonce",
    "thread_iterations",
    "hash_limit",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum JobParseError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("invalid `{field}`: {source}")]
    InvalidWord {
        field: &'static str,
        #[source]
        source: WordParseError,
    },
    #[error("invalid `{field}`: `{value}` is not an unsigned 64-bit count")]
    InvalidCount { field: &'static str, value: String },
    #[error("unexpected trailing input `{0}`")]
    TrailingInput(String),
}

impl Job {
    /// Parse field by field, replacing every bad or missing field with zero.
    /// Returns the job together with every problem found.
    pub fn parse_lenient(record: &str) -> (Job, Vec<JobParseError>) {
        let body = record.trim().trim_end_matches(';');
        let mut tokens = body.split_whitespace();
        let mut errors = Vec::new();

        let mut words = [Word::zero(); 4];
        for (slot, field) in words.iter_mut().zip(JOB_FIELDS.iter().copied()) {
            match tokens.next() {
                Some(token) => match Word::from_hex_field(token) {
                    Ok(w) => *slot = w,
                    Err(source) => errors.push(JobParseError::InvalidWord { field, source }),
                },
                None => errors.push(JobParseError::MissingField(field)),
            }
        }

        let mut counts = [0u64; 2];
        for (slot, field) in counts.iter_mut().zip(JOB_FIELDS[4..].iter().copied()) {
            match tokens.next() {
                Some(token) => match token.parse::<u64>() {
                    Ok(n) => *slot = n,
                    Err(_) => errors.push(JobParseError::InvalidCount {
                        field,
                        value: token.to_string(),
                    }),
                },
                None => errors.push(JobParseError::MissingField(field)),
            }
        }

        let rest: Vec<&str> = tokens.collect();
        if !rest.is_empty() {
            errors.push(JobParseError::TrailingInput(rest.join(" ")));
        }

        let job = Job {
            seed: words[0],
            committed_hash: words[1],
            target: words[2],
            start_nonce: words[3],
            iterations_per_claim: counts[0],
            hash_budget: counts[1],
        };
        (job, errors)
    }
}

impl FromStr for Job {
    type Err = JobParseError;

    fn from_str(record: &str) -> Result<Self, Self::Err> {
        let (job, mut errors) = Job::parse_lenient(record);
        if errors.is_empty() {
            Ok(job)
        } else {
            Err(errors.remove(0))
        }
    }
}

/// A line written back to the mining manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinerReport {
    /// Cumulative claimed hashes for the running job
    Progress { timestamp: DateTime<Local>, hashes: u64 },
    /// Winning nonce
    Found { nonce: Word },
    /// Hash budget used up without a proof
    Exhausted,
}

impl MinerReport {
    pub fn progress(hashes: u64) -> Self {
        MinerReport::Progress {
            timestamp: Local::now(),
            hashes,
        }
    }
}

impl fmt::Display for MinerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinerReport::Progress { timestamp, hashes } => {
                write!(f, "H:{} {};", timestamp.format("%Y-%m-%dT%H:%M:%S"), hashes)
            }
            MinerReport::Found { nonce } => write!(f, "N:{};", nonce),
            MinerReport::Exhausted => write!(f, "F:1;"),
        }
    }
}


// Changelog:
// - v1.1.0 (2026-10-17): Lenient job parsing.
//   - parse_lenient keeps every good field and reports each bad one, so a
//     malformed job can still be answered.
// - v1.0.0 (2026-10-17): Initial types for the stdin/stdout worker protocol.
