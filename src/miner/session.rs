// Koinos Miner - Free and Open Source Software Statement
//
// This project, koinos-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/session.rs
// Version: 1.2.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file contains the job session loop for the Koinos miner, located in the
// miner module. It reads `;`-terminated job records from the mining manager,
// rebuilds the word buffer for each job, runs the search and writes progress
// and terminal lines back. The loop ends only when the input stream does.
//
// Tree Location:
// - src/miner/session.rs (job framing and session loop)
// - Depends on: core, miner::search, miner::stats, crossbeam

use crate::core::params::WorkParams;
use crate::core::table::WordTable;
use crate::core::types::{Job, MinerReport};
use crate::core::word::WordExt;
use crate::core::work::verify_nonce;
use crate::miner::search::{Search, SearchConfig, SearchOutcome, SearchReport};
use crate::miner::stats::MinerStats;
use crate::utils::format::FormatUtils;
use log::{debug, error, info, warn};
use std::borrow::Cow;
use std::io::{self, BufRead, Read, Write};
use std::time::Instant;

const LOG_TARGET: &str = "koinos::miner::session";

/// Record terminator of the job protocol
pub const RECORD_DELIMITER: char = ';';

/// Largest unterminated record kept while waiting for its `;`
pub const MAX_RECORD_BYTES: usize = 1024;

/// Splits a byte stream into `;`-terminated job records.
///
/// A record may span several lines; its fields are rejoined with single
/// spaces. Several records on one line are yielded one at a time. Bytes that
/// are not UTF-8 are replaced, so the parser sees them as a bad field.
pub struct JobReader<R> {
    input: R,
    pending: String,
    chunk: Vec<u8>,
}

impl<R: BufRead> JobReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: String::new(),
            chunk: Vec::new(),
        }
    }

    fn take_record(&mut self) -> Option<String> {
        let end = self.pending.find(RECORD_DELIMITER)?;
        let record = self.pending[..=end].split_whitespace().collect::<Vec<_>>().join(" ");
        self.pending = self.pending[end + 1..].trim_start().to_string();
        Some(record)
    }

    /// Append the next line, or at most `MAX_RECORD_BYTES` of it.
    /// Returns the number of bytes read.
    fn fill(&mut self) -> io::Result<usize> {
        self.chunk.clear();
        let read = self
            .input
            .by_ref()
            .take(MAX_RECORD_BYTES as u64)
            .read_until(b'\n', &mut self.chunk)?;

        match String::from_utf8_lossy(&self.chunk) {
            Cow::Borrowed(text) => self.pending.push_str(text),
            Cow::Owned(text) => {
                warn!(target: LOG_TARGET, "⚠️ Replaced bytes that are not UTF-8 in job input: {}", text.trim());
                self.pending.push_str(&text);
            }
        }

        if !self.pending.contains(RECORD_DELIMITER) && self.pending.len() > MAX_RECORD_BYTES {
            warn!(target: LOG_TARGET,
                "⚠️ Job record exceeds {} bytes without `{}`, discarding it",
                MAX_RECORD_BYTES,
                RECORD_DELIMITER
            );
            self.pending.clear();
        }
        Ok(read)
    }
}

impl<R: BufRead> Iterator for JobReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(record) = self.take_record() {
                return Some(Ok(record));
            }

            match self.fill() {
                Ok(0) => {
                    if !self.pending.trim().is_empty() {
                        warn!(target: LOG_TARGET, "⚠️ Input closed inside an unterminated job record: {}", self.pending.trim());
                        self.pending.clear();
                    }
                    return None;
                }
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Drives one search per job record for the lifetime of the input stream
pub struct Session {
    params: WorkParams,
    config: SearchConfig,
    strict_input: bool,
    stats: MinerStats,
}

impl Session {
    pub fn new(params: WorkParams, config: SearchConfig, strict_input: bool) -> Self {
        Self {
            params,
            config,
            strict_input,
            stats: MinerStats::new(),
        }
    }

    pub fn stats(&self) -> &MinerStats {
        &self.stats
    }

    /// Serve jobs from `input` until it is exhausted
    pub fn run<R: BufRead, W: Write>(&self, input: R, output: &mut W) -> crate::Result<()> {
        info!(target: LOG_TARGET, "🚀 Koinos miner ready with {} search threads", self.config.threads);

        for record in JobReader::new(input) {
            let record = record?;
            self.handle_record(&record, output)?;
        }

        info!(target: LOG_TARGET, "🛑 Input closed, shutting down");
        self.stats.display_summary();
        Ok(())
    }

    /// Parse and answer a single record. Always writes exactly one terminal line.
    pub fn handle_record<W: Write>(&self, record: &str, output: &mut W) -> crate::Result<SearchOutcome> {
        debug!(target: LOG_TARGET, "Received job record: {}", record);
        let (mut job, errors) = Job::parse_lenient(record);

        if !errors.is_empty() {
            self.stats.record_malformed();
            if self.strict_input {
                for e in &errors {
                    error!(target: LOG_TARGET, "❌ Malformed job: {}", e);
                }
                write_report(output, &MinerReport::Exhausted)?;
                return Ok(SearchOutcome::Exhausted);
            }
            for e in &errors {
                warn!(target: LOG_TARGET, "⚠️ Malformed job, using zero for the field: {}", e);
            }
        }

        if job.iterations_per_claim == 0 {
            warn!(target: LOG_TARGET, "⚠️ thread_iterations is 0, claiming one nonce at a time");
            job.iterations_per_claim = 1;
        }

        let report = self.run_job(&job, output)?;
        Ok(report.outcome)
    }

    /// Build the buffer, search and stream every report line for `job`
    pub fn run_job<W: Write>(&self, job: &Job, output: &mut W) -> crate::Result<SearchReport> {
        let table_start = Instant::now();
        let table = WordTable::generate(&job.seed, &self.params);
        debug!(target: LOG_TARGET,
            "Word buffer ready in {}",
            FormatUtils::format_duration(table_start.elapsed())
        );

        let search = Search::new(&self.params, &table, self.config);
        let (report_tx, report_rx) = crossbeam::channel::unbounded::<MinerReport>();

        let report = std::thread::scope(|scope| -> crate::Result<SearchReport> {
            let handle = scope.spawn(move || search.run(job, Some(&report_tx)));

            // Ends once the search thread drops the sender
            for line in report_rx.iter() {
                write_report(output, &line)?;
            }

            handle.join().map_err(|_| "search thread panicked".into())
        })?;

        if let SearchOutcome::Found { nonce, result } = report.outcome {
            match verify_nonce(&self.params, &table, &job.committed_hash, &job.target, &nonce) {
                Ok(verified) if verified == result => {
                    debug!(target: LOG_TARGET, "Verified nonce {} against target", nonce)
                }
                Ok(verified) => {
                    error!(target: LOG_TARGET,
                        "❌ Nonce {} re-evaluates to {}, search saw {}",
                        nonce,
                        verified.to_hex_field(),
                        result.to_hex_field()
                    )
                }
                Err(e) => error!(target: LOG_TARGET, "❌ Nonce {} failed verification: {}", nonce, e),
            }
        }

        write_report(output, &report.outcome.report())?;

        let found = matches!(report.outcome, SearchOutcome::Found { .. });
        self.stats.record_job(found, report.hashes_evaluated, report.rejected);
        info!(target: LOG_TARGET,
            "📊 Job done: {} hashes ({} claimed), {} rejected for repeated indices, {}",
            FormatUtils::format_number(report.hashes_evaluated),
            FormatUtils::format_number(report.hashes_claimed),
            report.rejected,
            FormatUtils::format_hashrate(report.hashrate())
        );

        Ok(report)
    }
}

fn write_report<W: Write>(output: &mut W, report: &MinerReport) -> io::Result<()> {
    writeln!(output, "{}", report)?;
    output.flush()
}


// Changelog:
// - v1.2.0 (2026-10-17): Byte-level job framing.
//   - Input is read as bytes and converted lossily, so stray bytes that are
//     not UTF-8 become a malformed record instead of ending the session.
//   - Unterminated records are capped at MAX_RECORD_BYTES.
// - v1.1.0 (2026-10-17): Input recovery policy.
//   - Malformed fields are zero-filled and logged by default; --strict-input
//     answers F:1; without searching.
// - v1.0.0 (2026-10-17): Stdin/stdout session loop with streamed progress lines.
