// Koinos Miner - Free and Open Source Software Statement
//
// This project, koinos-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/main.rs
// Version: 2.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// Worker mode reads jobs from stdin and answers on stdout; --benchmark runs a
// synthetic job and only logs.

use clap::Parser;
use koinos_miner::{
    BenchmarkRunner, Result, Session,
    core::{WorkParams, types::Args},
    miner::SearchConfig,
    utils::logging::init_logging,
};
use log::{error, info};
use std::io;

const LOG_TARGET: &str = "koinos::miner::main";

fn main() {
    let args = Args::parse();

    // Validate arguments
    if let Err(err) = args.validate() {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }

    if let Err(err) = init_logging(args.log_level, args.log_config.as_deref()) {
        eprintln!("❌ Error: could not set up logging: {}", err);
        std::process::exit(1);
    }

    let outcome = if args.benchmark {
        handle_benchmark(&args)
    } else {
        handle_worker(&args)
    };

    if let Err(err) = outcome {
        error!(target: LOG_TARGET, "❌ Miner stopped: {}", err);
        std::process::exit(1);
    }
}

fn handle_worker(args: &Args) -> Result<()> {
    let config = SearchConfig::new(args.threads, args.report_threshold);
    let session = Session::new(WorkParams::new(), config, args.strict_input);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut output = stdout.lock();
    session.run(stdin.lock(), &mut output)
}

fn handle_benchmark(args: &Args) -> Result<()> {
    info!(target: LOG_TARGET, "🧪 Koinos miner benchmark mode");
    let runner = BenchmarkRunner::new(args.threads, args.benchmark_hashes);
    let result = runner.run()?;
    result.display();
    Ok(())
}

// Changelog:
// - v2.1.0 (2026-10-17): Single synchronous binary.
//   - Removed the cpu/gpu/hybrid feature entry points, the web dashboard and
//     the SV2 test mode. Logging goes through log4rs on stderr.
