// Koinos Miner - Free and Open Source Software Statement
//
// This project, koinos-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/logging.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file initializes log4rs for the Koinos miner. Stdout belongs to the
// mining manager protocol, so every appender writes to stderr unless a YAML
// configuration file routes records elsewhere.
//
// Tree Location:
// - src/utils/logging.rs (logger setup)
// - Depends on: log, log4rs

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;

const STDERR_APPENDER: &str = "stderr";
const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Build the default stderr-only configuration
pub fn stderr_config(level: LevelFilter) -> crate::Result<Config> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build(STDERR_APPENDER, Box::new(stderr)))
        .build(Root::builder().appender(STDERR_APPENDER).build(level))?;
    Ok(config)
}

/// Install the global logger, from `config_file` when given
pub fn init_logging(level: LevelFilter, config_file: Option<&Path>) -> crate::Result<()> {
    match config_file {
        Some(path) => log4rs::init_file(path, Default::default())?,
        None => {
            log4rs::init_config(stderr_config(level)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stderr_config_has_single_appender() {
        let config = stderr_config(LevelFilter::Debug).unwrap();
        assert_eq!(config.appenders().len(), 1);
        assert_eq!(config.appenders()[0].name(), STDERR_APPENDER);
        assert_eq!(config.root().level(), LevelFilter::Debug);
    }
}

// Changelog:
// - v1.0.0 (2026-10-17): log4rs on stderr, or a YAML configuration file.
