//! Logger setup for the server binary.
//!
//! Library crates log through the `log` facade; this installs the sinks.

use std::fs::{self, File};

use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::paths;

fn log_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_thread_level(simplelog::LevelFilter::Off)
        .build()
}

/// Install a stderr logger and, if enabled, a file logger in the cache directory.
pub fn init(config: &ServerConfig) -> Result<(), ServerError> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        config.log_level,
        log_config(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    let log_path = if config.log_to_file {
        paths::log_file()
    } else {
        None
    };

    let mut rotate_failures = Vec::new();
    if let Some(path) = &log_path {
        rotate_failures = paths::rotate_logs();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        loggers.push(WriteLogger::new(config.log_level, log_config(), file));
    }

    CombinedLogger::init(loggers)?;

    for failure in rotate_failures {
        log::warn!(
            "log rotation failed for {}: {}",
            failure.path.display(),
            failure.source
        );
    }
    if let Some(path) = log_path {
        log::debug!("logging to {}", path.display());
    }
    Ok(())
}
