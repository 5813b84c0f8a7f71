//! Logging setup for the CLI
//!
//! Logs go to stderr so rendered matrices on stdout stay machine-readable.

use crate::error::{Error, Result};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Logging configuration derived from verbosity flags
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter
    pub level: String,
    /// Include file and line numbers
    pub source_location: bool,
}

impl LoggingConfig {
    /// Create logging config from verbosity level
    pub fn from_verbosity(verbosity: u8) -> Self {
        match verbosity {
            0 => Self {
                level: "warn".to_string(),
                source_location: false,
            },
            1 => Self {
                level: "info".to_string(),
                source_location: false,
            },
            2 => Self {
                level: "debug".to_string(),
                source_location: true,
            },
            _ => Self {
                level: "trace".to_string(),
                source_location: true,
            },
        }
    }

    /// Apply environment overrides; `RUST_LOG` wins over verbosity flags
    pub fn merge_with_env(&mut self) {
        if let Ok(rust_log) = std::env::var("RUST_LOG") {
            self.level = rust_log;
        }
    }
}

/// Initialize the global logging system
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_new(&config.level)
        .map_err(|e| Error::config(format!("invalid log filter \"{}\": {}", config.level, e)))?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::config(format!("failed to initialize logging: {}", e)))?;

    Ok(())
}
