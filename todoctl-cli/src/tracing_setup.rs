//! Tracing setup for the todoctl CLI
//!
//! Usage:
//!   todoctl --debug serve              # Debug logging to stderr
//!   RUST_LOG=todoctl_server=debug ...  # Fine-grained log control
//!   todoctl ui --log-file ui.log       # The UI logs only to a file
//!
//! Environment variables:
//!   RUST_LOG                           # Log filter (default: info)

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Where log lines go
#[derive(Debug, Clone)]
pub enum LogOutput {
    /// Compact lines on stderr
    Stderr,
    /// Plain (no ANSI) lines appended to a file
    File(PathBuf),
    /// No subscriber at all
    Off,
}

/// Tracing configuration options
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Enable debug logging (sets debug level if RUST_LOG is not set)
    pub debug: bool,
    pub output: LogOutput,
}

fn env_filter(debug: bool) -> EnvFilter {
    if debug {
        // Debug mode: set debug level unless RUST_LOG is explicitly set
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Initialize tracing based on configuration
pub fn init(config: &TracingConfig) -> Result<()> {
    match &config.output {
        LogOutput::Off => Ok(()),
        LogOutput::Stderr => tracing_subscriber::fmt()
            .with_env_filter(env_filter(config.debug))
            .with_target(config.debug) // Show targets in debug mode
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
            .map_err(|err| anyhow!(err)),
        LogOutput::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;

            tracing_subscriber::fmt()
                .with_env_filter(env_filter(config.debug))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|err| anyhow!(err))
        }
    }
}
