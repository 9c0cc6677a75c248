// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};

use crate::config::loader::DEFAULT_CONFIG_PATH;

/// Command-line arguments for `cost-monitor`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "cost-monitor",
    version,
    about = "Compare actual infrastructure spend against configured cost limits.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the cost-limit config (JSON).
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `COST_MONITOR_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the limits, but don't fetch any costs.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Parse process arguments without letting clap pick the exit status.
///
/// `--help` / `--version` still print and exit 0 through clap. Every other
/// parse error is returned so the caller can exit with 1.
pub fn parse() -> Result<CliArgs, clap::Error> {
    match CliArgs::try_parse() {
        Ok(args) => Ok(args),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => Err(e),
    }
}
