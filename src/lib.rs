// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod monitor;
pub mod source;
pub mod types;

use std::io::Write;

use tracing::debug;

use crate::cli::CliArgs;
use crate::fs::RealFileSystem;
use crate::monitor::{CostMonitor, execute};
use crate::source::FixedCostSource;

/// High-level entry point used by `main.rs`.
///
/// Wires the real filesystem and the cost source into a `CostMonitor`,
/// writes the report to `out`, and returns the process exit status
/// (always 0 or 1).
pub fn run(args: &CliArgs, out: &mut dyn Write) -> u8 {
    let fs = RealFileSystem;
    let source = FixedCostSource::placeholder();
    let monitor = CostMonitor::new(&fs, &source, &args.config);

    let code = execute(&monitor, out, args.dry_run);
    debug!(code, "cost monitor finished");
    code
}
