//! @acp:module "Scan Command"
//! @acp:summary "Print the primes of the compiled-in range to stdout"
//! @acp:domain cli
//! @acp:layer handler

use std::io;

use anyhow::{Context, Result};
use console::style;

use crate::config::ScanConfig;
use crate::emit::emit_primes;
use crate::scan::ScanStats;

/// Options for the scan command
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Bounds to scan
    pub config: ScanConfig,
    /// Print a summary line to stderr
    pub verbose: bool,
}

/// Execute the scan command
pub fn execute_scan(options: ScanOptions) -> Result<ScanStats> {
    let range = options.config.range()?;

    let stdout = io::stdout();
    let stats = emit_primes(&range, stdout.lock())
        .with_context(|| format!("Failed writing primes below {}", range.bound()))?;

    if options.verbose {
        eprintln!("{} {}", style("✓").for_stderr().green(), stats);
    }

    Ok(stats)
}
