#![forbid(unsafe_code)]
//! primescan Command Line Interface

use std::io::IsTerminal;

use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use primescan::commands::{execute_scan, ScanOptions};
use primescan::ScanConfig;

#[derive(Parser)]
#[command(name = "primescan")]
#[command(about = "Print every prime from 3 up to (not including) 2000000")]
#[command(version)]
struct Cli {
    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = ScanOptions {
        config: ScanConfig::default(),
        verbose: cli.verbose,
    };

    if let Err(err) = execute_scan(options) {
        eprintln!("{} {:#}", style("✗").for_stderr().red(), err);
        std::process::exit(1);
    }
}

/// RUST_LOG wins over --verbose
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "primescan=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}
