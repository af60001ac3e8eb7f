//! @acp:module "Emitter"
//! @acp:summary "Stream primes to a writer, one decimal per line"
//! @acp:domain core
//! @acp:layer output

use std::io::{ErrorKind, Write};
use std::time::Instant;

use crate::error::Result;
use crate::scan::{ScanRange, ScanStats};

/// @acp:summary "Write every prime in the range, ascending, one per line"
///
/// Each prime is written as soon as it is found. Pass a line-buffered
/// writer (such as locked stdout) for per-line delivery. A reader that
/// hangs up early ends the scan without an error.
pub fn emit_primes<W: Write>(range: &ScanRange, mut out: W) -> Result<ScanStats> {
    let started = Instant::now();
    let mut scanner = range.primes();
    tracing::debug!(start = range.start(), bound = range.bound(), "Scan started");

    while let Some(prime) = scanner.next() {
        if let Err(err) = writeln!(out, "{}", prime) {
            if err.kind() == ErrorKind::BrokenPipe {
                tracing::debug!(last = prime, "Output closed, stopping scan");
                return Ok(finish(scanner.stats(), started));
            }
            return Err(err.into());
        }
    }

    if let Err(err) = out.flush() {
        if err.kind() != ErrorKind::BrokenPipe {
            return Err(err.into());
        }
    }

    Ok(finish(scanner.stats(), started))
}

fn finish(mut stats: ScanStats, started: Instant) -> ScanStats {
    stats.elapsed = started.elapsed();
    tracing::info!(
        candidates = stats.candidates,
        primes = stats.primes,
        divisions = stats.divisions,
        elapsed_ms = stats.elapsed.as_millis() as u64,
        "Scan finished"
    );
    stats
}
