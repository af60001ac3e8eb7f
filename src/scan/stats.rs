//! @acp:module "Scan Statistics"
//! @acp:summary "Counters and timing for a single scan"
//! @acp:domain core
//! @acp:layer model

use std::fmt;
use std::time::Duration;

/// Counters accumulated over one scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Candidates tested
    pub candidates: u64,
    /// Candidates that passed trial division
    pub primes: u64,
    /// Remainder operations performed
    pub divisions: u64,
    /// Wall time, set by the output stage
    pub elapsed: Duration,
}

impl fmt::Display for ScanStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} primes from {} candidates ({} trial divisions) in {:.2?}",
            self.primes, self.candidates, self.divisions, self.elapsed
        )
    }
}
