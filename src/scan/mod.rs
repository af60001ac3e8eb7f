//! @acp:module "Primality Scanner"
//! @acp:summary "Trial-division scan over a half-open integer range"
//! @acp:domain core
//! @acp:layer service
//!
//! Candidates are produced by a counter, tested, and dropped. Nothing is
//! collected: [`PrimeScanner`] yields each prime as soon as it is found.
//!
//! A candidate is prime when no `d` in `2..=floor(sqrt(k))` divides it.
//! When that range is empty the candidate passes by default.

mod stats;

pub use stats::ScanStats;

use std::iter::FusedIterator;

use crate::config::DEFAULT_START;
use crate::error::{Result, ScanError};

/// @acp:summary "Smallest divisor of a candidate in 2..=floor(sqrt(k))"
///
/// Returns `None` when the candidate passes trial division.
pub fn smallest_divisor(candidate: u64) -> Option<u64> {
    trial_divide(candidate).0
}

/// @acp:summary "Trial-division primality verdict"
///
/// Vacuously true for 0 through 3.
pub fn passes_trial_division(candidate: u64) -> bool {
    smallest_divisor(candidate).is_none()
}

/// Returns the first divisor found and the number of remainders taken.
fn trial_divide(candidate: u64) -> (Option<u64>, u64) {
    let mut divisions = 0;
    let mut divisor = 2;
    // d <= k / d is d * d <= k without the overflow
    while divisor <= candidate / divisor {
        divisions += 1;
        if candidate % divisor == 0 {
            return (Some(divisor), divisions);
        }
        divisor += 1;
    }
    (None, divisions)
}

/// @acp:summary "Validated half-open scan range [start, bound)"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanRange {
    start: u64,
    bound: u64,
}

impl ScanRange {
    /// Lowest start accepted
    pub const MIN_START: u64 = DEFAULT_START;

    /// Create a range. A bound at or below `start` gives an empty scan.
    pub fn new(start: u64, bound: u64) -> Result<Self> {
        if start < Self::MIN_START {
            return Err(ScanError::InvalidStart {
                start,
                minimum: Self::MIN_START,
            });
        }
        Ok(Self { start, bound })
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn bound(&self) -> u64 {
        self.bound
    }

    pub fn is_empty(&self) -> bool {
        self.bound <= self.start
    }

    /// Lazy ascending iterator over the primes in the range
    pub fn primes(&self) -> PrimeScanner {
        PrimeScanner {
            next: self.start,
            bound: self.bound,
            stats: ScanStats::default(),
        }
    }
}

impl IntoIterator for ScanRange {
    type Item = u64;
    type IntoIter = PrimeScanner;

    fn into_iter(self) -> Self::IntoIter {
        self.primes()
    }
}

/// Streaming trial-division scanner
#[derive(Debug, Clone)]
pub struct PrimeScanner {
    next: u64,
    bound: u64,
    stats: ScanStats,
}

impl PrimeScanner {
    /// Counters for the candidates consumed so far. `elapsed` stays zero.
    pub fn stats(&self) -> ScanStats {
        self.stats
    }
}

impl Iterator for PrimeScanner {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        while self.next < self.bound {
            let candidate = self.next;
            self.next += 1;
            self.stats.candidates += 1;

            let (divisor, divisions) = trial_divide(candidate);
            self.stats.divisions += divisions;
            if divisor.is_none() {
                self.stats.primes += 1;
                return Some(candidate);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bound.saturating_sub(self.next);
        (0, usize::try_from(remaining).ok())
    }
}

impl FusedIterator for PrimeScanner {}
