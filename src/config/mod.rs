//! @acp:module "Configuration"
//! @acp:summary "Compiled-in scan bounds and defaults"
//! @acp:domain cli
//! @acp:layer config
//!
//! The scan bounds are fixed at compile time. Nothing here is read from
//! disk or the environment.

use crate::scan::ScanRange;

/// First candidate tested. 2 is never examined.
pub const DEFAULT_START: u64 = 3;

/// Exclusive upper bound of the scan
pub const DEFAULT_BOUND: u64 = 2_000_000;

/// @acp:summary "Scan configuration (start and exclusive bound)"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// First candidate, inclusive
    pub start: u64,
    /// Upper bound, exclusive
    pub bound: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            bound: DEFAULT_BOUND,
        }
    }
}

impl ScanConfig {
    /// Config with the default start and a custom bound
    pub fn with_bound(bound: u64) -> Self {
        Self {
            bound,
            ..Self::default()
        }
    }

    /// @acp:summary "Validate into a scan range"
    pub fn range(&self) -> crate::Result<ScanRange> {
        ScanRange::new(self.start, self.bound)
    }
}
