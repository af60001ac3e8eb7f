#![forbid(unsafe_code)]

//! @acp:module "primescan Library"
//! @acp:summary "Streaming trial-division prime scanner"
//! @acp:domain core
//! @acp:layer api
//! @acp:stability stable
//!
//! # primescan
//!
//! Enumerates the primes in `[3, 2000000)` by trial division and streams
//! them, one per line, in ascending order. 2 is not part of the scan.
//!
//! ## Example
//!
//! ```rust
//! use primescan::ScanRange;
//!
//! let range = ScanRange::new(3, 30)?;
//! let primes: Vec<u64> = range.primes().collect();
//! assert_eq!(primes, vec![3, 5, 7, 11, 13, 17, 19, 23, 29]);
//! # Ok::<(), primescan::ScanError>(())
//! ```

pub mod commands;
pub mod config;
pub mod emit;
pub mod error;
pub mod scan;

// Re-exports
pub use config::{ScanConfig, DEFAULT_BOUND, DEFAULT_START};
pub use emit::emit_primes;
pub use error::{Result, ScanError};
pub use scan::{passes_trial_division, smallest_divisor, PrimeScanner, ScanRange, ScanStats};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
