//! @acp:module "Errors"
//! @acp:summary "Library error type and result alias"
//! @acp:domain core
//! @acp:layer utility

use thiserror::Error;

/// Errors raised by the scanner and its output stage
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scan must start at {minimum} or above, got {start}")]
    InvalidStart { start: u64, minimum: u64 },
}

pub type Result<T> = std::result::Result<T, ScanError>;
