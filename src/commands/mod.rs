//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler

pub mod scan;

pub use scan::{execute_scan, ScanOptions};
