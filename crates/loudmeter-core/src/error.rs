//! Error types for loudmeter-core.

use thiserror::Error;

/// Error type for loudmeter-core operations.
///
/// Only configuration can fail. The measurement path itself reports
/// degenerate input (silence, missing data) through the published values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid sample rate: {0}. Must be between 8000 and 384000 Hz")]
    InvalidSampleRate(f64),

    #[error("Invalid block size: {0}. Must be greater than zero")]
    InvalidBlockSize(usize),
}

/// Result type alias.
pub type Result<T> = core::result::Result<T, Error>;
