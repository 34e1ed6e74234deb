//! Global error handling for rper
//!
//! Only configuration problems surface through this type. I/O failures
//! during the walk are reported inline and isolated to the entry that
//! caused them.

use thiserror::Error;

/// Global error type for rper operations
#[derive(Error, Debug)]
pub enum RperError {
    /// Mode specification outside the accepted grammar
    #[error("invalid octal value: {0} (expected three of '4567*', e.g. 755, 0644, 6*4)")]
    InvalidModeSpec(String),

    /// Configuration errors
    #[error("{0}")]
    Config(String),
}

/// Specialized Result type for rper operations
pub type Result<T> = std::result::Result<T, RperError>;
