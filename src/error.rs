//! Error types for Pagestamp
//!
//! Uses `thiserror` for library errors. Per-file failures during a run
//! are absorbed into page outcomes and never surface through this type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Pagestamp operations
pub type StampResult<T> = Result<T, StampError>;

/// Main error type for Pagestamp operations
#[derive(Error, Debug)]
pub enum StampError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file exists but does not parse
    #[error("invalid config in {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },
}
