//! Error types for the feed core.
//!
//! Mutating store operations are non-throwing by contract (unknown ids are a
//! silent no-op), so the error surface is small: only the load workflow and
//! configuration parsing can fail.

use thiserror::Error;

/// Result type alias for feed-core operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Loading the feed from its source failed
    #[error("failed to load feed: {0}")]
    LoadFailure(String),

    /// Configuration value missing or malformed
    #[error("invalid configuration: {0}")]
    Config(String),
}
