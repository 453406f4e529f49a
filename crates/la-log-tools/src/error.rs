//! Log access and tool error types.

use la_stats::StatsError;
use thiserror::Error;

/// Errors that can occur while reading logs or running a tool.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error("{0}")]
    Other(String),
}

/// Convenience alias for log tool results.
pub type LogResult<T> = Result<T, LogError>;
