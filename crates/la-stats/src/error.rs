//! Engine error types.

use thiserror::Error;

/// Conditions the engine reports instead of producing a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// No lines were supplied, so no statistics exist.
    #[error("no log lines to analyze")]
    EmptyInput,
}

/// Convenience alias for engine results.
pub type StatsResult<T> = Result<T, StatsError>;
