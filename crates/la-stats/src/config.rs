//! Fixed thresholds shared by the engine and its callers.

use serde::Deserialize;

/// Read-only analysis settings. Passed explicitly into every call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// How many common patterns to return.
    pub top_n: usize,
    /// Minimum ERROR/CRITICAL lines before spike detection runs.
    pub window_size: usize,
    /// Cap on the number of rare lines reported.
    pub rare_limit: usize,
    /// Accepted for compatibility; the rare-line rule does not read it.
    pub rare_threshold: f64,
    /// Characters kept from a captured error message.
    pub snippet_len: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: 5,
            window_size: 10,
            rare_limit: crate::rare::RARE_LIMIT,
            rare_threshold: 0.01,
            snippet_len: crate::patterns::SNIPPET_LEN,
        }
    }
}
