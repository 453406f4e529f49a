//! Config-carrying front end over the free engine functions.

use crate::config::AnalysisConfig;
use crate::error::StatsResult;
use crate::level::{self, LevelCounts};
use crate::patterns::{self, PatternCount};
use crate::rare;
use crate::spike::{self, SpikeReport};
use crate::stats::{self, LineStats};

/// Stateless analysis service. Holds only a read-only [`AnalysisConfig`],
/// so one instance can be shared freely across callers.
#[derive(Debug, Clone, Default)]
pub struct StatsEngine {
    config: AnalysisConfig,
}

impl StatsEngine {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn count_levels<S: AsRef<str>>(&self, lines: &[S]) -> LevelCounts {
        level::count_levels(lines)
    }

    pub fn statistics<S: AsRef<str>>(&self, lines: &[S]) -> StatsResult<LineStats> {
        stats::compute_statistics(lines)
    }

    /// Common patterns; `top_n` falls back to the configured default.
    pub fn common_patterns<S: AsRef<str>>(
        &self,
        lines: &[S],
        top_n: Option<usize>,
    ) -> Vec<PatternCount> {
        patterns::find_common_patterns_with(
            lines,
            top_n.unwrap_or(self.config.top_n),
            self.config.snippet_len,
        )
    }

    pub fn rare_lines<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        rare::find_rare_lines_with(lines, self.config.rare_threshold, self.config.rare_limit)
    }

    /// Spike check; `window_size` falls back to the configured default.
    pub fn spike<S: AsRef<str>>(&self, lines: &[S], window_size: Option<usize>) -> SpikeReport {
        spike::detect_spike(lines, window_size.unwrap_or(self.config.window_size))
    }
}
