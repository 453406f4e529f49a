//! Statistics and anomaly-detection engine for plain-text log lines.
//!
//! Every operation is a pure function over an ordered slice of lines:
//! severity tallies, descriptive length statistics, common error snippets,
//! rare (abnormally long) lines and a two-half error spike check.
//! [`StatsEngine`] bundles them with an immutable [`AnalysisConfig`].

pub mod config;
pub mod engine;
pub mod error;
pub mod level;
pub mod patterns;
pub mod rare;
pub mod spike;
pub mod stats;

// Re-export key types for convenience
pub use config::AnalysisConfig;
pub use engine::StatsEngine;
pub use error::{StatsError, StatsResult};
pub use level::{Level, LevelCounts, count_levels};
pub use patterns::{PatternCount, find_common_patterns};
pub use rare::find_rare_lines;
pub use spike::{SpikeReport, detect_spike};
pub use stats::{LineStats, compute_statistics};
