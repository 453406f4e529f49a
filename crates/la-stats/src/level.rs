//! Severity labels and the first-match level counter.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

// ── Level ─────────────────────────────────────────────────────

/// Severity label recognized in raw log text.
///
/// Declaration order is the matching priority: a line is attributed to
/// the first level that matches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Critical,
    Error,
    Warning,
    Info,
    Debug,
}

impl Level {
    /// All levels in matching priority order.
    pub const ALL: [Level; 5] = [
        Level::Critical,
        Level::Error,
        Level::Warning,
        Level::Info,
        Level::Debug,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }

    /// Bracketed tag form, e.g. `[ERROR]`.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Critical => "[CRITICAL]",
            Self::Error => "[ERROR]",
            Self::Warning => "[WARNING]",
            Self::Info => "[INFO]",
            Self::Debug => "[DEBUG]",
        }
    }

    /// Parse a label case-insensitively. Returns `None` for anything
    /// outside the five known labels.
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(label.trim()))
    }

    /// First level whose tag or name occurs in `line`.
    pub fn detect(line: &str) -> Option<Self> {
        let upper = line.to_uppercase();
        Self::ALL
            .into_iter()
            .find(|level| line.contains(level.tag()) || upper.contains(level.as_str()))
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Level counts ──────────────────────────────────────────────

/// Per-level line counts. Always carries all five levels.
///
/// Serializes as a JSON object keyed by label, in priority order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelCounts {
    counts: [usize; 5],
}

impl LevelCounts {
    pub fn get(&self, level: Level) -> usize {
        self.counts[level.index()]
    }

    /// Count for a free-form label; unknown labels count as zero.
    pub fn get_label(&self, label: &str) -> usize {
        Level::parse(label).map_or(0, |level| self.get(level))
    }

    /// `(level, count)` pairs in priority order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (Level, usize)> + '_ {
        Level::ALL.into_iter().map(|level| (level, self.get(level)))
    }

    /// Sum over all levels. Never exceeds the number of counted lines.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    fn bump(&mut self, level: Level) {
        self.counts[level.index()] += 1;
    }
}

impl Serialize for LevelCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Level::ALL.len()))?;
        for (level, count) in self.iter() {
            map.serialize_entry(level.as_str(), &count)?;
        }
        map.end()
    }
}

/// Tally lines by severity, first match wins.
pub fn count_levels<S: AsRef<str>>(lines: &[S]) -> LevelCounts {
    let mut counts = LevelCounts::default();
    for line in lines {
        if let Some(level) = Level::detect(line.as_ref()) {
            counts.bump(level);
        }
    }
    counts
}
