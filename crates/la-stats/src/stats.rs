//! Descriptive statistics over trimmed line lengths.

use serde::Serialize;

use crate::error::{StatsError, StatsResult};

/// Length statistics for a set of lines. Lengths are in characters,
/// measured after trimming surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStats {
    pub total_lines: usize,
    pub non_empty_lines: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub avg_length: f64,
}

/// Compute [`LineStats`]. Blank lines count toward min/max/avg as length 0.
pub fn compute_statistics<S: AsRef<str>>(lines: &[S]) -> StatsResult<LineStats> {
    if lines.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let lengths: Vec<usize> = lines
        .iter()
        .map(|line| line.as_ref().trim().chars().count())
        .collect();

    let min_length = lengths.iter().copied().min().unwrap_or(0);
    let max_length = lengths.iter().copied().max().unwrap_or(0);
    let sum: usize = lengths.iter().sum();

    Ok(LineStats {
        total_lines: lines.len(),
        non_empty_lines: lengths.iter().filter(|&&len| len > 0).count(),
        min_length,
        max_length,
        avg_length: sum as f64 / lengths.len() as f64,
    })
}
