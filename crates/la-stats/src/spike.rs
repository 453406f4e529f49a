//! Two-half error spike detection.
//!
//! ERROR/CRITICAL lines are split at the midpoint and each half's rate is
//! compared. Each half's rate is its own line count divided by its own
//! slot count, so any evaluated window yields 1.0 for both halves unless
//! a half is empty. The raw half counts are reported alongside.

use serde::Serialize;

/// Second-half rate must exceed the first by this factor to count as a spike.
pub const SPIKE_RATIO: f64 = 1.5;

/// Added to the first-half rate before computing the percentage delta.
pub const RATE_SMOOTHING: f64 = 0.1;

/// Outcome of [`detect_spike`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SpikeReport {
    /// Fewer qualifying lines than the window requires; no rates computed.
    InsufficientData {
        error_lines: usize,
        window_size: usize,
        message: String,
    },
    Evaluated {
        spike_detected: bool,
        first_half_errors: usize,
        second_half_errors: usize,
        first_rate: f64,
        second_rate: f64,
        increase_percentage: f64,
    },
}

impl SpikeReport {
    pub fn spike_detected(&self) -> bool {
        matches!(
            self,
            Self::Evaluated {
                spike_detected: true,
                ..
            }
        )
    }
}

fn is_error_line(line: &str) -> bool {
    line.contains("ERROR") || line.contains("CRITICAL")
}

fn rate(count: usize, slots: usize) -> f64 {
    if slots == 0 {
        0.0
    } else {
        count as f64 / slots as f64
    }
}

/// Compare the first and second halves of ERROR/CRITICAL lines.
pub fn detect_spike<S: AsRef<str>>(lines: &[S], window_size: usize) -> SpikeReport {
    let errors: Vec<&str> = lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| is_error_line(line))
        .collect();
    let n = errors.len();

    if n < window_size {
        return SpikeReport::InsufficientData {
            error_lines: n,
            window_size,
            message: "Not enough errors to detect spikes".to_string(),
        };
    }

    let mid = n / 2;
    let (first, second) = errors.split_at(mid);
    let first_rate = rate(first.len(), mid);
    let second_rate = rate(second.len(), n - mid);

    let spike_detected = second_rate > first_rate * SPIKE_RATIO;
    let increase_percentage = if first_rate > 0.0 {
        ((second_rate - first_rate) / (first_rate + RATE_SMOOTHING)) * 100.0
    } else {
        0.0
    };

    tracing::debug!(
        error_lines = n,
        first_rate,
        second_rate,
        spike_detected,
        "spike window evaluated"
    );

    SpikeReport::Evaluated {
        spike_detected,
        first_half_errors: first.len(),
        second_half_errors: second.len(),
        first_rate,
        second_rate,
        increase_percentage,
    }
}
