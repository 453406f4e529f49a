//! Log analysis tool implementations.
//!
//! Tools:
//! - read_logs: paged, filtered tail of the newest log files
//! - count_log_types: severity tallies and percentages
//! - generate_statistics: length statistics, common patterns, rare lines, spikes
//! - extract_critical_logs: pull lines of one severity, optionally to a file
//! - detect_anomalies: spike or rare-line detection
//! - generate_report: plaintext or HTML report, optionally to a file

pub mod args;
pub mod count_log_types;
pub mod detect_anomalies;
pub mod extract_critical_logs;
pub mod generate_report;
pub mod generate_statistics;
pub mod read_logs;

use std::path::Path;

use crate::error::LogResult;
use crate::types::{LogTool, ToolContext};

pub use count_log_types::CountLogTypes;
pub use detect_anomalies::DetectAnomalies;
pub use extract_critical_logs::ExtractCriticalLogs;
pub use generate_report::GenerateReport;
pub use generate_statistics::GenerateStatistics;
pub use read_logs::ReadLogs;

/// Every tool this crate provides.
pub fn all_tools() -> Vec<Box<dyn LogTool>> {
    vec![
        Box::new(ReadLogs),
        Box::new(CountLogTypes),
        Box::new(GenerateStatistics),
        Box::new(ExtractCriticalLogs),
        Box::new(DetectAnomalies),
        Box::new(GenerateReport),
    ]
}

/// All lines of the newest `file_limit` log files in `dir`, concatenated
/// newest file first.
pub(crate) async fn collect_lines(ctx: &ToolContext<'_>, dir: &str) -> LogResult<Vec<String>> {
    let files = ctx.source.list_files(dir, ctx.settings.file_limit).await?;
    let mut lines = Vec::new();
    for file in &files {
        lines.extend(ctx.source.read_lines(file).await?);
    }
    tracing::debug!(dir, files = files.len(), lines = lines.len(), "collected log lines");
    Ok(lines)
}

/// Final path component, for listing which files were read.
pub(crate) fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
