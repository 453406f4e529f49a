//! Plaintext and HTML report rendering.

use chrono::NaiveDateTime;
use la_stats::{LevelCounts, LineStats, PatternCount, SpikeReport, StatsEngine};

use crate::error::{LogError, LogResult};

const RULE_WIDTH: usize = 60;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Report layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Summary,
    /// Summary plus rare lines and the spike check.
    Detailed,
    Html,
}

impl ReportKind {
    pub fn parse(s: &str) -> LogResult<Self> {
        match s {
            "summary" => Ok(Self::Summary),
            "detailed" => Ok(Self::Detailed),
            "html" => Ok(Self::Html),
            other => Err(LogError::InvalidArgument(format!(
                "invalid report type: {other}"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Detailed => "detailed",
            Self::Html => "html",
        }
    }
}

/// Render a report over `lines` read from `directory`.
///
/// Fails with the engine's empty-input error when there are no lines.
pub fn render(
    kind: ReportKind,
    directory: &str,
    lines: &[String],
    engine: &StatsEngine,
    generated_at: NaiveDateTime,
) -> LogResult<String> {
    let stats = engine.statistics(lines)?;
    let levels = engine.count_levels(lines);
    let generated = generated_at.format(TIMESTAMP_FORMAT).to_string();

    Ok(match kind {
        ReportKind::Summary => {
            let patterns = engine.common_patterns(lines, None);
            summary_lines(directory, &generated, &stats, &levels, &patterns).join("\n")
        }
        ReportKind::Detailed => {
            let patterns = engine.common_patterns(lines, None);
            let mut out = summary_lines(directory, &generated, &stats, &levels, &patterns);
            let footer = out.pop();
            out.extend(detail_lines(&engine.rare_lines(lines), &engine.spike(lines, None)));
            out.extend(footer);
            out.join("\n")
        }
        ReportKind::Html => html(directory, &generated, &stats, &levels),
    })
}

fn summary_lines(
    directory: &str,
    generated: &str,
    stats: &LineStats,
    levels: &LevelCounts,
    patterns: &[PatternCount],
) -> Vec<String> {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = vec![
        rule.clone(),
        "LOG ANALYSIS REPORT".to_string(),
        rule.clone(),
        String::new(),
        format!("Generated: {generated}"),
        format!("Log Directory: {directory}"),
        String::new(),
        "STATISTICS:".to_string(),
        format!("  Total Lines: {}", stats.total_lines),
        format!("  Non-Empty Lines: {}", stats.non_empty_lines),
        format!("  Min Length: {}", stats.min_length),
        format!("  Max Length: {}", stats.max_length),
        format!("  Avg Length: {:.2}", stats.avg_length),
        String::new(),
        "LOG LEVELS:".to_string(),
    ];

    for (level, count) in levels.iter().filter(|&(_, count)| count > 0) {
        let percentage = count as f64 / stats.total_lines as f64 * 100.0;
        out.push(format!("  {level}: {count} ({percentage:.1}%)"));
    }

    if !patterns.is_empty() {
        out.push(String::new());
        out.push("MOST COMMON ERRORS:".to_string());
        for (i, p) in patterns.iter().enumerate() {
            out.push(format!("  {}. {} (x{})", i + 1, p.pattern, p.count));
        }
    }

    out.push(String::new());
    out.push(rule);
    out
}

fn detail_lines(rare: &[String], spike: &SpikeReport) -> Vec<String> {
    let mut out = Vec::new();
    if !rare.is_empty() {
        out.push("RARE LINES:".to_string());
        out.extend(rare.iter().map(|line| format!("  - {line}")));
        out.push(String::new());
    }

    out.push("ERROR SPIKE:".to_string());
    match spike {
        SpikeReport::InsufficientData {
            error_lines,
            window_size,
            ..
        } => {
            out.push(format!(
                "  Not enough data ({error_lines} error lines, need {window_size})"
            ));
        }
        SpikeReport::Evaluated {
            spike_detected,
            first_half_errors,
            second_half_errors,
            increase_percentage,
            ..
        } => {
            let verdict = if *spike_detected { "yes" } else { "no" };
            out.push(format!("  Spike Detected: {verdict}"));
            out.push(format!("  First Half Errors: {first_half_errors}"));
            out.push(format!("  Second Half Errors: {second_half_errors}"));
            out.push(format!("  Increase: {increase_percentage:.1}%"));
        }
    }
    out.push(String::new());
    out
}

fn html(directory: &str, generated: &str, stats: &LineStats, levels: &LevelCounts) -> String {
    let mut out = vec![
        "<!DOCTYPE html>".to_string(),
        "<html>".to_string(),
        "<head>".to_string(),
        "<title>Log Analysis Report</title>".to_string(),
        "<style>".to_string(),
        "body { font-family: Arial; margin: 20px; }".to_string(),
        "table { border-collapse: collapse; width: 100%; }".to_string(),
        "th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }".to_string(),
        "th { background-color: #4CAF50; color: white; }".to_string(),
        "</style>".to_string(),
        "</head>".to_string(),
        "<body>".to_string(),
        "<h1>Log Analysis Report</h1>".to_string(),
        format!("<p>Generated: {generated}</p>"),
        format!("<p>Directory: {}</p>", escape_html(directory)),
        "<h2>Statistics</h2>".to_string(),
        "<table>".to_string(),
        "<tr><th>Metric</th><th>Value</th></tr>".to_string(),
        format!("<tr><td>Total Lines</td><td>{}</td></tr>", stats.total_lines),
        format!(
            "<tr><td>Average Length</td><td>{:.2}</td></tr>",
            stats.avg_length
        ),
        "</table>".to_string(),
        "<h2>Log Levels</h2>".to_string(),
        "<table>".to_string(),
        "<tr><th>Level</th><th>Count</th></tr>".to_string(),
    ];
    for (level, count) in levels.iter().filter(|&(_, count)| count > 0) {
        out.push(format!("<tr><td>{level}</td><td>{count}</td></tr>"));
    }
    out.push("</table>".to_string());
    out.push("</body>".to_string());
    out.push("</html>".to_string());
    out.join("\n")
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// First `max_chars` characters of `report`, with `...` appended when cut.
pub fn preview(report: &str, max_chars: usize) -> String {
    match report.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &report[..cut]),
        None => report.to_string(),
    }
}
