//! Tool defaults: where to look, how much to read, how much to show.

use la_stats::AnalysisConfig;
use serde::Deserialize;

/// Defaults applied when a tool call omits an argument.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    /// Log directory used when a call has no `path`.
    pub default_dir: String,
    /// File extensions considered log files.
    pub extensions: Vec<String>,
    /// Newest files read per call.
    pub file_limit: usize,
    /// Lines taken from the end of each file by `read_logs`.
    pub tail_lines: usize,
    /// Lines per `read_logs` page.
    pub page_size: usize,
    /// Extracted lines echoed back by `extract_critical_logs`.
    pub extract_preview: usize,
    /// Characters of a rendered report echoed back by `generate_report`.
    pub report_preview_chars: usize,
    /// Engine thresholds.
    pub analysis: AnalysisConfig,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            default_dir: "logs".to_string(),
            extensions: vec![".log".to_string(), ".txt".to_string()],
            file_limit: 5,
            tail_lines: 100,
            page_size: 50,
            extract_preview: 20,
            report_preview_chars: 500,
            analysis: AnalysisConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_partial_settings() {
        let toml = r#"
default_dir = "/srv/app/logs"
file_limit = 2

[analysis]
window_size = 4
"#;
        let settings: ToolSettings = toml::from_str(toml).unwrap();
        assert_eq!(settings.default_dir, "/srv/app/logs");
        assert_eq!(settings.file_limit, 2);
        assert_eq!(settings.page_size, 50); // default
        assert_eq!(settings.extensions, vec![".log", ".txt"]);
        assert_eq!(settings.analysis.window_size, 4);
        assert_eq!(settings.analysis.top_n, 5); // default
    }
}
