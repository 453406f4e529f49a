//! generate_statistics: length statistics, common patterns, rare lines and
//! spike detection over the newest log files.

use async_trait::async_trait;
use la_stats::{LineStats, StatsResult};
use serde_json::json;

use super::{args, collect_lines};
use crate::error::{LogError, LogResult};
use crate::types::{LogTool, ToolContext, ToolResult};

/// Which view of the statistics to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsType {
    Summary,
    Detailed,
    Anomalies,
}

impl StatsType {
    pub fn parse(s: &str) -> LogResult<Self> {
        match s {
            "summary" => Ok(Self::Summary),
            "detailed" => Ok(Self::Detailed),
            "anomalies" => Ok(Self::Anomalies),
            other => Err(LogError::InvalidArgument(format!(
                "invalid stats type: {other}"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Detailed => "detailed",
            Self::Anomalies => "anomalies",
        }
    }
}

/// Statistics record, or a "no data" marker for empty input.
pub(crate) fn stats_json(stats: StatsResult<LineStats>) -> serde_json::Value {
    match stats {
        Ok(stats) => json!(stats),
        Err(_) => json!({ "error": "No logs found" }),
    }
}

pub struct GenerateStatistics;

#[async_trait]
impl LogTool for GenerateStatistics {
    fn name(&self) -> &str {
        "generate_statistics"
    }

    fn description(&self) -> &str {
        "Generate line statistics, common error patterns, rare lines and spike detection"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Log directory (server default if omitted)"
                },
                "stats_type": {
                    "type": "string",
                    "enum": ["summary", "detailed", "anomalies"],
                    "description": "Statistics view (default: summary)",
                    "default": "summary"
                },
                "top_n": {
                    "type": "integer",
                    "description": "Common patterns to return for the detailed view (default: 5)",
                    "default": 5
                }
            }
        })
    }

    async fn execute(
        &self,
        args: serde_json::Value,
        ctx: &ToolContext<'_>,
    ) -> LogResult<ToolResult> {
        let dir = args::directory(&args, ctx.settings)?;
        let stats_type = match StatsType::parse(args::str_or(&args, "stats_type", "summary")?) {
            Ok(t) => t,
            Err(e) => return Ok(ToolResult::failure("generate_statistics", e.to_string())),
        };
        let engine = ctx.engine();
        let top_n = args::usize_or(&args, "top_n", engine.config().top_n)?;

        let lines = collect_lines(ctx, dir).await?;
        let total = lines.len();

        let (data, summary) = match stats_type {
            StatsType::Summary => (
                json!({
                    "path": dir,
                    "type": stats_type.as_str(),
                    "statistics": stats_json(engine.statistics(&lines)),
                }),
                format!("Summary statistics for {total} lines in {dir}"),
            ),
            StatsType::Detailed => {
                let patterns = engine.common_patterns(&lines, Some(top_n));
                let rare = engine.rare_lines(&lines);
                let summary = format!(
                    "{total} lines: {} common patterns, {} rare lines in {dir}",
                    patterns.len(),
                    rare.len()
                );
                (
                    json!({
                        "path": dir,
                        "type": stats_type.as_str(),
                        "statistics": stats_json(engine.statistics(&lines)),
                        "common_patterns": patterns,
                        "rare_logs": rare,
                    }),
                    summary,
                )
            }
            StatsType::Anomalies => {
                let spike = engine.spike(&lines, None);
                let verdict = if spike.spike_detected() {
                    "spike detected"
                } else {
                    "no spike"
                };
                (
                    json!({
                        "path": dir,
                        "type": stats_type.as_str(),
                        "spike_detection": spike,
                    }),
                    format!("{verdict} across {total} lines in {dir}"),
                )
            }
        };

        Ok(ToolResult::success("generate_statistics", data, summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockLogSource;
    use crate::settings::ToolSettings;

    async fn run(source: &MockLogSource, args: serde_json::Value) -> ToolResult {
        let settings = ToolSettings::default();
        let ctx = ToolContext::new(source, &settings);
        GenerateStatistics.execute(args, &ctx).await.unwrap()
    }

    #[tokio::test]
    async fn summary_statistics() {
        let source = MockLogSource::with_app_sample();
        let result = run(&source, json!({"path": "/var/log/app"})).await;
        assert!(result.success);
        let stats = &result.data.as_ref().unwrap()["statistics"];
        assert_eq!(stats["total_lines"], 14);
        assert_eq!(stats["non_empty_lines"], 13);
        assert_eq!(stats["min_length"], 0);
        let avg = stats["avg_length"].as_f64().unwrap();
        assert!(avg > 0.0 && avg <= stats["max_length"].as_f64().unwrap());
    }

    #[tokio::test]
    async fn detailed_includes_patterns_and_rare_lines() {
        let source = MockLogSource::with_app_sample();
        let result = run(
            &source,
            json!({"path": "/var/log/app", "stats_type": "detailed", "top_n": 2}),
        )
        .await;
        let data = result.data.as_ref().unwrap();
        let patterns = data["common_patterns"].as_array().unwrap();
        assert_eq!(patterns.len(), 2);
        assert_eq!(patterns[0]["pattern"], "Database");
        assert_eq!(patterns[0]["count"], 2);
        let rare = data["rare_logs"].as_array().unwrap();
        assert_eq!(rare.len(), 1);
        assert!(rare[0].as_str().unwrap().contains("memory pressure"));
    }

    #[tokio::test]
    async fn anomalies_view() {
        let source = MockLogSource::with_error_burst_sample();
        let result = run(
            &source,
            json!({"path": "/var/log/burst", "statsType": "anomalies"}),
        )
        .await;
        let spike = &result.data.as_ref().unwrap()["spike_detection"];
        assert_eq!(spike["status"], "evaluated");
        assert_eq!(spike["first_half_errors"], 10);
        assert_eq!(spike["second_half_errors"], 10);
        assert_eq!(spike["spike_detected"], false);
    }

    #[tokio::test]
    async fn empty_input_reports_no_data() {
        let mut source = MockLogSource::new();
        source.add_dir("/logs");
        let result = run(&source, json!({"path": "/logs"})).await;
        assert!(result.success);
        assert_eq!(
            result.data.as_ref().unwrap()["statistics"]["error"],
            "No logs found"
        );
    }

    #[tokio::test]
    async fn invalid_stats_type() {
        let source = MockLogSource::with_app_sample();
        let result = run(&source, json!({"path": "/var/log/app", "stats_type": "median"})).await;
        assert!(!result.success);
        assert!(result.data.is_none());
        assert!(result.error.unwrap().contains("invalid stats type"));
    }
}
