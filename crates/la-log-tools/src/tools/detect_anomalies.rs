//! detect_anomalies: error spike or rare-line detection.

use async_trait::async_trait;
use serde_json::json;

use super::{args, collect_lines};
use crate::error::LogResult;
use crate::types::{LogTool, ToolContext, ToolResult};

pub struct DetectAnomalies;

#[async_trait]
impl LogTool for DetectAnomalies {
    fn name(&self) -> &str {
        "detect_anomalies"
    }

    fn description(&self) -> &str {
        "Detect error spikes or abnormally long (rare) log lines"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Log directory (server default if omitted)"
                },
                "anomaly_type": {
                    "type": "string",
                    "enum": ["spike", "rare"],
                    "description": "Detector to run (default: spike)",
                    "default": "spike"
                },
                "window_size": {
                    "type": "integer",
                    "description": "Minimum ERROR/CRITICAL lines for spike detection (default: 10)",
                    "default": 10
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
        let anomaly_type = args::str_or(&args, "anomaly_type", "spike")?;
        let engine = ctx.engine();
        let window_size = args::usize_or(&args, "window_size", engine.config().window_size)?;

        if !matches!(anomaly_type, "spike" | "rare") {
            return Ok(ToolResult::failure(
                "detect_anomalies",
                format!("invalid anomaly type: {anomaly_type}"),
            ));
        }

        let lines = collect_lines(ctx, dir).await?;

        let (anomalies, summary) = if anomaly_type == "spike" {
            let report = engine.spike(&lines, Some(window_size));
            let summary = if report.spike_detected() {
                format!("Error spike detected in {dir}")
            } else {
                format!("No error spike in {dir}")
            };
            (json!(report), summary)
        } else {
            let rare = engine.rare_lines(&lines);
            let summary = format!("{} rare lines in {dir}", rare.len());
            (json!({ "rare_lines": rare, "count": rare.len() }), summary)
        };

        Ok(ToolResult::success(
            "detect_anomalies",
            json!({
                "path": dir,
                "anomaly_type": anomaly_type,
                "anomalies": anomalies,
            }),
            summary,
        ))
    }
}
