//! count_log_types: severity tallies across the newest log files.

use async_trait::async_trait;
use la_stats::Level;
use serde_json::{Map, json};

use super::{args, collect_lines};
use crate::error::LogResult;
use crate::types::{LogTool, ToolContext, ToolResult};

pub struct CountLogTypes;

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[async_trait]
impl LogTool for CountLogTypes {
    fn name(&self) -> &str {
        "count_log_types"
    }

    fn description(&self) -> &str {
        "Count log lines by severity level (CRITICAL, ERROR, WARNING, INFO, DEBUG)"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Log directory (server default if omitted)"
                },
                "log_level": {
                    "type": "string",
                    "enum": ["CRITICAL", "ERROR", "WARNING", "INFO", "DEBUG"],
                    "description": "Count only this level"
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
        let level = args::opt_str(&args, "log_level")?.map(str::to_uppercase);

        let lines = collect_lines(ctx, dir).await?;
        let counts = ctx.engine().count_levels(&lines);
        let total_logs = lines.len();

        if let Some(level) = level {
            let count = counts.get_label(&level);
            if Level::parse(&level).is_none() {
                tracing::warn!(level = %level, "unrecognized log level requested");
            }
            return Ok(ToolResult::success(
                "count_log_types",
                json!({
                    "path": dir,
                    "level": level,
                    "count": count,
                    "total_logs": total_logs,
                }),
                format!("{count} {level} lines out of {total_logs} in {dir}"),
            ));
        }

        let denominator = counts.total().max(1) as f64;
        let percentages: Map<String, serde_json::Value> = counts
            .iter()
            .map(|(level, count)| {
                (
                    level.as_str().to_string(),
                    json!(round2(count as f64 / denominator * 100.0)),
                )
            })
            .collect();

        let error_count = counts.get(Level::Error) + counts.get(Level::Critical);
        Ok(ToolResult::success(
            "count_log_types",
            json!({
                "path": dir,
                "counts": counts,
                "total_logs": total_logs,
                "percentages": percentages,
            }),
            format!("{total_logs} lines: {error_count} errors/critical, in {dir}"),
        ))
    }
}
