//! extract_critical_logs: collect lines of one severity, optionally saving them.

use async_trait::async_trait;
use serde_json::json;

use super::{args, collect_lines};
use crate::error::LogResult;
use crate::types::{LogTool, ToolContext, ToolResult};

pub struct ExtractCriticalLogs;

#[async_trait]
impl LogTool for ExtractCriticalLogs {
    fn name(&self) -> &str {
        "extract_critical_logs"
    }

    fn description(&self) -> &str {
        "Extract lines of a given severity and optionally save them to a file"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Log directory (server default if omitted)"
                },
                "severity": {
                    "type": "string",
                    "enum": ["CRITICAL", "ERROR", "WARNING"],
                    "description": "Severity label to extract (default: CRITICAL)",
                    "default": "CRITICAL"
                },
                "output_path": {
                    "type": "string",
                    "description": "File to write the extracted lines to"
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
        let severity = args::str_or(&args, "severity", "CRITICAL")?.to_uppercase();
        let output_path = args::opt_str(&args, "output_path")?;

        let lines = collect_lines(ctx, dir).await?;
        let extracted: Vec<String> = lines
            .into_iter()
            .filter(|line| line.contains(severity.as_str()))
            .collect();

        if let Some(out) = output_path {
            ctx.source.write_lines(out, &extracted).await?;
            tracing::info!(path = %out, count = extracted.len(), severity = %severity, "extracted lines saved");
        }

        let total_found = extracted.len();
        let preview: Vec<&str> = extracted
            .iter()
            .take(ctx.settings.extract_preview)
            .map(|line| line.trim())
            .collect();

        let data = json!({
            "path": dir,
            "severity": severity,
            "count": total_found,
            "logs": preview,
            "saved_to": output_path,
            "total_found": total_found,
        });

        Ok(ToolResult::success(
            "extract_critical_logs",
            data,
            format!("Extracted {total_found} {severity} lines from {dir}"),
        ))
    }
}
