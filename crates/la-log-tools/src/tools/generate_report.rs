//! generate_report: render a plaintext or HTML analysis report.

use async_trait::async_trait;
use chrono::Local;
use serde_json::json;

use super::{args, collect_lines};
use crate::error::{LogError, LogResult};
use crate::report::{self, ReportKind};
use crate::types::{LogTool, ToolContext, ToolResult};

pub struct GenerateReport;

#[async_trait]
impl LogTool for GenerateReport {
    fn name(&self) -> &str {
        "generate_report"
    }

    fn description(&self) -> &str {
        "Generate a summary, detailed or HTML log analysis report"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Log directory (server default if omitted)"
                },
                "report_type": {
                    "type": "string",
                    "enum": ["summary", "detailed", "html"],
                    "description": "Report layout (default: summary)",
                    "default": "summary"
                },
                "output_path": {
                    "type": "string",
                    "description": "File to save the full report to"
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
        let kind = match ReportKind::parse(args::str_or(&args, "report_type", "summary")?) {
            Ok(kind) => kind,
            Err(e) => return Ok(ToolResult::failure("generate_report", e.to_string())),
        };
        let output_path = args::opt_str(&args, "output_path")?;

        let lines = collect_lines(ctx, dir).await?;
        let rendered = match report::render(
            kind,
            dir,
            &lines,
            &ctx.engine(),
            Local::now().naive_local(),
        ) {
            Ok(text) => text,
            Err(LogError::Stats(_)) => {
                return Ok(ToolResult::failure(
                    "generate_report",
                    format!("no log lines found in {dir}"),
                ));
            }
            Err(e) => return Err(e),
        };

        if let Some(out) = output_path {
            ctx.source.write_text(out, &rendered).await?;
            tracing::info!(path = %out, report_type = kind.as_str(), "report saved");
        }

        let data = json!({
            "path": dir,
            "report_type": kind.as_str(),
            "saved_to": output_path,
            "report_preview": report::preview(&rendered, ctx.settings.report_preview_chars),
        });

        Ok(ToolResult::success(
            "generate_report",
            data,
            format!("Generated {} report for {} lines in {dir}", kind.as_str(), lines.len()),
        ))
    }
}
