//! read_logs: tail the newest log files with optional filtering and paging.

use async_trait::async_trait;
use serde_json::json;

use super::{args, file_name};
use crate::error::{LogError, LogResult};
use crate::types::{LogTool, ToolContext, ToolResult};

pub struct ReadLogs;

#[async_trait]
impl LogTool for ReadLogs {
    fn name(&self) -> &str {
        "read_logs"
    }

    fn description(&self) -> &str {
        "Read the latest lines of the newest log files with optional filtering and pagination"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Log directory (server default if omitted)"
                },
                "filter": {
                    "type": "string",
                    "description": "Case-insensitive substring to keep"
                },
                "lines": {
                    "type": "integer",
                    "description": "Lines read from the end of each file, 0 for all (default: 100)",
                    "default": 100
                },
                "file_limit": {
                    "type": "integer",
                    "description": "Maximum number of files to read (default: 5)",
                    "default": 5
                },
                "page": {
                    "type": "integer",
                    "description": "1-based page number, 50 lines per page (default: 1)",
                    "default": 1
                }
            }
        })
    }

    async fn execute(
        &self,
        args: serde_json::Value,
        ctx: &ToolContext<'_>,
    ) -> LogResult<ToolResult> {
        let settings = ctx.settings;
        let dir = args::directory(&args, settings)?;
        let filter = args::opt_str(&args, "filter")?.map(str::to_uppercase);
        let tail = args::usize_or(&args, "lines", settings.tail_lines)?;
        let file_limit = args::usize_or(&args, "file_limit", settings.file_limit)?;
        let page = args::usize_or(&args, "page", 1)?;
        if page == 0 {
            return Err(LogError::InvalidArgument("'page' must be at least 1".into()));
        }

        let files = ctx.source.list_files(dir, file_limit).await?;
        if files.is_empty() {
            return Ok(ToolResult::failure(
                "read_logs",
                format!("no log files found in {dir}"),
            ));
        }

        let mut lines = Vec::new();
        for file in &files {
            lines.extend(ctx.source.tail_lines(file, tail).await?);
        }

        if let Some(ref needle) = filter {
            lines.retain(|line| line.to_uppercase().contains(needle.as_str()));
        }

        let total_found = lines.len();
        let page_lines: Vec<&str> = lines
            .iter()
            .skip((page - 1).saturating_mul(settings.page_size))
            .take(settings.page_size)
            .map(|line| line.trim())
            .collect();

        let data = json!({
            "path": dir,
            "total_found": total_found,
            "page": page,
            "page_size": settings.page_size,
            "lines": page_lines,
            "files_read": files.iter().map(|f| file_name(f)).collect::<Vec<_>>(),
            "filter_applied": filter.as_deref().unwrap_or("None"),
        });

        let shown = page_lines.len();
        Ok(ToolResult::success(
            "read_logs",
            data,
            format!(
                "Showing {shown} of {total_found} lines (page {page}) from {} files in {dir}",
                files.len()
            ),
        ))
    }
}
