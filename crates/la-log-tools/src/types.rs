//! Tool result type, execution context and the LogTool trait.

use async_trait::async_trait;
use la_stats::StatsEngine;
use serde::{Deserialize, Serialize};

use crate::error::LogResult;
use crate::settings::ToolSettings;
use crate::source::LogSource;

// ── Tool Result ───────────────────────────────────────────────

/// Result of executing a log analysis tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Tool name that produced this result.
    pub tool_name: String,
    /// Whether the tool execution succeeded.
    pub success: bool,
    /// Structured result data (JSON).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// Human-readable summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Error message if success is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ToolResult {
    pub fn success(
        tool_name: impl Into<String>,
        data: serde_json::Value,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: true,
            data: Some(data),
            summary: Some(summary.into()),
            error: None,
        }
    }

    pub fn failure(tool_name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: false,
            data: None,
            summary: None,
            error: Some(error.into()),
        }
    }
}

// ── Tool Context ──────────────────────────────────────────────

/// Everything a tool needs besides its arguments.
pub struct ToolContext<'a> {
    pub source: &'a dyn LogSource,
    pub settings: &'a ToolSettings,
}

impl<'a> ToolContext<'a> {
    pub fn new(source: &'a dyn LogSource, settings: &'a ToolSettings) -> Self {
        Self { source, settings }
    }

    /// Engine configured from the tool settings.
    pub fn engine(&self) -> StatsEngine {
        StatsEngine::new(self.settings.analysis.clone())
    }
}

// ── LogTool Trait ─────────────────────────────────────────────

/// Trait for log analysis tools, dispatched by name.
#[async_trait]
pub trait LogTool: Send + Sync {
    /// Tool name (e.g., "count_log_types").
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// JSON Schema describing accepted arguments.
    fn parameters_schema(&self) -> serde_json::Value;

    /// Execute the tool with JSON arguments.
    async fn execute(&self, args: serde_json::Value, ctx: &ToolContext<'_>)
    -> LogResult<ToolResult>;
}
