//! Tool registry: looks tools up by name for dispatch.

use std::collections::HashMap;

use la_log_tools::{LogTool, ToolContext, ToolResult};
use la_protocol::ToolDescriptor;

/// Registered log tools, indexed by name.
pub struct ToolRegistry {
    tools: Vec<Box<dyn LogTool>>,
    /// Map from tool name to index into `tools`.
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new(tools: Vec<Box<dyn LogTool>>) -> Self {
        let index = tools
            .iter()
            .enumerate()
            .map(|(i, tool)| (tool.name().to_string(), i))
            .collect();
        Self { tools, index }
    }

    /// Build with every tool from `la-log-tools`.
    pub fn with_defaults() -> Self {
        Self::new(la_log_tools::tools::all_tools())
    }

    /// Look up a tool index by name.
    pub fn lookup(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Execute a tool by index. Tool errors come back as their message.
    pub async fn execute(
        &self,
        index: usize,
        args: serde_json::Value,
        ctx: &ToolContext<'_>,
    ) -> Result<ToolResult, String> {
        let tool = self
            .tools
            .get(index)
            .ok_or_else(|| format!("no tool at index {index}"))?;
        tool.execute(args, ctx).await.map_err(|e| e.to_string())
    }

    /// Descriptors for `tools/list`, in registration order.
    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        self.tools
            .iter()
            .map(|tool| ToolDescriptor {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                input_schema: tool.parameters_schema(),
            })
            .collect()
    }

    /// Total number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
