//! Request dispatcher: turns JSON-RPC requests into tool executions.
//!
//! Every tool outcome, including argument and I/O errors, is returned as a
//! `tools/call` result with `isError` set. Only malformed requests produce
//! JSON-RPC errors.

use serde_json::{Value, json};
use std::time::Instant;

use la_log_tools::{LogSource, ToolContext, ToolSettings};
use la_protocol::{
    CallToolParams, CallToolResult, InitializeResult, ListToolsResult, Method, PROTOCOL_VERSION,
    ProtocolError, RpcRequest, RpcResponse, ServerInfo, decode_request,
};

use crate::registry::ToolRegistry;

/// Dispatches decoded requests against a registry and log source.
pub struct Dispatcher<'a> {
    registry: &'a ToolRegistry,
    source: &'a dyn LogSource,
    settings: &'a ToolSettings,
    server_name: String,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        registry: &'a ToolRegistry,
        source: &'a dyn LogSource,
        settings: &'a ToolSettings,
        server_name: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            source,
            settings,
            server_name: server_name.into(),
        }
    }

    /// Handle one raw input line. `None` means nothing should be written.
    pub async fn handle_line(&self, line: &str) -> Option<RpcResponse> {
        match decode_request(line) {
            Ok(request) => self.handle(request).await,
            Err(e) => {
                tracing::warn!(error = %e, "rejecting malformed request");
                Some(RpcResponse::failure(Value::Null, e))
            }
        }
    }

    /// Handle a decoded request. Notifications never produce a response.
    pub async fn handle(&self, request: RpcRequest) -> Option<RpcResponse> {
        let outcome = self.route(&request).await;
        let id = request.id?;
        Some(match outcome {
            Ok(result) => RpcResponse::success(id, result),
            Err(e) => RpcResponse::failure(id, e),
        })
    }

    async fn route(&self, request: &RpcRequest) -> Result<Value, ProtocolError> {
        let Some(method) = Method::parse(&request.method) else {
            return Err(ProtocolError::MethodNotFound(request.method.clone()));
        };

        match method {
            Method::Initialize => to_json(&InitializeResult {
                protocol_version: PROTOCOL_VERSION.to_string(),
                server_info: ServerInfo {
                    name: self.server_name.clone(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
                capabilities: json!({ "tools": {} }),
            }),
            Method::Initialized => {
                tracing::info!("client initialized");
                Ok(Value::Null)
            }
            Method::Ping => Ok(json!({})),
            Method::ToolsList => to_json(&ListToolsResult {
                tools: self.registry.list_tools(),
            }),
            Method::ToolsCall => {
                let params: CallToolParams = serde_json::from_value(request.params.clone())
                    .map_err(|e| ProtocolError::InvalidParams(e.to_string()))?;
                to_json(&self.call_tool(params).await)
            }
        }
    }

    /// Run a tool and wrap its outcome as a `tools/call` result.
    pub async fn call_tool(&self, params: CallToolParams) -> CallToolResult {
        let start = Instant::now();
        let name = params.name;

        let Some(idx) = self.registry.lookup(&name) else {
            tracing::warn!(tool = %name, "unknown tool requested");
            return CallToolResult::error(format!("unknown tool: {name}"), None);
        };

        let args = if params.arguments.is_null() {
            json!({})
        } else {
            params.arguments
        };

        let ctx = ToolContext::new(self.source, self.settings);
        let outcome = self.registry.execute(idx, args, &ctx).await;
        let latency_ms = start.elapsed().as_millis() as u64;

        match outcome {
            Ok(result) => {
                tracing::info!(tool = %name, success = result.success, latency_ms, "tool executed");
                let structured = serde_json::to_value(&result).ok();
                if result.success {
                    let text = result
                        .summary
                        .unwrap_or_else(|| format!("Tool '{name}' executed successfully"));
                    CallToolResult::ok(text, structured.unwrap_or(Value::Null))
                } else {
                    let text = result
                        .error
                        .unwrap_or_else(|| format!("Tool '{name}' failed"));
                    CallToolResult::error(text, structured)
                }
            }
            Err(message) => {
                tracing::warn!(tool = %name, error = %message, latency_ms, "tool execution failed");
                CallToolResult::error(message, None)
            }
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<Value, ProtocolError> {
    serde_json::to_value(value).map_err(|e| ProtocolError::Internal(e.to_string()))
}
