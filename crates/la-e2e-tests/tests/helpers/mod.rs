//! Shared test harness for E2E integration tests.
//!
//! Wires a log source, the default tool registry, and the dispatcher the
//! same way the `log-analyzer` binary does, so tests exercise the full
//! request path from JSON-RPC line to tool output.

#![allow(dead_code)]

use std::path::PathBuf;

use serde_json::{Value, json};

use la_log_tools::{FileLogSource, LogSource, MockLogSource, ToolSettings};
use la_protocol::{CallToolParams, CallToolResult, RpcRequest, RpcResponse};
use la_server::dispatch::Dispatcher;
use la_server::registry::ToolRegistry;
use la_server::stdio_loop;

/// End-to-end harness around a log source and the server dispatcher.
pub struct TestHarness<S: LogSource = MockLogSource> {
    pub registry: ToolRegistry,
    pub source: S,
    pub settings: ToolSettings,
}

impl TestHarness<MockLogSource> {
    /// Harness over the two-file application sample in `/var/log/app`,
    /// which is also the default directory.
    pub fn with_app_sample() -> Self {
        Self::new(MockLogSource::with_app_sample(), "/var/log/app")
    }

    /// Harness over the error-burst sample in `/var/log/burst`.
    pub fn with_error_burst() -> Self {
        Self::new(MockLogSource::with_error_burst_sample(), "/var/log/burst")
    }
}

impl<S: LogSource> TestHarness<S> {
    pub fn new(source: S, default_dir: &str) -> Self {
        Self {
            registry: ToolRegistry::with_defaults(),
            source,
            settings: ToolSettings {
                default_dir: default_dir.to_string(),
                ..ToolSettings::default()
            },
        }
    }

    pub fn dispatcher(&self) -> Dispatcher<'_> {
        Dispatcher::new(&self.registry, &self.source, &self.settings, "log-analyzer")
    }

    /// Send a request with id 1 and return its response.
    pub async fn request(&self, method: &str, params: Value) -> RpcResponse {
        self.dispatcher()
            .handle(RpcRequest::new(1, method, params))
            .await
            .expect("request with an id must get a response")
    }

    /// Call a tool through `tools/call` and decode the result.
    pub async fn call(&self, name: &str, arguments: Value) -> CallToolResult {
        let resp = self
            .request("tools/call", json!({ "name": name, "arguments": arguments }))
            .await;
        assert!(resp.error.is_none(), "unexpected rpc error: {:?}", resp.error);
        serde_json::from_value(resp.result.expect("result")).expect("CallToolResult")
    }

    /// Call a tool directly, bypassing JSON-RPC framing.
    pub async fn call_direct(&self, name: &str, arguments: Value) -> CallToolResult {
        self.dispatcher()
            .call_tool(CallToolParams {
                name: name.to_string(),
                arguments,
            })
            .await
    }

    /// Feed raw newline-delimited input through the stdio loop and return
    /// every response line decoded as JSON.
    pub async fn run_stdio(&self, input: &str) -> Vec<Value> {
        self.run_stdio_bytes(input.as_bytes()).await
    }

    /// Same as `run_stdio`, for input that may not be valid UTF-8.
    pub async fn run_stdio_bytes(&self, input: &[u8]) -> Vec<Value> {
        let mut out = Vec::new();
        stdio_loop::run(input, &mut out, &self.dispatcher())
            .await
            .expect("stdio loop");
        String::from_utf8(out)
            .expect("utf-8 output")
            .lines()
            .map(|l| serde_json::from_str(l).expect("json line"))
            .collect()
    }
}

/// Structured `data` payload of a successful tool call.
pub fn data(result: &CallToolResult) -> &Value {
    &result
        .structured_content
        .as_ref()
        .expect("structured content")["data"]
}

/// Temporary directory that is removed on drop.
pub struct TempLogDir {
    pub path: PathBuf,
}

impl TempLogDir {
    pub fn new() -> Self {
        let path = std::env::temp_dir().join(format!("la-e2e-{}", uuid::Uuid::now_v7()));
        std::fs::create_dir_all(&path).expect("create temp dir");
        Self { path }
    }

    pub fn write(&self, name: &str, contents: &[u8]) {
        std::fs::write(self.path.join(name), contents).expect("write log file");
    }

    pub fn path_str(&self) -> &str {
        self.path.to_str().expect("utf-8 temp path")
    }

    /// Harness over this directory through the real filesystem source.
    pub fn harness(&self) -> TestHarness<FileLogSource> {
        TestHarness::new(FileLogSource::default(), self.path_str())
    }
}

impl Drop for TempLogDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}
