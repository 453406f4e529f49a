//! Wire types shared by the log-analyzer server and its clients.
//!
//! Newline-delimited JSON-RPC 2.0 with an MCP-style tool surface:
//! `initialize`, `tools/list`, `tools/call`, `ping`.

pub mod rpc;
pub mod tools;

pub use rpc::*;
pub use tools::*;
