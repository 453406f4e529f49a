//! Log analyzer server: library crate behind the `log-analyzer` binary.
//!
//! Re-exports all modules so external crates (e.g. `la-e2e-tests`) can
//! drive the `Dispatcher` and `ToolRegistry` directly.

pub mod config;
pub mod dispatch;
pub mod registry;
pub mod stdio_loop;
