//! Log access and analysis tools for log-analyzer.
//!
//! Provides a `LogSource` abstraction over a directory of `.log`/`.txt`
//! files (filesystem or in-memory mock), plaintext/HTML report rendering,
//! and six analysis tools: read_logs, count_log_types, generate_statistics,
//! extract_critical_logs, detect_anomalies, generate_report.

pub mod error;
pub mod mock;
pub mod report;
pub mod settings;
pub mod source;
pub mod tools;
pub mod types;

// Re-export key types for convenience
pub use error::{LogError, LogResult};
pub use mock::MockLogSource;
pub use report::ReportKind;
pub use settings::ToolSettings;
pub use source::{FileLogSource, LogSource};
pub use types::{LogTool, ToolContext, ToolResult};
