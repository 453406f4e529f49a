//! Log analyzer: serves log statistics and anomaly tools over stdio.
//!
//! Requests arrive on stdin as newline-delimited JSON-RPC; responses go to
//! stdout. Logs are written as JSON to stderr so they never mix with the
//! protocol stream.

use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use la_log_tools::FileLogSource;
use la_server::config::ServerConfig;
use la_server::dispatch::Dispatcher;
use la_server::registry::ToolRegistry;
use la_server::stdio_loop;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "log-analyzer starting");

    // ── Load config ─────────────────────────────────────────────
    let config_path = std::env::args().nth(1);
    let config = ServerConfig::load(config_path.as_deref())?;
    tracing::info!(
        name = %config.name,
        default_dir = %config.tools.default_dir,
        "config loaded"
    );

    // ── Build tool registry ─────────────────────────────────────
    let registry = ToolRegistry::with_defaults();
    tracing::info!(tool_count = registry.len(), "tool registry initialized");

    // ── Log source ──────────────────────────────────────────────
    let log_source = FileLogSource::new(config.tools.extensions.clone());

    let dispatcher = Dispatcher::new(&registry, &log_source, &config.tools, config.name.clone());
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    tracing::info!("log-analyzer ready");

    tokio::select! {
        result = stdio_loop::run(stdin, stdout, &dispatcher) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
    }

    tracing::info!("log-analyzer stopped");
    Ok(())
}
