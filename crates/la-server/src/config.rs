//! Server configuration, loadable from TOML and the environment.

use la_log_tools::ToolSettings;
use serde::Deserialize;

/// Environment variable overriding `tools.default_dir`.
pub const DIR_ENV: &str = "LOG_ANALYZER_DIR";

/// Top-level configuration for the log analyzer server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Name reported by `initialize`.
    #[serde(default = "default_name")]
    pub name: String,
    /// Tool defaults and engine thresholds.
    #[serde(default)]
    pub tools: ToolSettings,
}

fn default_name() -> String {
    "log-analyzer".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            tools: ToolSettings::default(),
        }
    }
}

impl ServerConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults; then apply
    /// environment overrides.
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_override(std::env::var(DIR_ENV).ok());
        Ok(config)
    }

    fn apply_env_override(&mut self, dir: Option<String>) {
        if let Some(dir) = dir.filter(|d| !d.is_empty()) {
            self.tools.default_dir = dir;
        }
    }
}
