//! Mock log source for testing: serves pre-loaded files and records writes.

use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;

use crate::error::{LogError, LogResult};
use crate::source::LogSource;

/// In-memory log directory tree.
///
/// Files added later count as newer, so `list_files` returns them first.
pub struct MockLogSource {
    files: Vec<(String, Vec<String>)>,
    dirs: BTreeSet<String>,
    written: Mutex<HashMap<String, String>>,
}

fn parent_dir(path: &str) -> &str {
    path.rsplit_once('/').map_or("", |(dir, _)| dir)
}

impl MockLogSource {
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            dirs: BTreeSet::new(),
            written: Mutex::new(HashMap::new()),
        }
    }

    /// Register an (initially empty) directory.
    pub fn add_dir(&mut self, dir: impl Into<String>) {
        self.dirs.insert(dir.into());
    }

    /// Add a file with the given lines. Its directory is registered too.
    pub fn add_file(&mut self, path: impl Into<String>, lines: Vec<String>) {
        let path = path.into();
        self.dirs.insert(parent_dir(&path).to_string());
        self.files.retain(|(p, _)| *p != path);
        self.files.push((path, lines));
    }

    /// Contents written through `write_lines`/`write_text`, by path.
    pub fn written(&self, path: &str) -> Option<String> {
        self.written
            .lock()
            .ok()
            .and_then(|w| w.get(path).cloned())
    }

    /// Create a mock with two bracketed-level application logs under
    /// `/var/log/app`.
    pub fn with_app_sample() -> Self {
        let mut m = Self::new();
        m.add_file(
            "/var/log/app/worker.log",
            vec![
                "2024-01-15 11:59:00 [INFO] Worker pool started with 4 threads\n".into(),
                "2024-01-15 11:59:10 [DEBUG] Polling queue jobs\n".into(),
                "2024-01-15 11:59:20 [WARNING] Queue latency above 2s\n".into(),
                "2024-01-15 11:59:30 [ERROR] Timeout waiting for job 42\n".into(),
            ],
        );
        m.add_file(
            "/var/log/app/app.log",
            vec![
                "2024-01-15 12:00:01 [INFO] Starting application\n".into(),
                "2024-01-15 12:00:05 [ERROR] Database connection refused\n".into(),
                "2024-01-15 12:00:10 [WARNING] Disk usage at 85%\n".into(),
                "2024-01-15 12:00:15 [DEBUG] Cache warmed\n".into(),
                "2024-01-15 12:00:20 [ERROR] Database connection refused\n".into(),
                "2024-01-15 12:00:25 [CRITICAL] Out of memory, killing worker\n".into(),
                "\n".into(),
                "2024-01-15 12:00:30 [INFO] Restarting worker process after memory pressure was detected on node-7 (rss=1.9GiB, limit=2GiB)\n".into(),
                "2024-01-15 12:00:35 [ERROR] Disk write failed on /data\n".into(),
                "2024-01-15 12:00:40 [INFO] Health check ok\n".into(),
            ],
        );
        m
    }

    /// Create a mock with an error burst long enough for spike detection.
    pub fn with_error_burst_sample() -> Self {
        let mut m = Self::new();
        let mut lines: Vec<String> = (0..5)
            .map(|i| format!("[ERROR] early failure {i}\n"))
            .collect();
        lines.extend((0..10).map(|i| format!("[INFO] steady state {i}\n")));
        lines.extend((0..15).map(|i| format!("[CRITICAL] cascade failure {i}\n")));
        m.add_file("/var/log/burst/service.log", lines);
        m
    }
}

impl Default for MockLogSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LogSource for MockLogSource {
    async fn list_files(&self, dir: &str, limit: usize) -> LogResult<Vec<String>> {
        let dir = dir.trim_end_matches('/');
        if !self.dirs.contains(dir) {
            return Err(LogError::NotFound(format!("directory not found: {dir}")));
        }
        Ok(self
            .files
            .iter()
            .rev()
            .filter(|(path, _)| parent_dir(path) == dir)
            .take(limit)
            .map(|(path, _)| path.clone())
            .collect())
    }

    async fn read_lines(&self, path: &str) -> LogResult<Vec<String>> {
        self.files
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, lines)| lines.clone())
            .ok_or_else(|| LogError::NotFound(path.to_string()))
    }

    async fn write_lines(&self, path: &str, lines: &[String]) -> LogResult<()> {
        self.write_text(path, &lines.concat()).await
    }

    async fn write_text(&self, path: &str, text: &str) -> LogResult<()> {
        let mut written = self
            .written
            .lock()
            .map_err(|_| LogError::Other("mock write lock poisoned".into()))?;
        written.insert(path.to_string(), text.to_string());
        Ok(())
    }
}
