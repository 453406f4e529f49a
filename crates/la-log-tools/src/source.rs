//! Log source abstraction: list, read and write log files.

use async_trait::async_trait;
use std::path::Path;
use std::time::SystemTime;

use crate::error::{LogError, LogResult};

/// Abstraction over a directory of log files.
///
/// Lines keep their trailing newline; the rare-line rule measures it.
#[async_trait]
pub trait LogSource: Send + Sync {
    /// Up to `limit` log files in `dir`, newest modification first.
    async fn list_files(&self, dir: &str, limit: usize) -> LogResult<Vec<String>>;

    /// Read all lines from the given path.
    async fn read_lines(&self, path: &str) -> LogResult<Vec<String>>;

    /// Read the last `count` lines from the given path. A count of 0
    /// returns the whole file.
    async fn tail_lines(&self, path: &str, count: usize) -> LogResult<Vec<String>> {
        let mut all = self.read_lines(path).await?;
        if count > 0 && count < all.len() {
            all.drain(..all.len() - count);
        }
        Ok(all)
    }

    /// Write lines back out verbatim (they carry their own terminators).
    async fn write_lines(&self, path: &str, lines: &[String]) -> LogResult<()>;

    /// Write a rendered document.
    async fn write_text(&self, path: &str, text: &str) -> LogResult<()>;
}

/// Reads logs from the local filesystem.
pub struct FileLogSource {
    extensions: Vec<String>,
}

impl FileLogSource {
    /// Accept files whose extension is in `extensions` (leading dot optional).
    pub fn new(extensions: Vec<String>) -> Self {
        Self { extensions }
    }

    /// Matches on the file name suffix, so dot-files such as `.app.log`
    /// and a bare `.log` count too.
    fn is_log_file(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.extensions.iter().any(|want| {
            let want = want.trim_start_matches('.');
            name.strip_suffix(want).is_some_and(|stem| stem.ends_with('.'))
        })
    }
}

impl Default for FileLogSource {
    fn default() -> Self {
        Self::new(vec![".log".into(), ".txt".into()])
    }
}

fn io_error(path: &str, e: std::io::Error) -> LogError {
    if e.kind() == std::io::ErrorKind::NotFound {
        LogError::NotFound(path.to_string())
    } else {
        LogError::Io(format!("{path}: {e}"))
    }
}

/// Decode bytes as UTF-8, dropping invalid sequences, and split into lines
/// that keep their `\n`. `\r\n` and lone `\r` are normalized to `\n`.
pub fn decode_lines(bytes: &[u8]) -> Vec<String> {
    let text: String = bytes.utf8_chunks().map(|chunk| chunk.valid()).collect();
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    text.split_inclusive('\n').map(String::from).collect()
}

#[async_trait]
impl LogSource for FileLogSource {
    async fn list_files(&self, dir: &str, limit: usize) -> LogResult<Vec<String>> {
        let mut entries = tokio::fs::read_dir(dir).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LogError::NotFound(format!("directory not found: {dir}"))
            } else {
                LogError::Io(format!("{dir}: {e}"))
            }
        })?;

        let mut found: Vec<(SystemTime, String)> = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| io_error(dir, e))? {
            let path = entry.path();
            if !self.is_log_file(&path) {
                continue;
            }
            let meta = match entry.metadata().await {
                Ok(meta) if meta.is_file() => meta,
                Ok(_) => continue,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            let modified = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);
            found.push((modified, path.to_string_lossy().into_owned()));
        }

        found.sort_by(|a, b| b.0.cmp(&a.0));
        found.truncate(limit);
        Ok(found.into_iter().map(|(_, path)| path).collect())
    }

    async fn read_lines(&self, path: &str) -> LogResult<Vec<String>> {
        let bytes = tokio::fs::read(path).await.map_err(|e| io_error(path, e))?;
        Ok(decode_lines(&bytes))
    }

    async fn write_lines(&self, path: &str, lines: &[String]) -> LogResult<()> {
        tokio::fs::write(path, lines.concat())
            .await
            .map_err(|e| io_error(path, e))
    }

    async fn write_text(&self, path: &str, text: &str) -> LogResult<()> {
        tokio::fs::write(path, text)
            .await
            .map_err(|e| io_error(path, e))
    }
}
