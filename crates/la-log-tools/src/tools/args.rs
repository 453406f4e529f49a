//! Argument extraction shared by all tools.
//!
//! Keys are snake_case; the camelCase spelling is accepted as well, and
//! `customPath` is an alias for `path`.

use serde_json::Value;

use crate::error::{LogError, LogResult};
use crate::settings::ToolSettings;

fn camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper = false;
    for c in key.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn lookup<'a>(args: &'a Value, key: &str) -> Option<&'a Value> {
    args.get(key)
        .or_else(|| args.get(camel_case(key)))
        .filter(|v| !v.is_null())
}

/// Optional string argument; empty strings count as absent.
pub fn opt_str<'a>(args: &'a Value, key: &str) -> LogResult<Option<&'a str>> {
    match lookup(args, key) {
        None => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(LogError::InvalidArgument(format!(
            "'{key}' must be a string, got {other}"
        ))),
    }
}

/// String argument with a default.
pub fn str_or<'a>(args: &'a Value, key: &str, default: &'a str) -> LogResult<&'a str> {
    Ok(opt_str(args, key)?.unwrap_or(default))
}

/// Non-negative integer argument with a default.
pub fn usize_or(args: &Value, key: &str, default: usize) -> LogResult<usize> {
    match lookup(args, key) {
        None => Ok(default),
        Some(v) => v.as_u64().map(|n| n as usize).ok_or_else(|| {
            LogError::InvalidArgument(format!("'{key}' must be a non-negative integer, got {v}"))
        }),
    }
}

/// Log directory: `path`, then `customPath`, then the configured default.
pub fn directory<'a>(args: &'a Value, settings: &'a ToolSettings) -> LogResult<&'a str> {
    if let Some(dir) = opt_str(args, "path")? {
        return Ok(dir);
    }
    Ok(opt_str(args, "custom_path")?.unwrap_or(&settings.default_dir))
}
