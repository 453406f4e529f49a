//! Line-oriented transport driver.
//!
//! Reads one JSON-RPC message per line, dispatches it, and writes each
//! response as a single line. Runs until the reader hits EOF; only I/O
//! errors end it early.

use la_protocol::{ProtocolError, RpcResponse};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::dispatch::Dispatcher;

/// Drive the request/response loop over any buffered reader and writer.
pub async fn run<R, W>(mut reader: R, mut writer: W, dispatcher: &Dispatcher<'_>) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    let mut handled = 0u64;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let response = match std::str::from_utf8(&buf) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                dispatcher.handle_line(line).await
            }
            Err(e) => {
                tracing::warn!(error = %e, bytes = buf.len(), "rejecting non-UTF-8 input line");
                Some(RpcResponse::failure(
                    Value::Null,
                    ProtocolError::Parse(format!("invalid UTF-8: {e}")),
                ))
            }
        };
        let Some(response) = response else {
            continue;
        };
        handled += 1;

        let mut payload = serde_json::to_vec(&response)?;
        payload.push(b'\n');
        writer.write_all(&payload).await?;
        writer.flush().await?;
    }

    tracing::info!(responses = handled, "input closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ToolRegistry;
    use la_log_tools::{MockLogSource, ToolSettings};
    use serde_json::Value;

    async fn drive(input: &str) -> Vec<Value> {
        let registry = ToolRegistry::with_defaults();
        let source = MockLogSource::with_app_sample();
        let settings = ToolSettings::default();
        let dispatcher = Dispatcher::new(&registry, &source, &settings, "log-analyzer");

        let mut out = Vec::new();
        run(input.as_bytes(), &mut out, &dispatcher).await.unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn one_response_per_request() {
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"ping"}"#,
            "\n",
        );
        let responses = drive(input).await;
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["id"], 1);
        assert_eq!(responses[1]["id"], 2);
        assert!(responses[1]["result"].is_object());
    }

    #[tokio::test]
    async fn garbage_line_does_not_stop_loop() {
        let input = concat!(
            "not json\n",
            r#"{"jsonrpc":"2.0","id":5,"method":"tools/list"}"#,
            "\n",
        );
        let responses = drive(input).await;
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["error"]["code"], -32700);
        assert_eq!(responses[1]["result"]["tools"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn invalid_utf8_line_gets_parse_error() {
        let registry = ToolRegistry::with_defaults();
        let source = MockLogSource::with_app_sample();
        let settings = ToolSettings::default();
        let dispatcher = Dispatcher::new(&registry, &source, &settings, "log-analyzer");

        let input: &[u8] = b"\xff\xfe garbage\n{\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"ping\"}\n";
        let mut out = Vec::new();
        run(input, &mut out, &dispatcher).await.unwrap();

        let responses: Vec<Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(responses.len(), 2);
        assert!(responses[0]["id"].is_null());
        assert_eq!(responses[0]["error"]["code"], -32700);
        assert_eq!(responses[1]["id"], 2);
        assert_eq!(responses[1]["result"], serde_json::json!({}));
    }

    #[tokio::test]
    async fn last_line_without_newline_is_handled() {
        let responses = drive(r#"{"jsonrpc":"2.0","id":3,"method":"ping"}"#).await;
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["id"], 3);
    }

    #[tokio::test]
    async fn empty_input_writes_nothing() {
        assert!(drive("").await.is_empty());
    }
}
