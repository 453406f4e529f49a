//! E2E tests for error paths and edge cases across crate boundaries.

mod helpers;

use serde_json::json;

use helpers::{TestHarness, data};
use la_log_tools::MockLogSource;
use la_protocol::codes;

/// A missing directory is a tool error, not a protocol error.
#[tokio::test]
async fn e2e_missing_directory() {
    let h = TestHarness::with_app_sample();
    let result = h.call("count_log_types", json!({"path": "/srv/ghost"})).await;

    assert!(result.is_error);
    assert!(result.text().unwrap().contains("directory not found: /srv/ghost"));
    assert!(result.structured_content.is_none());
}

/// An existing directory with no log files fails softly for reads.
#[tokio::test]
async fn e2e_empty_directory_read() {
    let mut source = MockLogSource::new();
    source.add_dir("/srv/empty");
    let h = TestHarness::new(source, "/srv/empty");

    let result = h.call("read_logs", json!({})).await;
    assert!(result.is_error);
    assert!(result.text().unwrap().contains("no log files found"));
    // Failure results still carry the structured tool payload.
    let structured = result.structured_content.unwrap();
    assert_eq!(structured["success"], false);
}

/// Statistics over an empty directory report "No logs found" in the data.
#[tokio::test]
async fn e2e_empty_directory_statistics() {
    let mut source = MockLogSource::new();
    source.add_dir("/srv/empty");
    let h = TestHarness::new(source, "/srv/empty");

    let result = h.call("generate_statistics", json!({})).await;
    assert!(!result.is_error);
    assert_eq!(data(&result)["statistics"]["error"], "No logs found");
}

/// Unrecognized selectors come back as failed tool results.
#[tokio::test]
async fn e2e_invalid_selectors() {
    let h = TestHarness::with_app_sample();

    let stats = h.call("generate_statistics", json!({"stats_type": "everything"})).await;
    assert!(stats.is_error);

    let anomalies = h.call("detect_anomalies", json!({"anomaly_type": "drift"})).await;
    assert!(anomalies.is_error);
    assert!(anomalies.text().unwrap().contains("invalid anomaly type: drift"));

    let report = h.call("generate_report", json!({"report_type": "pdf"})).await;
    assert!(report.is_error);
}

/// Badly typed arguments are rejected before any log is read.
#[tokio::test]
async fn e2e_bad_argument_types() {
    let h = TestHarness::with_app_sample();

    let negative = h.call("read_logs", json!({"lines": -5})).await;
    assert!(negative.is_error);
    assert!(negative.text().unwrap().contains("'lines'"));

    let page_zero = h.call("read_logs", json!({"page": 0})).await;
    assert!(page_zero.is_error);

    let wrong_type = h.call("read_logs", json!({"path": 42})).await;
    assert!(wrong_type.is_error);
}

/// An unknown level name counts as zero rather than failing.
#[tokio::test]
async fn e2e_unknown_level_counts_zero() {
    let h = TestHarness::with_app_sample();
    let result = h.call("count_log_types", json!({"log_level": "TRACE"})).await;

    assert!(!result.is_error);
    assert_eq!(data(&result)["count"], 0);
}

/// Not enough error lines yields an explanatory status instead of a verdict.
#[tokio::test]
async fn e2e_spike_insufficient_data() {
    let h = TestHarness::with_app_sample();
    let result = h.call("detect_anomalies", json!({})).await;

    let anomalies = &data(&result)["anomalies"];
    assert_eq!(anomalies["status"], "insufficient_data");
    assert_eq!(anomalies["message"], "Not enough errors to detect spikes");
    assert!(anomalies.get("spike_detected").is_none());
}

/// Unknown tool names are reported through the tool result.
#[tokio::test]
async fn e2e_unknown_tool() {
    let h = TestHarness::with_app_sample();
    let result = h.call("delete_logs", json!({})).await;

    assert!(result.is_error);
    assert_eq!(result.text(), Some("unknown tool: delete_logs"));
}

/// Protocol mistakes map to JSON-RPC error codes.
#[tokio::test]
async fn e2e_protocol_errors() {
    let h = TestHarness::with_app_sample();

    let unknown = h.request("prompts/list", json!({})).await;
    assert_eq!(unknown.error.unwrap().code, codes::METHOD_NOT_FOUND);

    let bad_params = h.request("tools/call", json!({"arguments": {}})).await;
    assert_eq!(bad_params.error.unwrap().code, codes::INVALID_PARAMS);

    let wrong_version = h
        .dispatcher()
        .handle_line(r#"{"jsonrpc":"1.0","id":9,"method":"ping"}"#)
        .await
        .unwrap();
    assert_eq!(wrong_version.error.unwrap().code, codes::INVALID_REQUEST);
}
