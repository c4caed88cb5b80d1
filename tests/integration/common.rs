//! Shared helpers for the integration suite.

use paypal_adaptive::{Config, ConfigBuilder};
use serde_json::{json, Value};
use wiremock::MockServer;

/// Route RUST_LOG-controlled tracing output to the test harness.
///
/// `try_init` fails on every call after the first; that is fine, the
/// subscriber is process-global.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A builder pre-filled with test credentials, pointed at the mock server.
pub fn config_builder(server: &MockServer) -> ConfigBuilder {
    init_tracing();
    Config::builder("test-user", "test-pass", "test-sig")
        .with_app_id("APP-TEST")
        .with_endpoint_override(server.uri())
}

pub fn config(server: &MockServer) -> Config {
    config_builder(server).build().unwrap()
}

/// A minimal success envelope.
pub fn success_body() -> Value {
    json!({"responseEnvelope": {"ack": "Success"}})
}

/// Names of all X-PAYPAL headers observed on the only received request.
pub async fn paypal_header_names(server: &MockServer) -> Vec<String> {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "expected exactly one request");
    let mut names: Vec<String> = requests[0]
        .headers
        .keys()
        .map(|name| name.as_str().to_ascii_uppercase())
        .filter(|name| name.starts_with("X-PAYPAL-"))
        .collect();
    names.sort();
    names
}
