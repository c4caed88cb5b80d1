//! Parsed API responses.
//!
//! The Adaptive APIs return loosely-shaped JSON bodies; `ApiResponse` pairs
//! the parsed body with the HTTP status it arrived with and gives narrow
//! accessors for the envelope fields the pipeline and the operation catalogs
//! care about. The value is immutable: augmentation (redirect URLs, the
//! `httpStatusCode` field) always produces a new value.

use serde_json::Value;

/// Whole-string ack values the service uses to report success.
const SUCCESS_ACKS: [&str; 2] = ["Success", "SuccessWithWarning"];

/// A parsed response body paired with the HTTP status code it arrived with.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    http_status: u16,
    body: Value,
}

impl ApiResponse {
    /// Pair a parsed body with its HTTP status code.
    pub fn new(http_status: u16, body: Value) -> Self {
        Self { http_status, body }
    }

    /// The HTTP status code the response arrived with.
    pub fn http_status(&self) -> u16 {
        self.http_status
    }

    /// The parsed response body.
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// The `responseEnvelope.ack` field, if present.
    pub fn ack(&self) -> Option<&str> {
        self.body
            .get("responseEnvelope")
            .and_then(|e| e.get("ack"))
            .and_then(Value::as_str)
    }

    /// Whether the ack reports success.
    ///
    /// Exact, case-sensitive whole-string match; `" Success"` or `"success"`
    /// do not count.
    pub fn ack_success(&self) -> bool {
        self.ack().is_some_and(|a| SUCCESS_ACKS.contains(&a))
    }

    /// The `payKey` field, if present.
    pub fn pay_key(&self) -> Option<&str> {
        self.body.get("payKey").and_then(Value::as_str)
    }

    /// The `preapprovalKey` field, if present.
    pub fn preapproval_key(&self) -> Option<&str> {
        self.body.get("preapprovalKey").and_then(Value::as_str)
    }

    /// The `paymentExecStatus` field, if present.
    pub fn payment_exec_status(&self) -> Option<&str> {
        self.body.get("paymentExecStatus").and_then(Value::as_str)
    }

    /// Look up a top-level field by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.body.get(field)
    }

    /// Return a new response with one top-level field added.
    ///
    /// Non-object bodies are returned unchanged.
    pub fn with_field(mut self, field: &str, value: impl Into<Value>) -> Self {
        if let Some(map) = self.body.as_object_mut() {
            map.insert(field.to_string(), value.into());
        }
        self
    }

    /// Consume the response, materializing the `httpStatusCode` field the
    /// original wire shape carried.
    pub fn into_value(self) -> Value {
        let mut body = self.body;
        if let Some(map) = body.as_object_mut() {
            map.insert("httpStatusCode".to_string(), self.http_status.into());
        }
        body
    }

    /// Consume the response, returning the body alone.
    pub fn into_body(self) -> Value {
        self.body
    }
}
