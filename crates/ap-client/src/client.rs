//! Core HTTP pipeline for the Adaptive APIs.
//!
//! One call is one POST: select the host from configuration, build the
//! X-PAYPAL security headers, serialize the payload, send, then interpret
//! status, JSON and ack into a single `Result`. No retries, no caching, no
//! request-scoped state outside the call itself.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::error::{Error, ErrorKind, Result};
use crate::response::ApiResponse;

/// Client for the Adaptive Payments / Adaptive Accounts endpoints.
///
/// Holds the HTTP client and the immutable configuration; cloning is cheap
/// and clones share both. Any number of calls may run concurrently.
#[derive(Clone)]
pub struct AdaptiveClient {
    http: reqwest::Client,
    config: Arc<Config>,
}

impl std::fmt::Debug for AdaptiveClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdaptiveClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AdaptiveClient {
    /// Create a client from a validated configuration.
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(crate::USER_AGENT)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    /// The effective configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Full URL for an operation path, e.g. `AdaptivePayments/Pay`.
    pub fn endpoint(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        match self.config.endpoint_override() {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), path),
            None => format!("https://{}/{}", self.config.hostname(), path),
        }
    }

    /// The exact outbound header set, derived from configuration only.
    ///
    /// Always the six security/format headers; the sandbox-email, device-IP
    /// and subject headers appear iff the corresponding field is configured.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let cfg = &self.config;
        let mut headers = vec![
            ("X-PAYPAL-SECURITY-USERID", cfg.user_id().to_string()),
            ("X-PAYPAL-SECURITY-PASSWORD", cfg.password().to_string()),
            ("X-PAYPAL-SECURITY-SIGNATURE", cfg.signature().to_string()),
            ("X-PAYPAL-APPLICATION-ID", cfg.app_id().to_string()),
            ("X-PAYPAL-REQUEST-DATA-FORMAT", cfg.request_format().to_string()),
            ("X-PAYPAL-RESPONSE-DATA-FORMAT", cfg.response_format().to_string()),
        ];
        if let Some(email) = cfg.sandbox_email_address() {
            headers.push(("X-PAYPAL-SANDBOX-EMAIL-ADDRESS", email.to_string()));
        }
        if let Some(ip) = cfg.device_ip_address() {
            headers.push(("X-PAYPAL-DEVICE-IPADDRESS", ip.to_string()));
        }
        if let Some(subject) = cfg.subject() {
            headers.push(("X-PAYPAL-SECURITY-SUBJECT", subject.to_string()));
        }
        headers
    }

    /// POST a payload to an operation endpoint and interpret the reply.
    ///
    /// The returned response pairs the parsed body with the HTTP status code.
    /// Remote-reported failures (`Ack`) and non-2xx statuses (`HttpStatus`)
    /// carry the body on the error for caller inspection.
    #[instrument(skip(self, payload), fields(path = %path))]
    pub async fn call(&self, path: &str, payload: &Value) -> Result<ApiResponse> {
        let url = self.endpoint(path);
        // Payloads that are already strings are sent as-is.
        let body = match payload {
            Value::String(s) => s.clone(),
            other => serde_json::to_string(other)?,
        };

        let mut request = self.http.post(&url);
        for (name, value) in self.headers() {
            request = request.header(name, value);
        }

        debug!(url = %url, bytes = body.len(), "Sending request");

        let response = request.body(body).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        if (200..300).contains(&status) {
            debug!(status, "Response received");
        } else {
            info!(status, "Non-success response");
        }

        self.interpret(status, text)
    }

    /// Turn a terminal transport outcome into a success or classified error.
    fn interpret(&self, status: u16, text: String) -> Result<ApiResponse> {
        if self.config.response_format() != "JSON" {
            // Non-JSON formats carry no envelope to inspect; hand back the
            // raw text, still classifying the status.
            if !(200..300).contains(&status) {
                return Err(Error::new(ErrorKind::HttpStatus {
                    status,
                    body: Value::String(text),
                }));
            }
            return Ok(ApiResponse::new(status, Value::String(text)));
        }

        let body: Value = match serde_json::from_str(&text) {
            Ok(body) => body,
            Err(e) => {
                // The status that actually arrived travels with the error,
                // independent of the parse failure.
                return Err(Error::with_source(
                    ErrorKind::InvalidResponse { status, body: text },
                    e,
                ));
            }
        };

        if !(200..300).contains(&status) {
            return Err(Error::new(ErrorKind::HttpStatus { status, body }));
        }

        let response = ApiResponse::new(status, body);
        if response.ack_success() {
            Ok(response)
        } else {
            let ack = response.ack().unwrap_or_default().to_string();
            Err(Error::new(ErrorKind::Ack { ack, response }))
        }
    }
}
