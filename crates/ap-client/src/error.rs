//! Error types for ap-client.

use serde_json::Value;

use crate::response::ApiResponse;

/// Result type alias for ap-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for ap-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if the transport failed before a response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport(_))
    }

    /// Returns true if this is a local pre-network validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind, ErrorKind::Validation(_))
    }

    /// The HTTP status code observed, if a response was received at all.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::InvalidResponse { status, .. } => Some(*status),
            ErrorKind::HttpStatus { status, .. } => Some(*status),
            ErrorKind::Ack { response, .. } => Some(response.http_status()),
            _ => None,
        }
    }

    /// The remote response body attached to this error, if any.
    ///
    /// Populated for `Ack` (the full augmented response) and `HttpStatus`
    /// (the best-available body), so callers can inspect the service's own
    /// diagnostic fields.
    pub fn response(&self) -> Option<&Value> {
        match &self.kind {
            ErrorKind::HttpStatus { body, .. } => Some(body),
            ErrorKind::Ack { response, .. } => Some(response.body()),
            _ => None,
        }
    }

    /// The raw, unparsed body for `InvalidResponse` errors.
    pub fn raw_body(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::InvalidResponse { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Invalid or incomplete configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required identifier was missing before any network call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The transport failed to complete the exchange (DNS, TLS, reset, ...).
    #[error("Transport error: {0}")]
    Transport(String),

    /// HTTP transport succeeded but the body is not the expected JSON.
    #[error("Invalid response: body is not valid JSON (HTTP {status})")]
    InvalidResponse { status: u16, body: String },

    /// HTTP status code outside [200, 300).
    #[error("HTTP error: {status}")]
    HttpStatus { status: u16, body: Value },

    /// The remote envelope reported an outcome other than success.
    #[error("API error: ack was \"{ack}\"")]
    Ack { ack: String, response: ApiResponse },
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::with_source(ErrorKind::Transport(err.to_string()), err)
    }
}

impl From<serde_json::Error> for Error {
    // Payload encoding happens before any I/O, so a serialization failure is
    // a local validation failure. Response parse errors are mapped to
    // `InvalidResponse` explicitly by the pipeline, never through this impl.
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(
            ErrorKind::Validation(format!("payload is not serializable: {}", err)),
            err,
        )
    }
}
