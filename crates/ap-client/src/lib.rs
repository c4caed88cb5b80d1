//! # ap-client
//!
//! Core HTTP client infrastructure for the PayPal Adaptive APIs.
//!
//! This crate provides the single request/response pipeline shared by the
//! API-surface crates (`paypal-ap-payments`, `paypal-ap-accounts`):
//!
//! - Immutable, validated configuration with sandbox/production selection
//! - Deterministic X-PAYPAL security header construction
//! - One HTTPS POST per call, no retries, fully buffered responses
//! - Status / JSON / ack interpretation into a unified error taxonomy
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │           (ap-payments, ap-accounts)                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    AdaptiveClient                           │
//! │  - Holds Config + HTTP client                               │
//! │  - Builds headers, serializes payload, POSTs once           │
//! │  - Interprets status, JSON and responseEnvelope.ack         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use paypal_ap_client::{AdaptiveClient, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), paypal_ap_client::Error> {
//!     let config = Config::builder("userid", "password", "signature")
//!         .sandbox(true)
//!         .build()?;
//!     let client = AdaptiveClient::new(config)?;
//!
//!     let response = client
//!         .call("AdaptivePayments/ConvertCurrency", &serde_json::json!({
//!             "baseAmountList": {"currency": [{"code": "USD", "amount": "10.00"}]},
//!             "convertToCurrencyList": {"currencyCode": ["EUR"]},
//!         }))
//!         .await?;
//!
//!     println!("HTTP {}", response.http_status());
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod response;

pub use client::AdaptiveClient;
pub use config::{
    Config, ConfigBuilder, APPROVAL_URL, PREAPPROVAL_URL, SANDBOX_APPROVAL_URL,
    SANDBOX_PREAPPROVAL_URL,
};
pub use error::{Error, ErrorKind, Result};
pub use response::ApiResponse;

/// Production service hostname.
pub const PRODUCTION_HOSTNAME: &str = "svcs.paypal.com";

/// Sandbox service hostname.
pub const SANDBOX_HOSTNAME: &str = "svcs.sandbox.paypal.com";

/// Application id every sandbox account shares; used when none is configured.
pub const SANDBOX_APP_ID: &str = "APP-80W284485P519543T";

/// User-Agent string for the client.
pub const USER_AGENT: &str = concat!("paypal-adaptive/", env!("CARGO_PKG_VERSION"));
