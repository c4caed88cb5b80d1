//! # paypal-adaptive
//!
//! A PayPal Adaptive Payments / Adaptive Accounts client library for Rust.
//!
//! The library is one request/response pipeline plus two operation catalogs:
//! every call builds the X-PAYPAL security headers from an immutable
//! configuration, POSTs a JSON payload to the selected host, and interprets
//! HTTP status, body and `responseEnvelope.ack` into a single result.
//!
//! ## Security
//!
//! - Password and signature are redacted in Debug output
//! - Tracing spans skip payload contents
//!
//! ## Crates
//!
//! - **paypal-ap-client** - Configuration, header construction, the HTTPS
//!   pipeline and the error taxonomy
//! - **paypal-ap-payments** - `AdaptivePayments/…`: pay, preapproval,
//!   refund, lookups, redirect-URL synthesis
//! - **paypal-ap-accounts** - `AdaptiveAccounts/…`: account creation,
//!   funding sources, compliance
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use paypal_adaptive::{Config, PaymentsClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PaymentsClient::new(
//!         Config::builder("userid", "password", "signature")
//!             .sandbox(true)
//!             .build()?,
//!     )?;
//!
//!     let response = client.pay(serde_json::json!({
//!         "actionType": "PAY",
//!         "currencyCode": "USD",
//!         "receiverList": {"receiver": [{"email": "seller@example.com", "amount": "10.00"}]},
//!         "returnUrl": "https://example.com/done",
//!         "cancelUrl": "https://example.com/cancel",
//!     })).await?;
//!
//!     if let Some(url) = response.get("paymentApprovalUrl") {
//!         println!("redirect the buyer to {url}");
//!     }
//!     Ok(())
//! }
//! ```

// Re-export member crates for convenient access
#[cfg(feature = "client")]
pub use paypal_ap_client as client;

#[cfg(feature = "payments")]
pub use paypal_ap_payments as payments;

#[cfg(feature = "accounts")]
pub use paypal_ap_accounts as accounts;

// Re-export commonly used types at the top level
#[cfg(feature = "client")]
pub use paypal_ap_client::{
    AdaptiveClient, ApiResponse, Config, ConfigBuilder, Error, ErrorKind, Result,
};

#[cfg(feature = "payments")]
pub use paypal_ap_payments::PaymentsClient;

#[cfg(feature = "accounts")]
pub use paypal_ap_accounts::AccountsClient;
