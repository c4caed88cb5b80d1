//! # ap-payments
//!
//! PayPal Adaptive Payments client: payments, preapprovals, refunds and the
//! associated lookups.
//!
//! ## Features
//!
//! - **Pay / ExecutePayment** - initiate and execute payments
//! - **Preapproval** - set up, inspect and cancel preapprovals
//! - **Refund** - refund by pay key, transaction id or tracking id
//! - **Lookups** - payment details, payment options, funding plans,
//!   shipping addresses, currency conversion
//! - **Redirect synthesis** - `paymentApprovalUrl` / `preapprovalUrl` are
//!   derived from the configured templates on successful responses
//!
//! ## Example
//!
//! ```rust,ignore
//! use paypal_ap_client::Config;
//! use paypal_ap_payments::PaymentsClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), paypal_ap_payments::Error> {
//!     let client = PaymentsClient::new(
//!         Config::builder("userid", "password", "signature")
//!             .sandbox(true)
//!             .build()?,
//!     )?;
//!
//!     let response = client.preapproval(serde_json::json!({
//!         "currencyCode": "USD",
//!         "startingDate": "2026-09-01T00:00:00Z",
//!         "maxTotalAmountOfAllPayments": "100.00",
//!         "returnUrl": "https://example.com/done",
//!         "cancelUrl": "https://example.com/cancel",
//!     })).await?;
//!
//!     if let Some(url) = response.get("preapprovalUrl") {
//!         println!("redirect the buyer to {url}");
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod ops;

pub use client::PaymentsClient;
pub use ops::Operation;

// The operation wrappers share the core taxonomy: validation failures raised
// here use the same ErrorKind callers match on for pipeline errors.
pub use paypal_ap_client::{ApiResponse, Config, ConfigBuilder, Error, ErrorKind, Result};
