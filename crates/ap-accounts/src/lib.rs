//! # ap-accounts
//!
//! PayPal Adaptive Accounts client: account creation, funding sources and
//! compliance checks.
//!
//! Every operation in this namespace is a pass-through to the shared
//! pipeline in `paypal-ap-client`; payloads go over the wire unchanged and
//! the remote service validates them.
//!
//! ## Example
//!
//! ```rust,ignore
//! use paypal_ap_accounts::AccountsClient;
//! use paypal_ap_client::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), paypal_ap_accounts::Error> {
//!     let client = AccountsClient::new(
//!         Config::builder("userid", "password", "signature")
//!             .sandbox(true)
//!             .build()?,
//!     )?;
//!
//!     let status = client.get_verified_status(serde_json::json!({
//!         "emailAddress": "buyer@example.com",
//!         "matchCriteria": "NONE",
//!     })).await?;
//!
//!     println!("{}", status.body());
//!     Ok(())
//! }
//! ```

mod client;
mod ops;

pub use client::AccountsClient;
pub use ops::Operation;

pub use paypal_ap_client::{ApiResponse, Config, ConfigBuilder, Error, ErrorKind, Result};
