//! Adaptive Payments client.
//!
//! Wraps [`AdaptiveClient`] and exposes one typed method per catalog entry.
//! Every method delegates to [`PaymentsClient::call`], which runs the
//! operation's pre-network validation, the shared pipeline, and the
//! operation's success post-processing.

use serde_json::{json, Value};
use tracing::instrument;

use paypal_ap_client::{AdaptiveClient, ApiResponse, Config, Result};

use crate::ops::Operation;

/// Client for the `AdaptivePayments/…` endpoints.
///
/// # Example
///
/// ```rust,ignore
/// use paypal_ap_payments::PaymentsClient;
/// use paypal_ap_client::Config;
///
/// let client = PaymentsClient::new(
///     Config::builder("userid", "password", "signature").sandbox(true).build()?,
/// )?;
///
/// let response = client.pay(serde_json::json!({
///     "actionType": "PAY",
///     "currencyCode": "USD",
///     "receiverList": {"receiver": [{"email": "seller@example.com", "amount": "10.00"}]},
///     "returnUrl": "https://example.com/done",
///     "cancelUrl": "https://example.com/cancel",
/// })).await?;
///
/// // Present for payments awaiting buyer approval:
/// let redirect = response.get("paymentApprovalUrl");
/// ```
#[derive(Debug, Clone)]
pub struct PaymentsClient {
    client: AdaptiveClient,
}

impl PaymentsClient {
    /// Create a new payments client from a configuration.
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            client: AdaptiveClient::new(config)?,
        })
    }

    /// Create a payments client from an existing core client.
    pub fn from_client(client: AdaptiveClient) -> Self {
        Self { client }
    }

    /// The underlying core client.
    pub fn inner(&self) -> &AdaptiveClient {
        &self.client
    }

    /// Dispatch one catalog operation.
    #[instrument(skip(self, payload), fields(path = %operation.path()))]
    pub async fn call(&self, operation: Operation, payload: Value) -> Result<ApiResponse> {
        let payload = operation.prepare(payload)?;
        let response = self.client.call(operation.path(), &payload).await?;
        Ok(operation.post_process(self.client.config(), response))
    }

    /// Initiate a payment.
    ///
    /// When the service reports `paymentExecStatus: "CREATED"`, the response
    /// gains a `paymentApprovalUrl` field pointing the buyer at the approval
    /// flow for the returned pay key.
    pub async fn pay(&self, request: Value) -> Result<ApiResponse> {
        self.call(Operation::Pay, request).await
    }

    /// Look up the details of a payment.
    ///
    /// `params` must carry at least one of `payKey`, `transactionId` or
    /// `trackingId`.
    pub async fn payment_details(&self, params: Value) -> Result<ApiResponse> {
        self.call(Operation::PaymentDetails, params).await
    }

    /// Execute a previously created payment.
    pub async fn execute_payment(&self, request: Value) -> Result<ApiResponse> {
        self.call(Operation::ExecutePayment, request).await
    }

    /// Fetch the payment options for a pay key.
    pub async fn get_payment_options(&self, pay_key: impl Into<String>) -> Result<ApiResponse> {
        self.call(Operation::GetPaymentOptions, json!({"payKey": pay_key.into()}))
            .await
    }

    /// Set the payment options for a pay key.
    pub async fn set_payment_options(&self, request: Value) -> Result<ApiResponse> {
        self.call(Operation::SetPaymentOptions, request).await
    }

    /// Set up a preapproval.
    ///
    /// Responses carrying a `preapprovalKey` gain a `preapprovalUrl` field
    /// pointing the buyer at the preapproval flow.
    pub async fn preapproval(&self, request: Value) -> Result<ApiResponse> {
        self.call(Operation::Preapproval, request).await
    }

    /// Look up the details of a preapproval.
    pub async fn preapproval_details(&self, request: Value) -> Result<ApiResponse> {
        self.call(Operation::PreapprovalDetails, request).await
    }

    /// Cancel a preapproval.
    pub async fn cancel_preapproval(&self, request: Value) -> Result<ApiResponse> {
        self.call(Operation::CancelPreapproval, request).await
    }

    /// Refund a payment.
    ///
    /// `params` must carry at least one of `payKey`, `transactionId` or
    /// `trackingId`.
    pub async fn refund(&self, params: Value) -> Result<ApiResponse> {
        self.call(Operation::Refund, params).await
    }

    /// Convert amounts between currencies.
    pub async fn convert_currency(&self, request: Value) -> Result<ApiResponse> {
        self.call(Operation::ConvertCurrency, request).await
    }

    /// Fetch the funding plans for a payment.
    pub async fn get_funding_plans(&self, request: Value) -> Result<ApiResponse> {
        self.call(Operation::GetFundingPlans, request).await
    }

    /// Fetch the shipping addresses for a payment.
    pub async fn get_shipping_addresses(&self, request: Value) -> Result<ApiResponse> {
        self.call(Operation::GetShippingAddresses, request).await
    }
}
