//! Adaptive Accounts client.

use serde_json::Value;
use tracing::instrument;

use paypal_ap_client::{AdaptiveClient, ApiResponse, Config, Result};

use crate::ops::Operation;

/// Client for the `AdaptiveAccounts/…` endpoints.
///
/// All operations pass the caller's payload through unchanged; the remote
/// service owns the field validation for this namespace.
#[derive(Debug, Clone)]
pub struct AccountsClient {
    client: AdaptiveClient,
}

impl AccountsClient {
    /// Create a new accounts client from a configuration.
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            client: AdaptiveClient::new(config)?,
        })
    }

    /// Create an accounts client from an existing core client.
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
        self.client.call(operation.path(), &payload).await
    }

    /// Create a PayPal account.
    pub async fn create_account(&self, request: Value) -> Result<ApiResponse> {
        self.call(Operation::CreateAccount, request).await
    }

    /// Link a bank account to an account.
    pub async fn add_bank_account(&self, request: Value) -> Result<ApiResponse> {
        self.call(Operation::AddBankAccount, request).await
    }

    /// Link a payment card to an account.
    pub async fn add_payment_card(&self, request: Value) -> Result<ApiResponse> {
        self.call(Operation::AddPaymentCard, request).await
    }

    /// Check the compliance status of an account.
    pub async fn check_compliance_status(&self, request: Value) -> Result<ApiResponse> {
        self.call(Operation::CheckComplianceStatus, request).await
    }

    /// Update the compliance status of an account.
    pub async fn update_compliance_status(&self, request: Value) -> Result<ApiResponse> {
        self.call(Operation::UpdateComplianceStatus, request).await
    }

    /// Fetch the user agreement text.
    pub async fn get_user_agreement(&self, request: Value) -> Result<ApiResponse> {
        self.call(Operation::GetUserAgreement, request).await
    }

    /// Fetch the verified status of an account.
    pub async fn get_verified_status(&self, request: Value) -> Result<ApiResponse> {
        self.call(Operation::GetVerifiedStatus, request).await
    }

    /// Mark a funding source as confirmed.
    pub async fn set_funding_source_confirmed(&self, request: Value) -> Result<ApiResponse> {
        self.call(Operation::SetFundingSourceConfirmed, request).await
    }
}
