//! The Adaptive Payments operation catalog.
//!
//! One table drives every operation: each entry fixes the endpoint path,
//! the pre-network required-field check, and the success post-processor.
//! The typed methods on [`PaymentsClient`](crate::PaymentsClient) are thin
//! delegates into this table.

use paypal_ap_client::{ApiResponse, Config, Error, ErrorKind, Result};
use serde_json::{json, Map, Value};

/// Alternate identifiers accepted by payment lookups and refunds.
const PAYMENT_IDENTIFIERS: [&str; 3] = ["payKey", "transactionId", "trackingId"];

/// An Adaptive Payments operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Pay,
    PaymentDetails,
    ExecutePayment,
    GetPaymentOptions,
    SetPaymentOptions,
    Preapproval,
    PreapprovalDetails,
    CancelPreapproval,
    Refund,
    ConvertCurrency,
    GetFundingPlans,
    GetShippingAddresses,
}

impl Operation {
    /// Every operation in the catalog.
    pub const ALL: [Operation; 12] = [
        Operation::Pay,
        Operation::PaymentDetails,
        Operation::ExecutePayment,
        Operation::GetPaymentOptions,
        Operation::SetPaymentOptions,
        Operation::Preapproval,
        Operation::PreapprovalDetails,
        Operation::CancelPreapproval,
        Operation::Refund,
        Operation::ConvertCurrency,
        Operation::GetFundingPlans,
        Operation::GetShippingAddresses,
    ];

    /// The remote endpoint path for this operation.
    pub fn path(self) -> &'static str {
        match self {
            Operation::Pay => "AdaptivePayments/Pay",
            Operation::PaymentDetails => "AdaptivePayments/PaymentDetails",
            Operation::ExecutePayment => "AdaptivePayments/ExecutePayment",
            Operation::GetPaymentOptions => "AdaptivePayments/GetPaymentOptions",
            Operation::SetPaymentOptions => "AdaptivePayments/SetPaymentOptions",
            Operation::Preapproval => "AdaptivePayments/Preapproval",
            Operation::PreapprovalDetails => "AdaptivePayments/PreapprovalDetails",
            Operation::CancelPreapproval => "AdaptivePayments/CancelPreapproval",
            Operation::Refund => "AdaptivePayments/Refund",
            Operation::ConvertCurrency => "AdaptivePayments/ConvertCurrency",
            Operation::GetFundingPlans => "AdaptivePayments/GetFundingPlans",
            Operation::GetShippingAddresses => "AdaptivePayments/GetShippingAddresses",
        }
    }

    /// Validate required identifiers and merge defaults, before any I/O.
    pub(crate) fn prepare(self, payload: Value) -> Result<Value> {
        match self {
            Operation::GetPaymentOptions => {
                if !has_non_empty_str(&payload, "payKey") {
                    return Err(Error::new(ErrorKind::Validation(
                        "payKey is required for GetPaymentOptions".to_string(),
                    )));
                }
                Ok(merge_request(default_payload(), payload))
            }
            Operation::PaymentDetails | Operation::Refund => {
                let any_identifier = PAYMENT_IDENTIFIERS
                    .iter()
                    .any(|field| has_non_empty_str(&payload, field));
                if !any_identifier {
                    return Err(Error::new(ErrorKind::Validation(format!(
                        "one of payKey, transactionId or trackingId is required for {}",
                        self.path()
                    ))));
                }
                Ok(merge_request(default_payload(), payload))
            }
            _ => Ok(payload),
        }
    }

    /// Augment a successful response; only `Pay` and `Preapproval` do.
    pub(crate) fn post_process(self, config: &Config, response: ApiResponse) -> ApiResponse {
        match self {
            Operation::Pay => {
                if response.payment_exec_status() == Some("CREATED") {
                    if let Some(key) = response.pay_key() {
                        let url = config.approval_template().replace("%s", key);
                        return response.with_field("paymentApprovalUrl", url);
                    }
                }
                response
            }
            Operation::Preapproval => {
                if let Some(key) = response.preapproval_key() {
                    let url = config.preapproval_template().replace("%s", key);
                    return response.with_field("preapprovalUrl", url);
                }
                response
            }
            _ => response,
        }
    }
}

/// The envelope merged under lookup and refund requests.
pub(crate) fn default_payload() -> Map<String, Value> {
    let mut payload = Map::new();
    payload.insert(
        "requestEnvelope".to_string(),
        json!({
            "errorLanguage": "en_US",
            "detailLevel": "ReturnAll"
        }),
    );
    payload
}

/// Overlay caller fields onto a default payload.
///
/// Caller values win at every key. Object-valued fields (the request
/// envelope) merge key-by-key, one level deep; scalars are replaced. A
/// non-object overlay replaces the defaults wholesale.
pub(crate) fn merge_request(mut base: Map<String, Value>, overlay: Value) -> Value {
    match overlay {
        Value::Object(overlay_map) => {
            for (key, value) in overlay_map {
                match (base.get_mut(&key), value) {
                    (Some(Value::Object(base_inner)), Value::Object(overlay_inner)) => {
                        for (inner_key, inner_value) in overlay_inner {
                            base_inner.insert(inner_key, inner_value);
                        }
                    }
                    (_, value) => {
                        base.insert(key, value);
                    }
                }
            }
            Value::Object(base)
        }
        overlay => overlay,
    }
}

fn has_non_empty_str(payload: &Value, field: &str) -> bool {
    payload
        .get(field)
        .and_then(Value::as_str)
        .is_some_and(|s| !s.is_empty())
}
