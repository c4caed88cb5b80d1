//! Adaptive Accounts operations end to end.

use paypal_adaptive::AccountsClient;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::config;

#[tokio::test]
async fn create_account_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/AdaptiveAccounts/CreateAccount"))
        .and(body_partial_json(json!({"accountType": "PERSONAL"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "responseEnvelope": {"ack": "Success"},
            "createAccountKey": "CA-1",
            "execStatus": "CREATED"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = AccountsClient::new(config(&server)).unwrap();
    let response = client
        .create_account(json!({"accountType": "PERSONAL"}))
        .await
        .unwrap();

    assert_eq!(response.get("createAccountKey").unwrap(), &json!("CA-1"));
}

#[tokio::test]
async fn compliance_check_failure_carries_remote_diagnostics() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/AdaptiveAccounts/CheckComplianceStatus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "responseEnvelope": {"ack": "Failure"},
            "error": [{"errorId": "580029", "message": "missing required parameter"}]
        })))
        .mount(&server)
        .await;

    let client = AccountsClient::new(config(&server)).unwrap();
    let err = client.check_compliance_status(json!({})).await.unwrap_err();

    assert_eq!(err.status(), Some(200));
    let body = err.response().unwrap();
    assert_eq!(body["error"][0]["errorId"], "580029");
}
