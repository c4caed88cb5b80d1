//! Adaptive Payments operations end to end.

use paypal_adaptive::PaymentsClient;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{config, config_builder};

#[tokio::test]
async fn pay_created_synthesizes_approval_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/AdaptivePayments/Pay"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "responseEnvelope": {"ack": "Success"},
            "paymentExecStatus": "CREATED",
            "payKey": "AP-X"
        })))
        .mount(&server)
        .await;

    let client = PaymentsClient::new(config(&server)).unwrap();
    let response = client.pay(json!({"actionType": "PAY"})).await.unwrap();

    assert_eq!(
        response.get("paymentApprovalUrl").unwrap(),
        &json!("https://www.paypal.com/cgi-bin/webscr?cmd=_ap-payment&paykey=AP-X")
    );
}

#[tokio::test]
async fn pay_sandbox_config_uses_sandbox_template() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "responseEnvelope": {"ack": "Success"},
            "paymentExecStatus": "CREATED",
            "payKey": "AP-X"
        })))
        .mount(&server)
        .await;

    let client = PaymentsClient::new(
        config_builder(&server).sandbox(true).build().unwrap(),
    )
    .unwrap();
    let response = client.pay(json!({"actionType": "PAY"})).await.unwrap();

    assert_eq!(
        response.get("paymentApprovalUrl").unwrap(),
        &json!("https://www.sandbox.paypal.com/cgi-bin/webscr?cmd=_ap-payment&paykey=AP-X")
    );
}

#[tokio::test]
async fn preapproval_key_synthesizes_preapproval_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/AdaptivePayments/Preapproval"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "responseEnvelope": {"ack": "Success"},
            "preapprovalKey": "PA-X"
        })))
        .mount(&server)
        .await;

    let client = PaymentsClient::new(config(&server)).unwrap();
    let response = client.preapproval(json!({})).await.unwrap();

    assert_eq!(
        response.get("preapprovalUrl").unwrap(),
        &json!("https://www.paypal.com/cgi-bin/webscr?cmd=_ap-preapproval&preapprovalkey=PA-X")
    );
}

#[tokio::test]
async fn preapproval_without_key_is_not_augmented() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "responseEnvelope": {"ack": "Success"}
        })))
        .mount(&server)
        .await;

    let client = PaymentsClient::new(config(&server)).unwrap();
    let response = client.preapproval(json!({})).await.unwrap();

    assert!(response.get("preapprovalUrl").is_none());
    assert_eq!(response.http_status(), 200);
}

#[tokio::test]
async fn get_payment_options_with_empty_key_never_hits_the_network() {
    let server = MockServer::start().await;
    let client = PaymentsClient::new(config(&server)).unwrap();

    let err = client.get_payment_options("").await.unwrap_err();
    assert!(err.is_validation());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn refund_merges_default_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/AdaptivePayments/Refund"))
        .and(body_partial_json(json!({
            "payKey": "AP-X",
            "requestEnvelope": {"errorLanguage": "en_US", "detailLevel": "ReturnAll"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "responseEnvelope": {"ack": "Success"},
            "refundInfoList": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = PaymentsClient::new(config(&server)).unwrap();
    client.refund(json!({"payKey": "AP-X"})).await.unwrap();
}
