//! End-to-end pipeline behavior: headers, status classification, ack.

use paypal_adaptive::{AccountsClient, AdaptiveClient, ErrorKind, PaymentsClient};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{config, config_builder, paypal_header_names, success_body};

const MANDATORY_HEADERS: [&str; 6] = [
    "X-PAYPAL-APPLICATION-ID",
    "X-PAYPAL-REQUEST-DATA-FORMAT",
    "X-PAYPAL-RESPONSE-DATA-FORMAT",
    "X-PAYPAL-SECURITY-PASSWORD",
    "X-PAYPAL-SECURITY-SIGNATURE",
    "X-PAYPAL-SECURITY-USERID",
];

#[tokio::test]
async fn sends_exactly_the_six_mandatory_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .mount(&server)
        .await;

    let client = AdaptiveClient::new(config(&server)).unwrap();
    client.call("AdaptivePayments/Pay", &json!({})).await.unwrap();

    assert_eq!(paypal_header_names(&server).await, MANDATORY_HEADERS);
}

#[tokio::test]
async fn sends_optional_headers_only_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .mount(&server)
        .await;

    let config = config_builder(&server)
        .with_sandbox_email_address("buyer@example.com")
        .with_device_ip_address("203.0.113.7")
        .with_subject("merchant@example.com")
        .build()
        .unwrap();
    let client = AdaptiveClient::new(config).unwrap();
    client.call("AdaptivePayments/Pay", &json!({})).await.unwrap();

    let mut expected: Vec<&str> = MANDATORY_HEADERS
        .iter()
        .copied()
        .chain([
            "X-PAYPAL-DEVICE-IPADDRESS",
            "X-PAYPAL-SANDBOX-EMAIL-ADDRESS",
            "X-PAYPAL-SECURITY-SUBJECT",
        ])
        .collect();
    expected.sort();
    assert_eq!(paypal_header_names(&server).await, expected);
}

#[tokio::test]
async fn http_400_reports_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"jjx": "jjx"})))
        .mount(&server)
        .await;

    let client = AdaptiveClient::new(config(&server)).unwrap();
    let err = client.call("AdaptivePayments/Pay", &json!({})).await.unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(err.response(), Some(&json!({"jjx": "jjx"})));
}

#[tokio::test]
async fn non_success_ack_reports_error_and_response() {
    let server = MockServer::start().await;
    let body = json!({"responseEnvelope": {"ack": "NotSuccess"}, "payKey": "AP-1"});
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let client = AdaptiveClient::new(config(&server)).unwrap();
    let err = client.call("AdaptivePayments/Pay", &json!({})).await.unwrap_err();

    match &err.kind {
        ErrorKind::Ack { ack, response } => {
            assert_eq!(ack, "NotSuccess");
            assert_eq!(response.http_status(), 200);
            assert_eq!(response.body(), &body);
        }
        other => panic!("expected Ack error, got {other:?}"),
    }
}

#[tokio::test]
async fn success_acks_return_the_paired_response() {
    for ack in ["Success", "SuccessWithWarning"] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "responseEnvelope": {"ack": ack}
            })))
            .mount(&server)
            .await;

        let client = AdaptiveClient::new(config(&server)).unwrap();
        let response = client.call("AdaptivePayments/Pay", &json!({})).await.unwrap();
        assert_eq!(response.http_status(), 200);
        assert_eq!(response.ack(), Some(ack));
    }
}

#[tokio::test]
async fn unparseable_body_reports_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = AdaptiveClient::new(config(&server)).unwrap();
    let err = client.call("AdaptivePayments/Pay", &json!({})).await.unwrap_err();

    assert!(matches!(err.kind, ErrorKind::InvalidResponse { .. }));
    assert_eq!(err.status(), Some(200));
    assert_eq!(err.raw_body(), Some("not json"));
}

#[tokio::test]
async fn one_core_client_serves_both_catalogs() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/AdaptivePayments/ConvertCurrency"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "responseEnvelope": {"ack": "Success"},
            "estimatedAmountTable": {}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/AdaptiveAccounts/GetUserAgreement"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "responseEnvelope": {"ack": "Success"},
            "agreement": "terms"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let core = AdaptiveClient::new(config(&server)).unwrap();
    let payments = PaymentsClient::from_client(core.clone());
    let accounts = AccountsClient::from_client(core);
    assert_eq!(
        payments.inner().config().app_id(),
        accounts.inner().config().app_id()
    );

    let converted = payments
        .convert_currency(json!({
            "baseAmountList": {"currency": [{"code": "USD", "amount": "10.00"}]},
            "convertToCurrencyList": {"currencyCode": ["EUR"]}
        }))
        .await
        .unwrap();
    assert!(converted.get("estimatedAmountTable").is_some());

    let agreement = accounts.get_user_agreement(json!({})).await.unwrap();
    // Callers serializing the response onward get the paired status back
    // as the httpStatusCode field.
    let value = agreement.into_value();
    assert_eq!(value["httpStatusCode"], 200);
    assert_eq!(value["agreement"], "terms");
}

#[tokio::test]
async fn identical_configurations_behave_identically() {
    let server = MockServer::start().await;
    let build = || {
        AdaptiveClient::new(
            config_builder(&server)
                .with_subject("merchant@example.com")
                .build()
                .unwrap(),
        )
        .unwrap()
    };
    let (a, b) = (build(), build());
    assert_eq!(a.headers(), b.headers());
    assert_eq!(
        a.endpoint("AdaptiveAccounts/CreateAccount"),
        b.endpoint("AdaptiveAccounts/CreateAccount")
    );
}
