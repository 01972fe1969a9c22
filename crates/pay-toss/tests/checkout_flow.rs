use pay_toss::{GatewayStatus, TossConfig, TossPaymentsProcessor, SUPPORTED_API_VERSION};
use serde_json::{json, Value};
use session_core::{
    BoxedPaymentProcessor, HostSessionStatus, PaymentContext, PaymentProcessor, SessionData,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn processor(server: &MockServer) -> TossPaymentsProcessor {
    let config = TossConfig::new("test_sk_abc123", SUPPORTED_API_VERSION)
        .unwrap()
        .with_api_base_url(server.uri())
        .with_debug(true);
    TossPaymentsProcessor::new(config).unwrap()
}

fn data(value: Value) -> SessionData {
    value.as_object().cloned().unwrap()
}

#[tokio::test]
async fn initiate_then_authorize() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/payments/confirm"))
        .and(body_json(json!({
            "paymentKey": "pk1",
            "orderId": "order_1",
            "amount": 1000
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "paymentKey": "pk1",
            "orderId": "order_1",
            "status": "DONE",
            "method": "카드",
            "receipt": { "url": "https://r" },
            "checkout": { "url": "https://c" },
            "card": { "number": "4330****", "cardType": "신용" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut processor = processor(&server);

    let session = processor
        .initiate_payment(&PaymentContext::new("order_1", "a@b.com", 1000))
        .await
        .unwrap();
    assert_eq!(
        Value::Object(session.session_data.clone()),
        json!({ "id": "order_1", "email": "a@b.com", "amount": 1000 })
    );
    assert_eq!(processor.gateway_status(), Some(GatewayStatus::Ready));

    // The storefront widget hands back paymentKey and orderId
    let mut session_data = session.session_data;
    session_data.insert("paymentKey".into(), json!("pk1"));
    session_data.insert("orderId".into(), json!("order_1"));

    let authorized = processor
        .authorize_payment(session_data, &SessionData::new())
        .await
        .unwrap();

    assert_eq!(processor.gateway_status(), Some(GatewayStatus::Done));
    assert_eq!(authorized.status, HostSessionStatus::Authorized);
    assert_eq!(authorized.data.get("receipt"), Some(&json!("https://r")));
    assert_eq!(authorized.data.get("checkout"), Some(&json!("https://c")));
    assert_eq!(
        processor.get_payment_status(&data(json!({ "id": "order_1" }))),
        HostSessionStatus::Authorized
    );
}

#[tokio::test]
async fn rejected_confirmation_surfaces_code_in_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/payments/confirm"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": "EXCEED_MAX_AMOUNT",
            "message": "거래금액 한도를 초과했습니다."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut processor = processor(&server);
    let err = processor
        .authorize_payment(
            data(json!({ "paymentKey": "pk1", "orderId": "order_1", "amount": 1000 })),
            &SessionData::new(),
        )
        .await
        .unwrap_err();

    assert!(err.detail.contains("EXCEED_MAX_AMOUNT"));
    assert_eq!(err.code, "EXCEED_MAX_AMOUNT");
    assert_eq!(processor.gateway_status(), None);
}

#[tokio::test]
async fn missing_keys_never_reach_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/payments/confirm"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut processor = processor(&server);
    let err = processor
        .authorize_payment(data(json!({ "paymentKey": "pk1" })), &SessionData::new())
        .await
        .unwrap_err();

    assert_eq!(err.code, "NOT_ALLOWED");
}

#[tokio::test]
async fn refund_cancels_in_full() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/payments/pk1/cancel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "paymentKey": "pk1",
            "status": "CANCELED"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let processor = processor(&server);
    let session = data(json!({ "paymentKey": "pk1" }));
    let result = processor.refund_payment(session.clone(), 500).await.unwrap();

    assert_eq!(result, session);

    let requests = server.received_requests().await.unwrap();
    let body: Value = requests[0].body_json().unwrap();
    assert_eq!(body, json!({ "cancelReason": "" }));
    assert!(body.get("cancelAmount").is_none());
}

#[tokio::test]
async fn retrieve_keeps_local_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/payments/pk1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "paymentKey": "pk1",
            "status": "CANCELED"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut processor = processor(&server);
    processor
        .initiate_payment(&PaymentContext::new("order_1", "a@b.com", 1000))
        .await
        .unwrap();

    let session = data(json!({ "id": "order_1", "paymentKey": "pk1" }));
    let result = processor.retrieve_payment(session.clone()).await.unwrap();

    assert_eq!(result, session);
    assert_eq!(
        processor.get_payment_status(&session),
        HostSessionStatus::Pending
    );
}

#[tokio::test]
async fn retrieve_not_found_is_adapter_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/payments/pk_gone"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": "NOT_FOUND_PAYMENT",
            "message": "존재하지 않는 결제 정보 입니다."
        })))
        .mount(&server)
        .await;

    let processor = processor(&server);
    let err = processor
        .retrieve_payment(data(json!({ "paymentKey": "pk_gone" })))
        .await
        .unwrap_err();

    assert_eq!(err.code, "NOT_FOUND_PAYMENT");
    assert!(err.detail.contains("404"));
}

#[test]
fn construction_rejects_unsupported_version() {
    let options = json!({
        "tosspayments_key": "test_sk_abc123",
        "tosspayments_version": "2022-06-08"
    });

    assert!(TossPaymentsProcessor::from_options(options.as_object().unwrap()).is_err());
}

#[test]
fn construction_from_host_options() {
    let options = json!({
        "tosspayments_key": "test_sk_abc123",
        "tosspayments_version": "2022-11-16",
        "is_debug": false
    });

    let processor = TossPaymentsProcessor::from_options(options.as_object().unwrap()).unwrap();

    assert!(processor.client().config().is_test_mode());
    assert_eq!(processor.gateway_status(), None);

    let boxed: BoxedPaymentProcessor = Box::new(processor);
    assert_eq!(boxed.identifier(), "tosspayments");
}
