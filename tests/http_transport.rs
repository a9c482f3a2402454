//! HTTP transport against a mockito server.

mod common;

use billbee_rs::types::{Article, OrderState, OrderStateUpdate};
use billbee_rs::{BillbeeClient, Error, HttpMethod, LookupBy, NO_RESPONSE_STATUS};
use common::{envelope, MockServerFixture, API_KEY};
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn sends_credentials_and_decodes_envelope() {
    let mut fx = MockServerFixture::new().await;
    let mock = fx
        .server
        .mock("GET", "/products/SKU-1")
        .match_query(Matcher::UrlEncoded("lookupBy".into(), "sku".into()))
        .match_header("authorization", MockServerFixture::basic_auth().as_str())
        .match_header("x-billbee-api-key", API_KEY)
        .match_header("accept", "application/json")
        .match_header(
            "x-billbee-rs-request-id",
            Matcher::Regex("^[0-9a-f-]{36}$".into()),
        )
        .match_header("user-agent", Matcher::Regex("^billbee-rs/".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(envelope(json!({"Id": 7, "SKU": "SKU-1", "Title": "Mug"})))
        .create_async()
        .await;

    let client = fx.client();
    let reply = client
        .articles()
        .get("SKU-1", LookupBy::Sku)
        .await
        .unwrap();
    let article = reply.completed().unwrap().into_result().unwrap().unwrap();
    assert_eq!(article.id, Some(7));
    assert_eq!(article.title.as_deref(), Some("Mug"));
    mock.assert_async().await;
}

#[tokio::test]
async fn posts_json_body_with_only_set_fields() {
    let mut fx = MockServerFixture::new().await;
    let mock = fx
        .server
        .mock("POST", "/products")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"SKU": "NEW-1", "Price": 12.5})))
        .with_status(200)
        .with_body(envelope(json!({"Id": 99, "SKU": "NEW-1"})))
        .create_async()
        .await;

    let client = fx.client();
    let article = Article {
        sku: Some("NEW-1".into()),
        price: Some(12.5),
        ..Default::default()
    };
    let reply = client.articles().create(&article).await.unwrap();
    assert_eq!(reply.completed().unwrap().data.unwrap().id, Some(99));
    mock.assert_async().await;
}

#[tokio::test]
async fn order_state_update_is_a_patch() {
    let mut fx = MockServerFixture::new().await;
    let mock = fx
        .server
        .mock("PATCH", "/orders/12/orderstate")
        .match_body(Matcher::Json(json!({"NewStateId": 4})))
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let client = fx.client();
    let reply = client
        .orders()
        .update_state(12, &OrderStateUpdate::new(OrderState::Shipped))
        .await
        .unwrap();
    assert!(reply.completed().unwrap().is_success());
    mock.assert_async().await;
}

#[tokio::test]
async fn unauthorized_maps_to_authentication() {
    let mut fx = MockServerFixture::new().await;
    fx.server
        .mock("GET", "/layouts")
        .with_status(401)
        .create_async()
        .await;

    let err = fx.client().layouts().list().await.unwrap_err();
    assert!(matches!(err, Error::Authentication));
    assert_eq!(err.status_code(), Some(401));
}

#[tokio::test]
async fn forbidden_maps_to_forbidden() {
    let mut fx = MockServerFixture::new().await;
    fx.server
        .mock("GET", "/cloudstorages")
        .with_status(403)
        .create_async()
        .await;

    let err = fx.client().cloud_storages().list().await.unwrap_err();
    assert!(matches!(err, Error::Forbidden));
    assert_eq!(err.to_string(), "Access forbidden. Check your API permissions.");
}

#[tokio::test]
async fn rate_limit_carries_retry_after() {
    let mut fx = MockServerFixture::new().await;
    fx.server
        .mock("GET", "/enums/orderstates")
        .with_status(429)
        .with_header("retry-after", "30")
        .create_async()
        .await;

    let err = fx.client().enums().order_states().await.unwrap_err();
    match &err {
        Error::RateLimited { retry_after } => assert_eq!(retry_after.as_deref(), Some("30")),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.to_string(), "Rate limit exceeded. Retry after 30 seconds");
}

#[tokio::test]
async fn other_statuses_use_the_body_message() {
    let mut fx = MockServerFixture::new().await;
    fx.server
        .mock("GET", "/orders/5")
        .with_status(404)
        .with_body(r#"{"ErrorMessage":"Order not found","ErrorCode":1,"Data":null}"#)
        .create_async()
        .await;
    fx.server
        .mock("GET", "/orders/6")
        .with_status(502)
        .with_body("")
        .create_async()
        .await;

    let client = fx.client();
    match client.orders().get(5, None).await.unwrap_err() {
        Error::Remote { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Order not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    match client.orders().get(6, None).await.unwrap_err() {
        Error::Remote { status, message } => {
            assert_eq!(status, 502);
            assert_eq!(message, "Bad Gateway");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn queued_drain_over_http_isolates_failures() {
    let mut fx = MockServerFixture::new().await;
    let ok = fx
        .server
        .mock("GET", Matcher::Regex(r"^/customers/(1|3)$".into()))
        .with_status(200)
        .with_body(envelope(json!({"Id": 1})))
        .expect(2)
        .create_async()
        .await;
    fx.server
        .mock("GET", "/customers/2")
        .with_status(404)
        .with_body(r#"{"ErrorMessage":"Customer not found"}"#)
        .create_async()
        .await;

    let client = fx.client();
    client.enter_queued_mode();
    for id in 1..=3 {
        let reply = client.customers().get(id).await.unwrap();
        assert_eq!(reply.queued_index(), Some(id as usize - 1));
    }
    let outcomes = client.drain().await;

    assert_eq!(outcomes.len(), 3);
    assert!(outcomes[0].succeeded());
    assert_eq!(outcomes[0].status_code(), 200);
    assert!(!outcomes[1].succeeded());
    assert_eq!(outcomes[1].status_code(), 404);
    assert!(outcomes[1]
        .failure_reason()
        .unwrap()
        .contains("Customer not found"));
    assert!(outcomes[2].succeeded());
    ok.assert_async().await;
}

#[tokio::test]
async fn unreachable_host_is_a_transport_failure() {
    let client = BillbeeClient::builder()
        .username("u")
        .api_password("p")
        .api_key("k")
        .base_url("http://127.0.0.1:1")
        .build()
        .unwrap();

    let err = client
        .dispatch(HttpMethod::Get, "/layouts", None)
        .await
        .unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.status_code(), None);

    client.enter_queued_mode();
    let _ = client.dispatch(HttpMethod::Get, "/layouts", None).await.unwrap();
    let outcomes = client.drain().await;
    assert_eq!(outcomes[0].status_code(), NO_RESPONSE_STATUS);
}

#[tokio::test]
async fn outcome_serializes_like_the_wire_shape() {
    let mut fx = MockServerFixture::new().await;
    fx.server
        .mock("GET", "/events")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(envelope(json!([])))
        .create_async()
        .await;

    let client = fx.client();
    client.enter_queued_mode();
    let _ = client.events().list(&Default::default()).await.unwrap();
    let outcomes = client.drain().await;
    let wire = serde_json::to_value(&outcomes[0]).unwrap();
    assert_eq!(wire["success"], json!(true));
    assert_eq!(wire["statusCode"], json!(200));
    assert_eq!(wire["data"]["Data"], json!([]));
    assert!(wire.get("error").is_none());
}
