//! Integration tests for the HTTP client.
//!
//! These tests send real requests to a local mock server and verify headers,
//! body handling, and error conversion.

use serde_json::json;
use shopify_fulfillment_orders::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use shopify_fulfillment_orders::{HostUrl, Session, ShopDomain, ShopifyConfig};
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(server: &MockServer, access_token: &str) -> HttpClient {
    let session = Session::new(ShopDomain::new("test-shop").unwrap(), access_token);
    let config = ShopifyConfig::builder()
        .api_host(HostUrl::new(server.uri()).unwrap())
        .user_agent_prefix("FulfillmentSync/2.1")
        .build();

    HttpClient::new("/admin/api/2025-10", &session, Some(&config)).unwrap()
}

// ============================================================================
// Request Tests
// ============================================================================

#[tokio::test]
async fn test_get_sends_default_headers_and_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/orders/1/fulfillment_orders.json"))
        .and(query_param("limit", "5"))
        .and(header("X-Shopify-Access-Token", "shpat_abc"))
        .and(header("Accept", "application/json"))
        .and(header_exists("User-Agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"fulfillment_orders": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, "shpat_abc");
    let request = HttpRequest::builder(HttpMethod::Get, "orders/1/fulfillment_orders.json")
        .query_param("limit", "5")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();

    assert_eq!(response.code, 200);
    assert!(response.is_ok());
    assert_eq!(response.body, json!({"fulfillment_orders": []}));
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/api/2025-10/fulfillment_orders/5/move.json"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"fulfillment_order": {"new_location_id": 8}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, "token");
    let request = HttpRequest::builder(HttpMethod::Post, "fulfillment_orders/5/move.json")
        .body(json!({"fulfillment_order": {"new_location_id": 8}}))
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();

    assert_eq!(response.code, 201);
    assert_eq!(response.body["ok"], true);
}

#[tokio::test]
async fn test_missing_access_token_header_when_token_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header_exists("X-Shopify-Access-Token"))
        .respond_with(ResponseTemplate::new(401))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, "");
    let request = HttpRequest::builder(HttpMethod::Get, "shop.json")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();

    assert_eq!(response.code, 200);
}

// ============================================================================
// Response Handling Tests
// ============================================================================

#[tokio::test]
async fn test_empty_success_body_becomes_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = create_client(&server, "token");
    let request = HttpRequest::builder(HttpMethod::Get, "shop.json")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();

    assert_eq!(response.code, 204);
    assert_eq!(response.body, json!({}));
}

#[tokio::test]
async fn test_non_json_success_body_is_invalid_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = create_client(&server, "token");
    let request = HttpRequest::builder(HttpMethod::Get, "shop.json")
        .build()
        .unwrap();

    let result = client.request(request).await;

    assert!(matches!(result, Err(HttpError::InvalidBody { code: 200, .. })));
}

#[tokio::test]
async fn test_error_response_carries_detail_and_request_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(401)
                .insert_header("X-Request-Id", "abc-123")
                .set_body_json(json!({"errors": "[API] Invalid API key or access token"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, "bad-token");
    let request = HttpRequest::builder(HttpMethod::Get, "shop.json")
        .build()
        .unwrap();

    let Err(HttpError::Response(error)) = client.request(request).await else {
        panic!("expected response error");
    };

    assert_eq!(error.code, 401);
    assert_eq!(error.error_reference.as_deref(), Some("abc-123"));
    assert!(error.message.contains("Invalid API key"));
    assert!(error.message.contains("abc-123"));
}

#[tokio::test]
async fn test_non_json_error_body_is_kept_as_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, "token");
    let request = HttpRequest::builder(HttpMethod::Get, "shop.json")
        .build()
        .unwrap();

    let Err(HttpError::Response(error)) = client.request(request).await else {
        panic!("expected response error");
    };

    assert_eq!(error.code, 502);
    assert_eq!(error.field_errors()["base"], vec!["Bad Gateway".to_string()]);
}

#[tokio::test]
async fn test_post_without_body_fails_before_sending() {
    let result = HttpRequest::builder(HttpMethod::Post, "fulfillment_orders/1/move.json").build();

    assert!(matches!(
        result,
        Err(shopify_fulfillment_orders::InvalidHttpRequestError::MissingBody { .. })
    ));
}
