//! Integration tests for the REST API client.
//!
//! These tests verify client construction, path normalization against a
//! live mock server, and the typed [`RestTransport`] methods.

use serde::{Deserialize, Serialize};
use serde_json::json;
use shopify_fulfillment_orders::clients::rest::{RestClient, RestError, RestTransport};
use shopify_fulfillment_orders::{ApiVersion, HostUrl, Session, ShopDomain, ShopifyConfig};
use std::collections::HashMap;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_session(shop: &str, access_token: &str) -> Session {
    Session::new(ShopDomain::new(shop).unwrap(), access_token)
}

fn mock_config(server: &MockServer, version: ApiVersion) -> ShopifyConfig {
    ShopifyConfig::builder()
        .api_version(version)
        .api_host(HostUrl::new(server.uri()).unwrap())
        .build()
}

#[derive(Debug, Serialize)]
struct Ping {
    value: u32,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Pong {
    value: u32,
}

// ============================================================================
// RestClient Construction Tests
// ============================================================================

#[test]
fn test_rest_client_creates_with_default_version() {
    let session = create_test_session("test-shop", "test-token");
    let client = RestClient::new(&session, None).unwrap();

    assert_eq!(client.api_version(), &ApiVersion::latest());
}

#[test]
fn test_rest_client_with_version_override() {
    let session = create_test_session("test-shop", "test-token");
    let client = RestClient::with_version(&session, None, ApiVersion::V2024_10).unwrap();

    assert_eq!(client.api_version(), &ApiVersion::V2024_10);
    assert_eq!(client.base_path(), "/admin/api/2024-10");
}

#[test]
fn test_multiple_clients_for_different_shops() {
    let client1 = RestClient::new(&create_test_session("shop-one", "token-1"), None).unwrap();
    let client2 = RestClient::with_version(
        &create_test_session("shop-two", "token-2"),
        None,
        ApiVersion::V2025_07,
    )
    .unwrap();

    assert_eq!(client1.api_version(), &ApiVersion::latest());
    assert_eq!(client2.api_version(), &ApiVersion::V2025_07);
}

// ============================================================================
// Request Tests
// ============================================================================

#[tokio::test]
async fn test_get_normalizes_path_and_uses_config_version() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-04/orders/7/fulfillment_orders.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"fulfillment_orders": []})))
        .expect(1)
        .mount(&server)
        .await;

    let session = create_test_session("test-shop", "token");
    let config = mock_config(&server, ApiVersion::V2025_04);
    let client = RestClient::new(&session, Some(&config)).unwrap();

    let response = client
        .get("/orders/7/fulfillment_orders", None)
        .await
        .unwrap();

    assert_eq!(response.code, 200);
}

#[tokio::test]
async fn test_get_json_decodes_and_forwards_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/ping.json"))
        .and(query_param("value", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"value": 3})))
        .expect(1)
        .mount(&server)
        .await;

    let session = create_test_session("test-shop", "token");
    let config = mock_config(&server, ApiVersion::V2025_10);
    let client = RestClient::new(&session, Some(&config)).unwrap();

    let query = HashMap::from([("value".to_string(), "3".to_string())]);
    let pong: Pong = client.get_json("ping.json", Some(query)).await.unwrap();

    assert_eq!(pong, Pong { value: 3 });
}

#[tokio::test]
async fn test_post_json_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/api/2025-10/ping.json"))
        .and(body_json(json!({"value": 9})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"value": 10})))
        .expect(1)
        .mount(&server)
        .await;

    let session = create_test_session("test-shop", "token");
    let config = mock_config(&server, ApiVersion::V2025_10);
    let client = RestClient::new(&session, Some(&config)).unwrap();

    let pong: Pong = client.post_json("ping", &Ping { value: 9 }).await.unwrap();

    assert_eq!(pong.value, 10);
}

#[tokio::test]
async fn test_get_json_shape_mismatch_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"value": "three"})))
        .mount(&server)
        .await;

    let session = create_test_session("test-shop", "token");
    let config = mock_config(&server, ApiVersion::V2025_10);
    let client = RestClient::new(&session, Some(&config)).unwrap();

    let result: Result<Pong, _> = client.get_json("ping.json", None).await;

    assert!(matches!(result, Err(RestError::Decode { path, .. }) if path == "ping.json"));
}

#[tokio::test]
async fn test_invalid_path_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let session = create_test_session("test-shop", "token");
    let config = mock_config(&server, ApiVersion::V2025_10);
    let client = RestClient::new(&session, Some(&config)).unwrap();

    let result = client.get(".json", None).await;

    assert!(matches!(result, Err(RestError::InvalidPath { .. })));
}
