#![cfg(feature = "dynamodb")]

use aws_sdk_dynamodb::config::retry::RetryConfig;
use aws_sdk_dynamodb::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_dynamodb::Client;
use httpmock::prelude::*;
use product_api::{DynamoDbStore, Product, ProductStore, StoreError};

const AMZ_JSON: &str = "application/x-amz-json-1.0";

fn store_for(server: &MockServer) -> DynamoDbStore {
    let config = aws_sdk_dynamodb::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::new("test", "test", None, None, "static"))
        .endpoint_url(server.base_url())
        .retry_config(RetryConfig::disabled())
        .build();

    DynamoDbStore::new(Client::from_conf(config), "Products")
}

#[tokio::test]
async fn test_get_product_found() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/")
                .body_contains(r#""TableName":"Products""#)
                .body_contains(r#""Key":{"id":{"S":"42"}}"#);
            then.status(200).header("content-type", AMZ_JSON).body(
                r#"{"Item":{"id":{"S":"42"},"name":{"S":"Widget"},"price":{"N":"9.99"}}}"#,
            );
        })
        .await;

    let product = store_for(&server).get_product("42").await.unwrap();

    mock.assert_async().await;
    assert_eq!(product, Some(Product::new("42", "Widget", 9.99)));
}

#[tokio::test]
async fn test_get_product_absent_is_none() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/");
            then.status(200).header("content-type", AMZ_JSON).body("{}");
        })
        .await;

    let product = store_for(&server).get_product("missing").await.unwrap();
    assert_eq!(product, None);
}

#[tokio::test]
async fn test_put_product_sends_all_attributes() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/")
                .body_contains(r#""id":{"S":"42"}"#)
                .body_contains(r#""name":{"S":"Widget"}"#)
                .body_contains(r#""price":{"N":"9.99"}"#);
            then.status(200).header("content-type", AMZ_JSON).body("{}");
        })
        .await;

    let result = store_for(&server)
        .put_product(&Product::new("42", "Widget", 9.99))
        .await;

    mock.assert_async().await;
    tokio_test::assert_ok!(result);
}

#[tokio::test]
async fn test_delete_product_sends_key() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/")
                .body_contains(r#""Key":{"id":{"S":"42"}}"#);
            then.status(200).header("content-type", AMZ_JSON).body("{}");
        })
        .await;

    let result = store_for(&server).delete_product("42").await;

    mock.assert_async().await;
    tokio_test::assert_ok!(result);
}

#[tokio::test]
async fn test_scan_is_limited_to_one_page() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/").body_contains(r#""Limit":20"#);
            then.status(200).header("content-type", AMZ_JSON).body(
                r#"{
                    "Items": [
                        {"id":{"S":"1"},"name":{"S":"Widget"},"price":{"N":"9.99"}},
                        {"id":{"S":"2"},"name":{"S":"Gadget"},"price":{"N":"20"}}
                    ],
                    "Count": 2,
                    "ScannedCount": 2,
                    "LastEvaluatedKey": {"id":{"S":"2"}}
                }"#,
            );
        })
        .await;

    let products = store_for(&server).get_products().await.unwrap();

    mock.assert_async().await;
    assert_eq!(
        products,
        vec![
            Product::new("1", "Widget", 9.99),
            Product::new("2", "Gadget", 20.0)
        ]
    );
}

#[tokio::test]
async fn test_service_error_is_unavailable() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/");
            then.status(400).header("content-type", AMZ_JSON).body(
                r#"{"__type":"com.amazonaws.dynamodb.v20120810#ResourceNotFoundException","message":"Requested resource not found"}"#,
            );
        })
        .await;

    let error = store_for(&server).get_product("42").await.unwrap_err();

    match error {
        StoreError::Unavailable { operation, .. } => assert_eq!(operation, "GetItem"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_item_is_reported() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/");
            then.status(200)
                .header("content-type", AMZ_JSON)
                .body(r#"{"Item":{"id":{"S":"42"},"price":{"N":"1"}}}"#);
        })
        .await;

    let error = store_for(&server).get_product("42").await.unwrap_err();
    assert!(matches!(error, StoreError::MalformedItem { ref field, .. } if field == "name"));
}
