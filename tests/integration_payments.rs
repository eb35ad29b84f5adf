//! Payment intent creation against a recording provider stub.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use lifelink::router::init_router;
use serde_json::json;
use tower::ServiceExt;

use common::{MockPaymentProvider, test_state_with};

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn intent_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/payments/create-payment-intent")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_create_payment_intent_returns_client_secret() {
    let provider = Arc::new(MockPaymentProvider::default());
    let app = init_router(test_state_with(provider.clone()));

    let response = app
        .oneshot(intent_request(json!({ "amount": 25 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["client_secret"], "pi_test_1_secret_abc");
}

#[tokio::test]
async fn test_create_payment_intent_converts_to_minor_units() {
    let provider = Arc::new(MockPaymentProvider::default());
    let app = init_router(test_state_with(provider.clone()));

    let response = app
        .oneshot(intent_request(json!({ "amount": 25 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let calls = provider.calls.lock().unwrap();
    assert_eq!(calls.as_slice(), &[(2500, "usd".to_string())]);
}

#[tokio::test]
async fn test_create_payment_intent_rejects_zero_amount() {
    let provider = Arc::new(MockPaymentProvider::default());
    let app = init_router(test_state_with(provider.clone()));

    let response = app
        .oneshot(intent_request(json!({ "amount": 0 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["violations"][0]["path"], "amount");

    // Validation is a total barrier; the provider is never consulted.
    assert!(provider.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_payment_intent_rejects_missing_amount() {
    let provider = Arc::new(MockPaymentProvider::default());
    let app = init_router(test_state_with(provider.clone()));

    let response = app.oneshot(intent_request(json!({}))).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(provider.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_provider_failure_surfaces_as_generic_server_error() {
    let provider = Arc::new(MockPaymentProvider::failing());
    let app = init_router(test_state_with(provider.clone()));

    let response = app
        .oneshot(intent_request(json!({ "amount": 10 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Internal server error");
}
