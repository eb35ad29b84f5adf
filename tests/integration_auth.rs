//! Boundary behavior of the authorization chain and the request validator:
//! everything here is rejected before a single query would run.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use lifelink::router::init_router;
use lifelink_auth::JwtConfig;
use serde_json::json;
use tower::ServiceExt;

use common::{TEST_SECRET, bearer, test_state};

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_me_without_token_is_unauthorized() {
    let app = init_router(test_state());

    let request = Request::builder()
        .method("GET")
        .uri("/api/auth/me")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Missing authorization header");
}

#[tokio::test]
async fn test_me_with_malformed_header_is_unauthorized() {
    let app = init_router(test_state());

    let request = Request::builder()
        .method("GET")
        .uri("/api/auth/me")
        .header("authorization", "Token abc123")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid authorization header format");
}

#[tokio::test]
async fn test_me_with_garbage_token_is_unauthorized() {
    let app = init_router(test_state());

    let request = Request::builder()
        .method("GET")
        .uri("/api/auth/me")
        .header("authorization", "Bearer not-a-real-token")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn test_me_with_expired_token_is_unauthorized() {
    let app = init_router(test_state());

    // Issued two hours in the past, well beyond the default leeway.
    let expired_config = JwtConfig::new(TEST_SECRET, -7200);
    let token = lifelink_auth::create_token("a@x.com", "A", &expired_config).unwrap();

    let request = Request::builder()
        .method("GET")
        .uri("/api/auth/me")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_wrong_secret_is_unauthorized() {
    let app = init_router(test_state());

    let foreign_config = JwtConfig::new("some-other-secret", 3600);
    let token = lifelink_auth::create_token("a@x.com", "A", &foreign_config).unwrap();

    let request = Request::builder()
        .method("GET")
        .uri("/api/auth/me")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_route_without_token_fails_closed() {
    let app = init_router(test_state());

    let request = Request::builder()
        .method("GET")
        .uri("/api/admin/users")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_donation_without_token_is_unauthorized() {
    let app = init_router(test_state());

    let request = Request::builder()
        .method("POST")
        .uri("/api/donations")
        .header("content-type", "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_add_user_rejects_invalid_email() {
    let app = init_router(test_state());

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/add-user")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": "not-an-email",
                "name": "Jane Donor"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["violations"][0]["path"], "email");
}

#[tokio::test]
async fn test_add_user_rejects_missing_name() {
    let app = init_router(test_state());

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/add-user")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "email": "a@x.com" })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["violations"][0]["path"], "name");
    assert_eq!(body["violations"][0]["message"], "name is required");
}

#[tokio::test]
async fn test_add_user_requires_json_content_type() {
    let app = init_router(test_state());

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/add-user")
        .body(Body::from("email=a@x.com"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_request_merchant_without_token_is_unauthorized() {
    // The guard runs before the body validator, so a missing credential
    // wins over the invalid payload.
    let app = init_router(test_state());

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/request-merchant")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "shop_name": "" })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_bearer_helper_produces_verifiable_tokens() {
    let header = bearer("a@x.com", "A");
    let token = header.strip_prefix("Bearer ").unwrap();
    let claims = lifelink_auth::verify_token(token, &JwtConfig::new(TEST_SECRET, 3600)).unwrap();
    assert_eq!(claims.email, "a@x.com");
}
