//! ログインAPI Contract Tests
//!
//! POST /api/auth/login

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use sentinel_api::auth::jwt::verify_jwt;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::support::app::{create_test_app, stored_records, TEST_JWT_SECRET};

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}

fn login_query(query: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/api/auth/login?{}", query))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_login_success_returns_signed_token() {
    let (app, _pool, _dir) = create_test_app().await;
    let (status, body) = send(&app, login_query("username=admin&password=admin")).await;

    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().expect("token field");
    let claims = verify_jwt(token, TEST_JWT_SECRET).unwrap();
    assert_eq!(claims.sub, "admin");
    assert!(claims.exp > claims.iat);
}

#[tokio::test]
async fn test_login_success_with_form_body() {
    let (app, _pool, _dir) = create_test_app().await;
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("username=admin&password=admin"))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].is_string());
}

#[tokio::test]
async fn test_login_wrong_password_returns_401() {
    let (app, _pool, _dir) = create_test_app().await;
    let (status, body) = send(&app, login_query("username=admin&password=wrong")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"error": "Invalid credentials"}));
}

#[tokio::test]
async fn test_login_unknown_user_returns_401() {
    let (app, _pool, _dir) = create_test_app().await;
    let (status, body) = send(&app, login_query("username=root&password=admin")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_missing_username_returns_400() {
    let (app, _pool, _dir) = create_test_app().await;
    let (status, body) = send(&app, login_query("password=admin")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Missing parameter: username"}));
}

#[tokio::test]
async fn test_login_attempts_are_audited_without_flag() {
    let (app, pool, _dir) = create_test_app().await;
    send(&app, login_query("username=admin&password=admin")).await;
    send(&app, login_query("username=admin&password=wrong")).await;

    let records = stored_records(&pool).await;
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.endpoint == "/api/auth/login"));
    assert!(records.iter().all(|r| r.method == "POST"));
    assert_eq!(records[0].status_code, 200);
    assert_eq!(records[1].status_code, 401);
    assert!(records.iter().all(|r| r.suspected_payload.is_none()));
}

#[tokio::test]
async fn test_login_with_select_in_password_is_flagged() {
    let (app, pool, _dir) = create_test_app().await;
    let (status, _) = send(&app, login_query("username=admin&password=select")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let records = stored_records(&pool).await;
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].suspected_payload.as_deref(),
        Some("username=admin&password=select")
    );
}
