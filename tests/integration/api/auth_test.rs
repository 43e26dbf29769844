//! Authentication API integration tests

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use kanban_backend::backend::routes::create_router;
use kanban_backend::backend::server::{AppConfig, AppState};

use crate::common::assertions::assert_envelope;

fn create_test_app() -> Router {
    create_router(AppState::new(AppConfig::default(), None))
}

fn login_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/auth/login")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_login_without_database() {
    let response = create_test_app()
        .oneshot(login_request(serde_json::json!({
            "email": "admin@admin.com",
            "password": "admin"
        })))
        .await
        .unwrap();

    let json = assert_envelope(response, StatusCode::SERVICE_UNAVAILABLE).await;
    assert_eq!(json["message"], "Database not configured");
}

#[tokio::test]
async fn test_login_rejects_malformed_body() {
    let response = create_test_app()
        .oneshot(login_request(serde_json::json!({ "email": "admin@admin.com" })))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_health() {
    let response = create_test_app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let json = assert_envelope(response, StatusCode::OK).await;
    assert_eq!(json["data"]["status"], "ok");
}
