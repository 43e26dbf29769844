//! Ordering API integration tests

use axum::{
    body::Body,
    http::{header::AUTHORIZATION, header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use tower::ServiceExt;
use uuid::Uuid;

use kanban_backend::backend::routes::create_router;
use kanban_backend::backend::server::{AppConfig, AppState};

use crate::common::assertions::assert_envelope;
use crate::common::auth_helpers::{auth_header, generate_test_token};
use crate::common::requests::api_request;

fn create_test_app() -> Router {
    create_router(AppState::new(AppConfig::default(), None))
}

#[tokio::test]
async fn test_list_order_requires_token() {
    let response = create_test_app()
        .oneshot(
            Request::builder()
                .uri("/api/boards/1/list-order")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let json = assert_envelope(response, StatusCode::UNAUTHORIZED).await;
    assert_eq!(json["status"], "Error Unauthorized");
}

#[tokio::test]
async fn test_card_order_rejects_bad_token() {
    let response = create_test_app()
        .oneshot(
            Request::builder()
                .uri("/api/lists/1/card-order")
                .header(AUTHORIZATION, auth_header("not-a-jwt"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_envelope(response, StatusCode::UNAUTHORIZED).await;
}

#[tokio::test]
async fn test_list_order_with_token_without_database() {
    let token = generate_test_token(1, "user@example.com");
    let response = create_test_app()
        .oneshot(
            Request::builder()
                .uri("/api/boards/1/list-order")
                .header(AUTHORIZATION, auth_header(&token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_envelope(response, StatusCode::SERVICE_UNAVAILABLE).await;
}

#[tokio::test]
async fn test_put_card_order_without_database() {
    let token = generate_test_token(1, "user@example.com");
    let body = serde_json::json!({ "order": [Uuid::new_v4(), Uuid::new_v4()] });
    let response = create_test_app()
        .oneshot(
            Request::builder()
                .method(Method::PUT)
                .uri("/api/lists/3/card-order")
                .header(AUTHORIZATION, auth_header(&token))
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_envelope(response, StatusCode::SERVICE_UNAVAILABLE).await;
}

#[tokio::test]
async fn test_put_list_order_rejects_invalid_identifier() {
    let token = generate_test_token(1, "user@example.com");
    let body = serde_json::json!({ "order": ["not-a-uuid"] });
    let response = create_test_app()
        .oneshot(
            Request::builder()
                .method(Method::PUT)
                .uri("/api/boards/1/list-order")
                .header(AUTHORIZATION, auth_header(&token))
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_put_list_order_rejects_duplicate_identifier() {
    let token = generate_test_token(1, "user@example.com");
    let id = Uuid::new_v4();
    let response = create_test_app()
        .oneshot(api_request(
            Method::PUT,
            "/api/boards/1/list-order",
            Some(&token),
            Some(serde_json::json!({ "order": [id, Uuid::new_v4(), id] })),
        ))
        .await
        .unwrap();

    let json = assert_envelope(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["status"], "Error Bad Request");
    assert!(json["message"].as_str().unwrap().contains("list_order"));
}

#[tokio::test]
async fn test_move_routes_require_token() {
    for uri in ["/api/boards/1/list-order/move", "/api/lists/1/card-order/move"] {
        let response = create_test_app()
            .oneshot(api_request(
                Method::PATCH,
                uri,
                None,
                Some(serde_json::json!({ "id": Uuid::new_v4(), "index": 0 })),
            ))
            .await
            .unwrap();

        assert_envelope(response, StatusCode::UNAUTHORIZED).await;
    }
}

#[tokio::test]
async fn test_move_routes_without_database() {
    let token = generate_test_token(1, "user@example.com");
    for uri in ["/api/boards/1/list-order/move", "/api/lists/1/card-order/move"] {
        let response = create_test_app()
            .oneshot(api_request(
                Method::PATCH,
                uri,
                Some(&token),
                Some(serde_json::json!({ "id": Uuid::new_v4(), "index": 3 })),
            ))
            .await
            .unwrap();

        assert_envelope(response, StatusCode::SERVICE_UNAVAILABLE).await;
    }
}

#[tokio::test]
async fn test_move_rejects_negative_index() {
    let token = generate_test_token(1, "user@example.com");
    let response = create_test_app()
        .oneshot(api_request(
            Method::PATCH,
            "/api/boards/1/list-order/move",
            Some(&token),
            Some(serde_json::json!({ "id": Uuid::new_v4(), "index": -1 })),
        ))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}
