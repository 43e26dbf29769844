//! Assertions on the JSON response envelope

use axum::{body::Body, http::StatusCode, response::Response};
use serde_json::Value;

/// Read a response body as JSON
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}

/// Assert the status code and that the envelope mirrors it
pub async fn assert_envelope(response: Response<Body>, expected: StatusCode) -> Value {
    assert_eq!(response.status(), expected);
    let json = body_json(response).await;
    assert_eq!(json["response_code"], expected.as_u16());
    assert!(json["status"].is_string(), "envelope has no status: {json}");
    json
}
