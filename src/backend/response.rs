//! Response Envelope
//!
//! Every JSON body produced by the API is wrapped in the same envelope:
//!
//! ```json
//! {
//!   "status": "Success",
//!   "response_code": 200,
//!   "message": "Board loaded",
//!   "data": { ... }
//! }
//! ```
//!
//! `message`, `data` and `error` are omitted when empty. Paginated listings
//! additionally carry a `meta` object.
//!
//! The helpers below build a complete Axum [`Response`] with the HTTP status
//! matching `response_code`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

/// Standard response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T = serde_json::Value> {
    pub status: String,
    pub response_code: u16,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error: String,
}

/// Envelope for paginated listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T = serde_json::Value> {
    pub status: String,
    pub response_code: u16,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error: String,
    pub meta: PaginationMeta,
}

/// Paging information attached to listings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
    /// Filter expression echoed back, e.g. `name=triady`
    pub filter: String,
    /// Sort expression echoed back, e.g. `-id`
    pub sort: String,
}

impl PaginationMeta {
    /// Build meta for a page, deriving `total_pages` from `total` and `limit`
    pub fn new(page: u64, limit: u64, total: u64) -> Self {
        let total_pages = if limit == 0 { 0 } else { total.div_ceil(limit) };
        Self {
            page,
            limit,
            total,
            total_pages,
            ..Self::default()
        }
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = sort.into();
        self
    }
}

fn envelope<T: Serialize>(
    status: StatusCode,
    label: &str,
    message: impl Into<String>,
    data: Option<T>,
    error: impl Into<String>,
) -> Response {
    let body = ApiResponse {
        status: label.to_string(),
        response_code: status.as_u16(),
        message: message.into(),
        data,
        error: error.into(),
    };
    (status, Json(body)).into_response()
}

fn paginated<T: Serialize>(
    status: StatusCode,
    label: &str,
    message: impl Into<String>,
    data: Option<T>,
    meta: PaginationMeta,
) -> Response {
    let body = PaginatedResponse {
        status: label.to_string(),
        response_code: status.as_u16(),
        message: message.into(),
        data,
        error: String::new(),
        meta,
    };
    (status, Json(body)).into_response()
}

/// 200 with data
pub fn success<T: Serialize>(message: impl Into<String>, data: T) -> Response {
    envelope(StatusCode::OK, "Success", message, Some(data), "")
}

/// 200 with a page of data
pub fn success_pagination<T: Serialize>(
    message: impl Into<String>,
    data: T,
    meta: PaginationMeta,
) -> Response {
    paginated(StatusCode::OK, "Success", message, Some(data), meta)
}

/// 201 with the created resource
pub fn created<T: Serialize>(message: impl Into<String>, data: T) -> Response {
    envelope(StatusCode::CREATED, "Created", message, Some(data), "")
}

pub fn bad_request(message: impl Into<String>, error: impl Into<String>) -> Response {
    error_response(StatusCode::BAD_REQUEST, message, error)
}

pub fn not_found(message: impl Into<String>, error: impl Into<String>) -> Response {
    error_response(StatusCode::NOT_FOUND, message, error)
}

/// 404 for an empty page; still carries the (empty) data and meta
pub fn not_found_pagination<T: Serialize>(
    message: impl Into<String>,
    data: T,
    meta: PaginationMeta,
) -> Response {
    paginated(StatusCode::NOT_FOUND, "Not Found", message, Some(data), meta)
}

pub fn unauthorized(message: impl Into<String>, error: impl Into<String>) -> Response {
    error_response(StatusCode::UNAUTHORIZED, message, error)
}

pub fn internal_server_error(message: impl Into<String>, error: impl Into<String>) -> Response {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, message, error)
}

/// Error envelope for any status code
pub fn error_response(
    status: StatusCode,
    message: impl Into<String>,
    error: impl Into<String>,
) -> Response {
    envelope::<()>(status, error_label(status), message, None, error)
}

fn error_label(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "Error Bad Request",
        StatusCode::UNAUTHORIZED => "Error Unauthorized",
        StatusCode::NOT_FOUND => "Error Not Found",
        StatusCode::INTERNAL_SERVER_ERROR => "Internal Server Error",
        StatusCode::SERVICE_UNAVAILABLE => "Error Service Unavailable",
        _ => "Error",
    }
}
