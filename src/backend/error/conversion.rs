/**
 * Error Conversion
 *
 * All backend errors implement `IntoResponse` from Axum, allowing them to be
 * returned directly from handlers. The error is rendered through the same
 * JSON envelope as successful responses (see `backend::response`):
 *
 * ```json
 * {
 *   "status": "Error Unauthorized",
 *   "response_code": 401,
 *   "message": "Invalid or expired token",
 *   "error": "Unauthorized"
 * }
 * ```
 */

use axum::response::{IntoResponse, Response};
use crate::backend::error::types::BackendError;
use crate::backend::response::error_response;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected: {}", self);
        }

        error_response(status, self.message(), status.canonical_reason().unwrap_or_default())
    }
}
