/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and repositories, and can be
 * converted to HTTP responses.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Errors raised directly by a handler with an explicit status code:
 * - Missing or malformed Authorization header
 * - Database not configured
 *
 * ## Infrastructure Errors
 *
 * Errors bubbling up from the database, password hashing or token signing.
 * They map to 500 except where noted on `status_code`.
 *
 * ## Data Errors
 *
 * sqlx reports a column that fails to decode as `ColumnDecode`. When the
 * underlying cause is a `UuidArrayError` the conversion below lifts it into
 * `Codec`, a read failure for that record (500). Validation failures from
 * the shared layer map to 400.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::{SharedError, UuidArrayError};

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use kanban_backend::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::UNAUTHORIZED, "Missing token");
/// assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status code
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Database query or connection error
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Password hashing or verification error
    #[error("Password error: {0}")]
    Password(#[from] bcrypt::BcryptError),

    /// JWT signing or verification error
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// A stored identifier array could not be decoded
    #[error("Stored column '{column}' could not be decoded: {source}")]
    Codec {
        column: String,
        source: UuidArrayError,
    },

    /// Shared error (from shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl From<sqlx::Error> for BackendError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::ColumnDecode { index, source } => {
                match source.downcast::<UuidArrayError>() {
                    Ok(codec) => Self::Codec {
                        column: index,
                        source: *codec,
                    },
                    Err(source) => Self::Database(sqlx::Error::ColumnDecode { index, source }),
                }
            }
            other => Self::Database(other),
        }
    }
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// 401 with the given message
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::UNAUTHORIZED, message)
    }

    /// 503 returned when no database pool is available
    pub fn database_unavailable() -> Self {
        Self::handler(StatusCode::SERVICE_UNAVAILABLE, "Database not configured")
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Database(RowNotFound)` - 404 Not Found
    /// - `Token` - 401 Unauthorized
    /// - `SharedError` - 400 Bad Request
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Database(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            Self::Token(_) => StatusCode::UNAUTHORIZED,
            Self::SharedError(SharedError::ValidationError { .. }) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Migration(_) | Self::Password(_) | Self::Codec { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the error message shown to clients
    ///
    /// Infrastructure details are not exposed; they are logged instead.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Database(sqlx::Error::RowNotFound) => "Record not found".to_string(),
            Self::Database(_) | Self::Migration(_) => "Database error".to_string(),
            Self::Password(_) => "Server error".to_string(),
            Self::Token(_) => "Invalid or expired token".to_string(),
            Self::Codec { .. } => "Stored record could not be read".to_string(),
            Self::SharedError(err) => err.to_string(),
        }
    }
}
