/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Generate JWT token
 * 4. Return token and user info in the response envelope
 *
 * Unknown email and wrong password produce the same 401 response.
 */
use std::sync::Arc;

use axum::{
    extract::State,
    response::{Json, Response},
};
use sqlx::PgPool;

use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse, UserResponse};
use crate::backend::auth::password::verify_password;
use crate::backend::auth::sessions::generate_token;
use crate::backend::auth::users::find_user_by_email;
use crate::backend::error::BackendError;
use crate::backend::response;
use crate::backend::server::config::AppConfig;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - If user is not found or password is incorrect
/// * `503 Service Unavailable` - If database is not configured
/// * `500 Internal Server Error` - If database query or token generation fails
///
/// # Example Request
///
/// ```http
/// POST /api/auth/login HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "admin@admin.com", "password": "admin" }
/// ```
pub async fn login(
    State(pool): State<Option<PgPool>>,
    State(config): State<Arc<AppConfig>>,
    Json(request): Json<LoginRequest>,
) -> Result<Response, BackendError> {
    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        BackendError::database_unavailable()
    })?;
    tracing::info!("Login request for: {}", request.email);

    let Some(user) = find_user_by_email(&pool, &request.email).await? else {
        tracing::warn!("User not found: {}", request.email);
        return Ok(response::unauthorized(INVALID_CREDENTIALS, "unknown user"));
    };

    if !verify_password(&request.password, &user.password)? {
        tracing::warn!("Invalid password for user: {}", request.email);
        return Ok(response::unauthorized(INVALID_CREDENTIALS, "wrong password"));
    }

    let token = generate_token(
        &config.jwt,
        user.internal_id,
        &user.role,
        &user.email,
        user.public_id,
    )?;

    tracing::info!("User logged in successfully: {} ({})", user.name, user.email);

    Ok(response::success(
        "Login successful",
        LoginResponse {
            token,
            user: UserResponse::from(&user),
        },
    ))
}
