/**
 * Authentication Extractor
 *
 * Protects routes that require a logged-in user. The `AuthUser` extractor
 * reads the `Authorization: Bearer <token>` header, verifies the JWT with
 * the configured secret and hands the claims to the handler.
 */

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use uuid::Uuid;

use crate::backend::auth::sessions::{verify_token, Claims};
use crate::backend::error::BackendError;
use crate::backend::server::config::JwtConfig;
use crate::backend::server::state::AppState;

/// Authenticated user data extracted from the JWT
#[derive(Clone, Debug, PartialEq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub public_id: Uuid,
    pub email: String,
    pub role: String,
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            public_id: claims.public_id,
            email: claims.email,
            role: claims.role,
        }
    }
}

/// Verify the Bearer token in `headers`
///
/// Returns 401 if the header is missing, malformed, or the token is invalid.
pub fn authenticate(
    headers: &HeaderMap,
    config: &JwtConfig,
) -> Result<AuthenticatedUser, BackendError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::unauthorized("Missing Authorization header")
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        BackendError::unauthorized("Invalid Authorization header format")
    })?;

    let claims = verify_token(config, token).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        e
    })?;

    Ok(claims.into())
}

/// Axum extractor for the authenticated user
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authenticate(&parts.headers, &state.config.jwt).map(AuthUser)
    }
}
