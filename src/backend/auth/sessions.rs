/**
 * Session Management and JWT Tokens
 *
 * This module handles JWT token generation and validation for user sessions.
 * Tokens are HS256-signed with `JWT_SECRET` and expire after `JWT_EXPIRED`.
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::server::config::JwtConfig;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Internal user ID
    pub user_id: i64,
    /// Role used for authorization checks
    pub role: String,
    /// Email
    pub email: String,
    /// Public user ID returned to clients
    pub public_id: Uuid,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

fn now_secs() -> u64 {
    u64::try_from(Utc::now().timestamp()).unwrap_or_default()
}

/// Create a JWT token for a user
pub fn generate_token(
    config: &JwtConfig,
    user_id: i64,
    role: &str,
    email: &str,
    public_id: Uuid,
) -> Result<String, BackendError> {
    let now = now_secs();
    let claims = Claims {
        user_id,
        role: role.to_string(),
        email: email.to_string(),
        public_id,
        exp: now.saturating_add(config.expires_in.as_secs()),
        iat: now,
    };
    sign(config, &claims)
}

fn sign(config: &JwtConfig, claims: &Claims) -> Result<String, BackendError> {
    let key = EncodingKey::from_secret(config.secret.as_bytes());
    Ok(encode(&Header::default(), claims, &key)?)
}

/// Verify and decode a JWT token
pub fn verify_token(config: &JwtConfig, token: &str) -> Result<Claims, BackendError> {
    let key = DecodingKey::from_secret(config.secret.as_bytes());
    let token_data = decode::<Claims>(token, &key, &Validation::default())?;
    Ok(token_data.claims)
}
