//! Authentication test helpers
//!
//! Token generation against the default JWT settings used by
//! `AppConfig::default()`.

use uuid::Uuid;

use kanban_backend::backend::auth::generate_token;
use kanban_backend::backend::server::config::JwtConfig;

/// Generate a valid token for a test user
pub fn generate_test_token(user_id: i64, email: &str) -> String {
    generate_token(&JwtConfig::default(), user_id, "user", email, Uuid::new_v4())
        .expect("Failed to generate test token")
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
