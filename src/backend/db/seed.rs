//! Database Seeding
//!
//! Creates the default administrator account on startup. Running it again
//! is harmless: an existing account with the same email is left untouched.

use sqlx::PgPool;

use crate::backend::auth::password::hash_password;
use crate::backend::auth::users::{first_or_create_user, NewUser};
use crate::backend::error::BackendError;
use crate::shared::models::User;

pub const ADMIN_NAME: &str = "Admin";
pub const ADMIN_EMAIL: &str = "admin@admin.com";
pub const ADMIN_PASSWORD: &str = "admin";

/// Ensure the default admin account exists
pub async fn seed_admin(pool: &PgPool) -> Result<User, BackendError> {
    let admin = NewUser {
        name: ADMIN_NAME.to_string(),
        email: ADMIN_EMAIL.to_string(),
        password_hash: hash_password(ADMIN_PASSWORD)?,
        role: User::ROLE_ADMIN.to_string(),
    };

    match first_or_create_user(pool, &admin).await {
        Ok(user) => {
            tracing::info!("Admin seeded successfully");
            Ok(user)
        }
        Err(e) => {
            tracing::error!("Failed to seed admin: {}", e);
            Err(e.into())
        }
    }
}
