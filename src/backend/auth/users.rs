/**
 * User Model and Database Operations
 *
 * Queries against the `users` table. Soft-deleted users (`deleted_at` set)
 * are invisible to lookups.
 */

use sqlx::PgPool;
use uuid::Uuid;

use crate::shared::models::User;

const USER_COLUMNS: &str =
    "internal_id, public_id, name, email, password, role, created_at, updated_at, deleted_at";

/// Fields needed to insert a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    /// Already-hashed password
    pub password_hash: String,
    pub role: String,
}

/// Get user by email
pub async fn find_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE email = $1 AND deleted_at IS NULL"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Get user by public ID
pub async fn find_user_by_public_id(
    pool: &PgPool,
    public_id: Uuid,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE public_id = $1 AND deleted_at IS NULL"
    ))
    .bind(public_id)
    .fetch_optional(pool)
    .await
}

/// Return the user with this email, creating it if it does not exist
///
/// Matching is on email only; an existing row is returned untouched.
pub async fn first_or_create_user(pool: &PgPool, user: &NewUser) -> Result<User, sqlx::Error> {
    let inserted = sqlx::query_as::<_, User>(&format!(
        r#"
        INSERT INTO users (name, email, password, role)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (email) DO NOTHING
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(&user.role)
    .fetch_optional(pool)
    .await?;

    match inserted {
        Some(created) => Ok(created),
        None => sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(&user.email)
        .fetch_one(pool)
        .await,
    }
}
