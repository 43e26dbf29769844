//! User accounts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user
///
/// The password hash and the soft-delete marker never leave the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub internal_id: i64,
    pub public_id: Uuid,
    pub name: String,
    /// Unique across all users
    pub email: String,
    /// bcrypt hash
    #[serde(skip_serializing, default)]
    pub password: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    pub const ROLE_ADMIN: &'static str = "admin";
    pub const ROLE_USER: &'static str = "user";

    pub fn is_admin(&self) -> bool {
        self.role == Self::ROLE_ADMIN
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
