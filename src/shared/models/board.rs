//! Boards and board membership

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A Kanban board owned by one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Board {
    pub internal_id: i64,
    pub public_id: Uuid,
    pub title: String,
    pub description: String,
    pub owner_internal_id: i64,
    pub owner_public_id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub due_date: Option<DateTime<Utc>>,
}

/// Membership of a user in a board (composite key)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct BoardMember {
    pub board_internal_id: i64,
    pub user_internal_id: i64,
    pub joined_at: DateTime<Utc>,
}
