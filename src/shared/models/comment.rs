//! Card comments

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A comment left by a user on a card
///
/// Carries both the internal keys (for joins) and the public ids of the
/// card and author (for clients).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub internal_id: i64,
    pub public_id: Uuid,
    pub card_internal_id: i64,
    #[serde(rename = "card_id")]
    pub card_public_id: Uuid,
    pub user_internal_id: i64,
    #[serde(rename = "user_id")]
    pub user_public_id: Uuid,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
