//! Labels

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A colored tag that can be attached to cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Label {
    pub internal_id: i64,
    pub public_id: Uuid,
    pub name: String,
    pub color: String,
}
