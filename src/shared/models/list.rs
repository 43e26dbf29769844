//! Lists and list ordering

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::uuid_array::UuidArray;

/// A column on a board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct List {
    pub internal_id: i64,
    pub public_id: Uuid,
    pub board_public_id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub board_internal_id: i64,
}

/// Display order of the lists on one board
///
/// `list_order` holds list public ids, first element leftmost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ListPosition {
    pub internal_id: i64,
    pub public_id: Uuid,
    #[serde(rename = "board_id")]
    pub board_internal_id: i64,
    pub list_order: UuidArray,
}

impl ListPosition {
    /// Move `list_id` to `index`, appending it if it was not in the order yet
    pub fn move_to(&mut self, list_id: Uuid, index: usize) {
        self.list_order.move_to(list_id, index);
    }
}
