//! Cards and everything hanging off a card

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::uuid_array::UuidArray;

/// A task card inside a list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Card {
    pub internal_id: i64,
    pub public_id: Uuid,
    #[serde(rename = "list_id")]
    pub list_internal_id: i64,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub due_date: Option<DateTime<Utc>>,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

/// Display order of the cards in one list
///
/// `card_order` holds card public ids, first element on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CardPosition {
    pub internal_id: i64,
    pub public_id: Uuid,
    pub list_internal_id: i64,
    pub card_order: UuidArray,
}

impl CardPosition {
    /// Move `card_id` to `index`, appending it if it was not in the order yet
    pub fn move_to(&mut self, card_id: Uuid, index: usize) {
        self.card_order.move_to(card_id, index);
    }
}

/// User assigned to a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CardAssignee {
    pub card_internal_id: i64,
    pub user_internal_id: i64,
}

/// Label attached to a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CardLabel {
    pub card_internal_id: i64,
    pub label_internal_id: i64,
}

/// File uploaded to a card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CardAttachment {
    pub internal_id: i64,
    pub public_id: Uuid,
    /// Storage path or URL of the uploaded file
    pub file: String,
    pub user_internal_id: i64,
    pub card_internal_id: i64,
    pub created_at: DateTime<Utc>,
}
