//! Request bodies for the order endpoints

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;
use crate::shared::uuid_array::UuidArray;

/// Replace a whole order
///
/// ```json
/// { "order": ["0f8fad5b-d9cb-469f-a165-70867728950e", "..."] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    pub order: UuidArray,
}

impl OrderRequest {
    /// Reject orders listing the same id twice
    pub fn validate(&self, field: &str) -> Result<(), SharedError> {
        match self.order.first_duplicate() {
            Some(id) => Err(SharedError::validation(field, format!("duplicate identifier {id}"))),
            None => Ok(()),
        }
    }
}

/// Move one id within an order (drag and drop)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoveRequest {
    pub id: Uuid,
    /// Target index; values past the end append
    pub index: usize,
}
