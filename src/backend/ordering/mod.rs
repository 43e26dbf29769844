//! Ordering Module
//!
//! HTTP handlers for the display order of lists on a board and cards in a
//! list. The orders are stored as `uuid[]` columns and reach the handlers
//! as [`UuidArray`](crate::shared::uuid_array::UuidArray) values.
//!
//! # Module Structure
//!
//! ```text
//! ordering/
//! ├── mod.rs      - Module exports
//! ├── types.rs    - Request bodies
//! └── handlers.rs - GET / PUT / PATCH handlers
//! ```
//!
//! All routes require a Bearer token.

/// Request bodies
pub mod types;

/// Order handlers
pub mod handlers;

pub use handlers::{
    get_card_order, get_list_order, move_card, move_list, put_card_order, put_list_order,
};
pub use types::{MoveRequest, OrderRequest};
