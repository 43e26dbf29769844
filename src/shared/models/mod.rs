//! Data Model
//!
//! Row types for every table of the Kanban schema. Each entity has an
//! internal `BIGSERIAL` key used for joins and a public UUID exposed to
//! clients.
//!
//! # Module Structure
//!
//! ```text
//! models/
//! ├── mod.rs      - Module exports
//! ├── user.rs     - Users (soft-deletable)
//! ├── board.rs    - Boards and board membership
//! ├── list.rs     - Lists and the per-board list order
//! ├── card.rs     - Cards, card order, assignees, labels, attachments
//! ├── label.rs    - Labels
//! └── comment.rs  - Card comments
//! ```
//!
//! The two ordering rows (`ListPosition`, `CardPosition`) hold a
//! [`UuidArray`](crate::shared::uuid_array::UuidArray) backed by a
//! `uuid[]` column.

pub mod board;
pub mod card;
pub mod comment;
pub mod label;
pub mod list;
pub mod user;

pub use board::{Board, BoardMember};
pub use card::{Card, CardAssignee, CardAttachment, CardLabel, CardPosition};
pub use comment::Comment;
pub use label::Label;
pub use list::{List, ListPosition};
pub use user::User;
