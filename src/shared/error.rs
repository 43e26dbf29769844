//! Shared Error Types
//!
//! Failures detected on data before it reaches the database, independent of
//! the HTTP layer. The backend maps them to 400 responses.
//!
//! ```rust
//! use kanban_backend::shared::error::SharedError;
//!
//! let error = SharedError::validation("list_order", "duplicate identifier");
//! assert_eq!(
//!     error.to_string(),
//!     "Validation error in field 'list_order': duplicate identifier"
//! );
//! ```
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A submitted value breaks a rule of its field, e.g. an order listing
    /// the same id twice
    #[error("Validation error in field '{field}': {message}")]
    ValidationError { field: String, message: String },
}

impl SharedError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } => field,
        }
    }
}
