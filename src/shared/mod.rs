//! Shared Module
//!
//! Types and data structures that do not depend on the HTTP server: the
//! relational data model, the UUID array column codec and the shared error
//! type. Everything here compiles without the `ssr` feature.

/// Relational data model (boards, lists, cards, labels, ...)
pub mod models;

/// PostgreSQL `uuid[]` column codec
pub mod uuid_array;

/// Shared error types
pub mod error;

pub use error::SharedError;
pub use uuid_array::{RawValue, UuidArray, UuidArrayError};
