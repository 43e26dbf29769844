//! Kanban Backend - Main Library
//!
//! Data layer and HTTP surface for a Kanban project-management backend:
//! users, boards, lists and cards persisted in PostgreSQL, with the display
//! order of lists and cards kept as `uuid[]` columns.
//!
//! # Module Structure
//!
//! - **`shared`** - Types that do not depend on the server
//!   - `uuid_array`: the identifier-array column codec
//!   - `models`: row types for every table
//!   - `error`: shared error types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server, configuration and state
//!   - Authentication (bcrypt, JWT) and the login handler
//!   - Database pool, migrations, seeding, position repositories
//!
//! # Feature Flags
//!
//! - **`ssr`** - Enables the backend modules (default)
//!
//! # Usage
//!
//! ```rust
//! use kanban_backend::shared::UuidArray;
//!
//! let order: UuidArray = "{0f8fad5b-d9cb-469f-a165-70867728950e}".parse().unwrap();
//! assert_eq!(order.to_string(), "{0f8fad5b-d9cb-469f-a165-70867728950e}");
//! ```

pub mod shared;

#[cfg(feature = "ssr")]
pub mod backend;
