//! Middleware Module
//!
//! Request processing shared by several routes.
//!
//! - **`auth`** - Bearer token verification and the `AuthUser` extractor

pub mod auth;

pub use auth::{authenticate, AuthUser, AuthenticatedUser};
