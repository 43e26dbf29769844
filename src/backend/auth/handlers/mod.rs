//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports
//! ├── types.rs    - Request and response types
//! └── login.rs    - User authentication handler
//! ```
//!
//! # Handlers
//!
//! - **`login`** - POST /api/auth/login - Exchange credentials for a JWT

/// Request and response types
pub mod types;

/// Login handler
pub mod login;

pub use types::{LoginRequest, LoginResponse, UserResponse};
pub use login::login;
