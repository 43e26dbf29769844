//! Authentication Module
//!
//! Password hashing, JWT sessions, user lookups and the login endpoint.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── password.rs     - bcrypt hashing
//! ├── sessions.rs     - JWT token management
//! ├── users.rs        - User database operations
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs
//!     ├── types.rs
//!     └── login.rs
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Login**: email + password → credentials verified → JWT returned
//! 2. **Protected routes**: `Authorization: Bearer <token>` → `AuthUser` extractor
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are HS256-signed and expire after `JWT_EXPIRED`
//! - Invalid credentials return 401 without saying which part was wrong

/// bcrypt password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// User database operations
pub mod users;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{LoginRequest, LoginResponse, UserResponse};
pub use handlers::login;
pub use password::{hash_password, verify_password};
pub use sessions::{generate_token, verify_token, Claims};
