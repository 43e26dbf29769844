//! Backend Module
//!
//! Server-side code: HTTP server, persistence, authentication.
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── server/     - Configuration, state, initialization
//! ├── routes/     - Router assembly
//! ├── auth/       - Passwords, JWT, login handler, user repository
//! ├── middleware/ - Bearer token extractor
//! ├── ordering/   - List and card order handlers
//! ├── db/         - Pool, migrations, seeding, position repositories
//! ├── error/      - BackendError and its HTTP rendering
//! └── response.rs - JSON response envelope
//! ```

pub mod auth;
pub mod db;
pub mod error;
pub mod middleware;
pub mod ordering;
pub mod response;
pub mod routes;
pub mod server;
