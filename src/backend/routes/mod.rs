//! Route Configuration Module
//!
//! - **`router`** - Main router creation, health check, tracing layer
//! - **`api_routes`** - Auth and ordering endpoints
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports and documentation
//! ├── router.rs     - Main router creation
//! └── api_routes.rs - API endpoint routes
//! ```

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
