//! Server Module
//!
//! - **`config`** - Configuration loading and validation
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`init`** - Server initialization and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── config.rs - Configuration loading (port, database, JWT)
//! ├── state.rs  - AppState and FromRef implementations
//! └── init.rs   - Server initialization and app creation
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use kanban_backend::backend::server::{config::AppConfig, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod init;
pub mod state;

pub use config::AppConfig;
pub use init::create_app;
pub use state::AppState;
