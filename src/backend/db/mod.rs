//! Database Bootstrap
//!
//! Connection pool creation, schema migrations and seeding.
//!
//! The pool is sized from `DatabaseConfig`: up to 100 connections, 10 kept
//! open, each recycled after an hour.

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::backend::error::BackendError;
use crate::backend::server::config::DatabaseConfig;

/// List and card order rows
pub mod positions;

/// Initial data (admin account)
pub mod seed;

pub use positions::{
    get_card_order, get_list_order, move_card, move_list, save_card_order, save_list_order,
};

/// Create the PostgreSQL connection pool
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, BackendError> {
    tracing::info!(
        host = %config.host,
        database = %config.name,
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Connecting to database"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .max_lifetime(Some(config.max_lifetime))
        .connect(&config.connection_url())
        .await?;

    tracing::info!("Database connection pool created successfully");
    Ok(pool)
}

/// Apply the migrations embedded from `./migrations`
pub async fn run_migrations(pool: &PgPool) -> Result<(), BackendError> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(pool).await?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}

/// Check that the database answers
pub async fn ping(pool: &PgPool) -> Result<(), BackendError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
