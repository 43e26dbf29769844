/**
 * Server Initialization
 *
 * Builds the application from a loaded `AppConfig`:
 * 1. Connect to PostgreSQL
 * 2. Apply migrations
 * 3. Seed the admin account
 * 4. Create the router
 *
 * # Error Handling
 *
 * The function is designed to be resilient:
 * - Unreachable database: server starts without a pool, handlers answer 503
 * - Migration failure: logged, the pool is dropped
 * - Seeding failure: logged, startup continues
 */

use axum::Router;
use sqlx::PgPool;

use crate::backend::db;
use crate::backend::routes::create_router;
use crate::backend::server::config::AppConfig;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
pub async fn create_app(config: AppConfig) -> Router<()> {
    tracing::info!("Initializing Kanban backend server");

    let db_pool = load_database(&config).await;
    let app_state = AppState::new(config, db_pool);

    let app = create_router(app_state);
    tracing::info!("Router configured");
    app
}

/// Connect, migrate and seed; `None` if the database is unusable
async fn load_database(config: &AppConfig) -> Option<PgPool> {
    let pool = match db::connect(&config.database).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            tracing::warn!("Continuing without database");
            return None;
        }
    };

    if let Err(e) = db::run_migrations(&pool).await {
        tracing::error!("Failed to run migrations: {}", e);
        return None;
    }

    if let Err(e) = db::seed::seed_admin(&pool).await {
        tracing::warn!("Continuing without admin seed: {}", e);
    }

    Some(pool)
}
