/**
 * Router Configuration
 *
 * Combines the health check and the API routes into a single Axum router,
 * wrapped in a `TraceLayer` so every request is logged through `tracing`.
 *
 * Unknown paths fall through to a 404 envelope.
 */

use axum::{
    extract::State,
    response::Response,
    routing::get,
    Router,
};
use serde_json::json;
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use crate::backend::db;
use crate::backend::response;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// - `GET /health` - Liveness and database status
/// - `/api/...` - see `api_routes`
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/health", get(health));

    let router = configure_api_routes(router);

    router
        .fallback(|| async { response::not_found("Route not found", "Not Found") })
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// GET /health
///
/// Always 200; `database` reports `up`, `down` or `not configured`.
async fn health(State(pool): State<Option<PgPool>>) -> Response {
    let database = match &pool {
        None => "not configured",
        Some(pool) => match db::ping(pool).await {
            Ok(()) => "up",
            Err(e) => {
                tracing::warn!("Database health check failed: {}", e);
                "down"
            }
        },
    };

    response::success("OK", json!({ "status": "ok", "database": database }))
}
