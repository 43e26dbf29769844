/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/login` - User login
 *
 * ## Ordering (requires authentication)
 * - `GET|PUT /api/boards/{board_id}/list-order`
 * - `PATCH /api/boards/{board_id}/list-order/move`
 * - `GET|PUT /api/lists/{list_id}/card-order`
 * - `PATCH /api/lists/{list_id}/card-order/move`
 */

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::backend::auth::login;
use crate::backend::ordering::{
    get_card_order, get_list_order, move_card, move_list, put_card_order, put_list_order,
};
use crate::backend::server::state::AppState;

/// Add the API routes to `router`
///
/// Ordering routes authenticate through the `AuthUser` extractor, so a
/// missing or invalid token is rejected with 401 before the handler runs.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/auth/login", post(login))
        .route(
            "/api/boards/{board_id}/list-order",
            get(get_list_order).put(put_list_order),
        )
        .route("/api/boards/{board_id}/list-order/move", patch(move_list))
        .route(
            "/api/lists/{list_id}/card-order",
            get(get_card_order).put(put_card_order),
        )
        .route("/api/lists/{list_id}/card-order/move", patch(move_card))
}
