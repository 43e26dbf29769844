/**
 * Order Handlers
 *
 * ```text
 * GET   /api/boards/{board_id}/list-order       current list order
 * PUT   /api/boards/{board_id}/list-order       replace it
 * PATCH /api/boards/{board_id}/list-order/move  move one list
 * GET   /api/lists/{list_id}/card-order         current card order
 * PUT   /api/lists/{list_id}/card-order         replace it
 * PATCH /api/lists/{list_id}/card-order/move    move one card
 * ```
 *
 * Path ids are internal ids. A board or list without a stored order answers
 * 404 on GET; PUT and PATCH create the row. A move is one transaction that
 * locks the order row, see `db::positions`.
 */

use axum::{
    extract::{Path, State},
    response::{Json, Response},
};
use sqlx::PgPool;

use crate::backend::db::positions;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::ordering::types::{MoveRequest, OrderRequest};
use crate::backend::response;

fn require_pool(pool: Option<PgPool>) -> Result<PgPool, BackendError> {
    pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        BackendError::database_unavailable()
    })
}

/// GET /api/boards/{board_id}/list-order
pub async fn get_list_order(
    AuthUser(user): AuthUser,
    State(pool): State<Option<PgPool>>,
    Path(board_id): Path<i64>,
) -> Result<Response, BackendError> {
    let pool = require_pool(pool)?;
    tracing::debug!(board_id, user = %user.email, "Loading list order");

    match positions::get_list_order(&pool, board_id).await? {
        Some(position) => Ok(response::success("List order loaded", position)),
        None => Ok(response::not_found(
            "List order not found",
            format!("no list order for board {board_id}"),
        )),
    }
}

/// PUT /api/boards/{board_id}/list-order
///
/// # Errors
///
/// * `400 Bad Request` - If the order lists an id twice
/// * `401 Unauthorized` - If the token is missing or invalid
/// * `503 Service Unavailable` - If database is not configured
pub async fn put_list_order(
    AuthUser(user): AuthUser,
    State(pool): State<Option<PgPool>>,
    Path(board_id): Path<i64>,
    Json(request): Json<OrderRequest>,
) -> Result<Response, BackendError> {
    request.validate("list_order")?;
    let pool = require_pool(pool)?;

    let position = positions::save_list_order(&pool, board_id, &request.order).await?;
    tracing::info!(
        board_id,
        lists = position.list_order.len(),
        user = %user.email,
        "List order saved"
    );

    Ok(response::success("List order saved", position))
}

/// PATCH /api/boards/{board_id}/list-order/move
pub async fn move_list(
    AuthUser(user): AuthUser,
    State(pool): State<Option<PgPool>>,
    Path(board_id): Path<i64>,
    Json(request): Json<MoveRequest>,
) -> Result<Response, BackendError> {
    let pool = require_pool(pool)?;

    let position = positions::move_list(&pool, board_id, request.id, request.index).await?;
    tracing::info!(
        board_id,
        list = %request.id,
        index = request.index,
        user = %user.email,
        "List moved"
    );

    Ok(response::success("List moved", position))
}

/// GET /api/lists/{list_id}/card-order
pub async fn get_card_order(
    AuthUser(user): AuthUser,
    State(pool): State<Option<PgPool>>,
    Path(list_id): Path<i64>,
) -> Result<Response, BackendError> {
    let pool = require_pool(pool)?;
    tracing::debug!(list_id, user = %user.email, "Loading card order");

    match positions::get_card_order(&pool, list_id).await? {
        Some(position) => Ok(response::success("Card order loaded", position)),
        None => Ok(response::not_found(
            "Card order not found",
            format!("no card order for list {list_id}"),
        )),
    }
}

/// PUT /api/lists/{list_id}/card-order
pub async fn put_card_order(
    AuthUser(user): AuthUser,
    State(pool): State<Option<PgPool>>,
    Path(list_id): Path<i64>,
    Json(request): Json<OrderRequest>,
) -> Result<Response, BackendError> {
    request.validate("card_order")?;
    let pool = require_pool(pool)?;

    let position = positions::save_card_order(&pool, list_id, &request.order).await?;
    tracing::info!(
        list_id,
        cards = position.card_order.len(),
        user = %user.email,
        "Card order saved"
    );

    Ok(response::success("Card order saved", position))
}

/// PATCH /api/lists/{list_id}/card-order/move
pub async fn move_card(
    AuthUser(user): AuthUser,
    State(pool): State<Option<PgPool>>,
    Path(list_id): Path<i64>,
    Json(request): Json<MoveRequest>,
) -> Result<Response, BackendError> {
    let pool = require_pool(pool)?;

    let position = positions::move_card(&pool, list_id, request.id, request.index).await?;
    tracing::info!(
        list_id,
        card = %request.id,
        index = request.index,
        user = %user.email,
        "Card moved"
    );

    Ok(response::success("Card moved", position))
}
