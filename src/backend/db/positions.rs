//! Position repositories
//!
//! One row per board in `list_positions` and one row per list in
//! `card_positions`. The `uuid[]` columns are read as `::text` and written
//! with a `::uuid[]` cast so they go through the `UuidArray` codec.
//!
//! Moves run in one transaction holding the row lock, so concurrent moves on
//! the same board or list are applied one after the other.

use sqlx::PgPool;
use uuid::Uuid;

use crate::shared::models::{CardPosition, ListPosition};
use crate::shared::uuid_array::UuidArray;

/// Get the list order of a board
pub async fn get_list_order(
    pool: &PgPool,
    board_internal_id: i64,
) -> Result<Option<ListPosition>, sqlx::Error> {
    sqlx::query_as::<_, ListPosition>(
        r#"
        SELECT internal_id, public_id, board_internal_id, list_order::text AS list_order
        FROM list_positions
        WHERE board_internal_id = $1
        "#,
    )
    .bind(board_internal_id)
    .fetch_optional(pool)
    .await
}

/// Replace the list order of a board, creating the row if needed
pub async fn save_list_order(
    pool: &PgPool,
    board_internal_id: i64,
    order: &UuidArray,
) -> Result<ListPosition, sqlx::Error> {
    sqlx::query_as::<_, ListPosition>(
        r#"
        INSERT INTO list_positions (board_internal_id, list_order)
        VALUES ($1, $2::uuid[])
        ON CONFLICT (board_internal_id) DO UPDATE SET list_order = EXCLUDED.list_order
        RETURNING internal_id, public_id, board_internal_id, list_order::text AS list_order
        "#,
    )
    .bind(board_internal_id)
    .bind(order)
    .fetch_one(pool)
    .await
}

/// Move one list within a board's order, creating the order row if needed
pub async fn move_list(
    pool: &PgPool,
    board_internal_id: i64,
    list_id: Uuid,
    index: usize,
) -> Result<ListPosition, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT INTO list_positions (board_internal_id) VALUES ($1) \
         ON CONFLICT (board_internal_id) DO NOTHING",
    )
    .bind(board_internal_id)
    .execute(&mut *tx)
    .await?;

    let mut position = sqlx::query_as::<_, ListPosition>(
        r#"
        SELECT internal_id, public_id, board_internal_id, list_order::text AS list_order
        FROM list_positions
        WHERE board_internal_id = $1
        FOR UPDATE
        "#,
    )
    .bind(board_internal_id)
    .fetch_one(&mut *tx)
    .await?;

    position.move_to(list_id, index);

    let saved = sqlx::query_as::<_, ListPosition>(
        r#"
        UPDATE list_positions SET list_order = $2::uuid[]
        WHERE internal_id = $1
        RETURNING internal_id, public_id, board_internal_id, list_order::text AS list_order
        "#,
    )
    .bind(position.internal_id)
    .bind(&position.list_order)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(saved)
}

/// Get the card order of a list
pub async fn get_card_order(
    pool: &PgPool,
    list_internal_id: i64,
) -> Result<Option<CardPosition>, sqlx::Error> {
    sqlx::query_as::<_, CardPosition>(
        r#"
        SELECT internal_id, public_id, list_internal_id, card_order::text AS card_order
        FROM card_positions
        WHERE list_internal_id = $1
        "#,
    )
    .bind(list_internal_id)
    .fetch_optional(pool)
    .await
}

/// Replace the card order of a list, creating the row if needed
pub async fn save_card_order(
    pool: &PgPool,
    list_internal_id: i64,
    order: &UuidArray,
) -> Result<CardPosition, sqlx::Error> {
    sqlx::query_as::<_, CardPosition>(
        r#"
        INSERT INTO card_positions (list_internal_id, card_order)
        VALUES ($1, $2::uuid[])
        ON CONFLICT (list_internal_id) DO UPDATE SET card_order = EXCLUDED.card_order
        RETURNING internal_id, public_id, list_internal_id, card_order::text AS card_order
        "#,
    )
    .bind(list_internal_id)
    .bind(order)
    .fetch_one(pool)
    .await
}

/// Move one card within a list's order, creating the order row if needed
pub async fn move_card(
    pool: &PgPool,
    list_internal_id: i64,
    card_id: Uuid,
    index: usize,
) -> Result<CardPosition, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT INTO card_positions (list_internal_id) VALUES ($1) \
         ON CONFLICT (list_internal_id) DO NOTHING",
    )
    .bind(list_internal_id)
    .execute(&mut *tx)
    .await?;

    let mut position = sqlx::query_as::<_, CardPosition>(
        r#"
        SELECT internal_id, public_id, list_internal_id, card_order::text AS card_order
        FROM card_positions
        WHERE list_internal_id = $1
        FOR UPDATE
        "#,
    )
    .bind(list_internal_id)
    .fetch_one(&mut *tx)
    .await?;

    position.move_to(card_id, index);

    let saved = sqlx::query_as::<_, CardPosition>(
        r#"
        UPDATE card_positions SET card_order = $2::uuid[]
        WHERE internal_id = $1
        RETURNING internal_id, public_id, list_internal_id, card_order::text AS card_order
        "#,
    )
    .bind(position.internal_id)
    .bind(&position.card_order)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(saved)
}
