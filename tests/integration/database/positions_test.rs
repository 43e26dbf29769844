//! Position repository tests

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use kanban_backend::backend::db::{get_card_order, get_list_order, save_card_order, save_list_order};
use kanban_backend::backend::error::BackendError;
use kanban_backend::shared::{UuidArray, UuidArrayError};

use crate::common::database::TestDatabase;

#[tokio::test]
async fn test_list_order_round_trip() {
    let Some(db) = TestDatabase::from_env().await else {
        return;
    };
    let (board_id, _) = db.create_board_with_list().await;

    assert!(get_list_order(db.pool(), board_id).await.unwrap().is_none());

    let order = UuidArray::from(vec![Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()]);
    let saved = save_list_order(db.pool(), board_id, &order).await.unwrap();
    assert_eq!(saved.list_order, order);

    let loaded = get_list_order(db.pool(), board_id).await.unwrap().unwrap();
    assert_eq!(loaded, saved);
}

#[tokio::test]
async fn test_save_replaces_existing_order() {
    let Some(db) = TestDatabase::from_env().await else {
        return;
    };
    let (board_id, _) = db.create_board_with_list().await;

    let first = save_list_order(db.pool(), board_id, &UuidArray::from(vec![Uuid::new_v4()]))
        .await
        .unwrap();
    let second = save_list_order(db.pool(), board_id, &UuidArray::new()).await.unwrap();

    assert_eq!(first.internal_id, second.internal_id);
    assert!(second.list_order.is_empty());
}

#[tokio::test]
async fn test_card_order_keeps_duplicates_and_order() {
    let Some(db) = TestDatabase::from_env().await else {
        return;
    };
    let (_, list_id) = db.create_board_with_list().await;

    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let order = UuidArray::from(vec![b, a, b]);
    save_card_order(db.pool(), list_id, &order).await.unwrap();

    let loaded = get_card_order(db.pool(), list_id).await.unwrap().unwrap();
    assert_eq!(loaded.card_order.into_inner(), vec![b, a, b]);
}

#[tokio::test]
async fn test_literal_written_by_postgres_decodes() {
    let Some(db) = TestDatabase::from_env().await else {
        return;
    };
    let (_, list_id) = db.create_board_with_list().await;
    let id = Uuid::new_v4();

    sqlx::query(
        "INSERT INTO card_positions (list_internal_id, card_order) VALUES ($1, ARRAY[$2]::uuid[])",
    )
        .bind(list_id)
        .bind(id)
        .execute(db.pool())
        .await
        .unwrap();

    let loaded = get_card_order(db.pool(), list_id).await.unwrap().unwrap();
    assert_eq!(loaded.card_order.into_inner(), vec![id]);
}

#[tokio::test]
async fn test_undecodable_literal_is_codec_error() {
    let Some(db) = TestDatabase::from_env().await else {
        return;
    };

    let err = sqlx::query_as::<_, (UuidArray,)>("SELECT '{not-a-uuid}'::text")
        .fetch_one(db.pool())
        .await
        .unwrap_err();
    let error = BackendError::from(err);

    assert_matches!(
        error,
        BackendError::Codec { source: UuidArrayError::ElementParse { ref token, .. }, .. }
            if token == "not-a-uuid"
    );
    assert_eq!(error.message(), "Stored record could not be read");
}
