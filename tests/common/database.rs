//! Database test fixtures and utilities
//!
//! Database tests need a reachable PostgreSQL given by `DATABASE_URL`.
//! When the variable is not set, `TestDatabase::from_env` returns `None`
//! and the test returns early.

use sqlx::PgPool;
use uuid::Uuid;

use kanban_backend::backend::db;

/// Test database fixture
pub struct TestDatabase {
    pool: PgPool,
}

impl TestDatabase {
    /// Connect to `DATABASE_URL` and apply migrations
    pub async fn from_env() -> Option<Self> {
        let Ok(database_url) = std::env::var("DATABASE_URL") else {
            eprintln!("DATABASE_URL not set, skipping database test");
            return None;
        };

        let pool = PgPool::connect(&database_url)
            .await
            .expect("Failed to create test database pool");
        db::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");
        Some(Self { pool })
    }

    /// Get the database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Insert a fresh owner, board and list; returns their internal ids
    pub async fn create_board_with_list(&self) -> (i64, i64) {
        let (owner_id, owner_public_id): (i64, Uuid) = sqlx::query_as(
            r#"
            INSERT INTO users (name, email, password) VALUES ('Owner', $1, 'x')
            RETURNING internal_id, public_id
            "#,
        )
        .bind(format!("owner_{}@example.com", Uuid::new_v4()))
        .fetch_one(&self.pool)
        .await
        .expect("Failed to insert owner");

        let (board_id, board_public_id): (i64, Uuid) = sqlx::query_as(
            r#"
            INSERT INTO boards (title, owner_internal_id, owner_public_id) VALUES ('Board', $1, $2)
            RETURNING internal_id, public_id
            "#,
        )
        .bind(owner_id)
        .bind(owner_public_id)
        .fetch_one(&self.pool)
        .await
        .expect("Failed to insert board");

        let (list_id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO lists (board_internal_id, board_public_id, title) VALUES ($1, $2, 'Todo')
            RETURNING internal_id
            "#,
        )
        .bind(board_id)
        .bind(board_public_id)
        .fetch_one(&self.pool)
        .await
        .expect("Failed to insert list");

        (board_id, list_id)
    }
}
