//! Database integration tests
//!
//! Skipped unless `DATABASE_URL` points at a PostgreSQL instance.

#[cfg(feature = "ssr")]
mod positions_test;
