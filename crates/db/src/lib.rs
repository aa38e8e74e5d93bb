//! Data layer for the Pressroom backend.
//!
//! Structure:
//! - [`filter`]: the composable predicate builder shared by every list query
//! - [`models`]: row structs, DTOs, and per-entity filter params
//! - [`repositories`]: per-entity query/mutation primitives (no transaction
//!   ownership, no authorization)
//! - [`services`]: one-transaction-per-call orchestration plus the admin
//!   gate on remove

pub mod error;
pub mod filter;
pub mod models;
pub mod repositories;
pub mod services;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
