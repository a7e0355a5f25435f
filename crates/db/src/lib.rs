//! Document storage layer.
//!
//! Documents from every collection live in a single Postgres table
//! (`documents`) keyed by `(collection, id)`, with the full entity as a
//! JSONB payload. The [`DocumentStore`] trait is the seam between the
//! aggregate logic and the backend; [`PgDocumentStore`] is the production
//! implementation and [`MemoryStore`] backs the test suites.

pub mod manager;
pub mod memory;
pub mod models;
pub mod resolver;
pub mod seed;
pub mod store;

pub use manager::{ManagerError, ProjectManager};
pub use memory::MemoryStore;
pub use store::{Collection, DocumentStore, PgDocumentStore, StoreError};

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Shared connection pool type used across crates.
pub type DbPool = PgPool;

/// Create a connection pool against `database_url`.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Cheap connectivity probe used at startup.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the backing table if it does not exist yet.
///
/// All collections share the table; the collection name is part of the
/// primary key, so ids only need to be unique within a collection (they
/// are in practice globally unique UUIDs).
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS documents (
             collection TEXT NOT NULL,
             id UUID NOT NULL,
             doc JSONB NOT NULL,
             created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
             PRIMARY KEY (collection, id)
         )",
    )
    .execute(pool)
    .await?;
    Ok(())
}
