//! Generic document store adapter.

use async_trait::async_trait;
use crewdesk_core::id::DocumentId;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use sqlx::PgPool;

/// The named collections this service stores documents in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Departments,
    LineManagers,
    Projects,
}

impl Collection {
    /// Store-level collection name.
    pub fn name(self) -> &'static str {
        match self {
            Collection::Departments => "departments",
            Collection::LineManagers => "line_managers",
            Collection::Projects => "projects",
        }
    }
}

/// Errors surfaced by a document store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The underlying store rejected or failed an operation.
    #[error("Store operation failed: {0}")]
    Backend(#[from] sqlx::Error),

    /// A stored document no longer matches its expected shape.
    #[error("Corrupt document in {collection}: {source}")]
    Corrupt {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// An entity could not be serialized for storage.
    #[error("Failed to encode document for {collection}: {source}")]
    Encode {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Deserialize a stored document into its typed entity.
pub fn decode_document<T: DeserializeOwned>(
    collection: Collection,
    doc: Value,
) -> Result<T, StoreError> {
    serde_json::from_value(doc).map_err(|source| StoreError::Corrupt {
        collection: collection.name(),
        source,
    })
}

/// Serialize an entity into its stored document form.
pub fn encode_document<T: Serialize>(collection: Collection, entity: &T) -> Result<Value, StoreError> {
    serde_json::to_value(entity).map_err(|source| StoreError::Encode {
        collection: collection.name(),
        source,
    })
}

/// Get/find/insert/replace/delete operations against named collections of
/// schema-less JSON documents.
///
/// Backends must be safe for concurrent use by simultaneous requests. Each
/// operation is atomic at the single-document level; no cross-document
/// transaction is offered, and callers must not assume one.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch one document by id.
    async fn get(&self, collection: Collection, id: DocumentId)
        -> Result<Option<Value>, StoreError>;

    /// All documents in a collection, in store-native (unspecified) order.
    async fn list(&self, collection: Collection) -> Result<Vec<Value>, StoreError>;

    /// All documents whose embedded `field.id` equals `id`.
    async fn find_by_ref(
        &self,
        collection: Collection,
        field: &'static str,
        id: DocumentId,
    ) -> Result<Vec<Value>, StoreError>;

    /// Insert a document under a caller-supplied id.
    async fn insert(
        &self,
        collection: Collection,
        id: DocumentId,
        doc: &Value,
    ) -> Result<(), StoreError>;

    /// Replace a document wholesale. Returns `false` if no document matched.
    async fn replace(
        &self,
        collection: Collection,
        id: DocumentId,
        doc: &Value,
    ) -> Result<bool, StoreError>;

    /// Delete a document. Returns `false` if no document matched.
    async fn delete(&self, collection: Collection, id: DocumentId) -> Result<bool, StoreError>;

    /// Number of documents in a collection.
    async fn count(&self, collection: Collection) -> Result<u64, StoreError>;

    /// Connectivity probe. The Postgres backend issues a `SELECT 1`.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Postgres-backed document store: one JSONB row per document.
#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn get(
        &self,
        collection: Collection,
        id: DocumentId,
    ) -> Result<Option<Value>, StoreError> {
        let row: Option<(Value,)> =
            sqlx::query_as("SELECT doc FROM documents WHERE collection = $1 AND id = $2")
                .bind(collection.name())
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(|(doc,)| doc))
    }

    async fn list(&self, collection: Collection) -> Result<Vec<Value>, StoreError> {
        let rows: Vec<(Value,)> =
            sqlx::query_as("SELECT doc FROM documents WHERE collection = $1")
                .bind(collection.name())
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(|(doc,)| doc).collect())
    }

    async fn find_by_ref(
        &self,
        collection: Collection,
        field: &'static str,
        id: DocumentId,
    ) -> Result<Vec<Value>, StoreError> {
        // `field` is a compile-time constant naming an embedded snapshot
        // field ("department" / "line_manager"), never caller input.
        let query = format!(
            "SELECT doc FROM documents WHERE collection = $1 AND doc #>> '{{{field},id}}' = $2"
        );
        let rows: Vec<(Value,)> = sqlx::query_as(&query)
            .bind(collection.name())
            .bind(id.to_string())
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(|(doc,)| doc).collect())
    }

    async fn insert(
        &self,
        collection: Collection,
        id: DocumentId,
        doc: &Value,
    ) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO documents (collection, id, doc) VALUES ($1, $2, $3)")
            .bind(collection.name())
            .bind(id.as_uuid())
            .bind(doc)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn replace(
        &self,
        collection: Collection,
        id: DocumentId,
        doc: &Value,
    ) -> Result<bool, StoreError> {
        let result = sqlx::query("UPDATE documents SET doc = $3 WHERE collection = $1 AND id = $2")
            .bind(collection.name())
            .bind(id.as_uuid())
            .bind(doc)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, collection: Collection, id: DocumentId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection.name())
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self, collection: Collection) -> Result<u64, StoreError> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM documents WHERE collection = $1")
            .bind(collection.name())
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0 as u64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
