//! PostgreSQL implementation of the document store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::domain::entities::{DocumentId, StoredDocument};
use crate::domain::repositories::{DocumentStore, StoreError};

/// Connection pool settings for [`PgDocumentStore::connect`].
#[derive(Debug, Clone, Copy)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub connect_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            connect_timeout: Duration::from_secs(30),
        }
    }
}

/// Document store backed by a single JSONB table.
///
/// A collection is a logical name over the `documents` table. Identifiers are
/// server-generated UUIDs; `seq` gives a stable insertion order for reads.
pub struct PgDocumentStore {
    pool: Arc<PgPool>,
}

#[derive(sqlx::FromRow)]
struct DocumentRow {
    id: String,
    body: Value,
    created_at: DateTime<Utc>,
}

impl PgDocumentStore {
    /// Creates a store on top of an existing, already migrated pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Connects to PostgreSQL and applies pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the pool cannot be established.
    /// Returns [`StoreError::Migration`] if applying migrations fails.
    pub async fn connect(database_url: &str, settings: PoolSettings) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.connect_timeout)
            .connect(database_url)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| StoreError::Migration(e.to_string()))?;

        info!("Connected to database, migrations applied");

        Ok(Self::new(Arc::new(pool)))
    }
}

/// Maps SQLx errors onto store errors, separating reachability from query failures.
fn map_sqlx_error(e: sqlx::Error) -> StoreError {
    match e {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => StoreError::Connection(e.to_string()),
        other => StoreError::Query(other.to_string()),
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert(&self, collection: &str, document: Value) -> Result<DocumentId, StoreError> {
        let id: String = sqlx::query_scalar(
            r#"
            INSERT INTO documents (collection, body)
            VALUES ($1, $2)
            RETURNING id::text
            "#,
        )
        .bind(collection)
        .bind(document)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(DocumentId::new(id))
    }

    async fn query(
        &self,
        collection: &str,
        limit: u32,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        let rows: Vec<DocumentRow> = sqlx::query_as(
            r#"
            SELECT id::text AS id, body, created_at
            FROM documents
            WHERE collection = $1
            ORDER BY seq
            LIMIT $2
            "#,
        )
        .bind(collection)
        .bind(i64::from(limit))
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows
            .into_iter()
            .map(|r| StoredDocument {
                id: DocumentId::new(r.id),
                body: r.body,
                created_at: r.created_at,
            })
            .collect())
    }

    async fn list_collections(&self, limit: u32) -> Result<Vec<String>, StoreError> {
        sqlx::query_scalar(
            r#"
            SELECT DISTINCT collection
            FROM documents
            ORDER BY collection
            LIMIT $1
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)
    }

    fn is_initialized(&self) -> bool {
        true
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}
