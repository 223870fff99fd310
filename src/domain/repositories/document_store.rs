//! Repository trait for schema-flexible document storage.

use crate::domain::entities::{DocumentId, StoredDocument};
use async_trait::async_trait;
use serde_json::Value;

/// Errors raised by a document store. Always a server-side fault.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Document store is not initialized")]
    NotInitialized,

    #[error("Document store connection failed: {0}")]
    Connection(String),

    #[error("Document store query failed: {0}")]
    Query(String),

    #[error("Document store migration failed: {0}")]
    Migration(String),

    #[error("Malformed document: {0}")]
    MalformedDocument(String),
}

/// Repository interface over named collections of JSON documents.
///
/// The store knows nothing about orders; callers pick the collection name and
/// the record shape.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgDocumentStore`] - PostgreSQL (JSONB) implementation
/// - [`crate::infrastructure::persistence::UnavailableStore`] - Stand-in when no database is connected
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts a document into `collection` and returns its new identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store is unreachable or the write fails.
    async fn insert(&self, collection: &str, document: Value) -> Result<DocumentId, StoreError>;

    /// Returns at most `limit` documents from `collection` in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store is unreachable or the read fails.
    async fn query(&self, collection: &str, limit: u32)
    -> Result<Vec<StoredDocument>, StoreError>;

    /// Lists up to `limit` collection names, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store is unreachable or the read fails.
    async fn list_collections(&self, limit: u32) -> Result<Vec<String>, StoreError>;

    /// Whether this store is backed by a live database handle.
    fn is_initialized(&self) -> bool;

    /// Releases the underlying connections. Called once at shutdown.
    async fn close(&self);
}
