//! Stand-in document store used when no database is connected.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::domain::entities::{DocumentId, StoredDocument};
use crate::domain::repositories::{DocumentStore, StoreError};

/// A store with no database behind it.
///
/// Used when `DATABASE_URL` is not configured or the startup connection fails.
/// The service still serves the menu and diagnostics; every store operation
/// fails with [`StoreError::NotInitialized`].
pub struct UnavailableStore;

impl UnavailableStore {
    pub fn new() -> Self {
        debug!("Using UnavailableStore (no database connected)");
        Self
    }
}

impl Default for UnavailableStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for UnavailableStore {
    async fn insert(&self, _collection: &str, _document: Value) -> Result<DocumentId, StoreError> {
        Err(StoreError::NotInitialized)
    }

    async fn query(
        &self,
        _collection: &str,
        _limit: u32,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        Err(StoreError::NotInitialized)
    }

    async fn list_collections(&self, _limit: u32) -> Result<Vec<String>, StoreError> {
        Err(StoreError::NotInitialized)
    }

    fn is_initialized(&self) -> bool {
        false
    }

    async fn close(&self) {}
}
