#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use vrindavan_orders::api::routes::public_routes;
use vrindavan_orders::domain::entities::{DocumentId, StoredDocument};
use vrindavan_orders::domain::repositories::{DocumentStore, StoreError};
use vrindavan_orders::infrastructure::persistence::UnavailableStore;
use vrindavan_orders::state::AppState;

/// Document store kept in memory, preserving insertion order.
#[derive(Default)]
pub struct InMemoryStore {
    documents: Mutex<Vec<(String, StoredDocument)>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, collection: &str) -> usize {
        self.documents
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| c == collection)
            .count()
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn insert(&self, collection: &str, document: Value) -> Result<DocumentId, StoreError> {
        let mut documents = self.documents.lock().unwrap();
        let id = DocumentId::new(format!("doc-{}", documents.len() + 1));

        documents.push((
            collection.to_string(),
            StoredDocument {
                id: id.clone(),
                body: document,
                created_at: Utc::now(),
            },
        ));

        Ok(id)
    }

    async fn query(
        &self,
        collection: &str,
        limit: u32,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        Ok(self
            .documents
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| c == collection)
            .take(limit as usize)
            .map(|(_, doc)| doc.clone())
            .collect())
    }

    async fn list_collections(&self, limit: u32) -> Result<Vec<String>, StoreError> {
        let mut names: Vec<String> = self
            .documents
            .lock()
            .unwrap()
            .iter()
            .map(|(c, _)| c.clone())
            .collect();
        names.sort();
        names.dedup();
        names.truncate(limit as usize);
        Ok(names)
    }

    fn is_initialized(&self) -> bool {
        true
    }

    async fn close(&self) {}
}

/// Store that is initialized but whose every call fails, like a database that
/// went away after startup.
pub struct BrokenStore;

#[async_trait]
impl DocumentStore for BrokenStore {
    async fn insert(&self, _collection: &str, _document: Value) -> Result<DocumentId, StoreError> {
        Err(StoreError::Connection("connection refused".into()))
    }

    async fn query(
        &self,
        _collection: &str,
        _limit: u32,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        Err(StoreError::Connection("connection refused".into()))
    }

    async fn list_collections(&self, _limit: u32) -> Result<Vec<String>, StoreError> {
        Err(StoreError::Connection(
            "error communicating with database: Connection refused (os error 111)".into(),
        ))
    }

    fn is_initialized(&self) -> bool {
        true
    }

    async fn close(&self) {}
}

pub fn create_test_state(store: Arc<dyn DocumentStore>) -> AppState {
    AppState::new(store, true, true)
}

pub fn create_test_server(store: Arc<dyn DocumentStore>) -> TestServer {
    let app = public_routes().with_state(create_test_state(store));
    TestServer::new(app).unwrap()
}

pub fn create_unavailable_server() -> TestServer {
    let app = public_routes().with_state(AppState::new(Arc::new(UnavailableStore::new()), false, false));
    TestServer::new(app).unwrap()
}
