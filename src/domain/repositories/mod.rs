//! Repository trait definitions for the domain layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`DocumentStore`] - Insert and bounded reads against named collections
//!
//! # Testing
//!
//! See integration tests in `tests/repository_documents.rs` for usage examples.

pub mod document_store;

pub use document_store::{DocumentStore, StoreError};

#[cfg(test)]
pub use document_store::MockDocumentStore;
