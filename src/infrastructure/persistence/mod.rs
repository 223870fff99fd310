//! Document store implementations.
//!
//! # Stores
//!
//! - [`PgDocumentStore`] - PostgreSQL (JSONB) document storage via SQLx
//! - [`UnavailableStore`] - Fails every operation; used when no database is connected

pub mod pg_document_store;
pub mod unavailable_store;

pub use pg_document_store::{PgDocumentStore, PoolSettings};
pub use unavailable_store::UnavailableStore;
