//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures; reconciliation lives in
//! [`crate::domain::order_validator`] and orchestration in the application layer.
//!
//! # Entity Types
//!
//! - [`MenuItem`] - A dish on the fixed menu
//! - [`Order`] / [`OrderLineItem`] - A customer order as submitted
//! - [`StoredOrder`] - An order read back from the store
//! - [`DocumentId`] / [`StoredDocument`] - Store-level records, independent of orders
//! - [`DiagnosticsReport`] - Health snapshot of the backend and its database

pub mod document;
pub mod health;
pub mod menu_item;
pub mod order;

pub use document::{DocumentId, StoredDocument};
pub use health::{
    BackendStatus, ConnectionStatus, DatabaseStatus, DiagnosticsReport, SettingStatus,
};
pub use menu_item::MenuItem;
pub use order::{Order, OrderLineItem, StoredOrder};
