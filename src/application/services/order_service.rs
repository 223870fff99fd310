//! Order placement and listing service.

use crate::domain::entities::{DocumentId, Order, StoredDocument, StoredOrder};
use crate::domain::order_validator::{self, OrderRejection};
use crate::domain::repositories::{DocumentStore, StoreError};
use std::sync::Arc;
use tracing::{debug, info};

/// Collection holding placed orders.
pub const ORDER_COLLECTION: &str = "order";

/// Number of orders returned by [`OrderService::list_orders`] when the caller
/// does not specify a limit.
pub const DEFAULT_LIST_LIMIT: u32 = 50;

/// Errors from order operations.
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    /// The client submitted an inconsistent order.
    #[error(transparent)]
    Rejected(#[from] OrderRejection),

    /// The document store failed.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Service orchestrating validation and persistence of orders.
///
/// Placement is all-or-nothing: an order is written only after it passes
/// reconciliation, and nothing is written when it does not.
pub struct OrderService {
    store: Arc<dyn DocumentStore>,
}

impl OrderService {
    /// Creates a new order service over the given store.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Validates and persists an order.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Rejected`] if the total does not reconcile.
    /// Returns [`OrderError::Storage`] if the insert fails.
    pub async fn place_order(&self, order: Order) -> Result<DocumentId, OrderError> {
        if let Err(rejection) = order_validator::validate(&order) {
            debug!(error = %rejection, items = order.items.len(), "Order rejected");
            return Err(rejection.into());
        }

        let item_count = order.items.len();
        let total = order.total;
        let document = serde_json::to_value(order)
            .map_err(|e| StoreError::MalformedDocument(e.to_string()))?;

        let id = self.store.insert(ORDER_COLLECTION, document).await?;

        info!(order_id = %id, items = item_count, total = %total, "Order placed");

        Ok(id)
    }

    /// Returns at most `limit` stored orders in store order.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Storage`] if the read fails or a stored document
    /// is not a valid order.
    pub async fn list_orders(&self, limit: u32) -> Result<Vec<StoredOrder>, OrderError> {
        let documents = self.store.query(ORDER_COLLECTION, limit).await?;

        documents
            .into_iter()
            .map(|doc| to_stored_order(doc).map_err(OrderError::from))
            .collect()
    }
}

fn to_stored_order(doc: StoredDocument) -> Result<StoredOrder, StoreError> {
    let order: Order = serde_json::from_value(doc.body).map_err(|e| {
        StoreError::MalformedDocument(format!("order {}: {}", doc.id, e))
    })?;

    Ok(StoredOrder {
        id: doc.id.into(),
        order,
        created_at: doc.created_at,
    })
}
