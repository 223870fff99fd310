//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{DiagnosticsService, OrderService};
use crate::domain::repositories::DocumentStore;

#[derive(Clone)]
pub struct AppState {
    pub order_service: Arc<OrderService>,
    pub diagnostics_service: Arc<DiagnosticsService>,
}

impl AppState {
    /// Wires services around a single document store.
    ///
    /// `database_url_set` / `database_name_set` are reported by diagnostics.
    pub fn new(
        store: Arc<dyn DocumentStore>,
        database_url_set: bool,
        database_name_set: bool,
    ) -> Self {
        Self {
            order_service: Arc::new(OrderService::new(store.clone())),
            diagnostics_service: Arc::new(DiagnosticsService::new(
                store,
                database_url_set,
                database_name_set,
            )),
        }
    }
}
