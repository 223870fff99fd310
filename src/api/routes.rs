//! API route configuration.

use crate::api::handlers::{
    diagnostics_handler, list_orders_handler, menu_handler, place_order_handler, root_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes. None require authentication.
///
/// # Endpoints
///
/// - `GET  /`        - Liveness message
/// - `GET  /menu`    - Fixed menu
/// - `GET  /test`    - Backend and database diagnostics
/// - `POST /order`   - Place an order
/// - `GET  /orders`  - List stored orders (`?limit=`, default 50)
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/menu", get(menu_handler))
        .route("/test", get(diagnostics_handler))
        .route("/order", post(place_order_handler))
        .route("/orders", get(list_orders_handler))
}
