//! Handlers for order placement and listing.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::order::{
    ListOrdersParams, ListOrdersResponse, PlaceOrderRequest, PlaceOrderResponse,
};
use crate::api::extractors::ValidatedJson;
use crate::application::services::order_service::DEFAULT_LIST_LIMIT;
use crate::error::AppError;
use crate::state::AppState;

/// Places a new order.
///
/// # Endpoint
///
/// `POST /order`
///
/// # Request Body
///
/// ```json
/// {
///   "items": [{ "name": "Masala Dosa", "price": 70, "quantity": 1 }],
///   "delivery_fee": 10,
///   "total": 80,
///   "customer_name": "Ravi"
/// }
/// ```
///
/// Fields beyond `items`, `delivery_fee` and `total` are stored as-is.
///
/// # Response
///
/// ```json
/// { "message": "Order placed successfully", "order_id": "3f0c..." }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed, fails validation, or the
/// total does not match `Σ price × quantity + delivery_fee` (rounded to cents).
/// Returns 500 Internal Server Error if the order cannot be stored.
pub async fn place_order_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PlaceOrderRequest>,
) -> Result<Json<PlaceOrderResponse>, AppError> {
    let order_id = state.order_service.place_order(payload.into()).await?;

    Ok(Json(PlaceOrderResponse {
        message: "Order placed successfully".to_string(),
        order_id: order_id.into(),
    }))
}

/// Lists stored orders.
///
/// # Endpoint
///
/// `GET /orders`
///
/// # Query Parameters
///
/// - `limit` (optional): Maximum number of orders to return (default: 50, no upper bound)
///
/// # Errors
///
/// Returns 400 Bad Request if `limit` is not a non-negative integer.
/// Returns 500 Internal Server Error if the store cannot be read.
pub async fn list_orders_handler(
    State(state): State<AppState>,
    Query(params): Query<ListOrdersParams>,
) -> Result<Json<ListOrdersResponse>, AppError> {
    let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT);

    let orders = state.order_service.list_orders(limit).await?;

    Ok(Json(ListOrdersResponse { orders }))
}
