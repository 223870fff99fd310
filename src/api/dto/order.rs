//! DTOs for order endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::{DisplayFromStr, serde_as};
use validator::{Validate, ValidationError};

use crate::domain::entities::{Order, OrderLineItem, StoredOrder};

/// Request body for `POST /order`.
///
/// Fields not listed here are kept as opaque customer metadata.
#[derive(Debug, Deserialize, Validate)]
pub struct PlaceOrderRequest {
    #[validate(nested)]
    pub items: Vec<LineItemRequest>,

    #[validate(custom(function = "validate_non_negative"))]
    pub delivery_fee: Decimal,

    #[validate(custom(function = "validate_non_negative"))]
    pub total: Decimal,

    #[serde(flatten)]
    pub customer: Map<String, Value>,
}

/// One line of an order request.
#[derive(Debug, Deserialize, Validate)]
pub struct LineItemRequest {
    #[validate(length(min = 1, max = 200, message = "Item name must not be empty"))]
    pub name: String,

    #[validate(custom(function = "validate_non_negative"))]
    pub price: Decimal,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: u32,
}

fn validate_non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::new("non_negative").with_message("Must not be negative".into()));
    }
    Ok(())
}

impl From<PlaceOrderRequest> for Order {
    fn from(req: PlaceOrderRequest) -> Self {
        let items = req
            .items
            .into_iter()
            .map(|line| OrderLineItem::new(line.name, line.price, line.quantity))
            .collect();

        Order::new(items, req.delivery_fee, req.total).with_customer(req.customer)
    }
}

/// Response for a successfully placed order.
#[derive(Debug, Serialize)]
pub struct PlaceOrderResponse {
    pub message: String,
    pub order_id: String,
}

/// Query parameters for `GET /orders`.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct ListOrdersParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Response for `GET /orders`.
#[derive(Debug, Serialize)]
pub struct ListOrdersResponse {
    pub orders: Vec<StoredOrder>,
}
