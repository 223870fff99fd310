//! Order entities: line items, client orders and their stored form.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys the store attaches to a persisted order; customer metadata may not use them.
pub const RESERVED_KEYS: [&str; 3] = ["_id", "created_at", "updated_at"];

/// One ordered product within an [`Order`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl OrderLineItem {
    pub fn new(name: impl Into<String>, price: Decimal, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    /// `price × quantity`, or `None` if the product does not fit in a [`Decimal`].
    pub fn line_total(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

/// A customer order as submitted by the client.
///
/// `total` is client-supplied and must be reconciled against `items` and
/// `delivery_fee` before the order is accepted. Any additional customer fields
/// (name, phone, address, notes, ...) travel in `customer` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub items: Vec<OrderLineItem>,
    pub delivery_fee: Decimal,
    pub total: Decimal,

    #[serde(flatten)]
    pub customer: Map<String, Value>,
}

impl Order {
    pub fn new(items: Vec<OrderLineItem>, delivery_fee: Decimal, total: Decimal) -> Self {
        Self {
            items,
            delivery_fee,
            total,
            customer: Map::new(),
        }
    }

    /// Attaches opaque customer metadata, dropping keys reserved for the store.
    pub fn with_customer(mut self, mut customer: Map<String, Value>) -> Self {
        for key in RESERVED_KEYS {
            customer.remove(key);
        }
        self.customer = customer;
        self
    }
}

/// An order as read back from the document store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredOrder {
    /// Store-assigned identifier rendered as text.
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(flatten)]
    pub order: Order,

    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_line_total() {
        let line = OrderLineItem::new("Masala Dosa", Decimal::from(70), 3);
        assert_eq!(line.line_total(), Some(Decimal::from(210)));
    }

    #[test]
    fn test_line_total_overflow() {
        let line = OrderLineItem::new("Overflow", Decimal::MAX, 2);
        assert!(line.line_total().is_none());
    }

    #[test]
    fn test_order_keeps_customer_fields() {
        let order: Order = serde_json::from_value(json!({
            "items": [{"name": "Plain Dosa", "price": 50, "quantity": 2}],
            "delivery_fee": 10,
            "total": 110,
            "customer_name": "Ravi",
            "phone": "9999999999"
        }))
        .unwrap();

        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].price, Decimal::from(50));
        assert_eq!(order.customer["customer_name"], "Ravi");
        assert_eq!(order.customer["phone"], "9999999999");
    }

    #[test]
    fn test_with_customer_drops_reserved_keys() {
        let mut customer = Map::new();
        customer.insert("_id".to_string(), json!("forged"));
        customer.insert("created_at".to_string(), json!("yesterday"));
        customer.insert("address".to_string(), json!("12 Temple St"));

        let order = Order::new(vec![], Decimal::ZERO, Decimal::ZERO).with_customer(customer);

        assert_eq!(order.customer.len(), 1);
        assert_eq!(order.customer["address"], "12 Temple St");
    }

    #[test]
    fn test_stored_order_serializes_id_as_underscore_id() {
        let stored = StoredOrder {
            id: "abc".to_string(),
            order: Order::new(vec![], Decimal::from(10), Decimal::from(10)),
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&stored).unwrap();
        assert_eq!(value["_id"], "abc");
        assert!(value.get("items").is_some());
        assert!(value.get("created_at").is_some());
    }
}
