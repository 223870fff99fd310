//! Menu item entity.

use rust_decimal::Decimal;
use serde::Serialize;

/// A dish offered on the menu.
///
/// Menu items are defined once at startup and never persisted or mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    pub name: &'static str,
    pub price: Decimal,
    pub category: &'static str,
}

impl MenuItem {
    pub fn new(name: &'static str, price: i64, category: &'static str) -> Self {
        Self {
            name,
            price: Decimal::from(price),
            category,
        }
    }
}
