//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod menu;
pub mod orders;

pub use health::{diagnostics_handler, root_handler};
pub use menu::menu_handler;
pub use orders::{list_orders_handler, place_order_handler};
