//! Business logic services for the application layer.

pub mod diagnostics_service;
pub mod order_service;

pub use diagnostics_service::DiagnosticsService;
pub use order_service::{OrderError, OrderService};
