//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating store calls and
//! validation. Services consume repository traits and provide a clean API for
//! HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::order_service::OrderService`] - Order placement and listing
//! - [`services::diagnostics_service::DiagnosticsService`] - Backend and database health

pub mod services;
