//! Handler for the menu endpoint.

use axum::Json;

use crate::api::dto::menu::MenuResponse;
use crate::domain::menu::list_menu;

/// Returns the full menu in its fixed order.
///
/// # Endpoint
///
/// `GET /menu`
pub async fn menu_handler() -> Json<MenuResponse> {
    Json(MenuResponse { items: list_menu() })
}
