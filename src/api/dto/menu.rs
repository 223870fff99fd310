//! DTOs for the menu endpoint.

use serde::Serialize;

use crate::domain::entities::MenuItem;

/// Response for `GET /menu`.
#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub items: &'static [MenuItem],
}
