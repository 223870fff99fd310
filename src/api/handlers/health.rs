//! Handlers for liveness and diagnostics endpoints.

use axum::{Json, extract::State};

use crate::api::dto::health::{DiagnosticsResponse, RootResponse};
use crate::state::AppState;

/// Liveness message shown at the service root.
pub const ROOT_MESSAGE: &str = "VRINDAVAN SOUTH INDIAN backend is running";

/// Returns a static liveness message.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: ROOT_MESSAGE.to_string(),
    })
}

/// Reports backend and database status.
///
/// # Endpoint
///
/// `GET /test`
///
/// Always responds `200 OK`. Database failures are reported in the body rather
/// than as an error status.
///
/// # Response
///
/// ```json
/// {
///   "backend": "✅ Running",
///   "database": "✅ Connected & Working",
///   "database_url": "✅ Set",
///   "database_name": "✅ Set",
///   "connection_status": "Connected",
///   "collections": ["order"]
/// }
/// ```
pub async fn diagnostics_handler(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let report = state.diagnostics_service.check_health().await;
    Json(report.into())
}
