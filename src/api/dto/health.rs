//! DTOs for the liveness and diagnostics endpoints.

use serde::Serialize;

use crate::domain::entities::DiagnosticsReport;

/// Liveness response for `GET /`.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
}

/// Diagnostics response for `GET /test`.
///
/// Statuses are rendered to display strings here, at the boundary.
#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl From<DiagnosticsReport> for DiagnosticsResponse {
    fn from(report: DiagnosticsReport) -> Self {
        Self {
            backend: report.backend.to_string(),
            database: report.database.to_string(),
            database_url: report.database_url.to_string(),
            database_name: report.database_name.to_string(),
            connection_status: report.connection.to_string(),
            collections: report.collections,
        }
    }
}
