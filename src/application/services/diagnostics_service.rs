//! Backend and database diagnostics.

use crate::domain::entities::{
    BackendStatus, ConnectionStatus, DatabaseStatus, DiagnosticsReport, SettingStatus,
};
use crate::domain::repositories::DocumentStore;
use std::sync::Arc;
use tracing::warn;

/// Maximum number of collection names included in a report.
pub const MAX_REPORTED_COLLECTIONS: u32 = 10;

/// Probes the document store and reports what it finds.
///
/// Probing never fails: every store error is folded into
/// [`DatabaseStatus::Error`].
pub struct DiagnosticsService {
    store: Arc<dyn DocumentStore>,
    database_url: SettingStatus,
    database_name: SettingStatus,
}

impl DiagnosticsService {
    /// Creates a diagnostics service.
    ///
    /// `database_url_set` / `database_name_set` record whether the
    /// corresponding settings were configured; their values are never reported.
    pub fn new(
        store: Arc<dyn DocumentStore>,
        database_url_set: bool,
        database_name_set: bool,
    ) -> Self {
        Self {
            store,
            database_url: database_url_set.into(),
            database_name: database_name_set.into(),
        }
    }

    /// Builds a diagnostics report.
    pub async fn check_health(&self) -> DiagnosticsReport {
        let mut report = DiagnosticsReport {
            backend: BackendStatus::Running,
            database: DatabaseStatus::Unavailable,
            database_url: self.database_url,
            database_name: self.database_name,
            connection: ConnectionStatus::NotConnected,
            collections: Vec::new(),
        };

        if !self.store.is_initialized() {
            report.database = DatabaseStatus::NotInitialized;
            return report;
        }

        report.connection = ConnectionStatus::Connected;

        match self.store.list_collections(MAX_REPORTED_COLLECTIONS).await {
            Ok(collections) => {
                report.collections = collections;
                report.database = DatabaseStatus::Connected;
            }
            Err(e) => {
                warn!(error = %e, "Database probe failed");
                report.database = DatabaseStatus::error(e);
            }
        }

        report
    }
}
