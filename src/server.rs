//! HTTP server initialization and runtime setup.
//!
//! Handles the document store connection, Axum server lifecycle and shutdown.

use crate::config::Config;
use crate::domain::repositories::DocumentStore;
use crate::infrastructure::persistence::{PgDocumentStore, UnavailableStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL document store (or [`UnavailableStore`] fallback)
/// - Apply migrations
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// The database pool is closed after the server stops accepting requests.
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = connect_store(&config).await;

    let state = AppState::new(
        store.clone(),
        config.database_url.is_some(),
        config.database_name.is_some(),
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Connects the document store, falling back to [`UnavailableStore`] when the
/// database is not configured or unreachable at startup.
pub async fn connect_store(config: &Config) -> Arc<dyn DocumentStore> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("DATABASE_URL not set, order endpoints are unavailable");
        return Arc::new(UnavailableStore::new());
    };

    match PgDocumentStore::connect(database_url, config.pool_settings()).await {
        Ok(store) => {
            tracing::info!("Document store enabled (PostgreSQL)");
            Arc::new(store)
        }
        Err(e) => {
            tracing::warn!("Failed to connect to database: {}. Using UnavailableStore.", e);
            Arc::new(UnavailableStore::new())
        }
    }
}

/// Resolves when the process receives Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
