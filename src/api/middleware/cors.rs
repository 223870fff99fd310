//! Cross-origin resource sharing policy.

use tower_http::cors::CorsLayer;

/// Allows every origin, method and header.
///
/// The menu and ordering endpoints are called from a browser frontend served
/// from a different origin, and no endpoint carries credentials.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
