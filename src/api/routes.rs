//! Router construction.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::path::Path;
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::handlers::{self, AppState};

/// Maximum accepted JSON payload, matching the documented 10 MB cap.
pub const BODY_LIMIT: usize = 10 * 1024 * 1024;

/// Build the application router.
///
/// API routes take precedence; everything else falls through to the static
/// directory, with `index.html` served at `/`.
pub fn create_routes(static_dir: &Path) -> Router<Arc<AppState>> {
    let index = static_dir.join("index.html");
    let assets = ServeDir::new(static_dir).not_found_service(ServeFile::new(index));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/languages", get(handlers::list_languages))
        .route("/api/analyze", post(handlers::analyze_code))
        .route("/api/translate", post(handlers::translate_code))
        .fallback_service(assets)
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(TraceLayer::new_for_http())
}
