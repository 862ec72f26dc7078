//! Top-level router combining the redirect surface and the management API.
//!
//! # Route Structure
//!
//! - `GET /`            - Liveness text
//! - `GET /{any-path}`  - Visitor redirect (wildcard; everything not nested
//!   below `/api` lands here, and the resolver's admin-path guard is a second
//!   line of defence for reserved prefixes)
//! - `/api/*`           - Management API

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware;
use crate::state::AppState;
use axum::routing::get;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

async fn index_handler() -> &'static str {
    "Backend is running!"
}

/// Constructs the application router without the outer path normalization,
/// which is what tests mount directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/{*path}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(middleware::tracing::layer())
}

/// The served application: router plus trailing-slash normalization.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
