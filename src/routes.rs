//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`                 - Encoder self-test
//! - `POST /api/encode-plantuml`    - Direct encode call
//! - `GET  /api/tools`              - Tool discovery
//! - `POST /api/tools/{tool}`       - Tool dispatch
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Body limit** - Caps request bodies before they are buffered
//! - **CORS** - Permissive headers and preflight handling on `/api/*`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and middleware, without path normalization.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `body_limit` - maximum accepted request body size in bytes
pub fn build_router(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(tracing::layer())
}

/// Constructs the application service: [`build_router`] with trailing slashes
/// trimmed before routing.
pub fn app_router(state: AppState, body_limit: usize) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, body_limit))
}
