//! API route configuration.
//!
//! Routes are grouped by the CORS policy they advertise. Methods a route does
//! not serve fall through to a JSON `METHOD_NOT_ALLOWED` handler in the
//! envelope of that route.

use crate::api::handlers::{
    encode_handler, encode_method_not_allowed, tool_call_handler, tool_call_method_not_allowed,
    tool_call_without_name_handler, tools_discovery_handler, tools_discovery_method_not_allowed,
};
use crate::api::middleware::cors::{self, CorsPolicy};
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST /encode-plantuml` - Encode a diagram (flat envelope)
/// - `GET  /tools`           - List available tools
/// - `POST /tools`           - Answers `TOOL_NAME_REQUIRED`
/// - `POST /tools/{tool}`    - Call a tool by name (tool envelope)
pub fn routes() -> Router<AppState> {
    let encode = Router::new()
        .route(
            "/encode-plantuml",
            post(encode_handler).fallback(encode_method_not_allowed),
        )
        .layer(middleware::from_fn_with_state(CorsPolicy::POST, cors::layer));

    let collection = Router::new()
        .route(
            "/tools",
            get(tools_discovery_handler)
                .post(tool_call_without_name_handler)
                .fallback(tools_discovery_method_not_allowed),
        )
        .layer(middleware::from_fn_with_state(CorsPolicy::TOOLS, cors::layer));

    let dispatch = Router::new()
        .route(
            "/tools/{*path}",
            post(tool_call_handler).fallback(tool_call_method_not_allowed),
        )
        .layer(middleware::from_fn_with_state(CorsPolicy::POST, cors::layer));

    Router::new().merge(encode).merge(collection).merge(dispatch)
}
