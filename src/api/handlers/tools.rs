//! Handlers for tool discovery and name-based tool calls.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State, rejection::BytesRejection},
};

use crate::api::dto::encode::{BodyError, EncodeRequest};
use crate::api::dto::tools::{ToolCallResponse, ToolsResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists the registered tools and their input schemas.
///
/// # Endpoint
///
/// `GET /api/tools`
///
/// # Response
///
/// ```json
/// {
///   "tools": [
///     {
///       "id": "encodePlantUML",
///       "name": "encodePlantUML",
///       "description": "Encodes PlantUML diagram code into a shareable URL ...",
///       "inputSchema": {
///         "type": "object",
///         "properties": { "plantumlCode": { "type": "string", "description": "..." } },
///         "required": ["plantumlCode"]
///       }
///     }
///   ]
/// }
/// ```
pub async fn tools_discovery_handler(State(state): State<AppState>) -> Json<ToolsResponse> {
    Json(ToolsResponse {
        tools: state.tools.descriptors(),
    })
}

/// Calls the tool named by the last path segment.
///
/// # Endpoint
///
/// `POST /api/tools/{tool}`
///
/// # Errors
///
/// - **400** `EMPTY_CODE` / **413** `CODE_TOO_LARGE` - validation failures
/// - **400** `TOOL_NAME_REQUIRED` - no usable tool segment
/// - **404** `TOOL_NOT_FOUND` - unknown tool
/// - **500** `INTERNAL_ERROR` - malformed body
pub async fn tool_call_handler(
    State(state): State<AppState>,
    Path(path): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ToolCallResponse>, AppError> {
    dispatch(&state, tool_name_from_path(&path), body)
}

/// `POST /api/tools` with no tool segment.
pub async fn tool_call_without_name_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ToolCallResponse>, AppError> {
    dispatch(&state, None, body)
}

pub async fn tools_discovery_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed { allowed: "GET" }
}

pub async fn tool_call_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed { allowed: "POST" }
}

/// The body is parsed before the tool name is looked at, so a malformed body
/// yields `INTERNAL_ERROR` even for an unknown tool.
fn dispatch(
    state: &AppState,
    tool_name: Option<&str>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ToolCallResponse>, AppError> {
    let request = EncodeRequest::from_body_or_default(body).map_err(|e| match e {
        BodyError::TooLarge => AppError::CodeTooLarge {
            max_bytes: state.encoder.policy().max_bytes,
        },
        other => AppError::internal(other.to_string()),
    })?;

    let result = state.tools.dispatch(tool_name, request.plantuml_code())?;

    Ok(Json(ToolCallResponse::success(result)))
}

/// Last non-empty segment of the path after `/api/tools/`. The collection
/// name `tools` does not count, so `/api/tools/tools` has no tool name.
fn tool_name_from_path(path: &str) -> Option<&str> {
    path.rsplit('/')
        .find(|segment| !segment.is_empty())
        .filter(|segment| *segment != "tools")
}
