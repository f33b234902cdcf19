//! DTOs for tool discovery and tool calls.

use serde::Serialize;
use serde_json::Value;

use crate::domain::entities::ToolDescriptor;

/// Discovery response listing every registered tool.
#[derive(Debug, Serialize)]
pub struct ToolsResponse {
    pub tools: Vec<ToolDescriptor>,
}

/// Successful tool call.
///
/// Failures use the [`crate::error::AppError`] envelope with `success: false`.
#[derive(Debug, Serialize)]
pub struct ToolCallResponse {
    pub success: bool,
    pub result: Value,
}

impl ToolCallResponse {
    pub fn success(result: Value) -> Self {
        Self {
            success: true,
            result,
        }
    }
}
