//! Static registry of callable tools.
//!
//! Tools are keyed by [`ToolId`], so adding one means adding an enum variant
//! and a [`ToolHandler`] impl; the compiler then flags every match that needs
//! to learn about it.

use serde_json::Value;
use std::sync::Arc;

use crate::application::services::EncoderService;
use crate::domain::entities::{InputSchema, ToolDescriptor};
use crate::error::AppError;

/// Identifier of a registered tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolId {
    EncodePlantUml,
}

impl ToolId {
    /// All tools, in the order discovery lists them.
    pub const ALL: [ToolId; 1] = [ToolId::EncodePlantUml];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolId::EncodePlantUml => "encodePlantUML",
        }
    }

    /// Looks up a tool by its wire name. Matching is case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == name)
    }
}

/// Capability shared by every tool: text in, JSON result out.
///
/// `input` is `None` when the caller sent no string argument.
pub trait ToolHandler: Send + Sync {
    fn descriptor(&self) -> ToolDescriptor;

    fn call(&self, input: Option<&str>) -> Result<Value, AppError>;
}

/// The `encodePlantUML` tool.
pub struct EncodePlantUmlTool {
    encoder: Arc<EncoderService>,
}

impl EncodePlantUmlTool {
    pub fn new(encoder: Arc<EncoderService>) -> Self {
        Self { encoder }
    }
}

impl ToolHandler for EncodePlantUmlTool {
    fn descriptor(&self) -> ToolDescriptor {
        let id = ToolId::EncodePlantUml.as_str();

        ToolDescriptor {
            id,
            name: id,
            description: "Encodes PlantUML diagram code into a shareable URL for viewing on plantuml.com",
            input_schema: InputSchema::single_string(
                "plantumlCode",
                "Valid PlantUML diagram code (must start with @startuml and end with @enduml)",
            ),
        }
    }

    fn call(&self, input: Option<&str>) -> Result<Value, AppError> {
        let diagram = self.encoder.encode_validated(input)?;
        serde_json::to_value(diagram).map_err(|e| AppError::internal(e.to_string()))
    }
}

/// Maps tool names to their handlers.
pub struct ToolRegistry {
    encode_plantuml: EncodePlantUmlTool,
}

impl ToolRegistry {
    pub fn new(encoder: Arc<EncoderService>) -> Self {
        Self {
            encode_plantuml: EncodePlantUmlTool::new(encoder),
        }
    }

    pub fn handler(&self, id: ToolId) -> &dyn ToolHandler {
        match id {
            ToolId::EncodePlantUml => &self.encode_plantuml,
        }
    }

    /// Descriptors for every registered tool.
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        ToolId::ALL
            .into_iter()
            .map(|id| self.handler(id).descriptor())
            .collect()
    }

    /// Resolves `tool_name` and invokes the tool with `input`.
    ///
    /// # Errors
    ///
    /// - [`AppError::ToolNameRequired`] if no name was supplied
    /// - [`AppError::ToolNotFound`] if the name is not registered
    /// - whatever the tool itself returns
    pub fn dispatch(&self, tool_name: Option<&str>, input: Option<&str>) -> Result<Value, AppError> {
        let name = tool_name
            .filter(|name| !name.is_empty())
            .ok_or(AppError::ToolNameRequired)?;

        let id = ToolId::from_name(name).ok_or_else(|| AppError::ToolNotFound(name.to_string()))?;

        tracing::debug!(tool = id.as_str(), "Dispatching tool call");

        self.handler(id).call(input)
    }
}
