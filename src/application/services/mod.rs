//! Business logic services for the application layer.

pub mod encoder_service;
pub mod tool_registry;

pub use encoder_service::EncoderService;
pub use tool_registry::{ToolHandler, ToolId, ToolRegistry};
