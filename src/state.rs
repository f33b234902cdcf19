//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{EncoderService, ToolRegistry};

/// Immutable services shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub encoder: Arc<EncoderService>,
    pub tools: Arc<ToolRegistry>,
}

impl AppState {
    /// Builds the state around one encoder, sharing it with the tool registry.
    pub fn new(encoder: EncoderService) -> Self {
        let encoder = Arc::new(encoder);
        let tools = Arc::new(ToolRegistry::new(encoder.clone()));

        Self { encoder, tools }
    }
}
