//! Core domain entities representing the encoder's data model.
//!
//! Entities are plain values computed per call. Nothing here is persisted or
//! shared between requests.
//!
//! # Entity Types
//!
//! - [`EncodedDiagram`] - The token and viewer URL produced for a diagram
//! - [`ToolDescriptor`] - A capability advertised by the tool discovery endpoint

pub mod diagram;
pub mod tool;

pub use diagram::{DEFAULT_VIEWER_BASE_URL, DiagramFormat, EncodedDiagram};
pub use tool::{InputSchema, PropertySchema, ToolDescriptor};
