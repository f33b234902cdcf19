//! Utility functions shared across the application.
//!
//! - [`plantuml_codec`] - PlantUML token encoding and decoding

pub mod plantuml_codec;
